// Human-readable formatting of stem variants.

use crate::types::{Resolution, StemVariant};

/// Convert a variant to bracketed `{stem:Attr=Value,...}` format.
///
/// Format:
///   Plain:      `{rag}`
///   Attributes: `{zil:Degree=Comparative}` (insertion order)
///   Provenance: `{lās|s -> š}` (after any attributes)
pub fn to_bracketed(v: &StemVariant) -> String {
    let mut out = format!("{{{}", v.stem);
    if !v.attributes.is_empty() {
        let attrs = v
            .attributes
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        out.push(':');
        out.push_str(&attrs);
    }
    if let Some(provenance) = &v.provenance {
        out.push('|');
        out.push_str(provenance);
    }
    out.push('}');
    out
}

/// Format every variant of a resolution, comma separated.
pub fn resolution_to_bracketed(r: &Resolution) -> String {
    r.variants
        .iter()
        .map(to_bracketed)
        .collect::<Vec<_>>()
        .join(", ")
}
