// Suffix/prefix helpers over stems. Lengths are counted in characters, never bytes.

/// A prefix and a suffix that overlap inside the stem they were matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("prefix and suffix overlap within the stem")]
pub(crate) struct OutOfBounds;

pub(crate) fn char_len(stem: &str) -> usize {
    stem.chars().count()
}

pub(crate) fn ends_with_any(stem: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| stem.ends_with(s))
}

/// Drops the last character. An empty stem stays empty.
pub(crate) fn chop(stem: &str) -> &str {
    match stem.char_indices().next_back() {
        Some((idx, _)) => &stem[..idx],
        None => stem,
    }
}

/// The part of `stem` strictly between `prefix` and `suffix`.
///
/// Fails when the stem does not carry both affixes or when they overlap,
/// e.g. "vysuok" split as "vysu" + "uok".
pub(crate) fn between<'a>(
    stem: &'a str,
    prefix: &str,
    suffix: &str,
) -> Result<&'a str, OutOfBounds> {
    if !stem.starts_with(prefix) || !stem.ends_with(suffix) {
        return Err(OutOfBounds);
    }
    let end = stem
        .len()
        .checked_sub(suffix.len())
        .filter(|&end| end >= prefix.len())
        .ok_or(OutOfBounds)?;
    Ok(&stem[prefix.len()..end])
}

/// First table row whose suffix ends `stem`, with the remaining base.
///
/// Tables are ordered longest cluster first, so "kš" is tried before "š".
fn match_suffix<'s, 't, T>(
    stem: &'s str,
    table: &'t [(&'static str, T)],
) -> Option<(&'s str, &'static str, &'t T)> {
    for (suffix, value) in table {
        if let Some(base) = stem.strip_suffix(*suffix) {
            return Some((base, *suffix, value));
        }
    }
    None
}

/// A suffix and the endings it alternates with.
pub(crate) type Rewrite = (&'static str, &'static [&'static str]);

/// One stem produced by a [`Rewrite`] row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Rewritten {
    pub(crate) stem: String,
    pub(crate) suffix: &'static str,
    pub(crate) ending: &'static str,
}

impl Rewritten {
    /// "ending -> suffix", the lemma side first when analysing.
    pub(crate) fn label(&self) -> String {
        format!("{} -> {}", self.ending, self.suffix)
    }

    /// "suffix -> ending", the lemma side first when synthesising.
    pub(crate) fn reverse_label(&self) -> String {
        format!("{} -> {}", self.suffix, self.ending)
    }
}

/// Applies the first row of `table` matching the end of `stem`. `None` when
/// no row matches; a matching row with no endings yields an empty list.
pub(crate) fn rewrite(stem: &str, table: &[Rewrite]) -> Option<Vec<Rewritten>> {
    let (base, suffix, endings) = match_suffix(stem, table)?;
    let stems = endings
        .iter()
        .map(|&ending| Rewritten {
            stem: format!("{base}{ending}"),
            suffix,
            ending,
        })
        .collect();
    Some(stems)
}
