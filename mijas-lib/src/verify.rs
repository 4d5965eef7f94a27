// Round-trip check of an analysis candidate against synthesis.

use serde::{Deserialize, Serialize};

use crate::inverse::inverse;
use crate::types::{attr, Degree, Diagnostic, StemVariant};

/// Ids with a permanent asymmetry between the two directions.
const EXEMPT: &[u16] = &[18, 20, 34, 35];

/// Ids where a mismatch means the candidate is unsound.
const STRICT: &[u16] = &[1, 2, 5, 6, 7, 8, 9, 14, 15, 17, 23, 26, 36, 37];

/// Outcome of [`verify_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verification {
    /// The id is never checked.
    Exempt,
    /// Synthesis reproduced the original stem.
    Reproduced,
    /// A known literal exception that synthesis cannot reproduce.
    LiteralException,
    /// Mismatch under a strict id; the candidate should be discarded.
    Rejected(Diagnostic),
    /// Mismatch under any other id; logged only.
    Advisory(Diagnostic),
}

impl Verification {
    /// Everything but [`Verification::Rejected`] passes.
    pub fn passed(&self) -> bool {
        !matches!(self, Verification::Rejected(_))
    }

    /// The [`Diagnostic::VerificationMismatch`] behind a failed round trip.
    pub fn mismatch(&self) -> Option<&Diagnostic> {
        match self {
            Verification::Rejected(d) | Verification::Advisory(d) => Some(d),
            _ => None,
        }
    }
}

/// True unless `candidate` is an unsound analysis of `original_stem`.
pub fn verify(
    candidate: &StemVariant,
    original_stem: &str,
    id: u16,
    third_stem: &str,
    proper_name: bool,
) -> bool {
    verify_report(candidate, original_stem, id, third_stem, proper_name).passed()
}

/// Synthesises `candidate` back under `id` and checks the result contains
/// `original_stem`, ignoring case.
pub fn verify_report(
    candidate: &StemVariant,
    original_stem: &str,
    id: u16,
    third_stem: &str,
    proper_name: bool,
) -> Verification {
    if EXEMPT.contains(&id) {
        return Verification::Exempt;
    }
    // The future stem carries the -ī of the infinitive stem it is compared with.
    let third_stem = match id {
        6 => third_stem.strip_suffix('ī').unwrap_or(third_stem),
        _ => third_stem,
    };
    check(candidate, original_stem, id, third_stem, proper_name)
}

fn check(
    candidate: &StemVariant,
    original_stem: &str,
    id: u16,
    third_stem: &str,
    proper_name: bool,
) -> Verification {
    let superlative = candidate.is_matching(attr::DEGREE, Degree::Superlative.as_str());
    let variants = inverse(&candidate.stem, id, third_stem, superlative, proper_name);
    let regenerated: Vec<String> = variants.into_iter().map(|v| v.stem).collect();

    let original = original_stem.to_lowercase();
    if regenerated.iter().any(|s| s.to_lowercase() == original) {
        return Verification::Reproduced;
    }

    let strict = STRICT.contains(&id);
    if strict {
        if id == 7 && candidate.stem.ends_with("dod") {
            return Verification::LiteralException;
        }
        // Sentence-initial capitals look like proper names; retry as common.
        if proper_name {
            return check(candidate, original_stem, id, third_stem, false);
        }
    }

    let mismatch = Diagnostic::VerificationMismatch {
        original: original_stem.to_string(),
        candidate: candidate.stem.clone(),
        id,
        regenerated,
    };
    tracing::debug!("{mismatch}");
    if strict {
        Verification::Rejected(mismatch)
    } else {
        Verification::Advisory(mismatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::forward;

    #[test]
    fn test_exempt_ids_always_pass() {
        let v = StemVariant::new("anything");
        for id in [18, 20, 34, 35] {
            assert_eq!(
                verify_report(&v, "else", id, "", false),
                Verification::Exempt
            );
        }
    }

    #[test]
    fn test_reproduced_ignores_case() {
        let v = StemVariant::new("lāc");
        assert_eq!(
            verify_report(&v, "LĀČ", 1, "", false),
            Verification::Reproduced
        );
        assert_eq!(Verification::Reproduced.mismatch(), None);
    }

    #[test]
    fn test_strict_id_rejects_unsound_candidate() {
        let outcome = verify_report(&StemVariant::new("neš"), "nes", 7, "nes", false);
        assert_eq!(outcome, Verification::Reproduced);
        let outcome = verify_report(&StemVariant::new("nes"), "kož", 7, "kod", false);
        assert!(matches!(outcome, Verification::Rejected(_)));
        assert!(!outcome.passed());
    }

    #[test]
    fn test_dod_literal_exception() {
        let outcome = verify_report(&StemVariant::new("pārdod"), "pārdodi", 7, "pārdev", false);
        assert_eq!(outcome, Verification::LiteralException);
    }

    #[test]
    fn test_proper_name_retry() {
        // As a proper name "Vinkst" synthesises "Vinksš"; the common-noun retry gives "Vinkš".
        let candidate = StemVariant::new("Vinkst");
        assert!(verify(&candidate, "Vinkš", 1, "Vinkš", true));
        assert!(!verify(&candidate, "Vinksš", 1, "Vinksš", false));
    }

    #[test]
    fn test_other_ids_are_advisory() {
        let outcome = verify_report(&StemVariant::new("zil"), "zaļ", 3, "zaļ", false);
        let expected = Diagnostic::VerificationMismatch {
            original: "zaļ".into(),
            candidate: "zil".into(),
            id: 3,
            regenerated: vec!["zil".into(), "zilāk".into()],
        };
        assert_eq!(outcome.mismatch(), Some(&expected));
        assert_eq!(outcome, Verification::Advisory(expected));
        assert!(outcome.passed());
    }

    #[test]
    fn test_rejection_names_the_regenerated_stems() {
        let outcome = verify_report(&StemVariant::new("lāc"), "lāks", 1, "lāks", false);
        let Verification::Rejected(mismatch) = &outcome else {
            panic!("expected a rejection, got {outcome:?}");
        };
        assert_eq!(
            mismatch.to_string(),
            "'lāc' does not regenerate 'lāks' under stem change 1: [lāč]"
        );
    }

    #[test]
    fn test_future_third_stem_drops_i() {
        for v in forward("vedī", 6, false) {
            assert!(
                verify(&v, "vedī", 6, "vedī", false),
                "{} should verify",
                v.stem
            );
        }
    }

    #[test]
    fn test_superlative_candidate_requests_superlative() {
        for v in forward("viszilāk", 3, false) {
            let outcome = verify_report(&v, "viszilāk", 3, "viszilāk", false);
            assert!(outcome.passed(), "{} should pass: {outcome:?}", v.stem);
        }
    }

    #[test]
    fn test_outcome_serializes_with_mismatch_fields() {
        let outcome = verify_report(&StemVariant::new("zil"), "zaļ", 3, "zaļ", false);
        let json = serde_json::to_string(&outcome).expect("should serialize");
        let prefix = r#"{"outcome":"advisory","kind":"verification_mismatch""#;
        assert!(json.starts_with(prefix), "got {json}");
    }
}
