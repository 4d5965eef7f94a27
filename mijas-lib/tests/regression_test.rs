// Regression tests for known edge cases and documented behavior.

use mijas_lib::types::attr;
use mijas_lib::{
    forward, forward_resolution, inverse, inverse_resolution, syllables, verify_report, Degree,
    Diagnostic, StemChange, Verification,
};

fn stems(variants: &[mijas_lib::StemVariant]) -> Vec<&str> {
    variants.iter().map(|v| v.stem.as_str()).collect()
}

#[test]
fn unknown_rule_is_one_diagnostic_in_both_directions() {
    for id in [18, 39, 98, 200, u16::MAX] {
        let f = forward_resolution("rag", id, false);
        assert!(f.variants.is_empty(), "forward {id} should be empty");
        let expected = Diagnostic::UnknownRule {
            stem: "rag".into(),
            id,
        };
        assert_eq!(f.diagnostics, vec![expected]);

        let i = inverse_resolution("rag", id, "rag", true, false);
        assert!(i.variants.is_empty(), "inverse {id} should be empty");
        assert_eq!(i.diagnostics.len(), 1, "inverse {id} should report once");
    }
}

#[test]
fn blank_stem_is_not_an_error() {
    let r = forward_resolution("  ", 999, false);
    assert!(r.variants.is_empty());
    assert!(r.diagnostics.is_empty(), "blank input skips the id check");
}

#[test]
fn rags_keeps_its_velar() {
    // g has no partner under the noun alternation: ragi, ragu.
    let analysed = forward("rag", 1, false);
    assert_eq!(stems(&analysed), vec!["rag"]);
    let synthesised = inverse("rag", 1, "rag", false, false);
    assert_eq!(stems(&synthesised), vec!["rag"]);
}

#[test]
fn noun_alternation_c_and_dz_families() {
    assert_eq!(stems(&inverse("lāc", 1, "lāc", false, false)), vec!["lāč"]);
    assert_eq!(stems(&forward("lāč", 1, false)), vec!["lāc"]);
    assert_eq!(stems(&forward("brīž", 1, false)), vec!["brīz", "brīd"]);
    let v = inverse("brīd", 1, "brīd", false, false);
    assert_eq!(stems(&v), vec!["brīž"]);
}

#[test]
fn zil_synthesis_with_superlative() {
    let v = inverse("zil", 3, "zil", true, false);
    let got: Vec<_> = v.iter().map(|v| (v.stem.as_str(), v.degree())).collect();
    assert_eq!(
        got,
        vec![
            ("zil", Some(Degree::Positive)),
            ("zilāk", Some(Degree::Comparative)),
            ("viszilāk", Some(Degree::Superlative)),
        ]
    );
}

#[test]
fn rule_32_superlative_builds_on_the_comparative() {
    // Every -lē stem, gulē included, puts vis- in front of the alternated stem.
    let v = inverse("gulē", 32, "gulē", true, false);
    let got: Vec<_> = v.iter().map(|v| (v.stem.as_str(), v.degree())).collect();
    assert_eq!(
        got,
        vec![
            ("guļ", Some(Degree::Comparative)),
            ("visguļ", Some(Degree::Superlative)),
        ]
    );
    let v = inverse("vēlē", 32, "vēlē", true, false);
    assert_eq!(stems(&v), vec!["vēļ", "visvēļ"]);
    let v = inverse("sēdē", 32, "sēdē", true, false);
    assert_eq!(stems(&v), vec!["sēž", "vissēž"]);

    let v = forward("visguļ", 32, false);
    assert_eq!(stems(&v), vec!["gulē"]);
    assert_eq!(v[0].degree(), Some(Degree::Superlative));
}

#[test]
fn syllable_examples() {
    assert_eq!(syllables(""), 0);
    assert_eq!(syllables("a"), 1);
    assert_eq!(syllables("draugs"), 1);
    assert_eq!(syllables("valoda"), 3);
}

#[test]
fn ltg_overlapping_prefix_and_suffix() {
    let cases = [
        ("vysuok", 103),
        ("vysuok", 104),
        ("vysuok", 106),
        ("vysuok", 108),
        ("vysuoka", 105),
    ];
    for (stem, id) in cases {
        let r = forward_resolution(stem, id, false);
        assert!(r.variants.is_empty(), "{stem} under {id}");
        let expected = Diagnostic::BoundsViolation {
            stem: stem.into(),
            id,
        };
        assert_eq!(r.diagnostics, vec![expected], "{stem} under {id}");
    }
}

#[test]
fn ltg_adverb_gradation() {
    let v = forward("vyszyluok", 109, false);
    assert_eq!(stems(&v), vec!["zyl", "zyli", "zyla", "zylai"]);
    for v in &v {
        assert!(v.is_matching(attr::NORMATIVE, attr::UNDESIRABLE));
    }
    let v = forward("zyluok", 109, false);
    assert!(v.iter().all(|v| v.degree() == Some(Degree::Comparative)));
}

#[test]
fn debitive_needs_prefix_and_length() {
    assert!(forward("jāk", 4, false).is_empty());
    assert!(forward("iet", 37, false).is_empty());
    assert!(forward("juok", 150, false).is_empty());
    assert_eq!(stems(&forward("jāsaka", 31, false)), vec!["sacī"]);
}

#[test]
fn second_person_exception_lists() {
    // mest and cirst keep -t; dot, vest and ēst keep -d, sēdēt does not.
    let cases = [
        ("met", "met"),
        ("cērt", "cērt"),
        ("dod", "dod"),
        ("ved", "ved"),
        ("ēd", "ēd"),
        ("sēd", "sēž"),
    ];
    for (stem, expected) in cases {
        assert_eq!(stems(&forward(stem, 7, false)), vec![expected], "{stem}");
    }
}

#[test]
fn verification_outcomes() {
    let nes = forward("nes", 7, false);
    for v in &nes {
        let outcome = verify_report(v, "nes", 7, "nes", false);
        assert_eq!(outcome, Verification::Reproduced, "{}", v.stem);
    }
    let bogus = mijas_lib::StemVariant::new("lāc");
    let outcome = verify_report(&bogus, "lāks", 1, "lāks", false);
    assert!(matches!(outcome, Verification::Rejected(_)));
    let outcome = verify_report(&bogus, "lāks", 20, "lāks", false);
    assert_eq!(outcome, Verification::Exempt);
}

#[test]
fn catalog_listing_is_complete() {
    let ids: Vec<u16> = StemChange::all().map(|c| c.id()).collect();
    assert_eq!(ids.first(), Some(&0));
    assert_eq!(ids.last(), Some(&167));
    assert!(!ids.contains(&18), "18 is retired");
    for id in [4, 5, 12, 19, 28, 29, 31, 37, 150, 151, 152, 153, 160, 167] {
        assert!(ids.contains(&id), "composite {id} should be listed");
    }
}
