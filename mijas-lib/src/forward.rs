// Forward engine: surface stem to the lemma-oriented stems it may come from.

use crate::catalog::{Alternation as A, StemChange};
use crate::latgalian::{self, hard_to_soft_unambiguous, soft_to_hard};
use crate::stem::{between, char_len, chop, ends_with_any, rewrite, OutOfBounds, Rewrite};
use crate::syllables::syllables;
use crate::types::{Degree, Diagnostic, MijaError, Resolution, StemVariant};

/// Analysis: every lemma-side stem that `stem` may be an alternated form of
/// under stem change `id`. Empty for a blank stem, a missing composite
/// prefix or an unknown id.
pub fn forward(stem: &str, id: u16, proper_name: bool) -> Vec<StemVariant> {
    forward_resolution(stem, id, proper_name).variants
}

/// [`forward`] together with the diagnostics raised by the call.
pub fn forward_resolution(stem: &str, id: u16, proper_name: bool) -> Resolution {
    let mut resolution = Resolution::default();
    if stem.trim().is_empty() {
        return resolution;
    }
    let change = match StemChange::try_from(id) {
        Ok(change) => change,
        Err(err) => {
            resolution.report(Diagnostic::from_error(err, stem));
            return resolution;
        }
    };
    let Some(inner_stem) = change.analysis_stem(stem) else {
        return resolution;
    };
    let inner = change.inner();
    tracing::trace!(stem, id, inner = inner.code(), proper_name, "forward");

    if apply(inner, &inner_stem, &mut resolution.variants).is_err() {
        let err = MijaError::BoundsViolation {
            stem: stem.to_string(),
            id,
        };
        resolution.report(Diagnostic::from_error(err, stem));
    }
    resolution
}

fn apply(alt: A, s: &str, out: &mut Vec<StemVariant>) -> Result<(), OutOfBounds> {
    match alt {
        A::Unchanged => out.push(StemVariant::new(s)),
        A::NounConsonant => noun_consonant(s, out),
        A::ThirdConjStemLoss => {
            for ending in ["ā", "ī", "ē"] {
                out.push(StemVariant::new(format!("{s}{ending}")));
            }
        }
        A::AdjectiveDegree => adjective_degree(s, out)?,
        A::FirstConjFuture => first_conj_future(s, out),
        A::FirstConjSecondPerson => first_conj_second_person(s, false, out),
        A::FirstConjSecondPersonLong => first_conj_second_person(s, true, out),
        A::ThirdConjAms => third_conj_ams(s, out),
        A::ThirdConjThirdPerson => third_conj_third_person(s, out),
        A::AdverbDegreeI => {
            if let Some(base) = s.strip_suffix('i') {
                out.push(StemVariant::graded(base, Degree::Positive));
            }
            if s.ends_with("āk") {
                out.push(degree_base(s, "āk")?);
            }
        }
        A::PastActiveParticiple => {
            if !s.ends_with('c') && !s.ends_with("dz") {
                out.push(StemVariant::new(s));
            }
            if let Some(base) = s.strip_suffix('k') {
                out.push(StemVariant::new(format!("{base}c")));
            }
            if let Some(base) = s.strip_suffix('g') {
                out.push(StemVariant::new(format!("{base}dz")));
            }
        }
        A::DegreeOnly => {
            if s.ends_with("āk") {
                out.push(degree_base(s, "āk")?);
            }
        }
        A::FirstConjIsParticiple => {
            if let Some(base) = s.strip_suffix('c') {
                out.push(StemVariant::new(format!("{base}k")));
                out.push(StemVariant::new(s));
            } else if let Some(base) = s.strip_suffix("dz") {
                out.push(StemVariant::new(format!("{base}g")));
                out.push(StemVariant::new(s));
            } else {
                out.push(StemVariant::new(s));
            }
        }
        A::SToZ => {
            // Over-generates "pūsdams"; verification against the past stem filters it.
            out.push(StemVariant::new(s));
            if let Some(base) = s.strip_suffix('z') {
                out.push(StemVariant::new(format!("{base}s")));
            }
        }
        A::ShanaNoun => {
            if !s.ends_with('s') && !s.ends_with('z') {
                out.push(StemVariant::new(s));
                out.push(StemVariant::new(format!("{s}s")));
                out.push(StemVariant::new(format!("{s}z")));
            }
        }
        A::ShortVocative => {
            if syllables(s) >= 2 || s.ends_with("iņ") || s.ends_with("īt") {
                out.push(StemVariant::new(s));
            }
        }
        A::ThirdConjFirstPerson => third_conj_first_person(s, out),
        A::ParticipleDegree => {
            let (degree, base) = split_superlative(s);
            out.push(StemVariant::graded(base, degree));
        }
        A::UsToUsh => {
            if let Some(base) = s.strip_suffix("us") {
                out.push(StemVariant::new(format!("{base}uš")));
            }
        }
        A::ThirdConjStemLossDegree => {
            let (degree, base) = split_superlative(s);
            for ending in ["ā", "ī", "ē"] {
                out.push(StemVariant::graded(format!("{base}{ending}"), degree));
            }
        }
        A::ThirdConjAmsDegree => {
            let (degree, base) = split_superlative(s);
            let mut plain = Vec::new();
            third_conj_ams(base, &mut plain);
            for v in plain {
                out.push(StemVariant::graded(v.stem, degree));
            }
        }
        A::ThirdConjImperative => third_conj_imperative(s, out),
        A::ThirdConjAmsAlternating => {
            push_plain(s, THIRD_CONJ_AMS_ALTERNATING, out);
        }
        A::ThirdConjThirdPersonAlternating => {
            if s.ends_with("vajadz") {
                return Ok(());
            }
            if !push_plain(s, THIRD_CONJ_THIRD_PERSON_ALTERNATING, out) && s.ends_with("vajag") {
                out.push(StemVariant::new(format!("{}dzē", chop(s))));
            }
        }
        A::ThirdConjFirstPersonDegree => {
            let (degree, base) = split_superlative(s);
            push_graded(base, THIRD_CONJ_FIRST_PERSON_DEGREE, degree, out);
        }
        A::ThirdConjAmsAlternatingDegree => {
            let (degree, base) = split_superlative(s);
            push_graded(base, THIRD_CONJ_AMS_ALTERNATING_DEGREE, degree, out);
        }
        A::AdjectiveDative => {
            if s.ends_with("āka") && char_len(s) > 4 {
                if s.starts_with("vis") {
                    let base = between(s, "vis", "āka")?;
                    out.push(StemVariant::graded(base, Degree::Superlative));
                }
                if let Some(base) = s.strip_suffix("āka") {
                    out.push(StemVariant::graded(base, Degree::Comparative));
                }
            }
            dative_positive(s, out);
        }
        A::SubstantivizedDative => dative_positive(s, out),
        A::Iet => {
            out.push(StemVariant::new(s));
            if let Some(base) = s.strip_suffix("iet") {
                out.push(StemVariant::new(format!("{base}ej")));
            }
        }
        A::AdverbDegree => adverb_degree(s, out)?,

        A::LtgSoftenOnly => {
            let soft = hard_to_soft_unambiguous(s);
            out.push(StemVariant::labelled(soft, "ļņķģ -> lnkg"));
        }
        A::LtgLetter => {
            let soft = hard_to_soft_unambiguous(s);
            let changed = soft != s;
            out.push(StemVariant::labelled(soft, LETTER_LABEL));
            if changed {
                out.push(StemVariant::labelled(s, LETTER_LABEL));
            }
        }
        A::LtgNounConsonant => push_labelled_or_same(s, LTG_NOUN_CONSONANT, out),
        A::LtgNounConsonantFront => push_labelled_or_same(s, LTG_NOUN_CONSONANT_FRONT, out),
        A::LtgAdjectiveDegree => {
            if s.ends_with("uok") && char_len(s) > 3 {
                let (degree, base) = ltg_degree_base(s, "uok")?;
                out.push(latgalian::graded(base, degree));
            }
            out.push(latgalian::graded(s, Degree::Positive));
        }
        A::LtgAdjectiveDegreeLetter => {
            if s.ends_with("uok") && char_len(s) > 3 {
                let (degree, base) = ltg_degree_base(s, "uok")?;
                out.push(latgalian::graded(base, degree));
            } else {
                let soft = hard_to_soft_unambiguous(s);
                out.push(latgalian::graded(soft, Degree::Positive));
            }
        }
        A::LtgAdjectiveDative => {
            if s.ends_with("uoka") && char_len(s) > 4 {
                let (degree, base) = ltg_degree_base(s, "uoka")?;
                out.push(latgalian::graded(base, degree));
            }
            if let Some(base) = s.strip_suffix('a') {
                out.push(latgalian::graded(base, Degree::Positive));
            } else if s.ends_with('ē') || s.ends_with('e') {
                out.push(latgalian::graded(format!("{s}j"), Degree::Positive));
            }
        }
        A::LtgDegreeOnly => {
            if s.ends_with("uok") && char_len(s) > 3 {
                let (degree, base) = ltg_degree_base(s, "uok")?;
                out.push(latgalian::graded(base, degree));
            }
        }
        A::LtgLetterInverse => out.push(StemVariant::new(soft_to_hard(s))),
        A::LtgLetterInverseDegree => {
            if s.ends_with("uok") && char_len(s) > 3 {
                let (degree, base) = ltg_degree_base(s, "uok")?;
                out.push(latgalian::graded(soft_to_hard(base), degree));
            }
        }
        A::LtgAdverbDegree => {
            if s.ends_with("uok") && char_len(s) > 4 {
                let (degree, base) = ltg_degree_base(s, "uok")?;
                for ending in ["", "i", "a", "ai"] {
                    out.push(latgalian::graded(format!("{base}{ending}"), degree));
                }
            } else {
                out.push(latgalian::graded(s, Degree::Positive));
            }
        }
        A::LtgSecondConjPresent => {
            push_labelled(s, LTG_SECOND_CONJ_PRESENT, out);
        }
        A::LtgSecondConjPastSingular => {
            push_labelled(s, LTG_SECOND_CONJ_PAST_SINGULAR, out);
        }
        A::LtgSecondConjPastPlural => {
            push_labelled(s, LTG_SECOND_CONJ_PAST_PLURAL, out);
        }
        A::LtgSecondConjFuture => {
            if !push_labelled(s, LTG_SECOND_CONJ_FUTURE, out) && ends_with_any(s, &["uo", "ei"]) {
                out.push(StemVariant::new(s));
            }
        }
        A::LtgSecondConjSupine => {
            if !push_labelled(s, LTG_SECOND_CONJ_SUPINE, out) && ends_with_any(s, &["uo", "ei"]) {
                out.push(StemVariant::new(s));
            }
        }
        A::LtgSecondConjPresentDegree => {
            let (degree, base) = ltg_split_superlative(s);
            push_ltg_graded(base, LTG_SECOND_CONJ_PRESENT, degree, out);
        }
        A::LtgSecondConjSupineDegree => {
            let (degree, base) = ltg_split_superlative(s);
            push_ltg_graded(base, LTG_SECOND_CONJ_SUPINE_DEGREE, degree, out);
        }
        A::LtgSecondConjPastParticiple => {
            if s.ends_with("uo") {
                out.push(StemVariant::new(s));
            } else {
                push_labelled(s, LTG_SECOND_CONJ_PAST_PARTICIPLE, out);
            }
        }
        A::LtgSecondConjPastParticipleDegree => {
            let (degree, base) = ltg_split_superlative(s);
            push_ltg_graded(base, LTG_SECOND_CONJ_PAST_PARTICIPLE_DEGREE, degree, out);
        }
        A::LtgThirdConjEit => out.push(StemVariant::labelled(format!("{s}ei"), "ei -> ")),
        A::LtgThirdConjEitDegree => {
            let (degree, base) = ltg_split_superlative(s);
            out.push(latgalian::graded(format!("{base}ei"), degree));
        }
        A::LtgParticipleDegree => {
            let (degree, base) = ltg_split_superlative(s);
            out.push(latgalian::graded(base, degree));
        }
        A::LtgThirdConjEitConsonant => {
            push_labelled(s, LTG_EIT_CONSONANT, out);
        }
        A::LtgThirdConjEitConsonantDegree => {
            let (degree, base) = ltg_split_superlative(s);
            push_ltg_graded(base, LTG_EIT_CONSONANT, degree, out);
        }
        A::LtgThirdConjEt => out.push(StemVariant::labelled(format!("{s}ē"), "ē -> ")),
        A::LtgThirdConjEtLetter => {
            let hard = soft_to_hard(s);
            out.push(StemVariant::labelled(format!("{hard}ē"), "ē -> "));
        }
        A::LtgThirdConjEtDegree => {
            let (degree, base) = ltg_split_superlative(s);
            out.push(latgalian::graded(format!("{base}ē"), degree));
        }
        A::LtgThirdConjEtLetterDegree => {
            let (degree, base) = ltg_split_superlative(s);
            let hard = soft_to_hard(base);
            out.push(latgalian::graded(format!("{hard}ē"), degree));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Table helpers
// ---------------------------------------------------------------------------

fn push_plain(s: &str, table: &[Rewrite], out: &mut Vec<StemVariant>) -> bool {
    match rewrite(s, table) {
        Some(stems) => {
            out.extend(stems.into_iter().map(|r| StemVariant::new(r.stem)));
            true
        }
        None => false,
    }
}

fn push_labelled(s: &str, table: &[Rewrite], out: &mut Vec<StemVariant>) -> bool {
    match rewrite(s, table) {
        Some(stems) => {
            out.extend(stems.into_iter().map(|r| {
                let label = r.label();
                StemVariant::labelled(r.stem, label)
            }));
            true
        }
        None => false,
    }
}

fn push_labelled_or_same(s: &str, table: &[Rewrite], out: &mut Vec<StemVariant>) {
    if !push_labelled(s, table, out) {
        out.push(StemVariant::new(s));
    }
}

fn push_graded(s: &str, table: &[Rewrite], degree: Degree, out: &mut Vec<StemVariant>) {
    if let Some(stems) = rewrite(s, table) {
        for r in stems {
            out.push(StemVariant::graded(r.stem, degree));
        }
    }
}

fn push_ltg_graded(s: &str, table: &[Rewrite], degree: Degree, out: &mut Vec<StemVariant>) {
    if let Some(stems) = rewrite(s, table) {
        for r in stems {
            out.push(latgalian::graded(r.stem, degree));
        }
    }
}

/// vis- marks a superlative; anything else graded is comparative.
fn split_superlative(s: &str) -> (Degree, &str) {
    match s.strip_prefix("vis") {
        Some(base) => (Degree::Superlative, base),
        None => (Degree::Comparative, s),
    }
}

const LTG_SUPERLATIVE_PREFIXES: &[&str] = &["vysu", "vys"];

fn ltg_split_superlative(s: &str) -> (Degree, &str) {
    LTG_SUPERLATIVE_PREFIXES
        .iter()
        .find_map(|p| s.strip_prefix(p))
        .map_or((Degree::Comparative, s), |base| (Degree::Superlative, base))
}

/// Strips a gradation suffix, and a vis- prefix when present.
fn degree_base(s: &str, suffix: &str) -> Result<StemVariant, OutOfBounds> {
    if s.starts_with("vis") {
        let base = between(s, "vis", suffix)?;
        Ok(StemVariant::graded(base, Degree::Superlative))
    } else {
        let base = s.strip_suffix(suffix).ok_or(OutOfBounds)?;
        Ok(StemVariant::graded(base, Degree::Comparative))
    }
}

fn ltg_degree_base<'a>(s: &'a str, suffix: &str) -> Result<(Degree, &'a str), OutOfBounds> {
    for prefix in LTG_SUPERLATIVE_PREFIXES {
        if s.starts_with(prefix) {
            return Ok((Degree::Superlative, between(s, prefix, suffix)?));
        }
    }
    let base = s.strip_suffix(suffix).ok_or(OutOfBounds)?;
    Ok((Degree::Comparative, base))
}

// ---------------------------------------------------------------------------
// Latvian nouns and adjectives
// ---------------------------------------------------------------------------

const NOUN_CONSONANT: &[Rewrite] = &[
    ("ž", &["z", "d"]),
    ("č", &["c"]),
    ("šļ", &["sl"]),
    ("žļ", &["zl"]),
    ("ļļ", &["ll"]),
    ("ļ", &["l"]),
    ("šņ", &["sn"]),
    ("žņ", &["zn"]),
    ("ļņ", &["ln"]),
    ("ņņ", &["nn"]),
    ("zņ", &[]),
    ("sņ", &[]),
    ("lņ", &[]),
    ("ņ", &["n"]),
];

const LABIAL_J: &[&str] = &["pj", "bj", "mj", "vj", "fj"];

/// Finals that always alternate in the oblique stem, so a bare one cannot
/// be an unaltered form.
const NOUN_ALTERNATING_FINALS: &[&str] = &[
    "p", "b", "m", "v", "t", "d", "c", "z", "s", "n", "l", "f",
];

fn noun_consonant(s: &str, out: &mut Vec<StemVariant>) {
    if let Some(base) = s.strip_suffix('š') {
        if let Some(b) = s.strip_suffix("kš") {
            out.push(StemVariant::labelled(format!("{b}kst"), "kst -> kš"));
        }
        if let Some(b) = s.strip_suffix("nš") {
            out.push(StemVariant::labelled(format!("{b}nst"), "nst -> nš"));
        }
        out.push(StemVariant::labelled(format!("{base}s"), "s -> š"));
        out.push(StemVariant::labelled(format!("{base}t"), "t -> š"));
        return;
    }
    if push_labelled(s, NOUN_CONSONANT, out) {
        return;
    }
    if s.ends_with('j') {
        if ends_with_any(s, LABIAL_J) {
            out.push(StemVariant::labelled(chop(s), "p -> pj"));
        } else {
            out.push(StemVariant::new(s));
        }
    } else if !ends_with_any(s, NOUN_ALTERNATING_FINALS) {
        out.push(StemVariant::new(s));
    }
}

fn adjective_degree(s: &str, out: &mut Vec<StemVariant>) -> Result<(), OutOfBounds> {
    if let Some(base) = s.strip_suffix("āk") {
        if char_len(s) > 3 {
            // Words like "visāds" start with vis- without being superlatives.
            if s.starts_with("vis") {
                let superlative = between(s, "vis", "āk")?;
                out.push(StemVariant::graded(superlative, Degree::Superlative));
            }
            out.push(StemVariant::graded(base, Degree::Comparative));
        }
    }
    out.push(StemVariant::graded(s, Degree::Positive));
    Ok(())
}

fn dative_positive(s: &str, out: &mut Vec<StemVariant>) {
    if let Some(base) = s.strip_suffix('a') {
        out.push(StemVariant::graded(base, Degree::Positive));
    } else if s.ends_with('ē') {
        out.push(StemVariant::graded(format!("{s}j"), Degree::Positive));
    }
}

fn adverb_degree(s: &str, out: &mut Vec<StemVariant>) -> Result<(), OutOfBounds> {
    if !(s.ends_with("āk") && char_len(s) > 3) {
        out.push(StemVariant::graded(s, Degree::Positive));
        return Ok(());
    }
    let graded = degree_base(s, "āk")?;
    let degree = graded.degree().unwrap_or(Degree::Comparative);
    for ending in ["", "i", "u"] {
        let stem = format!("{}{ending}", graded.stem);
        out.push(StemVariant::graded(stem, degree));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Latvian verbs
// ---------------------------------------------------------------------------

fn first_conj_future(s: &str, out: &mut Vec<StemVariant>) {
    if let Some(base) = ["dī", "tī", "sī"].iter().find_map(|e| s.strip_suffix(e)) {
        out.push(StemVariant::new(format!("{base}s")));
    } else if s.ends_with("šī") {
        out.push(StemVariant::new(chop(s)));
    } else if s.ends_with("zī") {
        out.push(StemVariant::new(chop(s)));
        out.push(StemVariant::new(s));
    } else if !ends_with_any(s, &["d", "t", "s", "z"]) {
        out.push(StemVariant::new(s));
    }
}

/// 2nd person finals that keep the -i ending (atrodi, krīti, plūsti).
const SECOND_PERSON_I_FINALS: &[&str] = &[
    "odi", "ūdi", "opi", "ūpi", "oti", "ūti", "īti", "ieti", "sti",
];

/// The same finals before a long ending, without the -i.
const SECOND_PERSON_LONG_FINALS: &[&str] = &["od", "ūd", "op", "ūp", "ot", "ūt", "īt", "st"];

/// Verbs with a bare -t 2nd person (mest, cirst).
const SECOND_PERSON_BARE_T: &[&str] = &["met", "cērt"];

/// Verbs with a bare -d 2nd person (dot, vest). "ēd" also qualifies, "sēd" does not.
const SECOND_PERSON_BARE_D: &[&str] = &["dod", "ved"];

const SECOND_PERSON_UNALTERED: &[&str] = &["š", "ž", "ļ", "k", "g"];

fn first_conj_second_person(s: &str, long_ending: bool, out: &mut Vec<StemVariant>) {
    if let Some(base) = s.strip_suffix('s') {
        out.push(StemVariant::new(format!("{base}š")));
        out.push(StemVariant::new(s));
    } else if !long_ending && ends_with_any(s, SECOND_PERSON_I_FINALS) {
        out.push(StemVariant::new(chop(s)));
    } else if long_ending && ends_with_any(s, SECOND_PERSON_LONG_FINALS) {
        out.push(StemVariant::new(s));
    } else if let Some(base) = s.strip_suffix('t') {
        if ends_with_any(s, SECOND_PERSON_BARE_T) {
            out.push(StemVariant::new(s));
        } else {
            out.push(StemVariant::new(format!("{base}š")));
        }
    } else if let Some(base) = s.strip_suffix('d') {
        if ends_with_any(s, SECOND_PERSON_BARE_D) || (s.ends_with("ēd") && !s.ends_with("sēd")) {
            out.push(StemVariant::new(s));
        } else {
            out.push(StemVariant::new(format!("{base}ž")));
        }
    } else if let Some(base) = s.strip_suffix('l') {
        out.push(StemVariant::new(format!("{base}ļ")));
    } else if !s.ends_with("ņem") && (s.ends_with('m') || s.ends_with('b')) {
        out.push(StemVariant::new(format!("{s}j")));
    } else if s.ends_with('p') {
        out.push(StemVariant::new(s));
        out.push(StemVariant::new(format!("{s}j")));
    } else if let Some(base) = s.strip_suffix('c') {
        out.push(StemVariant::new(format!("{base}k")));
        out.push(StemVariant::new(s));
    } else if s.ends_with('z') && !s.ends_with("dz") {
        out.push(StemVariant::new(format!("{}ž", chop(s))));
    } else if !ends_with_any(s, SECOND_PERSON_UNALTERED) {
        out.push(StemVariant::new(s));
    }
}

/// Long -ā- stems that keep the -ā- (mainās, sargā).
const LONG_A_FINALS: &[&str] = &["inā", "sargā"];
const SHORT_A_FINALS: &[&str] = &["ina", "sarga"];

fn third_conj_ams(s: &str, out: &mut Vec<StemVariant>) {
    // Not exclusive: "mainās" also needs the -īties reading.
    if ends_with_any(s, LONG_A_FINALS) {
        out.push(StemVariant::new(s));
    }
    if let Some(base) = s.strip_suffix('ā') {
        out.push(StemVariant::new(format!("{base}ī")));
    }
    if let Some(base) = s.strip_suffix('a') {
        out.push(StemVariant::new(format!("{base}ē")));
        if !ends_with_any(s, SHORT_A_FINALS) {
            out.push(StemVariant::new(format!("{base}ā")));
        }
    }
}

fn third_conj_third_person(s: &str, out: &mut Vec<StemVariant>) {
    if ends_with_any(s, SHORT_A_FINALS) {
        out.push(StemVariant::new(format!("{}ā", chop(s))));
    }
    if let Some(base) = s.strip_suffix('a') {
        out.push(StemVariant::new(format!("{base}ī")));
    } else {
        for ending in ["ē", "ā", "o"] {
            out.push(StemVariant::new(format!("{s}{ending}")));
        }
    }
}

/// Stems taking an alternative -ī- infinitive (locīt, mocīt, urcīt).
const ALTERNATIVE_I_FINALS: &[&str] = &["loc", "moc", "urc"];

const THIRD_CONJ_FIRST_PERSON: &[Rewrite] = &[
    ("k", &["cī", "cē"]),
    ("g", &["dzī", "dzē"]),
    ("ž", &["dē"]),
];

fn third_conj_first_person(s: &str, out: &mut Vec<StemVariant>) {
    if ends_with_any(s, &["guļ", "gul"]) {
        out.push(StemVariant::new(format!("{}lē", chop(s))));
    }
    push_plain(s, THIRD_CONJ_FIRST_PERSON, out);
    if ends_with_any(s, ALTERNATIVE_I_FINALS) {
        out.push(StemVariant::new(format!("{s}ī")));
    }
}

fn third_conj_imperative(s: &str, out: &mut Vec<StemVariant>) {
    if s.ends_with("gul") {
        out.push(StemVariant::new(format!("{}lē", chop(s))));
    }
    if s.ends_with("tec") {
        out.push(StemVariant::new(format!("{s}ē")));
    } else if s.ends_with('k') && !s.ends_with("tek") {
        let base = chop(s);
        out.push(StemVariant::new(format!("{base}cī")));
        out.push(StemVariant::new(format!("{base}cē")));
    } else if let Some(base) = s.strip_suffix('g') {
        out.push(StemVariant::new(format!("{base}dzī")));
        out.push(StemVariant::new(format!("{base}dzē")));
    } else if ends_with_any(s, ALTERNATIVE_I_FINALS) {
        out.push(StemVariant::new(format!("{s}ī")));
    } else {
        out.push(StemVariant::new(format!("{s}ē")));
    }
}

const THIRD_CONJ_AMS_ALTERNATING: &[Rewrite] = &[
    ("kā", &["cī"]),
    ("gā", &["dzī"]),
    ("ka", &["cē"]),
    ("ža", &["dē"]),
    ("ļa", &["lē"]),
    ("ga", &["dzē"]),
];

const THIRD_CONJ_THIRD_PERSON_ALTERNATING: &[Rewrite] = &[
    ("ka", &["cī"]),
    ("ga", &["dzī"]),
    ("k", &["cē"]),
    ("ž", &["dē"]),
    ("ļ", &["lē"]),
];

const THIRD_CONJ_FIRST_PERSON_DEGREE: &[Rewrite] = &[
    ("k", &["cī", "cē"]),
    ("g", &["dzī", "dzē"]),
    ("ž", &["dē"]),
    ("ļ", &["lē"]),
];

const THIRD_CONJ_AMS_ALTERNATING_DEGREE: &[Rewrite] = &[
    ("kā", &["cī"]),
    ("gā", &["dzī"]),
    ("ka", &["cē"]),
    ("ga", &["dzē"]),
    ("ža", &["dē"]),
    ("guļa", &["gulē"]),
];

// ---------------------------------------------------------------------------
// Latgalian
// ---------------------------------------------------------------------------

const LETTER_LABEL: &str = "lnkg -> lļnņkķgģ";

const LTG_NOUN_CONSONANT: &[Rewrite] = &[
    ("kš", &["kst"]),
    ("šļ", &["sl"]),
    ("žļ", &["zl"]),
    ("šm", &["sm"]),
    ("šņ", &["sn"]),
    ("žņ", &["zn"]),
    ("ļļ", &["ll"]),
    ("ņņ", &["nn"]),
    ("č", &["c"]),
    ("ž", &["d", "z"]),
    ("š", &["t", "s"]),
    ("ķ", &["k"]),
    ("ļ", &["l"]),
    ("ņ", &["n"]),
];

const LTG_NOUN_CONSONANT_FRONT: &[Rewrite] = &[
    ("kš", &["kst"]),
    ("šl", &["šļ", "sl"]),
    ("žl", &["žļ", "zl"]),
    ("šm", &["šm", "sm"]),
    ("šn", &["šņ", "sn"]),
    ("žn", &["žņ", "zn"]),
    ("ll", &["ļļ"]),
    ("nn", &["ņņ"]),
    ("č", &["c"]),
    ("š", &["t", "s"]),
    ("ž", &["d", "z"]),
    ("l", &["ļ"]),
    ("n", &["ņ"]),
    ("k", &["ķ"]),
    ("g", &["ģ"]),
];

const LTG_SECOND_CONJ_PRESENT: &[Rewrite] = &[("e", &["ei", "ē"]), ("o", &["uo"])];

const LTG_SECOND_CONJ_PAST_SINGULAR: &[Rewrite] = &[
    ("uoj", &["uo"]),
    ("ov", &["uo"]),
    ("iej", &["ē"]),
    ("ej", &["ie"]),
];

const LTG_SECOND_CONJ_PAST_PLURAL: &[Rewrite] = &[
    ("uoj", &["uo"]),
    ("ov", &["uo"]),
    ("ēj", &["ē"]),
    ("ej", &["ie"]),
];

const LTG_SECOND_CONJ_FUTURE: &[Rewrite] = &[("ie", &["ē"])];

const LTG_SECOND_CONJ_SUPINE: &[Rewrite] = &[("ā", &["ē"])];

const LTG_SECOND_CONJ_SUPINE_DEGREE: &[Rewrite] = &[
    ("ā", &["ē"]),
    ("uo", &["uo"]),
    ("ei", &["ei"]),
];

const LTG_SECOND_CONJ_PAST_PARTICIPLE: &[Rewrite] = &[("ie", &["ē"]), ("e", &["ie"])];

const LTG_SECOND_CONJ_PAST_PARTICIPLE_DEGREE: &[Rewrite] = &[
    ("ie", &["ē"]),
    ("e", &["ie"]),
    ("uo", &["uo"]),
];

const LTG_EIT_CONSONANT: &[Rewrite] = &[
    ("ld", &["ļdei"]),
    ("nd", &["ņdei"]),
    ("g", &["dzei"]),
    ("k", &["cei"]),
    ("ļ", &["lei"]),
    ("ņ", &["nei"]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::attr;

    fn stems(stem: &str, id: u16) -> Vec<String> {
        forward(stem, id, false)
            .into_iter()
            .map(|v| v.stem)
            .collect()
    }

    #[test]
    fn test_blank_stem_gives_nothing() {
        assert!(forward("", 1, false).is_empty());
        assert!(forward("   ", 0, false).is_empty());
    }

    #[test]
    fn test_unknown_rule_reports_once() {
        let r = forward_resolution("rag", 18, false);
        assert!(r.variants.is_empty());
        assert_eq!(r.diagnostics.len(), 1, "should have exactly one diagnostic");
    }

    #[test]
    fn test_noun_consonant_sh_ambiguity() {
        assert_eq!(stems("lāš", 1), vec!["lās", "lāt"]);
        assert_eq!(stems("bikš", 1), vec!["bikst", "biks", "bikt"]);
        let v = forward("lāš", 1, false);
        assert_eq!(v[1].provenance.as_deref(), Some("t -> š"));
    }

    #[test]
    fn test_noun_consonant_clusters_before_singles() {
        assert_eq!(stems("brāļ", 1), vec!["brāl"]);
        assert_eq!(stems("kāšļ", 1), vec!["kāsl"]);
        assert_eq!(stems("zemj", 1), vec!["zem"]);
        assert_eq!(stems("vārn", 1), Vec::<String>::new());
        assert!(stems("azņ", 1).is_empty(), "zņ has no source");
    }

    #[test]
    fn test_noun_consonant_unaltered_finals() {
        assert_eq!(stems("rag", 1), vec!["rag"]);
        assert_eq!(stems("kaķ", 1), vec!["kaķ"]);
        assert!(stems("māt", 1).is_empty());
    }

    #[test]
    fn test_adjective_degree() {
        let v = forward("viszilāk", 3, false);
        let got: Vec<_> = v.iter().map(|v| (v.stem.as_str(), v.degree())).collect();
        assert_eq!(
            got,
            vec![
                ("zil", Some(Degree::Superlative)),
                ("viszil", Some(Degree::Comparative)),
                ("viszilāk", Some(Degree::Positive)),
            ]
        );
    }

    #[test]
    fn test_second_person_exceptions() {
        assert_eq!(stems("met", 7), vec!["met"]);
        assert_eq!(stems("pūt", 7), vec!["pūš"]);
        assert_eq!(stems("dod", 7), vec!["dod"]);
        assert_eq!(stems("ēd", 7), vec!["ēd"]);
        assert_eq!(stems("sēd", 7), vec!["sēž"]);
        assert_eq!(stems("atrodi", 7), vec!["atrod"]);
        assert_eq!(stems("atrod", 23), vec!["atrod"]);
        assert_eq!(stems("cep", 7), vec!["cep", "cepj"]);
        assert_eq!(stems("ņem", 7), vec!["ņem"]);
    }

    #[test]
    fn test_third_conj_alternating() {
        assert_eq!(stems("sak", 20), vec!["sacī", "sacē"]);
        assert_eq!(stems("guļ", 20), vec!["gulē"]);
        assert_eq!(stems("vajag", 30), vec!["vajadzē"]);
        assert!(stems("vajadz", 30).is_empty());
        assert_eq!(stems("saka", 30), vec!["sacī"]);
    }

    #[test]
    fn test_debitive_prefix() {
        assert_eq!(stems("jāiet", 37), vec!["iet", "ej"]);
        assert!(stems("jāk", 4).is_empty(), "too short for jā-");
        assert!(stems("iet", 37).is_empty(), "missing jā-");
        let r = forward_resolution("iet", 37, false);
        assert!(r.diagnostics.is_empty());
    }

    #[test]
    fn test_ltg_overlapping_affixes_is_bounds_violation() {
        let r = forward_resolution("vysuok", 103, false);
        assert!(r.variants.is_empty());
        assert!(matches!(
            r.diagnostics.as_slice(),
            [Diagnostic::BoundsViolation { id: 103, .. }]
        ));
    }

    #[test]
    fn test_ltg_dative_overlap_is_bounds_violation() {
        let r = forward_resolution("vysuoka", 105, false);
        assert!(r.variants.is_empty());
        assert_eq!(r.diagnostics.len(), 1);
    }

    #[test]
    fn test_ltg_superlative_is_undesirable() {
        let v = forward("vyszyluok", 103, false);
        assert_eq!(v[0].stem, "zyl");
        assert!(v[0].is_matching(attr::NORMATIVE, attr::UNDESIRABLE));
        assert!(!v[1].is_matching(attr::NORMATIVE, attr::UNDESIRABLE));
    }

    #[test]
    fn test_ltg_letter_alternation() {
        assert_eq!(stems("bruol", 100), vec!["bruoļ", "bruol"]);
        assert_eq!(stems("bruoļ", 100), vec!["bruoļ"]);
        assert_eq!(stems("lauš", 101), vec!["laut", "laus"]);
        assert_eq!(stems("gold", 122), vec!["goļdei"]);
    }

    #[test]
    fn test_ltg_vowel_shift_composite() {
        assert_eq!(stems("myn", 162), vec!["minei"]);
        assert_eq!(stems("juodzīde", 150), vec!["dzīdei", "dzīdē"]);
    }
}
