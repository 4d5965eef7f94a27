// Inverse engine: lemma-oriented stem to the surface stems it alternates into.

use crate::catalog::{Alternation as A, StemChange};
use crate::latgalian::{self, hard_to_soft_unambiguous, soft_to_hard};
use crate::stem::{chop, ends_with_any, rewrite, Rewrite};
use crate::syllables::syllables;
use crate::types::{Degree, Diagnostic, Resolution, StemVariant};

/// Caller-supplied context for one synthesis call.
#[derive(Debug, Clone, Copy)]
struct Context<'a> {
    third_stem: &'a str,
    add_superlative: bool,
    proper_name: bool,
}

/// Synthesis: the surface stems `stem` takes under stem change `id`.
///
/// `third_stem` is an already fixed paradigm stem (usually the past stem)
/// used to pick between alternation classes. With `add_superlative`, rules
/// that build a comparative also emit the prefixed superlative.
pub fn inverse(
    stem: &str,
    id: u16,
    third_stem: &str,
    add_superlative: bool,
    proper_name: bool,
) -> Vec<StemVariant> {
    inverse_resolution(stem, id, third_stem, add_superlative, proper_name).variants
}

/// [`inverse`] together with the diagnostics raised by the call.
pub fn inverse_resolution(
    stem: &str,
    id: u16,
    third_stem: &str,
    add_superlative: bool,
    proper_name: bool,
) -> Resolution {
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
    let inner = change.inner();
    tracing::trace!(stem, id, inner = inner.code(), third_stem, "inverse");

    let ctx = Context {
        third_stem,
        add_superlative,
        proper_name,
    };
    apply(inner, stem, ctx, &mut resolution.variants);
    if let StemChange::Composite(composite) = change {
        for variant in &mut resolution.variants {
            variant.stem = composite.attach(&variant.stem);
        }
    }
    resolution
}

fn apply(alt: A, s: &str, ctx: Context<'_>, out: &mut Vec<StemVariant>) {
    let sup = ctx.add_superlative;
    match alt {
        A::Unchanged => out.push(StemVariant::new(s)),
        A::NounConsonant => noun_consonant(s, ctx.proper_name, out),
        A::ThirdConjStemLoss => {
            if s.ends_with('ī') || ends_with_any(s, LONG_A_FINALS) {
                out.push(StemVariant::long(chop(s)));
            } else {
                out.push(StemVariant::new(chop(s)));
            }
        }
        A::AdjectiveDegree => {
            out.push(StemVariant::graded(s, Degree::Positive));
            if !s.ends_with("āk") {
                push_degrees(&format!("{s}āk"), sup, out);
            }
        }
        A::FirstConjFuture => first_conj_future(s, ctx.third_stem, out),
        A::FirstConjSecondPerson => first_conj_second_person(s, ctx.third_stem, false, out),
        A::FirstConjSecondPersonLong => first_conj_second_person(s, ctx.third_stem, true, out),
        A::ThirdConjAms => out.push(third_conj_ams(s)),
        A::ThirdConjThirdPerson => {
            let base = chop(s);
            if s.ends_with("dā") {
                out.push(StemVariant::new(base));
            } else if s.ends_with('ā') || s.ends_with('ī') {
                out.push(StemVariant::new(format!("{base}a")));
            } else {
                out.push(StemVariant::new(base));
            }
        }
        A::AdverbDegreeI => {
            out.push(StemVariant::graded(s, Degree::Positive));
            push_degrees(&format!("{s}āk"), sup, out);
        }
        A::PastActiveParticiple => {
            if let Some(base) = s.strip_suffix('c') {
                out.push(StemVariant::new(format!("{base}k")));
            } else if let Some(base) = s.strip_suffix("dz") {
                out.push(StemVariant::new(format!("{base}g")));
            } else {
                out.push(StemVariant::new(s));
            }
        }
        A::DegreeOnly => push_degrees(&format!("{s}āk"), sup, out),
        A::FirstConjIsParticiple => {
            if let Some(base) = s.strip_suffix('k') {
                out.push(StemVariant::new(format!("{base}c")));
            } else if let Some(base) = s.strip_suffix('g') {
                out.push(StemVariant::new(format!("{base}dz")));
            } else {
                out.push(StemVariant::new(s));
            }
        }
        A::SToZ => {
            if s.ends_with('s') && ends_with_any(ctx.third_stem, &["t", "d"]) {
                out.push(StemVariant::new(format!("{}z", chop(s))));
            } else {
                out.push(StemVariant::new(s));
            }
        }
        A::ShanaNoun => {
            if s.ends_with('s') || s.ends_with('z') {
                out.push(StemVariant::new(chop(s)));
            } else {
                out.push(StemVariant::new(s));
            }
        }
        A::ShortVocative => {
            if syllables(s) >= 2 && !ends_with_any(s, &["kāj", "māj"]) {
                out.push(StemVariant::new(s));
            }
        }
        A::ThirdConjFirstPerson => third_conj_first_person(s, out),
        A::ParticipleDegree => push_degrees(s, sup, out),
        A::UsToUsh => {
            if let Some(base) = s.strip_suffix("uš") {
                out.push(StemVariant::new(format!("{base}us")));
            }
        }
        A::ThirdConjStemLossDegree => push_degrees(chop(s), sup, out),
        A::ThirdConjAmsDegree => push_degrees(&third_conj_ams(s).stem, sup, out),
        A::ThirdConjImperative => third_conj_imperative(s, out),
        A::ThirdConjAmsAlternating => {
            if let Some(b) = s.strip_suffix("cī") {
                out.push(StemVariant::long(format!("{b}kā")));
            } else {
                push_plain(s, THIRD_CONJ_AMS_ALTERNATING, out);
            }
        }
        A::ThirdConjThirdPersonAlternating => {
            push_plain(s, THIRD_CONJ_THIRD_PERSON_ALTERNATING, out)
        }
        A::ThirdConjFirstPersonDegree => {
            let base = rewrite(s, THIRD_CONJ_FIRST_PERSON_DEGREE)
                .and_then(|stems| stems.into_iter().next())
                .map_or_else(|| chop(s).to_string(), |r| r.stem);
            push_degrees(&base, sup, out);
        }
        A::ThirdConjAmsAlternatingDegree => {
            if let Some(stems) = rewrite(s, THIRD_CONJ_AMS_ALTERNATING_DEGREE) {
                for r in stems {
                    push_degrees(&r.stem, sup, out);
                }
            }
        }
        A::AdjectiveDative => {
            dative_positive(s, out);
            push_degrees(&format!("{s}āka"), sup, out);
        }
        A::SubstantivizedDative => dative_positive(s, out),
        A::Iet => match s.strip_suffix("ej") {
            Some(base) if ctx.third_stem.ends_with("gāj") => {
                out.push(StemVariant::new(format!("{base}iet")));
            }
            _ => out.push(StemVariant::new(s)),
        },
        A::AdverbDegree => {
            out.push(StemVariant::graded(s, Degree::Positive));
            let base = if s.ends_with('i') || s.ends_with('u') {
                chop(s)
            } else {
                s
            };
            push_degrees(&format!("{base}āk"), sup, out);
        }

        A::LtgSoftenOnly | A::LtgLetter => out.push(StemVariant::new(soft_to_hard(s))),
        A::LtgNounConsonant => push_plain_or_same(s, LTG_NOUN_CONSONANT, out),
        A::LtgNounConsonantFront => push_plain_or_same(s, LTG_NOUN_CONSONANT_FRONT, out),
        A::LtgAdjectiveDegree => {
            out.push(latgalian::graded(s, Degree::Positive));
            if !s.ends_with("uok") {
                push_ltg_degrees(&format!("{s}uok"), sup, out);
            }
        }
        A::LtgAdjectiveDegreeLetter => {
            out.push(latgalian::graded(soft_to_hard(s), Degree::Positive));
            if !s.ends_with("uok") {
                push_ltg_degrees(&format!("{s}uok"), sup, out);
            }
        }
        A::LtgAdjectiveDative => {
            if s.ends_with("ēj") || s.ends_with("ej") {
                out.push(latgalian::graded(chop(s), Degree::Positive));
            } else {
                out.push(latgalian::graded(format!("{s}a"), Degree::Positive));
            }
            push_ltg_degrees(&format!("{s}uoka"), sup, out);
        }
        A::LtgDegreeOnly => {
            if !s.ends_with("uok") {
                push_ltg_degrees(&format!("{s}uok"), sup, out);
            }
        }
        A::LtgLetterInverse => out.push(StemVariant::new(hard_to_soft_unambiguous(s))),
        A::LtgLetterInverseDegree => {
            if !s.ends_with("uok") {
                push_ltg_degrees(&format!("{}uok", hard_to_soft_unambiguous(s)), sup, out);
            }
        }
        A::LtgAdverbDegree => {
            out.push(latgalian::graded(s, Degree::Positive));
            let base = if let Some(b) = s.strip_suffix("ai") {
                b
            } else if s.ends_with('i') || s.ends_with('a') {
                chop(s)
            } else {
                s
            };
            push_ltg_degrees(&format!("{base}uok"), sup, out);
        }
        A::LtgSecondConjPresent => push_plain(s, LTG_SECOND_CONJ_PRESENT, out),
        A::LtgSecondConjPastSingular => push_plain(s, LTG_SECOND_CONJ_PAST_SINGULAR, out),
        A::LtgSecondConjPastPlural => push_plain(s, LTG_SECOND_CONJ_PAST_PLURAL, out),
        A::LtgSecondConjFuture => push_plain(s, LTG_SECOND_CONJ_FUTURE, out),
        A::LtgSecondConjSupine => push_plain(s, LTG_SECOND_CONJ_SUPINE, out),
        A::LtgSecondConjPresentDegree => {
            push_ltg_table_degrees(s, LTG_SECOND_CONJ_PRESENT, sup, out)
        }
        A::LtgSecondConjSupineDegree => push_ltg_table_degrees(s, LTG_SECOND_CONJ_SUPINE, sup, out),
        A::LtgSecondConjPastParticiple => push_plain(s, LTG_SECOND_CONJ_PAST_PARTICIPLE, out),
        A::LtgSecondConjPastParticipleDegree => {
            push_ltg_table_degrees(s, LTG_SECOND_CONJ_PAST_PARTICIPLE, sup, out)
        }
        A::LtgThirdConjEit => push_plain(s, LTG_EIT, out),
        A::LtgThirdConjEitDegree => push_ltg_table_degrees(s, LTG_EIT, sup, out),
        A::LtgParticipleDegree => push_ltg_degrees(s, sup, out),
        A::LtgThirdConjEitConsonant => push_plain(s, LTG_EIT_CONSONANT, out),
        A::LtgThirdConjEitConsonantDegree => push_ltg_table_degrees(s, LTG_EIT_CONSONANT, sup, out),
        A::LtgThirdConjEt => {
            if let Some(base) = s.strip_suffix('ē') {
                out.push(StemVariant::new(base));
            }
        }
        A::LtgThirdConjEtLetter => {
            if let Some(base) = s.strip_suffix('ē') {
                out.push(StemVariant::new(hard_to_soft_unambiguous(base)));
            }
        }
        A::LtgThirdConjEtDegree => {
            if let Some(base) = s.strip_suffix('ē') {
                push_ltg_degrees(base, sup, out);
            }
        }
        A::LtgThirdConjEtLetterDegree => {
            if let Some(base) = s.strip_suffix('ē') {
                push_ltg_degrees(&hard_to_soft_unambiguous(base), sup, out);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn push_plain(s: &str, table: &[Rewrite], out: &mut Vec<StemVariant>) {
    if let Some(stems) = rewrite(s, table) {
        out.extend(stems.into_iter().map(|r| StemVariant::new(r.stem)));
    }
}

fn push_plain_or_same(s: &str, table: &[Rewrite], out: &mut Vec<StemVariant>) {
    match rewrite(s, table) {
        Some(stems) => out.extend(stems.into_iter().map(|r| StemVariant::new(r.stem))),
        None => out.push(StemVariant::new(s)),
    }
}

/// Comparative, plus the vis- superlative on request.
fn push_degrees(comparative: &str, add_superlative: bool, out: &mut Vec<StemVariant>) {
    out.push(StemVariant::graded(comparative, Degree::Comparative));
    if add_superlative {
        let superlative = format!("vis{comparative}");
        out.push(StemVariant::graded(superlative, Degree::Superlative));
    }
}

/// Comparative, plus both vys- and vysu- superlatives on request.
fn push_ltg_degrees(comparative: &str, add_superlative: bool, out: &mut Vec<StemVariant>) {
    out.push(latgalian::graded(comparative, Degree::Comparative));
    if add_superlative {
        for prefix in ["vys", "vysu"] {
            let superlative = format!("{prefix}{comparative}");
            out.push(latgalian::graded(superlative, Degree::Superlative));
        }
    }
}

fn push_ltg_table_degrees(
    s: &str,
    table: &[Rewrite],
    add_superlative: bool,
    out: &mut Vec<StemVariant>,
) {
    if let Some(stems) = rewrite(s, table) {
        for r in stems {
            push_ltg_degrees(&r.stem, add_superlative, out);
        }
    }
}

// ---------------------------------------------------------------------------
// Latvian nouns and adjectives
// ---------------------------------------------------------------------------

const NOUN_CONSONANT: &[Rewrite] = &[
    ("kst", &["kš"]),
    ("nst", &["nš"]),
    ("s", &["š"]),
    ("t", &["š"]),
    ("z", &["ž"]),
    ("d", &["ž"]),
    ("c", &["č"]),
    ("sl", &["šļ"]),
    ("zl", &["žļ"]),
    ("ll", &["ļļ"]),
    ("l", &["ļ"]),
    ("sn", &["šņ"]),
    ("zn", &["žņ"]),
    ("ln", &["ļņ"]),
    ("nn", &["ņņ"]),
    ("n", &["ņ"]),
];

const LABIALS: &[&str] = &["p", "b", "m", "v", "f"];

fn noun_consonant(s: &str, proper_name: bool, out: &mut Vec<StemVariant>) {
    // Proper names keep the cluster: Vinksts -> Vinksša.
    if proper_name {
        if let Some(base) = s.strip_suffix('t') {
            out.push(StemVariant::labelled(format!("{base}š"), "t -> š"));
            return;
        }
        if let Some(base) = s.strip_suffix('d') {
            out.push(StemVariant::labelled(format!("{base}ž"), "d -> ž"));
            return;
        }
    }
    if let Some(stems) = rewrite(s, NOUN_CONSONANT) {
        out.extend(stems.into_iter().map(|r| {
            let label = r.reverse_label();
            StemVariant::labelled(r.stem, label)
        }));
    } else if ends_with_any(s, LABIALS) {
        out.push(StemVariant::labelled(format!("{s}j"), "p -> pj"));
    } else {
        out.push(StemVariant::new(s));
    }
}

fn dative_positive(s: &str, out: &mut Vec<StemVariant>) {
    if s.ends_with("ēj") {
        out.push(StemVariant::graded(chop(s), Degree::Positive));
    } else {
        out.push(StemVariant::graded(format!("{s}a"), Degree::Positive));
    }
}

// ---------------------------------------------------------------------------
// Latvian verbs
// ---------------------------------------------------------------------------

fn first_conj_future(s: &str, third_stem: &str, out: &mut Vec<StemVariant>) {
    if let Some(base) = s.strip_suffix('s') {
        let stem = if third_stem.ends_with('d') {
            format!("{base}dī")
        } else if third_stem.ends_with('t') {
            format!("{base}tī")
        } else if third_stem.ends_with('s') {
            format!("{base}sī")
        } else {
            s.to_string()
        };
        out.push(StemVariant::new(stem));
    } else if s.ends_with('z') || s.ends_with('š') {
        out.push(StemVariant::new(format!("{s}ī")));
    } else {
        out.push(StemVariant::new(s));
    }
}

/// Present stems whose 2nd person keeps -i (atrodi, krīti, plūsti).
const SECOND_PERSON_I_FINALS: &[&str] = &["ūd", "op", "ūp", "ot", "ūt", "īt", "iet", "st"];

fn first_conj_second_person(
    s: &str,
    third_stem: &str,
    long_ending: bool,
    out: &mut Vec<StemVariant>,
) {
    let bare_od = s.ends_with("od") && !s.ends_with("dod");
    let takes_i = bare_od || ends_with_any(s, SECOND_PERSON_I_FINALS);
    if let Some(base) = s.strip_suffix('š').filter(|_| third_stem.ends_with('s')) {
        out.push(StemVariant::new(format!("{base}s")));
    } else if let Some(base) = s.strip_suffix('š').filter(|_| third_stem.ends_with('t')) {
        out.push(StemVariant::new(format!("{base}t")));
    } else if takes_i {
        let stem = if long_ending {
            s.to_string()
        } else {
            format!("{s}i")
        };
        out.push(StemVariant::new(stem));
    } else if let Some(base) = s.strip_suffix('ļ') {
        out.push(StemVariant::new(format!("{base}l")));
    } else if ends_with_any(s, &["mj", "bj", "pj"]) {
        out.push(StemVariant::new(chop(s)));
    } else if let Some(base) = s.strip_suffix('k') {
        out.push(StemVariant::new(format!("{base}c")));
    } else if let Some(base) = s.strip_suffix('g') {
        out.push(StemVariant::new(format!("{base}dz")));
    } else if s.ends_with('ž') {
        // ž comes from d or z; only the past stem tells which.
        out.push(StemVariant::new(third_stem));
    } else {
        out.push(StemVariant::new(s));
    }
}

const LONG_A_FINALS: &[&str] = &["inā", "sargā"];

fn third_conj_ams(s: &str) -> StemVariant {
    if ends_with_any(s, LONG_A_FINALS) {
        StemVariant::long(s)
    } else if let Some(base) = s.strip_suffix('ī') {
        StemVariant::long(format!("{base}ā"))
    } else if let Some(base) = s.strip_suffix('ē').or_else(|| s.strip_suffix('ā')) {
        StemVariant::new(format!("{base}a"))
    } else {
        StemVariant::new(s)
    }
}

fn third_conj_first_person(s: &str, out: &mut Vec<StemVariant>) {
    if let Some(base) = s.strip_suffix("gulē") {
        out.push(StemVariant::new(format!("{base}guļ")));
    } else if let Some(base) = s.strip_suffix("cī") {
        out.push(StemVariant::long(format!("{base}k")));
    } else if let Some(base) = s.strip_suffix("cē") {
        out.push(StemVariant::new(format!("{base}k")));
    } else if let Some(base) = s.strip_suffix("dē") {
        out.push(StemVariant::new(format!("{base}ž")));
    } else if let Some(base) = s.strip_suffix("dzē").or_else(|| s.strip_suffix("dzī")) {
        out.push(StemVariant::new(format!("{base}g")));
    }
}

fn third_conj_imperative(s: &str, out: &mut Vec<StemVariant>) {
    if s.ends_with("lē") {
        out.push(StemVariant::new(chop(s)));
    } else if let Some(base) = s.strip_suffix("cī") {
        out.push(StemVariant::long(format!("{base}k")));
    } else if let Some(base) = s.strip_suffix("tecē") {
        out.push(StemVariant::new(format!("{base}tec")));
    } else if let Some(base) = s.strip_suffix("cē") {
        out.push(StemVariant::new(format!("{base}k")));
    } else if let Some(base) = s.strip_suffix("dzē").or_else(|| s.strip_suffix("dzī")) {
        out.push(StemVariant::new(format!("{base}g")));
    } else {
        out.push(StemVariant::new(chop(s)));
    }
}

const THIRD_CONJ_AMS_ALTERNATING: &[Rewrite] = &[
    ("dzī", &["gā"]),
    ("cē", &["ka"]),
    ("gulē", &["guļa"]),
    ("dē", &["ža"]),
    ("dzē", &["ga"]),
];

const THIRD_CONJ_THIRD_PERSON_ALTERNATING: &[Rewrite] = &[
    ("cī", &["ka"]),
    ("dzī", &["ga"]),
    ("cē", &["k"]),
    ("dē", &["ž"]),
    ("dzē", &["g"]),
    ("lē", &["ļ"]),
];

const THIRD_CONJ_FIRST_PERSON_DEGREE: &[Rewrite] = &[
    ("cī", &["k"]),
    ("cē", &["k"]),
    ("dzī", &["g"]),
    ("dzē", &["g"]),
    ("dē", &["ž"]),
    ("lē", &["ļ"]),
];

const THIRD_CONJ_AMS_ALTERNATING_DEGREE: &[Rewrite] = &[
    ("cī", &["kā"]),
    ("dzī", &["gā"]),
    ("cē", &["ka"]),
    ("lē", &["ļa"]),
    ("dē", &["ža"]),
    ("dzē", &["ga"]),
];

// ---------------------------------------------------------------------------
// Latgalian
// ---------------------------------------------------------------------------

const LTG_NOUN_CONSONANT: &[Rewrite] = &[
    ("kst", &["kš"]),
    ("sl", &["šļ"]),
    ("zl", &["žļ"]),
    ("sm", &["šm"]),
    ("sn", &["šņ"]),
    ("zn", &["žņ"]),
    ("ll", &["ļļ"]),
    ("nn", &["ņņ"]),
    ("c", &["č"]),
    ("d", &["ž"]),
    ("s", &["š"]),
    ("t", &["š"]),
    ("z", &["ž"]),
    ("k", &["ķ"]),
    ("l", &["ļ"]),
    ("n", &["ņ"]),
];

const LTG_NOUN_CONSONANT_FRONT: &[Rewrite] = &[
    ("kst", &["kš"]),
    ("šļ", &["šl"]),
    ("sl", &["šl"]),
    ("žļ", &["žl"]),
    ("zl", &["žl"]),
    ("šm", &["šm"]),
    ("sm", &["šm"]),
    ("šņ", &["šn"]),
    ("sn", &["šn"]),
    ("žņ", &["žn"]),
    ("zn", &["žn"]),
    ("ļļ", &["ll"]),
    ("ņņ", &["nn"]),
    ("c", &["č"]),
    ("s", &["š"]),
    ("t", &["š"]),
    ("z", &["ž"]),
    ("d", &["ž"]),
    ("ļ", &["l"]),
    ("ņ", &["n"]),
    ("ķ", &["k"]),
    ("ģ", &["g"]),
];

const LTG_SECOND_CONJ_PRESENT: &[Rewrite] = &[("uo", &["o"]), ("ei", &["e"]), ("ē", &["e"])];

const LTG_SECOND_CONJ_PAST_SINGULAR: &[Rewrite] = &[
    ("uo", &["uoj", "ov"]),
    ("ei", &["ej"]),
    ("ē", &["iej"]),
];

const LTG_SECOND_CONJ_PAST_PLURAL: &[Rewrite] = &[
    ("uo", &["uoj", "ov"]),
    ("ei", &["ej"]),
    ("ē", &["ēj"]),
];

const LTG_SECOND_CONJ_FUTURE: &[Rewrite] = &[("ē", &["ie"]), ("ei", &["ei"]), ("uo", &["uo"])];

const LTG_SECOND_CONJ_SUPINE: &[Rewrite] = &[("ē", &["ā"]), ("ei", &["ei"]), ("uo", &["uo"])];

const LTG_SECOND_CONJ_PAST_PARTICIPLE: &[Rewrite] = &[
    ("uo", &["uo"]),
    ("ei", &["e"]),
    ("ē", &["ie"]),
];

const LTG_EIT: &[Rewrite] = &[("ei", &[""])];

const LTG_EIT_CONSONANT: &[Rewrite] = &[
    ("ļdei", &["ld"]),
    ("ņdei", &["nd"]),
    ("dzei", &["g"]),
    ("cei", &["k"]),
    ("lei", &["ļ"]),
    ("nei", &["ņ"]),
];
