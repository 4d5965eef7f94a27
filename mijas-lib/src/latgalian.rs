// Latgalian vowel and letter alternations shared by the Latgalian rules.

use crate::types::{attr, AttributeValues, Degree, StemVariant};

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

const CONSONANTS: &[char] = &[
    'b', 'c', 'č', 'd', 'f', 'g', 'ģ', 'h', 'j', 'k', 'ķ', 'l', 'ļ', 'm', 'n', 'ņ', 'p', 'r', 'ŗ',
    's', 'š', 't', 'v', 'z', 'ž',
];

/// Vowels allowed after the final consonant run.
const TRAILING_VOWELS: &[char] = &['a', 'ā', 'e', 'ē', 'i', 'ī', 'y', 'o', 'ō', 'u', 'ū'];

/// Single-letter nuclei.
const NUCLEI: &[char] = &['a', 'ā', 'e', 'ē', 'i', 'ī', 'o', 'u', 'ū', 'y'];

/// Two-letter nuclei recognised when going lemma to form.
const LEMMA_DIPHTHONGS: &[&str] = &["ai", "ei", "ui", "oi", "ie"];

/// Two-letter nuclei recognised when going form to lemma.
const FORM_DIPHTHONGS: &[&str] = &["uo"];

const LEMMA_TO_FORM: &[(&str, &str)] = &[("a", "o"), ("e", "a"), ("ē", "ā"), ("i", "y")];
const FORM_TO_LEMMA: &[(&str, &str)] = &[("a", "e"), ("ā", "ē"), ("y", "i"), ("o", "a")];

// ---------------------------------------------------------------------------
// Vowel alternation
// ---------------------------------------------------------------------------

/// A stem split around the vowel nucleus that precedes its trailing
/// consonant run: `head + nucleus + tail`, where `tail` is one or more
/// consonants followed by zero or more vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NucleusSplit<'a> {
    pub(crate) head: &'a str,
    pub(crate) nucleus: &'a str,
    pub(crate) tail: &'a str,
}

/// Locates the nucleus before the trailing consonant run. A diphthong from
/// `diphthongs` ending right before the run wins over its last letter.
/// Returns `None` when the stem has no such shape.
pub(crate) fn split_nucleus<'a>(stem: &'a str, diphthongs: &[&str]) -> Option<NucleusSplit<'a>> {
    let mut chars = stem.char_indices().rev().peekable();
    let trailing_vowel = |&(_, c): &(usize, char)| TRAILING_VOWELS.contains(&c);

    while chars.next_if(trailing_vowel).is_some() {}
    let mut tail_start = None;
    while let Some((idx, _)) = chars.next_if(|&(_, c)| CONSONANTS.contains(&c)) {
        tail_start = Some(idx);
    }
    let tail_start = tail_start?;
    let before = &stem[..tail_start];
    let tail = &stem[tail_start..];

    if let Some(d) = diphthongs.iter().find(|d| before.ends_with(*d)) {
        let head = &before[..before.len() - d.len()];
        return Some(NucleusSplit {
            head,
            nucleus: &before[head.len()..],
            tail,
        });
    }
    let (idx, c) = chars.next()?;
    if !NUCLEI.contains(&c) {
        return None;
    }
    Some(NucleusSplit {
        head: &stem[..idx],
        nucleus: &stem[idx..tail_start],
        tail,
    })
}

fn shift_vowel(stem: &str, diphthongs: &[&str], map: &[(&str, &str)]) -> String {
    let Some(split) = split_nucleus(stem, diphthongs) else {
        return stem.to_string();
    };
    match map.iter().find(|(from, _)| *from == split.nucleus) {
        Some((_, to)) => format!("{}{}{}", split.head, to, split.tail),
        None => stem.to_string(),
    }
}

/// Lemma vowel to surface vowel: a→o, e→a, ē→ā, i→y.
pub fn vowel_lemma_to_form(stem: &str) -> String {
    shift_vowel(stem, LEMMA_DIPHTHONGS, LEMMA_TO_FORM)
}

/// Surface vowel back to lemma vowel: a→e, ā→ē, y→i, o→a. A "uo" nucleus
/// is left alone.
pub fn vowel_form_to_lemma(stem: &str) -> String {
    shift_vowel(stem, FORM_DIPHTHONGS, FORM_TO_LEMMA)
}

// ---------------------------------------------------------------------------
// Letter alternation
// ---------------------------------------------------------------------------

const SOFT_TO_HARD: &[(&str, &str)] = &[
    ("ļļ", "ll"),
    ("ņņ", "nn"),
    ("ļ", "l"),
    ("ņ", "n"),
    ("ķ", "k"),
    ("ģ", "g"),
];

const HARD_TO_SOFT: &[(&str, &str)] = &[
    ("ll", "ļļ"),
    ("nn", "ņņ"),
    ("l", "ļ"),
    ("n", "ņ"),
    ("k", "ķ"),
    ("g", "ģ"),
];

fn swap_final(stem: &str, table: &[(&str, &str)]) -> String {
    for (from, to) in table {
        if let Some(base) = stem.strip_suffix(from) {
            return format!("{base}{to}");
        }
    }
    stem.to_string()
}

/// ļ ņ ķ ģ (and ļļ ņņ) at the end of the stem become l n k g.
pub fn soft_to_hard(stem: &str) -> String {
    swap_final(stem, SOFT_TO_HARD)
}

/// l n k g (and ll nn) at the end of the stem become ļ ņ ķ ģ. Only valid
/// where the paradigm guarantees a soft consonant.
pub fn hard_to_soft_unambiguous(stem: &str) -> String {
    swap_final(stem, HARD_TO_SOFT)
}

// ---------------------------------------------------------------------------
// Degree flags
// ---------------------------------------------------------------------------

/// Degree attribute for Latgalian gradation. Prefix superlatives (vys-,
/// vysu-) are always marked normatively undesirable.
pub fn degree_flags(degree: Degree) -> AttributeValues {
    let mut flags = AttributeValues::with(attr::DEGREE, degree.as_str());
    if degree == Degree::Superlative {
        flags.add(attr::NORMATIVE, attr::UNDESIRABLE);
    }
    flags
}

pub(crate) fn graded(stem: impl Into<String>, degree: Degree) -> StemVariant {
    StemVariant::with_attributes(stem, degree_flags(degree))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_nucleus_finds_last_consonant_run() {
        let split = split_nucleus("lasī", LEMMA_DIPHTHONGS).expect("should split");
        assert_eq!((split.head, split.nucleus, split.tail), ("l", "a", "sī"));
    }

    #[test]
    fn test_split_nucleus_prefers_diphthong() {
        let split = split_nucleus("maiz", LEMMA_DIPHTHONGS).expect("should split");
        assert_eq!(split.nucleus, "ai");
        let split = split_nucleus("ruok", FORM_DIPHTHONGS).expect("should split");
        assert_eq!(split.nucleus, "uo");
    }

    #[test]
    fn test_split_nucleus_rejects_unshaped_stems() {
        assert_eq!(split_nucleus("str", LEMMA_DIPHTHONGS), None);
        assert_eq!(split_nucleus("aie", LEMMA_DIPHTHONGS), None);
        assert_eq!(split_nucleus("", LEMMA_DIPHTHONGS), None);
    }

    #[test]
    fn test_vowel_shift_both_directions() {
        assert_eq!(vowel_lemma_to_form("min"), "myn");
        assert_eq!(vowel_lemma_to_form("minei"), "mynei");
        assert_eq!(vowel_lemma_to_form("ved"), "vad");
        assert_eq!(vowel_form_to_lemma("myn"), "min");
        assert_eq!(vowel_form_to_lemma("vad"), "ved");
        assert_eq!(vowel_form_to_lemma("kop"), "kap");
    }

    #[test]
    fn test_vowel_shift_leaves_diphthongs_untouched() {
        assert_eq!(vowel_lemma_to_form("tiek"), "tiek");
        assert_eq!(vowel_lemma_to_form("maiz"), "maiz");
        assert_eq!(vowel_form_to_lemma("ruok"), "ruok");
        assert_eq!(vowel_form_to_lemma("dzīd"), "dzīd");
    }

    #[test]
    fn test_letter_alternation() {
        assert_eq!(hard_to_soft_unambiguous("bruol"), "bruoļ");
        assert_eq!(hard_to_soft_unambiguous("vall"), "vaļļ");
        assert_eq!(hard_to_soft_unambiguous("rats"), "rats");
        assert_eq!(soft_to_hard("bruoļ"), "bruol");
        assert_eq!(soft_to_hard("vaņņ"), "vann");
        assert_eq!(soft_to_hard("ceļš"), "ceļš");
    }

    #[test]
    fn test_degree_flags_mark_superlative() {
        let sup = degree_flags(Degree::Superlative);
        assert!(sup.is_matching(attr::DEGREE, "Superlative"));
        assert!(sup.is_matching(attr::NORMATIVE, attr::UNDESIRABLE));
        let comp = degree_flags(Degree::Comparative);
        assert_eq!(comp.len(), 1);
    }
}
