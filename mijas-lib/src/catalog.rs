// The closed catalog of stem change identifiers.
//
// Every identifier is either a plain alternation (dispatched directly by the
// forward and inverse engines) or a composite: an optional mood prefix and an
// optional Latgalian vowel shift wrapped around a plain alternation.

use std::borrow::Cow;
use std::fmt;

use crate::latgalian::{vowel_form_to_lemma, vowel_lemma_to_form};
use crate::stem::char_len;
use crate::types::MijaError;

macro_rules! alternations {
    ($($name:ident = $code:literal => $desc:literal,)*) => {
        /// Inner alternation codes understood by both engines.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Alternation {
            $($name = $code,)*
        }

        impl Alternation {
            pub const ALL: &'static [Alternation] = &[$(Alternation::$name,)*];

            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Alternation::$name),)*
                    _ => None,
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $(Alternation::$name => $desc,)*
                }
            }
        }
    };
}

alternations! {
    Unchanged = 0 => "no alternation",
    NounConsonant = 1 => "noun consonant alternation",
    ThirdConjStemLoss = 2 => "3rd conjugation forms dropping the last stem letter, no alternation",
    AdjectiveDegree = 3 => "adjective -āk- comparative and vis- superlative",
    FirstConjFuture = 6 => "1st conjugation future",
    FirstConjSecondPerson = 7 => "1st conjugation present 2nd person",
    ThirdConjAms = 8 => "3rd conjugation -ams/-āms and 1st/2nd person plural, no alternation",
    ThirdConjThirdPerson = 9 => "3rd conjugation present 3rd person, no alternation",
    AdverbDegreeI = 10 => "adjective gradation for the -i adverb form",
    PastActiveParticiple = 11 => "-uš- participle forms",
    DegreeOnly = 13 => "-āk- comparative and vis- superlative without positive degree",
    FirstConjIsParticiple = 14 => "1st conjugation -is participle",
    SToZ = 15 => "s -> z before -dams when the past stem ends in t or d",
    ShanaNoun = 16 => "1st conjugation -šana derivation",
    ShortVocative = 17 => "short feminine vocative",
    ThirdConjFirstPerson = 20 => "3rd conjugation alternation: 1st person, -ot participle",
    ParticipleDegree = 21 => "-is/-ušais participle comparative and superlative",
    UsToUsh = 22 => "-us- -> -uš- in definite participles",
    FirstConjSecondPersonLong = 23 => "1st conjugation present 2nd person before a long ending",
    ThirdConjStemLossDegree = 24 => "as 2, with comparative and superlative",
    ThirdConjAmsDegree = 25 => "as 8, with comparative and superlative",
    ThirdConjImperative = 26 => "3rd conjugation alternation: present 2nd person, imperative",
    ThirdConjAmsAlternating = 27 => "3rd conjugation -ams/-āms with alternation",
    ThirdConjThirdPersonAlternating = 30 => "3rd conjugation present 3rd person with alternation",
    ThirdConjFirstPersonDegree = 32 => "as 20, with comparative and superlative",
    ThirdConjAmsAlternatingDegree = 33 => "as 27, with comparative and superlative",
    AdjectiveDative = 34 => "adjective -ajam style endings with gradation",
    SubstantivizedDative = 35 => "substantivized adjective -ajam style endings",
    Iet = 36 => "irregular 'iet' present stem",
    AdverbDegree = 38 => "adverbs with gradation",
    LtgSoftenOnly = 99 => "Latgalian letter alternation, soft-ending paradigms only",
    LtgLetter = 100 => "Latgalian letter alternation before front endings",
    LtgNounConsonant = 101 => "Latgalian noun consonant alternation",
    LtgNounConsonantFront = 102 => "Latgalian noun consonant softening before front endings",
    LtgAdjectiveDegree = 103 => "Latgalian adjective -uok- comparative and vys-/vysu- superlative",
    LtgAdjectiveDegreeLetter = 104 => "as 103, with letter alternation in the positive degree",
    LtgAdjectiveDative = 105 => "Latgalian adjective -ajam style endings with gradation",
    LtgDegreeOnly = 106 => "Latgalian -uok- gradation without positive degree",
    LtgLetterInverse = 107 => "Latgalian inverse letter alternation",
    LtgLetterInverseDegree = 108 => "as 107, with -uok- gradation",
    LtgAdverbDegree = 109 => "Latgalian adverbs with gradation",
    LtgSecondConjPresent = 110 => "Latgalian 2nd conjugation present",
    LtgSecondConjPastSingular = 111 => "Latgalian 2nd conjugation past, 1st/2nd person singular",
    LtgSecondConjPastPlural = 112 => "Latgalian 2nd conjugation past, plural and 3rd person",
    LtgSecondConjFuture = 113 => "Latgalian 2nd conjugation future, 1st/2nd person singular",
    LtgSecondConjSupine = 114 => "Latgalian 2nd conjugation conditional, supine, past participles",
    LtgSecondConjPresentDegree = 115 => "as 110, with participle gradation",
    LtgSecondConjSupineDegree = 116 => "as 114, with participle gradation",
    LtgSecondConjPastParticiple = 117 => "Latgalian 2nd conjugation -s/-use past participle",
    LtgSecondConjPastParticipleDegree = 118 => "as 117, with participle gradation",
    LtgThirdConjEit = 119 => "Latgalian 3rd conjugation -eit, no consonant alternation",
    LtgThirdConjEitDegree = 120 => "as 119, with participle gradation",
    LtgParticipleDegree = 121 => "Latgalian participle gradation, no alternation",
    LtgThirdConjEitConsonant = 122 => "Latgalian 3rd conjugation -eit with consonant alternation",
    LtgThirdConjEitConsonantDegree = 123 => "as 122, with participle gradation",
    LtgThirdConjEt = 124 => "Latgalian 3rd conjugation -ēt, no alternation",
    LtgThirdConjEtLetter = 125 => "Latgalian 3rd conjugation -ēt with letter alternation",
    LtgThirdConjEtDegree = 126 => "as 124, with participle gradation",
    LtgThirdConjEtLetterDegree = 127 => "as 125, with participle gradation",
}

impl Alternation {
    pub fn code(self) -> u16 {
        self as u16
    }
}

// ---------------------------------------------------------------------------
// Composite identifiers
// ---------------------------------------------------------------------------

/// Mood prefix required by a composite on analysis and attached on synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoodPrefix {
    pub text: &'static str,
    /// Minimum stem length, prefix included, for analysis to apply.
    pub min_len: usize,
}

const DEBITIVE: MoodPrefix = MoodPrefix {
    text: "jā",
    min_len: 4,
};

const LTG_DEBITIVE: MoodPrefix = MoodPrefix {
    text: "juo",
    min_len: 5,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Composite {
    pub id: u16,
    pub prefix: Option<MoodPrefix>,
    /// Latgalian vowel alternation applied around the inner rule.
    pub vowel_shift: bool,
    pub inner: Alternation,
    pub description: &'static str,
}

const fn debitive(id: u16, inner: Alternation, description: &'static str) -> Composite {
    Composite {
        id,
        prefix: Some(DEBITIVE),
        vowel_shift: false,
        inner,
        description,
    }
}

const fn ltg_debitive(
    id: u16,
    vowel_shift: bool,
    inner: Alternation,
    description: &'static str,
) -> Composite {
    Composite {
        id,
        prefix: Some(LTG_DEBITIVE),
        vowel_shift,
        inner,
        description,
    }
}

const fn vowel_shift(id: u16, inner: Alternation, description: &'static str) -> Composite {
    Composite {
        id,
        prefix: None,
        vowel_shift: true,
        inner,
        description,
    }
}

pub const COMPOSITES: &[Composite] = &[
    debitive(4, Alternation::Unchanged, "debitive jā-"),
    debitive(
        5,
        Alternation::ThirdConjThirdPerson,
        "debitive of 3rd conjugation, no alternation",
    ),
    debitive(
        12,
        Alternation::ThirdConjAms,
        "debitive of reflexive 3rd conjugation, no alternation",
    ),
    debitive(
        19,
        Alternation::ThirdConjStemLoss,
        "debitive-conditional of 3rd conjugation, no alternation",
    ),
    debitive(
        28,
        Alternation::ThirdConjFirstPerson,
        "debitive-conditional of 3rd conjugation with alternation",
    ),
    debitive(
        29,
        Alternation::ThirdConjAmsAlternating,
        "debitive of reflexive 3rd conjugation with alternation",
    ),
    debitive(
        31,
        Alternation::ThirdConjThirdPersonAlternating,
        "debitive of 3rd conjugation with alternation",
    ),
    debitive(
        37,
        Alternation::Iet,
        "debitive of 1st conjugation with alternation",
    ),
    ltg_debitive(
        150,
        false,
        Alternation::LtgSecondConjPresent,
        "Latgalian debitive of 2nd conjugation",
    ),
    ltg_debitive(
        151,
        true,
        Alternation::LtgThirdConjEit,
        "Latgalian debitive of 3rd conjugation -eit with vowel alternation",
    ),
    ltg_debitive(
        152,
        true,
        Alternation::LtgThirdConjEitConsonant,
        "Latgalian debitive of 3rd conjugation -eit with vowel and consonant alternation",
    ),
    ltg_debitive(
        153,
        false,
        Alternation::LtgThirdConjEtLetter,
        "Latgalian debitive of 3rd conjugation -ēt with letter alternation",
    ),
    vowel_shift(
        160,
        Alternation::LtgSecondConjSupine,
        "Latgalian vowel alternation for 2nd conjugation supine and past participle",
    ),
    vowel_shift(
        161,
        Alternation::LtgSecondConjSupineDegree,
        "Latgalian vowel alternation for 2nd conjugation participle gradation",
    ),
    vowel_shift(
        162,
        Alternation::LtgThirdConjEit,
        "Latgalian vowel alternation for 3rd conjugation -eit present",
    ),
    vowel_shift(
        163,
        Alternation::LtgThirdConjEitDegree,
        "Latgalian vowel alternation for 3rd conjugation -eit participle gradation",
    ),
    vowel_shift(
        164,
        Alternation::LtgThirdConjEitConsonant,
        "Latgalian vowel alternation for 3rd conjugation -eit present with consonant alternation",
    ),
    vowel_shift(
        165,
        Alternation::LtgThirdConjEitConsonantDegree,
        "Latgalian vowel alternation for 3rd conjugation -eit consonant participle gradation",
    ),
    vowel_shift(
        166,
        Alternation::LtgThirdConjEt,
        "Latgalian vowel alternation for 3rd conjugation -ēt 1st person present",
    ),
    vowel_shift(
        167,
        Alternation::LtgThirdConjEtDegree,
        "Latgalian vowel alternation for 3rd conjugation -ēt participle gradation",
    ),
];

impl Composite {
    /// Strips the prefix and undoes the vowel shift of a surface stem.
    /// `None` when the prefix is missing or the stem is too short.
    pub fn strip(&self, stem: &str) -> Option<String> {
        let rest = match self.prefix {
            Some(prefix) => {
                if char_len(stem) < prefix.min_len {
                    return None;
                }
                stem.strip_prefix(prefix.text)?
            }
            None => stem,
        };
        Some(if self.vowel_shift {
            vowel_form_to_lemma(rest)
        } else {
            rest.to_string()
        })
    }

    /// Applies the vowel shift and attaches the prefix to a stem produced by
    /// the inner alternation.
    pub fn attach(&self, stem: &str) -> String {
        let shifted = if self.vowel_shift {
            vowel_lemma_to_form(stem)
        } else {
            stem.to_string()
        };
        match self.prefix {
            Some(prefix) => format!("{}{}", prefix.text, shifted),
            None => shifted,
        }
    }
}

// ---------------------------------------------------------------------------
// Validated identifiers
// ---------------------------------------------------------------------------

/// A stem change identifier known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StemChange {
    Plain(Alternation),
    Composite(&'static Composite),
}

impl StemChange {
    pub fn from_id(id: u16) -> Option<Self> {
        if let Some(c) = COMPOSITES.iter().find(|c| c.id == id) {
            return Some(StemChange::Composite(c));
        }
        Alternation::from_code(id).map(StemChange::Plain)
    }

    pub fn id(&self) -> u16 {
        match self {
            StemChange::Plain(alt) => alt.code(),
            StemChange::Composite(c) => c.id,
        }
    }

    /// The alternation the engines dispatch on.
    pub fn inner(&self) -> Alternation {
        match self {
            StemChange::Plain(alt) => *alt,
            StemChange::Composite(c) => c.inner,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StemChange::Plain(alt) => alt.description(),
            StemChange::Composite(c) => c.description,
        }
    }

    /// Stem handed to the inner alternation on analysis. `None` when a
    /// composite's prefix is absent.
    pub fn analysis_stem<'a>(&self, stem: &'a str) -> Option<Cow<'a, str>> {
        match self {
            StemChange::Plain(_) => Some(Cow::Borrowed(stem)),
            StemChange::Composite(c) => c.strip(stem).map(Cow::Owned),
        }
    }

    /// Every catalog entry in ascending id order.
    pub fn all() -> impl Iterator<Item = StemChange> {
        let mut all: Vec<StemChange> = Alternation::ALL
            .iter()
            .copied()
            .map(StemChange::Plain)
            .chain(COMPOSITES.iter().map(StemChange::Composite))
            .collect();
        all.sort_by_key(StemChange::id);
        all.into_iter()
    }
}

impl TryFrom<u16> for StemChange {
    type Error = MijaError;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        StemChange::from_id(id).ok_or(MijaError::UnknownRule { id })
    }
}

impl fmt::Display for StemChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id(), self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: Vec<u16> = StemChange::all().map(|c| c.id()).collect();
        let mut dedup = ids.clone();
        dedup.dedup();
        assert_eq!(ids, dedup, "catalog ids must be unique and sorted");
        assert_eq!(ids.len(), Alternation::ALL.len() + COMPOSITES.len());
    }

    #[test]
    fn test_retired_and_gap_ids_are_unknown() {
        for id in [18, 39, 98, 128, 149, 154, 159, 168, 999] {
            assert!(StemChange::from_id(id).is_none(), "{id} should be unknown");
        }
        assert_eq!(
            StemChange::try_from(18),
            Err(MijaError::UnknownRule { id: 18 })
        );
    }

    #[test]
    fn test_composites_resolve_to_inner_codes() {
        let expected = [
            (4, 0),
            (5, 9),
            (12, 8),
            (19, 2),
            (28, 20),
            (29, 27),
            (31, 30),
            (37, 36),
            (150, 110),
            (151, 119),
            (152, 122),
            (153, 125),
            (160, 114),
            (167, 126),
        ];
        for (id, inner) in expected {
            let change = StemChange::from_id(id).expect("should have composite");
            assert_eq!(change.inner().code(), inner, "composite {id}");
        }
    }

    #[test]
    fn test_composite_strip_requires_prefix_and_length() {
        let jaiet = StemChange::from_id(37).expect("should have 37");
        let StemChange::Composite(c) = jaiet else {
            panic!("37 should be a composite");
        };
        assert_eq!(c.strip("jāiet").as_deref(), Some("iet"));
        assert_eq!(c.strip("jāi"), None);
        assert_eq!(c.strip("iet"), None);
        assert_eq!(c.attach("iet"), "jāiet");
    }

    #[test]
    fn test_vowel_shift_composite_round_trip() {
        let Some(StemChange::Composite(c)) = StemChange::from_id(162) else {
            panic!("162 should be a composite");
        };
        assert_eq!(c.strip("myn").as_deref(), Some("min"));
        assert_eq!(c.attach("minei"), "mynei");
    }
}
