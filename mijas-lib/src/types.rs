use std::fmt;

use serde::{Deserialize, Serialize};

/// Attribute names attached to stem variants.
pub mod attr {
    pub const DEGREE: &str = "Degree";
    pub const NORMATIVE: &str = "Normative";
    /// Marks synthesis outputs whose following ending takes the long vowel.
    pub const LONG: &str = "Long";

    pub const UNDESIRABLE: &str = "Undesirable";
    pub const LONG_A: &str = "ā";
}

/// Degree of comparison produced by the gradation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

impl Degree {
    pub fn as_str(self) -> &'static str {
        match self {
            Degree::Positive => "Positive",
            Degree::Comparative => "Comparative",
            Degree::Superlative => "Superlative",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Positive" => Some(Degree::Positive),
            "Comparative" => Some(Degree::Comparative),
            "Superlative" => Some(Degree::Superlative),
            _ => None,
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered attribute bag. Insertion order is preserved; re-adding a name
/// overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeValues(Vec<(String, String)>);

impl AttributeValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(name: &str, value: &str) -> Self {
        let mut values = Self::new();
        values.add(name, value);
        values
    }

    pub fn add(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// True when `name` is present and carries exactly `value`.
    pub fn is_matching(&self, name: &str, value: &str) -> bool {
        self.get(name) == Some(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// One candidate stem produced by an engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemVariant {
    pub stem: String,
    #[serde(default, skip_serializing_if = "AttributeValues::is_empty")]
    pub attributes: AttributeValues,
    /// Mnemonic of the alternation that produced this stem, e.g. "t -> š".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
}

impl StemVariant {
    pub fn new(stem: impl Into<String>) -> Self {
        StemVariant {
            stem: stem.into(),
            attributes: AttributeValues::new(),
            provenance: None,
        }
    }

    pub fn labelled(stem: impl Into<String>, provenance: impl Into<String>) -> Self {
        StemVariant {
            provenance: Some(provenance.into()),
            ..StemVariant::new(stem)
        }
    }

    pub fn with_attributes(stem: impl Into<String>, attributes: AttributeValues) -> Self {
        StemVariant {
            attributes,
            ..StemVariant::new(stem)
        }
    }

    pub fn graded(stem: impl Into<String>, degree: Degree) -> Self {
        StemVariant::with_attributes(stem, AttributeValues::with(attr::DEGREE, degree.as_str()))
    }

    pub fn long(stem: impl Into<String>) -> Self {
        StemVariant::with_attributes(stem, AttributeValues::with(attr::LONG, attr::LONG_A))
    }

    pub fn is_matching(&self, name: &str, value: &str) -> bool {
        self.attributes.is_matching(name, value)
    }

    pub fn degree(&self) -> Option<Degree> {
        self.attributes.get(attr::DEGREE).and_then(Degree::parse)
    }
}

/// Internal failure of a rule application. Never escapes the engines; the
/// entry points turn it into a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MijaError {
    #[error("invalid stem change id {id}")]
    UnknownRule { id: u16 },
    #[error("stem '{stem}' is too short for stem change {id}")]
    BoundsViolation { stem: String, id: u16 },
}

/// Advisory message produced alongside a result. Verification mismatches
/// travel inside [`crate::Verification`] instead of a [`Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnknownRule { stem: String, id: u16 },
    BoundsViolation { stem: String, id: u16 },
    VerificationMismatch {
        original: String,
        candidate: String,
        id: u16,
        regenerated: Vec<String>,
    },
}

impl Diagnostic {
    pub(crate) fn from_error(err: MijaError, stem: &str) -> Self {
        match err {
            MijaError::UnknownRule { id } => Diagnostic::UnknownRule {
                stem: stem.to_string(),
                id,
            },
            MijaError::BoundsViolation { stem, id } => Diagnostic::BoundsViolation { stem, id },
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownRule { stem, id } => {
                write!(f, "invalid stem change id {id}, stem '{stem}'")
            }
            Diagnostic::BoundsViolation { stem, id } => {
                write!(f, "stem '{stem}' is out of bounds for stem change {id}")
            }
            Diagnostic::VerificationMismatch {
                original,
                candidate,
                id,
                regenerated,
            } => write!(
                f,
                "'{candidate}' does not regenerate '{original}' under stem change {id}: [{}]",
                regenerated.join(", ")
            ),
        }
    }
}

/// Variants of a single engine call together with the diagnostics it raised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub variants: Vec<StemVariant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub(crate) fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn stems(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.stem.as_str()).collect()
    }
}
