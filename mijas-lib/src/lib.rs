pub mod catalog;
pub mod forward;
pub mod inverse;
pub mod latgalian;
pub mod output;
mod stem;
pub mod syllables;
pub mod types;
pub mod verify;

pub use catalog::{Alternation, StemChange};
pub use forward::{forward, forward_resolution};
pub use inverse::{inverse, inverse_resolution};
pub use syllables::syllables;
pub use types::{AttributeValues, Degree, Diagnostic, Resolution, StemVariant};
pub use verify::{verify, verify_report, Verification};
