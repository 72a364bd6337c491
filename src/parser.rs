//! Extraction of `<ENAMEX>` annotations from Balie's output.
//!
//! Records print as Rust tuple literals, `("Boy George", "PERSON")`, not as
//! the Python tuple reprs (`('Boy George', 'PERSON')`) older Balie wrappers emitted.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// `<ENAMEX ... TYPE="..." ... ALIAS="...">text</ENAMEX>`
///
/// Only the tag name is case-insensitive; attribute names must be exactly
/// `TYPE` and `ALIAS`. The enclosed text may span lines.
static ENAMEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)<(?i:enamex)\s+[^>]*?TYPE="(?P<type>\w+)"\s+[^>]*?ALIAS="(?P<alias>\w+)">(?P<entity>.+?)</(?i:enamex)>"#,
    )
    .expect("ENAMEX pattern is valid")
});

/// A recognized entity mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntity {
    /// Surface text exactly as it appeared between the tags
    pub text: String,
    /// Type label, e.g. `PERSON` or `LOCATION`
    pub entity_type: String,
    /// Balie's internal alias id; not part of the printed form
    pub alias: String,
}

impl NamedEntity {
    /// The `(text, type)` pair.
    #[must_use]
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.text, &self.entity_type)
    }
}

/// Prints as a tuple literal: `("Boy George", "PERSON")`.
impl fmt::Display for NamedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.text, self.entity_type)
    }
}

/// All annotations in `output`, in document order.
#[must_use]
pub fn parse_annotations(output: &str) -> Vec<NamedEntity> {
    ENAMEX_RE
        .captures_iter(output)
        .map(|caps| NamedEntity {
            text: caps["entity"].to_string(),
            entity_type: caps["type"].to_string(),
            alias: caps["alias"].to_string(),
        })
        .collect()
}
