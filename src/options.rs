use crate::error::{Error, Result};
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Whether the case-fixing stage may be steered by
/// [`ParseOptions::fix_case_override`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum FixCase {
    /// Re-case only when the whole input is upper- or lower-case.
    #[default]
    None,
    /// Consult the override flag.
    All,
}

impl FromStr for FixCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<FixCase> {
        if s.eq_ignore_ascii_case("all") {
            Ok(FixCase::All)
        } else {
            Err(Error::invalid_argument(
                "fix_case",
                format!("expected \"all\", got {:?}", s),
            ))
        }
    }
}

/// Which bundled word lists classify titles, suffixes and surname particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Lexicon {
    #[default]
    Standard,
    /// Adds international titles, professional designations and
    /// less common particles. More recall, more false positives.
    Extended,
}

/// Per-call parser configuration. There is no process-wide default to mutate;
/// `ParseOptions::default()` is automatic case detection with the standard
/// lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ParseOptions {
    pub fix_case: FixCase,
    pub fix_case_override: Option<bool>,
    pub lexicon: Lexicon,
}

impl ParseOptions {
    pub fn new() -> ParseOptions {
        ParseOptions::default()
    }

    /// Builds options from loosely typed arguments, as they might arrive from
    /// a form or command line.
    ///
    /// # Examples
    /// ```
    /// use full_name::ParseOptions;
    ///
    /// let options = ParseOptions::from_raw(Some("all"), Some(1)).unwrap();
    /// assert_eq!(Some(true), options.fix_case_override);
    ///
    /// assert!(ParseOptions::from_raw(Some("all"), Some(-1)).is_err());
    /// assert!(ParseOptions::from_raw(Some("some"), None).is_err());
    /// ```
    pub fn from_raw(fix_case: Option<&str>, fix_case_override: Option<i64>) -> Result<ParseOptions> {
        let fix_case = match fix_case {
            Some(s) => s.parse()?,
            None => FixCase::None,
        };

        let fix_case_override = match fix_case_override {
            Some(0) => Some(false),
            Some(1) => Some(true),
            Some(other) => {
                return Err(Error::invalid_argument(
                    "fix_case_override",
                    format!("expected 0 or 1, got {}", other),
                ))
            }
            None => None,
        };

        Ok(ParseOptions {
            fix_case,
            fix_case_override,
            lexicon: Lexicon::Standard,
        })
    }

    /// Forces (`true`) or forbids (`false`) re-casing, regardless of the
    /// input's own casing.
    pub fn with_fix_case_override(mut self, fix: bool) -> ParseOptions {
        self.fix_case = FixCase::All;
        self.fix_case_override = Some(fix);
        self
    }

    pub fn with_lexicon(mut self, lexicon: Lexicon) -> ParseOptions {
        self.lexicon = lexicon;
        self
    }

    /// `mixed_case` is whether the trimmed input contains both upper- and
    /// lower-case letters.
    pub(crate) fn should_fix_case(&self, mixed_case: bool) -> bool {
        match (self.fix_case, self.fix_case_override) {
            (FixCase::All, Some(fix)) => fix,
            _ => !mixed_case,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_auto_detection() {
        let options = ParseOptions::default();
        assert!(options.should_fix_case(false));
        assert!(!options.should_fix_case(true));
    }

    #[test]
    fn override_ignored_without_fix_case_all() {
        let options = ParseOptions {
            fix_case_override: Some(true),
            ..ParseOptions::default()
        };
        assert!(!options.should_fix_case(true));
    }

    #[test]
    fn override_forces_either_way() {
        let force = ParseOptions::new().with_fix_case_override(true);
        assert!(force.should_fix_case(true));

        let forbid = ParseOptions::new().with_fix_case_override(false);
        assert!(!forbid.should_fix_case(false));
    }

    #[test]
    fn fix_case_all_alone_is_auto() {
        let options = ParseOptions::from_raw(Some("ALL"), None).unwrap();
        assert_eq!(FixCase::All, options.fix_case);
        assert!(options.should_fix_case(false));
        assert!(!options.should_fix_case(true));
    }

    #[test]
    fn raw_override_values() {
        assert_eq!(
            Some(false),
            ParseOptions::from_raw(Some("all"), Some(0))
                .unwrap()
                .fix_case_override
        );
        assert_eq!(
            Some(true),
            ParseOptions::from_raw(Some("all"), Some(1))
                .unwrap()
                .fix_case_override
        );
    }

    #[test]
    fn invalid_raw_values() {
        assert!(matches!(
            ParseOptions::from_raw(Some("all"), Some(-1)),
            Err(Error::InvalidArgument {
                argument: "fix_case_override",
                ..
            })
        ));
        assert!(ParseOptions::from_raw(None, Some(2)).is_err());
        assert!(matches!(
            ParseOptions::from_raw(Some("title"), None),
            Err(Error::InvalidArgument {
                argument: "fix_case",
                ..
            })
        ));
    }
}
