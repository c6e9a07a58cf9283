//! Splits a free-form personal name into title, first, middle, last,
//! nickname and suffix, and repairs its capitalization when the input was
//! all one case.
//!
//! ```
//! use full_name::ParsedName;
//!
//! let name = ParsedName::parse("MR. JÜAN MARTINEZ (MARTIN) DE LORENZO Y GUTIEREZ JR.");
//! assert_eq!("Mr.", name.title);
//! assert_eq!("Jüan", name.first);
//! assert_eq!("Martinez", name.middle);
//! assert_eq!("de Lorenzo y Gutierez", name.last);
//! assert_eq!("Martin", name.nick);
//! assert_eq!("Jr.", name.suffix);
//! assert!(name.error.is_empty());
//! ```

mod case;
mod decomposition;
mod error;
mod namecase;
mod namepart;
mod nickname;
mod options;
mod parse;
mod segment;
mod suffix;
mod surname;
mod title;

#[cfg(feature = "serialization")]
mod serialization;

use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

pub use error::{Error, Result};
pub use options::{FixCase, Lexicon, ParseOptions};
pub use parse::MAX_MIDDLE_NAMES;

/// One of the six output fields, for single-field extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    First,
    Middle,
    Last,
    Nick,
    Suffix,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::First,
        Field::Middle,
        Field::Last,
        Field::Nick,
        Field::Suffix,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::First => "first",
            Field::Middle => "middle",
            Field::Last => "last",
            Field::Nick => "nick",
            Field::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Field> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_argument(
                    "field",
                    format!("expected one of title|first|middle|last|nick|suffix, got {:?}", s),
                )
            })
    }
}

/// Something about the input made the result less trustworthy. Parsing
/// still produces its best guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// No input at all, as opposed to an empty string
    NoInput,
    /// Implausibly many middle names, suggesting the input is not a name
    TooManyMiddleNames(usize),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::NoInput => f.write_str("Error: No input"),
            Warning::TooManyMiddleNames(n) => write!(f, "Error: {} middle names", n),
        }
    }
}

/// The six fields of a parsed name, each possibly empty, plus any warnings.
///
/// Multiple titles or suffixes are joined with `", "`; multiple middle names
/// with a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct ParsedName {
    pub title: CompactString,
    pub first: CompactString,
    pub middle: CompactString,
    pub last: CompactString,
    pub nick: CompactString,
    pub suffix: CompactString,
    pub error: Vec<Warning>,
}

impl ParsedName {
    /// Parses with default options: the standard lexicon, and re-casing only
    /// when the input is entirely upper- or lower-case.
    pub fn parse(name: &str) -> ParsedName {
        parse_name(Some(name), &ParseOptions::default())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::First => &self.first,
            Field::Middle => &self.middle,
            Field::Last => &self.last,
            Field::Nick => &self.nick,
            Field::Suffix => &self.suffix,
        }
    }

    pub fn into_field(self, field: Field) -> CompactString {
        match field {
            Field::Title => self.title,
            Field::First => self.first,
            Field::Middle => self.middle,
            Field::Last => self.last,
            Field::Nick => self.nick,
            Field::Suffix => self.suffix,
        }
    }

    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.error.is_empty()
    }

    /// First, middle and last names in natural order.
    ///
    /// ```
    /// use full_name::ParsedName;
    ///
    /// let name = ParsedName::parse("Davis, David William");
    /// assert_eq!("David William Davis", name.display_full());
    /// ```
    pub fn display_full(&self) -> String {
        let mut result =
            String::with_capacity(self.first.len() + self.middle.len() + self.last.len() + 2);
        for part in [&self.first, &self.middle, &self.last] {
            if part.is_empty() {
                continue;
            }
            if !result.is_empty() {
                result.push(' ');
            }
            result.push_str(part);
        }
        result
    }

    fn fix_case(&mut self, lexicon: Lexicon) {
        for field in Field::ALL {
            let value = self.get(field);
            if value.is_empty() {
                continue;
            }

            let fixed = namecase::namecase_field(field, value, lexicon);
            match field {
                Field::Title => self.title = fixed,
                Field::First => self.first = fixed,
                Field::Middle => self.middle = fixed,
                Field::Last => self.last = fixed,
                Field::Nick => self.nick = fixed,
                Field::Suffix => self.suffix = fixed,
            }
        }
    }
}

impl From<parse::Classified> for ParsedName {
    fn from(classified: parse::Classified) -> ParsedName {
        ParsedName {
            title: classified.title,
            first: classified.first,
            middle: classified.middle,
            last: classified.last,
            nick: classified.nick,
            suffix: classified.suffix,
            error: classified
                .excess_middle_names
                .map(Warning::TooManyMiddleNames)
                .into_iter()
                .collect(),
        }
    }
}

/// Parses `name` into its six fields. `None` stands for absent input and
/// yields a [`Warning::NoInput`]; an empty or blank string yields six empty
/// fields and no warning.
///
/// Never fails: bad input degrades to a best guess plus warnings.
///
/// ```
/// use full_name::{parse_name, ParseOptions, Warning};
///
/// let options = ParseOptions::new().with_fix_case_override(true);
/// let name = parse_name(Some("jüan de la véña"), &options);
/// assert_eq!("Jüan", name.first);
/// assert_eq!("de la Véña", name.last);
///
/// let name = parse_name(None, &options);
/// assert_eq!(vec![Warning::NoInput], name.error);
/// ```
pub fn parse_name(name: Option<&str>, options: &ParseOptions) -> ParsedName {
    let name = match name {
        Some(name) => name,
        None => {
            trace!("no input");
            return ParsedName {
                error: vec![Warning::NoInput],
                ..ParsedName::default()
            };
        }
    };

    trace!(input = name, ?options, "parsing name");

    let normalized = decomposition::normalize_nfc_whitespace(name);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return ParsedName::default();
    }

    let mixed_case = case::is_mixed_case(trimmed);
    let mut parsed = ParsedName::from(parse::parse(trimmed, options.lexicon, mixed_case));

    if options.should_fix_case(mixed_case) {
        parsed.fix_case(options.lexicon);
    }

    parsed
}

/// Parses `name` and returns just one of its fields.
///
/// ```
/// use full_name::{parse_field, Field, ParseOptions};
///
/// let last = parse_field(Some("Vincent Van Gogh"), Field::Last, &ParseOptions::default());
/// assert_eq!("Van Gogh", last);
/// ```
pub fn parse_field(name: Option<&str>, field: Field, options: &ParseOptions) -> CompactString {
    parse_name(name, options).into_field(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names() {
        for field in Field::ALL {
            assert_eq!(Ok(field), field.as_str().parse());
        }
        assert_eq!(Ok(Field::Nick), "NICK".parse());
        assert!(matches!(
            "initials".parse::<Field>(),
            Err(Error::InvalidArgument {
                argument: "field",
                ..
            })
        ));
    }

    #[test]
    fn warning_messages() {
        assert_eq!("Error: No input", Warning::NoInput.to_string());
        assert_eq!(
            "Error: 19 middle names",
            Warning::TooManyMiddleNames(19).to_string()
        );
    }

    #[test]
    fn no_input() {
        let parsed = parse_name(None, &ParseOptions::default());
        assert_eq!(vec![Warning::NoInput], parsed.error);
        assert_eq!("", parsed.first);
    }

    #[test]
    fn blank_input() {
        assert_eq!(ParsedName::default(), ParsedName::parse(""));
        assert_eq!(ParsedName::default(), ParsedName::parse(" \t "));
    }

    #[test]
    fn get_matches_fields() {
        let parsed = ParsedName::parse("Dr. David William Davis (Dave), Jr.");
        assert_eq!("Dr.", parsed.get(Field::Title));
        assert_eq!("David", parsed.get(Field::First));
        assert_eq!("William", parsed.get(Field::Middle));
        assert_eq!("Davis", parsed.get(Field::Last));
        assert_eq!("Dave", parsed.get(Field::Nick));
        assert_eq!("Jr.", parsed.get(Field::Suffix));
    }

    #[test]
    fn decomposed_input() {
        let parsed = ParsedName::parse("GERALD BO\u{308}CK");
        assert_eq!("Gerald", parsed.first);
        assert_eq!("Böck", parsed.last);
    }

    #[test]
    fn display() {
        let parsed = ParsedName::parse("Mr. Jüan Martinez (Martin) de Lorenzo y Gutierez Jr.");
        assert_eq!("Jüan Martinez de Lorenzo y Gutierez", parsed.display_full());
        assert_eq!("Madonna", ParsedName::parse("Madonna").display_full());
    }
}
