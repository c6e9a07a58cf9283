use crate::decomposition::is_combining;
use compact_str::CompactString;

#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::from_u32s(x, y, 0)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_u32s(x, y, z)
    }

    // Zero marks the end of the mapping; a leading zero means the character
    // maps to itself
    #[inline]
    fn from_u32s(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            (Some(x), Some(y), Some(z)) if x != '\0' && y != '\0' && z != '\0' => {
                CaseMapping::Triple(x, y, z)
            }
            (Some(x), Some(y), _) if x != '\0' && y != '\0' => CaseMapping::Double(x, y),
            (Some(x), _, _) if x != '\0' => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

/// Lowercased copy of `word`, for lexicon lookups. Short words stay inline.
pub fn lowercase(word: &str) -> CompactString {
    word.chars()
        .flat_map(|c| {
            let mapped = CaseMapping::lowercase(c);
            if matches!(mapped, CaseMapping::Empty) {
                CaseMapping::Single(c)
            } else {
                mapped
            }
        })
        .collect()
}

// Specialized for name-casing: every letter that follows a separator
// (hyphen, apostrophe, period...) starts a new capitalized run
pub fn capitalize_word(word: &str) -> String {
    const NONASCII_HYPHENS: &str = "\u{2010}‑‒–—―−－﹘﹣";

    if word.is_empty() {
        return String::new();
    }

    if word.bytes().all(|b| b.is_ascii_alphabetic()) {
        let bytes = word.as_bytes();
        let mut result = String::with_capacity(word.len());
        result.push(bytes[0].to_ascii_uppercase() as char);
        result.extend(bytes[1..].iter().map(|c| c.to_ascii_lowercase() as char));
        result
    } else {
        let mut capitalize_next = true;
        let mut result = String::with_capacity(word.len());

        for c in word.chars() {
            let mapped = if capitalize_next {
                CaseMapping::titlecase(c)
            } else {
                CaseMapping::lowercase(c)
            };

            if !matches!(mapped, CaseMapping::Empty) {
                result.extend(mapped);
                capitalize_next = false;
            } else {
                // No case mapping, which is a prerequisite for being a separator
                capitalize_next = !c.is_alphanumeric() && !is_combining(c);
                if capitalize_next && NONASCII_HYPHENS.contains(c) {
                    result.push('-');
                } else {
                    result.push(c);
                }
            }
        }

        result
    }
}

/// True when the text has both upper- and lower-case letters. Non-letters
/// are ignored, so text without letters is not mixed-case.
pub fn is_mixed_case(s: &str) -> bool {
    let mut has_lowercase = false;
    let mut has_uppercase = false;
    let mut iter = s.chars();

    loop {
        match iter.next() {
            Some(c) => {
                if c.is_uppercase() {
                    has_uppercase = true;
                    break;
                } else if c.is_lowercase() {
                    has_lowercase = true;
                    break;
                }
            }
            None => {
                return false;
            }
        }
    }

    if has_lowercase {
        iter.any(|c| c.is_uppercase())
    } else {
        debug_assert!(has_uppercase);
        iter.any(|c| c.is_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalization() {
        assert_eq!("A", capitalize_word("a"));
        assert_eq!("Aa", capitalize_word("aa"));
        assert_eq!("Aa", capitalize_word("AA"));
        assert_eq!("Aa-Bb", capitalize_word("aa-bb"));
        assert_eq!("Aa-Bb", capitalize_word("AA-BB"));
        assert_eq!("Ss", capitalize_word("ß"));
    }

    #[test]
    fn capitalization_nonascii() {
        assert_eq!("Jüan", capitalize_word("JÜAN"));
        assert_eq!("Véña", capitalize_word("véña"));
        assert_eq!("Böck", capitalize_word("BÖCK"));
        assert_eq!("Karl-Heinz", capitalize_word("KARL-HEINZ"));
    }

    #[test]
    fn capitalization_after_punctuation() {
        assert_eq!("O'Brien", capitalize_word("O'BRIEN"));
        assert_eq!("Mr.", capitalize_word("MR."));
        assert_eq!("O.J.", capitalize_word("o.j."));
        assert_eq!("Karl-Heinz", capitalize_word("karl–heinz"));
    }

    #[test]
    fn capitalization_with_digits() {
        assert_eq!("3rd", capitalize_word("3RD"));
    }

    #[test]
    fn lowercasing() {
        assert_eq!("jr.", lowercase("JR."));
        assert_eq!("véña", lowercase("VÉÑA"));
        assert_eq!("l'", lowercase("L'"));
    }

    #[test]
    fn mixed_case() {
        assert!(is_mixed_case("John SMITH"));
        assert!(is_mixed_case("J. MacDonald"));
        assert!(!is_mixed_case("JOHN MACDONALD"));
        assert!(!is_mixed_case("jüan de la véña"));
        assert!(!is_mixed_case(";; 123"));
        assert!(!is_mixed_case(""));
    }
}
