use crate::namepart::{join_parts, join_words, NamePart};
use crate::nickname;
use crate::options::Lexicon;
use crate::segment::{Segments, Words};
use crate::suffix;
use crate::surname::{self, NameParts};
use crate::title;
use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::{debug, warn};

/// More middle-name words than this and the input is probably not a name,
/// so a warning is attached to the best-effort split.
pub const MAX_MIDDLE_NAMES: usize = 2;

/// Raw classification, before any re-casing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classified {
    pub title: CompactString,
    pub first: CompactString,
    pub middle: CompactString,
    pub last: CompactString,
    pub nick: CompactString,
    pub suffix: CompactString,
    /// Number of words in `middle`, when there were implausibly many
    pub excess_middle_names: Option<usize>,
}

#[derive(Debug)]
struct ParseOp<'a> {
    segments: SmallVec<[Words<'a>; 3]>,
    titles: Words<'a>,
    suffixes: Words<'a>,
    // Unrecognized trailing segments, kept verbatim
    postfixes: SmallVec<[CompactString; 2]>,
    lexicon: Lexicon,
    trust_capitalization: bool,
}

/// Splits already-normalized, non-empty text into name fields.
///
/// `trust_capitalization` should be false when the input is all one case,
/// since capitalization then says nothing about which words are
/// abbreviations.
pub fn parse(name: &str, lexicon: Lexicon, trust_capitalization: bool) -> Classified {
    let (nick, remainder) = nickname::strip_nickname(name);
    if let Some(nick) = nick {
        debug!(nick, "found nickname");
    }

    let mut op = ParseOp {
        segments: Segments::from_text(&remainder).collect(),
        titles: SmallVec::new(),
        suffixes: SmallVec::new(),
        postfixes: SmallVec::new(),
        lexicon,
        trust_capitalization,
    };

    let mut result = op.run();
    if let Some(nick) = nick {
        result.nick = nick.into();
    }
    result
}

impl<'a> ParseOp<'a> {
    fn run(&mut self) -> Classified {
        self.strip_suffixes();
        self.strip_titles();
        self.segments.retain(|segment| !segment.is_empty());
        self.strip_postfixes();

        let mut result = if self.segments.len() > 1 {
            self.handle_inverted()
        } else {
            self.handle_natural()
        };

        result.title = join_words(self.titles.iter().copied(), ", ");
        result.suffix = join_words(
            self.suffixes
                .iter()
                .copied()
                .chain(self.postfixes.iter().map(CompactString::as_str)),
            ", ",
        );
        result
    }

    // The first word of the input is never a suffix; "Jr" or "II" there
    // can only be a (strange) given name
    fn strip_suffixes(&mut self) {
        let lexicon = self.lexicon;
        let suffixes = &mut self.suffixes;
        let mut position = 0;

        for segment in self.segments.iter_mut() {
            segment.retain(|word| {
                let keep = position == 0 || !suffix::is_suffix(word, lexicon);
                if !keep {
                    suffixes.push(*word);
                }
                position += 1;
                keep
            });
        }
    }

    fn strip_titles(&mut self) {
        let lexicon = self.lexicon;
        let titles = &mut self.titles;

        for segment in self.segments.iter_mut() {
            segment.retain(|word| {
                let keep = !title::is_title(word, lexicon);
                if !keep {
                    titles.push(*word);
                }
                keep
            });
        }
    }

    // Handles "John P. Doe-Ray, Jr., CLU, CFP" and "Doe, John, CPA": trailing
    // one-word segments are postfixes as long as enough name is left
    fn strip_postfixes(&mut self) {
        let mut popped: SmallVec<[&'a str; 2]> = SmallVec::new();

        while self.segments.len() > 1 {
            let words: usize = self.segments.iter().map(|segment| segment.len()).sum();
            let last = &self.segments[self.segments.len() - 1];
            if last.len() != 1 || words < 3 {
                break;
            }

            let word = last[0];
            let inverted_with_extra = self.segments.len() > 2;
            let natural_with_postfix = self.segments[0].len() > 1
                && suffix::is_postfix_abbreviation(word, self.trust_capitalization);
            if !inverted_with_extra && !natural_with_postfix {
                break;
            }

            popped.insert(0, word);
            self.segments.pop();
        }

        // "Last, First Middle, anything else"
        if self.segments.len() > 2 {
            for segment in self.segments.drain(2..) {
                self.postfixes.push(join_words(segment, " "));
            }
        }

        self.postfixes.extend(popped.into_iter().map(CompactString::from));

        if !self.postfixes.is_empty() {
            debug!(postfixes = ?self.postfixes, "treating trailing segments as suffixes");
        }
    }

    fn handle_natural(&self) -> Classified {
        let mut result = Classified::default();
        let words = match self.segments.first() {
            Some(words) => words,
            None => return result,
        };

        let parts = surname::join_particles(words, false, self.lexicon);
        match parts.len() {
            0 => {}
            1 => result.first = parts[0].joined(),
            _ => {
                // A particle-led surname stays whole even when the middle is
                // implausibly long; without one, this is first part, last
                // part and everything between
                let surname_index = surname::find_surname_index(&parts);
                let middle = &parts[1..surname_index];

                result.first = parts[0].joined();
                result.middle = join_parts(middle);
                result.last = join_parts(&parts[surname_index..]);
                result.excess_middle_names = excess_middle_names(middle);
            }
        }

        result
    }

    fn handle_inverted(&self) -> Classified {
        debug!("comma-inverted order");

        let surname_parts = surname::join_particles(&self.segments[0], true, self.lexicon);
        let given: NameParts = surname::join_particles(&self.segments[1], false, self.lexicon);

        let mut result = Classified {
            last: join_parts(&surname_parts),
            ..Classified::default()
        };

        if let Some((first, middle)) = given.split_first() {
            result.first = first.joined();
            result.middle = join_parts(middle);
            result.excess_middle_names = excess_middle_names(middle);
        }

        result
    }
}

// Counts words rather than parts, so "e" or "and" inside a run of garbage
// still counts
fn excess_middle_names(middle: &[NamePart]) -> Option<usize> {
    let middle_names: usize = middle.iter().map(NamePart::word_count).sum();
    if middle_names > MAX_MIDDLE_NAMES {
        warn!(middle_names, "implausible number of middle names");
        Some(middle_names)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> Classified {
        parse(name, Lexicon::Standard, true)
    }

    #[test]
    fn first_last() {
        let result = classify("David Davis");
        assert_eq!("David", result.first);
        assert_eq!("", result.middle);
        assert_eq!("Davis", result.last);
    }

    #[test]
    fn single_word() {
        let result = classify("Madonna");
        assert_eq!("Madonna", result.first);
        assert_eq!("", result.last);
    }

    #[test]
    fn inverted() {
        let result = classify("Davis, David William");
        assert_eq!("David", result.first);
        assert_eq!("William", result.middle);
        assert_eq!("Davis", result.last);
    }

    #[test]
    fn particles() {
        let result = classify("Jüan Martinez de Lorenzo y Gutierez");
        assert_eq!("Jüan", result.first);
        assert_eq!("Martinez", result.middle);
        assert_eq!("de Lorenzo y Gutierez", result.last);
    }

    #[test]
    fn title_and_suffix() {
        let result = classify("Mr. Jüan Martinez (Martin) de Lorenzo y Gutierez Jr.");
        assert_eq!("Mr.", result.title);
        assert_eq!("Jüan", result.first);
        assert_eq!("Martin", result.nick);
        assert_eq!("Jr.", result.suffix);
    }

    #[test]
    fn suffix_is_never_first() {
        let result = classify("Jr. Smith");
        assert_eq!("Jr.", result.first);
        assert_eq!("Smith", result.last);
        assert_eq!("", result.suffix);
    }

    #[test]
    fn postfix_abbreviations() {
        let result = classify("John P. Doe-Ray, Jr., CLU, CFP, LUTC");
        assert_eq!("John", result.first);
        assert_eq!("P.", result.middle);
        assert_eq!("Doe-Ray", result.last);
        assert_eq!("Jr., CLU, CFP, LUTC", result.suffix);

        let result = classify("Doe-Ray, John P., Jr., CLU, CFP, LUTC");
        assert_eq!("John", result.first);
        assert_eq!("P.", result.middle);
        assert_eq!("Doe-Ray", result.last);
        assert_eq!("Jr., CLU, CFP, LUTC", result.suffix);
    }

    #[test]
    fn given_name_after_comma_is_not_a_postfix() {
        let result = classify("Garcia Lopez, Maria");
        assert_eq!("Maria", result.first);
        assert_eq!("Garcia Lopez", result.last);
        assert_eq!("", result.suffix);
    }

    #[test]
    fn all_caps_postfix() {
        let result = parse("JOHN SMITH, CPA", Lexicon::Standard, false);
        assert_eq!("JOHN", result.first);
        assert_eq!("SMITH", result.last);
        assert_eq!("CPA", result.suffix);
    }

    #[test]
    fn extra_segments_kept_verbatim() {
        let result = classify("Smith, John, Board of Directors");
        assert_eq!("John", result.first);
        assert_eq!("Smith", result.last);
        assert_eq!("Board of Directors", result.suffix);
    }

    #[test]
    fn multiple_titles() {
        let result = classify("Prof. Dr. Hans Meier");
        assert_eq!("Prof., Dr.", result.title);
        assert_eq!("Hans", result.first);
        assert_eq!("Meier", result.last);
    }

    #[test]
    fn garbage() {
        let result = classify("a b c d g h");
        assert_eq!("a", result.first);
        assert_eq!("b c d g", result.middle);
        assert_eq!("h", result.last);
        assert_eq!(Some(4), result.excess_middle_names);
    }

    #[test]
    fn garbage_inverted() {
        let result = classify("Smith, a b c d");
        assert_eq!("a", result.first);
        assert_eq!("b c d", result.middle);
        assert_eq!("Smith", result.last);
        assert_eq!(Some(3), result.excess_middle_names);
    }

    #[test]
    fn garbage_with_conjunctions() {
        let result = classify("this is not a name at all and the parser should warn");
        assert_eq!("this", result.first);
        assert_eq!("is not a name at all and the parser should", result.middle);
        assert_eq!("warn", result.last);
        assert_eq!(Some(10), result.excess_middle_names);

        let result = classify("Smith, a b c d e f");
        assert_eq!("a", result.first);
        assert_eq!("b c d e f", result.middle);
        assert_eq!(Some(5), result.excess_middle_names);
    }

    #[test]
    fn long_middle_keeps_particle_surname() {
        let result = classify("A B C D de X Y");
        assert_eq!("A", result.first);
        assert_eq!("B C D", result.middle);
        assert_eq!("de X Y", result.last);
        assert_eq!(Some(3), result.excess_middle_names);
    }

    #[test]
    fn nothing_left() {
        let result = classify("Dr.");
        assert_eq!("Dr.", result.title);
        assert_eq!("", result.first);
    }
}
