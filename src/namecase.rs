use crate::case::capitalize_word;
use crate::options::Lexicon;
use crate::{suffix, surname, title, Field};
use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;

// Unknown postfixes this short are taken to be acronyms ("CLU")
const MAX_ACRONYM_LEN: usize = 5;

/// Re-cases every word of one parsed field.
pub fn namecase_field(field: Field, value: &str, lexicon: Lexicon) -> CompactString {
    let mut result = CompactString::with_capacity(value.len());
    let mut words = value.split(' ').peekable();
    // Suffix entries are separated by commas, e.g. "Jr., Board of Directors"
    let mut entry_start = true;

    while let Some(word) = words.next() {
        let is_final = words.peek().is_none();

        // "Jr., CLU" keeps its separating commas
        let (word, comma) = match word.strip_suffix(',') {
            Some(word) => (word, ","),
            None => (word, ""),
        };
        let entry_end = is_final || !comma.is_empty();

        let case = match field {
            Field::Middle | Field::Last if !is_final => WordCase::MaybeParticle,
            Field::Suffix if entry_start && entry_end => WordCase::WholeEntry,
            Field::Suffix if !entry_start => WordCase::MaybeParticle,
            _ => WordCase::Plain,
        };
        result.push_str(&namecase_word(field, word, case, lexicon));
        result.push_str(comma);

        if !is_final {
            result.push(' ');
        }
        entry_start = entry_end;
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Plain,
    // Not the last word of a surname, or inside a multi-word suffix entry
    MaybeParticle,
    // A single-word suffix entry, which may be an acronym
    WholeEntry,
}

fn namecase_word(field: Field, word: &str, case: WordCase, lexicon: Lexicon) -> String {
    if word.is_empty() {
        return String::new();
    }

    match field {
        Field::Title => {
            if let Some(canonical) = title::canonical_title(word, lexicon) {
                return with_period_of(canonical, word);
            }
        }
        Field::Suffix => {
            if let Some(canonical) = suffix::canonical_suffix(word, lexicon) {
                return with_period_of(canonical, word);
            } else if case == WordCase::WholeEntry
                && !word.contains('.')
                && word.chars().count() <= MAX_ACRONYM_LEN
            {
                return word.to_uppercase();
            }
        }
        _ => {}
    }

    if case == WordCase::MaybeParticle {
        if let Some(particle) = surname::canonical_particle(word, lexicon) {
            return particle.to_string();
        }
    }

    // Initial
    if word.graphemes(true).nth(1).is_none() {
        return word.to_uppercase();
    }

    namecase(word)
}

// Lexicon spellings are stored without the trailing period
fn with_period_of(canonical: &str, word: &str) -> String {
    let mut result = canonical.to_string();
    if word.ends_with('.') {
        result.push('.');
    }
    result
}

pub fn namecase(word: &str) -> String {
    let result = capitalize_word(word);

    if result.starts_with("Mc") && result.len() > 3 {
        "Mc".to_string() + &capitalize_word(&result[2..])
    } else {
        result
    }
}
