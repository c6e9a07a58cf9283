use crate::case::lowercase;
use crate::options::Lexicon;

static SUFFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

static EXTENDED_SUFFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/extended_suffixes.rs"));

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'A', 'E', 'I', 'O', 'U', 'Y'];

const MAX_ABBREVIATION_LETTERS: usize = 5;

#[inline]
fn suffixes(lexicon: Lexicon) -> &'static phf::Map<&'static str, &'static str> {
    match lexicon {
        Lexicon::Standard => &SUFFIXES,
        Lexicon::Extended => &EXTENDED_SUFFIXES,
    }
}

/// The canonical spelling of `word` (minus any trailing period) if it is a
/// generational or professional suffix, e.g. "Jr" for "JR." or "Ph.D" for
/// "ph.d.".
pub fn canonical_suffix(word: &str, lexicon: Lexicon) -> Option<&'static str> {
    let key = lowercase(word.strip_suffix('.').unwrap_or(word));
    suffixes(lexicon).get(key.as_str()).copied()
}

#[inline]
pub fn is_suffix(word: &str, lexicon: Lexicon) -> bool {
    canonical_suffix(word, lexicon).is_some()
}

/// Could a lone comma-separated trailing word be a credential we don't know
/// ("CLU", "F.R.C.S.") rather than a given name?
///
/// Without meaningful capitalization there is nothing to go on, so any word
/// qualifies.
pub fn is_postfix_abbreviation(word: &str, trust_capitalization: bool) -> bool {
    if !trust_capitalization || word.contains('.') {
        return true;
    }

    let mut letters = 0;
    let mut all_upper = true;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        letters += 1;
        all_upper &= c.is_uppercase();
    }

    (letters > 0 && letters <= MAX_ABBREVIATION_LETTERS && all_upper) || !word.contains(VOWELS)
}
