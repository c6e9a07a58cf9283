use crate::case::lowercase;
use crate::options::Lexicon;

// Keys are lowercase without a trailing period; values are the canonical
// spelling, also without the period
static TITLES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/titles.rs"));

static EXTENDED_TITLES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/extended_titles.rs"));

#[inline]
fn titles(lexicon: Lexicon) -> &'static phf::Map<&'static str, &'static str> {
    match lexicon {
        Lexicon::Standard => &TITLES,
        Lexicon::Extended => &EXTENDED_TITLES,
    }
}

/// The canonical spelling of `word` (minus any trailing period) if it is an
/// honorific such as "Dr." or "MRS".
pub fn canonical_title(word: &str, lexicon: Lexicon) -> Option<&'static str> {
    let key = lowercase(word.strip_suffix('.').unwrap_or(word));
    titles(lexicon).get(key.as_str()).copied()
}

#[inline]
pub fn is_title(word: &str, lexicon: Lexicon) -> bool {
    canonical_title(word, lexicon).is_some()
}
