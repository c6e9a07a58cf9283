use crate::case::lowercase;
use crate::namepart::NamePart;
use crate::options::Lexicon;
use smallvec::SmallVec;

// Keys are lowercase; values are the spelling used when re-casing, which is
// lowercase for most particles ("van", "de") but not all ("San", "St.")
static PREFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/prefixes.rs"));

static EXTENDED_PREFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/extended_prefixes.rs"));

static CONJUNCTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/conjunctions.rs"));

pub type NameParts<'a> = SmallVec<[NamePart<'a>; 4]>;

#[inline]
fn prefixes(lexicon: Lexicon) -> &'static phf::Map<&'static str, &'static str> {
    match lexicon {
        Lexicon::Standard => &PREFIXES,
        Lexicon::Extended => &EXTENDED_PREFIXES,
    }
}

#[inline]
pub fn is_prefix(word: &str, lexicon: Lexicon) -> bool {
    prefixes(lexicon).contains_key(lowercase(word).as_str())
}

#[inline]
pub fn is_conjunction(word: &str) -> bool {
    CONJUNCTIONS.contains(lowercase(word).as_str())
}

/// How a surname particle or conjunction is spelled inside a re-cased
/// surname, e.g. "de" for "DE".
pub fn canonical_particle(word: &str, lexicon: Lexicon) -> Option<&'static str> {
    let key = lowercase(word);
    prefixes(lexicon)
        .get(key.as_str())
        .copied()
        .or_else(|| CONJUNCTIONS.get_key(key.as_str()).copied())
}

/// Groups `words` into parts, attaching each particle to the words that
/// follow it and each conjunction to its neighbours on both sides.
///
/// A leading particle is only attached when `allow_leading` is set; at the
/// start of a name in natural order it is more likely to be a given name
/// ("Van Morrison").
pub fn join_particles<'a>(words: &[&'a str], allow_leading: bool, lexicon: Lexicon) -> NameParts<'a> {
    let mut parts: NameParts<'a> = words.iter().copied().map(NamePart::from_word).collect();

    // Work backwards so that runs like "de la" collapse into one part
    if parts.len() > 1 {
        let start = if allow_leading { 0 } else { 1 };
        for i in (start..parts.len() - 1).rev() {
            if is_prefix(parts[i].first_word(), lexicon) {
                let next = parts.remove(i + 1);
                parts[i].append(next);
                parts[i].particle = true;
            }
        }
    }

    if parts.len() > 2 {
        let mut i = parts.len() - 2;
        while i >= 1 {
            if parts[i].is_single_word() && is_conjunction(parts[i].first_word()) {
                let right = parts.remove(i + 1);
                let conjunction = parts.remove(i);
                parts[i - 1].append(conjunction);
                parts[i - 1].append(right);

                // parts[i - 1] now ends in a surname, so it can't be a conjunction
                if i < 2 {
                    break;
                }
                i -= 2;
            } else {
                i -= 1;
            }
        }
    }

    parts
}

/// Index of the first part that belongs to the surname, for a name in
/// natural order. That is the first particle-led part after the given name,
/// falling back to the final part.
pub fn find_surname_index(parts: &[NamePart]) -> usize {
    if parts.len() < 2 {
        return 0;
    }

    parts[1..]
        .iter()
        .position(|part| part.particle)
        .map(|i| i + 1)
        .unwrap_or(parts.len() - 1)
}
