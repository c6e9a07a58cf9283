use compact_str::CompactString;
use smallvec::SmallVec;

/// One or more words that are classified as a unit, e.g. "Martinez" or
/// the particle-led surname "de la Véña".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePart<'a> {
    words: SmallVec<[&'a str; 2]>,
    /// Set when the part begins with a surname particle that absorbed the
    /// words after it
    pub particle: bool,
}

impl<'a> NamePart<'a> {
    pub fn from_word(word: &'a str) -> NamePart<'a> {
        let mut words = SmallVec::new();
        words.push(word);
        NamePart {
            words,
            particle: false,
        }
    }

    #[inline]
    pub fn first_word(&self) -> &'a str {
        self.words[0]
    }

    #[inline]
    pub fn is_single_word(&self) -> bool {
        self.words.len() == 1
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn append(&mut self, other: NamePart<'a>) {
        self.words.extend(other.words);
    }

    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.words.iter().copied()
    }

    pub fn joined(&self) -> CompactString {
        join_words(self.words(), " ")
    }
}

/// Space-separated text of every word in `parts`.
pub fn join_parts(parts: &[NamePart]) -> CompactString {
    join_words(parts.iter().flat_map(NamePart::words), " ")
}

pub fn join_words<'a, I>(words: I, separator: &str) -> CompactString
where
    I: IntoIterator<Item = &'a str>,
{
    let mut result = CompactString::default();
    for word in words {
        if !result.is_empty() {
            result.push_str(separator);
        }
        result.push_str(word);
    }
    result
}
