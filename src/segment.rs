use smallvec::SmallVec;
use std::str::Split;

pub type Words<'a> = SmallVec<[&'a str; 4]>;

/// Comma-separated runs of whitespace-delimited words. Runs with no words
/// (doubled or stray commas) are skipped.
pub struct Segments<'a> {
    text: Split<'a, char>,
}

impl<'a> Segments<'a> {
    pub fn from_text(text: &'a str) -> Segments<'a> {
        Segments {
            text: text.split(','),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Words<'a>;

    fn next(&mut self) -> Option<Words<'a>> {
        loop {
            let words: Words<'a> = self.text.next()?.split_whitespace().collect();
            if !words.is_empty() {
                return Some(words);
            }
        }
    }
}
