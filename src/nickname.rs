use std::borrow::Cow;
use std::ops::Range;

const DOUBLE_QUOTES: &[char] = &['"', '“', '”'];
const SINGLE_QUOTES: &[char] = &['\'', '‘', '’'];

#[derive(Debug, Clone, Copy)]
enum Close {
    // Brackets may sit anywhere and close at the first matching character
    Bracket(char),
    // Quotes may be curly or straight, in any combination within a class,
    // and only close at the end of a word
    Quote(&'static [char]),
}

#[inline]
fn close_if_opens_nickname(c: char, follows_whitespace: bool) -> Option<Close> {
    match c {
        '(' => Some(Close::Bracket(')')),
        '[' => Some(Close::Bracket(']')),
        // Otherwise a quote might be in-name punctuation, as in "O'Brien"
        _ if !follows_whitespace => None,
        '"' | '“' | '”' => Some(Close::Quote(DOUBLE_QUOTES)),
        '\'' | '‘' | '’' => Some(Close::Quote(SINGLE_QUOTES)),
        _ => None,
    }
}

#[inline]
fn closes_word(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(|c: char| c.is_whitespace() || c == ',')
}

// Byte range of the closing delimiter, searching from `from`
fn find_close(input: &str, from: usize, close: Close) -> Option<Range<usize>> {
    match close {
        Close::Bracket(close_char) => input[from..]
            .find(close_char)
            .map(|i| from + i..from + i + close_char.len_utf8()),
        Close::Quote(quotes) => input[from..]
            .char_indices()
            .map(|(i, c)| (from + i, c))
            .find(|&(i, c)| quotes.contains(&c) && closes_word(&input[i + c.len_utf8()..]))
            .map(|(i, c)| i..i + c.len_utf8()),
    }
}

struct NickSpan {
    open_at: usize,
    inner: Range<usize>,
    close_end: usize,
}

fn find_nickname(input: &str) -> Option<NickSpan> {
    let mut follows_whitespace = true;

    for (i, c) in input.char_indices() {
        if let Some(close) = close_if_opens_nickname(c, follows_whitespace) {
            let from = i + c.len_utf8();
            if let Some(found) = find_close(input, from, close) {
                if !input[from..found.start].trim().is_empty() {
                    return Some(NickSpan {
                        open_at: i,
                        inner: from..found.start,
                        close_end: found.end,
                    });
                }
            }
        }

        follows_whitespace = c.is_whitespace();
    }

    None
}

/// Finds the first quoted or bracketed nickname in `input` and returns it,
/// trimmed, along with the input minus the nickname, its delimiters and the
/// whitespace before it.
///
/// Unmatched delimiters and empty spans are left where they are.
pub fn strip_nickname(input: &str) -> (Option<&str>, Cow<'_, str>) {
    let span = match find_nickname(input) {
        Some(span) => span,
        None => return (None, Cow::Borrowed(input)),
    };

    let nick = input[span.inner].trim();
    let before = input[..span.open_at].trim_end();
    let after = &input[span.close_end..];

    let remainder = if before.is_empty() {
        Cow::Borrowed(after.trim_start())
    } else if after.trim().is_empty() {
        Cow::Borrowed(before)
    } else if after.starts_with(',') {
        // Keep the comma attached to the word before the nickname
        Cow::Owned(format!("{}{}", before, after))
    } else {
        Cow::Owned(format!("{} {}", before, after.trim_start()))
    };

    (Some(nick), remainder)
}
