//! Sentence segmentation and title/summary hints

use regex::Regex;
use std::str::Lines;
use std::sync::LazyLock;

/// A run of non-terminal characters closed by one or more `.`, `!` or `?`
static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Splits text into trimmed segments for classification
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    min_chars: usize,
}

impl Segmenter {
    /// Create a segmenter that drops segments shorter than `min_chars`
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Iterate the segments of `text`
    ///
    /// Text with sentence punctuation is split into sentences; text without
    /// any is split into lines instead. Each call starts from the beginning.
    pub fn segments<'t>(&self, text: &'t str) -> Segments<'t> {
        let pieces = if SENTENCE.is_match(text) {
            Pieces::Sentences(SENTENCE.find_iter(text))
        } else {
            Pieces::Lines(text.lines())
        };
        Segments {
            pieces,
            min_chars: self.min_chars,
        }
    }
}

enum Pieces<'t> {
    Sentences(regex::Matches<'static, 't>),
    Lines(Lines<'t>),
}

/// Lazy sequence of segments borrowed from the input text
pub struct Segments<'t> {
    pieces: Pieces<'t>,
    min_chars: usize,
}

impl<'t> Iterator for Segments<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match &mut self.pieces {
                Pieces::Sentences(matches) => matches.next()?.as_str(),
                Pieces::Lines(lines) => lines.next()?,
            };
            let segment = raw.trim();
            if !segment.is_empty() && segment.chars().count() >= self.min_chars {
                return Some(segment);
            }
        }
    }
}

/// Non-empty lines of `text`, trimmed
fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Longest prefix of `s` with at most `max_chars` chars
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Title hint: the first non-empty line, truncated
pub fn derive_title(text: &str, max_chars: usize) -> String {
    non_empty_lines(text)
        .next()
        .map(|line| truncate_chars(line, max_chars).to_string())
        .unwrap_or_default()
}

/// Summary hint: the first `lines` non-empty lines joined by spaces,
/// truncated and marked with a trailing ellipsis
pub fn derive_summary(text: &str, lines: usize, max_chars: usize) -> String {
    let joined = non_empty_lines(text)
        .take(lines)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.is_empty() {
        return joined;
    }
    format!("{}...", truncate_chars(&joined, max_chars))
}
