use regex::Regex;
use std::sync::LazyLock;

/// A word is any maximal run of alphabetic characters. Everything else
/// (whitespace, punctuation, digits, apostrophes) separates words.
static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

/// Lazy sequence of lowercase words.
///
/// A clone continues from the same position as the original. Call
/// [`tokenize`] again to start over from the beginning.
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    text: &'t str,
    pos: usize,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let m = RE_WORD.find_at(self.text, self.pos)?;
        // Matches are never empty, so the scan always moves forward.
        self.pos = m.end();
        Some(m.as_str().to_lowercase())
    }
}

/// Split `text` into case-folded words.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

/// True when `text` holds nothing but whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split `text` into paragraphs separated by blank lines.
///
/// Returns `(line, paragraph)` pairs where `line` is the 1-based line the
/// paragraph starts on.
pub fn paragraphs(text: &str) -> Vec<(usize, String)> {
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut start = 0;

    for (i, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if is_blank(line) {
            if !current.is_empty() {
                result.push((start, current.join("\n")));
                current.clear();
            }
            continue;
        }
        if current.is_empty() {
            start = i + 1;
        }
        current.push(line);
    }
    if !current.is_empty() {
        result.push((start, current.join("\n")));
    }

    result
}
