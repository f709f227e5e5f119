//! Style metrics over tokenized text.
//!
//! Both metrics are meaningful only for text that contains words. Callers
//! should check [`is_blank`](crate::is_blank) first and skip reporting;
//! text with no words at all yields `0.0` rather than a division by zero.

use crate::function_words::{FunctionWordSet, FUNCTION_WORDS};
use crate::syllables;
use crate::tokenizer::tokenize;
use crate::types::StyleReport;

/// Paragraph used to try the metrics without typing anything.
pub const SAMPLE_TEXT: &str = "This is the first sentence. This is the second sentence. \
This is the third sentence. This is the fourth sentence. This is the fifth sentence. \
This is the sixth sentence. This is the seventh sentence. This is the eight sentence.";

/// Metrics engine bound to a function-word set.
#[derive(Debug, Clone, Copy)]
pub struct StyleEngine<'a> {
    words: &'a FunctionWordSet,
}

impl<'a> StyleEngine<'a> {
    pub fn new(words: &'a FunctionWordSet) -> Self {
        Self { words }
    }

    pub fn function_words(&self) -> &'a FunctionWordSet {
        self.words
    }

    /// Mean syllables per word.
    pub fn average_syllables_per_word(&self, text: &str) -> f64 {
        let (words, syllables) = tokenize(text).fold((0usize, 0usize), |(n, s), w| {
            (n + 1, s + syllables::estimate(&w))
        });
        ratio(syllables, words)
    }

    /// Share of words that are function words, in `[0.0, 1.0]`.
    pub fn functional_word_ratio(&self, text: &str) -> f64 {
        let (words, functional) = tokenize(text).fold((0usize, 0usize), |(n, f), w| {
            (n + 1, f + usize::from(self.words.contains(&w)))
        });
        ratio(functional, words)
    }

    /// Both metrics in one pass. `None` when the text has no words.
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    pub fn analyze(&self, text: &str) -> Option<StyleReport> {
        let mut total_words = 0;
        let mut total_syllables = 0;
        let mut functional_words = 0;

        for word in tokenize(text) {
            total_words += 1;
            total_syllables += syllables::estimate(&word);
            if self.words.contains(&word) {
                functional_words += 1;
            }
        }

        if total_words == 0 {
            tracing::debug!("no words to analyze");
            return None;
        }

        Some(StyleReport {
            average_syllables_per_word: ratio(total_syllables, total_words),
            functional_word_ratio: ratio(functional_words, total_words),
            total_words,
            total_syllables,
            functional_words,
        })
    }
}

impl Default for StyleEngine<'static> {
    fn default() -> Self {
        Self::new(&FUNCTION_WORDS)
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// [`StyleEngine::average_syllables_per_word`] with the built-in word set.
pub fn average_syllables_per_word(text: &str) -> f64 {
    StyleEngine::default().average_syllables_per_word(text)
}

/// [`StyleEngine::functional_word_ratio`] with the built-in word set.
pub fn functional_word_ratio(text: &str) -> f64 {
    StyleEngine::default().functional_word_ratio(text)
}

impl StyleReport {
    /// Analyze `text` against `words`. `None` for blank or word-less text.
    pub fn analyze(text: &str, words: &FunctionWordSet) -> Option<StyleReport> {
        StyleEngine::new(words).analyze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ratio_against_minimal_set() {
        let minimal = FunctionWordSet::minimal();
        let engine = StyleEngine::new(&minimal);
        let r = engine.functional_word_ratio("The cat sat. A dog ran quickly.");
        assert!(close(r, 2.0 / 7.0));
    }

    #[test]
    fn average_syllables() {
        // cat(1) banana(3) simple(2) = 6 / 3
        assert!(close(average_syllables_per_word("cat banana simple"), 2.0));
        assert!(close(average_syllables_per_word("CAT, Banana; simple!"), 2.0));
    }

    #[test]
    fn word_less_text_is_zero() {
        assert_eq!(average_syllables_per_word("  "), 0.0);
        assert_eq!(functional_word_ratio("123 ... !!"), 0.0);
    }

    #[test]
    fn analyze_skips_blank() {
        let engine = StyleEngine::default();
        assert!(engine.analyze("").is_none());
        assert!(engine.analyze(" \n\t").is_none());
        assert!(engine.analyze("42").is_none());
    }

    #[test]
    fn analyze_matches_individual_metrics() {
        let engine = StyleEngine::default();
        let report = engine.analyze(SAMPLE_TEXT).unwrap();
        assert_eq!(report.total_words, 40);
        assert!(close(
            report.average_syllables_per_word,
            engine.average_syllables_per_word(SAMPLE_TEXT)
        ));
        assert!(close(
            report.functional_word_ratio,
            engine.functional_word_ratio(SAMPLE_TEXT)
        ));
        // "this", "is", "the" in each of eight sentences
        assert_eq!(report.functional_words, 24);
    }

    #[test]
    fn deterministic() {
        let engine = StyleEngine::default();
        assert_eq!(engine.analyze(SAMPLE_TEXT), engine.analyze(SAMPLE_TEXT));
    }
}
