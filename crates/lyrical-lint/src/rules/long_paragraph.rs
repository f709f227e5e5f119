//! Rule: long-paragraph
//!
//! Warns when a paragraph runs past a word count (default: 150).

use lyrical_core::{paragraphs, tokenize, StyleEngine};

use crate::{Document, LintDiagnostic, LintRule, LintSeverity};

const DEFAULT_MAX_WORDS: usize = 150;

pub struct LongParagraphRule {
    pub max_words: usize,
}

impl Default for LongParagraphRule {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl LintRule for LongParagraphRule {
    fn id(&self) -> &str {
        "long-paragraph"
    }

    fn description(&self) -> &str {
        "Paragraphs should be short enough to read in one breath"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, doc: &Document, _engine: &StyleEngine<'_>) -> Vec<LintDiagnostic> {
        paragraphs(&doc.text)
            .into_iter()
            .filter_map(|(line, paragraph)| {
                let words = tokenize(&paragraph).count();
                (words > self.max_words).then(|| LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    file: doc.path.clone(),
                    line,
                    col: 1,
                    message: format!(
                        "Paragraph has {} words (max {}). Consider breaking it up",
                        words, self.max_words
                    ),
                })
            })
            .collect()
    }
}
