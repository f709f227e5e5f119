//! Rule: sticky-paragraph
//!
//! Warns when function words make up too much of a paragraph
//! (default: more than 45% of its words).

use lyrical_core::{paragraphs, StyleEngine};

use crate::{Document, LintDiagnostic, LintRule, LintSeverity};

const DEFAULT_MAX_RATIO: f64 = 0.45;
const DEFAULT_MIN_WORDS: usize = 5;

pub struct StickyParagraphRule {
    pub max_ratio: f64,
    pub min_words: usize,
}

impl Default for StickyParagraphRule {
    fn default() -> Self {
        Self {
            max_ratio: DEFAULT_MAX_RATIO,
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl LintRule for StickyParagraphRule {
    fn id(&self) -> &str {
        "sticky-paragraph"
    }

    fn description(&self) -> &str {
        "Paragraphs should carry more content words than glue words"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, doc: &Document, engine: &StyleEngine<'_>) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (line, paragraph) in paragraphs(&doc.text) {
            let Some(report) = engine.analyze(&paragraph) else {
                continue;
            };
            if report.total_words < self.min_words {
                continue;
            }
            if report.functional_word_ratio > self.max_ratio {
                diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    file: doc.path.clone(),
                    line,
                    col: 1,
                    message: format!(
                        "{} of {} words are function words ({:.0}%, max {:.0}%)",
                        report.functional_words,
                        report.total_words,
                        report.functional_word_ratio * 100.0,
                        self.max_ratio * 100.0
                    ),
                });
            }
        }

        diagnostics
    }
}
