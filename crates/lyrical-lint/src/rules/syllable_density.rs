//! Rule: syllable-density
//!
//! Warns when a paragraph's average syllables per word is above a threshold
//! (default: 1.8). Paragraphs shorter than `min_words` are ignored.

use lyrical_core::{paragraphs, StyleEngine};

use crate::{Document, LintDiagnostic, LintRule, LintSeverity};

const DEFAULT_MAX_AVERAGE: f64 = 1.8;
const DEFAULT_MIN_WORDS: usize = 5;

pub struct SyllableDensityRule {
    pub max_average: f64,
    pub min_words: usize,
}

impl Default for SyllableDensityRule {
    fn default() -> Self {
        Self {
            max_average: DEFAULT_MAX_AVERAGE,
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl LintRule for SyllableDensityRule {
    fn id(&self) -> &str {
        "syllable-density"
    }

    fn description(&self) -> &str {
        "Paragraphs should not lean on long, many-syllable words"
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
            if report.average_syllables_per_word > self.max_average {
                diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    file: doc.path.clone(),
                    line,
                    col: 1,
                    message: format!(
                        "Paragraph averages {:.2} syllables per word (max {:.2}). Consider simpler words",
                        report.average_syllables_per_word, self.max_average
                    ),
                });
            }
        }

        diagnostics
    }
}
