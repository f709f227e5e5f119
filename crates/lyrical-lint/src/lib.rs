//! Lyrical style linter — configurable rules for prose quality.
//!
//! Provides a trait-based rule framework that scores each paragraph of a
//! document with the style metrics engine and reports lint diagnostics.

mod rules;

use lyrical_core::{FunctionWordSet, StyleEngine, FUNCTION_WORDS};
pub use rules::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Lint severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

// ---------------------------------------------------------------------------
// Lint diagnostic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintDiagnostic {
    pub rule: String,
    pub severity: LintSeverity,
    pub file: String,
    pub line: usize,
    pub col: usize,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// A piece of prose to lint.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: String,
    pub text: String,
}

impl Document {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lint rule trait
// ---------------------------------------------------------------------------

/// Trait that all lint rules must implement.
pub trait LintRule: Send + Sync {
    /// Unique rule identifier (e.g., "syllable-density").
    fn id(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Default severity.
    fn default_severity(&self) -> LintSeverity;

    /// Run the rule against a document and return diagnostics.
    fn check(&self, doc: &Document, engine: &StyleEngine<'_>) -> Vec<LintDiagnostic>;
}

// ---------------------------------------------------------------------------
// Lint configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
    #[serde(default)]
    pub max_avg_syllables: Option<f64>,
    #[serde(default)]
    pub max_functional_ratio: Option<f64>,
    #[serde(default)]
    pub max_paragraph_words: Option<usize>,
}

impl LintConfig {
    /// Check if a rule is enabled (not off).
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        !matches!(self.rules.get(rule_id), Some(RuleLevel::Off))
    }

    /// Get the configured severity for a rule, or its default.
    /// `None` means the rule is turned off.
    pub fn severity_for(&self, rule: &dyn LintRule) -> Option<LintSeverity> {
        match self.rules.get(rule.id()) {
            Some(RuleLevel::Error) => Some(LintSeverity::Error),
            Some(RuleLevel::Warn) => Some(LintSeverity::Warning),
            Some(RuleLevel::Off) => None,
            None => Some(rule.default_severity()),
        }
    }
}

// ---------------------------------------------------------------------------
// Linter engine
// ---------------------------------------------------------------------------

pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
    words: FunctionWordSet,
}

impl Linter {
    /// Create a new linter with all built-in rules and the standard
    /// function-word set.
    pub fn new(config: LintConfig) -> Self {
        Self::with_function_words(config, FUNCTION_WORDS.clone())
    }

    pub fn with_function_words(config: LintConfig, words: FunctionWordSet) -> Self {
        Self {
            rules: builtin_rules(&config),
            config,
            words,
        }
    }

    /// Get a reference to the registered rules.
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run all enabled rules against the document.
    #[tracing::instrument(skip_all, fields(file = %doc.path))]
    pub fn lint(&self, doc: &Document) -> Vec<LintDiagnostic> {
        let engine = StyleEngine::new(&self.words);
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            let Some(severity) = self.config.severity_for(rule.as_ref()) else {
                continue;
            };
            let mut results = rule.check(doc, &engine);
            for d in &mut results {
                d.severity = severity.clone();
            }
            diagnostics.extend(results);
        }

        diagnostics.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.rule.cmp(&b.rule)));
        tracing::debug!(count = diagnostics.len(), "lint finished");
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

/// Return all built-in lint rules, with thresholds taken from `config`.
fn builtin_rules(config: &LintConfig) -> Vec<Box<dyn LintRule>> {
    let mut syllables = SyllableDensityRule::default();
    if let Some(max) = config.max_avg_syllables {
        syllables.max_average = max;
    }
    let mut sticky = StickyParagraphRule::default();
    if let Some(max) = config.max_functional_ratio {
        sticky.max_ratio = max;
    }
    let mut length = LongParagraphRule::default();
    if let Some(max) = config.max_paragraph_words {
        length.max_words = max;
    }

    vec![Box::new(syllables), Box::new(sticky), Box::new(length)]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
