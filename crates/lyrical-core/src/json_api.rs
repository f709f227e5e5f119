//! JSON-string API for host editors.
//!
//! Every function takes plain strings and returns a JSON envelope
//! `{ "success": bool, "data"?: ..., "error"?: "..." }`.

use serde::{Deserialize, Serialize};

use crate::function_words::{FunctionWordSet, FUNCTION_WORDS};
use crate::metrics::StyleEngine;
use crate::types::{CatalogKind, WordListField};
use crate::word_lists::{WordListManager, WordListRequest};

// ---------------------------------------------------------------------------
// Options types (deserialized from JSON input)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    /// Use only articles, prepositions and pronouns.
    #[serde(default)]
    pub minimal: bool,
    #[serde(default)]
    pub extra_function_words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordListOptions {
    pub kind: CatalogKind,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub field: Option<WordListField>,
}

// ---------------------------------------------------------------------------
// Result envelope
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct JsonResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn success<T: Serialize>(data: T) -> String {
    serde_json::to_string(&JsonResult {
        success: true,
        data: Some(data),
        error: None,
    })
    .unwrap_or_else(|e| failure(format!("JSON serialization error: {e}")))
}

fn failure(message: String) -> String {
    // An envelope of a bool and a string always serializes.
    serde_json::json!({ "success": false, "error": message }).to_string()
}

// ---------------------------------------------------------------------------
// Public functions
// ---------------------------------------------------------------------------

/// Analyze `text` and return its style report.
///
/// Input: plain text + options JSON (may be empty)
/// Output: `data` is the report, or `null` when the text has no words
pub fn analyze_to_json(text: &str, options_json: &str) -> String {
    let opts: AnalyzeOptions = if options_json.trim().is_empty() {
        AnalyzeOptions::default()
    } else {
        match serde_json::from_str(options_json) {
            Ok(o) => o,
            Err(e) => return failure(format!("Invalid options JSON: {e}")),
        }
    };

    let base = if opts.minimal {
        FunctionWordSet::minimal()
    } else {
        FUNCTION_WORDS.clone()
    };
    let words = base.extended(&opts.extra_function_words);

    success(StyleEngine::new(&words).analyze(text))
}

/// Load a word list from `resources`.
///
/// Input: resources directory + options JSON `{ "kind", "tag"?, "field"? }`
/// Output: `data` is an array of entries, or of strings when `field` is set
pub fn word_list_to_json(resources: &str, options_json: &str) -> String {
    let opts: WordListOptions = match serde_json::from_str(options_json) {
        Ok(o) => o,
        Err(e) => return failure(format!("Invalid options JSON: {e}")),
    };
    let manager = WordListManager::new(resources);
    let request = WordListRequest {
        kind: opts.kind,
        tag: opts.tag,
    };

    match opts.field {
        Some(field) => match manager.words(&request, field) {
            Ok(words) => success(words),
            Err(e) => failure(e.to_string()),
        },
        None => match manager.entries(&request) {
            Ok(entries) => success(entries),
            Err(e) => failure(e.to_string()),
        },
    }
}
