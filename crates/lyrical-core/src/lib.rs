pub mod catalog;
pub mod error;
pub mod function_words;
pub mod json_api;
pub mod metrics;
pub mod monitor;
pub mod syllables;
pub mod tokenizer;
pub mod types;
pub mod word_lists;

pub use catalog::{parse_word_list, DescriptorCatalog, UNKNOWN_CLASSIFICATION};
pub use error::{CatalogError, Result};
pub use function_words::{FunctionWordSet, FUNCTION_WORDS};
pub use json_api::{analyze_to_json, word_list_to_json};
pub use metrics::{average_syllables_per_word, functional_word_ratio, StyleEngine, SAMPLE_TEXT};
pub use monitor::{StyleMonitor, SubscriptionId};
pub use syllables::estimate;
pub use tokenizer::{is_blank, paragraphs, tokenize, Tokens};
pub use types::*;
pub use word_lists::{WordListManager, WordListRequest, DEFAULT_RESOURCES_DIR};
