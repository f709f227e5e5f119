use std::collections::HashSet;
use std::sync::LazyLock;

/// Articles and determiners.
pub const ARTICLES: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "no",
];

/// Prepositions.
pub const PREPOSITIONS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "among", "around", "at", "before",
    "behind", "below", "beneath", "beside", "between", "beyond", "by", "down", "during", "for",
    "from", "in", "inside", "into", "near", "of", "off", "on", "onto", "out", "over", "past",
    "since", "through", "to", "toward", "towards", "under", "until", "up", "upon", "with",
    "within", "without",
];

/// Personal, possessive, relative and demonstrative pronouns.
pub const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our",
    "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "which", "what",
];

/// Coordinating and subordinating conjunctions.
pub const CONJUNCTIONS: &[&str] = &[
    "and", "but", "or", "nor", "so", "yet", "although", "because", "if", "unless", "while",
    "whereas", "whether", "than", "as", "when", "where", "though",
];

/// Auxiliary and modal verbs.
pub const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must",
];

/// The full built-in set, built once per process.
pub static FUNCTION_WORDS: LazyLock<FunctionWordSet> = LazyLock::new(FunctionWordSet::standard);

/// Words whose role is grammatical rather than content-bearing.
///
/// Membership is case-insensitive. Sets are immutable once built; callers
/// share them by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionWordSet {
    words: HashSet<String>,
}

impl FunctionWordSet {
    /// Articles, prepositions, pronouns, conjunctions and auxiliary verbs.
    pub fn standard() -> Self {
        Self::from_words(
            ARTICLES
                .iter()
                .chain(PREPOSITIONS)
                .chain(PRONOUNS)
                .chain(CONJUNCTIONS)
                .chain(AUXILIARIES)
                .copied(),
        )
    }

    /// Articles, prepositions and pronouns only.
    pub fn minimal() -> Self {
        Self::from_words(ARTICLES.iter().chain(PREPOSITIONS).chain(PRONOUNS).copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// A copy of this set with `extra` words added.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for FunctionWordSet {
    fn default() -> Self {
        FUNCTION_WORDS.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_covers_every_group() {
        let set = &*FUNCTION_WORDS;
        for w in ["the", "of", "she", "and", "would"] {
            assert!(set.contains(w), "{w} should be a function word");
        }
        assert!(!set.contains("cat"));
        assert!(!set.contains("quickly"));
    }

    #[test]
    fn membership_ignores_case() {
        assert!(FUNCTION_WORDS.contains("The"));
        assert!(FUNCTION_WORDS.contains("AND"));
    }

    #[test]
    fn minimal_has_no_auxiliaries() {
        let minimal = FunctionWordSet::minimal();
        assert!(minimal.contains("the"));
        assert!(minimal.contains("they"));
        assert!(!minimal.contains("would"));
        assert!(!minimal.contains("and"));
        assert!(minimal.len() < FUNCTION_WORDS.len());
    }

    #[test]
    fn extended_adds_without_touching_original() {
        let base = FunctionWordSet::minimal();
        let extended = base.extended(["  Thee ", ""]);
        assert!(extended.contains("thee"));
        assert!(!base.contains("thee"));
        assert_eq!(extended.len(), base.len() + 1);
    }
}
