use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Descriptor entries (persisted to catalog JSON)
// ---------------------------------------------------------------------------

/// A catalogued word or phrase with its metadata.
///
/// `descriptor` is the key within a catalog. Tags are kept in a `BTreeSet`
/// so repeated saves of the same catalog serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorEntry {
    pub descriptor: String,
    pub description: String,
    pub classification: Vec<String>,
    pub tags: BTreeSet<String>,
}

impl DescriptorEntry {
    pub fn new(descriptor: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            description: description.into(),
            classification: Vec::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_classification<I, S>(mut self, classification: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classification = classification.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// One line of the diagnostic dump:
    /// `descriptor : description : classification : tags`.
    pub fn dump_line(&self) -> String {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        format!(
            "{} : {} : {} : {}",
            self.descriptor,
            self.description,
            self.classification.join(","),
            tags.join(",")
        )
    }
}

// ---------------------------------------------------------------------------
// Style report (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleReport {
    pub average_syllables_per_word: f64,
    pub functional_word_ratio: f64,
    pub total_words: usize,
    pub total_syllables: usize,
    pub functional_words: usize,
}

// ---------------------------------------------------------------------------
// Catalog kinds and projections
// ---------------------------------------------------------------------------

/// The word lists a caller can ask for. Each kind lives in a fixed file
/// under the resources directory.
///
/// Deserializes from the same names and aliases [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CatalogKind {
    BeautifulWords,
    ColourWords,
    ColourDescriptors,
    Smells,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::BeautifulWords,
        CatalogKind::ColourWords,
        CatalogKind::ColourDescriptors,
        CatalogKind::Smells,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            CatalogKind::BeautifulWords => "beautiful_words.json",
            CatalogKind::ColourWords => "colour_words.json",
            CatalogKind::ColourDescriptors => "descriptors.json",
            CatalogKind::Smells => "smells.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CatalogKind::BeautifulWords => "beautiful-words",
            CatalogKind::ColourWords => "colour-words",
            CatalogKind::ColourDescriptors => "colour-descriptors",
            CatalogKind::Smells => "smells",
        }
    }

    /// Title shown above a word list.
    pub fn title(self) -> &'static str {
        match self {
            CatalogKind::BeautifulWords => "Beautiful Words",
            CatalogKind::ColourWords => "Words For Color",
            CatalogKind::ColourDescriptors => "Words that Qualify Color",
            CatalogKind::Smells => "Words To Describe Smell",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beautiful" | "beautiful-words" => Ok(CatalogKind::BeautifulWords),
            "colour-words" | "color-words" | "colours" | "colors" => Ok(CatalogKind::ColourWords),
            "colour-descriptors" | "color-descriptors" | "descriptors" => {
                Ok(CatalogKind::ColourDescriptors)
            }
            "smells" | "smell" => Ok(CatalogKind::Smells),
            other => Err(format!(
                "Unknown catalog kind \"{other}\" (expected one of: beautiful-words, colour-words, colour-descriptors, smells)"
            )),
        }
    }
}

impl TryFrom<String> for CatalogKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Which part of each entry a word list returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordListField {
    #[default]
    Descriptor,
    Description,
}

impl WordListField {
    pub fn project(self, entry: &DescriptorEntry) -> String {
        match self {
            WordListField::Descriptor => entry.descriptor.clone(),
            WordListField::Description => entry.description.clone(),
        }
    }
}

impl FromStr for WordListField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "descriptor" => Ok(WordListField::Descriptor),
            "description" => Ok(WordListField::Description),
            other => Err(format!(
                "Unknown field \"{other}\" (expected descriptor or description)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_kind_deserializes_aliases() {
        let kind: CatalogKind = serde_json::from_str(r#""color-words""#).unwrap();
        assert_eq!(kind, CatalogKind::ColourWords);
        let err = serde_json::from_str::<CatalogKind>(r#""sounds""#).unwrap_err();
        assert!(err.to_string().contains("Unknown catalog kind"));
    }

    #[test]
    fn catalog_kind_names_round_trip() {
        for kind in CatalogKind::ALL {
            assert_eq!(kind.name().parse::<CatalogKind>(), Ok(kind));
        }
        assert_eq!("Color-Words".parse(), Ok(CatalogKind::ColourWords));
        assert!("sounds".parse::<CatalogKind>().is_err());
    }

    #[test]
    fn report_json_keys_are_camel_case() {
        let report = StyleReport {
            average_syllables_per_word: 1.5,
            functional_word_ratio: 0.25,
            total_words: 4,
            total_syllables: 6,
            functional_words: 1,
        };
        let json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("averageSyllablesPerWord"));
        assert!(obj.contains_key("functionalWordRatio"));
        assert!(obj.contains_key("totalWords"));
    }

    #[test]
    fn entry_json_has_exactly_four_fields() {
        let entry = DescriptorEntry::new("ashen", "pale grey").with_tags(["dull", "cold"]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert_eq!(json["tags"], serde_json::json!(["cold", "dull"]));
    }
}
