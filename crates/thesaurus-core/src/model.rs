use serde::{Deserialize, Deserializer, Serialize};

use crate::sense::Sense;
use crate::text::display_tag;

/// `null` decodes like a missing key. Only needed for fields that are not
/// already an `Option`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full response object sent by the thesaurus API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultSet {
    pub id: Option<String>,
    /// Provider and schema information, never rendered
    #[serde(deserialize_with = "null_default")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub results: Vec<HeadwordEntry>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One headword for a language. A single query may return several of these,
/// one per homograph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadwordEntry {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub word: String,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub lexical_entries: Vec<LexicalEntry>,
}

impl HeadwordEntry {
    /// Lexical entries whose category matches `category`, ignoring case.
    /// Both the category label and its id are compared.
    pub fn filter_by_category(&self, category: &str) -> Vec<&LexicalEntry> {
        self.lexical_entries
            .iter()
            .filter(|entry| entry.lexical_category.matches(category))
            .collect()
    }
}

/// Entries grouped under one part of speech
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LexicalEntry {
    #[serde(deserialize_with = "null_default")]
    pub lexical_category: LexicalCategory,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub entries: Vec<Entry>,
    #[serde(deserialize_with = "null_default")]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(deserialize_with = "null_default")]
    pub derivatives: Vec<Derivative>,
    #[serde(deserialize_with = "null_default")]
    pub derivative_of: Vec<Derivative>,
}

impl LexicalEntry {
    /// Category label uppercased for section headers
    pub fn category_label(&self) -> String {
        self.lexical_category.label().to_uppercase()
    }

    /// True when this entry is listed as derived from another word
    pub fn is_derivative(&self) -> bool {
        self.derivative_of.iter().any(|d| !d.text.is_empty())
    }

    /// First non-empty spelling in `notation` (e.g. `"IPA"`), compared
    /// case-insensitively
    pub fn pronunciation(&self, notation: &str) -> Option<&str> {
        self.pronunciations
            .iter()
            .filter(|p| p.phonetic_notation.eq_ignore_ascii_case(notation))
            .map(|p| p.phonetic_spelling.as_str())
            .find(|spelling| !spelling.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalCategory {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

impl LexicalCategory {
    /// Display label, falling back to the id when the text is missing
    pub fn label(&self) -> &str {
        if self.text.is_empty() { &self.id } else { &self.text }
    }

    pub fn matches(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.text.to_lowercase() == category || self.id.to_lowercase() == category
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pronunciation {
    pub audio_file: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub dialects: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub phonetic_notation: String,
    #[serde(deserialize_with = "null_default")]
    pub phonetic_spelling: String,
}

/// A word derived from, or deriving, the lexical entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Derivative {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub regions: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub domains: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub registers: Vec<Tag>,
}

/// One morphological entry under a lexical category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entry {
    pub homograph_number: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub etymologies: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub grammatical_features: Vec<GrammaticalFeature>,
    #[serde(deserialize_with = "null_default")]
    pub variant_forms: Vec<VariantForm>,
    #[serde(deserialize_with = "null_default")]
    pub notes: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_default")]
    pub senses: Vec<Sense>,
}

impl Entry {
    pub fn has_variant_forms(&self) -> bool {
        self.variant_forms.iter().any(|v| !v.text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammaticalFeature {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantForm {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

/// A synonym or antonym
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Onym {
    pub id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub language: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

/// Region, domain or register label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
}

impl Tag {
    /// Text shown to the user, underscores replaced with spaces
    pub fn display(&self) -> String {
        if self.text.is_empty() {
            display_tag(&self.id)
        } else {
            display_tag(&self.text)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Example {
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(deserialize_with = "null_default")]
    pub registers: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub regions: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub domains: Vec<Tag>,
}

/// A reference to a separate word's entry and how it relates to this one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossReference {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThesaurusLink {
    #[serde(deserialize_with = "null_default")]
    pub entry_id: String,
    #[serde(deserialize_with = "null_default")]
    pub sense_id: String,
}
