use serde::{Deserialize, Serialize};

use crate::model::{CrossReference, Example, Onym, Tag, ThesaurusLink, VariantForm, null_default};

/// Shared read-only view over [`Sense`] and [`Subsense`]
pub trait SenseLike {
    fn definitions(&self) -> &[String];
    fn cross_reference_markers(&self) -> &[String];
    fn cross_references(&self) -> &[CrossReference];
    fn examples(&self) -> &[Example];
    fn synonyms(&self) -> &[Onym];
    fn antonyms(&self) -> &[Onym];
    fn regions(&self) -> &[Tag];
    fn domains(&self) -> &[Tag];
    fn registers(&self) -> &[Tag];

    /// True if at least one synonym has non-empty text
    fn has_synonyms(&self) -> bool {
        self.synonyms().iter().any(|onym| !onym.text.is_empty())
    }

    /// True if at least one antonym has non-empty text
    fn has_antonyms(&self) -> bool {
        self.antonyms().iter().any(|onym| !onym.text.is_empty())
    }

    fn has_definition(&self) -> bool {
        !self.definitions().is_empty()
    }

    fn has_cross_references(&self) -> bool {
        !self.cross_reference_markers().is_empty() || !self.cross_references().is_empty()
    }

    /// Regions, then domains, then registers, with every tag equal to an
    /// entry of `exclude` removed
    fn tags(&self, exclude: &[&str]) -> Vec<String> {
        self.regions()
            .iter()
            .chain(self.domains())
            .chain(self.registers())
            .map(Tag::display)
            .filter(|tag| !exclude.contains(&tag.as_str()))
            .collect()
    }
}

/// The atomic unit of meaning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sense {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub definitions: Vec<String>,
    #[serde(alias = "short_definitions", deserialize_with = "null_default")]
    pub short_definitions: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub cross_reference_markers: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub cross_references: Vec<CrossReference>,
    #[serde(deserialize_with = "null_default")]
    pub examples: Vec<Example>,
    #[serde(deserialize_with = "null_default")]
    pub synonyms: Vec<Onym>,
    #[serde(deserialize_with = "null_default")]
    pub antonyms: Vec<Onym>,
    #[serde(deserialize_with = "null_default")]
    pub regions: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub domains: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub registers: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub subsenses: Vec<Subsense>,
    #[serde(deserialize_with = "null_default")]
    pub variant_forms: Vec<VariantForm>,
    #[serde(deserialize_with = "null_default")]
    pub thesaurus_links: Vec<ThesaurusLink>,
    #[serde(deserialize_with = "null_default")]
    pub notes: Vec<serde_json::Value>,
}

/// A refinement of a [`Sense`]. Deeper nesting in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subsense {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub definitions: Vec<String>,
    #[serde(alias = "short_definitions", deserialize_with = "null_default")]
    pub short_definitions: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub cross_reference_markers: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub cross_references: Vec<CrossReference>,
    #[serde(deserialize_with = "null_default")]
    pub examples: Vec<Example>,
    #[serde(deserialize_with = "null_default")]
    pub synonyms: Vec<Onym>,
    #[serde(deserialize_with = "null_default")]
    pub antonyms: Vec<Onym>,
    #[serde(deserialize_with = "null_default")]
    pub regions: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub domains: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub registers: Vec<Tag>,
    #[serde(deserialize_with = "null_default")]
    pub thesaurus_links: Vec<ThesaurusLink>,
    #[serde(deserialize_with = "null_default")]
    pub notes: Vec<serde_json::Value>,
}

macro_rules! impl_sense_like {
    ($ty:ty) => {
        impl SenseLike for $ty {
            fn definitions(&self) -> &[String] {
                &self.definitions
            }
            fn cross_reference_markers(&self) -> &[String] {
                &self.cross_reference_markers
            }
            fn cross_references(&self) -> &[CrossReference] {
                &self.cross_references
            }
            fn examples(&self) -> &[Example] {
                &self.examples
            }
            fn synonyms(&self) -> &[Onym] {
                &self.synonyms
            }
            fn antonyms(&self) -> &[Onym] {
                &self.antonyms
            }
            fn regions(&self) -> &[Tag] {
                &self.regions
            }
            fn domains(&self) -> &[Tag] {
                &self.domains
            }
            fn registers(&self) -> &[Tag] {
                &self.registers
            }
        }
    };
}

impl_sense_like!(Sense);
impl_sense_like!(Subsense);
