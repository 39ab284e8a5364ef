use std::collections::{HashMap, HashSet};
use std::iter::FromIterator;

use thiserror::Error;

use super::{CorpusSource, Selector};
use crate::sentence::TaggedSentence;

/// Tag used for corpus tags that are not in a tag mapping.
pub const UNKNOWN_TAG: &str = "X";

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SourceError {
    #[error("Corpus does not have category: {0}")]
    UnknownCategory(String),

    #[error("Corpus does not have tag scheme: {0}")]
    UnknownTagScheme(String),
}

/// Mapping from corpus tags to the tags of another tag scheme.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagMapping {
    mapping: HashMap<String, String>,
    unknown: String,
}

impl TagMapping {
    /// Construct a tag mapping.
    ///
    /// Corpus tags without a mapping are mapped to `UNKNOWN_TAG`.
    pub fn new(mapping: HashMap<String, String>) -> Self {
        TagMapping {
            mapping,
            unknown: UNKNOWN_TAG.to_string(),
        }
    }

    /// Use `unknown` for corpus tags without a mapping.
    pub fn with_unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    /// Map a corpus tag.
    pub fn map(&self, tag: &str) -> &str {
        self.mapping.get(tag).unwrap_or(&self.unknown)
    }
}

impl<K, V> FromIterator<(K, V)> for TagMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        TagMapping::new(
            iter.into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        )
    }
}

/// An in-memory corpus of categorized, tagged sentences.
#[derive(Clone, Debug, Default)]
pub struct MemoryCorpus {
    sentences: Vec<(String, TaggedSentence)>,
    tag_mappings: HashMap<String, TagMapping>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add sentences to the given category.
    pub fn add_sentences<I>(&mut self, category: &str, sentences: I)
    where
        I: IntoIterator<Item = TaggedSentence>,
    {
        self.sentences.extend(
            sentences
                .into_iter()
                .map(|sentence| (category.to_owned(), sentence)),
        );
    }

    /// Register a tag scheme.
    pub fn add_tag_mapping(&mut self, tag_scheme: &str, mapping: TagMapping) {
        self.tag_mappings.insert(tag_scheme.to_owned(), mapping);
    }

    /// Get the categories in order of first occurrence.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for (category, _) in &self.sentences {
            if seen.insert(category.as_str()) {
                categories.push(category.as_str());
            }
        }
        categories
    }

    /// Get the number of sentences over all categories.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl CorpusSource for MemoryCorpus {
    type Error = SourceError;

    fn tagged_sentences(
        &self,
        category: &Selector,
        tag_scheme: &Selector,
    ) -> Result<Vec<TaggedSentence>, Self::Error> {
        if let Selector::Named(name) = category {
            if !self.sentences.iter().any(|(c, _)| c == name) {
                return Err(SourceError::UnknownCategory(name.clone()));
            }
        }

        let mapping = match tag_scheme {
            Selector::All => None,
            Selector::Named(name) => Some(
                self.tag_mappings
                    .get(name)
                    .ok_or_else(|| SourceError::UnknownTagScheme(name.clone()))?,
            ),
        };

        let sentences = self
            .sentences
            .iter()
            .filter(|(c, _)| category.name().map(|name| c.as_str() == name).unwrap_or(true))
            .map(|(_, sentence)| match mapping {
                Some(mapping) => sentence
                    .iter()
                    .map(|(word, tag)| (word.clone(), mapping.map(tag).to_owned()))
                    .collect(),
                None => sentence.clone(),
            })
            .collect();

        Ok(sentences)
    }
}
