use std::sync::Arc;

use crate::error::DatasetError;
use crate::sentence::{Sentence, TaggedSentence};
use crate::view::TaggedSentences;

/// A corpus of tagged sentences.
///
/// Every sentence gets a key, which is its zero-based position in the
/// corpus. The corpus cannot be modified after construction.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    keys: Vec<usize>,
    sentences: Vec<Arc<Sentence>>,
}

impl Corpus {
    /// Construct a corpus from sentences given as (word, tag) pairs.
    pub fn from_tagged<I>(tagged_sentences: I) -> Self
    where
        I: IntoIterator<Item = TaggedSentence>,
    {
        Self::from_sentences(tagged_sentences.into_iter().map(Sentence::from_tagged))
    }

    /// Construct a corpus from separate word and tag sequences.
    ///
    /// Fails if the words and tags of any sentence are not aligned, in
    /// which case no corpus is constructed.
    pub fn from_sequences<I>(sequences: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (Vec<String>, Vec<String>)>,
    {
        let sentences = sequences
            .into_iter()
            .map(|(words, tags)| Sentence::new(words, tags))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_sentences(sentences))
    }

    /// Construct a corpus from sentences.
    pub fn from_sentences<I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = Sentence>,
    {
        let sentences: Vec<_> = sentences.into_iter().map(Arc::new).collect();

        Corpus {
            keys: (0..sentences.len()).collect(),
            sentences,
        }
    }

    /// Get the shared sentence with the given key.
    pub(crate) fn shared(&self, key: usize) -> Result<&Arc<Sentence>, DatasetError> {
        self.sentences
            .get(key)
            .ok_or(DatasetError::KeyNotFound(key))
    }
}

impl TaggedSentences for Corpus {
    fn keys(&self) -> &[usize] {
        &self.keys
    }

    fn sentences(&self) -> &[Arc<Sentence>] {
        &self.sentences
    }

    fn position(&self, key: usize) -> Option<usize> {
        if key < self.sentences.len() {
            Some(key)
        } else {
            None
        }
    }
}
