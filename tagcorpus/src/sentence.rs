use std::iter::Zip;
use std::slice;

use crate::error::DatasetError;

/// A sentence as a sequence of (word, tag) pairs.
///
/// This is the shape in which corpus sources provide sentences.
pub type TaggedSentence = Vec<(String, String)>;

/// A sentence with a tag for every word.
///
/// The words and tags are positionally aligned: `tags()[i]` is the
/// tag of `words()[i]`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sentence {
    words: Vec<String>,
    tags: Vec<String>,
}

impl Sentence {
    /// Construct a sentence from aligned words and tags.
    ///
    /// Returns an error when the number of words and tags differ.
    pub fn new(words: Vec<String>, tags: Vec<String>) -> Result<Self, DatasetError> {
        if words.len() != tags.len() {
            return Err(DatasetError::LengthMismatch {
                words: words.len(),
                tags: tags.len(),
            });
        }

        Ok(Sentence { words, tags })
    }

    /// Construct a sentence from (word, tag) pairs.
    pub fn from_tagged<I, W, T>(tagged: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: Into<String>,
        T: Into<String>,
    {
        let (words, tags) = tagged
            .into_iter()
            .map(|(word, tag)| (word.into(), tag.into()))
            .unzip();

        Sentence { words, tags }
    }

    /// Get the words of the sentence.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the tags of the sentence.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Get an iterator over the (word, tag) pairs of the sentence.
    pub fn iter(&self) -> Zip<slice::Iter<String>, slice::Iter<String>> {
        self.words.iter().zip(self.tags.iter())
    }

    /// Check whether the sentence is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Get the number of words in the sentence.
    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = (&'a String, &'a String);
    type IntoIter = Zip<slice::Iter<'a, String>, slice::Iter<'a, String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
