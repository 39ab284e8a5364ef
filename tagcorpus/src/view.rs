//! Read operations shared by corpora, subsets and datasets.

use std::collections::BTreeSet;
use std::iter::{Flatten, FusedIterator};
use std::slice;
use std::sync::Arc;

use crate::error::DatasetError;
use crate::sentence::Sentence;

/// An ordered collection of keyed sentences.
///
/// Implementors provide their keys and the sentences aligned with those
/// keys. All derived views (word and tag sequences, word counts and the
/// word/tag stream) follow the key order.
pub trait TaggedSentences {
    /// Keys of the sentences, in collection order.
    fn keys(&self) -> &[usize];

    /// Sentences, aligned with `keys`.
    fn sentences(&self) -> &[Arc<Sentence>];

    /// Position of `key` in the collection order.
    fn position(&self, key: usize) -> Option<usize>;

    /// Look up the sentence with the given key.
    fn get(&self, key: usize) -> Result<&Sentence, DatasetError> {
        self.position(key)
            .map(|idx| &*self.sentences()[idx])
            .ok_or(DatasetError::KeyNotFound(key))
    }

    /// Check whether the collection contains `key`.
    fn contains_key(&self, key: usize) -> bool {
        self.position(key).is_some()
    }

    /// Check whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Get the number of sentences.
    fn len(&self) -> usize {
        self.keys().len()
    }

    /// Iterate over (key, sentence) pairs.
    ///
    /// Every call returns a new iterator that starts at the first
    /// sentence.
    fn iter(&self) -> Iter {
        Iter {
            keys: self.keys().iter(),
            sentences: self.sentences().iter(),
        }
    }

    /// Total number of words over all sentences.
    fn n_words(&self) -> usize {
        self.sentences().iter().map(|sentence| sentence.len()).sum()
    }

    /// The word sequence of every sentence.
    fn word_sequences(&self) -> Sequences {
        Sequences::new(self.sentences(), Sentence::words)
    }

    /// The tag sequence of every sentence.
    fn tag_sequences(&self) -> Sequences {
        Sequences::new(self.sentences(), Sentence::tags)
    }

    /// Stream of (word, tag) pairs over all sentences.
    ///
    /// The words of all sentences and the tags of all sentences are
    /// flattened separately and then paired position-wise. The stream
    /// has `n_words` elements.
    fn stream(&self) -> Stream {
        Stream {
            words: self.word_sequences().flatten(),
            tags: self.tag_sequences().flatten(),
            remaining: self.n_words(),
        }
    }
}

/// A collection of sentences with precomputed vocabulary and tag set.
pub trait AggregateView: TaggedSentences {
    /// The set of words over all sentences.
    fn vocab(&self) -> &BTreeSet<String>;

    /// The set of tags over all sentences.
    fn tagset(&self) -> &BTreeSet<String>;
}

/// Iterator over (key, sentence) pairs.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    keys: slice::Iter<'a, usize>,
    sentences: slice::Iter<'a, Arc<Sentence>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Sentence);

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.next()?;
        let sentence = self.sentences.next()?;
        Some((key, &**sentence))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

/// Iterator over the word or tag sequences of sentences.
#[derive(Clone)]
pub struct Sequences<'a> {
    sentences: slice::Iter<'a, Arc<Sentence>>,
    select: fn(&Sentence) -> &[String],
}

impl<'a> Sequences<'a> {
    fn new(sentences: &'a [Arc<Sentence>], select: fn(&Sentence) -> &[String]) -> Self {
        Sequences {
            sentences: sentences.iter(),
            select,
        }
    }
}

impl<'a> Iterator for Sequences<'a> {
    type Item = &'a [String];

    fn next(&mut self) -> Option<Self::Item> {
        let select = self.select;
        self.sentences.next().map(|sentence| select(sentence))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sentences.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Sequences<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let select = self.select;
        self.sentences.next_back().map(|sentence| select(sentence))
    }
}

impl<'a> ExactSizeIterator for Sequences<'a> {}

impl<'a> FusedIterator for Sequences<'a> {}

/// Stream of (word, tag) pairs.
///
/// The stream can be restarted by requesting a new stream from the
/// view, or by cloning it before consumption.
#[derive(Clone)]
pub struct Stream<'a> {
    words: Flatten<Sequences<'a>>,
    tags: Flatten<Sequences<'a>>,
    remaining: usize,
}

impl<'a> Iterator for Stream<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        let tag = self.tags.next()?;
        self.remaining -= 1;
        Some((word.as_str(), tag.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Stream<'a> {}

impl<'a> FusedIterator for Stream<'a> {}

/// Collect the words and tags of sentences into sets.
pub(crate) fn vocab_and_tagset<'a, I>(sentences: I) -> (BTreeSet<String>, BTreeSet<String>)
where
    I: IntoIterator<Item = &'a Arc<Sentence>>,
{
    let mut vocab = BTreeSet::new();
    let mut tagset = BTreeSet::new();

    for sentence in sentences {
        vocab.extend(sentence.words().iter().cloned());
        tagset.extend(sentence.tags().iter().cloned());
    }

    (vocab, tagset)
}
