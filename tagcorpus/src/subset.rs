use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::corpus::Corpus;
use crate::error::DatasetError;
use crate::sentence::Sentence;
use crate::view::{vocab_and_tagset, AggregateView, TaggedSentences};

/// A read-only view on a subset of the sentences of a corpus.
///
/// The subset shares its sentences with the corpus. Sentences are
/// ordered by the keys that the subset was constructed with, which
/// need not be the corpus order.
#[derive(Clone, Debug)]
pub struct Subset {
    keys: Vec<usize>,
    positions: HashMap<usize, usize>,
    sentences: Vec<Arc<Sentence>>,
    vocab: BTreeSet<String>,
    tagset: BTreeSet<String>,
    n_words: usize,
}

impl Subset {
    /// Construct a subset of `corpus` with the given `keys`.
    ///
    /// Fails when a key is not in the corpus or when a key occurs more
    /// than once.
    pub fn new(corpus: &Corpus, keys: Vec<usize>) -> Result<Self, DatasetError> {
        let mut positions = HashMap::with_capacity(keys.len());
        let mut sentences = Vec::with_capacity(keys.len());

        for (idx, &key) in keys.iter().enumerate() {
            if positions.insert(key, idx).is_some() {
                return Err(DatasetError::DuplicateKey(key));
            }

            sentences.push(corpus.shared(key)?.clone());
        }

        let (vocab, tagset) = vocab_and_tagset(&sentences);
        let n_words = sentences.iter().map(|sentence| sentence.len()).sum();

        Ok(Subset {
            keys,
            positions,
            sentences,
            vocab,
            tagset,
            n_words,
        })
    }

    /// Construct a subset that covers the whole corpus, in corpus order.
    pub fn full(corpus: &Corpus) -> Self {
        let keys = corpus.keys().to_owned();
        let positions = keys.iter().enumerate().map(|(idx, &key)| (key, idx)).collect();
        let sentences = corpus.sentences().to_owned();
        let (vocab, tagset) = vocab_and_tagset(&sentences);
        let n_words = corpus.n_words();

        Subset {
            keys,
            positions,
            sentences,
            vocab,
            tagset,
            n_words,
        }
    }
}

impl TaggedSentences for Subset {
    fn keys(&self) -> &[usize] {
        &self.keys
    }

    fn sentences(&self) -> &[Arc<Sentence>] {
        &self.sentences
    }

    fn position(&self, key: usize) -> Option<usize> {
        self.positions.get(&key).copied()
    }

    fn n_words(&self) -> usize {
        self.n_words
    }
}

impl AggregateView for Subset {
    fn vocab(&self) -> &BTreeSet<String> {
        &self.vocab
    }

    fn tagset(&self) -> &BTreeSet<String> {
        &self.tagset
    }
}
