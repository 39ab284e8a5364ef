use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::DatasetConfig;
use crate::corpus::Corpus;
use crate::error::DatasetError;
use crate::sentence::Sentence;
use crate::source::CorpusSource;
use crate::split::split;
use crate::subset::Subset;
use crate::view::{AggregateView, TaggedSentences};

/// A tagged corpus, split in a training and testing set.
///
/// The dataset itself is a view over all sentences of the corpus. The
/// keys of the training and testing sets partition the keys of the
/// corpus.
#[derive(Clone, Debug)]
pub struct Dataset {
    corpus: Corpus,
    all: Subset,
    training_set: Subset,
    testing_set: Subset,
}

impl Dataset {
    /// Load a dataset from a corpus source.
    ///
    /// The sentences are retrieved using the category and tag scheme
    /// of `config`, then split using its train ratio and seed.
    pub fn load<S>(source: &S, config: &DatasetConfig) -> Result<Self, DatasetError>
    where
        S: CorpusSource + ?Sized,
    {
        config.validate()?;

        let tagged_sentences = source
            .tagged_sentences(&config.category, &config.tagset)
            .map_err(|err| DatasetError::Source(Box::new(err)))?;

        log::debug!(
            "Read {} sentences from corpus (category: {}, tag scheme: {})",
            tagged_sentences.len(),
            config.category,
            config.tagset
        );

        Self::from_corpus(
            Corpus::from_tagged(tagged_sentences),
            config.train_ratio,
            config.seed.value(),
        )
    }

    /// Split a corpus into a dataset.
    pub fn from_corpus(
        corpus: Corpus,
        train_ratio: f64,
        seed: Option<u64>,
    ) -> Result<Self, DatasetError> {
        let keys = split(&corpus, train_ratio, seed)?;

        let training_set = Subset::new(&corpus, keys.training)?;
        let testing_set = Subset::new(&corpus, keys.testing)?;
        let all = Subset::full(&corpus);

        if training_set.is_empty() {
            log::warn!("Training set is empty");
        }
        if testing_set.is_empty() {
            log::warn!("Testing set is empty");
        }

        log::info!(
            "Dataset: {} sentences ({} training, {} testing), {} words, {} word types, {} tags",
            all.len(),
            training_set.len(),
            testing_set.len(),
            all.n_words(),
            all.vocab().len(),
            all.tagset().len()
        );

        Ok(Dataset {
            corpus,
            all,
            training_set,
            testing_set,
        })
    }

    /// Get the underlying corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Get the training set.
    pub fn training_set(&self) -> &Subset {
        &self.training_set
    }

    /// Get the testing set.
    pub fn testing_set(&self) -> &Subset {
        &self.testing_set
    }
}

impl TaggedSentences for Dataset {
    fn keys(&self) -> &[usize] {
        self.all.keys()
    }

    fn sentences(&self) -> &[Arc<Sentence>] {
        self.all.sentences()
    }

    fn position(&self, key: usize) -> Option<usize> {
        self.corpus.position(key)
    }

    fn n_words(&self) -> usize {
        self.all.n_words()
    }
}

impl AggregateView for Dataset {
    fn vocab(&self) -> &BTreeSet<String> {
        self.all.vocab()
    }

    fn tagset(&self) -> &BTreeSet<String> {
        self.all.tagset()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use lazy_static::lazy_static;
    use maplit::{btreeset, hashmap};

    use super::Dataset;
    use crate::config::{DatasetConfig, Seed};
    use crate::corpus::tests::two_sentence_corpus;
    use crate::corpus::Corpus;
    use crate::error::ErrorKind;
    use crate::sentence::{Sentence, TaggedSentence};
    use crate::source::{MemoryCorpus, Selector, TagMapping};
    use crate::subset::Subset;
    use crate::view::{AggregateView, TaggedSentences};

    lazy_static! {
        static ref SOURCE: MemoryCorpus = {
            let mut source = MemoryCorpus::new();
            source.add_sentences(
                "news",
                (0..40).map(|idx| {
                    let item = format!("item{}", idx);
                    tagged(&[("the", "AT"), (item.as_str(), "NN"), ("fell", "VBD")])
                }),
            );
            source.add_sentences(
                "fiction",
                (0..10).map(|idx| {
                    let name = format!("name{}", idx);
                    tagged(&[(name.as_str(), "NP"), ("ran", "VBD")])
                }),
            );
            source.add_tag_mapping(
                "universal",
                TagMapping::new(hashmap! {
                    "AT".to_string() => "DET".to_string(),
                    "NN".to_string() => "NOUN".to_string(),
                    "NP".to_string() => "NOUN".to_string(),
                    "VBD".to_string() => "VERB".to_string(),
                }),
            );
            source
        };
    }

    fn tagged(pairs: &[(&str, &str)]) -> TaggedSentence {
        pairs
            .iter()
            .map(|&(word, tag)| (word.to_owned(), tag.to_owned()))
            .collect()
    }

    fn keyset(subset: &Subset) -> BTreeSet<usize> {
        subset.keys().iter().copied().collect()
    }

    #[test]
    fn everything_in_training() {
        let dataset = Dataset::from_corpus(two_sentence_corpus(), 1.0, Some(1)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.training_set().len(), 2);
        assert!(dataset.testing_set().is_empty());
        assert_eq!(dataset.training_set().n_words(), 3);
        assert_eq!(
            dataset.training_set().vocab(),
            &btreeset! {"the".to_string(), "dog".to_string(), "runs".to_string()}
        );
    }

    #[test]
    fn load_with_defaults() {
        let dataset = Dataset::load(&*SOURCE, &DatasetConfig::default()).unwrap();

        assert_eq!(dataset.len(), 50);
        assert_eq!(dataset.training_set().len(), 40);
        assert_eq!(dataset.testing_set().len(), 10);
        assert_eq!(
            dataset.tagset(),
            &btreeset! {"DET".to_string(), "NOUN".to_string(), "VERB".to_string()}
        );
    }

    #[test]
    fn load_category_with_corpus_tags() {
        let config = DatasetConfig {
            category: Selector::named("fiction"),
            tagset: Selector::All,
            train_ratio: 0.5,
            seed: Seed::Fixed(3),
        };
        let dataset = Dataset::load(&*SOURCE, &config).unwrap();

        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.n_words(), 20);
        assert_eq!(
            dataset.tagset(),
            &btreeset! {"NP".to_string(), "VBD".to_string()}
        );
        assert_eq!(dataset.training_set().len(), 5);
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        let dataset = Dataset::load(&*SOURCE, &DatasetConfig::default()).unwrap();

        let training = keyset(dataset.training_set());
        let testing = keyset(dataset.testing_set());
        let all: BTreeSet<_> = dataset.keys().iter().copied().collect();

        assert!(training.is_disjoint(&testing));
        assert_eq!(&training | &testing, all);
        assert_eq!(
            dataset.training_set().n_words() + dataset.testing_set().n_words(),
            dataset.n_words()
        );
    }

    #[test]
    fn reproducible_with_seed() {
        let config = DatasetConfig::default();
        let first = Dataset::load(&*SOURCE, &config).unwrap();
        let second = Dataset::load(&*SOURCE, &config).unwrap();

        assert_eq!(first.training_set().keys(), second.training_set().keys());
        assert_eq!(first.testing_set().keys(), second.testing_set().keys());
    }

    #[test]
    fn full_subset_reproduces_dataset_view() {
        let dataset = Dataset::load(&*SOURCE, &DatasetConfig::default()).unwrap();
        let full = Subset::new(dataset.corpus(), dataset.keys().to_owned()).unwrap();

        assert_eq!(full.vocab(), dataset.vocab());
        assert_eq!(full.tagset(), dataset.tagset());
        assert_eq!(full.n_words(), dataset.n_words());
        assert!(full.stream().eq(dataset.stream()));
        assert!(full.word_sequences().eq(dataset.word_sequences()));
        assert!(full.tag_sequences().eq(dataset.tag_sequences()));
    }

    #[test]
    fn dataset_view_follows_corpus_order() {
        let dataset = Dataset::from_corpus(two_sentence_corpus(), 0.5, Some(9)).unwrap();

        assert_eq!(dataset.keys(), &[0, 1]);
        assert_eq!(
            dataset.stream().collect::<Vec<_>>(),
            vec![("the", "DET"), ("dog", "NOUN"), ("runs", "VERB")]
        );
        assert_eq!(
            dataset.get(1).unwrap(),
            &Sentence::from_tagged(vec![("runs", "VERB")])
        );
        assert_eq!(dataset.get(99).unwrap_err().kind(), ErrorKind::KeyNotFound);
    }

    #[test]
    fn source_errors_are_reported() {
        let config = DatasetConfig {
            category: Selector::named("poetry"),
            ..DatasetConfig::default()
        };
        let err = Dataset::load(&*SOURCE, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Source);
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        let config = DatasetConfig {
            train_ratio: -1.0,
            ..DatasetConfig::default()
        };
        let err = Dataset::load(&*SOURCE, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn empty_corpus_gives_empty_partitions() {
        let dataset = Dataset::from_corpus(Corpus::default(), 0.8, Some(1)).unwrap();

        assert!(dataset.is_empty());
        assert!(dataset.training_set().is_empty());
        assert!(dataset.testing_set().is_empty());
        assert!(dataset.vocab().is_empty());
        assert_eq!(dataset.stream().count(), 0);
    }
}
