//! Training and testing datasets from part-of-speech tagged corpora.
//!
//! A [`Dataset`] is constructed from the tagged sentences of a
//! [`CorpusSource`]. The sentences are stored in a [`Corpus`], which is
//! then split in a training and a testing [`Subset`]. The dataset and
//! its subsets provide the vocabulary, tag set, word and tag sequences
//! and the word/tag stream through the [`TaggedSentences`] and
//! [`AggregateView`] traits.

pub mod config;
pub use config::{DatasetConfig, Seed};

pub mod corpus;
pub use corpus::Corpus;

pub mod dataset;
pub use dataset::Dataset;

pub mod error;
pub use error::{DatasetError, ErrorKind};

pub mod sentence;
pub use sentence::{Sentence, TaggedSentence};

pub mod source;
pub use source::{CorpusSource, Selector};

pub mod split;
pub use split::{split, split_with_rng, SplitKeys};

pub mod subset;
pub use subset::Subset;

pub mod view;
pub use view::{AggregateView, TaggedSentences};
