//! Sources of tagged sentences.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sentence::TaggedSentence;

mod memory;
pub use memory::{MemoryCorpus, SourceError, TagMapping};

/// Selection of a corpus category or tag scheme.
///
/// `All` does not restrict the corpus. It is written as `all` in
/// configuration files.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Selector {
    All,
    Named(String),
}

impl Selector {
    /// Construct a selector for the given name.
    ///
    /// The name `all` results in `Selector::All`.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == "all" {
            Selector::All
        } else {
            Selector::Named(name)
        }
    }

    /// Get the selected name, `None` for `Selector::All`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Selector::All => None,
            Selector::Named(name) => Some(name.as_str()),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::All
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Selector::All => f.write_str("all"),
            Selector::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for Selector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selector::named(s))
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Selector::named(name)
    }
}

impl From<&str> for Selector {
    fn from(name: &str) -> Self {
        Selector::named(name)
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

/// A corpus that provides tagged sentences.
pub trait CorpusSource {
    type Error: Error + Send + Sync + 'static;

    /// Get the tagged sentences of the corpus.
    ///
    /// Only sentences of `category` are returned. The sentences are
    /// tagged using `tag_scheme`, where `Selector::All` is the default
    /// tag scheme of the corpus.
    fn tagged_sentences(
        &self,
        category: &Selector,
        tag_scheme: &Selector,
    ) -> Result<Vec<TaggedSentence>, Self::Error>;
}

impl<S> CorpusSource for &S
where
    S: CorpusSource + ?Sized,
{
    type Error = S::Error;

    fn tagged_sentences(
        &self,
        category: &Selector,
        tag_scheme: &Selector,
    ) -> Result<Vec<TaggedSentence>, Self::Error> {
        (**self).tagged_sentences(category, tag_scheme)
    }
}
