//! CoNLL-U corpora as sources of tagged sentences.
//!
//! The tag scheme of a [`ConlluCorpus`] selects the CoNLL-U layer that
//! sentences are tagged with.

mod corpus;
pub use corpus::ConlluCorpus;

mod error;
pub use error::ConlluSourceError;

pub mod layer;
pub use layer::{LayerValue, TagLayer};
