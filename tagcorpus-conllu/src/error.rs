use thiserror::Error;

use crate::layer::TagLayer;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConlluSourceError {
    #[error(transparent)]
    ConlluError(#[from] conllu::Error),

    /// The token does not have a tag in the selected layer.
    #[error("token without a {layer} tag: '{form}'")]
    MissingTag { form: String, layer: TagLayer },

    #[error("Corpus does not have category: {0}")]
    UnknownCategory(String),

    #[error("Unknown tag scheme: {0}")]
    UnknownTagScheme(String),
}
