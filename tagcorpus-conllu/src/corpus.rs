use std::io::BufRead;

use conllu::io::{ReadSentence, Reader};
use tagcorpus::{CorpusSource, Selector, TaggedSentence};
use udgraph::graph::{Node, Sentence};

use crate::error::ConlluSourceError;
use crate::layer::{LayerValue, TagLayer};

/// A corpus of CoNLL-U sentences.
///
/// Sentences are stored per category. The tag scheme selects the layer
/// that tags are taken from. `Selector::All` selects the default layer
/// of the corpus.
#[derive(Clone, Debug)]
pub struct ConlluCorpus {
    default_layer: TagLayer,
    sentences: Vec<(String, Sentence)>,
}

impl ConlluCorpus {
    /// Construct an empty corpus with `XPos` as its default layer.
    pub fn new() -> Self {
        Self::with_default_layer(TagLayer::XPos)
    }

    /// Construct an empty corpus with the given default layer.
    pub fn with_default_layer(default_layer: TagLayer) -> Self {
        ConlluCorpus {
            default_layer,
            sentences: Vec::new(),
        }
    }

    /// Add sentences to the given category.
    pub fn add_sentences<I>(&mut self, category: &str, sentences: I)
    where
        I: IntoIterator<Item = Sentence>,
    {
        self.sentences.extend(
            sentences
                .into_iter()
                .map(|sentence| (category.to_owned(), sentence)),
        );
    }

    /// Read CoNLL-U sentences into the given category.
    ///
    /// Either all sentences are added or, when reading fails, none.
    /// Returns the number of sentences that were read.
    pub fn read<R>(&mut self, category: &str, read: R) -> Result<usize, ConlluSourceError>
    where
        R: BufRead,
    {
        let sentences = Reader::new(read)
            .sentences()
            .collect::<Result<Vec<_>, _>>()?;
        let n_sentences = sentences.len();

        log::debug!(
            "Read {} CoNLL-U sentences into category {}",
            n_sentences,
            category
        );

        self.add_sentences(category, sentences);

        Ok(n_sentences)
    }

    /// Get the default layer.
    pub fn default_layer(&self) -> &TagLayer {
        &self.default_layer
    }

    /// Get the number of sentences over all categories.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    fn layer(&self, tag_scheme: &Selector) -> Result<TagLayer, ConlluSourceError> {
        match tag_scheme {
            Selector::All => Ok(self.default_layer.clone()),
            Selector::Named(name) => TagLayer::from_scheme(name)
                .ok_or_else(|| ConlluSourceError::UnknownTagScheme(name.clone())),
        }
    }
}

impl Default for ConlluCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusSource for ConlluCorpus {
    type Error = ConlluSourceError;

    fn tagged_sentences(
        &self,
        category: &Selector,
        tag_scheme: &Selector,
    ) -> Result<Vec<TaggedSentence>, Self::Error> {
        if let Selector::Named(name) = category {
            if !self.sentences.iter().any(|(c, _)| c == name) {
                return Err(ConlluSourceError::UnknownCategory(name.clone()));
            }
        }

        let layer = self.layer(tag_scheme)?;

        self.sentences
            .iter()
            .filter(|(c, _)| category.name().map(|name| c.as_str() == name).unwrap_or(true))
            .map(|(_, sentence)| tag_sentence(sentence, &layer))
            .collect()
    }
}

fn tag_sentence(sentence: &Sentence, layer: &TagLayer) -> Result<TaggedSentence, ConlluSourceError> {
    let mut tagged = Vec::with_capacity(sentence.len() - 1);
    for token in sentence.iter().filter_map(Node::token) {
        let tag = token
            .value(layer)
            .ok_or_else(|| ConlluSourceError::MissingTag {
                form: token.form().to_owned(),
                layer: layer.clone(),
            })?;
        tagged.push((token.form().to_owned(), tag));
    }

    Ok(tagged)
}
