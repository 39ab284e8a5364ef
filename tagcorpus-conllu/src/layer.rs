//! CoNLL-U tag layers.

use std::fmt;

use serde::{Deserialize, Serialize};
use udgraph::token::Token;

/// Prefix of tag schemes that select a morphological feature.
pub const FEATURE_SCHEME_PREFIX: &str = "feature:";

/// Tag layer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagLayer {
    UPos,
    XPos,

    /// A specific morphologic feature.
    Feature {
        feature: String,

        // Default value if the feature is absent.
        default: Option<String>,
    },
}

impl TagLayer {
    /// Construct a feature layer.
    pub fn feature(feature: String, default: Option<String>) -> Self {
        TagLayer::Feature { feature, default }
    }

    /// Get the layer of a tag scheme name.
    ///
    /// `universal` and `upos` select universal part-of-speech tags,
    /// `xpos` language-specific part-of-speech tags and
    /// `feature:<name>` the morphological feature `<name>`.
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "universal" | "upos" => Some(TagLayer::UPos),
            "xpos" => Some(TagLayer::XPos),
            _ => scheme
                .strip_prefix(FEATURE_SCHEME_PREFIX)
                .filter(|feature| !feature.is_empty())
                .map(|feature| TagLayer::feature(feature.to_owned(), None)),
        }
    }
}

impl fmt::Display for TagLayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TagLayer::UPos => f.write_str("upos"),
            TagLayer::XPos => f.write_str("xpos"),
            TagLayer::Feature { feature, .. } => write!(f, "{}{}", FEATURE_SCHEME_PREFIX, feature),
        }
    }
}

/// Layer values.
pub trait LayerValue {
    /// Get a layer value.
    fn value(&self, layer: &TagLayer) -> Option<String>;
}

impl LayerValue for Token {
    /// Look up the layer value in a token.
    fn value(&self, layer: &TagLayer) -> Option<String> {
        match layer {
            TagLayer::UPos => self.upos().map(ToOwned::to_owned),
            TagLayer::XPos => self.xpos().map(ToOwned::to_owned),
            TagLayer::Feature { feature, default } => self
                .features()
                .get(feature)
                .cloned()
                .or_else(|| default.clone()),
        }
    }
}
