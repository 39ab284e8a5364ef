use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::source::Selector;
use crate::split::check_ratio;

/// Seed of the shuffle that precedes the training/testing split.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Seed {
    /// Use a fixed seed, splits are reproducible.
    Fixed(u64),

    /// Seed from system entropy, every split is different.
    Entropy,
}

impl Seed {
    /// The fixed seed, if any.
    pub fn value(self) -> Option<u64> {
        match self {
            Seed::Fixed(seed) => Some(seed),
            Seed::Entropy => None,
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Fixed(112_890)
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Seed::Fixed(seed),
            None => Seed::Entropy,
        }
    }
}

/// Dataset configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Corpus category to take sentences from.
    #[serde(default)]
    pub category: Selector,

    /// Tag scheme to tag sentences with.
    #[serde(default = "default_tagset")]
    pub tagset: Selector,

    /// Fraction of the sentences that is used for training.
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,

    /// Seed of the training/testing shuffle.
    #[serde(default)]
    pub seed: Seed,
}

impl DatasetConfig {
    /// Parse a configuration from TOML.
    pub fn from_toml(toml: &str) -> Result<Self, DatasetError> {
        let config: DatasetConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a TOML file.
    pub fn read<P>(path: P) -> Result<Self, DatasetError>
    where
        P: AsRef<Path>,
    {
        let mut data = String::new();
        File::open(path)?.read_to_string(&mut data)?;
        Self::from_toml(&data)
    }

    /// Check that the configuration values are in range.
    pub fn validate(&self) -> Result<(), DatasetError> {
        check_ratio(self.train_ratio)
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            category: Selector::All,
            tagset: default_tagset(),
            train_ratio: default_train_ratio(),
            seed: Seed::default(),
        }
    }
}

fn default_tagset() -> Selector {
    Selector::named("universal")
}

fn default_train_ratio() -> f64 {
    0.8
}
