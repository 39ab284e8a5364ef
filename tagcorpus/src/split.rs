//! Deterministic training/testing splits.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::error::DatasetError;
use crate::view::TaggedSentences;

/// Keys of the training and testing partitions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SplitKeys {
    pub training: Vec<usize>,
    pub testing: Vec<usize>,
}

/// Split the keys of `sentences` into training and testing keys.
///
/// The keys are shuffled and the first `floor(train_ratio * n)` keys
/// are used for training, the remaining keys for testing. When a `seed`
/// is given, the same seed always results in the same split of the
/// same keys. Otherwise the shuffle is seeded from system entropy.
pub fn split<S>(
    sentences: &S,
    train_ratio: f64,
    seed: Option<u64>,
) -> Result<SplitKeys, DatasetError>
where
    S: TaggedSentences + ?Sized,
{
    let mut rng = match seed {
        Some(seed) => {
            log::debug!("Shuffling {} keys with seed {}", sentences.len(), seed);
            XorShiftRng::seed_from_u64(seed)
        }
        None => {
            log::debug!("Shuffling {} keys with entropy seed", sentences.len());
            XorShiftRng::from_entropy()
        }
    };

    split_with_rng(sentences, train_ratio, &mut rng)
}

/// Split the keys of `sentences` using the given random number generator.
pub fn split_with_rng<S, R>(
    sentences: &S,
    train_ratio: f64,
    rng: &mut R,
) -> Result<SplitKeys, DatasetError>
where
    S: TaggedSentences + ?Sized,
    R: Rng + ?Sized,
{
    check_ratio(train_ratio)?;

    let mut training = sentences.keys().to_owned();
    training.shuffle(rng);

    let split_idx = split_index(train_ratio, training.len());
    let testing = training.split_off(split_idx);

    log::debug!(
        "Split at index {}: {} training, {} testing keys",
        split_idx,
        training.len(),
        testing.len()
    );

    Ok(SplitKeys { training, testing })
}

/// Verify that a train ratio is in `[0, 1]`.
pub(crate) fn check_ratio(train_ratio: f64) -> Result<(), DatasetError> {
    if (0.0..=1.0).contains(&train_ratio) {
        Ok(())
    } else {
        Err(DatasetError::InvalidRatio(train_ratio))
    }
}

fn split_index(train_ratio: f64, n_keys: usize) -> usize {
    // Clamp against float rounding above n_keys.
    ((train_ratio * n_keys as f64).floor() as usize).min(n_keys)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::{split, split_index, split_with_rng, SplitKeys};
    use crate::corpus::tests::two_sentence_corpus;
    use crate::corpus::Corpus;
    use crate::error::ErrorKind;
    use crate::sentence::Sentence;
    use crate::view::TaggedSentences;

    fn corpus_of_size(n: usize) -> Corpus {
        Corpus::from_sentences(
            (0..n).map(|idx| Sentence::from_tagged(vec![(format!("w{}", idx), "X")])),
        )
    }

    fn assert_partition(corpus: &Corpus, keys: &SplitKeys) {
        let training: BTreeSet<_> = keys.training.iter().copied().collect();
        let testing: BTreeSet<_> = keys.testing.iter().copied().collect();

        assert_eq!(training.len(), keys.training.len());
        assert_eq!(testing.len(), keys.testing.len());
        assert!(training.is_disjoint(&testing));
        assert_eq!(keys.training.len() + keys.testing.len(), corpus.len());
        assert_eq!(
            training.union(&testing).copied().collect::<Vec<_>>(),
            corpus.keys()
        );
    }

    #[test]
    fn partitions_keys() {
        for n in 0..20 {
            let corpus = corpus_of_size(n);
            for &ratio in &[0.0, 0.1, 0.5, 0.8, 1.0] {
                let keys = split(&corpus, ratio, Some(42)).unwrap();
                assert_partition(&corpus, &keys);
                assert_eq!(keys.training.len(), split_index(ratio, n));
            }
        }
    }

    #[test]
    fn same_seed_same_split() {
        let corpus = corpus_of_size(100);

        for seed in 0..10 {
            assert_eq!(
                split(&corpus, 0.8, Some(seed)).unwrap(),
                split(&corpus, 0.8, Some(seed)).unwrap()
            );
        }
    }

    #[test]
    fn seeded_split_matches_generator() {
        let corpus = corpus_of_size(50);
        let mut rng = XorShiftRng::seed_from_u64(112_890);

        assert_eq!(
            split(&corpus, 0.8, Some(112_890)).unwrap(),
            split_with_rng(&corpus, 0.8, &mut rng).unwrap()
        );
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let corpus = corpus_of_size(100);
        assert_ne!(
            split(&corpus, 0.5, Some(1)).unwrap(),
            split(&corpus, 0.5, Some(2)).unwrap()
        );
    }

    #[test]
    fn unseeded_split_is_partition() {
        let corpus = corpus_of_size(30);
        let keys = split(&corpus, 0.8, None).unwrap();
        assert_partition(&corpus, &keys);
        assert_eq!(keys.training.len(), 24);
    }

    #[test]
    fn boundary_ratios() {
        let corpus = two_sentence_corpus();

        let all_training = split(&corpus, 1.0, Some(7)).unwrap();
        assert_eq!(all_training.training.len(), 2);
        assert!(all_training.testing.is_empty());

        let all_testing = split(&corpus, 0.0, Some(7)).unwrap();
        assert!(all_testing.training.is_empty());
        assert_eq!(all_testing.testing.len(), 2);
    }

    #[test]
    fn single_sentence_goes_to_testing() {
        let keys = split(&corpus_of_size(1), 0.8, Some(3)).unwrap();
        assert!(keys.training.is_empty());
        assert_eq!(keys.testing, vec![0]);
    }

    #[test]
    fn invalid_ratios() {
        let corpus = two_sentence_corpus();
        for &ratio in &[-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = split(&corpus, ratio, Some(1)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn empty_corpus() {
        let keys = split(&Corpus::default(), 0.8, Some(1)).unwrap();
        assert!(keys.training.is_empty());
        assert!(keys.testing.is_empty());
    }
}
