//! Testing helpers.

use assert_float_eq::*;
use tinyrand::{Rand, Wyrand};

use crate::dataset::{GameRecord, ScoreDataset};

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn assert_f64_absolute(expected: f64, actual: f64, epsilon: f64) {
    if actual != expected {
        assert_float_absolute_eq!(expected, actual, epsilon);
    }
}

/// Builds a dataset from `(home_score, away_score)` pairs.
pub fn dataset(scores: &[(u32, u32)]) -> ScoreDataset {
    ScoreDataset::from_records(
        scores
            .iter()
            .map(|&(home_score, away_score)| GameRecord::new(home_score, away_score))
            .collect(),
    )
}

/// A pseudo-random dataset of `len` games with scores in `0..max_score`.
pub fn random_dataset(rand: &mut Wyrand, len: usize, max_score: u32) -> ScoreDataset {
    let scores: Vec<_> = (0..len)
        .map(|_| (rand.next_lim_u32(max_score), rand.next_lim_u32(max_score)))
        .collect();
    dataset(&scores)
}
