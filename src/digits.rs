//! Last-digit aggregation over a [ScoreDataset].
//!
//! Both engines are pure functions of the dataset and always produce the full, dense domain of
//! digits `0..=9`, so a digit (or pair of digits) that never occurred is present with a zero entry.

use std::ops::Index;

use tracing::debug;

use crate::dataset::{ScoreDataset, Side};

/// Number of distinct last digits.
pub const DIGITS: usize = 10;

/// The last digit of a score.
#[inline(always)]
pub fn last_digit(score: u32) -> usize {
    (score % DIGITS as u32) as usize
}

/// Empirical probability of each `(home_digit, away_digit)` pair. Rows are indexed by the home
/// digit, columns by the away digit, both ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitPairDistribution {
    cells: [[f64; DIGITS]; DIGITS],
}
impl DigitPairDistribution {
    pub fn zeros() -> Self {
        Self {
            cells: [[0.0; DIGITS]; DIGITS],
        }
    }

    pub fn probability(&self, home_digit: usize, away_digit: usize) -> f64 {
        self.cells[home_digit][away_digit]
    }

    pub fn rows(&self) -> &[[f64; DIGITS]; DIGITS] {
        &self.cells
    }

    pub fn sum(&self) -> f64 {
        self.cells.iter().flatten().sum()
    }

    pub fn max(&self) -> f64 {
        self.cells.iter().flatten().copied().fold(0.0, f64::max)
    }

    /// The most likely pair, favouring the lowest home digit and then the lowest away digit on ties.
    pub fn most_likely(&self) -> (usize, usize) {
        let mut best = (0, 0);
        for (home_digit, row) in self.cells.iter().enumerate() {
            for (away_digit, &probability) in row.iter().enumerate() {
                if probability > self.cells[best.0][best.1] {
                    best = (home_digit, away_digit);
                }
            }
        }
        best
    }
}

impl Index<(usize, usize)> for DigitPairDistribution {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (home_digit, away_digit) = index;
        &self.cells[home_digit][away_digit]
    }
}

/// Number of games whose score for one side ends in each digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitFrequencyTable {
    side: Side,
    counts: [u64; DIGITS],
}
impl DigitFrequencyTable {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn count(&self, digit: usize) -> u64 {
        self.counts[digit]
    }

    pub fn counts(&self) -> &[u64; DIGITS] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or_default()
    }

    /// `(digit, count)` pairs in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

pub fn compute_digit_pair_distribution(dataset: &ScoreDataset) -> DigitPairDistribution {
    let mut counts = [[0u64; DIGITS]; DIGITS];
    for record in dataset {
        counts[last_digit(record.home_score)][last_digit(record.away_score)] += 1;
    }

    let mut distribution = DigitPairDistribution::zeros();
    if dataset.is_empty() {
        debug!("empty dataset: digit pair distribution is all zeros");
        return distribution;
    }
    let total = dataset.len() as f64;
    for (row, counts_row) in distribution.cells.iter_mut().zip(counts.iter()) {
        for (cell, &count) in row.iter_mut().zip(counts_row.iter()) {
            *cell = count as f64 / total;
        }
    }
    distribution
}

pub fn compute_digit_frequency(dataset: &ScoreDataset, side: Side) -> DigitFrequencyTable {
    let mut counts = [0u64; DIGITS];
    for record in dataset {
        counts[last_digit(record.score(side))] += 1;
    }
    DigitFrequencyTable { side, counts }
}

#[cfg(test)]
mod tests;
