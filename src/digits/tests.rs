use strum::IntoEnumIterator;
use tinyrand::{Rand, Wyrand};

use super::*;
use crate::testing::{assert_f64_absolute, dataset, random_dataset};

fn three_games() -> ScoreDataset {
    dataset(&[(21, 7), (24, 10), (14, 14)])
}

#[test]
fn last_digit_mod_10() {
    assert_eq!(4, last_digit(114));
    assert_eq!(0, last_digit(210));
    assert_eq!(0, last_digit(0));
    assert_eq!(9, last_digit(9));
}

#[test]
fn pair_distribution_three_games() {
    let distribution = compute_digit_pair_distribution(&three_games());
    for (home_digit, away_digit) in [(1, 7), (4, 0), (4, 4)] {
        assert_f64_absolute(1.0 / 3.0, distribution.probability(home_digit, away_digit), 1e-12);
    }
    let nonzero = distribution.rows().iter().flatten().filter(|&&p| p != 0.0).count();
    assert_eq!(3, nonzero);
    assert_f64_absolute(1.0, distribution.sum(), 1e-9);
    assert_eq!(distribution.probability(4, 0), distribution[(4, 0)]);
}

#[test]
fn pair_distribution_row_is_home_digit() {
    let distribution = compute_digit_pair_distribution(&dataset(&[(114, 210)]));
    assert_eq!(1.0, distribution.probability(4, 0));
    assert_eq!(0.0, distribution.probability(0, 4));
}

#[test]
fn pair_distribution_empty() {
    let distribution = compute_digit_pair_distribution(&ScoreDataset::default());
    assert_eq!(DigitPairDistribution::zeros(), distribution);
    assert!(distribution.rows().iter().flatten().all(|p| *p == 0.0));
}

#[test]
fn pair_distribution_sums_to_one() {
    let mut rand = Wyrand::default();
    for _ in 0..50 {
        let len = 1 + rand.next_lim_u32(500) as usize;
        let dataset = random_dataset(&mut rand, len, 60);
        let distribution = compute_digit_pair_distribution(&dataset);
        assert_f64_absolute(1.0, distribution.sum(), 1e-9);
    }
}

#[test]
fn most_likely_pair() {
    let distribution = compute_digit_pair_distribution(&dataset(&[(17, 10), (7, 20), (3, 0)]));
    assert_eq!((7, 0), distribution.most_likely());

    let distribution = compute_digit_pair_distribution(&three_games());
    assert_eq!((1, 7), distribution.most_likely());

    assert_eq!((0, 0), DigitPairDistribution::zeros().most_likely());
}

#[test]
fn frequency_three_games() {
    let frequency = compute_digit_frequency(&three_games(), Side::Home);
    assert_eq!(Side::Home, frequency.side());
    assert_eq!(&[0, 1, 0, 0, 2, 0, 0, 0, 0, 0], frequency.counts());
    assert_eq!(2, frequency.max());

    let frequency = compute_digit_frequency(&three_games(), Side::Away);
    assert_eq!(&[1, 0, 0, 0, 1, 0, 0, 1, 0, 0], frequency.counts());
}

#[test]
fn frequency_iter_ascending() {
    let frequency = compute_digit_frequency(&three_games(), Side::Home);
    let digits: Vec<_> = frequency.iter().map(|(digit, _)| digit).collect();
    assert_eq!((0..DIGITS).collect::<Vec<_>>(), digits);
    assert_eq!(2, frequency.count(4));
}

#[test]
fn frequency_empty() {
    let frequency = compute_digit_frequency(&ScoreDataset::default(), Side::Away);
    assert_eq!(0, frequency.total());
    assert_eq!(0, frequency.max());
}

#[test]
fn frequency_sums_to_len() {
    let mut rand = Wyrand::default();
    for _ in 0..50 {
        let len = rand.next_lim_u32(500) as usize;
        let dataset = random_dataset(&mut rand, len, 60);
        for side in Side::iter() {
            assert_eq!(dataset.len() as u64, compute_digit_frequency(&dataset, side).total());
        }
    }
}

#[test]
fn marginals_agree_with_frequency() {
    let mut rand = Wyrand::default();
    let dataset = random_dataset(&mut rand, 1_000, 45);
    let distribution = compute_digit_pair_distribution(&dataset);
    let frequency = compute_digit_frequency(&dataset, Side::Home);
    let expected: Vec<_> = frequency
        .iter()
        .map(|(_, count)| count as f64 / dataset.len() as f64)
        .collect();
    let actual: Vec<f64> = distribution.rows().iter().map(|row| row.iter().sum()).collect();
    for (expected, actual) in expected.into_iter().zip(actual) {
        assert_f64_absolute(expected, actual, 1e-12);
    }
}
