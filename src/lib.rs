//! Last-digit score probabilities for squares pools.
//!
//! Loads a table of historical game scores once, then derives the empirical distribution of
//! `(home_digit, away_digit)` pairs, the per-side frequency of each last digit, and a heatmap
//! projection of the pair distribution. All derivations are pure functions of an immutable
//! [ScoreDataset](dataset::ScoreDataset).

pub mod config;
pub mod csv;
pub mod dataset;
pub mod digits;
pub mod export;
pub mod file;
pub mod heatmap;
pub mod kpi;
pub mod print;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
