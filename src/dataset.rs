//! Historical game records and their loading.

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord};
use rustc_hash::FxHashMap;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum Side {
    Home,
    Away,
}

/// A single historical game. Only the two final scores are interpreted; every other column is kept
/// verbatim, in header order, as metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub home_score: u32,
    pub away_score: u32,
    pub metadata: Vec<(String, String)>,
}
impl GameRecord {
    pub fn new(home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
            metadata: vec![],
        }
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((name.into(), value.into()));
        self
    }

    #[inline]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }
}

/// Names of the columns holding the final scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub home: String,
    pub away: String,
}
impl Default for Columns {
    fn default() -> Self {
        Self {
            home: "home_score".into(),
            away: "away_score".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("no header row")]
    NoHeader,

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("line {line}: expected {expected} fields, got {actual}")]
    FieldCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line}: missing value for '{column}'")]
    MissingScore { line: usize, column: String },

    #[error("line {line}: invalid value '{value}' for '{column}'")]
    InvalidScore {
        line: usize,
        column: String,
        value: String,
    },

    #[error("line {line}: negative value '{value}' for '{column}'")]
    NegativeScore {
        line: usize,
        column: String,
        value: String,
    },
}

/// An immutable, ordered collection of games. Every record has been validated on the way in, so
/// nothing downstream needs to revisit the score invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDataset {
    header: Vec<String>,
    records: Vec<GameRecord>,
}
impl ScoreDataset {
    pub fn new(header: Vec<String>, records: Vec<GameRecord>) -> Self {
        Self { header, records }
    }

    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let columns = Columns::default();
        Self::new(vec![columns.home, columns.away], records)
    }

    pub fn open(path: impl AsRef<Path>, columns: &Columns) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("loading scores from {}", path.display());
        let file = File::open(path)?;
        let dataset = Self::read(file, columns)?;
        info!("loaded {} games from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// Reads the header row, locates the score columns by name, then validates every subsequent
    /// row. The first offending row aborts the load.
    pub fn read(reader: impl Read, columns: &Columns) -> Result<Self, LoadError> {
        let mut csv = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let header: Vec<String> = csv.headers()?.iter().map(ToString::to_string).collect();
        if header.is_empty() {
            return Err(LoadError::NoHeader);
        }
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        for (ordinal, name) in header.iter().enumerate() {
            let name = name.trim();
            if index.insert(name, ordinal).is_some() && (name == columns.home || name == columns.away) {
                return Err(LoadError::DuplicateColumn(name.to_string()));
            }
        }
        let locate = |column: &str| {
            index
                .get(column)
                .copied()
                .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
        };
        let (home_ordinal, away_ordinal) = (locate(&columns.home)?, locate(&columns.away)?);

        let mut records = vec![];
        for (row, fields) in csv.records().enumerate() {
            let fields = fields?;
            let line = fields
                .position()
                .map_or(row + 2, |position| position.line() as usize);
            if fields.len() != header.len() {
                return Err(LoadError::FieldCount {
                    line,
                    expected: header.len(),
                    actual: fields.len(),
                });
            }
            let home_score = parse_score(line, &columns.home, &fields[home_ordinal])?;
            let away_score = parse_score(line, &columns.away, &fields[away_ordinal])?;
            records.push(GameRecord {
                home_score,
                away_score,
                metadata: metadata(&header, &fields, home_ordinal, away_ordinal),
            });
        }
        Ok(Self { header, records })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ScoreDataset {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn metadata(header: &[String], fields: &StringRecord, home_ordinal: usize, away_ordinal: usize) -> Vec<(String, String)> {
    header
        .iter()
        .zip(fields.iter())
        .enumerate()
        .filter(|(ordinal, _)| *ordinal != home_ordinal && *ordinal != away_ordinal)
        .map(|(_, (name, value))| (name.clone(), value.to_string()))
        .collect()
}

fn parse_score(line: usize, column: &str, value: &str) -> Result<u32, LoadError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("na") {
        return Err(LoadError::MissingScore {
            line,
            column: column.into(),
        });
    }
    let score: i64 = value.parse().map_err(|_| LoadError::InvalidScore {
        line,
        column: column.into(),
        value: value.into(),
    })?;
    if score < 0 {
        return Err(LoadError::NegativeScore {
            line,
            column: column.into(),
            value: value.into(),
        });
    }
    u32::try_from(score).map_err(|_| LoadError::InvalidScore {
        line,
        column: column.into(),
        value: value.into(),
    })
}
