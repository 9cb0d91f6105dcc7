//! CSV export of derived tables.

use std::io;
use std::io::Write;

use crate::csv::{CsvWriter, Record};
use crate::digits::{DigitPairDistribution, DIGITS};

/// One row per home digit, one column per away digit.
pub fn write_distribution<W: Write>(
    distribution: &DigitPairDistribution,
    csv: &mut CsvWriter<W>,
) -> Result<(), io::Error> {
    let mut header = Record::with_capacity(DIGITS + 1);
    header.set(0usize, "home_digit");
    for away_digit in 0..DIGITS {
        header.set(away_digit + 1, away_digit);
    }
    csv.append(header)?;

    for (home_digit, row) in distribution.rows().iter().enumerate() {
        let mut record = Record::with_capacity(DIGITS + 1);
        record.set(0usize, home_digit);
        for (away_digit, probability) in row.iter().enumerate() {
            record.set(away_digit + 1, probability);
        }
        csv.append(record)?;
    }
    csv.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::compute_digit_pair_distribution;
    use crate::testing::dataset;

    #[test]
    fn write_three_games() {
        let distribution = compute_digit_pair_distribution(&dataset(&[(21, 7), (24, 10), (14, 14)]));
        let mut csv = CsvWriter::new(vec![]);
        write_distribution(&distribution, &mut csv).unwrap();
        let output = String::from_utf8(csv.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(11, lines.len());
        assert_eq!("home_digit,0,1,2,3,4,5,6,7,8,9", lines[0]);
        assert_eq!("0,0,0,0,0,0,0,0,0,0,0", lines[1]);
        assert!(lines[5].starts_with("4,0.3333333333333333,0,0,0,0.3333333333333333,"));
    }
}
