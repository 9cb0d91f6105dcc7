//! Console rendition of the dashboard views.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::config::Selections;
use crate::dataset::ScoreDataset;
use crate::digits::DigitFrequencyTable;
use crate::heatmap::{ColourScale, HeatmapProjection};
use crate::kpi::Kpi;

/// Width of the longest bar in the frequency chart.
pub const BAR_WIDTH: usize = 40;

pub const ABOUT: &str = "\
What is Super Bowl Squares?

The goal of Super Bowl Squares is to match the last digit of each team's score at the end of each
quarter and at the end of the game. For example, if the 1st quarter ends Chiefs 14, 49ers 7, the
holder of the square intersecting Chiefs-4 and 49ers-7 wins. The most common payout is one winner
for each of the first 3 quarters and a 4th winner for the final score. Payouts can be equal or can
increase each quarter: with squares sold at $10, each winner receives $250 under equal payouts;
alternatively 1st quarter $100, 2nd quarter $175, 3rd quarter $275 and final score $450.";

pub fn frequency_title(frequency: &DigitFrequencyTable) -> String {
    format!("Frequency of Last Digit of {} Team Scores", frequency.side())
}

/// Away digits along the top, home digits down the side. Each cell carries its percentage label and
/// a shade glyph proportional to its intensity.
pub fn tabulate_heatmap(heatmap: &HeatmapProjection) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(6))
                    .with(HAlign::Centred),
            )];
            for _ in heatmap.col_axis {
                cols.push(Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)));
            }
            cols
        })
        .with_row({
            let mut header_cells: Vec<Cell> = vec!["".into()];
            header_cells.push("Away Team".into());
            for _ in 1..heatmap.col_axis.len() {
                header_cells.push("".into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        })
        .with_row({
            let mut header_cells: Vec<Cell> = vec!["Home".into()];
            for away_digit in heatmap.col_axis {
                header_cells.push(away_digit.to_string().into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        });

    for home_digit in heatmap.row_axis {
        let mut row_cells: Vec<Cell> = vec![home_digit.to_string().into()];
        for away_digit in heatmap.col_axis {
            let shade = ColourScale::shade(heatmap.intensities[home_digit][away_digit]);
            row_cells.push(format!("{} {shade}", heatmap.labels[home_digit][away_digit]).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }
    let len = (count as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len)
}

pub fn tabulate_frequency(frequency: &DigitFrequencyTable) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(BAR_WIDTH)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["Last Digit of Score".into(), "Frequency".into(), "".into()],
        ));
    let max = frequency.max();
    for (digit, count) in frequency.iter() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                digit.to_string().into(),
                count.to_string().into(),
                bar(count, max).into(),
            ],
        ));
    }
    table
}

/// The raw dataset in header order, truncated to the first `limit` games.
pub fn tabulate_scores(dataset: &ScoreDataset, home_column: &str, away_column: &str, limit: usize) -> Table {
    let header = dataset.header();
    let mut table = Table::default()
        .with_cols(
            header
                .iter()
                .map(|_| Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)))
                .collect(),
        )
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            header.iter().cloned().map(Cell::from).collect(),
        ));

    for record in dataset.iter().take(limit) {
        let mut metadata = record.metadata.iter();
        let row_cells = header
            .iter()
            .map(|name| {
                let name = name.trim();
                if name == home_column {
                    record.home_score.to_string()
                } else if name == away_column {
                    record.away_score.to_string()
                } else {
                    metadata
                        .next()
                        .map(|(_, value)| value.clone())
                        .unwrap_or_default()
                }
            })
            .map(Cell::from)
            .collect();
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

pub fn tabulate_kpis(kpis: &[Kpi], selections: &Selections) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(20)).with(HAlign::Left)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(13)).with(HAlign::Left)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["KPI".into(), "Value".into(), "".into()],
        ));
    for kpi in kpis {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                kpi.label.into(),
                kpi.value.into(),
                if kpi.placeholder { "(placeholder)" } else { "" }.into(),
            ],
        ));
    }
    for (label, value) in [
        ("Wager/Square ($)", selections.wager),
        ("Away Square", selections.away_square),
        ("Home Square", selections.home_square),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), value.to_string().into(), "(display only)".into()],
        ));
    }
    table
}
