use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::anyhow;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};
use tracing::{debug, info};

use squares::config::DashboardConfig;
use squares::csv::CsvWriter;
use squares::dataset::{ScoreDataset, Side};
use squares::digits::{compute_digit_frequency, compute_digit_pair_distribution};
use squares::export::write_distribution;
use squares::heatmap::{format_percent, project_heatmap};
use squares::kpi::kpis;
use squares::print;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Tab {
    Squares,
    Common,
    Scores,
    About,
}

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV file of historical game scores
    file: Option<PathBuf>,

    /// view to display: squares, common, scores or about (all views if omitted)
    #[clap(short = 't', long)]
    tab: Option<Tab>,

    /// side for the common numbers view
    #[clap(short = 's', long, default_value = "home")]
    side: Side,

    /// JSON config file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// where to write the digit pair distribution CSV to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,

    /// maximum number of games shown in the scores view
    #[clap(long, default_value_t = 25)]
    limit: usize,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file
            .as_ref()
            .ok_or(anyhow!("scores file must be specified"))?;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let config = match &args.config {
        None => DashboardConfig::default(),
        Some(path) => DashboardConfig::load(path)?,
    };
    debug!("config: {config:?}");

    let start_time = Instant::now();
    let dataset = ScoreDataset::open(args.file.as_ref().unwrap(), &config.columns())?;
    info!("dataset ready in {:.3}s", start_time.elapsed().as_millis() as f64 / 1_000.);

    if let Some(out) = &args.out {
        let mut csv = CsvWriter::create(out)?;
        write_distribution(&compute_digit_pair_distribution(&dataset), &mut csv)?;
        info!("wrote digit pair distribution to {}", out.display());
    }

    println!("Super Bowl Squares");
    println!(
        "{}",
        Console::default().render(&print::tabulate_kpis(kpis(), &config.selections))
    );

    let tabs: Vec<_> = match args.tab {
        None => Tab::iter().collect(),
        Some(tab) => vec![tab],
    };
    for tab in tabs {
        match tab {
            Tab::Squares => {
                let distribution = compute_digit_pair_distribution(&dataset);
                let (home_digit, away_digit) = distribution.most_likely();
                debug!(
                    "most likely square: home {home_digit}, away {away_digit} ({})",
                    format_percent(distribution[(home_digit, away_digit)])
                );
                let heatmap = project_heatmap(&distribution);
                println!("Squares Heatmap:\n{}", Console::default().render(&print::tabulate_heatmap(&heatmap)));
            }
            Tab::Common => {
                let frequency = compute_digit_frequency(&dataset, args.side);
                debug!("{} digit counts: {:?}", frequency.side(), frequency.counts());
                println!(
                    "{}:\n{}",
                    print::frequency_title(&frequency),
                    Console::default().render(&print::tabulate_frequency(&frequency))
                );
            }
            Tab::Scores => {
                println!(
                    "All scores ({} games, showing up to {}):\n{}",
                    dataset.len(),
                    args.limit,
                    Console::default().render(&print::tabulate_scores(
                        &dataset,
                        &config.home_column,
                        &config.away_column,
                        args.limit
                    ))
                );
            }
            Tab::About => {
                println!("{}\n", print::ABOUT);
            }
        }
    }

    Ok(())
}
