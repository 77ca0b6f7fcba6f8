// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code. Only 2 things should be public in this
//! module: `Yearwheel` and `Yearwheel::run`.

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};
use rand::Rng;

use crate::{almanac::Almanac, chart::ChartSpec, plot, YearwheelError};

/// Render a polar "year clock" almanac chart for one city and year.
#[derive(Debug, Parser)]
#[clap(version, author, about)]
#[clap(infer_long_args = true)]
pub struct Yearwheel {
    /// The per-city almanac JSON file to chart.
    #[clap(name = "DATA_FILE", parse(from_os_str), default_value = "vizag_data.json")]
    data: PathBuf,

    /// A chart-spec TOML file. Any setting left out falls back to the
    /// built-in Vizag 2025 preset.
    #[clap(short, long, parse(from_os_str))]
    chart: Option<PathBuf>,

    /// The directory to write the chart images into. If this doesn't
    /// exist, then the relevant directories will be created.
    #[clap(short, long, default_value = ".", parse(from_os_str))]
    output_directory: PathBuf,

    /// The seed for the meteor-streak random source. The same seed and
    /// inputs produce bit-identical charts. When unspecified, a random
    /// seed is drawn and logged.
    #[clap(short, long)]
    seed: Option<u64>,

    /// The verbosity of the program. Increase by specifying multiple
    /// times (e.g. -vv). The default is to print only high-level
    /// information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,
}

impl Yearwheel {
    pub fn run(self) -> Result<(), YearwheelError> {
        setup_logging(self.verbosity).expect("Failed to initialise logging.");
        info!("yearwheel {}", env!("CARGO_PKG_VERSION"));

        let spec = match self.chart.as_deref() {
            Some(file) => ChartSpec::read(file)?,
            None => ChartSpec::default(),
        };
        debug!("Charting {} {}", spec.city_name, spec.year);

        let almanac = Almanac::read(&self.data)?;
        info!(
            "Read {} days of almanac data from '{}'",
            almanac.num_days(),
            self.data.display()
        );

        let seed = self.seed.unwrap_or_else(|| rand::thread_rng().gen());
        info!("Meteor-streak RNG seed: {seed}");

        let plot_files = plot::render(&spec, &almanac, &self.output_directory, seed)?;
        info!("Wrote {plot_files:?}");
        Ok(())
    }
}

/// Activate a logger. All log messages are put onto `stdout`.
/// `env_logger` automatically only uses colours and fancy symbols if
/// we're on a tty (e.g. a terminal); piped output will be formatted
/// sensibly. Source code lines are displayed in log messages when
/// verbosity >= 3.
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.init();

    Ok(())
}
