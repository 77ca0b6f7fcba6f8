// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading an almanac document.
#[derive(Error, Debug)]
pub enum AlmanacReadError {
    #[error("Couldn't open almanac file '{file}': {err}")]
    Open { file: PathBuf, err: std::io::Error },

    #[error("The almanac contained no days")]
    Empty,

    #[error("Almanac series '{series}' has {len} entries, but 'sunrise' has {num_days}; all series must cover the same days")]
    MismatchedSeriesLength {
        series: &'static str,
        len: usize,
        num_days: usize,
    },

    #[error("'days_in_month' has {0} entries; exactly 12 are required")]
    BadMonthTable(usize),

    #[error("'days_in_month' sums to {month_sum} days, but the daily series have {num_days}")]
    MonthSumMismatch { month_sum: usize, num_days: usize },

    #[error("Almanac series '{series}' contains hour {hour}; times of day must lie in 0-24")]
    HourOutOfRange { series: &'static str, hour: f64 },

    #[error("Moon-phase age {age} on day index {day} is not a sensible days-since-new-moon value")]
    BadMoonPhase { day: usize, age: f64 },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
