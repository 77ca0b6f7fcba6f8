// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read the per-city almanac document.
//!
//! The document is a single JSON object of pre-computed daily series;
//! yearwheel does no astronomy of its own.

mod error;

pub use error::AlmanacReadError;

use std::{fs::File, io::BufReader, path::Path};

use log::{debug, warn};
use serde::Deserialize;

/// One year of pre-computed daily astronomical series for a single
/// city. All times are hours since local midnight in \[0, 24\], and all
/// series cover the same days, indexed 0..N-1.
#[derive(Clone, Debug, Deserialize)]
pub struct Almanac {
    /// Sunrise time per day.
    pub sunrise: Vec<f64>,

    /// Sunset time per day.
    pub sunset: Vec<f64>,

    /// Solar-noon time per day.
    pub noon: Vec<f64>,

    /// Civil-twilight \[dawn, dusk\] pair per day.
    pub civil: Vec<[f64; 2]>,

    /// Nautical-twilight \[dawn, dusk\] pair per day.
    pub nautical: Vec<[f64; 2]>,

    /// Astronomical-twilight \[dawn, dusk\] pair per day.
    pub astro: Vec<[f64; 2]>,

    /// Moon-phase age per day \[days since new moon\].
    pub moon_phases: Vec<f64>,

    /// Day counts for the 12 calendar months.
    pub days_in_month: Vec<u32>,
}

impl Almanac {
    /// Read and validate an almanac document from a JSON file.
    pub fn read(file: &Path) -> Result<Almanac, AlmanacReadError> {
        debug!("Reading almanac from '{}'", file.display());
        let f = File::open(file).map_err(|err| AlmanacReadError::Open {
            file: file.to_path_buf(),
            err,
        })?;
        let almanac: Almanac = serde_json::from_reader(BufReader::new(f))?;
        almanac.validate()?;
        Ok(almanac)
    }

    /// The number of days covered by the daily series.
    pub fn num_days(&self) -> usize {
        self.sunrise.len()
    }

    /// Complain if we spot something structurally wrong. Per-day
    /// ordering oddities only change how the bands overlap, and
    /// high-latitude data can legitimately miss twilight stages, so
    /// those are warnings rather than errors.
    fn validate(&self) -> Result<(), AlmanacReadError> {
        let num_days = self.num_days();
        if num_days == 0 {
            return Err(AlmanacReadError::Empty);
        }

        for (series, len) in [
            ("sunset", self.sunset.len()),
            ("noon", self.noon.len()),
            ("civil", self.civil.len()),
            ("nautical", self.nautical.len()),
            ("astro", self.astro.len()),
            ("moon_phases", self.moon_phases.len()),
        ] {
            if len != num_days {
                return Err(AlmanacReadError::MismatchedSeriesLength {
                    series,
                    len,
                    num_days,
                });
            }
        }

        if self.days_in_month.len() != 12 {
            return Err(AlmanacReadError::BadMonthTable(self.days_in_month.len()));
        }
        let month_sum = self.days_in_month.iter().map(|&d| d as usize).sum::<usize>();
        if month_sum != num_days {
            return Err(AlmanacReadError::MonthSumMismatch {
                month_sum,
                num_days,
            });
        }

        for (series, hours) in [
            ("sunrise", &self.sunrise),
            ("sunset", &self.sunset),
            ("noon", &self.noon),
        ] {
            if let Some(&hour) = hours.iter().find(|h| !(0.0..=24.0).contains(*h)) {
                return Err(AlmanacReadError::HourOutOfRange { series, hour });
            }
        }
        for (series, pairs) in [
            ("civil", &self.civil),
            ("nautical", &self.nautical),
            ("astro", &self.astro),
        ] {
            if let Some(&hour) = pairs
                .iter()
                .flatten()
                .find(|h| !(0.0..=24.0).contains(*h))
            {
                return Err(AlmanacReadError::HourOutOfRange { series, hour });
            }
        }

        for (day, &age) in self.moon_phases.iter().enumerate() {
            // A synodic month is ~29.53 days; leave headroom for sloppy
            // upstream rounding.
            if !(0.0..=31.0).contains(&age) {
                return Err(AlmanacReadError::BadMoonPhase { day, age });
            }
        }

        for day in 0..num_days {
            let sunrise = self.sunrise[day];
            let sunset = self.sunset[day];
            let noon = self.noon[day];
            if !(sunrise <= noon && noon <= sunset) {
                warn!(
                    "Day index {day}: sunrise {sunrise}, noon {noon}, sunset {sunset} are out of order"
                );
            }
            let [civil_dawn, civil_dusk] = self.civil[day];
            let [naut_dawn, naut_dusk] = self.nautical[day];
            let [astro_dawn, astro_dusk] = self.astro[day];
            if !(astro_dawn <= naut_dawn && naut_dawn <= civil_dawn && civil_dawn <= sunrise) {
                warn!("Day index {day}: dawn twilight stages aren't nested");
            }
            if !(sunset <= civil_dusk && civil_dusk <= naut_dusk && naut_dusk <= astro_dusk) {
                warn!("Day index {day}: dusk twilight stages aren't nested");
            }
        }

        Ok(())
    }
}
