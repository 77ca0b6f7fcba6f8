// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The chart specification. Everything about a rendered wheel that
//! isn't daily almanac data lives here: the city identity, the curated
//! sky events and the hand-tuned event constants, so one chart is
//! fully described by (almanac, spec, seed).
//!
//! Eclipse days, full-moon windows and shower spans are curated per
//! year from eclipse and meteor-shower guides; they are configuration,
//! not computed astronomy.

mod error;

pub use error::ChartSpecError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::events::MeteorShower;

/// Full description of one year-wheel chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSpec {
    /// City name; also the stem of the output file names.
    pub city_name: String,

    /// Human-readable coordinates for the subtitle.
    pub city_coordinates: String,

    /// The charted year, drawn above the title.
    pub year: String,

    /// Day index of a total lunar eclipse, if the year has one.
    pub eclipse_day: Option<usize>,

    /// The moon-phase-age window treated as "full"; the days inside
    /// each contiguous run compete to be that lunation's marker.
    pub full_moon_window: (f64, f64),

    /// Day index of the year's first Sunday.
    pub first_sunday: usize,

    /// Font file for the city title.
    pub bold_font: PathBuf,

    /// Font file for all other text.
    pub regular_font: PathBuf,

    /// The major showers to draw as radiant bursts. Last field so the
    /// TOML array-of-tables serialises after the plain keys.
    pub meteor_showers: Vec<MeteorShower>,
}

impl Default for ChartSpec {
    fn default() -> ChartSpec {
        vizag_2025()
    }
}

/// The built-in preset: Visakhapatnam, 2025. The eclipse lands on
/// 7 September; the showers are the Quadrantids, Perseids and
/// Geminids.
pub fn vizag_2025() -> ChartSpec {
    ChartSpec {
        city_name: "Vizag".to_string(),
        city_coordinates: "17.7219°N, 83.3057°E".to_string(),
        year: "2025".to_string(),
        eclipse_day: Some(250),
        full_moon_window: (13.5, 14.5),
        first_sunday: 5,
        bold_font: PathBuf::from("Arvo-Bold.ttf"),
        regular_font: PathBuf::from("Arvo-Regular.ttf"),
        meteor_showers: vec![
            MeteorShower {
                name: "Quadrantids".to_string(),
                peak_day: 3,
                start_day: 1,
                end_day: 12,
                spacing: 1.2,
                skew: 1.8,
            },
            MeteorShower {
                name: "Perseids".to_string(),
                peak_day: 224,
                start_day: 198,
                end_day: 236,
                spacing: 2.5,
                skew: 1.2,
            },
            MeteorShower {
                name: "Geminids".to_string(),
                peak_day: 348,
                start_day: 338,
                end_day: 354,
                spacing: 2.0,
                skew: 1.3,
            },
        ],
    }
}

impl ChartSpec {
    /// Read a chart spec from a TOML file. Any key left out falls back
    /// to the built-in preset.
    pub fn read(file: &Path) -> Result<ChartSpec, ChartSpecError> {
        debug!("Reading chart spec from '{}'", file.display());
        let contents = fs::read_to_string(file).map_err(|err| ChartSpecError::Open {
            file: file.to_path_buf(),
            err,
        })?;
        let spec: ChartSpec = toml::from_str(&contents)?;
        spec.validate()?;
        Ok(spec)
    }

    fn validate(&self) -> Result<(), ChartSpecError> {
        let (lo, hi) = self.full_moon_window;
        if lo > hi {
            return Err(ChartSpecError::BadFullMoonWindow(lo, hi));
        }
        for shower in &self.meteor_showers {
            if shower.start_day > shower.end_day {
                return Err(ChartSpecError::BadShower {
                    name: shower.name.clone(),
                    reason: format!(
                        "start day {} is after end day {}",
                        shower.start_day, shower.end_day
                    ),
                });
            }
            if !(shower.start_day..=shower.end_day).contains(&shower.peak_day) {
                return Err(ChartSpecError::BadShower {
                    name: shower.name.clone(),
                    reason: format!(
                        "peak day {} lies outside {}-{}",
                        shower.peak_day, shower.start_day, shower.end_day
                    ),
                });
            }
            if !(shower.spacing > 0.0) {
                return Err(ChartSpecError::BadShower {
                    name: shower.name.clone(),
                    reason: format!("streak spacing {} isn't positive", shower.spacing),
                });
            }
            if !(shower.skew > 0.0) {
                return Err(ChartSpecError::BadShower {
                    name: shower.name.clone(),
                    reason: format!("skew {} isn't positive", shower.skew),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn read_str(contents: &str) -> Result<ChartSpec, ChartSpecError> {
        let mut file = NamedTempFile::new().expect("couldn't make a temp file");
        file.write_all(contents.as_bytes())
            .expect("couldn't write to temp file");
        ChartSpec::read(file.path())
    }

    #[test]
    fn preset_is_valid() {
        vizag_2025().validate().expect("built-in preset is invalid");
    }

    #[test]
    fn empty_toml_is_the_preset() {
        let spec = read_str("").expect("empty spec doesn't read");
        assert_eq!(spec, vizag_2025());
    }

    #[test]
    fn partial_toml_overrides_the_preset() {
        let spec = read_str(
            r#"
city_name = "Reykjavik"
city_coordinates = "64.1466°N, 21.9426°W"
eclipse_day = 66
"#,
        )
        .expect("partial spec doesn't read");
        assert_eq!(spec.city_name, "Reykjavik");
        assert_eq!(spec.eclipse_day, Some(66));
        // Everything else falls back to the preset.
        assert_eq!(spec.first_sunday, 5);
        assert_eq!(spec.meteor_showers.len(), 3);
    }

    #[test]
    fn reversed_window_fails() {
        let result = read_str("full_moon_window = [14.5, 13.5]");
        assert!(matches!(
            result,
            Err(ChartSpecError::BadFullMoonWindow(_, _))
        ));
    }

    #[test]
    fn shower_with_stray_peak_fails() {
        let result = read_str(
            r#"
[[meteor_showers]]
name = "Lyrids"
peak_day = 112
start_day = 104
end_day = 110
spacing = 2.0
skew = 1.0
"#,
        );
        assert!(matches!(result, Err(ChartSpecError::BadShower { .. })));
    }

    #[test]
    fn spec_round_trips_through_toml() {
        let spec = vizag_2025();
        let toml_str = toml::to_string(&spec).expect("spec doesn't serialise");
        let back: ChartSpec = toml::from_str(&toml_str).expect("spec doesn't deserialise");
        assert_eq!(back, spec);
    }
}
