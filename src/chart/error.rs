// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use thiserror::Error;

/// Errors associated with reading a chart-spec file.
#[derive(Error, Debug)]
pub enum ChartSpecError {
    #[error("Couldn't open chart spec file '{file}': {err}")]
    Open { file: PathBuf, err: std::io::Error },

    #[error("Full-moon window {0}..{1} is reversed")]
    BadFullMoonWindow(f64, f64),

    #[error("Meteor shower '{name}': {reason}")]
    BadShower { name: String, reason: String },

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
