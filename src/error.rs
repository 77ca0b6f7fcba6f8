// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all yearwheel-related errors. This should be the
//! *only* error enum that is publicly visible.

use thiserror::Error;

use crate::{almanac::AlmanacReadError, chart::ChartSpecError, plot::DrawError};

/// The *only* publicly visible error from yearwheel.
#[derive(Error, Debug)]
pub enum YearwheelError {
    #[error(transparent)]
    Almanac(#[from] AlmanacReadError),

    #[error(transparent)]
    ChartSpec(#[from] ChartSpecError),

    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
