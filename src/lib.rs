// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Decorative polar "year clock" almanac charts for a single city and year.

The pipeline is one-shot: read a per-city JSON document of daily
astronomical series, map days and times of day onto a polar wheel, draw
the visual layers back to front, and write one raster and one vector
image.
 */

pub mod almanac;
pub mod chart;
pub mod cli;
pub(crate) mod constants;
mod error;
pub mod events;
pub mod plot;
pub mod polar;

// Re-exports.
pub use error::YearwheelError;
