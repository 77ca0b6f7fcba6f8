// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.
 */

pub use std::f64::consts::TAU;

/// Hours in a day; a time of day divided by this is a unit radius.
pub const HOURS_PER_DAY: f64 = 24.0;

/// The moon-phase age of a full moon \[days since new moon\].
pub const FULL_MOON_AGE: f64 = 14.0;
