// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calendar and sky-event derivation: month boundaries, full-moon
//! days, Sunday labels and the meteor-shower table.


use serde::{Deserialize, Serialize};

use crate::constants::FULL_MOON_AGE;

/// How many Sunday labels a year carries. Day indices past 364 are
/// never generated; there is no real-calendar or leap-year logic here.
pub const WEEKS_PER_YEAR: usize = 52;

/// A major meteor shower, described by calendar-day indices and the
/// hand-tuned constants shaping its radiant burst.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeteorShower {
    pub name: String,

    /// Day index of peak activity.
    pub peak_day: usize,

    /// First day of activity.
    pub start_day: usize,

    /// Last day of activity.
    pub end_day: usize,

    /// Days per streak; lower spacing draws a denser burst.
    pub spacing: f64,

    /// Skew of the streak-angle distribution toward the peak; higher
    /// values rise faster before the peak and fall slower after it.
    pub skew: f64,
}

/// Cumulative day counts at the end of each month.
pub fn cumulative_days(days_in_month: &[u32]) -> Vec<u32> {
    days_in_month
        .iter()
        .scan(0, |sum, &days| {
            *sum += days;
            Some(*sum)
        })
        .collect()
}

/// Convert a day index to (month index, day of month) via the
/// cumulative month table.
pub fn month_and_day(day_index: usize, days_in_month: &[u32]) -> (usize, u32) {
    let mut month_index = 0;
    let mut through_month = 0;
    for &days in days_in_month {
        through_month += days as usize;
        if day_index > through_month {
            month_index += 1;
        } else {
            break;
        }
    }
    let before: usize = days_in_month[..month_index]
        .iter()
        .map(|&days| days as usize)
        .sum();
    (month_index, (day_index - before) as u32)
}

/// The day-of-year midpoint of each month, for month-name labels.
pub fn month_mid_days(days_in_month: &[u32]) -> Vec<f64> {
    let cumulative = cumulative_days(days_in_month);
    (0..days_in_month.len())
        .map(|month| {
            let start = if month > 0 { cumulative[month - 1] } else { 0 };
            start as f64 + days_in_month[month] as f64 / 2.0
        })
        .collect()
}

/// Scan the moon-phase ages for the day closest to full in each
/// maximal run inside `window`, returned as 1-based day numbers.
///
/// Runs are independent: a new run starts once the age leaves the
/// window, so two lunations never share a pick. Within a run the pick
/// is the argmin of |age - 14|, not merely any in-window day.
pub fn full_moon_days(moon_phases: &[f64], window: (f64, f64)) -> Vec<usize> {
    let in_window = |age: f64| (window.0..=window.1).contains(&age);

    let mut days = vec![];
    let mut i = 0;
    while i < moon_phases.len() {
        if !in_window(moon_phases[i]) {
            i += 1;
            continue;
        }
        let mut closest = i;
        let mut min_diff = (moon_phases[i] - FULL_MOON_AGE).abs();
        let mut j = i + 1;
        while j < moon_phases.len() && in_window(moon_phases[j]) {
            let diff = (moon_phases[j] - FULL_MOON_AGE).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = j;
            }
            j += 1;
        }
        days.push(closest + 1);
        i = j;
    }
    days
}

/// The Sunday day indices for the year, given the index of the year's
/// first Sunday.
pub fn sunday_days(first_sunday: usize) -> Vec<usize> {
    (0..WEEKS_PER_YEAR)
        .map(|week| first_sunday + week * 7)
        .collect()
}
