// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polar geometry for the year wheel. A time of day maps to a radius,
//! a day of year maps to an angle measured clockwise from the top, so
//! the year reads like a clock face with January at noon.

#[cfg(test)]
mod tests;

use crate::constants::{HOURS_PER_DAY, TAU};

/// Map a time of day \[hours\] to a radius in \[0, 1\].
#[inline]
pub fn hour_to_radius(hour: f64) -> f64 {
    hour / HOURS_PER_DAY
}

/// Map a day index to an angle \[radians\] in \[0, TAU), measured
/// clockwise from the top of the chart. `day == num_days` wraps onto
/// angle 0 (as exactly TAU).
#[inline]
pub fn day_to_angle(day: usize, num_days: usize) -> f64 {
    TAU * day as f64 / num_days as f64
}

/// Close a daily series into a loop by re-appending its first sample,
/// so day N-1 meets day 0 without a gap at the top of the chart.
pub fn close_loop(series: &[f64]) -> Vec<f64> {
    let mut closed = series.to_vec();
    if let Some(&first) = series.first() {
        closed.push(first);
    }
    closed
}

/// The angles matching a closed loop of `num_days` samples. The last
/// angle is exactly TAU, landing on top of angle 0.
pub fn loop_angles(num_days: usize) -> Vec<f64> {
    (0..=num_days).map(|day| day_to_angle(day, num_days)).collect()
}

/// Projects (angle, radius) pairs onto a square pixel canvas.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Pixel position of the wheel centre.
    pub centre: (i32, i32),
    /// Pixels per unit radius.
    pub scale: f64,
}

impl Projection {
    /// Pixel coordinates for a polar point. Angle 0 is straight up;
    /// positive angles turn clockwise.
    pub fn pixel(&self, angle: f64, radius: f64) -> (i32, i32) {
        let x = self.centre.0 as f64 + radius * self.scale * angle.sin();
        let y = self.centre.1 as f64 - radius * self.scale * angle.cos();
        (x.round() as i32, y.round() as i32)
    }
}

/// Hand-tuned cubic easing for the Sunday label offsets. Not a model
/// of anything; the constants were tuned by eye against the rendered
/// chart and should be left alone.
#[inline]
fn ease(v: f64) -> f64 {
    (v.powi(3) * (1.0 - v) * 0.7 + v) * 0.015
}

/// The base radius Sunday labels sit at before easing.
const LABEL_BASE_RADIUS: f64 = 1.02;

/// Nudge a Sunday label radius in or out depending on which quadrant
/// the label sits in, so the digits clear the outer ring.
pub fn label_radius(angle: f64) -> f64 {
    let deg = (angle.to_degrees() + 360.0) % 360.0;
    match deg {
        d if d <= 90.0 => LABEL_BASE_RADIUS - ease(d / 90.0),
        d if d <= 180.0 => LABEL_BASE_RADIUS + ease(1.0 - (d - 90.0) / 90.0),
        d if d <= 270.0 => LABEL_BASE_RADIUS - ease((d - 180.0) / 90.0),
        d => LABEL_BASE_RADIUS + ease(1.0 - (d - 270.0) / 90.0),
    }
}

/// Label rotation \[degrees\] for a day angle, normalised to
/// \[-180, 180) so text never renders upside down.
pub fn upright_rotation(angle: f64) -> f64 {
    (-angle.to_degrees() + 180.0).rem_euclid(360.0) - 180.0
}

/// Whether a label at this rotation anchors its text on the left side
/// (reading outward, right half of the wheel) or the right side
/// (reading inward, left half).
pub fn anchors_left(rotation: f64) -> bool {
    rotation > -90.0 && rotation < 90.0
}
