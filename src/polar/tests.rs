// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::constants::TAU;

#[test]
fn hour_to_radius_bounds() {
    assert_abs_diff_eq!(hour_to_radius(0.0), 0.0);
    assert_abs_diff_eq!(hour_to_radius(12.0), 0.5);
    assert_abs_diff_eq!(hour_to_radius(24.0), 1.0);
}

#[test]
fn hour_to_radius_is_monotonic() {
    let mut last = hour_to_radius(0.0);
    for step in 1..=240 {
        let radius = hour_to_radius(step as f64 / 10.0);
        assert!(radius >= last);
        assert!((0.0..=1.0).contains(&radius));
        last = radius;
    }
}

#[test]
fn day_to_angle_wraps_at_num_days() {
    let num_days = 365;
    assert_abs_diff_eq!(day_to_angle(0, num_days), 0.0);
    assert_abs_diff_eq!(day_to_angle(num_days, num_days), TAU);
    // The last real day is strictly inside the circle.
    assert!(day_to_angle(num_days - 1, num_days) < TAU);

    let mut last = -1.0;
    for day in 0..num_days {
        let angle = day_to_angle(day, num_days);
        assert!(angle > last);
        assert!((0.0..TAU).contains(&angle));
        last = angle;
    }
}

#[test]
fn close_loop_appends_first_sample() {
    let series = [6.0, 6.5, 7.0];
    let closed = close_loop(&series);
    assert_eq!(closed.len(), 4);
    assert_eq!(closed.first(), closed.last());
    assert_eq!(&closed[..3], &series);

    assert!(close_loop(&[]).is_empty());
}

#[test]
fn loop_angles_match_closed_series() {
    let num_days = 4;
    let angles = loop_angles(num_days);
    assert_eq!(angles.len(), num_days + 1);
    assert_abs_diff_eq!(angles[0], 0.0);
    assert_abs_diff_eq!(angles[num_days], TAU);
    assert_abs_diff_eq!(angles[2], TAU / 2.0);
}

#[test]
fn projection_cardinal_points() {
    let proj = Projection {
        centre: (100, 100),
        scale: 50.0,
    };
    // Angle 0 is straight up (pixel y decreases).
    assert_eq!(proj.pixel(0.0, 1.0), (100, 50));
    // A quarter turn clockwise points right.
    assert_eq!(proj.pixel(TAU / 4.0, 1.0), (150, 100));
    // Half a turn points down.
    assert_eq!(proj.pixel(TAU / 2.0, 1.0), (100, 150));
    // Three quarters points left.
    assert_eq!(proj.pixel(3.0 * TAU / 4.0, 1.0), (50, 100));
    // Radius 0 is always the centre.
    assert_eq!(proj.pixel(1.234, 0.0), (100, 100));
}

#[test]
fn label_radius_eases_per_quadrant() {
    // No easing at the top of the wheel.
    assert_abs_diff_eq!(label_radius(0.0), 1.02);
    // First and third quadrants pull the label inward...
    assert!(label_radius(45f64.to_radians()) < 1.02);
    assert!(label_radius(225f64.to_radians()) < 1.02);
    // ...second and fourth push it outward.
    assert!(label_radius(135f64.to_radians()) > 1.02);
    assert!(label_radius(315f64.to_radians()) > 1.02);
    // The easing is a small nudge, not a jump.
    for deg in 0..360 {
        let radius = label_radius((deg as f64).to_radians());
        assert!((radius - 1.02).abs() <= 0.015);
    }
}

#[test]
fn rotation_stays_upright() {
    assert_abs_diff_eq!(upright_rotation(0.0), 0.0);
    assert_abs_diff_eq!(upright_rotation(90f64.to_radians()), -90.0);
    assert_abs_diff_eq!(upright_rotation(180f64.to_radians()), -180.0);
    assert_abs_diff_eq!(upright_rotation(270f64.to_radians()), 90.0);
    for deg in 0..360 {
        let rotation = upright_rotation((deg as f64).to_radians());
        assert!((-180.0..180.0).contains(&rotation));
    }
}

#[test]
fn anchor_flips_past_the_horizon() {
    // Right half of the wheel reads outward (left-anchored)...
    assert!(anchors_left(upright_rotation(45f64.to_radians())));
    // ...left half reads inward.
    assert!(!anchors_left(upright_rotation(270f64.to_radians())));
    // The horizons themselves anchor right, same as the original
    // rendering.
    assert!(!anchors_left(-90.0));
    assert!(!anchors_left(90.0));
}
