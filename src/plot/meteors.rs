// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The stochastic meteor-streak fields. Decorative: the only hard
//! requirements are that streaks stay inside their shower's angular
//! span and that a fixed seed reproduces the field exactly.

use rand::Rng;
use rand_distr::Beta;

use super::DrawError;
use crate::{events::MeteorShower, polar};

/// Streak base radii sit just inside the moon-marker ring.
const RADIUS_LO: f64 = 0.91;
const RADIUS_HI: f64 = 0.928;
/// Streak length range.
const LENGTH_LO: f64 = 0.001;
const LENGTH_HI: f64 = 0.008;

/// Fixed accent streaks drawn around every peak:
/// (angle offset, inner radius, outer radius, alpha).
pub(super) const PEAK_ACCENTS: [(f64, f64, f64, f64); 3] = [
    (0.0, 0.95, 0.97, 1.0),
    (-0.002, 0.90, 0.94, 1.0),
    (0.003, 0.92, 0.95, 0.9),
];

/// One radial streak: a short line at `angle` from `radius` to
/// `radius + length`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Streak {
    pub(crate) angle: f64,
    pub(crate) radius: f64,
    pub(crate) length: f64,
}

impl Streak {
    /// Streak opacity. Longer streaks read as brighter meteors.
    pub(crate) fn alpha(&self) -> f64 {
        0.65 + self.length * 20.0
    }
}

/// A sampled radiant burst for one shower.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ShowerBurst {
    pub(crate) streaks: Vec<Streak>,
    pub(crate) peak_angle: f64,
}

/// Sample a shower's streak field. Angles follow a Beta(2, 2·skew)
/// distribution over the start..end span so density rises toward the
/// peak day; the sample nearest the peak is forced exactly onto the
/// peak angle, and the two span endpoints always carry a streak.
pub(crate) fn sample_burst<R: Rng>(
    shower: &MeteorShower,
    num_days: usize,
    rng: &mut R,
) -> Result<ShowerBurst, DrawError> {
    let start_angle = polar::day_to_angle(shower.start_day, num_days);
    let end_angle = polar::day_to_angle(shower.end_day, num_days);
    let peak_angle = polar::day_to_angle(shower.peak_day, num_days);

    let num_lines = ((shower.end_day - shower.start_day) as f64 / shower.spacing) as usize;
    let beta = Beta::new(2.0, 2.0 * shower.skew).map_err(|e| DrawError::Meteors {
        name: shower.name.clone(),
        message: e.to_string(),
    })?;

    let mut angles: Vec<f64> = (0..num_lines)
        .map(|_| start_angle + rng.sample(beta) * (end_angle - start_angle))
        .collect();
    if let Some(nearest) = angles
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            (**a - peak_angle).abs().total_cmp(&(**b - peak_angle).abs())
        })
        .map(|(i, _)| i)
    {
        angles[nearest] = peak_angle;
    }
    angles.push(start_angle);
    angles.push(end_angle);

    let streaks = angles
        .into_iter()
        .map(|angle| Streak {
            angle,
            radius: rng.gen_range(RADIUS_LO..RADIUS_HI),
            length: rng.gen_range(LENGTH_LO..LENGTH_HI),
        })
        .collect();

    Ok(ShowerBurst {
        streaks,
        peak_angle,
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn perseids() -> MeteorShower {
        MeteorShower {
            name: "Perseids".to_string(),
            peak_day: 224,
            start_day: 198,
            end_day: 236,
            spacing: 2.5,
            skew: 1.2,
        }
    }

    #[test]
    fn same_seed_same_burst() {
        let shower = perseids();
        let mut rng_a = ChaCha8Rng::seed_from_u64(0xCAFE);
        let mut rng_b = ChaCha8Rng::seed_from_u64(0xCAFE);
        let burst_a = sample_burst(&shower, 365, &mut rng_a).unwrap();
        let burst_b = sample_burst(&shower, 365, &mut rng_b).unwrap();
        assert_eq!(burst_a, burst_b);
    }

    #[test]
    fn different_seeds_differ() {
        let shower = perseids();
        let mut rng_a = ChaCha8Rng::seed_from_u64(1);
        let mut rng_b = ChaCha8Rng::seed_from_u64(2);
        let burst_a = sample_burst(&shower, 365, &mut rng_a).unwrap();
        let burst_b = sample_burst(&shower, 365, &mut rng_b).unwrap();
        assert_ne!(burst_a, burst_b);
    }

    #[test]
    fn one_streak_sits_exactly_on_the_peak() {
        let shower = perseids();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let burst = sample_burst(&shower, 365, &mut rng).unwrap();
        let peak = polar::day_to_angle(224, 365);
        assert!(burst.streaks.iter().any(|s| s.angle == peak));
        assert_eq!(burst.peak_angle, peak);
    }

    #[test]
    fn streaks_stay_inside_the_span() {
        let shower = perseids();
        let start = polar::day_to_angle(198, 365);
        let end = polar::day_to_angle(236, 365);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let burst = sample_burst(&shower, 365, &mut rng).unwrap();
        // (236 - 198) / 2.5 streaks, plus the two forced endpoints.
        assert_eq!(burst.streaks.len(), 15 + 2);
        for streak in &burst.streaks {
            assert!((start..=end).contains(&streak.angle));
            assert!((RADIUS_LO..RADIUS_HI).contains(&streak.radius));
            assert!((LENGTH_LO..LENGTH_HI).contains(&streak.length));
            assert!((0.65..0.85).contains(&streak.alpha()));
        }
    }

    #[test]
    fn zero_day_shower_still_marks_its_peak() {
        let shower = MeteorShower {
            name: "Blink".to_string(),
            peak_day: 100,
            start_day: 100,
            end_day: 100,
            spacing: 1.0,
            skew: 1.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let burst = sample_burst(&shower, 365, &mut rng).unwrap();
        // No random streaks, just the two span endpoints.
        assert_eq!(burst.streaks.len(), 2);
        assert_eq!(burst.peak_angle, polar::day_to_angle(100, 365));
    }
}
