// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for the input-loading half of the pipeline: a
//! synthetic full-year almanac document goes through the reader and
//! the event derivation the same way a real one would.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use yearwheel::{almanac::Almanac, chart::vizag_2025, events};

const MONTHS_2025: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const SYNODIC_MONTH: f64 = 29.530588;

/// A plausible 365-day document: gentle seasonal variation around a
/// 6am/6pm day, twilight stages nested 24 minutes apart, moon ages
/// cycling with the synodic month.
fn full_year_doc() -> serde_json::Value {
    let num_days = 365;
    let mut sunrise = vec![];
    let mut sunset = vec![];
    let mut noon = vec![];
    let mut civil = vec![];
    let mut nautical = vec![];
    let mut astro = vec![];
    let mut moon_phases = vec![];
    for day in 0..num_days {
        let season = (std::f64::consts::TAU * day as f64 / num_days as f64).cos();
        let rise = 6.0 + 0.8 * season;
        let set = 18.0 - 0.8 * season;
        sunrise.push(rise);
        sunset.push(set);
        noon.push((rise + set) / 2.0);
        civil.push([rise - 0.4, set + 0.4]);
        nautical.push([rise - 0.8, set + 0.8]);
        astro.push([rise - 1.2, set + 1.2]);
        moon_phases.push((day as f64 + 10.0) % SYNODIC_MONTH);
    }
    json!({
        "sunrise": sunrise,
        "sunset": sunset,
        "noon": noon,
        "civil": civil,
        "nautical": nautical,
        "astro": astro,
        "moon_phases": moon_phases,
        "days_in_month": MONTHS_2025,
    })
}

fn write_doc(doc: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("couldn't make a temp file");
    file.write_all(doc.to_string().as_bytes())
        .expect("couldn't write to temp file");
    file
}

#[test]
fn full_year_document_reads_and_derives_events() {
    let file = write_doc(&full_year_doc());
    let almanac = Almanac::read(file.path()).expect("full-year document doesn't read");
    assert_eq!(almanac.num_days(), 365);

    let spec = vizag_2025();

    // One full moon per lunation; a 365-day year has 12 or 13.
    let full_moons = events::full_moon_days(&almanac.moon_phases, spec.full_moon_window);
    assert!(
        (12..=13).contains(&full_moons.len()),
        "expected 12-13 full moons, got {}",
        full_moons.len()
    );
    // Successive full moons are about one synodic month apart.
    for pair in full_moons.windows(2) {
        let gap = pair[1] - pair[0];
        assert!((28..=31).contains(&gap), "lunation gap was {gap} days");
    }
    // Every pick really is in the window.
    for &day in &full_moons {
        let age = almanac.moon_phases[day - 1];
        assert!((13.5..=14.5).contains(&age));
    }

    // All Sunday labels land inside the year and map to sensible
    // calendar days.
    for day_index in events::sunday_days(spec.first_sunday) {
        assert!(day_index <= 365);
        let (month, day) = events::month_and_day(day_index, &almanac.days_in_month);
        assert!(month < 12);
        assert!((1..=almanac.days_in_month[month]).contains(&day));
    }
}

#[test]
fn truncated_document_is_rejected() {
    let mut doc = full_year_doc();
    // Chop one series short.
    let sunset = doc["sunset"].as_array().unwrap()[..364].to_vec();
    doc["sunset"] = serde_json::Value::Array(sunset);
    let file = write_doc(&doc);
    assert!(Almanac::read(file.path()).is_err());
}
