// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to draw the year wheel and export it as image files.

mod error;
mod fonts;
pub(crate) mod meteors;

pub use error::DrawError;

use std::path::{Path, PathBuf};

use log::debug;
use plotters::{
    coord::Shift,
    prelude::*,
    style::{
        text_anchor::{HPos, Pos, VPos},
        Color, FontDesc, FontFamily, FontStyle, RGBAColor, RGBColor, TextStyle,
    },
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    almanac::Almanac,
    chart::ChartSpec,
    constants::TAU,
    events,
    polar::{self, Projection},
};

/// Canvas width [pixels]. The wheel is drawn in the square bottom part
/// of the canvas; the band above it holds the title block.
const CANVAS_WIDTH: u32 = 2400;
const CANVAS_HEIGHT: u32 = 2730;
/// Pixel position of the wheel centre.
const WHEEL_CENTRE: (i32, i32) = (1200, 1530);
/// Pixels per unit radius.
const UNIT_PIXELS: f64 = 880.0;
/// The layout constants were tuned in points on a much larger canvas;
/// this converts them to our pixel sizes.
const PX_PER_PT: f64 = 1.35;

/// The night band fills out to this radius.
const OUTER_RIM: f64 = 1.0;
/// Month divider lines run from the centre out to here.
const MONTH_DIVIDER_RADIUS: f64 = 1.2;
/// Month-name labels sit at this radius.
const MONTH_LABEL_RADIUS: f64 = 1.1;
/// The full-moon/eclipse marker ring.
const MARKER_RADIUS: f64 = 0.97;
/// Pixel radius of the moon and eclipse markers.
const MARKER_PIXELS: i32 = 10;
/// Half-width of the solar-noon highlight band [radius units].
const NOON_HALF_WIDTH: f64 = 0.002;
/// Hour labels are confined to this angular sector.
const HOUR_LABEL_ANGLE_DEG: f64 = 75.0;

/// Title block vertical pixel positions, top to bottom: year, city,
/// coordinates.
const TITLE_YEAR_Y: i32 = 180;
const TITLE_CITY_Y: i32 = 275;
const TITLE_COORDS_Y: i32 = 350;

// The chart palette.
const LINEN: RGBColor = RGBColor(0xfa, 0xf0, 0xe6);
const NIGHT: RGBColor = RGBColor(0x01, 0x1f, 0x26);
const DAYLIGHT: RGBColor = RGBColor(0xfb, 0xba, 0x43);
const CIVIL: RGBColor = RGBColor(0x1c, 0x5c, 0x7c);
const NAUTICAL: RGBColor = RGBColor(0x0a, 0x3f, 0x4d);
const ASTRO: RGBColor = RGBColor(0x09, 0x2a, 0x38);
const NOON_GLOW: RGBColor = RGBColor(0xff, 0xfa, 0xcd);
const MONTH_DIVIDER: RGBColor = RGBColor(0x02, 0x73, 0x5e);
const MONTH_LABEL: RGBColor = RGBColor(0x2f, 0x4f, 0x4f);
const MOON: RGBColor = RGBColor(0xa1, 0xa2, 0xa6);
const ECLIPSE: RGBColor = RGBColor(0x7e, 0x2a, 0x2a);
const SUNDAY_LABEL: RGBColor = RGBColor(0x69, 0x69, 0x69);
const HOUR_LABEL: RGBColor = RGBColor(0xe7, 0xfd, 0xeb);
const HOUR_TICK: RGBColor = RGBColor(0x80, 0x80, 0x80);

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// The hour ticks drawn as rings, and which of them carry a label.
const HOUR_TICKS: [(f64, &str); 8] = [
    (1.0, "1AM"),
    (4.0, "4AM"),
    (7.0, "7AM"),
    (10.0, "10AM"),
    (13.0, "1PM"),
    (16.0, "4PM"),
    (19.0, "7PM"),
    (22.0, "10PM"),
];

/// Render the chart and write the raster and vector outputs, named
/// after the city. Returns the written paths.
pub fn render(
    spec: &ChartSpec,
    almanac: &Almanac,
    output_dir: &Path,
    seed: u64,
) -> Result<Vec<PathBuf>, DrawError> {
    fonts::register(&spec.regular_font, &spec.bold_font)?;

    let geom = WheelGeometry::new(almanac);

    // Sample the meteor fields once, up front, so the raster and
    // vector outputs share an identical streak field.
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut bursts = Vec::with_capacity(spec.meteor_showers.len());
    for shower in &spec.meteor_showers {
        bursts.push(meteors::sample_burst(shower, geom.num_days, &mut rng)?);
    }

    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }
    let png = output_dir.join(format!("{}.png", spec.city_name));
    let svg = output_dir.join(format!("{}.svg", spec.city_name));

    debug!("Drawing '{}'", png.display());
    {
        let root = BitMapBackend::new(&png, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
        draw_chart(&root, spec, almanac, &geom, &bursts)?;
        root.present().map_err(|e| DrawError::Write {
            file: png.clone(),
            message: e.to_string(),
        })?;
    }

    debug!("Drawing '{}'", svg.display());
    {
        let root = SVGBackend::new(&svg, (CANVAS_WIDTH, CANVAS_HEIGHT)).into_drawing_area();
        draw_chart(&root, spec, almanac, &geom, &bursts)?;
        root.present().map_err(|e| DrawError::Write {
            file: svg.clone(),
            message: e.to_string(),
        })?;
    }

    Ok(vec![png, svg])
}

/// The almanac's daily series mapped to closed radius loops, with the
/// matching closed angle loop.
struct WheelGeometry {
    num_days: usize,
    angles: Vec<f64>,
    sunrise: Vec<f64>,
    sunset: Vec<f64>,
    noon: Vec<f64>,
    civil_dawn: Vec<f64>,
    civil_dusk: Vec<f64>,
    naut_dawn: Vec<f64>,
    naut_dusk: Vec<f64>,
    astro_dawn: Vec<f64>,
    astro_dusk: Vec<f64>,
}

impl WheelGeometry {
    fn new(almanac: &Almanac) -> WheelGeometry {
        let close_radii = |hours: &[f64]| -> Vec<f64> {
            polar::close_loop(hours)
                .into_iter()
                .map(polar::hour_to_radius)
                .collect()
        };
        let side = |pairs: &[[f64; 2]], i: usize| -> Vec<f64> {
            pairs.iter().map(|pair| pair[i]).collect()
        };

        let num_days = almanac.num_days();
        WheelGeometry {
            num_days,
            angles: polar::loop_angles(num_days),
            sunrise: close_radii(&almanac.sunrise),
            sunset: close_radii(&almanac.sunset),
            noon: close_radii(&almanac.noon),
            civil_dawn: close_radii(&side(&almanac.civil, 0)),
            civil_dusk: close_radii(&side(&almanac.civil, 1)),
            naut_dawn: close_radii(&side(&almanac.nautical, 0)),
            naut_dusk: close_radii(&side(&almanac.nautical, 1)),
            astro_dawn: close_radii(&side(&almanac.astro, 0)),
            astro_dusk: close_radii(&side(&almanac.astro, 1)),
        }
    }
}

fn layer_err<E: std::fmt::Display>(layer: &'static str, e: E) -> DrawError {
    DrawError::Layer {
        layer,
        message: e.to_string(),
    }
}

/// A text style in the chart's registered family. Sizes are points,
/// kept from the original hand-tuned layout.
fn text_style(size_pt: f64, font_style: FontStyle, colour: &RGBColor, pos: Pos) -> TextStyle<'static> {
    FontDesc::new(FontFamily::Name(fonts::FAMILY), size_pt * PX_PER_PT, font_style)
        .color(colour)
        .pos(pos)
}

/// Draw all layers, back to front. The z-order is fixed: fills, hour
/// tick rings, month grid, moons (eclipse on top), Sunday labels,
/// meteors, hour labels, title.
fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
    almanac: &Almanac,
    geom: &WheelGeometry,
    bursts: &[meteors::ShowerBurst],
) -> Result<(), DrawError> {
    let proj = Projection {
        centre: WHEEL_CENTRE,
        scale: UNIT_PIXELS,
    };

    root.fill(&LINEN).map_err(|e| layer_err("background", e))?;

    // Night: outside the sunset curve and inside the sunrise curve.
    let rim = vec![OUTER_RIM; geom.angles.len()];
    draw_band(root, &proj, &geom.angles, &geom.sunset, &rim, NIGHT.to_rgba(), "night")?;
    draw_disk(root, &proj, &geom.angles, &geom.sunrise, NIGHT.to_rgba(), "night")?;

    // Day.
    draw_band(
        root, &proj, &geom.angles, &geom.sunrise, &geom.sunset, DAYLIGHT.to_rgba(), "day",
    )?;

    // Twilight stages, dawn and dusk sides; deeper stages are darker
    // colours with their own alpha.
    for (inner, outer, colour, layer) in [
        (&geom.civil_dawn, &geom.sunrise, CIVIL.mix(0.85), "civil twilight"),
        (&geom.sunset, &geom.civil_dusk, CIVIL.mix(0.85), "civil twilight"),
        (&geom.naut_dawn, &geom.civil_dawn, NAUTICAL.mix(0.7), "nautical twilight"),
        (&geom.civil_dusk, &geom.naut_dusk, NAUTICAL.mix(0.7), "nautical twilight"),
        (&geom.astro_dawn, &geom.naut_dawn, ASTRO.mix(0.8), "astronomical twilight"),
        (&geom.naut_dusk, &geom.astro_dusk, ASTRO.mix(0.8), "astronomical twilight"),
    ] {
        draw_band(root, &proj, &geom.angles, inner, outer, colour, layer)?;
    }

    // A faint highlight following solar noon.
    let noon_lo: Vec<f64> = geom.noon.iter().map(|r| r - NOON_HALF_WIDTH).collect();
    let noon_hi: Vec<f64> = geom.noon.iter().map(|r| r + NOON_HALF_WIDTH).collect();
    draw_band(
        root, &proj, &geom.angles, &noon_lo, &noon_hi, NOON_GLOW.mix(0.05), "solar noon",
    )?;

    draw_hour_tick_rings(root, &proj, &geom.angles)?;
    draw_month_grid(root, &proj, &almanac.days_in_month, geom.num_days)?;
    draw_moon_markers(root, &proj, spec, almanac, geom.num_days)?;
    draw_sunday_labels(root, &proj, spec, &almanac.days_in_month, geom.num_days)?;
    draw_meteors(root, &proj, bursts)?;
    draw_hour_labels(root, &proj)?;
    draw_title(root, spec)?;

    Ok(())
}

/// Fill the annulus between two radius loops.
fn draw_band<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    angles: &[f64],
    inner: &[f64],
    outer: &[f64],
    colour: RGBAColor,
    layer: &'static str,
) -> Result<(), DrawError> {
    let mut points: Vec<(i32, i32)> = angles
        .iter()
        .zip(outer)
        .map(|(&angle, &radius)| proj.pixel(angle, radius))
        .collect();
    points.extend(
        angles
            .iter()
            .zip(inner)
            .rev()
            .map(|(&angle, &radius)| proj.pixel(angle, radius)),
    );
    root.draw(&Polygon::new(points, colour.filled()))
        .map_err(|e| layer_err(layer, e))?;
    Ok(())
}

/// Fill the region from the centre out to a radius loop.
fn draw_disk<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    angles: &[f64],
    radii: &[f64],
    colour: RGBAColor,
    layer: &'static str,
) -> Result<(), DrawError> {
    let points: Vec<(i32, i32)> = angles
        .iter()
        .zip(radii)
        .map(|(&angle, &radius)| proj.pixel(angle, radius))
        .collect();
    root.draw(&Polygon::new(points, colour.filled()))
        .map_err(|e| layer_err(layer, e))?;
    Ok(())
}

/// Faint rings at every labelled hour.
fn draw_hour_tick_rings<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    angles: &[f64],
) -> Result<(), DrawError> {
    for (hour, _) in HOUR_TICKS {
        let radius = polar::hour_to_radius(hour);
        let ring: Vec<(i32, i32)> = angles
            .iter()
            .map(|&angle| proj.pixel(angle, radius))
            .collect();
        root.draw(&PathElement::new(ring, HOUR_TICK.mix(0.4).stroke_width(1)))
            .map_err(|e| layer_err("hour ticks", e))?;
    }
    Ok(())
}

/// Radial month dividers and the month names between them.
fn draw_month_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    days_in_month: &[u32],
    num_days: usize,
) -> Result<(), DrawError> {
    let cumulative = events::cumulative_days(days_in_month);
    for (month, &end_day) in cumulative.iter().enumerate() {
        // The last divider closes the circle exactly.
        let angle = if month < cumulative.len() - 1 {
            polar::day_to_angle(end_day as usize, num_days)
        } else {
            TAU
        };
        let line = vec![
            proj.pixel(angle, 0.0),
            proj.pixel(angle, MONTH_DIVIDER_RADIUS),
        ];
        root.draw(&PathElement::new(line, MONTH_DIVIDER.stroke_width(1)))
            .map_err(|e| layer_err("month dividers", e))?;
    }

    let style = text_style(
        22.0,
        FontStyle::Bold,
        &MONTH_LABEL,
        Pos::new(HPos::Center, VPos::Center),
    );
    for (mid_day, name) in events::month_mid_days(days_in_month).iter().zip(MONTH_NAMES) {
        let angle = TAU * mid_day / num_days as f64;
        let position = proj.pixel(angle, MONTH_LABEL_RADIUS);
        root.draw(&Text::new(name, position, style.clone()))
            .map_err(|e| layer_err("month labels", e))?;
    }
    Ok(())
}

/// Full-moon markers, then the eclipse marker so a coincident eclipse
/// sits on top.
fn draw_moon_markers<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    spec: &ChartSpec,
    almanac: &Almanac,
    num_days: usize,
) -> Result<(), DrawError> {
    let full_moons = events::full_moon_days(&almanac.moon_phases, spec.full_moon_window);
    debug!("Full-moon days: {full_moons:?}");
    for day in full_moons {
        let position = proj.pixel(polar::day_to_angle(day, num_days), MARKER_RADIUS);
        root.draw(&Circle::new(position, MARKER_PIXELS, MOON.filled()))
            .map_err(|e| layer_err("full moons", e))?;
    }

    if let Some(day) = spec.eclipse_day {
        let position = proj.pixel(polar::day_to_angle(day, num_days), MARKER_RADIUS);
        root.draw(&Circle::new(position, MARKER_PIXELS, ECLIPSE.filled()))
            .map_err(|e| layer_err("eclipse", e))?;
    }
    Ok(())
}

/// Day-of-month numbers on every Sunday, placed with the easing and
/// upright-anchor heuristics.
fn draw_sunday_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    spec: &ChartSpec,
    days_in_month: &[u32],
    num_days: usize,
) -> Result<(), DrawError> {
    for day_index in events::sunday_days(spec.first_sunday) {
        if day_index > num_days {
            continue;
        }
        let (_, day_of_month) = events::month_and_day(day_index, days_in_month);
        let angle = polar::day_to_angle(day_index, num_days);
        let rotation = polar::upright_rotation(angle);
        let anchor = if polar::anchors_left(rotation) {
            HPos::Left
        } else {
            HPos::Right
        };
        let style = text_style(
            16.0,
            FontStyle::Bold,
            &SUNDAY_LABEL,
            Pos::new(anchor, VPos::Center),
        );
        let position = proj.pixel(angle, polar::label_radius(angle));
        root.draw(&Text::new(day_of_month.to_string(), position, style))
            .map_err(|e| layer_err("Sunday labels", e))?;
    }
    Ok(())
}

/// The radiant bursts: the sampled streak fields plus the fixed accent
/// streaks around each peak.
fn draw_meteors<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
    bursts: &[meteors::ShowerBurst],
) -> Result<(), DrawError> {
    for burst in bursts {
        for streak in &burst.streaks {
            let line = vec![
                proj.pixel(streak.angle, streak.radius),
                proj.pixel(streak.angle, streak.radius + streak.length),
            ];
            root.draw(&PathElement::new(
                line,
                WHITE.mix(streak.alpha()).stroke_width(1),
            ))
            .map_err(|e| layer_err("meteors", e))?;
        }
        for (offset, inner, outer, alpha) in meteors::PEAK_ACCENTS {
            let angle = burst.peak_angle + offset;
            let line = vec![proj.pixel(angle, inner), proj.pixel(angle, outer)];
            root.draw(&PathElement::new(line, WHITE.mix(alpha).stroke_width(1)))
                .map_err(|e| layer_err("meteors", e))?;
        }
    }
    Ok(())
}

/// Hour labels, confined to one early-morning sector so they read as a
/// single column spiralling out of the centre.
fn draw_hour_labels<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    proj: &Projection,
) -> Result<(), DrawError> {
    let angle = HOUR_LABEL_ANGLE_DEG.to_radians();
    let style = text_style(
        9.0,
        FontStyle::Normal,
        &HOUR_LABEL,
        Pos::new(HPos::Left, VPos::Center),
    );
    for (hour, label) in HOUR_TICKS {
        let position = proj.pixel(angle, polar::hour_to_radius(hour));
        root.draw(&Text::new(label, position, style.clone()))
            .map_err(|e| layer_err("hour labels", e))?;
    }
    Ok(())
}

/// The title block above the wheel: year, city, coordinates.
fn draw_title<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ChartSpec,
) -> Result<(), DrawError> {
    let centre_x = CANVAS_WIDTH as i32 / 2;
    let centred = Pos::new(HPos::Center, VPos::Center);
    for (text, size_pt, font_style, y) in [
        (&spec.year, 48.0, FontStyle::Normal, TITLE_YEAR_Y),
        (&spec.city_name, 64.0, FontStyle::Bold, TITLE_CITY_Y),
        (&spec.city_coordinates, 20.0, FontStyle::Normal, TITLE_COORDS_Y),
    ] {
        let style = text_style(size_pt, font_style, &BLACK, centred);
        root.draw(&Text::new(text.as_str(), (centre_x, y), style))
            .map_err(|e| layer_err("title", e))?;
    }
    Ok(())
}
