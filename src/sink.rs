// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a finished field into a PNG on disk.

use chrono::{DateTime, Local};
use image::png::PNGEncoder;
use image::ColorType;
use log::info;
use std::fs::{self, File};
use std::path::PathBuf;

use crate::config::OutputSpec;
use crate::error::{FractalError, Result};
use crate::field::ScalarField;
use crate::palette::magma;

/// Second-resolution local time, used when no name is given.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stretch the field so its smallest cell becomes 0 and its largest 1.
/// A flat field maps to all zeros.  The generator only emits finite
/// cells, but a field built with `ScalarField::from_cells` may not;
/// non-finite cells are left out of the range and map to 0.
pub fn normalize(field: &ScalarField) -> Vec<f64> {
    let (min, max) = field
        .cells()
        .iter()
        .filter(|v| v.is_finite())
        .fold((std::f64::INFINITY, std::f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        });
    let range = max - min;
    field
        .cells()
        .iter()
        .map(|&v| {
            if v.is_finite() && range > 0.0 {
                (v - min) / range
            } else {
                0.0
            }
        })
        .collect()
}

/// The field as packed RGB8, row-major.
pub fn colorize(field: &ScalarField) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(field.cells().len() * 3);
    for t in normalize(field) {
        pixels.extend_from_slice(&magma(t));
    }
    pixels
}

/// The file name to write: the given name or the timestamp, with
/// `.png` appended if it is not already there.
pub fn image_name(output: &OutputSpec, now: &DateTime<Local>) -> String {
    let stem = match output.name {
        Some(ref name) => name.clone(),
        None => now.format(TIMESTAMP_FORMAT).to_string(),
    };
    if stem.to_lowercase().ends_with(".png") {
        stem
    } else {
        format!("{}.png", stem)
    }
}

/// Encode `field` as a PNG under `output.directory`, creating the
/// directory if needed.  Returns the path written.
pub fn write_field(field: ScalarField, output: &OutputSpec) -> Result<PathBuf> {
    fs::create_dir_all(&output.directory).map_err(|e| FractalError::io(&output.directory, e))?;
    let path = output.directory.join(image_name(output, &Local::now()));

    let pixels = colorize(&field);
    let file = File::create(&path).map_err(|e| FractalError::io(&path, e))?;
    PNGEncoder::new(file)
        .encode(
            &pixels,
            field.width() as u32,
            field.height() as u32,
            ColorType::RGB(8),
        )
        .map_err(|e| FractalError::Encode {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    info!("wrote {}x{} image to {}", field.width(), field.height(), path.display());
    Ok(path)
}
