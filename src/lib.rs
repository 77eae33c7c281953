#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! The Mandelbrot and Julia sets are both drawn by iterating
//! z <- z^2 + c and measuring how quickly the orbit runs off past some
//! horizon.  For the Mandelbrot set every pixel supplies its own `c`
//! and the orbit starts at zero; for a Julia set `c` is fixed and the
//! pixel is the starting point.  That "velocity" is smoothed with a
//! double logarithm so the bands between iteration counts blend into
//! one another, and the resulting field is run through a color map and
//! written out as a PNG.
//!
//! Every pixel is computed independently of every other, so the field
//! generator splits the image into bands of rows and renders each band
//! on its own thread.

extern crate chrono;
extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
extern crate log;
extern crate num;

pub mod config;
pub mod error;
pub mod escape;
pub mod field;
pub mod palette;
pub mod planes;
pub mod sink;
pub mod smooth;

pub use config::{FractalKind, IterationSpec, OutputSpec, RenderConfig, ViewportSpec};
pub use error::{FractalError, Result};
pub use field::{FieldGenerator, ScalarField};
pub use planes::PlaneMapper;

use log::info;
use std::path::PathBuf;

/// Render the field described by `config` and write it to disk,
/// returning the path of the image.
pub fn render(config: &RenderConfig) -> Result<PathBuf> {
    info!(
        "{} {}x{}, {} iterations, horizon {}, zoom {} at ({}, {}), {} threads",
        config.kind.name(),
        config.size,
        config.size,
        config.iteration.max_iter(),
        config.iteration.horizon(),
        config.viewport.zoom_factor(),
        config.viewport.zoom_center().re,
        config.viewport.zoom_center().im,
        config.threads
    );
    let generator = FieldGenerator::new(
        config.size,
        config.size,
        config.kind,
        config.iteration,
        &config.viewport,
    )?;
    let field = generator.generate(config.threads)?;
    sink::write_field(field, &config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;
    use tempfile::tempdir;

    #[test]
    fn render_writes_the_named_image() {
        let dir = tempdir().unwrap();
        let config = RenderConfig::new(
            FractalKind::Julia(Complex::new(-0.8, 0.156)),
            16,
            IterationSpec::new(20, 2.0).unwrap(),
            ViewportSpec::default(),
            2,
            OutputSpec::new(dir.path().join("images"), Some("j".to_string())),
        )
        .unwrap();
        let path = render(&config).unwrap();
        assert_eq!(path, dir.path().join("images").join("j.png"));
        assert!(path.is_file());
    }
}
