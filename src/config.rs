// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The run-wide, immutable parameters of a render.  Every struct here
//! is built through a constructor that checks its invariants, so the
//! rest of the crate never has to.

use crate::error::{FractalError, Result};
use crate::planes::CANONICAL_EXTENT;
use num::Complex;
use std::path::PathBuf;

/// Where the plane is centered and how far it is zoomed in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportSpec {
    zoom_center: Complex<f64>,
    zoom_factor: f64,
}

impl ViewportSpec {
    /// A zoom factor of 1 shows the canonical [-2, 2] x [-2, 2] square;
    /// larger factors narrow it, smaller ones widen it.
    pub fn new(zoom_center: Complex<f64>, zoom_factor: f64) -> Result<Self> {
        if !zoom_center.re.is_finite() || !zoom_center.im.is_finite() {
            return Err(FractalError::InvalidZoomCenter {
                re: zoom_center.re,
                im: zoom_center.im,
            });
        }
        if !(zoom_factor > 0.0) || !zoom_factor.is_finite() {
            return Err(FractalError::InvalidZoomFactor(zoom_factor));
        }
        // Tiny factors overflow the extent; huge centers overflow the corners.
        let half = CANONICAL_EXTENT / zoom_factor / 2.0;
        if !half.is_finite() {
            return Err(FractalError::InvalidZoomFactor(zoom_factor));
        }
        let corners = [
            zoom_center.re - half,
            zoom_center.re + half,
            zoom_center.im - half,
            zoom_center.im + half,
        ];
        if corners.iter().any(|c| !c.is_finite()) {
            return Err(FractalError::InvalidZoomCenter {
                re: zoom_center.re,
                im: zoom_center.im,
            });
        }
        Ok(ViewportSpec {
            zoom_center,
            zoom_factor,
        })
    }

    /// The point the viewport is centered on.
    pub fn zoom_center(&self) -> Complex<f64> {
        self.zoom_center
    }

    /// The reciprocal scale applied to the canonical extent.
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }
}

impl Default for ViewportSpec {
    fn default() -> Self {
        ViewportSpec {
            zoom_center: Complex::new(0.0, 0.0),
            zoom_factor: 1.0,
        }
    }
}

/// The largest accepted horizon.  Any |z| below it squares to well
/// under `f64::MAX`.
pub const MAX_HORIZON: f64 = 1e150;

/// How long we iterate a point, and how far it has to run before we
/// decide it has escaped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IterationSpec {
    max_iter: u32,
    horizon: f64,
}

impl IterationSpec {
    /// The horizon must exceed 1: the smooth colorizer takes a double
    /// logarithm of the escape magnitude, which is undefined at or
    /// below 1.  It may not exceed `MAX_HORIZON`, so that squaring an
    /// orbit still inside the horizon cannot overflow.
    pub fn new(max_iter: u32, horizon: f64) -> Result<Self> {
        if max_iter < 1 {
            return Err(FractalError::InvalidMaxIter(max_iter));
        }
        if !(horizon > 1.0) || !(horizon <= MAX_HORIZON) {
            return Err(FractalError::InvalidHorizon(horizon));
        }
        Ok(IterationSpec { max_iter, horizon })
    }

    /// The iteration budget per point.
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// The escape threshold on |z|.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }
}

impl Default for IterationSpec {
    fn default() -> Self {
        IterationSpec {
            max_iter: 100,
            horizon: 2.0,
        }
    }
}

/// Which recurrence to run.  Both iterate z <- z^2 + c; they differ in
/// which of `z0` and `c` comes from the pixel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FractalKind {
    /// `z0 = 0`, `c = pixel`.
    Mandelbrot,
    /// `z0 = pixel`, `c` fixed for every pixel.
    Julia(Complex<f64>),
}

impl FractalKind {
    /// Build a Julia kind, rejecting non-finite constants.
    pub fn julia(c: Complex<f64>) -> Result<Self> {
        FractalKind::Julia(c).checked()
    }

    /// Returns the kind unchanged if its parameters are usable.  The
    /// `Julia` variant can be built directly, so `FieldGenerator::new`
    /// runs this on whatever it is given.
    pub fn checked(self) -> Result<Self> {
        match self {
            FractalKind::Julia(c) if !c.re.is_finite() || !c.im.is_finite() => {
                Err(FractalError::InvalidJuliaConstant { re: c.re, im: c.im })
            }
            kind => Ok(kind),
        }
    }

    /// Given the point a pixel maps to, return `(param, start)` for
    /// the escape evaluator.
    #[inline]
    pub fn seed(&self, point: Complex<f64>) -> (Complex<f64>, Complex<f64>) {
        match *self {
            FractalKind::Mandelbrot => (point, Complex::new(0.0, 0.0)),
            FractalKind::Julia(c) => (c, point),
        }
    }

    /// The name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "mandelbrot",
            FractalKind::Julia(_) => "julia",
        }
    }
}

/// Where the finished image goes.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputSpec {
    /// Directory the image is written into; created if missing.
    pub directory: PathBuf,
    /// File name; `None` means "use the current time".
    pub name: Option<String>,
}

impl OutputSpec {
    /// An empty name is the same as no name.
    pub fn new<P: Into<PathBuf>>(directory: P, name: Option<String>) -> Self {
        OutputSpec {
            directory: directory.into(),
            name: name.filter(|n| !n.is_empty()),
        }
    }
}

impl Default for OutputSpec {
    fn default() -> Self {
        OutputSpec::new("images", None)
    }
}

/// Everything needed for one render, already validated.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Which fractal.
    pub kind: FractalKind,
    /// Width and height of the square image.
    pub size: usize,
    /// Iteration budget and horizon.
    pub iteration: IterationSpec,
    /// Zoom center and factor.
    pub viewport: ViewportSpec,
    /// Worker threads for the field generator.
    pub threads: usize,
    /// Output location.
    pub output: OutputSpec,
}

impl RenderConfig {
    /// Checks the parts that the individual specs cannot.
    pub fn new(
        kind: FractalKind,
        size: usize,
        iteration: IterationSpec,
        viewport: ViewportSpec,
        threads: usize,
        output: OutputSpec,
    ) -> Result<Self> {
        if size < 1 {
            return Err(FractalError::EmptyGrid {
                width: size,
                height: size,
            });
        }
        if threads < 1 {
            return Err(FractalError::InvalidThreads(threads));
        }
        Ok(RenderConfig {
            kind,
            size,
            iteration,
            viewport,
            threads,
            output,
        })
    }
}
