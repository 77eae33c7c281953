// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a square window on the complex plane defined by a zoom center
//! and a zoom factor.
use crate::config::ViewportSpec;
use crate::error::{FractalError, Result};
use num::Complex;

/// The side of the unzoomed window: [-2, 2] on both axes.
pub const CANONICAL_EXTENT: f64 = 4.0;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the x, y of a pixel on the integral plane.  `x` walks the
/// real axis and `y` walks the imaginary axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Maps pixels of an integral plane onto points of the complex plane.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    // The smallest real and imaginary values in the window.
    origin: Complex<f64>,
    // Complex-plane distance covered by one pixel, per axis.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  The window is `4 / zoom_factor` wide and tall,
    /// centered at the zoom center.
    pub fn new(width: usize, height: usize, viewport: &ViewportSpec) -> Result<PlaneMapper> {
        if width == 0 || height == 0 {
            return Err(FractalError::EmptyGrid { width, height });
        }

        let extent = CANONICAL_EXTENT / viewport.zoom_factor();
        let center = viewport.zoom_center();

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            origin: Complex::new(center.re - extent / 2.0, center.im - extent / 2.0),
            steps: (extent / (width as f64), extent / (height as f64)),
        })
    }

    /// The total number of points in the integral grid.  Used to
    /// calculate memory needs.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane is of a size.  Always false
    /// for a mapper built through `new`.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The lower-left corner of the window; pixel (0, 0) lands here.
    pub fn leftlower(&self) -> Complex<f64> {
        self.origin
    }

    /// The upper-right corner of the window.  No pixel reaches it; the
    /// range is exclusive at the top.
    pub fn rightupper(&self) -> Complex<f64> {
        Complex::new(
            self.origin.re + self.steps.0 * (self.integral_plane.0 as f64),
            self.origin.im + self.steps.1 * (self.integral_plane.1 as f64),
        )
    }

    /// The complex-plane width and height of a single pixel.
    pub fn steps(&self) -> (f64, f64) {
        self.steps
    }

    /// Given a pixel on the integral cartesian plane, return the point
    /// on the complex plane it represents.
    #[inline]
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.steps.0 * (pixel.0 as f64) + self.origin.re,
            self.steps.1 * (pixel.1 as f64) + self.origin.im,
        )
    }
}
