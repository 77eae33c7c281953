// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong before, during, or after rendering a
//! field.  Configuration problems are caught when the specs are built,
//! so none of these can occur inside the per-pixel loop.

use failure::Fail;
use std::path::Path;

/// The single error type for the crate.
#[derive(Debug, Fail)]
pub enum FractalError {
    /// Zoom factors are reciprocal scales and must be strictly positive.
    #[fail(display = "zoom factor must be a finite number greater than 0, got {}", _0)]
    InvalidZoomFactor(f64),

    /// The zoom point must be an actual point on the plane.
    #[fail(display = "zoom point must be finite, got ({}, {})", re, im)]
    InvalidZoomCenter {
        /// Real part of the rejected point.
        re: f64,
        /// Imaginary part of the rejected point.
        im: f64,
    },

    /// At least one iteration is required to say anything about a point.
    #[fail(display = "maximum iteration count must be at least 1, got {}", _0)]
    InvalidMaxIter(u32),

    /// The smooth coloring logarithm is only defined above 1, and the
    /// orbit must be able to square without overflowing.
    #[fail(display = "horizon must be greater than 1 and at most 1e150, got {}", _0)]
    InvalidHorizon(f64),

    /// The output grid has no pixels.
    #[fail(display = "image dimensions must both be at least 1, got {}x{}", width, height)]
    EmptyGrid {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A render needs at least one worker.
    #[fail(display = "thread count must be at least 1, got {}", _0)]
    InvalidThreads(usize),

    /// The Julia constant must be finite.
    #[fail(display = "julia constant must be finite, got ({}, {})", re, im)]
    InvalidJuliaConstant {
        /// Real part of the rejected constant.
        re: f64,
        /// Imaginary part of the rejected constant.
        im: f64,
    },

    /// Creating the output directory or file failed.
    #[fail(display = "could not write {}: {}", path, cause)]
    Io {
        /// The path we were trying to create.
        path: String,
        /// The underlying failure.
        #[cause]
        cause: std::io::Error,
    },

    /// The image encoder rejected the buffer.
    #[fail(display = "could not encode {}: {}", path, reason)]
    Encode {
        /// The path we were trying to write.
        path: String,
        /// What the encoder said.
        reason: String,
    },

    /// A render thread panicked before finishing its rows.
    #[fail(display = "a render thread panicked")]
    Worker,
}

impl FractalError {
    pub(crate) fn io(path: &Path, cause: std::io::Error) -> Self {
        FractalError::Io {
            path: path.display().to_string(),
            cause,
        }
    }
}

/// Shorthand for results carrying a `FractalError`.
pub type Result<T> = std::result::Result<T, FractalError>;
