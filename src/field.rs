// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The field generator walks every pixel of the grid, maps it onto
//! the plane, runs the escape test, and stores the smoothed value.
//! Pixels never read one another, so the grid can be cut into bands
//! of rows and each band handed to its own thread.

use itertools::iproduct;
use log::debug;

use crate::config::{FractalKind, IterationSpec, ViewportSpec};
use crate::error::{FractalError, Result};
use crate::escape::escape_count;
use crate::planes::{Pixel, PlaneMapper};
use crate::smooth::smooth;

/// A dense grid of smoothed escape values, stored row-major.  Row `y`
/// runs along the real axis at imaginary pixel `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl ScalarField {
    /// Wrap an already-filled buffer.  Returns `None` if the buffer does
    /// not hold exactly `width * height` cells or either side is 0.
    pub fn from_cells(width: usize, height: usize, cells: Vec<f64>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return None;
        }
        Some(ScalarField {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(row, col)`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    /// Iterate over rows, top (imaginary pixel 0) first.
    pub fn rows(&self) -> std::slice::Chunks<f64> {
        self.cells.chunks(self.width)
    }

    /// Give up the buffer.
    pub fn into_cells(self) -> Vec<f64> {
        self.cells
    }
}

/// Everything needed to compute one field.  Once built it is only
/// read, so a single generator can be shared by every worker.
#[derive(Debug)]
pub struct FieldGenerator {
    plane: PlaneMapper,
    kind: FractalKind,
    iteration: IterationSpec,
}

impl FieldGenerator {
    /// Requires the width and height of the grid, the kind of fractal,
    /// the iteration budget, and the viewport on the complex plane.
    /// A hand-built `FractalKind::Julia` is checked here as well.
    pub fn new(
        width: usize,
        height: usize,
        kind: FractalKind,
        iteration: IterationSpec,
        viewport: &ViewportSpec,
    ) -> Result<Self> {
        let kind = kind.checked()?;
        let plane = PlaneMapper::new(width, height, viewport)?;
        Ok(FieldGenerator {
            plane,
            kind,
            iteration,
        })
    }

    /// The mapper between pixels and the plane.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    /// The fractal this generator computes.
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    /// The smoothed value of a single pixel.  Depends on nothing but
    /// the pixel and the generator.
    #[inline]
    pub fn pixel_value(&self, x: usize, y: usize) -> f64 {
        let point = self.plane.pixel_to_point(&Pixel(x, y));
        let (param, start) = self.kind.seed(point);
        let escape = escape_count(param, start, &self.iteration);
        smooth(escape, self.iteration.max_iter())
    }

    /// Fill `rows`, which must be whole rows beginning at row `first`.
    fn render_rows(&self, first: usize, rows: &mut [f64]) {
        let width = self.plane.integral_plane.0;
        for (offset, row) in rows.chunks_mut(width).enumerate() {
            let y = first + offset;
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.pixel_value(x, y);
            }
        }
    }

    /// The main function for single-threaded runs.
    pub fn generate_single(&self) -> ScalarField {
        let IntegralDims { width, height } = self.dims();
        debug!("rendering {} {}x{} on one thread", self.kind.name(), width, height);
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| self.pixel_value(x, y))
            .collect();
        ScalarField {
            width,
            height,
            cells,
        }
    }

    /// A multi-threaded version of the render function.  The grid is
    /// cut into at most `threads` bands of whole rows; each thread owns
    /// its band outright, so there is nothing to lock.
    pub fn generate(&self, threads: usize) -> Result<ScalarField> {
        if threads < 1 {
            return Err(FractalError::InvalidThreads(threads));
        }
        let IntegralDims { width, height } = self.dims();
        let bands = threads.min(height);
        let band_rows = (height + bands - 1) / bands;
        debug!(
            "rendering {} {}x{} on {} threads, {} rows each",
            self.kind.name(),
            width,
            height,
            bands,
            band_rows
        );

        let mut cells = vec![0.0_f64; self.plane.len()];
        crossbeam::scope(|spawner| {
            for (band, rows) in cells.chunks_mut(band_rows * width).enumerate() {
                spawner.spawn(move |_| self.render_rows(band * band_rows, rows));
            }
        })
        .map_err(|_| FractalError::Worker)?;

        Ok(ScalarField {
            width,
            height,
            cells,
        })
    }

    fn dims(&self) -> IntegralDims {
        IntegralDims {
            width: self.plane.integral_plane.0,
            height: self.plane.integral_plane.1,
        }
    }
}

struct IntegralDims {
    width: usize,
    height: usize,
}
