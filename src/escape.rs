// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test: iterate z <- z^2 + c and count the steps
//! until |z| passes the horizon.

use crate::config::IterationSpec;
use num::Complex;

/// How a single orbit ended.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EscapeCount {
    /// Index of the step on which the orbit escaped, or `max_iter` if
    /// it never did.
    pub iterations: u32,
    /// |z| at the escaping step; 0 if the orbit stayed bounded.
    pub magnitude: f64,
}

impl EscapeCount {
    /// The result for an orbit that used up its whole budget.
    pub fn bounded(max_iter: u32) -> Self {
        EscapeCount {
            iterations: max_iter,
            magnitude: 0.0,
        }
    }

    /// True if the orbit crossed the horizon.
    pub fn escaped(&self) -> bool {
        self.magnitude > 0.0
    }
}

/// Iterate from `start` with the fixed `param` for at most
/// `spec.max_iter()` steps.
#[inline]
pub fn escape_count(param: Complex<f64>, start: Complex<f64>, spec: &IterationSpec) -> EscapeCount {
    let horizon = spec.horizon();
    let mut z = start;
    for i in 0..spec.max_iter() {
        z = z * z + param;
        let magnitude = z.norm();
        if magnitude > horizon {
            return EscapeCount {
                iterations: i,
                magnitude,
            };
        }
    }
    EscapeCount::bounded(spec.max_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(max_iter: u32, horizon: f64) -> IterationSpec {
        IterationSpec::new(max_iter, horizon).unwrap()
    }

    #[test]
    fn origin_never_escapes() {
        let zero = Complex::new(0.0, 0.0);
        for &max_iter in &[1, 2, 10, 100, 1000] {
            let e = escape_count(zero, zero, &spec(max_iter, 2.0));
            assert_eq!(e, EscapeCount::bounded(max_iter));
            assert!(!e.escaped());
        }
    }

    #[test]
    fn far_point_escapes_on_the_first_step() {
        let e = escape_count(Complex::new(100.0, 0.0), Complex::new(0.0, 0.0), &spec(50, 2.0));
        assert_eq!(e.iterations, 0);
        assert_eq!(e.magnitude, 100.0);
        assert!(e.escaped());
    }

    #[test]
    fn counts_steps_before_escape() {
        // c = 1: z goes 1, 2, 5; only 5 exceeds 2, on the third step.
        let e = escape_count(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), &spec(10, 2.0));
        assert_eq!(e.iterations, 2);
        assert_eq!(e.magnitude, 5.0);
    }

    #[test]
    fn horizon_is_a_strict_bound() {
        // c = 2 lands exactly on |z| = 2 after one step, then 6.
        let e = escape_count(Complex::new(2.0, 0.0), Complex::new(0.0, 0.0), &spec(10, 2.0));
        assert_eq!(e.iterations, 1);
        assert_eq!(e.magnitude, 6.0);
    }

    #[test]
    fn budget_cuts_off_slow_escapes() {
        // Same orbit as above, but only two steps allowed.
        let e = escape_count(Complex::new(1.0, 0.0), Complex::new(0.0, 0.0), &spec(2, 2.0));
        assert_eq!(e, EscapeCount::bounded(2));
    }

    #[test]
    fn start_value_is_honoured() {
        // Julia-style: start far out, tiny param.
        let e = escape_count(Complex::new(0.0, 0.0), Complex::new(0.0, 3.0), &spec(10, 2.0));
        assert_eq!(e.iterations, 0);
        assert_eq!(e.magnitude, 9.0);
    }
}
