// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Continuous escape-time coloring.  The raw iteration count produces
//! visible bands; subtracting the double logarithm of the escape
//! magnitude slides each point between its band and the next.
//! See https://linas.org/art-gallery/escape/smooth.html

use crate::escape::EscapeCount;

/// Turn an escape count into a continuous value.  Escaped points land
/// near `iterations + 1`; interior points get exactly `max_iter`.
///
/// The double logarithm is only defined for magnitudes above 1.  A
/// validated `IterationSpec` guarantees that for every escaped orbit;
/// anything at or below 1 is colored as interior.  An orbit whose
/// magnitude overflowed gets its integer band, `iterations`, with no
/// fractional correction.
#[inline]
pub fn smooth(escape: EscapeCount, max_iter: u32) -> f64 {
    if !escape.magnitude.is_finite() {
        f64::from(escape.iterations)
    } else if escape.magnitude > 1.0 {
        f64::from(escape.iterations) + 1.0 - escape.magnitude.log10().log10() / 2f64.log10()
    } else {
        f64::from(max_iter)
    }
}
