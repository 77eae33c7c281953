// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A perceptually ordered black-to-cream color map, sampled from
//! magma at nine evenly spaced stops and linearly interpolated.

use num::clamp;

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];

/// Map `t` in [0, 1] to an RGB color.  Values outside the range are
/// clamped and NaN is treated as 0.
pub fn magma(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { clamp(t, 0.0, 1.0) };
    let scaled = t * (MAGMA.len() - 1) as f64;
    let low = (scaled.floor() as usize).min(MAGMA.len() - 2);
    let frac = scaled - low as f64;
    let (a, b) = (MAGMA[low], MAGMA[low + 1]);
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * frac;
        out[i] = v.round() as u8;
    }
    out
}
