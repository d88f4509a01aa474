// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! This module contains the series coefficients of the Vincenty direct
//! solution.
//!
//! It uses the equations given by T Vincenty in
//! [Direct and Inverse Solutions of Geodesics on the Ellipsoid with
//! application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf),
//! Survey Review XXIII, No. 176, April 1975.

/// The polynomial coefficients of the `A` series in u², Vincenty Eq. 3.
const A_COEFFS: [f64; 4] = [4096.0, -768.0, 320.0, -175.0];

/// The polynomial coefficients of the `B` series in u², Vincenty Eq. 4.
const B_COEFFS: [f64; 4] = [256.0, -128.0, 74.0, -47.0];

/// Evaluate the polynomial in x using
/// [Horner's method](https://en.wikipedia.org/wiki/Horner%27s_method).
/// * `coeffs` - the polynomial coefficients, lowest order first.
/// * `x` - the variable.
#[must_use]
pub fn evaluate_polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .split_last()
        .map_or(0.0, |(last, elements)| {
            elements
                .iter()
                .rev()
                .fold(*last, |result, element| result.mul_add(x, *element))
        })
}

/// Calculate u², the square of the second eccentricity scaled by the
/// square of the cosine of the geodesic azimuth at the equator.
/// * `cos_sq_alpha` - the square of the cosine of the equatorial azimuth.
/// * `ep_2` - the square of the second Eccentricity of the ellipsoid.
#[must_use]
pub fn calculate_u_sq(cos_sq_alpha: f64, ep_2: f64) -> f64 {
    cos_sq_alpha * ep_2
}

/// The scale factor `A`, Vincenty Eq. 3.
/// * `u_sq` - u², see `calculate_u_sq`.
/// # Examples
/// ```
/// use aero_coords::ellipsoid::coefficients::evaluate_a;
///
/// assert_eq!(1.0, evaluate_a(0.0));
/// ```
#[must_use]
pub fn evaluate_a(u_sq: f64) -> f64 {
    1.0 + u_sq / 16384.0 * evaluate_polynomial(&A_COEFFS, u_sq)
}

/// The scale factor `B`, Vincenty Eq. 4.
/// * `u_sq` - u², see `calculate_u_sq`.
#[must_use]
pub fn evaluate_b(u_sq: f64) -> f64 {
    u_sq / 1024.0 * evaluate_polynomial(&B_COEFFS, u_sq)
}

/// The longitude correction factor `C`, Vincenty Eq. 10.
/// * `f` - the flattening of the ellipsoid.
/// * `cos_sq_alpha` - the square of the cosine of the equatorial azimuth.
#[must_use]
pub fn evaluate_c(f: f64, cos_sq_alpha: f64) -> f64 {
    f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha))
}

/// The correction to the arc length on the auxiliary sphere, delta sigma,
/// Vincenty Eq. 6.
/// * `b` - the `B` scale factor.
/// * `sin_sigma`, `cos_sigma` - the sine and cosine of the arc length.
/// * `cos_2sigma_m` - the cosine of twice the arc length from the equator
///   to the midpoint of the geodesic.
#[must_use]
pub fn evaluate_delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sigma_m: f64) -> f64 {
    let cos_sq_2sigma_m = cos_2sigma_m * cos_2sigma_m;
    b * sin_sigma
        * (cos_2sigma_m
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sq_2sigma_m)
                    - b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_2sigma_m)))
}
