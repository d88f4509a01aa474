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

//! The geodesic module contains the Vincenty direct solution: the position
//! at a given distance along a geodesic from a start position and azimuth
//! on the surface of an ellipsoid.

#![allow(clippy::many_single_char_names)]

use crate::ellipsoid::coefficients::{
    calculate_u_sq, evaluate_a, evaluate_b, evaluate_c, evaluate_delta_sigma,
};
use crate::ellipsoid::calculate_parametric_latitude;
use crate::error::Error;
use crate::{Ellipsoid, Metres};
use angle_sc::{Angle, Degrees};
use core::f64::consts::{PI, TAU};

/// The convergence threshold of the arc length iteration, in Radians.
pub const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// The maximum number of arc length iterations.
pub const MAX_ITERATIONS: u32 = 200;

/// The result of the direct solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    /// The destination longitude, in the range [-180, 180).
    pub lon: Degrees,
    /// The destination latitude.
    pub lat: Degrees,
}

/// Check that a value is a finite number.
fn finite(value: f64, name: &'static str) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NotFinite(name))
    }
}

/// Solve the direct geodesic problem using Vincenty's method.
///
/// T Vincenty, [Direct and Inverse Solutions of Geodesics on the Ellipsoid
/// with application of nested equations](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf).
/// * `lon`, `lat` - the start position in decimal degrees.
/// * `azimuth` - the initial azimuth, clockwise from North.
/// * `distance` - the distance along the geodesic.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the destination position in decimal degrees.
/// # Examples
/// ```
/// use aero_coords::geodesic::solve_direct;
/// use aero_coords::{Degrees, Metres, WGS84_ELLIPSOID};
///
/// let result = solve_direct(
///     Degrees(137.5),
///     Degrees(-32.5),
///     Degrees(127.5),
///     Metres(243_855.411),
///     &WGS84_ELLIPSOID,
/// )
/// .unwrap();
/// assert!((result.lon.0 - 139.589_691_856_739_08).abs() < 1e-9);
/// assert!((result.lat.0 + 33.821_202_822_430_9).abs() < 1e-9);
/// ```
/// # Errors
/// `NotFinite` if an argument is not a finite number,
/// `NoConvergence` if the arc length fails to converge.
pub fn solve_direct(
    lon: Degrees,
    lat: Degrees,
    azimuth: Degrees,
    distance: Metres,
    ellipsoid: &Ellipsoid,
) -> Result<Destination, Error> {
    let lon1 = finite(lon.0, "longitude")?.to_radians();
    finite(lat.0, "latitude")?;
    let alpha1 = finite(azimuth.0, "azimuth")?.to_radians();
    let distance = finite(distance.0, "distance")?;

    if distance == 0.0 {
        return Ok(Destination { lon, lat });
    }

    let f = ellipsoid.f();
    let b = ellipsoid.b().0;
    let sin_alpha1 = libm::sin(alpha1);
    let cos_alpha1 = libm::cos(alpha1);

    // the reduced latitude, U1
    let u1 = calculate_parametric_latitude(Angle::from(lat), ellipsoid.one_minus_f());
    let sin_u1 = u1.sin().0;
    let cos_u1 = u1.cos().0;

    // the arc length from the equator to the start position
    let sigma1 = libm::atan2(sin_u1, cos_u1 * cos_alpha1);
    // the azimuth of the geodesic at the equator
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

    let u_sq = calculate_u_sq(cos_sq_alpha, ellipsoid.ep_2());
    let a_coeff = evaluate_a(u_sq);
    let b_coeff = evaluate_b(u_sq);

    let sigma0 = distance / (b * a_coeff);
    let mut sigma = sigma0;
    let mut sin_sigma;
    let mut cos_sigma;
    let mut cos_2sigma_m;
    let mut iterations = 0;
    loop {
        if iterations >= MAX_ITERATIONS {
            tracing::warn!(iterations, distance, "Vincenty direct solution did not converge");
            return Err(Error::NoConvergence { iterations });
        }
        iterations += 1;

        cos_2sigma_m = libm::cos(2.0 * sigma1 + sigma);
        sin_sigma = libm::sin(sigma);
        cos_sigma = libm::cos(sigma);
        let delta_sigma = evaluate_delta_sigma(b_coeff, sin_sigma, cos_sigma, cos_2sigma_m);
        let sigma_prev = sigma;
        sigma = sigma0 + delta_sigma;

        // a NaN difference never converges
        if libm::fabs(sigma - sigma_prev) <= CONVERGENCE_THRESHOLD {
            break;
        }
    }
    tracing::trace!(iterations, "Vincenty direct solution converged");

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let lat2 = libm::atan2(
        sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1,
        ellipsoid.one_minus_f() * libm::sqrt(sin_alpha * sin_alpha + x * x),
    );

    // the difference in longitude on the auxiliary sphere
    let lambda = libm::atan2(
        sin_sigma * sin_alpha1,
        cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1,
    );
    let c = evaluate_c(f, cos_sq_alpha);
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
    let lon2 = (lon1 + l + 3.0 * PI).rem_euclid(TAU) - PI;

    Ok(Destination {
        lon: Degrees(lon2.to_degrees()),
        lat: Degrees(lat2.to_degrees()),
    })
}
