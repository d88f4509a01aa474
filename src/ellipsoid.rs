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

//! The ellipsoid module contains functions for deriving the parameters of an
//! ellipsoid from its Semimajor axis and flattening ratio, together with the
//! primary parameters of the ellipsoids in the catalog.

#![allow(clippy::suboptimal_flops)]

pub mod coefficients;
pub mod wgs72;
pub mod wgs84;

use crate::Metres;
use angle_sc::Angle;

/// Calculate the Semiminor axis of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `f` - the flattening ratio.
/// # Examples
/// ```
/// use aero_coords::Metres;
/// use aero_coords::ellipsoid::calculate_minor_axis;
///
/// let b : Metres = Metres(6_356_752.314_245_179);
/// assert_eq!(b, calculate_minor_axis(Metres(6_378_137.0), 1.0 / 298.257_223_563));
/// ```
#[must_use]
pub fn calculate_minor_axis(a: Metres, f: f64) -> Metres {
    Metres(a.0 * (1.0 - f))
}

/// Calculate the flattening ratio of an ellipsoid from its axes.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
#[must_use]
pub fn calculate_flattening(a: Metres, b: Metres) -> f64 {
    (a.0 - b.0) / a.0
}

/// Calculate the square of the second Eccentricity of an ellipsoid from
/// its axes: (a² - b²) / b².
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use aero_coords::Metres;
/// use aero_coords::ellipsoid::calculate_sq_2nd_eccentricity;
///
/// let ep_2 = calculate_sq_2nd_eccentricity(Metres(6_378_137.0), Metres(6_356_752.3141));
/// assert!((ep_2 - 0.006_739_496_788_26).abs() < 1e-14);
/// ```
#[must_use]
pub fn calculate_sq_2nd_eccentricity(a: Metres, b: Metres) -> f64 {
    let a2 = a.0 * a.0;
    let b2 = b.0 * b.0;
    (a2 - b2) / b2
}

/// Convert a geodetic Latitude to a parametric (reduced) Latitude on the
/// auxiliary sphere: tan(beta) = (1 - f) tan(lat).
/// * `lat` - the geodetic Latitude
/// * `one_minus_f` - one minus the flattening ratio.
#[must_use]
pub fn calculate_parametric_latitude(lat: Angle, one_minus_f: f64) -> Angle {
    Angle::from_y_x(one_minus_f * lat.sin().0, lat.cos().0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::{is_within_tolerance, Degrees, Radians};

    #[test]
    fn test_calculate_flattening() {
        let f = calculate_flattening(wgs84::A, wgs84::B);
        assert!(is_within_tolerance(wgs84::F, f, 1e-11));

        let f = calculate_flattening(wgs72::A, wgs72::B);
        assert!(is_within_tolerance(wgs72::F, f, 1e-11));
    }

    #[test]
    fn test_calculate_minor_axis() {
        let b = calculate_minor_axis(wgs84::A, wgs84::F);
        assert!(is_within_tolerance(wgs84::B.0, b.0, 1e-3));
    }

    #[test]
    fn test_calculate_parametric_latitude() {
        let one_minus_f = 1.0 - wgs84::F;

        let beta = calculate_parametric_latitude(Angle::from(Degrees(0.0)), one_minus_f);
        assert_eq!(0.0, Radians::from(beta).0);

        let beta = calculate_parametric_latitude(Angle::from(Degrees(90.0)), one_minus_f);
        assert!(is_within_tolerance(90.0, Degrees::from(beta).0, 1e-12));

        for i in -89..90 {
            let latitude = f64::from(i);
            let beta = calculate_parametric_latitude(Angle::from(Degrees(latitude)), one_minus_f);
            let expected = libm::atan(one_minus_f * libm::tan(latitude.to_radians()));
            assert!(is_within_tolerance(expected, Radians::from(beta).0, 1e-15));
        }
    }
}
