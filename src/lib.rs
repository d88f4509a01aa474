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

//! aero-coords
//!
//! A library for the coordinates, bearings and distances used in
//! aeronautical data, and for calculating new positions from them on an
//! ellipsoid.
//!
//! ## Coordinates
//!
//! Aeronautical publications write longitudes, latitudes and bearings as
//! degrees, minutes and seconds, usually *compacted*: without any
//! separator between the fields, e.g. `1234601.445E`, `N1030.000` or
//! `1234601.445` for a bearing.
//!
//! The [`angle`] module parses the four compacted layouts (DMSH, HDMS,
//! DMH and HDM) into decimal degrees and formats decimal degrees back into
//! text. Parsing validates in three stages: the structure of the text,
//! the range of its minutes and seconds fields, and the range of the
//! resulting angle.
//!
//! The [`Coordinate`], [`Bearing`] and [`Distance`] value objects never
//! fail to construct: they record every fault in their source value and
//! render a label-aware message for the user, e.g.
//! `"Radius is required.Radius UOM error."`.
//!
//! ## Geodesic navigation
//!
//! The [`geodesic`] module solves the direct geodesic problem, the
//! position at a distance and azimuth from a start position, using
//! [Vincenty's method](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf) on an
//! [`Ellipsoid`] from a small named catalog: `WGS84` and `WGS72`.
//!
//! The [`point`] module composes the value objects and the solver to
//! calculate polar and offset positions from a reference point.
//!
//! ## Other tools
//!
//! - [`arinc424`] - the ARINC 424 full degree coordinate shorthand, e.g. `5060N`;
//! - [`extraction`] - find coordinate pairs in free text;
//! - [`distance`] and [`speed`] - unit of measure conversions.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [regex](https://crates.io/crates/regex) - to match angle and coordinate text;
//! - [thiserror](https://crates.io/crates/thiserror) - to define the `Error` type;
//! - [tracing](https://crates.io/crates/tracing) - to log solver and parser diagnostics.

extern crate angle_sc;
extern crate icao_units;

pub mod angle;
pub mod arinc424;
pub mod bearing;
pub mod coordinate;
pub mod distance;
pub mod ellipsoid;
pub mod error;
pub mod extraction;
pub mod geodesic;
pub mod point;
pub mod speed;

pub use angle::{AngleClass, AngleLayout, Hemisphere, Separator};
pub use angle_sc::{Angle, Degrees, Radians};
pub use bearing::Bearing;
pub use coordinate::Coordinate;
pub use distance::{Distance, DistanceSource, LengthUnit};
pub use error::Error;
pub use geodesic::Destination;
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;
pub use point::{CalculatedPoint, OffsetSide, Point};
pub use speed::SpeedUnit;

use once_cell::sync::Lazy;

/// The parameters of an `Ellipsoid`.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The catalog name of the ellipsoid.
    name: &'static str,
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The Semiminor axis of the ellipsoid.
    b: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,

    /// One minus the flattening ratio.
    one_minus_f: f64,
    /// The square of the second Eccentricity of the ellipsoid.
    ep_2: f64,
}

impl Ellipsoid {
    /// Constructor, the Semiminor axis is derived from the Semimajor axis
    /// and the flattening.
    /// * `name` - the name of the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn new(name: &'static str, a: Metres, f: f64) -> Self {
        Self::from_axes(name, a, ellipsoid::calculate_minor_axis(a, f), f)
    }

    /// Constructor from published parameters, where the Semiminor axis and
    /// flattening are stored as given rather than derived from each other.
    /// * `name` - the name of the `Ellipsoid`.
    /// * `a` - the Semimajor axis of the `Ellipsoid`.
    /// * `b` - the Semiminor axis of the `Ellipsoid`.
    /// * `f` - the flattening of the `Ellipsoid`, a ratio.
    #[must_use]
    pub fn from_axes(name: &'static str, a: Metres, b: Metres, f: f64) -> Self {
        Self {
            name,
            a,
            b,
            f,
            one_minus_f: 1.0 - f,
            ep_2: ellipsoid::calculate_sq_2nd_eccentricity(a, b),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::from_axes(
            "WGS84",
            ellipsoid::wgs84::A,
            ellipsoid::wgs84::B,
            ellipsoid::wgs84::F,
        )
    }

    /// Construct an `Ellipsoid` with the WGS-72 parameters.
    #[must_use]
    pub fn wgs72() -> Self {
        Self::from_axes(
            "WGS72",
            ellipsoid::wgs72::A,
            ellipsoid::wgs72::B,
            ellipsoid::wgs72::F,
        )
    }

    /// Find an `Ellipsoid` in the catalog by name, ignoring case.
    /// * `name` - the catalog name, e.g. `WGS84`.
    /// # Examples
    /// ```
    /// use aero_coords::Ellipsoid;
    ///
    /// assert_eq!("WGS72", Ellipsoid::named("WGS72").unwrap().name());
    /// assert!(Ellipsoid::named("UNKNOWN").is_err());
    /// ```
    /// # Errors
    /// `UnsupportedEllipsoid` if the name is not in the catalog.
    pub fn named(name: &str) -> Result<&'static Self, Error> {
        let name = name.trim();
        ELLIPSOIDS
            .iter()
            .copied()
            .find(|ellipsoid| ellipsoid.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedEllipsoid(name.to_string()))
    }

    /// The catalog name of the ellipsoid.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The Semiminor axis of the ellipsoid.
    #[must_use]
    pub const fn b(&self) -> Metres {
        self.b
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    /// One minus the flattening ratio.
    #[must_use]
    pub const fn one_minus_f(&self) -> f64 {
        self.one_minus_f
    }

    /// The square of the second Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn ep_2(&self) -> f64 {
        self.ep_2
    }

    /// The square of the second Eccentricity of the ellipsoid: (a² - b²) / b².
    #[must_use]
    pub const fn sq_2nd_eccentricity(&self) -> f64 {
        self.ep_2
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// A static instance of the WGS-72 `Ellipsoid`.
pub static WGS72_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs72);

/// The ellipsoid catalog.
pub static ELLIPSOIDS: Lazy<[&'static Ellipsoid; 2]> =
    Lazy::new(|| [&*WGS84_ELLIPSOID, &*WGS72_ELLIPSOID]);

/// Calculate the destination of a geodesic on a named `Ellipsoid`.
/// * `lon`, `lat` - the start position.
/// * `azimuth` - the initial azimuth, clockwise from North.
/// * `distance` - the length of the geodesic.
/// * `ellipsoid_name` - the catalog name of the `Ellipsoid`, e.g. `WGS84`.
///
/// # Examples
/// ```
/// use aero_coords::*;
///
/// let result = calculate_destination(
///     Degrees(0.0),
///     Degrees(0.0),
///     Degrees(0.0),
///     Metres(10_000.0),
///     "WGS84",
/// )
/// .unwrap();
/// assert_eq!(0.0, result.lon.0);
/// assert!((result.lat.0 - 0.090_436_946_953_566_91).abs() < 1e-12);
///
/// let distance_nm = NauticalMiles::from(Metres(10_000.0));
/// println!("Distance: {:?}", distance_nm);
/// ```
/// # Errors
/// `UnsupportedEllipsoid` if the ellipsoid is not in the catalog, otherwise
/// see `geodesic::solve_direct`.
pub fn calculate_destination(
    lon: Degrees,
    lat: Degrees,
    azimuth: Degrees,
    distance: Metres,
    ellipsoid_name: &str,
) -> Result<Destination, Error> {
    let ellipsoid = Ellipsoid::named(ellipsoid_name)?;
    geodesic::solve_direct(lon, lat, azimuth, distance, ellipsoid)
}
