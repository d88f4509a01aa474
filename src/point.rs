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

//! The point module calculates positions relative to a reference `Point`:
//!
//! - *polar*: at a distance along an azimuth from the reference point;
//! - *offset*: at a distance along an azimuth, then at an offset distance
//!   perpendicular to the azimuth, to its left or right.

use crate::angle::parse_number;
use crate::error::{CompositionFault, Error};
use crate::geodesic::solve_direct;
use crate::{AngleClass, Coordinate, Degrees, Distance, Ellipsoid};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The side of an offset, relative to the azimuth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OffsetSide {
    Left,
    Right,
}

impl OffsetSide {
    /// The azimuth perpendicular to `azimuth` on this side, normalised into
    /// the range [0, 360].
    /// * `azimuth` - an azimuth in the range [0, 360].
    ///
    /// # Examples
    /// ```
    /// use aero_coords::OffsetSide;
    ///
    /// assert_eq!(120.0, OffsetSide::Right.offset_azimuth(30.0));
    /// assert_eq!(300.0, OffsetSide::Left.offset_azimuth(30.0));
    /// ```
    #[must_use]
    pub fn offset_azimuth(self, azimuth: f64) -> f64 {
        let offset = match self {
            Self::Left => azimuth - 90.0,
            Self::Right => azimuth + 90.0,
        };
        if offset < 0.0 {
            offset + 360.0
        } else if offset > 360.0 {
            offset - 360.0
        } else {
            offset
        }
    }
}

impl FromStr for OffsetSide {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            _ => Err(Error::Composition(vec![CompositionFault::OffsetSide(
                text.to_string(),
            )])),
        }
    }
}

impl fmt::Display for OffsetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "LEFT"),
            Self::Right => write!(f, "RIGHT"),
        }
    }
}

/// A position calculated from a reference `Point`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatedPoint {
    /// The longitude in decimal degrees.
    pub lon: f64,
    /// The latitude in decimal degrees.
    pub lat: f64,
    /// How the position was calculated, e.g. `Ref: TEST1; Dist: 100 m; Azm: 123`.
    pub definition: String,
}

/// A named reference point.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    ident: String,
    lon: Coordinate,
    lat: Coordinate,
}

impl Point {
    /// Constructor.
    /// * `lon` - the longitude text.
    /// * `lat` - the latitude text.
    /// * `ident` - the identifier of the point, used to label the coordinates.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::Point;
    ///
    /// let point = Point::new("E0203000", "N553000", "TEST1");
    /// assert_eq!("", point.err_msg());
    /// assert_eq!(Some(20.5), point.lon().value());
    ///
    /// let point = Point::new("E0203000", "", "TEST1");
    /// assert_eq!("TEST1 latitude is required.", point.err_msg());
    /// ```
    #[must_use]
    pub fn new(lon: &str, lat: &str, ident: &str) -> Self {
        let ident = ident.trim();
        let label = |class: &str| {
            if ident.is_empty() {
                String::new()
            } else {
                format!("{ident} {class}")
            }
        };
        Self {
            ident: ident.to_string(),
            lon: Coordinate::new(lon, AngleClass::Longitude, &label("longitude")),
            lat: Coordinate::new(lat, AngleClass::Latitude, &label("latitude")),
        }
    }

    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    #[must_use]
    pub const fn lon(&self) -> &Coordinate {
        &self.lon
    }

    #[must_use]
    pub const fn lat(&self) -> &Coordinate {
        &self.lat
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.ident.is_empty() && self.lon.is_valid() && self.lat.is_valid()
    }

    /// The error message for the user, empty if the point is valid.
    #[must_use]
    pub fn err_msg(&self) -> String {
        let mut message = String::new();
        if self.ident.is_empty() {
            message.push_str("Reference point id is required.");
        }
        message + &self.lon.err_msg() + &self.lat.err_msg()
    }

    fn position(&self) -> Result<(Degrees, Degrees), Error> {
        match (self.lon.value(), self.lat.value()) {
            (Some(lon), Some(lat)) if self.is_valid() => Ok((Degrees(lon), Degrees(lat))),
            _ => Err(Error::InvalidReference(self.err_msg())),
        }
    }

    /// Calculate the position at a distance along an azimuth from the point.
    /// * `dist` - the distance from the point.
    /// * `azimuth` - the azimuth from the point, a number in [0, 360].
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::{Distance, Point, WGS84_ELLIPSOID};
    ///
    /// let point = Point::new("E0203000", "N553030", "TEST1");
    /// let result = point.polar(&Distance::metres("100"), "123", &WGS84_ELLIPSOID).unwrap();
    /// assert_eq!("Ref: TEST1; Dist: 100 m; Azm: 123", result.definition);
    ///
    /// let error = point.polar(&Distance::metres("100A"), "123A", &WGS84_ELLIPSOID);
    /// assert_eq!(
    ///     "dist: Distance value error.Azimuth value error: 123A.",
    ///     error.unwrap_err().to_string()
    /// );
    /// ```
    /// # Errors
    /// `Composition` if an argument is invalid, `InvalidReference` if the
    /// point is invalid, otherwise see `geodesic::solve_direct`.
    pub fn polar(
        &self,
        dist: &Distance,
        azimuth: &str,
        ellipsoid: &Ellipsoid,
    ) -> Result<CalculatedPoint, Error> {
        let mut faults = Vec::new();
        check_distance("dist", dist, &mut faults);
        let azimuth_value = check_azimuth(azimuth, &mut faults);
        let (Some(azimuth_value), true) = (azimuth_value, faults.is_empty()) else {
            return Err(Error::Composition(faults));
        };

        let (lon, lat) = self.position()?;
        let destination = solve_direct(
            lon,
            lat,
            Degrees(azimuth_value),
            dist.to_metres()?,
            ellipsoid,
        )?;
        let definition = format!("Ref: {}; Dist: {dist}; Azm: {}", self.ident, azimuth.trim());
        tracing::debug!(%definition, lon = destination.lon.0, lat = destination.lat.0, "polar point");

        Ok(CalculatedPoint {
            lon: destination.lon.0,
            lat: destination.lat.0,
            definition,
        })
    }

    /// Calculate the position at an offset distance to the side of the
    /// position at a distance along an azimuth from the point.
    /// * `dist` - the distance from the point along the azimuth.
    /// * `azimuth` - the azimuth from the point, a number in [0, 360].
    /// * `offset_side` - `LEFT` or `RIGHT` of the azimuth.
    /// * `offset_dist` - the distance perpendicular to the azimuth.
    /// * `ellipsoid` - the `Ellipsoid`.
    ///
    /// # Errors
    /// `Composition` if an argument is invalid, `InvalidReference` if the
    /// point is invalid, otherwise see `geodesic::solve_direct`.
    pub fn polar_offset(
        &self,
        dist: &Distance,
        azimuth: &str,
        offset_side: &str,
        offset_dist: &Distance,
        ellipsoid: &Ellipsoid,
    ) -> Result<CalculatedPoint, Error> {
        let mut faults = Vec::new();
        check_distance("dist", dist, &mut faults);
        let azimuth_value = check_azimuth(azimuth, &mut faults);
        let side = match offset_side.parse::<OffsetSide>() {
            Ok(side) => Some(side),
            Err(_) => {
                faults.push(CompositionFault::OffsetSide(offset_side.to_string()));
                None
            }
        };
        check_distance("offset_dist", offset_dist, &mut faults);

        let (Some(azimuth_value), Some(side), true) = (azimuth_value, side, faults.is_empty())
        else {
            return Err(Error::Composition(faults));
        };

        let (lon, lat) = self.position()?;
        let intermediate = solve_direct(
            lon,
            lat,
            Degrees(azimuth_value),
            dist.to_metres()?,
            ellipsoid,
        )?;
        let destination = solve_direct(
            intermediate.lon,
            intermediate.lat,
            Degrees(side.offset_azimuth(azimuth_value)),
            offset_dist.to_metres()?,
            ellipsoid,
        )?;
        let definition = format!(
            "Ref: {}; Dist: {dist}; Azm: {}; Offset side: {side}; Offset dist: {offset_dist}",
            self.ident,
            azimuth.trim()
        );
        tracing::debug!(%definition, lon = destination.lon.0, lat = destination.lat.0, "offset point");

        Ok(CalculatedPoint {
            lon: destination.lon.0,
            lat: destination.lat.0,
            definition,
        })
    }
}

fn check_distance(argument: &'static str, dist: &Distance, faults: &mut Vec<CompositionFault>) {
    if !dist.is_valid() {
        faults.push(CompositionFault::Distance {
            argument,
            message: dist.err_msg(),
        });
    }
}

fn check_azimuth(azimuth: &str, faults: &mut Vec<CompositionFault>) -> Option<f64> {
    match parse_number(azimuth) {
        Ok(value) if AngleClass::Bearing.contains(value) => Some(value),
        _ => {
            faults.push(CompositionFault::Azimuth(azimuth.to_string()));
            None
        }
    }
}
