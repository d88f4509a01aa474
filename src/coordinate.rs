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

//! The coordinate module contains the `Coordinate` value object: a longitude
//! or latitude parsed from one of the compacted angle layouts.

use crate::angle::{self, check_range, AngleClass, AngleLayout, Separator};
use crate::error::{render_message, Error};
use core::fmt;

/// A longitude or latitude value object.
///
/// A `Coordinate` is constructed once from its source text and never
/// changes. Construction never fails: an invalid source is recorded in
/// `faults` and described by `err_msg`.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinate {
    source: String,
    class: AngleClass,
    label: String,
    value: Option<f64>,
    faults: Vec<Error>,
}

impl Coordinate {
    /// Constructor, parses the source text.
    /// * `source` - the angle text, e.g. `N1030.000`.
    /// * `class` - the class of the angle.
    /// * `label` - the label used in the error message, the class name if
    ///   empty.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::{AngleClass, Coordinate};
    ///
    /// let lat = Coordinate::new("453000.000S", AngleClass::Latitude, "");
    /// assert_eq!(Some(-45.5), lat.value());
    ///
    /// let lat = Coordinate::new("N9100", AngleClass::Latitude, "Centre latitude");
    /// assert_eq!("Centre latitude error or not supported format.", lat.err_msg());
    /// ```
    #[must_use]
    pub fn new(source: &str, class: AngleClass, label: &str) -> Self {
        let result = angle::parse(source, class);
        Self::from_result(source.to_string(), class, label, result)
    }

    /// A longitude with the default label.
    #[must_use]
    pub fn longitude(source: &str) -> Self {
        Self::new(source, AngleClass::Longitude, "")
    }

    /// A latitude with the default label.
    #[must_use]
    pub fn latitude(source: &str) -> Self {
        Self::new(source, AngleClass::Latitude, "")
    }

    /// Constructor from a decimal degrees value.
    /// * `value` - the angle in decimal degrees.
    /// * `class` - the class of the angle.
    /// * `label` - the label used in the error message, the class name if
    ///   empty.
    #[must_use]
    pub fn from_decimal(value: f64, class: AngleClass, label: &str) -> Self {
        let result = check_range(value, class);
        Self::from_result(value.to_string(), class, label, result)
    }

    fn from_result(
        source: String,
        class: AngleClass,
        label: &str,
        result: Result<f64, Error>,
    ) -> Self {
        let label = if label.trim().is_empty() {
            class.to_string()
        } else {
            label.to_string()
        };
        let (value, faults) = match result {
            Ok(value) => (Some(value), Vec::new()),
            Err(error) => {
                tracing::trace!(%label, %error, "invalid coordinate");
                (None, vec![error])
            }
        };
        Self {
            source,
            class,
            label,
            value,
            faults,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn class(&self) -> AngleClass {
        self.class
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The angle in decimal degrees, if the coordinate is valid.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    #[must_use]
    pub fn faults(&self) -> &[Error] {
        &self.faults
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.faults.is_empty()
    }

    /// The error message for the user, empty if the coordinate is valid.
    #[must_use]
    pub fn err_msg(&self) -> String {
        render_message(&self.label, &self.faults, |fault| match fault {
            Error::MissingValue => "is required.",
            _ => "error or not supported format.",
        })
    }

    /// Format the coordinate in another layout.
    /// * `layout` - the layout of the text.
    /// * `separator` - the separator between the numeric fields.
    /// * `precision` - the decimal places of the last numeric field.
    /// # Errors
    /// The fault of an invalid coordinate, or `UnsupportedLayout`.
    pub fn format(
        &self,
        layout: AngleLayout,
        separator: Separator,
        precision: usize,
    ) -> Result<String, Error> {
        match (self.value, self.faults.first()) {
            (Some(value), _) => {
                angle::format_separated(value, self.class, layout, separator, precision)
            }
            (None, Some(fault)) => Err(fault.clone()),
            (None, None) => Err(Error::MissingValue),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_coordinate_valid() {
        let lon = Coordinate::longitude("1234601.445E");
        assert!(lon.is_valid());
        assert_eq!("", lon.err_msg());
        assert_eq!("Longitude", lon.label());
        assert_eq!(AngleClass::Longitude, lon.class());
        assert!(is_within_tolerance(
            123.767_068_055_555_55,
            lon.value().unwrap(),
            1e-12
        ));
        assert_eq!("1234601.445E", lon.to_string());

        let lat = Coordinate::latitude(" n1030,000 ");
        assert_eq!(Some(10.5), lat.value());
        assert_eq!(" n1030,000 ", lat.source());
    }

    #[test]
    fn test_coordinate_err_msg() {
        assert_eq!("Longitude is required.", Coordinate::longitude("").err_msg());
        assert_eq!("Latitude is required.", Coordinate::latitude("  ").err_msg());
        assert_eq!(
            "Longitude error or not supported format.",
            Coordinate::longitude("E17760").err_msg()
        );
        assert_eq!(
            "Latitude error or not supported format.",
            Coordinate::latitude("N 7701").err_msg()
        );

        let lat = Coordinate::new("", AngleClass::Latitude, "Circle centre latitude");
        assert_eq!("Circle centre latitude is required.", lat.err_msg());
        assert_eq!(&[Error::MissingValue], lat.faults());
        assert_eq!(None, lat.value());
    }

    #[test]
    fn test_coordinate_from_decimal() {
        let lon = Coordinate::from_decimal(-20.5, AngleClass::Longitude, "");
        assert_eq!(Some(-20.5), lon.value());
        assert_eq!("-20.5", lon.source());

        let lat = Coordinate::from_decimal(90.5, AngleClass::Latitude, "");
        assert!(!lat.is_valid());
        assert_eq!("Latitude error or not supported format.", lat.err_msg());

        let lat = Coordinate::from_decimal(f64::NAN, AngleClass::Latitude, "");
        assert_eq!(&[Error::NotFinite("angle")], lat.faults());
    }

    #[test]
    fn test_coordinate_format() {
        let lon = Coordinate::longitude("1453000E");
        assert_eq!(
            Ok("E145 30 00.00".to_string()),
            lon.format(AngleLayout::Hdms, Separator::Space, 2)
        );
        assert_eq!(
            Ok("14530.0E".to_string()),
            lon.format(AngleLayout::Dmh, Separator::None, 1)
        );

        let lon = Coordinate::longitude("");
        assert_eq!(
            Err(Error::MissingValue),
            lon.format(AngleLayout::Dmsh, Separator::None, 2)
        );
    }
}
