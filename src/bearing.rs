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

//! The bearing module contains the `Bearing` value object: an angle
//! clockwise from North in the range [0, 360], written without a
//! hemisphere letter.

use crate::angle::{self, check_range, AngleClass, AngleLayout};
use crate::error::{render_message, Error};
use crate::Degrees;
use core::fmt;

/// The default label of a `Bearing`.
pub const DEFAULT_LABEL: &str = "Bearing";

/// A bearing value object.
#[derive(Clone, Debug, PartialEq)]
pub struct Bearing {
    source: String,
    label: String,
    value: Option<f64>,
    faults: Vec<Error>,
}

impl Bearing {
    /// Constructor, parses a DMS (`1234601.445`) or DM (`12346.445`) bearing.
    /// * `source` - the bearing text.
    /// * `label` - the label used in the error message, `Bearing` if empty.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::Bearing;
    ///
    /// let bearing = Bearing::new("0453000.000", "");
    /// assert_eq!(Some(45.5), bearing.value());
    ///
    /// let bearing = Bearing::new("", "From bearing");
    /// assert_eq!("From bearing is required.", bearing.err_msg());
    /// ```
    #[must_use]
    pub fn new(source: &str, label: &str) -> Self {
        let result = angle::parse(source, AngleClass::Bearing);
        Self::from_result(source.to_string(), label, result)
    }

    /// Constructor from a decimal degrees value.
    /// * `value` - the bearing in decimal degrees.
    /// * `label` - the label used in the error message, `Bearing` if empty.
    #[must_use]
    pub fn from_decimal(value: f64, label: &str) -> Self {
        let result = check_range(value, AngleClass::Bearing);
        Self::from_result(value.to_string(), label, result)
    }

    fn from_result(source: String, label: &str, result: Result<f64, Error>) -> Self {
        let label = if label.trim().is_empty() {
            DEFAULT_LABEL.to_string()
        } else {
            label.to_string()
        };
        let (value, faults) = match result {
            Ok(value) => (Some(value), Vec::new()),
            Err(error) => (None, vec![error]),
        };
        Self {
            source,
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
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The bearing in decimal degrees, if it is valid.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// The bearing as `Degrees`, if it is valid.
    #[must_use]
    pub fn degrees(&self) -> Option<Degrees> {
        self.value.map(Degrees)
    }

    #[must_use]
    pub fn faults(&self) -> &[Error] {
        &self.faults
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.faults.is_empty()
    }

    /// The error message for the user, empty if the bearing is valid.
    #[must_use]
    pub fn err_msg(&self) -> String {
        render_message(&self.label, &self.faults, |fault| match fault {
            Error::MissingValue => "is required.",
            _ => "value error or format not supported.",
        })
    }

    /// Format the bearing as DMS or DM text.
    /// * `layout` - `Dms` or `Dm`.
    /// * `precision` - the decimal places of the last numeric field.
    /// # Errors
    /// The fault of an invalid bearing, or `UnsupportedLayout`.
    pub fn format(&self, layout: AngleLayout, precision: usize) -> Result<String, Error> {
        match (self.value, self.faults.first()) {
            (Some(value), _) => angle::format(value, AngleClass::Bearing, layout, precision),
            (None, Some(fault)) => Err(fault.clone()),
            (None, None) => Err(Error::MissingValue),
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_valid() {
        for text in ["1234601.445", "12346.445", "0000000", "36000.0"] {
            let bearing = Bearing::new(text, "");
            assert!(bearing.is_valid(), "{text}");
            assert_eq!("", bearing.err_msg());
        }
        assert_eq!(Some(Degrees(180.0)), Bearing::new("18000.000", "").degrees());
    }

    #[test]
    fn test_bearing_err_msg() {
        assert_eq!("Bearing is required.", Bearing::new("", "").err_msg());
        assert_eq!(
            "From bearing is required.",
            Bearing::new(" ", "From bearing").err_msg()
        );
        for text in ["12333411.17", "0000000E", "1806000.000", "3610000.000", "1231.55"] {
            assert_eq!(
                "Bearing value error or format not supported.",
                Bearing::new(text, "").err_msg(),
                "{text}"
            );
        }
        assert_eq!(
            "To bearing value error or format not supported.",
            Bearing::new("36000.01", "To bearing").err_msg()
        );
    }

    #[test]
    fn test_bearing_from_decimal() {
        assert_eq!(Some(360.0), Bearing::from_decimal(360.0, "").value());
        let bearing = Bearing::from_decimal(-0.1, "");
        assert!(!bearing.is_valid());
        assert_eq!("Bearing value error or format not supported.", bearing.err_msg());
    }

    #[test]
    fn test_bearing_format() {
        let bearing = Bearing::new("1234601.445", "");
        assert_eq!(Ok("1234601.445".to_string()), bearing.format(AngleLayout::Dms, 3));
        assert_eq!(
            Err(Error::UnsupportedLayout {
                class: AngleClass::Bearing,
                layout: AngleLayout::Dmsh
            }),
            bearing.format(AngleLayout::Dmsh, 3)
        );
    }
}
