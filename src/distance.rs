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

//! The distance module contains the `Distance` value object and the
//! conversions between the length units of measure used in aviation.

use crate::angle::parse_number;
use crate::error::{render_message, Error};
use crate::Metres;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A length unit of measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    Metres,
    Kilometres,
    NauticalMiles,
    Feet,
    StatuteMiles,
}

impl LengthUnit {
    /// All of the length units.
    pub const ALL: [Self; 5] = [
        Self::Metres,
        Self::Kilometres,
        Self::NauticalMiles,
        Self::Feet,
        Self::StatuteMiles,
    ];

    /// The number of metres in one unit.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Metres => 1.0,
            Self::Kilometres => 1000.0,
            Self::NauticalMiles => 1852.0,
            Self::Feet => 0.3048,
            Self::StatuteMiles => 1609.344,
        }
    }

    /// The unit of measure token, e.g. `NM`.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Metres => "m",
            Self::Kilometres => "km",
            Self::NauticalMiles => "NM",
            Self::Feet => "ft",
            Self::StatuteMiles => "SM",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    /// Tokens are case sensitive: `m`, `km`, `NM`, `ft` and `SM`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.token() == token)
            .ok_or_else(|| Error::UnsupportedUnit(token.to_string()))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Convert a length between units of measure, via metres.
/// * `value` - the length in the `from` unit.
/// * `from` - the unit of `value`.
/// * `to` - the unit of the result.
///
/// # Examples
/// ```
/// use aero_coords::distance::{convert_length, LengthUnit};
///
/// let metres = convert_length(17.355, LengthUnit::NauticalMiles, LengthUnit::Metres);
/// assert_eq!(32141.46, metres);
/// ```
#[must_use]
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        value
    } else {
        value * from.factor() / to.factor()
    }
}

/// The source value of a `Distance`: text, as entered by a user, or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum DistanceSource {
    Text(String),
    Number(f64),
}

impl From<&str> for DistanceSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DistanceSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for DistanceSource {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for DistanceSource {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl fmt::Display for DistanceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// A distance value object: a positive length in a unit of measure.
#[derive(Clone, Debug, PartialEq)]
pub struct Distance {
    source: DistanceSource,
    unit_token: String,
    label: String,
    unit: Option<LengthUnit>,
    value: Option<f64>,
    faults: Vec<Error>,
}

impl Distance {
    /// Constructor, validates the source value and unit of measure.
    /// * `source` - the distance, as text or a number.
    /// * `unit_token` - the unit of measure token, e.g. `NM`.
    /// * `label` - the label used in the error message, e.g. `Radius`.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::Distance;
    ///
    /// let radius = Distance::new("", "TEST_UOM", "Radius");
    /// assert!(!radius.is_valid());
    /// assert_eq!("Radius is required.Radius UOM error.", radius.err_msg());
    /// ```
    #[must_use]
    pub fn new(source: impl Into<DistanceSource>, unit_token: &str, label: &str) -> Self {
        let source = source.into();
        let mut faults = Vec::new();

        let is_empty = matches!(&source, DistanceSource::Text(text) if text.trim().is_empty());
        if is_empty {
            faults.push(Error::MissingValue);
        }

        let unit = match unit_token.parse::<LengthUnit>() {
            Ok(unit) => Some(unit),
            Err(error) => {
                faults.push(error);
                None
            }
        };

        let mut value = None;
        if !is_empty {
            match Self::check_value(&source) {
                Ok(number) => value = Some(number),
                Err(error) => faults.push(error),
            }
        }

        Self {
            source,
            unit_token: unit_token.to_string(),
            label: label.to_string(),
            unit,
            value: if faults.is_empty() { value } else { None },
            faults,
        }
    }

    /// A `Distance` in metres, labelled `Distance`.
    #[must_use]
    pub fn metres(source: impl Into<DistanceSource>) -> Self {
        Self::new(source, LengthUnit::Metres.token(), "Distance")
    }

    fn check_value(source: &DistanceSource) -> Result<f64, Error> {
        let number = match source {
            DistanceSource::Text(text) => parse_number(text)?,
            DistanceSource::Number(value) => *value,
        };
        if !number.is_finite() {
            Err(Error::NotFinite("distance"))
        } else if number > 0.0 {
            Ok(number)
        } else {
            Err(Error::NonPositiveDistance(number))
        }
    }

    #[must_use]
    pub const fn source(&self) -> &DistanceSource {
        &self.source
    }

    #[must_use]
    pub fn unit_token(&self) -> &str {
        &self.unit_token
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The unit of measure, if the token is valid.
    #[must_use]
    pub const fn unit(&self) -> Option<LengthUnit> {
        self.unit
    }

    /// The magnitude in the source unit of measure, if the distance is valid.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// The faults found in the source value, in the order they were found.
    #[must_use]
    pub fn faults(&self) -> &[Error] {
        &self.faults
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.faults.is_empty()
    }

    /// The error message for the user, empty if the distance is valid.
    #[must_use]
    pub fn err_msg(&self) -> String {
        render_message(&self.label, &self.faults, |fault| match fault {
            Error::MissingValue => "is required.",
            Error::UnsupportedUnit(_) => "UOM error.",
            _ => "value error.",
        })
    }

    fn valid(&self) -> Result<(f64, LengthUnit), Error> {
        match (self.value, self.unit, self.faults.first()) {
            (Some(value), Some(unit), None) => Ok((value, unit)),
            (_, _, Some(fault)) => Err(fault.clone()),
            _ => Err(Error::MissingValue),
        }
    }

    /// The distance in metres.
    /// # Errors
    /// The first fault of an invalid distance.
    pub fn to_metres(&self) -> Result<Metres, Error> {
        let (value, unit) = self.valid()?;
        Ok(Metres(convert_length(value, unit, LengthUnit::Metres)))
    }

    /// The distance in another unit of measure.
    /// * `to` - the unit of the result.
    ///
    /// # Examples
    /// ```
    /// use aero_coords::{Distance, LengthUnit};
    ///
    /// let distance = Distance::new(1455, "m", "Distance");
    /// assert_eq!(Ok(4773.622047244095), distance.convert_to(LengthUnit::Feet));
    /// ```
    /// # Errors
    /// The first fault of an invalid distance.
    pub fn convert_to(&self, to: LengthUnit) -> Result<f64, Error> {
        let (value, unit) = self.valid()?;
        Ok(convert_length(value, unit, to))
    }

    /// The distance in another unit of measure, given by its token.
    /// * `token` - the unit of measure token of the result.
    /// # Errors
    /// `UnsupportedUnit` if the token is invalid, or the first fault of an
    /// invalid distance.
    pub fn convert_to_token(&self, token: &str) -> Result<f64, Error> {
        self.convert_to(token.parse()?)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.unit_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_length_unit() {
        for unit in LengthUnit::ALL {
            assert_eq!(Ok(unit), unit.token().parse::<LengthUnit>());
            assert_eq!(unit.token(), unit.to_string());
        }
        assert_eq!(
            Err(Error::UnsupportedUnit("nm".to_string())),
            "nm".parse::<LengthUnit>()
        );
        assert!("".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn test_convert_length() {
        assert_eq!(135.75, convert_length(135.75, LengthUnit::Metres, LengthUnit::Metres));
        assert_eq!(1045.5, convert_length(1.0455, LengthUnit::Kilometres, LengthUnit::Metres));
        assert_eq!(32141.46, convert_length(17.355, LengthUnit::NauticalMiles, LengthUnit::Metres));
        assert!(is_within_tolerance(
            238.71936,
            convert_length(783.2, LengthUnit::Feet, LengthUnit::Metres),
            1e-9
        ));
        assert_eq!(9334.1952, convert_length(5.8, LengthUnit::StatuteMiles, LengthUnit::Metres));

        assert_eq!(0.45522, convert_length(455.22, LengthUnit::Metres, LengthUnit::Kilometres));
        assert_eq!(1.0, convert_length(1852.0, LengthUnit::Metres, LengthUnit::NauticalMiles));
        assert!(is_within_tolerance(
            841.535_433_070_866,
            convert_length(256.5, LengthUnit::Metres, LengthUnit::Feet),
            1e-9
        ));
        assert!(is_within_tolerance(
            4.880_994_989_262_71,
            convert_length(7855.2, LengthUnit::Metres, LengthUnit::StatuteMiles),
            1e-12
        ));
        assert_eq!(1.852, convert_length(1.0, LengthUnit::NauticalMiles, LengthUnit::Kilometres));
    }

    #[test]
    fn test_distance_valid() {
        for distance in [
            Distance::new(457, "m", "Distance"),
            Distance::new("456,12", "m", "Distance"),
            Distance::new(100.66, "NM", "Distance"),
            Distance::new(" 36,6 ", "ft", "Distance"),
        ] {
            assert!(distance.is_valid());
            assert_eq!("", distance.err_msg());
        }
        assert_eq!(Some(456.12), Distance::new("456,12", "m", "Distance").value());
        assert_eq!(Some(LengthUnit::Feet), Distance::new(1, "ft", "Distance").unit());
    }

    #[test]
    fn test_distance_errors() {
        let distance = Distance::new(1, "", "Distance");
        assert_eq!("Distance UOM error.", distance.err_msg());
        assert_eq!(None, distance.value());

        let distance = Distance::new(100.66, "TEST_UOM", "Distance");
        assert_eq!("Distance UOM error.", distance.err_msg());

        let distance = Distance::new("", "m", "Distance");
        assert_eq!("Distance is required.", distance.err_msg());
        assert_eq!(&[Error::MissingValue], distance.faults());

        let distance = Distance::new("10,6,6", "SM", "Distance");
        assert_eq!("Distance value error.", distance.err_msg());

        let distance = Distance::new("", "../test", "Radius");
        assert_eq!("Radius is required.Radius UOM error.", distance.err_msg());

        let distance = Distance::new("A", "X", "Radius");
        assert_eq!("Radius UOM error.Radius value error.", distance.err_msg());

        for source in [DistanceSource::from(0), DistanceSource::from(-1.5), "0".into()] {
            let distance = Distance::new(source, "m", "Distance");
            assert!(matches!(
                distance.faults(),
                [Error::NonPositiveDistance(_)]
            ));
        }
        let distance = Distance::new(f64::NAN, "m", "Distance");
        assert_eq!(&[Error::NotFinite("distance")], distance.faults());
    }

    #[test]
    fn test_distance_conversion() {
        let distance = Distance::new(1455, "m", "Distance");
        assert_eq!(Ok(Metres(1455.0)), distance.to_metres());
        assert_eq!(
            Ok(0.785_637_149_028_077_8),
            distance.convert_to(LengthUnit::NauticalMiles)
        );
        assert_eq!(Ok(4773.622_047_244_095), distance.convert_to_token("ft"));
        assert_eq!(
            Ok(0.904_095_084_705_320_9),
            distance.convert_to(LengthUnit::StatuteMiles)
        );
        assert_eq!(Ok(1455.0), distance.convert_to(LengthUnit::Metres));
        assert_eq!(
            Err(Error::UnsupportedUnit("yd".to_string())),
            distance.convert_to_token("yd")
        );

        let distance = Distance::new("17,355", "NM", "Distance");
        assert_eq!(Ok(Metres(32141.46)), distance.to_metres());
        assert_eq!(Ok(17.355), distance.convert_to(LengthUnit::NauticalMiles));

        let distance = Distance::new("", "m", "Distance");
        assert_eq!(Err(Error::MissingValue), distance.to_metres());
    }

    #[test]
    fn test_distance_display() {
        assert_eq!("100 m", Distance::metres(100).to_string());
        assert_eq!("1800.5 NM", Distance::new(1800.5, "NM", "Distance").to_string());
        assert_eq!("120,5 ft", Distance::new("120,5", "ft", "Distance").to_string());
    }
}
