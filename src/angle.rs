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

//! The angle module contains the types and functions for converting between
//! textual angles, in degrees, minutes and seconds, and decimal degrees.
//!
//! An angle is one of three classes: a longitude, a latitude or a bearing.
//! The class determines the valid range of the angle, the width of its
//! degrees field and its hemisphere letters, see `AngleClass`.
//!
//! Longitudes and latitudes are written in one of four compacted layouts,
//! i.e. without separators between the fields:
//!
//! | Layout | Longitude      | Latitude      |
//! |--------|----------------|---------------|
//! | DMSH   | `1234601.445E` | `453000.000S` |
//! | HDMS   | `E1234601.445` | `S453000.000` |
//! | DMH    | `12346.445E`   | `1030.000N`   |
//! | HDM    | `E04750.222`   | `N1030.000`   |
//!
//! Bearings have no hemisphere letter, they are written as DMS
//! (`1234601.445`) or DM (`12346.445`).

pub mod format;
pub mod grammar;

use crate::error::{Error, Field};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use format::{format, format_separated, Separator};

/// The class of an angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleClass {
    /// East/West, in the range [-180, 180].
    Longitude,
    /// North/South, in the range [-90, 90].
    Latitude,
    /// Clockwise from North, in the range [0, 360].
    Bearing,
}

impl AngleClass {
    /// The number of digits in the degrees field of the class.
    #[must_use]
    pub const fn degrees_width(self) -> usize {
        match self {
            Self::Longitude | Self::Bearing => 3,
            Self::Latitude => 2,
        }
    }

    /// The minimum and maximum values of the class in decimal degrees.
    #[must_use]
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Longitude => (-180.0, 180.0),
            Self::Latitude => (-90.0, 90.0),
            Self::Bearing => (0.0, 360.0),
        }
    }

    /// The positive and negative hemisphere letters of the class, none
    /// for a bearing.
    #[must_use]
    pub const fn hemispheres(self) -> Option<(Hemisphere, Hemisphere)> {
        match self {
            Self::Longitude => Some((Hemisphere::East, Hemisphere::West)),
            Self::Latitude => Some((Hemisphere::North, Hemisphere::South)),
            Self::Bearing => None,
        }
    }

    /// The layouts of the class, in the order that the parser tries them.
    #[must_use]
    pub const fn layouts(self) -> &'static [AngleLayout] {
        match self {
            Self::Longitude | Self::Latitude => &[
                AngleLayout::Dmsh,
                AngleLayout::Hdms,
                AngleLayout::Dmh,
                AngleLayout::Hdm,
            ],
            Self::Bearing => &[AngleLayout::Dms, AngleLayout::Dm],
        }
    }

    /// Whether the layout can represent an angle of this class.
    #[must_use]
    pub fn supports(self, layout: AngleLayout) -> bool {
        self.layouts().contains(&layout)
    }

    /// Whether a decimal degrees value is within the range of the class.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }
}

impl fmt::Display for AngleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Longitude => write!(f, "Longitude"),
            Self::Latitude => write!(f, "Latitude"),
            Self::Bearing => write!(f, "Bearing"),
        }
    }
}

/// The textual layout of an angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleLayout {
    /// Degrees, minutes, seconds then hemisphere.
    Dmsh,
    /// Hemisphere then degrees, minutes, seconds.
    Hdms,
    /// Degrees, decimal minutes then hemisphere.
    Dmh,
    /// Hemisphere then degrees, decimal minutes.
    Hdm,
    /// Bearing degrees, minutes, seconds.
    Dms,
    /// Bearing degrees, decimal minutes.
    Dm,
}

impl AngleLayout {
    /// Whether the layout has a separate seconds field.
    #[must_use]
    pub const fn has_seconds(self) -> bool {
        matches!(self, Self::Dmsh | Self::Hdms | Self::Dms)
    }

    /// Whether the hemisphere letter leads the layout.
    #[must_use]
    pub const fn is_hemisphere_first(self) -> bool {
        matches!(self, Self::Hdms | Self::Hdm)
    }
}

/// A hemisphere letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// The hemisphere of a letter, if any.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The letter of the hemisphere.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// The sign that the hemisphere applies to an angle.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }

    /// The opposite hemisphere.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// The hemisphere of a signed decimal degrees value, none for a bearing.
    /// Zero is in the North or East hemisphere.
    #[must_use]
    pub fn of(value: f64, class: AngleClass) -> Option<Self> {
        class
            .hemispheres()
            .map(|(positive, negative)| if value >= 0.0 { positive } else { negative })
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Normalise angle or number text before it is matched: trim, convert to
/// upper case, replace a comma decimal separator with a period and
/// collapse runs of whitespace to a single space.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
        .replace(',', ".")
}

/// Parse normalised decimal number text, e.g. `1455,5` or ` 12.25 `.
/// # Errors
/// `MissingValue` if the text is empty, `InvalidNumber` if it is not a
/// decimal number.
pub fn parse_number(text: &str) -> Result<f64, Error> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::MissingValue);
    }
    normalized
        .parse::<f64>()
        .map_err(|_| Error::InvalidNumber(text.to_string()))
}

/// Parse an angle in one of the compacted layouts of its class into
/// decimal degrees.
///
/// Validation is in three stages: the text must match a layout of the
/// class (`StructuralParse`), its minutes and seconds must be less than 60
/// (`FieldRange`) and the result must be in the range of the class
/// (`DomainRange`).
/// * `text` - the angle text.
/// * `class` - the class of the angle.
///
/// # Examples
/// ```
/// use aero_coords::angle::{parse, AngleClass};
///
/// assert_eq!(10.5, parse("N1030.000", AngleClass::Latitude).unwrap());
/// assert_eq!(-45.5, parse("453000.000S", AngleClass::Latitude).unwrap());
/// assert!(parse("1806000.000", AngleClass::Bearing).is_err());
/// ```
/// # Errors
/// `MissingValue`, `StructuralParse`, `FieldRange` or `DomainRange`.
pub fn parse(text: &str, class: AngleClass) -> Result<f64, Error> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(Error::MissingValue);
    }

    let fields = grammar::recognize(&normalized, class)?;
    let value = fields.to_decimal_degrees(class)?;
    check_range(value, class)
}

/// Check that a decimal degrees value is finite and within the range of its class.
/// # Errors
/// `NotFinite` or `DomainRange`.
pub fn check_range(value: f64, class: AngleClass) -> Result<f64, Error> {
    if !value.is_finite() {
        Err(Error::NotFinite("angle"))
    } else if class.contains(value) {
        Ok(value)
    } else {
        Err(Error::DomainRange { class, value })
    }
}

/// Check that a minutes or seconds field is within [0, 60).
/// # Errors
/// `FieldRange`.
pub fn check_field(field: Field, value: f64) -> Result<f64, Error> {
    if (0.0..60.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::FieldRange { field, value })
    }
}

/// Round a value to a number of decimal places.
fn round_to(value: f64, precision: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    if scale.is_finite() {
        (value * scale).round() / scale
    } else {
        value
    }
}

/// Decompose the magnitude of a decimal degrees angle into whole degrees,
/// whole minutes and seconds rounded to `precision` decimal places.
///
/// The rounding carry is corrected once: seconds that round to 60 become
/// 0 and add a minute, then minutes of 60 become 0 and add a degree.
/// * `value` - the angle in decimal degrees, its sign is ignored.
/// * `precision` - the number of decimal places of the seconds.
///
/// # Examples
/// ```
/// use aero_coords::angle::dms_parts;
///
/// assert_eq!((45, 30, 0.0), dms_parts(-45.5, 3));
/// assert_eq!((145, 57, 32.255878), dms_parts(145.9589599661111, 6));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dms_parts(value: f64, precision: usize) -> (u32, u32, f64) {
    let total_seconds = libm::fabs(value) * 3600.0;
    let seconds = total_seconds % 60.0;
    let total_minutes = ((total_seconds - seconds) / 60.0).round();
    let minutes = total_minutes % 60.0;
    let mut degrees = ((total_minutes - minutes) / 60.0).round() as u32;
    let mut minutes = minutes as u32;
    let mut seconds = round_to(seconds, precision);

    if seconds >= 60.0 {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= 60 {
        minutes = 0;
        degrees += 1;
    }

    (degrees, minutes, seconds)
}

/// Decompose the magnitude of a decimal degrees angle into whole degrees
/// and minutes rounded to `precision` decimal places, with the same carry
/// correction as `dms_parts`.
/// * `value` - the angle in decimal degrees, its sign is ignored.
/// * `precision` - the number of decimal places of the minutes.
///
/// # Examples
/// ```
/// use aero_coords::angle::dm_parts;
///
/// assert_eq!((10, 30.0), dm_parts(10.5, 3));
/// assert_eq!((11, 0.0), dm_parts(10.99999999, 3));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dm_parts(value: f64, precision: usize) -> (u32, f64) {
    let total_minutes = libm::fabs(value) * 60.0;
    let minutes = total_minutes % 60.0;
    let mut degrees = ((total_minutes - minutes) / 60.0).round() as u32;
    let mut minutes = round_to(minutes, precision);

    if minutes >= 60.0 {
        minutes = 0.0;
        degrees += 1;
    }

    (degrees, minutes)
}
