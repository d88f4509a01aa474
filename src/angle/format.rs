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

//! Rendering decimal degrees back to angle text.

use super::{check_range, dm_parts, dms_parts, AngleClass, AngleLayout, Hemisphere};
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The separator between the degrees, minutes and seconds fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Separator {
    /// Compacted, e.g. `1453000E`.
    #[default]
    None,
    /// e.g. `145 30 00E`.
    Space,
    /// e.g. `145-30-00E`.
    Hyphen,
}

impl Separator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Space => " ",
            Self::Hyphen => "-",
        }
    }
}

/// Format a fractional field, e.g. seconds, to two integer digits and
/// `precision` decimal places.
fn fraction_field(value: f64, precision: usize) -> String {
    if precision > 0 {
        format!("{value:0width$.precision$}", width = precision + 3)
    } else {
        format!("{value:02.0}")
    }
}

/// Format decimal degrees as compacted angle text.
/// * `value` - the angle in decimal degrees.
/// * `class` - the class of the angle.
/// * `layout` - the layout of the text, it must belong to the class.
/// * `precision` - the decimal places of the seconds, or of the minutes for
///   the DM layouts.
///
/// # Examples
/// ```
/// use aero_coords::angle::{format, AngleClass, AngleLayout};
///
/// let text = format(-45.5, AngleClass::Latitude, AngleLayout::Dmsh, 3).unwrap();
/// assert_eq!("453000.000S", text);
/// ```
/// # Errors
/// `UnsupportedLayout`, `NotFinite` or `DomainRange`.
pub fn format(
    value: f64,
    class: AngleClass,
    layout: AngleLayout,
    precision: usize,
) -> Result<String, Error> {
    format_separated(value, class, layout, Separator::None, precision)
}

/// Format decimal degrees as angle text with a separator between the
/// numeric fields.
/// * `value` - the angle in decimal degrees.
/// * `class` - the class of the angle.
/// * `layout` - the layout of the text, it must belong to the class.
/// * `separator` - the separator between the numeric fields.
/// * `precision` - the decimal places of the seconds, or of the minutes for
///   the DM layouts.
///
/// # Examples
/// ```
/// use aero_coords::angle::{format_separated, AngleClass, AngleLayout, Separator};
///
/// let text = format_separated(
///     -145.958_959_966_111_1,
///     AngleClass::Longitude,
///     AngleLayout::Hdms,
///     Separator::Hyphen,
///     3,
/// )
/// .unwrap();
/// assert_eq!("W145-57-32.256", text);
/// ```
/// # Errors
/// `UnsupportedLayout`, `NotFinite` or `DomainRange`.
pub fn format_separated(
    value: f64,
    class: AngleClass,
    layout: AngleLayout,
    separator: Separator,
    precision: usize,
) -> Result<String, Error> {
    if !class.supports(layout) {
        return Err(Error::UnsupportedLayout { class, layout });
    }
    let value = check_range(value, class)?;

    let width = class.degrees_width();
    let sep = separator.as_str();
    let numeric = if layout.has_seconds() {
        let (degrees, minutes, seconds) = dms_parts(value, precision);
        format!(
            "{degrees:0width$}{sep}{minutes:02}{sep}{}",
            fraction_field(seconds, precision)
        )
    } else {
        let (degrees, minutes) = dm_parts(value, precision);
        format!("{degrees:0width$}{sep}{}", fraction_field(minutes, precision))
    };

    let hemisphere = Hemisphere::of(value, class).map_or(String::new(), |h| h.to_string());
    Ok(if layout.is_hemisphere_first() {
        hemisphere + &numeric
    } else {
        numeric + &hemisphere
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LON: f64 = 145.958_959_966_111_1;
    const LAT: f64 = 45.958_959_966_111_1;

    #[test]
    fn test_format_compacted() {
        assert_eq!(
            "1234601.445E",
            format(
                123.767_068_055_555_55,
                AngleClass::Longitude,
                AngleLayout::Dmsh,
                3
            )
            .unwrap()
        );
        assert_eq!(
            "E0133738.21",
            format(
                13.627_280_555_555_556,
                AngleClass::Longitude,
                AngleLayout::Hdms,
                2
            )
            .unwrap()
        );
        assert_eq!(
            "1030.000N",
            format(10.5, AngleClass::Latitude, AngleLayout::Dmh, 3).unwrap()
        );
        assert_eq!(
            "W04750.222",
            format(
                -47.837_033_333_333_33,
                AngleClass::Longitude,
                AngleLayout::Hdm,
                3
            )
            .unwrap()
        );
        assert_eq!(
            "0000000",
            format(0.0, AngleClass::Bearing, AngleLayout::Dms, 0).unwrap()
        );
        assert_eq!(
            "36000.0",
            format(360.0, AngleClass::Bearing, AngleLayout::Dm, 1).unwrap()
        );
    }

    #[test]
    fn test_format_separated() {
        let cases = [
            (LON, AngleClass::Longitude, AngleLayout::Hdms, Separator::Space, 3, "E145 57 32.256"),
            (-LON, AngleClass::Longitude, AngleLayout::Hdms, Separator::Hyphen, 3, "W145-57-32.256"),
            (LON, AngleClass::Longitude, AngleLayout::Dmsh, Separator::Space, 2, "145 57 32.26E"),
            (LON, AngleClass::Longitude, AngleLayout::Dmsh, Separator::Hyphen, 1, "145-57-32.3E"),
            (LAT, AngleClass::Latitude, AngleLayout::Hdms, Separator::Space, 3, "N45 57 32.256"),
            (-LAT, AngleClass::Latitude, AngleLayout::Hdms, Separator::Hyphen, 3, "S45-57-32.256"),
            (LAT, AngleClass::Latitude, AngleLayout::Dmsh, Separator::Space, 2, "45 57 32.26N"),
            (-LAT, AngleClass::Latitude, AngleLayout::Dmsh, Separator::Hyphen, 1, "45-57-32.3S"),
            (-LAT, AngleClass::Latitude, AngleLayout::Hdm, Separator::Space, 2, "S45 57.54"),
        ];
        for (value, class, layout, separator, precision, expected) in cases {
            assert_eq!(
                expected,
                format_separated(value, class, layout, separator, precision).unwrap()
            );
        }
    }

    #[test]
    fn test_format_carry() {
        assert_eq!(
            "1800000.00W",
            format(
                -179.999_999_99,
                AngleClass::Longitude,
                AngleLayout::Dmsh,
                2
            )
            .unwrap()
        );
        assert_eq!(
            "N1100.00",
            format(10.999_999_99, AngleClass::Latitude, AngleLayout::Hdm, 2).unwrap()
        );
    }

    #[test]
    fn test_format_errors() {
        assert_eq!(
            Err(Error::UnsupportedLayout {
                class: AngleClass::Latitude,
                layout: AngleLayout::Dms
            }),
            format(10.0, AngleClass::Latitude, AngleLayout::Dms, 3)
        );
        assert_eq!(
            Err(Error::UnsupportedLayout {
                class: AngleClass::Bearing,
                layout: AngleLayout::Hdms
            }),
            format(10.0, AngleClass::Bearing, AngleLayout::Hdms, 3)
        );
        assert!(matches!(
            format(-1.0, AngleClass::Bearing, AngleLayout::Dms, 3),
            Err(Error::DomainRange { .. })
        ));
        assert!(matches!(
            format(f64::NAN, AngleClass::Longitude, AngleLayout::Dmsh, 3),
            Err(Error::NotFinite(_))
        ));
    }
}
