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

//! The grammar of the compacted angle layouts.
//!
//! Each (class, layout) pair has a fixed width, anchored regular
//! expression. Layouts of the same class differ in digit count or
//! hemisphere position, so at most one layout matches a given text.

use super::{check_field, AngleClass, AngleLayout, Hemisphere};
use crate::error::{Error, Field};
use once_cell::sync::Lazy;
use regex::Regex;

/// The fields of an angle text that matched a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleFields {
    pub layout: AngleLayout,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub hemisphere: Option<Hemisphere>,
}

impl AngleFields {
    /// Check the minutes and seconds fields and combine the fields into
    /// signed decimal degrees.
    /// # Errors
    /// `FieldRange` if the minutes or seconds are not within [0, 60).
    pub fn to_decimal_degrees(&self, class: AngleClass) -> Result<f64, Error> {
        let minutes = check_field(Field::Minutes, self.minutes)?;
        let seconds = check_field(Field::Seconds, self.seconds)?;
        let magnitude = self.degrees + minutes / 60.0 + seconds / 3600.0;
        let sign = self.hemisphere.map_or(1.0, Hemisphere::sign);
        tracing::trace!(?class, layout = ?self.layout, magnitude, sign, "angle fields");
        Ok(sign * magnitude)
    }
}

/// The regular expression of a layout of a class.
#[must_use]
pub fn pattern(class: AngleClass, layout: AngleLayout) -> String {
    let width = class.degrees_width();
    let hemisphere = match class {
        AngleClass::Longitude => "[EW]",
        AngleClass::Latitude => "[NS]",
        AngleClass::Bearing => "",
    };
    let degrees = format!("(?P<deg>[0-9]{{{width}}})");
    match layout {
        AngleLayout::Dmsh => format!(
            r"^{degrees}(?P<min>[0-9]{{2}})(?P<sec>[0-9]{{2}}(?:\.[0-9]+)?)(?P<hem>{hemisphere})$"
        ),
        AngleLayout::Hdms => format!(
            r"^(?P<hem>{hemisphere}){degrees}(?P<min>[0-9]{{2}})(?P<sec>[0-9]{{2}}(?:\.[0-9]+)?)$"
        ),
        AngleLayout::Dmh => {
            format!(r"^{degrees}(?P<min>[0-9]{{2}}(?:\.[0-9]+)?)(?P<hem>{hemisphere})$")
        }
        AngleLayout::Hdm => {
            format!(r"^(?P<hem>{hemisphere}){degrees}(?P<min>[0-9]{{2}}(?:\.[0-9]+)?)$")
        }
        AngleLayout::Dms => {
            format!(r"^{degrees}(?P<min>[0-9]{{2}})(?P<sec>[0-9]{{2}}(?:\.[0-9]+)?)$")
        }
        AngleLayout::Dm => format!(r"^{degrees}(?P<min>[0-9]{{2}}(?:\.[0-9]+)?)$"),
    }
}

type Rules = Vec<(AngleLayout, Regex)>;

fn compile(class: AngleClass) -> Rules {
    class
        .layouts()
        .iter()
        .map(|&layout| {
            let regex = Regex::new(&pattern(class, layout)).expect("valid angle grammar");
            (layout, regex)
        })
        .collect()
}

static LONGITUDE_RULES: Lazy<Rules> = Lazy::new(|| compile(AngleClass::Longitude));
static LATITUDE_RULES: Lazy<Rules> = Lazy::new(|| compile(AngleClass::Latitude));
static BEARING_RULES: Lazy<Rules> = Lazy::new(|| compile(AngleClass::Bearing));

fn rules(class: AngleClass) -> &'static Rules {
    match class {
        AngleClass::Longitude => &LONGITUDE_RULES,
        AngleClass::Latitude => &LATITUDE_RULES,
        AngleClass::Bearing => &BEARING_RULES,
    }
}

fn number(text: Option<regex::Match<'_>>) -> f64 {
    text.and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or_default()
}

/// Match normalised angle text against the layouts of its class.
/// * `text` - normalised angle text, see `normalize`.
/// * `class` - the class of the angle.
///
/// returns the fields of the first, and only, matching layout.
/// # Errors
/// `StructuralParse` if the text does not match any layout of the class.
pub fn recognize(text: &str, class: AngleClass) -> Result<AngleFields, Error> {
    rules(class)
        .iter()
        .find_map(|(layout, regex)| {
            regex.captures(text).map(|captures| AngleFields {
                layout: *layout,
                degrees: number(captures.name("deg")),
                minutes: number(captures.name("min")),
                seconds: number(captures.name("sec")),
                hemisphere: captures
                    .name("hem")
                    .and_then(|m| m.as_str().chars().next())
                    .and_then(Hemisphere::from_letter),
            })
        })
        .ok_or_else(|| Error::StructuralParse {
            class,
            text: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern() {
        assert_eq!(
            r"^(?P<deg>[0-9]{3})(?P<min>[0-9]{2})(?P<sec>[0-9]{2}(?:\.[0-9]+)?)(?P<hem>[EW])$",
            pattern(AngleClass::Longitude, AngleLayout::Dmsh)
        );
        assert_eq!(
            r"^(?P<hem>[NS])(?P<deg>[0-9]{2})(?P<min>[0-9]{2}(?:\.[0-9]+)?)$",
            pattern(AngleClass::Latitude, AngleLayout::Hdm)
        );
        assert_eq!(
            r"^(?P<deg>[0-9]{3})(?P<min>[0-9]{2}(?:\.[0-9]+)?)$",
            pattern(AngleClass::Bearing, AngleLayout::Dm)
        );
    }

    #[test]
    fn test_recognize() {
        let fields = recognize("1234601.445E", AngleClass::Longitude).unwrap();
        assert_eq!(AngleLayout::Dmsh, fields.layout);
        assert_eq!(123.0, fields.degrees);
        assert_eq!(46.0, fields.minutes);
        assert_eq!(1.445, fields.seconds);
        assert_eq!(Some(Hemisphere::East), fields.hemisphere);

        let fields = recognize("S4530.5", AngleClass::Latitude).unwrap();
        assert_eq!(AngleLayout::Hdm, fields.layout);
        assert_eq!(45.0, fields.degrees);
        assert_eq!(30.5, fields.minutes);
        assert_eq!(0.0, fields.seconds);
        assert_eq!(Some(Hemisphere::South), fields.hemisphere);

        let fields = recognize("12346.445", AngleClass::Bearing).unwrap();
        assert_eq!(AngleLayout::Dm, fields.layout);
        assert_eq!(None, fields.hemisphere);

        let fields = recognize("E17760", AngleClass::Longitude).unwrap();
        assert_eq!(AngleLayout::Hdm, fields.layout);
        assert!(fields.to_decimal_degrees(AngleClass::Longitude).is_err());
    }

    #[test]
    fn test_recognize_invalid() {
        // Unicode digits are not degrees
        assert!(recognize("١٢٣4601E", AngleClass::Longitude).is_err());
        assert!(recognize("1234601.E", AngleClass::Longitude).is_err());
        assert!(recognize("E123", AngleClass::Longitude).is_err());
        assert!(recognize("N1030S", AngleClass::Latitude).is_err());
        assert!(recognize("", AngleClass::Bearing).is_err());
    }
}
