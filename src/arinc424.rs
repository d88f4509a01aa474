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

//! The arinc424 module encodes and decodes the ARINC 424 shorthand for
//! full degree coordinates, e.g. `50N60` for `160W 50N`.
//!
//! The shorthand is five characters: two latitude digits, the last two
//! longitude digits and a designator letter for the quadrant. The
//! designator follows the longitude digits when the longitude is less than
//! 100 degrees and precedes them otherwise.
//!
//! | Quadrant | Designator |
//! |----------|------------|
//! | NW       | `N`        |
//! | NE       | `E`        |
//! | SW       | `W`        |
//! | SE       | `S`        |

use crate::angle::{normalize, Hemisphere};
use crate::error::Error;
use crate::Degrees;
use once_cell::sync::Lazy;
use regex::Regex;

static LONGITUDE_FULL_DEGREES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<deg>180|1[0-7][0-9]|0[0-9]{2})(?P<hem>[EW])$").expect("valid regex")
});

static LATITUDE_FULL_DEGREES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<deg>90|[0-8][0-9])(?P<hem>[NS])$").expect("valid regex")
});

/// Longitudes less than 100 degrees, e.g. `5060N`.
static SHORTHAND_LESS_100: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lat>90|[0-8][0-9])(?P<lon>[0-9]{2})(?P<designator>[NSEW])$")
        .expect("valid regex")
});

/// Longitudes of 100 degrees or more, e.g. `50N60`.
static SHORTHAND_100_OR_MORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<lat>90|[0-8][0-9])(?P<designator>[NSEW])(?P<lon>80|[0-7][0-9])$")
        .expect("valid regex")
});

/// Whether the text is a full degrees longitude, `000E` to `180W`.
/// # Examples
/// ```
/// use aero_coords::arinc424::is_longitude_full_degrees;
///
/// assert!(is_longitude_full_degrees("100W"));
/// assert!(!is_longitude_full_degrees("181W"));
/// ```
#[must_use]
pub fn is_longitude_full_degrees(lon: &str) -> bool {
    LONGITUDE_FULL_DEGREES.is_match(lon)
}

/// Whether the text is a full degrees latitude, `00N` to `90S`.
#[must_use]
pub fn is_latitude_full_degrees(lat: &str) -> bool {
    LATITUDE_FULL_DEGREES.is_match(lat)
}

/// The quadrant designator of a latitude and longitude hemisphere pair.
const fn designator(lat: Hemisphere, lon: Hemisphere) -> char {
    match (lat, lon) {
        (Hemisphere::North, Hemisphere::West) => 'N',
        (Hemisphere::North, _) => 'E',
        (_, Hemisphere::West) => 'W',
        _ => 'S',
    }
}

/// The latitude and longitude hemispheres of a quadrant designator.
const fn quadrant(designator: char) -> Option<(Hemisphere, Hemisphere)> {
    match designator {
        'N' => Some((Hemisphere::North, Hemisphere::West)),
        'E' => Some((Hemisphere::North, Hemisphere::East)),
        'W' => Some((Hemisphere::South, Hemisphere::West)),
        'S' => Some((Hemisphere::South, Hemisphere::East)),
        _ => None,
    }
}

/// The degrees and hemisphere of a full degrees match.
fn full_degrees(regex: &Regex, text: &str) -> Option<(u32, Hemisphere)> {
    let captures = regex.captures(text)?;
    let degrees = captures["deg"].parse().ok()?;
    let hemisphere = captures["hem"].chars().next().and_then(Hemisphere::from_letter)?;
    Some((degrees, hemisphere))
}

/// Encode a full degrees coordinate as ARINC 424 shorthand.
/// * `lon` - the longitude, e.g. `160W`.
/// * `lat` - the latitude, e.g. `50N`.
///
/// # Examples
/// ```
/// use aero_coords::arinc424::encode;
///
/// assert_eq!("50N60", encode("160W", "50N").unwrap());
/// assert_eq!("5060S", encode("060E", "50S").unwrap());
/// ```
/// # Errors
/// `InvalidArinc424` if either value is not in full degrees.
pub fn encode(lon: &str, lat: &str) -> Result<String, Error> {
    let lon_text = normalize(lon);
    let lat_text = normalize(lat);
    let invalid = || Error::InvalidArinc424(format!("{lon} {lat}"));
    let (lon_degrees, lon_hemisphere) =
        full_degrees(&LONGITUDE_FULL_DEGREES, &lon_text).ok_or_else(invalid)?;
    let (lat_degrees, lat_hemisphere) =
        full_degrees(&LATITUDE_FULL_DEGREES, &lat_text).ok_or_else(invalid)?;

    let designator = designator(lat_hemisphere, lon_hemisphere);
    let lon_digits = lon_degrees % 100;
    Ok(if lon_degrees < 100 {
        format!("{lat_degrees:02}{lon_digits:02}{designator}")
    } else {
        format!("{lat_degrees:02}{designator}{lon_digits:02}")
    })
}

/// Decode ARINC 424 shorthand into a full degrees coordinate.
/// * `code` - the shorthand, e.g. `50N60`.
///
/// returns the longitude and latitude, e.g. (`160W`, `50N`).
/// # Examples
/// ```
/// use aero_coords::arinc424::decode;
///
/// let (lon, lat) = decode("50S60").unwrap();
/// assert_eq!("160E", lon);
/// assert_eq!("50S", lat);
/// ```
/// # Errors
/// `InvalidArinc424` if the code is not valid shorthand.
pub fn decode(code: &str) -> Result<(String, String), Error> {
    let (lon, lat) = decode_parts(code)?;
    let (lon_degrees, lon_hemisphere) = lon;
    let (lat_degrees, lat_hemisphere) = lat;
    Ok((
        format!("{lon_degrees:03}{lon_hemisphere}"),
        format!("{lat_degrees:02}{lat_hemisphere}"),
    ))
}

/// Decode ARINC 424 shorthand into signed decimal degrees.
/// * `code` - the shorthand, e.g. `50N60`.
///
/// returns the longitude and latitude, e.g. (-160.0, 50.0).
/// # Errors
/// `InvalidArinc424` if the code is not valid shorthand.
pub fn decode_degrees(code: &str) -> Result<(Degrees, Degrees), Error> {
    let ((lon, lon_hemisphere), (lat, lat_hemisphere)) = decode_parts(code)?;
    Ok((
        Degrees(lon_hemisphere.sign() * f64::from(lon)),
        Degrees(lat_hemisphere.sign() * f64::from(lat)),
    ))
}

type FullDegrees = (u32, Hemisphere);

fn decode_parts(code: &str) -> Result<(FullDegrees, FullDegrees), Error> {
    let text = normalize(code);
    let invalid = || Error::InvalidArinc424(code.to_string());

    let (captures, hundreds) = SHORTHAND_LESS_100
        .captures(&text)
        .map(|captures| (captures, 0))
        .or_else(|| {
            SHORTHAND_100_OR_MORE
                .captures(&text)
                .map(|captures| (captures, 100))
        })
        .ok_or_else(invalid)?;

    let lat: u32 = captures["lat"].parse().map_err(|_| invalid())?;
    let lon: u32 = captures["lon"].parse().map_err(|_| invalid())?;
    let (lat_hemisphere, lon_hemisphere) = captures["designator"]
        .chars()
        .next()
        .and_then(quadrant)
        .ok_or_else(invalid)?;

    Ok(((hundreds + lon, lon_hemisphere), (lat, lat_hemisphere)))
}
