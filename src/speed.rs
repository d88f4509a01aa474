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

//! The speed module contains conversions between the speed units of measure
//! used in aviation.

use crate::error::Error;
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A speed unit of measure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    /// Metres per second, `m/s`.
    MetresPerSecond,
    /// Kilometres per hour, `km/h`.
    KilometresPerHour,
    /// Nautical miles per hour, `kt`.
    Knots,
}

impl SpeedUnit {
    pub const ALL: [Self; 3] = [Self::MetresPerSecond, Self::KilometresPerHour, Self::Knots];

    /// The unit of measure token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::MetresPerSecond => "m/s",
            Self::KilometresPerHour => "km/h",
            Self::Knots => "kt",
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.token() == token)
            .ok_or_else(|| Error::UnsupportedUnit(token.to_string()))
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Convert a speed to metres per second.
/// * `speed` - the speed in `unit`.
/// * `unit` - the unit of `speed`.
#[must_use]
pub fn to_metres_per_second(speed: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetresPerSecond => speed,
        SpeedUnit::KilometresPerHour => speed * 10.0 / 36.0,
        SpeedUnit::Knots => speed * 1852.0 / 3600.0,
    }
}

/// Convert a speed in metres per second to another unit.
/// * `speed` - the speed in metres per second.
/// * `unit` - the unit of the result.
#[must_use]
pub fn from_metres_per_second(speed: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetresPerSecond => speed,
        SpeedUnit::KilometresPerHour => speed * 36.0 / 10.0,
        SpeedUnit::Knots => speed * 3600.0 / 1852.0,
    }
}

/// Convert a speed between units of measure, via metres per second.
/// * `speed` - the speed in the `from` unit.
/// * `from` - the unit of `speed`.
/// * `to` - the unit of the result.
///
/// # Examples
/// ```
/// use aero_coords::speed::{convert_speed, SpeedUnit};
///
/// let speed = convert_speed(300.0, SpeedUnit::Knots, SpeedUnit::KilometresPerHour);
/// assert!((speed - 555.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn convert_speed(speed: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    from_metres_per_second(to_metres_per_second(speed, from), to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_speed_unit() {
        for unit in SpeedUnit::ALL {
            assert_eq!(Ok(unit), unit.token().parse::<SpeedUnit>());
            assert_eq!(unit.token(), unit.to_string());
        }
        assert_eq!(
            Err(Error::UnsupportedUnit("mph".to_string())),
            "mph".parse::<SpeedUnit>()
        );
    }

    #[test]
    fn test_to_and_from_metres_per_second() {
        assert_eq!(1.0, to_metres_per_second(1.0, SpeedUnit::MetresPerSecond));
        assert!(is_within_tolerance(
            0.277_777_777_777_777_8,
            to_metres_per_second(1.0, SpeedUnit::KilometresPerHour),
            1e-15
        ));
        assert!(is_within_tolerance(
            0.514_444_444_444_444_5,
            to_metres_per_second(1.0, SpeedUnit::Knots),
            1e-15
        ));

        assert_eq!(1.0, from_metres_per_second(1.0, SpeedUnit::MetresPerSecond));
        assert!(is_within_tolerance(
            3.6,
            from_metres_per_second(1.0, SpeedUnit::KilometresPerHour),
            1e-15
        ));
        assert!(is_within_tolerance(
            1.943_844_492_440_604_6,
            from_metres_per_second(1.0, SpeedUnit::Knots),
            1e-15
        ));
    }

    #[test]
    fn test_convert_speed() {
        let cases = [
            (45.78, SpeedUnit::MetresPerSecond, SpeedUnit::MetresPerSecond, 45.78),
            (45.78, SpeedUnit::MetresPerSecond, SpeedUnit::KilometresPerHour, 164.808),
            (45.78, SpeedUnit::MetresPerSecond, SpeedUnit::Knots, 88.989_200_863_930_89),
            (295.0, SpeedUnit::KilometresPerHour, SpeedUnit::MetresPerSecond, 81.944_444_444_444_44),
            (295.0, SpeedUnit::KilometresPerHour, SpeedUnit::KilometresPerHour, 295.0),
            (295.0, SpeedUnit::KilometresPerHour, SpeedUnit::Knots, 159.287_257_019_438_44),
            (300.0, SpeedUnit::Knots, SpeedUnit::MetresPerSecond, 154.333_333_333_333_34),
            (300.0, SpeedUnit::Knots, SpeedUnit::KilometresPerHour, 555.6),
            (300.0, SpeedUnit::Knots, SpeedUnit::Knots, 300.0),
        ];
        for (speed, from, to, expected) in cases {
            assert!(is_within_tolerance(
                expected,
                convert_speed(speed, from, to),
                1e-9
            ));
        }
    }
}
