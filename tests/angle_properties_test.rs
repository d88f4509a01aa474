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

extern crate aero_coords;

use aero_coords::angle::{format, parse};
use aero_coords::{AngleClass, AngleLayout, Hemisphere};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};

/// Half a unit in the last place of seconds formatted to 3 decimal places,
/// in degrees.
const TOLERANCE: f64 = 0.000_5 / 3600.0 + 1e-12;

/// quickcheck will give us awkward f64 values, so map the normal ones
/// into the range of the angle class.
fn arbitrary_in(g: &mut Gen, lower: f64, span: f64) -> f64 {
    loop {
        match f64::arbitrary(g) {
            0. => break lower,
            f if f.is_normal() => break lower + f.rem_euclid(span),
            _ => {}
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Longitude(f64);

impl Arbitrary for Longitude {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_in(g, -180.0, 360.0))
    }
}

#[derive(Clone, Copy, Debug)]
struct Latitude(f64);

impl Arbitrary for Latitude {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_in(g, -90.0, 180.0))
    }
}

#[derive(Clone, Copy, Debug)]
struct Bearing(f64);

impl Arbitrary for Bearing {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_in(g, 0.0, 360.0))
    }
}

/// Format, parse and format again: the value is recovered to within the
/// precision of the seconds and the second text equals the first.
fn try_round_trip(value: f64, class: AngleClass) -> TestResult {
    // values that round to zero seconds lose their sign
    if value.abs() < 0.001 {
        return TestResult::discard();
    }
    for &layout in class.layouts() {
        let Ok(text) = format(value, class, layout, 3) else {
            return TestResult::failed();
        };
        let Ok(parsed) = parse(&text, class) else {
            return TestResult::failed();
        };
        let tolerance = if layout.has_seconds() {
            TOLERANCE
        } else {
            0.000_5 / 60.0 + 1e-12
        };
        if (value - parsed).abs() > tolerance {
            return TestResult::failed();
        }
        if format(parsed, class, layout, 3).as_deref() != Ok(text.as_str()) {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

/// Swap the hemisphere letter of a text, keeping its digits.
fn swap_hemisphere(text: &str) -> String {
    text.chars()
        .map(|c| Hemisphere::from_letter(c).map_or(c, |h| h.opposite().letter()))
        .collect()
}

/// Parse a text and the same text in the opposite hemisphere: the values
/// are exact negatives.
fn try_hemisphere_swap(value: f64, class: AngleClass) -> TestResult {
    for &layout in class.layouts() {
        let Ok(text) = format(value, class, layout, 2) else {
            return TestResult::failed();
        };
        match (parse(&text, class), parse(&swap_hemisphere(&text), class)) {
            (Ok(a), Ok(b)) if a == -b => {}
            _ => return TestResult::failed(),
        }
    }
    TestResult::passed()
}

quickcheck! {
    fn longitude_round_trip(lon: Longitude) -> TestResult {
        try_round_trip(lon.0, AngleClass::Longitude)
    }

    fn latitude_round_trip(lat: Latitude) -> TestResult {
        try_round_trip(lat.0, AngleClass::Latitude)
    }

    fn bearing_round_trip(bearing: Bearing) -> TestResult {
        try_round_trip(bearing.0, AngleClass::Bearing)
    }

    fn longitude_hemisphere_sign(lon: Longitude) -> TestResult {
        if lon.0.abs() < 0.001 {
            return TestResult::discard();
        }
        let Ok(text) = format(lon.0, AngleClass::Longitude, AngleLayout::Dmsh, 2) else {
            return TestResult::failed();
        };
        let west = text.ends_with('W');
        TestResult::from_bool(west == (lon.0 < 0.0))
    }

    fn latitude_hemisphere_sign(lat: Latitude) -> TestResult {
        if lat.0.abs() < 0.001 {
            return TestResult::discard();
        }
        let Ok(text) = format(lat.0, AngleClass::Latitude, AngleLayout::Hdms, 2) else {
            return TestResult::failed();
        };
        let south = text.starts_with('S');
        TestResult::from_bool(south == (lat.0 < 0.0))
    }

    fn longitude_hemisphere_swap(lon: Longitude) -> TestResult {
        try_hemisphere_swap(lon.0, AngleClass::Longitude)
    }

    fn latitude_hemisphere_swap(lat: Latitude) -> TestResult {
        try_hemisphere_swap(lat.0, AngleClass::Latitude)
    }
}
