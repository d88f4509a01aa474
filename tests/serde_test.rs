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

#![cfg(feature = "serde")]

extern crate aero_coords;

use aero_coords::extraction::{
    CoordinateExtraction, ExtractionSettings, PairFormat, PairSeparator, Sequence,
};
use aero_coords::{AngleClass, AngleLayout, CalculatedPoint, LengthUnit, OffsetSide, SpeedUnit};

#[test]
fn test_serde_enums() {
    let json = serde_json::to_string(&AngleClass::Latitude).unwrap();
    assert_eq!("\"Latitude\"", json);
    let layout: AngleLayout = serde_json::from_str("\"Hdms\"").unwrap();
    assert_eq!(AngleLayout::Hdms, layout);

    let units = [LengthUnit::NauticalMiles, LengthUnit::Feet];
    let json = serde_json::to_string(&units).unwrap();
    let deserialized: [LengthUnit; 2] = serde_json::from_str(&json).unwrap();
    assert_eq!(units, deserialized);

    let json = serde_json::to_string(&(SpeedUnit::Knots, OffsetSide::Left)).unwrap();
    let deserialized: (SpeedUnit, OffsetSide) = serde_json::from_str(&json).unwrap();
    assert_eq!((SpeedUnit::Knots, OffsetSide::Left), deserialized);
}

#[test]
fn test_serde_extraction_settings() {
    let json = r#"{"sequence":"LatLon","format":"DmshCompacted","separator":"Slash"}"#;
    let settings: ExtractionSettings = serde_json::from_str(json).unwrap();
    assert_eq!(Sequence::LatLon, settings.sequence);
    assert_eq!(PairFormat::DmshCompacted, settings.format);
    assert_eq!(PairSeparator::Slash, settings.separator);
    assert_eq!(json, serde_json::to_string(&settings).unwrap());

    let extraction = CoordinateExtraction::from_settings(settings);
    assert_eq!("745632.55N/0133738.21E", extraction.coordinate_pair_example());
}

#[test]
fn test_serde_calculated_point() {
    let point = CalculatedPoint {
        lon: 20.5,
        lat: -55.25,
        definition: "Ref: TEST1; Dist: 100 m; Azm: 123".to_string(),
    };
    let json = serde_json::to_string(&point).unwrap();
    let deserialized: CalculatedPoint = serde_json::from_str(&json).unwrap();
    assert_eq!(point, deserialized);
}
