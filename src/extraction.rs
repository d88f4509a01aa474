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

//! The extraction module finds longitude and latitude pairs in free text,
//! e.g. text copied from an aeronautical publication.
//!
//! An extraction is configured with the order of the coordinates in each
//! pair, their format and the separator between them. Newlines are removed
//! from the text before it is searched, so a pair may be split across lines.

use crate::AngleClass;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The order of the coordinates in a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sequence {
    #[default]
    LonLat,
    LatLon,
}

/// The format of the coordinates in a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PairFormat {
    /// e.g. `0133738.21E`.
    #[default]
    DmshCompacted,
    /// e.g. `E0133738.21`.
    HdmsCompacted,
    /// e.g. `013 37 38.21 E`.
    DmshSeparated,
    /// e.g. `E 013 37 38.21`.
    HdmsSeparated,
}

/// The separator between the longitude and latitude of a pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PairSeparator {
    None,
    #[default]
    Space,
    Hyphen,
    Slash,
    Backslash,
}

impl PairSeparator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Space => " ",
            Self::Hyphen => "-",
            Self::Slash => "/",
            Self::Backslash => "\\",
        }
    }
}

/// The settings of a `CoordinateExtraction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractionSettings {
    pub sequence: Sequence,
    pub format: PairFormat,
    pub separator: PairSeparator,
}

/// A longitude and latitude pair, as found in the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordinatePair {
    pub lon: String,
    pub lat: String,
}

impl CoordinatePair {
    #[must_use]
    pub fn new(lon: &str, lat: &str) -> Self {
        Self {
            lon: lon.to_string(),
            lat: lat.to_string(),
        }
    }
}

/// The fields of the example coordinate: degrees, minutes, seconds, hemisphere.
type ExampleFields = (&'static str, &'static str, &'static str, &'static str);

const EXAMPLE_LONGITUDE: ExampleFields = ("013", "37", "38.21", "E");
const EXAMPLE_LATITUDE: ExampleFields = ("74", "56", "32.55", "N");

/// The regular expression of a coordinate in a format.
fn coordinate_pattern(format: PairFormat, class: AngleClass) -> String {
    let (width, hemisphere) = match class {
        AngleClass::Latitude => (2, "[NS]"),
        _ => (3, "[EW]"),
    };
    let digits = width + 4;
    match format {
        PairFormat::DmshCompacted => format!(r"[0-9]{{{digits}}}(?:\.[0-9]+)?{hemisphere}"),
        PairFormat::HdmsCompacted => format!(r"{hemisphere}[0-9]{{{digits}}}(?:\.[0-9]+)?"),
        PairFormat::DmshSeparated => format!(
            r"[0-9]{{1,{width}}}\W[0-9]{{1,2}}\W[0-9]{{1,2}}(?:\.[0-9]+)?\W{{0,2}}{hemisphere}"
        ),
        PairFormat::HdmsSeparated => format!(
            r"{hemisphere}\W{{0,2}}[0-9]{{1,{width}}}\W[0-9]{{1,2}}\W[0-9]{{1,2}}(?:\.[0-9]+)?"
        ),
    }
}

/// The regular expression of a coordinate pair.
#[must_use]
pub fn pair_pattern(settings: ExtractionSettings) -> String {
    let lon = coordinate_pattern(settings.format, AngleClass::Longitude);
    let lat = coordinate_pattern(settings.format, AngleClass::Latitude);
    let separator = regex::escape(settings.separator.as_str());
    match settings.sequence {
        Sequence::LonLat => format!("(?P<lon>{lon}){separator}(?P<lat>{lat})"),
        Sequence::LatLon => format!("(?P<lat>{lat}){separator}(?P<lon>{lon})"),
    }
}

/// Finds coordinate pairs in free text.
#[derive(Clone, Debug)]
pub struct CoordinateExtraction {
    settings: ExtractionSettings,
    regex: Regex,
}

impl CoordinateExtraction {
    /// Constructor.
    /// * `sequence` - the order of the coordinates in each pair.
    /// * `format` - the format of the coordinates.
    /// * `separator` - the separator between the coordinates of a pair.
    #[must_use]
    pub fn new(sequence: Sequence, format: PairFormat, separator: PairSeparator) -> Self {
        Self::from_settings(ExtractionSettings {
            sequence,
            format,
            separator,
        })
    }

    #[must_use]
    pub fn from_settings(settings: ExtractionSettings) -> Self {
        let regex = Regex::new(&pair_pattern(settings)).expect("valid coordinate pair grammar");
        Self { settings, regex }
    }

    #[must_use]
    pub const fn settings(&self) -> ExtractionSettings {
        self.settings
    }

    /// Extract the coordinate pairs from text.
    /// * `text` - the text to search.
    ///
    /// returns the pairs, in the order they appear in the text.
    /// # Examples
    /// ```
    /// use aero_coords::extraction::*;
    ///
    /// let extraction =
    ///     CoordinateExtraction::new(Sequence::LatLon, PairFormat::DmshCompacted, PairSeparator::Slash);
    /// let pairs = extraction.extract("Points: 512942N/0183840E and\n513410N/0183538E.");
    /// assert_eq!(
    ///     vec![
    ///         CoordinatePair::new("0183840E", "512942N"),
    ///         CoordinatePair::new("0183538E", "513410N")
    ///     ],
    ///     pairs
    /// );
    /// ```
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<CoordinatePair> {
        let text = text.replace(['\r', '\n'], "");
        let pairs: Vec<CoordinatePair> = self
            .regex
            .captures_iter(&text)
            .map(|captures| CoordinatePair::new(&captures["lon"], &captures["lat"]))
            .collect();
        tracing::trace!(count = pairs.len(), settings = ?self.settings, "extracted coordinate pairs");
        pairs
    }

    /// The example coordinate in the configured format.
    /// * `class` - `Longitude` or `Latitude`.
    #[must_use]
    pub fn coordinate_example(&self, class: AngleClass) -> String {
        let (degrees, minutes, seconds, hemisphere) = match class {
            AngleClass::Latitude => EXAMPLE_LATITUDE,
            _ => EXAMPLE_LONGITUDE,
        };
        match self.settings.format {
            PairFormat::DmshCompacted => format!("{degrees}{minutes}{seconds}{hemisphere}"),
            PairFormat::HdmsCompacted => format!("{hemisphere}{degrees}{minutes}{seconds}"),
            PairFormat::DmshSeparated => format!("{degrees} {minutes} {seconds} {hemisphere}"),
            PairFormat::HdmsSeparated => format!("{hemisphere} {degrees} {minutes} {seconds}"),
        }
    }

    /// The example coordinate pair in the configured sequence, format and
    /// separator, e.g. `0133738.21E 745632.55N`.
    #[must_use]
    pub fn coordinate_pair_example(&self) -> String {
        let lon = self.coordinate_example(AngleClass::Longitude);
        let lat = self.coordinate_example(AngleClass::Latitude);
        let separator = self.settings.separator.as_str();
        match self.settings.sequence {
            Sequence::LonLat => format!("{lon}{separator}{lat}"),
            Sequence::LatLon => format!("{lat}{separator}{lon}"),
        }
    }
}

impl Default for CoordinateExtraction {
    fn default() -> Self {
        Self::from_settings(ExtractionSettings::default())
    }
}
