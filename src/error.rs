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

//! The error module contains the crate `Error` type and the helpers used by
//! the value objects to turn their faults into a human readable message.
//!
//! Value objects (`Coordinate`, `Bearing`, `Distance`) never fail to
//! construct: they record every fault found in their source value and
//! render a single, label-aware message on request.

use crate::angle::{AngleClass, AngleLayout};
use core::fmt;
use thiserror::Error;

/// The sub-field of a degrees, minutes, seconds angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Minutes,
    Seconds,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes => write!(f, "minutes"),
            Self::Seconds => write!(f, "seconds"),
        }
    }
}

/// A misuse of the point composition API, see `Point::polar_offset`.
#[derive(Clone, Debug, PartialEq)]
pub enum CompositionFault {
    /// An invalid `Distance` argument: the argument name and its message.
    Distance {
        argument: &'static str,
        message: String,
    },
    /// An azimuth that is not a number in the range [0, 360].
    Azimuth(String),
    /// An offset side that is neither LEFT nor RIGHT.
    OffsetSide(String),
}

impl fmt::Display for CompositionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance { argument, message } => write!(f, "{argument}: {message}"),
            Self::Azimuth(text) => write!(f, "Azimuth value error: {text}."),
            Self::OffsetSide(text) => write!(f, "Offset side error: {text}."),
        }
    }
}

/// The errors reported by this crate.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// A required value is empty or whitespace only.
    #[error("value is required")]
    MissingValue,

    /// The text does not match any grammar of the angle class.
    #[error("format not recognized for {class}: {text:?}")]
    StructuralParse { class: AngleClass, text: String },

    /// The text matches a grammar but a minutes or seconds field is >= 60.
    #[error("{field} value {value} is not within [0, 60)")]
    FieldRange { field: Field, value: f64 },

    /// The decimal degrees value is outside the range of the angle class.
    #[error("{value} is outside the valid {class} range")]
    DomainRange { class: AngleClass, value: f64 },

    /// The text is not a decimal number.
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    /// A distance must be greater than zero.
    #[error("distance {0} is not greater than zero")]
    NonPositiveDistance(f64),

    /// The unit of measure token is not in the catalog.
    #[error("unsupported unit of measure: {0:?}")]
    UnsupportedUnit(String),

    /// The ellipsoid name is not in the catalog.
    #[error("ellipsoid {0} not found")]
    UnsupportedEllipsoid(String),

    /// The layout cannot represent an angle of the given class.
    #[error("layout {layout:?} is not supported for {class}")]
    UnsupportedLayout {
        class: AngleClass,
        layout: AngleLayout,
    },

    /// An input value is NaN or infinite.
    #[error("{0} is not finite")]
    NotFinite(&'static str),

    /// The Vincenty iteration did not converge.
    #[error("solution did not converge after {iterations} iterations")]
    NoConvergence { iterations: u32 },

    /// The text is not a valid ARINC424 shorthand or full degrees coordinate.
    #[error("invalid ARINC424 value: {0:?}")]
    InvalidArinc424(String),

    /// A calculation was requested from an invalid reference point.
    #[error("invalid reference point: {0}")]
    InvalidReference(String),

    /// The arguments of a point composition call are invalid.
    #[error("{}", render_faults(.0))]
    Composition(Vec<CompositionFault>),
}

impl Error {
    /// Whether the error is one of the angle text failures: structural,
    /// field range or domain range.
    #[must_use]
    pub const fn is_angle_format_error(&self) -> bool {
        matches!(
            self,
            Self::StructuralParse { .. } | Self::FieldRange { .. } | Self::DomainRange { .. }
        )
    }
}

fn render_faults(faults: &[CompositionFault]) -> String {
    faults.iter().map(ToString::to_string).collect()
}

/// Render the faults of a value object as one message, in the order the
/// faults were found.
/// * `label` - the label of the value object.
/// * `faults` - the faults of the value object.
/// * `describe` - maps a fault to the message suffix that follows the label.
pub(crate) fn render_message<F>(label: &str, faults: &[Error], describe: F) -> String
where
    F: Fn(&Error) -> &'static str,
{
    faults
        .iter()
        .map(|fault| format!("{label} {}", describe(fault)))
        .collect()
}
