//! Real-world lengths and their conversion to screen pixels.
//!
//! Every physical dimension in a cell configuration (lead spacing, body
//! width, …) is a [`Size`]: a value plus a [`SizeUnit`]. Conversion to
//! pixels is a pure function of the size alone — the editor renders at a
//! fixed 200 px per inch, so a `Size` never needs to know about zoom or
//! DPI (the host canvas applies those as a transform).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canvas resolution: how many pixels one real-world inch occupies.
pub const PIXELS_PER_INCH: f64 = 200.0;

/// Unit of a real-world length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    Px,
    Mm,
    Cm,
    In,
}

impl SizeUnit {
    /// Pixels per one unit of this kind.
    fn pixel_factor(self) -> f64 {
        match self {
            SizeUnit::Px => 1.0,
            SizeUnit::Mm => PIXELS_PER_INCH / 25.4,
            SizeUnit::Cm => PIXELS_PER_INCH / 2.54,
            SizeUnit::In => PIXELS_PER_INCH,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SizeUnit::Px => "px",
            SizeUnit::Mm => "mm",
            SizeUnit::Cm => "cm",
            SizeUnit::In => "in",
        };
        f.write_str(s)
    }
}

/// A real-world length: value plus unit, e.g. `0.1 in` or `4.5 mm`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub value: f64,
    pub unit: SizeUnit,
}

impl Size {
    pub const fn new(value: f64, unit: SizeUnit) -> Self {
        Self { value, unit }
    }

    pub const fn mm(value: f64) -> Self {
        Self::new(value, SizeUnit::Mm)
    }

    pub const fn inches(value: f64) -> Self {
        Self::new(value, SizeUnit::In)
    }

    /// Convert to pixels at the fixed canvas resolution.
    pub fn to_pixels(self) -> f64 {
        self.value * self.unit.pixel_factor()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Round a pixel length down to the closest odd integer.
///
/// Body dimensions are forced odd so that a 1 px centered stroke sits
/// symmetrically on the outline instead of straddling two pixel rows.
pub fn closest_odd(len: f64) -> i32 {
    (len as i32) / 2 * 2 + 1
}

/// Truncate a pixel length to the closest even integer.
///
/// Pin circles are forced even so the circle centers land exactly on the
/// control-point grid.
pub fn closest_even(len: f64) -> i32 {
    (len as i32) / 2 * 2
}
