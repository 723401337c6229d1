//! Configuration state of one tube cell.
//!
//! [`TubeConfig`] is leaf data: every field a property panel can edit, no
//! behavior. The invalidation side effects of editing live on
//! [`crate::element::TubeElement`], whose typed setters are the only
//! mutation path.
//!
//! All choice-valued fields are closed enums, so an out-of-range
//! orientation or pin count is unrepresentable rather than a runtime
//! error.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{Color, StyleSheet, MAX_ALPHA};
use crate::units::Size;

/// Cell rotation, in quarter turns. No other angles are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Deg0,
        Orientation::Deg90,
        Orientation::Deg180,
        Orientation::Deg270,
    ];

    /// Rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// Number of leads on the cell. Sub-mini tubes come with 3 to 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinCount {
    Three,
    Four,
    Five,
    Six,
    Seven,
    #[default]
    Eight,
    Nine,
    Ten,
}

/// Raised when converting a raw integer outside 3..=10 into a [`PinCount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pin count must be between 3 and 10, got {0}")]
pub struct PinCountError(pub u8);

impl PinCount {
    pub const ALL: [PinCount; 8] = [
        PinCount::Three,
        PinCount::Four,
        PinCount::Five,
        PinCount::Six,
        PinCount::Seven,
        PinCount::Eight,
        PinCount::Nine,
        PinCount::Ten,
    ];

    /// The plain number of pins.
    pub fn pins(self) -> usize {
        match self {
            PinCount::Three => 3,
            PinCount::Four => 4,
            PinCount::Five => 5,
            PinCount::Six => 6,
            PinCount::Seven => 7,
            PinCount::Eight => 8,
            PinCount::Nine => 9,
            PinCount::Ten => 10,
        }
    }
}

impl TryFrom<u8> for PinCount {
    type Error = PinCountError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(PinCount::Three),
            4 => Ok(PinCount::Four),
            5 => Ok(PinCount::Five),
            6 => Ok(PinCount::Six),
            7 => Ok(PinCount::Seven),
            8 => Ok(PinCount::Eight),
            9 => Ok(PinCount::Nine),
            10 => Ok(PinCount::Ten),
            other => Err(PinCountError(other)),
        }
    }
}

impl fmt::Display for PinCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pins())
    }
}

/// How leads are arranged around the body.
///
/// Advisory for now: the layout engine does not yet read it. `Circular`
/// is expected to eventually drive radial pin placement for counts above
/// three in the unfolded topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinArrangement {
    Inline,
    #[default]
    Circular,
}

impl fmt::Display for PinArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PinArrangement::Inline => "In-line",
            PinArrangement::Circular => "Circular",
        };
        f.write_str(s)
    }
}

/// What the rendered label shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[default]
    Name,
    Value,
    Both,
    None,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayMode::Name => "Name",
            DisplayMode::Value => "Value",
            DisplayMode::Both => "Both",
            DisplayMode::None => "None",
        };
        f.write_str(s)
    }
}

/// The editable property set of one placed tube cell.
///
/// `display` and `lead_length` are optional: documents written before
/// those properties existed deserialize with `None`, and readers
/// substitute the documented default instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeConfig {
    /// Instance designator, e.g. `"V1"`.
    pub name: String,
    /// Free-text part value, e.g. `"12AX7"`.
    pub value: String,
    pub orientation: Orientation,
    pub folded: bool,
    pub pin_count: PinCount,
    pub pin_arrangement: PinArrangement,
    pub lead_spacing: Size,
    pub diameter: Size,
    pub length: Size,
    #[serde(default)]
    pub lead_length: Option<Size>,
    #[serde(default)]
    pub display: Option<DisplayMode>,
    pub body_color: Color,
    pub border_color: Color,
    pub top_lead: bool,
    /// Translucency, 0..=[`MAX_ALPHA`].
    pub alpha: u8,
}

impl TubeConfig {
    /// Fresh configuration with the sheet's defaults.
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            orientation: Orientation::default(),
            folded: false,
            pin_count: PinCount::default(),
            pin_arrangement: PinArrangement::default(),
            lead_spacing: sheet.pin_spacing,
            diameter: sheet.diameter,
            length: sheet.length,
            lead_length: Some(sheet.lead_length),
            display: Some(DisplayMode::default()),
            body_color: sheet.body_color,
            border_color: sheet.border_color,
            top_lead: false,
            alpha: MAX_ALPHA,
        }
    }
}
