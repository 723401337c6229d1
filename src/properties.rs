//! Property-panel reflection for the tube cell.
//!
//! The host's property panel is generic: it asks for the descriptor
//! table, renders one editor row per entry, and reads/writes values by
//! property name. Writes are routed through the cell's typed setters, so
//! the panel gets the same control-point recompute and cache
//! invalidation as programmatic edits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DisplayMode, Orientation, PinArrangement, PinCount};
use crate::element::TubeElement;
use crate::style::Color;
use crate::units::Size;

/// A dynamically-typed property value crossing the panel boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Text(String),
    Bool(bool),
    /// Translucency 0..=100.
    Alpha(u8),
    Size(Size),
    Color(Color),
    Orientation(Orientation),
    PinCount(PinCount),
    PinArrangement(PinArrangement),
    DisplayMode(DisplayMode),
}

impl PropertyValue {
    /// Short kind tag used in editor selection and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Text(_) => "text",
            PropertyValue::Bool(_) => "bool",
            PropertyValue::Alpha(_) => "alpha",
            PropertyValue::Size(_) => "size",
            PropertyValue::Color(_) => "color",
            PropertyValue::Orientation(_) => "orientation",
            PropertyValue::PinCount(_) => "pin count",
            PropertyValue::PinArrangement(_) => "pin arrangement",
            PropertyValue::DisplayMode(_) => "display mode",
        }
    }
}

/// One row of the property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Stable identifier used with [`TubeElement::property`].
    pub name: &'static str,
    /// Human-readable panel label.
    pub label: &'static str,
    /// Kind tag matching [`PropertyValue::kind`].
    pub kind: &'static str,
}

const DESCRIPTORS: &[PropertyDescriptor] = &[
    PropertyDescriptor { name: "name", label: "Name", kind: "text" },
    PropertyDescriptor { name: "value", label: "Value", kind: "text" },
    PropertyDescriptor { name: "orientation", label: "Orientation", kind: "orientation" },
    PropertyDescriptor { name: "folded", label: "Folded", kind: "bool" },
    PropertyDescriptor { name: "pin_count", label: "Lead Count", kind: "pin count" },
    PropertyDescriptor { name: "pin_arrangement", label: "Pin Arrangement", kind: "pin arrangement" },
    PropertyDescriptor { name: "lead_spacing", label: "Lead Spacing", kind: "size" },
    PropertyDescriptor { name: "lead_length", label: "Lead Length", kind: "size" },
    PropertyDescriptor { name: "diameter", label: "Diameter", kind: "size" },
    PropertyDescriptor { name: "length", label: "Length", kind: "size" },
    PropertyDescriptor { name: "display", label: "Display", kind: "display mode" },
    PropertyDescriptor { name: "body_color", label: "Body", kind: "color" },
    PropertyDescriptor { name: "border_color", label: "Border", kind: "color" },
    PropertyDescriptor { name: "top_lead", label: "Top Lead", kind: "bool" },
    PropertyDescriptor { name: "alpha", label: "Transparency", kind: "alpha" },
];

/// The ordered property table of a tube cell.
pub fn descriptors() -> &'static [PropertyDescriptor] {
    DESCRIPTORS
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("unknown property `{0}`")]
    Unknown(String),
    #[error("property `{property}` expects a {expected} value, got {got}")]
    KindMismatch {
        property: &'static str,
        expected: &'static str,
        got: &'static str,
    },
}

impl TubeElement {
    /// Read one property by name.
    pub fn property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        let value = match name {
            "name" => PropertyValue::Text(self.name().to_owned()),
            "value" => PropertyValue::Text(self.value().to_owned()),
            "orientation" => PropertyValue::Orientation(self.orientation()),
            "folded" => PropertyValue::Bool(self.folded()),
            "pin_count" => PropertyValue::PinCount(self.pin_count()),
            "pin_arrangement" => PropertyValue::PinArrangement(self.pin_arrangement()),
            "lead_spacing" => PropertyValue::Size(self.lead_spacing()),
            "lead_length" => PropertyValue::Size(self.lead_length()),
            "diameter" => PropertyValue::Size(self.diameter()),
            "length" => PropertyValue::Size(self.length()),
            "display" => PropertyValue::DisplayMode(self.display()),
            "body_color" => PropertyValue::Color(self.body_color()),
            "border_color" => PropertyValue::Color(self.border_color()),
            "top_lead" => PropertyValue::Bool(self.top_lead()),
            "alpha" => PropertyValue::Alpha(self.alpha()),
            other => return Err(PropertyError::Unknown(other.to_owned())),
        };
        Ok(value)
    }

    /// Write one property by name, with the full invalidation side
    /// effects of the typed setter.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        let mismatch = |property, expected, value: &PropertyValue| PropertyError::KindMismatch {
            property,
            expected,
            got: value.kind(),
        };
        match name {
            "name" => match value {
                PropertyValue::Text(v) => self.set_name(v),
                v => return Err(mismatch("name", "text", &v)),
            },
            "value" => match value {
                PropertyValue::Text(v) => self.set_value(v),
                v => return Err(mismatch("value", "text", &v)),
            },
            "orientation" => match value {
                PropertyValue::Orientation(v) => self.set_orientation(v),
                v => return Err(mismatch("orientation", "orientation", &v)),
            },
            "folded" => match value {
                PropertyValue::Bool(v) => self.set_folded(v),
                v => return Err(mismatch("folded", "bool", &v)),
            },
            "pin_count" => match value {
                PropertyValue::PinCount(v) => self.set_pin_count(v),
                v => return Err(mismatch("pin_count", "pin count", &v)),
            },
            "pin_arrangement" => match value {
                PropertyValue::PinArrangement(v) => self.set_pin_arrangement(v),
                v => return Err(mismatch("pin_arrangement", "pin arrangement", &v)),
            },
            "lead_spacing" => match value {
                PropertyValue::Size(v) => self.set_lead_spacing(v),
                v => return Err(mismatch("lead_spacing", "size", &v)),
            },
            "lead_length" => match value {
                PropertyValue::Size(v) => self.set_lead_length(v),
                v => return Err(mismatch("lead_length", "size", &v)),
            },
            "diameter" => match value {
                PropertyValue::Size(v) => self.set_diameter(v),
                v => return Err(mismatch("diameter", "size", &v)),
            },
            "length" => match value {
                PropertyValue::Size(v) => self.set_length(v),
                v => return Err(mismatch("length", "size", &v)),
            },
            "display" => match value {
                PropertyValue::DisplayMode(v) => self.set_display(v),
                v => return Err(mismatch("display", "display mode", &v)),
            },
            "body_color" => match value {
                PropertyValue::Color(v) => self.set_body_color(v),
                v => return Err(mismatch("body_color", "color", &v)),
            },
            "border_color" => match value {
                PropertyValue::Color(v) => self.set_border_color(v),
                v => return Err(mismatch("border_color", "color", &v)),
            },
            "top_lead" => match value {
                PropertyValue::Bool(v) => self.set_top_lead(v),
                v => return Err(mismatch("top_lead", "bool", &v)),
            },
            "alpha" => match value {
                PropertyValue::Alpha(v) => self.set_alpha(v),
                v => return Err(mismatch("alpha", "alpha", &v)),
            },
            other => return Err(PropertyError::Unknown(other.to_owned())),
        }
        Ok(())
    }
}
