//! Colors, themes, and the cell style sheet.
//!
//! Default colors and sizes are a [`StyleSheet`] value handed to the cell
//! at construction, so two cells can carry different defaults and nothing
//! is globally mutable.

use serde::{Deserialize, Serialize};

use crate::units::Size;

/// An RGBA display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent; used for outline-mode fills.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// A darker shade of this color (30% toward black, alpha unchanged).
    pub fn darker(self) -> Self {
        Self {
            r: (self.r as f32 * 0.7) as u8,
            g: (self.g as f32 * 0.7) as u8,
            b: (self.b as f32 * 0.7) as u8,
            a: self.a,
        }
    }
}

/// Canvas theme supplied by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Color used for outline-mode (ghost/preview) strokes and labels.
    pub outline_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            outline_color: Color::rgb(0, 0, 0),
        }
    }
}

/// Host-side interaction state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementState {
    Normal,
    Selected,
    Dragging,
}

impl ElementState {
    /// Selected and dragging cells render with the highlight color.
    pub fn is_highlighted(self) -> bool {
        matches!(self, ElementState::Selected | ElementState::Dragging)
    }
}

/// Transparency ceiling: a cell at `alpha == MAX_ALPHA` is fully opaque.
pub const MAX_ALPHA: u8 = 100;

/// Immutable default colors and dimensions for a tube cell.
///
/// Injected at construction; a cell never reads style data from anywhere
/// else. Field values follow the sub-mini pencil tube datasheet proportions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub body_color: Color,
    pub border_color: Color,
    pub pin_color: Color,
    pub pin_border_color: Color,
    pub label_color: Color,
    pub label_color_selected: Color,
    pub selection_color: Color,
    /// Lead metal; the lead border pass uses its darker shade.
    pub metal_color: Color,

    pub pin_size: Size,
    pub pin_spacing: Size,
    pub body_width: Size,
    pub body_thickness: Size,
    pub body_height: Size,
    pub diameter: Size,
    pub length: Size,
    pub lead_length: Size,
    pub lead_thickness: Size,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let pin_color = Color::rgb(0x00, 0xB2, 0xEE);
        Self {
            body_color: Color::rgb(192, 192, 192),
            border_color: Color::rgb(128, 128, 128),
            pin_color,
            pin_border_color: pin_color.darker(),
            label_color: Color::rgb(255, 255, 255),
            label_color_selected: Color::rgb(255, 0, 0),
            selection_color: Color::rgb(255, 0, 0),
            metal_color: Color::rgb(0x23, 0x6B, 0x8E),

            pin_size: Size::inches(0.03),
            pin_spacing: Size::inches(0.1),
            body_width: Size::inches(0.4),
            body_thickness: Size::mm(4.5),
            body_height: Size::mm(9.0),
            diameter: Size::inches(0.4),
            length: Size::inches(1.375),
            lead_length: Size::inches(0.2),
            lead_thickness: Size::mm(0.8),
        }
    }
}
