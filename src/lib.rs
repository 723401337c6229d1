//! Visual-geometry engine for the sub-miniature tube cell of a schematic
//! layout editor.
//!
//! Given one cell's editable configuration (orientation, fold state, pin
//! count, lead spacing, lead length, display mode) the crate computes the
//! cell's connection-point positions, its renderable body regions, and the
//! ordered draw pass that paints body, leads, and label:
//!
//! # Pipeline
//!
//! ```text
//! TubeConfig + anchor
//!   → pin positions   (folded chain / unfolded three-point layout)
//!   → body regions    (main outline + mounting tab, lazily cached)
//!   → draw ops        (fills, two-pass leads, pin circles, centered label)
//! ```
//!
//! The host editor owns selection, dragging, undo, rasterization, and the
//! on-disk project format; the engine hands it data. [`TubeElement`] is
//! the aggregate — its typed setters carry the invalidation contract that
//! keeps control points eager and body geometry lazy.

pub mod body;
pub mod config;
pub mod element;
pub mod geom;
pub mod layout;
pub mod properties;
pub mod render;
pub mod style;
pub mod units;

pub use config::{DisplayMode, Orientation, PinArrangement, PinCount, TubeConfig};
pub use element::TubeElement;
pub use geom::{Ellipse, Point, Rect, Region};
pub use render::{draw, draw_icon, DrawOp, RenderCtx, TextMetrics};
pub use style::{Color, ElementState, StyleSheet, Theme};
pub use units::{Size, SizeUnit};

/// Serialize a cell to the host's JSON document format.
pub fn to_json(element: &TubeElement) -> String {
    serde_json::to_string_pretty(element).expect("cell serialization should not fail")
}

/// Restore a cell from its JSON document.
///
/// The body cache is not part of the document; the first geometry query
/// after loading recomputes it. Optional fields missing from documents
/// written by older versions read as their defaults.
pub fn from_json(json: &str) -> Result<TubeElement, serde_json::Error> {
    serde_json::from_str(json)
}
