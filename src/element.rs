//! The tube cell element: configuration, control points, and the cached
//! body geometry, tied together by a mutation contract.
//!
//! Every edit goes through a typed setter, and each setter performs
//! exactly the invalidation its property requires:
//!
//! | mutation                                            | pins      | body cache |
//! |-----------------------------------------------------|-----------|------------|
//! | orientation, folded, pin count, lead spacing, top lead, diameter | recompute | clear |
//! | lead length                                         | —         | clear      |
//! | anchor or any control point moved                   | write     | clear      |
//! | name, value, colors, display, arrangement, alpha, length | —    | —          |
//!
//! The body cache is a single `Option` slot: `None` means stale, and the
//! next [`TubeElement::body`] call recomputes the whole region pair
//! atomically. Repeated reads without an intervening mutation never
//! recompute.

use serde::{Deserialize, Serialize};

use crate::body::{body_regions, BodyDims};
use crate::config::{DisplayMode, Orientation, PinArrangement, PinCount, TubeConfig};
use crate::geom::{Point, Region};
use crate::layout::pin_positions;
use crate::style::{Color, StyleSheet, MAX_ALPHA};
use crate::units::Size;

/// When the host editor shows drag handles for a control point.
///
/// Tube cell pins are not independently draggable — only the anchor moves
/// the cell — so the policy is always [`VisibilityPolicy::Never`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityPolicy {
    Always,
    WhenSelected,
    Never,
}

/// One placed sub-mini tube cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TubeElement {
    #[serde(default)]
    sheet: StyleSheet,
    config: TubeConfig,
    control_points: Vec<Point>,
    #[serde(skip)]
    body: Option<[Region; 2]>,
}

impl TubeElement {
    /// New cell with the built-in style sheet, anchored at the origin.
    pub fn new() -> Self {
        Self::with_sheet(StyleSheet::default())
    }

    /// New cell with an injected style sheet.
    pub fn with_sheet(sheet: StyleSheet) -> Self {
        let config = TubeConfig::from_sheet(&sheet);
        let mut element = Self {
            sheet,
            config,
            control_points: vec![Point::default()],
            body: None,
        };
        element.update_control_points();
        element
    }

    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Read-only view of the configuration. All writes go through the
    /// typed setters so the invalidation contract holds.
    pub fn config(&self) -> &TubeConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Control points
    // -----------------------------------------------------------------------

    /// The anchor: authoritative position of the whole cell.
    pub fn anchor(&self) -> Point {
        self.control_points[0]
    }

    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }

    pub fn control_point(&self, index: usize) -> Point {
        self.control_points[index]
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Move one control point (the host drag engine calls this with
    /// index 0 when the cell is dragged). Clears the body cache.
    pub fn set_control_point(&mut self, index: usize, point: Point) {
        self.control_points[index] = point;
        self.body = None;
    }

    /// Connection points stay glued to wires during drags.
    pub fn is_control_point_sticky(&self, _index: usize) -> bool {
        true
    }

    pub fn control_point_visibility(&self, _index: usize) -> VisibilityPolicy {
        VisibilityPolicy::Never
    }

    // -----------------------------------------------------------------------
    // Property accessors
    // -----------------------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.config.name = name.into();
    }

    pub fn value(&self) -> &str {
        &self.config.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.config.value = value.into();
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
        self.update_control_points();
        self.body = None;
    }

    pub fn folded(&self) -> bool {
        self.config.folded
    }

    pub fn set_folded(&mut self, folded: bool) {
        self.config.folded = folded;
        self.update_control_points();
        self.body = None;
    }

    pub fn pin_count(&self) -> PinCount {
        self.config.pin_count
    }

    pub fn set_pin_count(&mut self, pin_count: PinCount) {
        self.config.pin_count = pin_count;
        self.update_control_points();
        self.body = None;
    }

    pub fn pin_arrangement(&self) -> PinArrangement {
        self.config.pin_arrangement
    }

    pub fn set_pin_arrangement(&mut self, arrangement: PinArrangement) {
        self.config.pin_arrangement = arrangement;
    }

    pub fn lead_spacing(&self) -> Size {
        self.config.lead_spacing
    }

    pub fn set_lead_spacing(&mut self, spacing: Size) {
        self.config.lead_spacing = spacing;
        self.update_control_points();
        self.body = None;
    }

    /// Lead length; a missing stored value reads as the sheet default.
    pub fn lead_length(&self) -> Size {
        self.config.lead_length.unwrap_or(self.sheet.lead_length)
    }

    pub fn set_lead_length(&mut self, lead_length: Size) {
        self.config.lead_length = Some(lead_length);
        self.body = None;
    }

    /// Display mode; a missing stored value reads as [`DisplayMode::Name`].
    pub fn display(&self) -> DisplayMode {
        self.config.display.unwrap_or_default()
    }

    pub fn set_display(&mut self, display: DisplayMode) {
        self.config.display = Some(display);
    }

    pub fn top_lead(&self) -> bool {
        self.config.top_lead
    }

    pub fn set_top_lead(&mut self, top_lead: bool) {
        self.config.top_lead = top_lead;
        self.update_control_points();
        self.body = None;
    }

    pub fn diameter(&self) -> Size {
        self.config.diameter
    }

    pub fn set_diameter(&mut self, diameter: Size) {
        self.config.diameter = diameter;
        self.update_control_points();
        self.body = None;
    }

    pub fn length(&self) -> Size {
        self.config.length
    }

    pub fn set_length(&mut self, length: Size) {
        self.config.length = length;
    }

    pub fn body_color(&self) -> Color {
        self.config.body_color
    }

    pub fn set_body_color(&mut self, color: Color) {
        self.config.body_color = color;
    }

    pub fn border_color(&self) -> Color {
        self.config.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.config.border_color = color;
    }

    pub fn alpha(&self) -> u8 {
        self.config.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.config.alpha = alpha.min(MAX_ALPHA);
    }

    // -----------------------------------------------------------------------
    // Derived geometry
    // -----------------------------------------------------------------------

    /// Lead spacing in pixels.
    pub fn spacing_px(&self) -> i32 {
        self.config.lead_spacing.to_pixels() as i32
    }

    /// The `[main, tab]` body regions, recomputed only when stale.
    pub fn body(&mut self) -> [Region; 2] {
        match self.body {
            Some(regions) => regions,
            None => {
                let regions = body_regions(
                    self.anchor(),
                    self.config.orientation,
                    self.config.folded,
                    self.spacing_px(),
                    self.lead_length().to_pixels() as i32,
                    BodyDims::from_sheet(&self.sheet),
                );
                self.body = Some(regions);
                regions
            }
        }
    }

    /// Whether the body cache is currently warm. Lets hosts (and tests)
    /// observe that repeated draws do not recompute geometry.
    pub fn is_body_cached(&self) -> bool {
        self.body.is_some()
    }

    /// The label the draw pass renders, per display mode.
    pub fn label_text(&self) -> String {
        match self.display() {
            DisplayMode::Name => self.config.name.clone(),
            DisplayMode::Value => self.config.value.clone(),
            DisplayMode::Both => format!("{}  {}", self.config.name, self.config.value),
            DisplayMode::None => String::new(),
        }
    }

    /// Re-run the layout engine, preserving the anchor. A pin-count
    /// change reallocates the array, discarding any previously adjusted
    /// non-anchor positions.
    fn update_control_points(&mut self) {
        let anchor = self.anchor();
        self.control_points = pin_positions(
            anchor,
            self.config.orientation,
            self.config.folded,
            self.config.pin_count,
            self.spacing_px(),
        );
    }
}

impl Default for TubeElement {
    fn default() -> Self {
        Self::new()
    }
}
