//! Draw pass: turns a cell plus host state into an ordered list of draw
//! commands.
//!
//! The engine never talks to a canvas directly. Like the symbol paths the
//! layout pipeline hands to the signal-flow renderer, the draw pass emits
//! serializable [`DrawOp`] values and the host rasterizes them in order.
//! No geometry decisions happen here — positions come from the cell's
//! control points and cached body regions.
//!
//! Two entry points: [`draw`] paints one placed cell (body, leads,
//! label); [`draw_icon`] paints the fixed palette thumbnail, independent
//! of any instance.

use serde::{Deserialize, Serialize};

use crate::config::Orientation;
use crate::element::TubeElement;
use crate::geom::{Ellipse, Point, Rect, Region};
use crate::style::{Color, ElementState, StyleSheet, Theme, MAX_ALPHA};
use crate::units::{closest_even, closest_odd};

/// One draw command, executed by the host in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Begin compositing subsequent ops at `alpha` (0..=1) opacity.
    PushAlpha { alpha: f32 },
    /// Restore the composite active before the matching push.
    PopAlpha,
    FillRegion { region: Region, color: Color },
    StrokeRegion { region: Region, width: i32, color: Color },
    Line { from: Point, to: Point, width: i32, color: Color },
    FillCircle { center: Point, diameter: i32, color: Color },
    StrokeCircle { center: Point, diameter: i32, width: i32, color: Color },
    /// Draw `text` with its baseline starting at `origin`.
    Text { text: String, origin: Point, color: Color },
}

/// Measured extents of a rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub width: i32,
    pub height: i32,
    pub ascent: i32,
}

/// Text measurement collaborator, supplied by the host's font stack.
pub trait TextMetrics {
    fn measure(&self, text: &str) -> TextBounds;
}

/// Fixed-advance metrics for headless use and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics {
    pub char_width: i32,
    pub height: i32,
    pub ascent: i32,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            char_width: 7,
            height: 14,
            ascent: 11,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str) -> TextBounds {
        TextBounds {
            width: self.char_width * text.chars().count() as i32,
            height: self.height,
            ascent: self.ascent,
        }
    }
}

/// Host-side inputs to one paint request. Never stored on the cell.
pub struct RenderCtx<'a> {
    pub state: ElementState,
    /// Ghost/preview rendering: transparent fills, theme outline strokes.
    pub outline_mode: bool,
    pub theme: Theme,
    /// Viewport clip; a cell whose control points all fall outside is
    /// skipped entirely.
    pub clip: Option<Rect>,
    pub metrics: &'a dyn TextMetrics,
}

impl<'a> RenderCtx<'a> {
    pub fn new(metrics: &'a dyn TextMetrics) -> Self {
        Self {
            state: ElementState::Normal,
            outline_mode: false,
            theme: Theme::default(),
            clip: None,
            metrics,
        }
    }
}

/// Paint one cell. Returns the ordered op list; empty when the cell is
/// fully outside the clip region.
pub fn draw(element: &mut TubeElement, ctx: &RenderCtx<'_>) -> Vec<DrawOp> {
    if let Some(clip) = ctx.clip {
        let visible = element
            .control_points()
            .iter()
            .any(|p| clip.contains_point(*p));
        if !visible {
            return Vec::new();
        }
    }

    let sheet = *element.sheet();
    let alpha = element.alpha();
    let [main, _tab] = element.body();

    let mut ops = Vec::new();
    let translucent = alpha < MAX_ALPHA;
    if translucent {
        ops.push(DrawOp::PushAlpha {
            alpha: alpha as f32 / MAX_ALPHA as f32,
        });
    }

    let body_fill = if ctx.outline_mode {
        Color::TRANSPARENT
    } else {
        element.body_color()
    };
    ops.push(DrawOp::FillRegion {
        region: main,
        color: body_fill,
    });

    if element.folded() {
        draw_folded_leads(element, ctx, &sheet, &mut ops);
    } else if !ctx.outline_mode {
        draw_pin_circles(element, &sheet, &mut ops);
    }

    draw_label(element, ctx, &sheet, main, &mut ops);

    if translucent {
        ops.push(DrawOp::PopAlpha);
    }
    ops
}

/// Bordered leads without a separate outline primitive: a full-thickness
/// stroke in the border color, then a stroke two pixels thinner in the
/// fill color on top.
fn draw_folded_leads(
    element: &TubeElement,
    ctx: &RenderCtx<'_>,
    sheet: &StyleSheet,
    ops: &mut Vec<DrawOp>,
) {
    let lt = closest_odd(sheet.lead_thickness.to_pixels());
    let ll = element.lead_length().to_pixels() as i32;

    let (fill, border) = if ctx.outline_mode {
        let border = if ctx.state.is_highlighted() {
            sheet.selection_color
        } else {
            ctx.theme.outline_color
        };
        (Color::TRANSPARENT, border)
    } else {
        (sheet.metal_color, sheet.metal_color.darker())
    };

    for &p in element.control_points() {
        let to = match element.orientation() {
            Orientation::Deg0 => Point::new(p.x + ll - lt / 2, p.y),
            Orientation::Deg90 => Point::new(p.x, p.y + ll - lt / 2),
            Orientation::Deg180 => Point::new(p.x - ll - lt / 2, p.y),
            Orientation::Deg270 => Point::new(p.x, p.y - ll),
        };
        ops.push(DrawOp::Line {
            from: p,
            to,
            width: lt,
            color: border,
        });
        ops.push(DrawOp::Line {
            from: p,
            to,
            width: lt - 2,
            color: fill,
        });
    }
}

fn draw_pin_circles(element: &TubeElement, sheet: &StyleSheet, ops: &mut Vec<DrawOp>) {
    let pin_size = closest_even(sheet.pin_size.to_pixels());
    for &p in element.control_points() {
        ops.push(DrawOp::FillCircle {
            center: p,
            diameter: pin_size,
            color: sheet.pin_color,
        });
        ops.push(DrawOp::StrokeCircle {
            center: p,
            diameter: pin_size,
            width: 1,
            color: sheet.pin_border_color,
        });
    }
}

fn draw_label(
    element: &TubeElement,
    ctx: &RenderCtx<'_>,
    sheet: &StyleSheet,
    main: Region,
    ops: &mut Vec<DrawOp>,
) {
    let color = if ctx.state.is_highlighted() {
        sheet.label_color_selected
    } else if ctx.outline_mode {
        ctx.theme.outline_color
    } else {
        sheet.label_color
    };

    let text = element.label_text();
    let measured = ctx.metrics.measure(&text);
    let bounds = main.bounds();
    let origin = Point::new(
        bounds.x + (bounds.w - measured.width) / 2,
        bounds.y + (bounds.h - measured.height) / 2 + measured.ascent,
    );
    ops.push(DrawOp::Text {
        text,
        origin,
        color,
    });
}

/// Paint the palette thumbnail: tab with hole over a body square, three
/// leads below. Pure glyph — no instance state, proportional to the
/// requested icon size.
pub fn draw_icon(width: i32, height: i32, sheet: &StyleSheet) -> Vec<DrawOp> {
    let margin = 2 * width / 32;
    let body_size = width * 5 / 10;
    let tab_size = body_size * 6 / 10;
    let hole_size = 5 * width / 32;

    let tab = Region::HoledRect {
        outer: Rect::new((width - body_size) / 2, margin, body_size, tab_size),
        hole: Ellipse::new(
            width / 2 - hole_size / 2,
            margin + tab_size / 2 - hole_size / 2,
            hole_size,
            hole_size,
        ),
    };
    let body = Rect::new((width - body_size) / 2, margin + tab_size, body_size, body_size);

    let lead_top = margin + tab_size + body_size;
    let lead = |x: i32| DrawOp::Line {
        from: Point::new(x, lead_top),
        to: Point::new(x, height - margin),
        width: 2,
        color: sheet.metal_color,
    };

    vec![
        DrawOp::StrokeRegion {
            region: tab,
            width: 1,
            color: sheet.border_color,
        },
        DrawOp::FillRegion {
            region: Region::Rect(body),
            color: sheet.body_color,
        },
        DrawOp::StrokeRegion {
            region: Region::Rect(body),
            width: 1,
            color: sheet.border_color,
        },
        lead(width / 2),
        lead(width / 2 - body_size / 3),
        lead(width / 2 + body_size / 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayMode, Orientation};
    use crate::geom::Point;
    use crate::style::StyleSheet;

    fn ctx(metrics: &FixedMetrics) -> RenderCtx<'_> {
        RenderCtx::new(metrics)
    }

    #[test]
    fn clipped_cell_draws_nothing() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        element.set_control_point(0, Point::new(1000, 1000));
        // set_control_point moves only the anchor; re-run layout so every
        // pin follows before clipping against them.
        element.set_orientation(Orientation::Deg0);

        let mut c = ctx(&metrics);
        c.clip = Some(Rect::new(0, 0, 200, 200));
        assert!(draw(&mut element, &c).is_empty());

        c.clip = Some(Rect::new(900, 900, 300, 300));
        assert!(!draw(&mut element, &c).is_empty());
    }

    #[test]
    fn unfolded_draw_has_body_pins_and_label() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        let ops = draw(&mut element, &ctx(&metrics));

        assert!(matches!(ops[0], DrawOp::FillRegion { .. }));
        let fills = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count();
        let strokes = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
            .count();
        assert_eq!(fills, 8);
        assert_eq!(strokes, 8);
        assert!(matches!(ops.last(), Some(DrawOp::Text { .. })));
    }

    #[test]
    fn outline_mode_skips_pin_circles() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        let mut c = ctx(&metrics);
        c.outline_mode = true;
        let ops = draw(&mut element, &c);

        assert!(!ops.iter().any(|op| matches!(op, DrawOp::FillCircle { .. })));
        let Some(DrawOp::FillRegion { color, .. }) = ops.first() else {
            panic!("first op must fill the body");
        };
        assert_eq!(*color, Color::TRANSPARENT);
    }

    #[test]
    fn folded_leads_are_two_pass() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        element.set_folded(true);
        let ops = draw(&mut element, &ctx(&metrics));

        let lines: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { width, color, .. } => Some((*width, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 16); // 8 pins × 2 passes

        let sheet = StyleSheet::default();
        let lt = closest_odd(sheet.lead_thickness.to_pixels());
        for pair in lines.chunks(2) {
            assert_eq!(pair[0], (lt, sheet.metal_color.darker()));
            assert_eq!(pair[1], (lt - 2, sheet.metal_color));
        }
    }

    #[test]
    fn outline_folded_leads_use_selection_color_when_dragging() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        element.set_folded(true);
        let mut c = ctx(&metrics);
        c.outline_mode = true;
        c.state = ElementState::Dragging;
        let ops = draw(&mut element, &c);

        let sheet = StyleSheet::default();
        let borders: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { width, color, .. } if *width > 2 => Some(*color),
                _ => None,
            })
            .collect();
        assert!(!borders.is_empty());
        assert!(borders.iter().all(|c| *c == sheet.selection_color));
    }

    #[test]
    fn translucent_cell_is_wrapped_in_composite_ops() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        element.set_alpha(50);
        let ops = draw(&mut element, &ctx(&metrics));
        assert_eq!(ops.first(), Some(&DrawOp::PushAlpha { alpha: 0.5 }));
        assert_eq!(ops.last(), Some(&DrawOp::PopAlpha));
    }

    #[test]
    fn label_is_centered_in_body_bounds() {
        let metrics = FixedMetrics::default();
        let mut element = TubeElement::new();
        element.set_name("V1");
        element.set_display(DisplayMode::Name);
        let ops = draw(&mut element, &ctx(&metrics));

        let bounds = element.body()[0].bounds();
        let measured = metrics.measure("V1");
        let Some(DrawOp::Text { text, origin, .. }) = ops.last() else {
            panic!("label must be the final op");
        };
        assert_eq!(text, "V1");
        assert_eq!(origin.x, bounds.x + (bounds.w - measured.width) / 2);
        assert_eq!(
            origin.y,
            bounds.y + (bounds.h - measured.height) / 2 + measured.ascent
        );
    }

    #[test]
    fn icon_glyph_structure() {
        let sheet = StyleSheet::default();
        let ops = draw_icon(32, 32, &sheet);
        assert_eq!(ops.len(), 6);
        assert!(matches!(
            ops[0],
            DrawOp::StrokeRegion {
                region: Region::HoledRect { .. },
                ..
            }
        ));
        let leads = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { width: 2, .. }))
            .count();
        assert_eq!(leads, 3);
    }

    #[test]
    fn icon_proportions_at_reference_size() {
        let sheet = StyleSheet::default();
        let ops = draw_icon(32, 32, &sheet);
        // margin 2, body 16, tab 9, hole 5
        let DrawOp::FillRegion {
            region: Region::Rect(body),
            ..
        } = ops[1]
        else {
            panic!("second op must fill the body square");
        };
        assert_eq!(body, Rect::new(8, 11, 16, 16));
    }
}
