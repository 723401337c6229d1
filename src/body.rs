//! Body geometry generator.
//!
//! Produces the two renderable regions of a cell — the main body outline
//! and the mounting-tab region — from configuration plus anchor. Pure
//! math; the lazy cache lives on [`crate::element::TubeElement`].
//!
//! Each of the four orientations has its own closed-form coordinates
//! rather than a shared rotation transform: the formulas are short, and
//! keeping them explicit makes the integer-pixel output easy to audit
//! against the canvas.
//!
//! The folded body sits *beyond* the lead length, perpendicular to the
//! pin chain (0°: chain runs down, body extends right; 90°: chain left,
//! body down; 180°: chain up, body left; 270°: chain right, body up).
//! The unfolded body straddles the lead axis one spacing step from the
//! anchor.

use log::debug;

use crate::config::Orientation;
use crate::geom::{Ellipse, Point, Rect, Region};
use crate::style::StyleSheet;
use crate::units::closest_odd;

/// Mounting-tab dimensions. The tab feature is currently disabled — the
/// regions are still produced so renderers and hit-testing keep a stable
/// two-region contract, they are just zero-sized.
const TAB_THICKNESS: i32 = 0;
const TAB_HEIGHT: i32 = 0;
const TAB_HOLE_DIAMETER: i32 = 0;

/// Body dimensions in pixels, pre-rounded to odd integers so centered
/// strokes render symmetrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyDims {
    pub width: i32,
    pub thickness: i32,
    pub height: i32,
}

impl BodyDims {
    pub fn from_sheet(sheet: &StyleSheet) -> Self {
        Self {
            width: closest_odd(sheet.body_width.to_pixels()),
            thickness: closest_odd(sheet.body_thickness.to_pixels()),
            height: closest_odd(sheet.body_height.to_pixels()),
        }
    }
}

/// Compute `[main, tab]` body regions for a cell.
///
/// `spacing` and `lead_length` are pixel lengths. The main region is the
/// filled body outline; the tab region is the (currently zero-sized)
/// mounting tab, which in the folded topology carries a punched hole.
pub fn body_regions(
    anchor: Point,
    orientation: Orientation,
    folded: bool,
    spacing: i32,
    lead_length: i32,
    dims: BodyDims,
) -> [Region; 2] {
    let Point { x, y } = anchor;
    let BodyDims {
        width: w,
        thickness: t,
        height: h,
    } = dims;
    let ll = lead_length;

    debug!("computing body regions at {anchor:?}, {orientation}, folded={folded}");

    match orientation {
        Orientation::Deg0 => {
            if folded {
                let main = Rect::new(x + ll, y + spacing - w / 2, h, w);
                let tab = Rect::new(x + ll + h, y + spacing - w / 2, TAB_HEIGHT, w);
                let hole = Ellipse::new(
                    x + ll + h + TAB_HEIGHT / 2 - TAB_HOLE_DIAMETER / 2,
                    y + spacing - TAB_HOLE_DIAMETER / 2,
                    TAB_HOLE_DIAMETER,
                    TAB_HOLE_DIAMETER,
                );
                [Region::Rect(main), Region::HoledRect { outer: tab, hole }]
            } else {
                let main = Rect::new(x - t / 2, y + spacing - w / 2, t, w);
                let tab = Rect::new(x + t / 2 - TAB_THICKNESS, y + spacing - w / 2, TAB_THICKNESS, w);
                [Region::Rect(main), Region::Rect(tab)]
            }
        }
        Orientation::Deg90 => {
            if folded {
                let main = Rect::new(x - spacing - w / 2, y + ll, w, h);
                let tab = Rect::new(x - spacing - w / 2, y + ll + h, w, TAB_HEIGHT);
                let hole = Ellipse::new(
                    x - spacing - TAB_HOLE_DIAMETER / 2,
                    y + ll + h + TAB_HEIGHT / 2 - TAB_HOLE_DIAMETER / 2,
                    TAB_HOLE_DIAMETER,
                    TAB_HOLE_DIAMETER,
                );
                [Region::Rect(main), Region::HoledRect { outer: tab, hole }]
            } else {
                let main = Rect::new(x - spacing - w / 2, y - t / 2, w, t);
                let tab = Rect::new(x - spacing - w / 2, y + t / 2 - TAB_THICKNESS, w, TAB_THICKNESS);
                [Region::Rect(main), Region::Rect(tab)]
            }
        }
        Orientation::Deg180 => {
            if folded {
                let main = Rect::new(x - ll - h, y - spacing - w / 2, h, w);
                let tab = Rect::new(x - ll - h - TAB_HEIGHT, y - spacing - w / 2, TAB_HEIGHT, w);
                let hole = Ellipse::new(
                    x - ll - h - TAB_HEIGHT / 2 - TAB_HOLE_DIAMETER / 2,
                    y - spacing - TAB_HOLE_DIAMETER / 2,
                    TAB_HOLE_DIAMETER,
                    TAB_HOLE_DIAMETER,
                );
                [Region::Rect(main), Region::HoledRect { outer: tab, hole }]
            } else {
                let main = Rect::new(x - t / 2, y - spacing - w / 2, t, w);
                let tab = Rect::new(x - t / 2, y - spacing - w / 2, TAB_THICKNESS, w);
                [Region::Rect(main), Region::Rect(tab)]
            }
        }
        Orientation::Deg270 => {
            if folded {
                let main = Rect::new(x + spacing - w / 2, y - ll - h, w, h);
                let tab = Rect::new(x + spacing - w / 2, y - ll - h - TAB_HEIGHT, w, TAB_HEIGHT);
                let hole = Ellipse::new(
                    x + spacing - TAB_HOLE_DIAMETER / 2,
                    y - ll - h - TAB_HEIGHT / 2 - TAB_HOLE_DIAMETER / 2,
                    TAB_HOLE_DIAMETER,
                    TAB_HOLE_DIAMETER,
                );
                [Region::Rect(main), Region::HoledRect { outer: tab, hole }]
            } else {
                let main = Rect::new(x + spacing - w / 2, y - t / 2, w, t);
                let tab = Rect::new(x + spacing - w / 2, y - t / 2, w, TAB_THICKNESS);
                [Region::Rect(main), Region::Rect(tab)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Point = Point::new(200, 300);

    fn dims() -> BodyDims {
        BodyDims::from_sheet(&StyleSheet::default())
    }

    #[test]
    fn default_dims_are_odd() {
        let d = dims();
        assert_eq!(d.width % 2, 1);
        assert_eq!(d.thickness % 2, 1);
        assert_eq!(d.height % 2, 1);
        // 0.4 in, 4.5 mm, 9 mm at 200 px/in
        assert_eq!(d.width, 81);
        assert_eq!(d.thickness, 35);
        assert_eq!(d.height, 71);
    }

    #[test]
    fn unfolded_main_straddles_lead_axis() {
        let d = dims();
        let [main, tab] = body_regions(ANCHOR, Orientation::Deg0, false, 20, 40, d);
        // Thickness along x centered on the anchor column, width along y
        // centered on the middle pin.
        assert_eq!(
            main.bounds(),
            Rect::new(200 - d.thickness / 2, 300 + 20 - d.width / 2, d.thickness, d.width)
        );
        assert!(tab.is_empty());
    }

    #[test]
    fn folded_main_sits_beyond_lead() {
        let d = dims();
        let [main, tab] = body_regions(ANCHOR, Orientation::Deg0, true, 20, 40, d);
        assert_eq!(
            main.bounds(),
            Rect::new(240, 300 + 20 - d.width / 2, d.height, d.width)
        );
        assert!(matches!(tab, Region::HoledRect { .. }));
        assert!(tab.is_empty());
    }

    #[test]
    fn quarter_turns_mirror_each_other() {
        let d = dims();
        let [down, _] = body_regions(ANCHOR, Orientation::Deg90, true, 20, 40, d);
        assert_eq!(down.bounds(), Rect::new(200 - 20 - d.width / 2, 340, d.width, d.height));
        let [left, _] = body_regions(ANCHOR, Orientation::Deg180, true, 20, 40, d);
        assert_eq!(
            left.bounds(),
            Rect::new(200 - 40 - d.height, 300 - 20 - d.width / 2, d.height, d.width)
        );
        let [up, _] = body_regions(ANCHOR, Orientation::Deg270, true, 20, 40, d);
        assert_eq!(
            up.bounds(),
            Rect::new(200 + 20 - d.width / 2, 300 - 40 - d.height, d.width, d.height)
        );
    }

    #[test]
    fn every_branch_yields_two_regions() {
        let d = dims();
        for orientation in Orientation::ALL {
            for folded in [false, true] {
                let regions = body_regions(ANCHOR, orientation, folded, 20, 40, d);
                assert!(!regions[0].is_empty());
                assert!(regions[1].is_empty());
            }
        }
    }
}
