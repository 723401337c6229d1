//! Control-point layout engine.
//!
//! Pure position math: configuration plus anchor in, ordered pin
//! positions out. The element owns the array and its invalidation; this
//! module never touches cell state.
//!
//! Two topologies exist:
//!
//! - **Folded** — the leads are bent down against the board, so every pin
//!   exits in a single linear chain, one spacing step per pin.
//! - **Unfolded** — the tube stands on its leads; only the first three
//!   pins get distinct positions and any further pins sit on the anchor
//!   (see `PinArrangement` for the arrangement knob that is expected to
//!   take over here eventually).

use log::debug;

use crate::config::{Orientation, PinCount};
use crate::geom::Point;

/// Chain direction for one spacing step, per orientation.
fn chain_step(orientation: Orientation, spacing: i32) -> (i32, i32) {
    match orientation {
        Orientation::Deg0 => (0, spacing),
        Orientation::Deg90 => (-spacing, 0),
        Orientation::Deg180 => (0, -spacing),
        Orientation::Deg270 => (spacing, 0),
    }
}

/// Compute the ordered pin positions for a cell.
///
/// `positions[0]` is always exactly `anchor`; the returned vector length
/// always equals `pin_count.pins()`. `spacing` is the configured lead
/// spacing converted to pixels.
pub fn pin_positions(
    anchor: Point,
    orientation: Orientation,
    folded: bool,
    pin_count: PinCount,
    spacing: i32,
) -> Vec<Point> {
    let count = pin_count.pins();
    let mut points = vec![anchor; count];
    let (dx, dy) = chain_step(orientation, spacing);

    if folded {
        for (i, p) in points.iter_mut().enumerate().skip(1) {
            *p = anchor.offset(i as i32 * dx, i as i32 * dy);
        }
    } else {
        // Only the triode-style first three pins are placed; the rest
        // stay collapsed on the anchor.
        points[1] = anchor.offset(dx, dy);
        points[2] = anchor.offset(2 * dx, 2 * dy);
    }

    debug!(
        "laid out {count} pins at {anchor:?}, {orientation}, folded={folded}, spacing={spacing}px"
    );
    points
}
