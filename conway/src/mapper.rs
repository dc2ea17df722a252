// mapper.rs - Pointer coordinates to cells, and click stamps

use tracing::debug;

use crate::painter::{CanvasLayout, PixelRect, Point};
use crate::universe::Universe;

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

/// What a click toggles, relative to the clicked cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamp {
    /// Just the clicked cell.
    Single,
    /// The clicked cell and the cells directly above and below (Shift).
    VerticalBar,
    /// A glider anchored at the clicked cell (Alt).
    Glider,
}

impl Stamp {
    /// Shift takes precedence over Alt.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Stamp::VerticalBar
        } else if modifiers.alt {
            Stamp::Glider
        } else {
            Stamp::Single
        }
    }

    /// `(row, col)` offsets toggled by this stamp, clicked cell first.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Stamp::Single => &[(0, 0)],
            Stamp::VerticalBar => &[(0, 0), (1, 0), (-1, 0)],
            Stamp::Glider => &[(0, 0), (-1, 0), (-2, 0), (0, 1), (-1, 2)],
        }
    }
}

/// Maps a pointer position to the cell under it.
///
/// `pointer` and `displayed` are in the host's logical coordinates; the
/// displayed rectangle may be scaled relative to the canvas's native pixel
/// buffer described by `layout`. Each axis is clamped to the grid.
pub fn pixel_to_cell(pointer: Point, displayed: PixelRect, layout: &CanvasLayout) -> (u32, u32) {
    let scale_x = layout.pixel_width() / displayed.width;
    let scale_y = layout.pixel_height() / displayed.height;

    let canvas_left = (pointer.x - displayed.x) * scale_x;
    let canvas_top = (pointer.y - displayed.y) * scale_y;

    let row = clamp_cell((canvas_top / layout.pitch()).floor(), layout.height);
    let col = clamp_cell((canvas_left / layout.pitch()).floor(), layout.width);
    (row, col)
}

fn clamp_cell(position: f32, cells: u32) -> u32 {
    let last = cells.saturating_sub(1);
    if position.is_nan() || position <= 0.0 {
        0
    } else if position >= last as f32 {
        last
    } else {
        position as u32
    }
}

/// Toggles every cell of the stamp chosen by `modifiers` around
/// `(row, col)`. All toggles land before the call returns, so the caller
/// repaints once per click.
pub fn apply_stamp(universe: &mut Universe, row: u32, col: u32, modifiers: Modifiers) -> Stamp {
    let stamp = Stamp::from_modifiers(modifiers);
    let (row, col) = (i64::from(row), i64::from(col));
    for &(dr, dc) in stamp.offsets() {
        universe.toggle_cell(row + dr, col + dc);
    }
    debug!(?stamp, row, col, "applied stamp");
    stamp
}
