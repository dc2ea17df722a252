// painter.rs - Draws the grid and its cells onto an abstract 2D surface

use crate::bitgrid::bit_is_set;
use crate::color::Color;

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// An axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Anything the painter can draw on.
///
/// Each call is one paint-state change: the whole batch shares `color`.
pub trait Surface {
    fn stroke_lines(&mut self, lines: &[[Point; 2]], color: Color);
    fn fill_rects(&mut self, rects: &[PixelRect], color: Color);
}

/// Grid dimensions plus the pixel size of one cell.
///
/// Cells are `cell_size` pixels square and separated by 1-pixel gridlines,
/// so the canvas measures `(cell_size + 1) * n + 1` pixels along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
}

impl CanvasLayout {
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        Self { width, height, cell_size }
    }

    /// Distance between consecutive gridlines.
    pub fn pitch(&self) -> f32 {
        self.cell_size + 1.0
    }

    pub fn pixel_width(&self) -> f32 {
        self.pitch() * self.width as f32 + 1.0
    }

    pub fn pixel_height(&self) -> f32 {
        self.pitch() * self.height as f32 + 1.0
    }

    /// The square a cell is painted into.
    pub fn cell_rect(&self, row: u32, col: u32) -> PixelRect {
        PixelRect {
            x: col as f32 * self.pitch() + 1.0,
            y: row as f32 * self.pitch() + 1.0,
            width: self.cell_size,
            height: self.cell_size,
        }
    }
}

/// Strokes `width + 1` vertical and `height + 1` horizontal gridlines.
pub fn draw_grid<S: Surface + ?Sized>(surface: &mut S, layout: &CanvasLayout, grid_color: Color) {
    let pitch = layout.pitch();
    let right = layout.pixel_width();
    let bottom = layout.pixel_height();

    let vertical = (0..=layout.width).map(|i| {
        let x = i as f32 * pitch + 1.0;
        [Point { x, y: 0.0 }, Point { x, y: bottom }]
    });
    let horizontal = (0..=layout.height).map(|j| {
        let y = j as f32 * pitch + 1.0;
        [Point { x: 0.0, y }, Point { x: right, y }]
    });

    let lines: Vec<[Point; 2]> = vertical.chain(horizontal).collect();
    surface.stroke_lines(&lines, grid_color);
}

/// Paints every cell of the packed `cells` view: all live cells in one
/// batch, then all dead cells in a second. Empty batches are skipped.
pub fn draw_cells<S: Surface + ?Sized>(
    surface: &mut S,
    cells: &[u8],
    layout: &CanvasLayout,
    alive_color: Color,
    dead_color: Color,
) {
    let mut alive = Vec::new();
    let mut dead = Vec::new();

    for row in 0..layout.height {
        let base = row as usize * layout.width as usize;
        for col in 0..layout.width {
            let rect = layout.cell_rect(row, col);
            if bit_is_set(cells, base + col as usize) {
                alive.push(rect);
            } else {
                dead.push(rect);
            }
        }
    }

    if !alive.is_empty() {
        surface.fill_rects(&alive, alive_color);
    }
    if !dead.is_empty() {
        surface.fill_rects(&dead, dead_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::Universe;

    #[derive(Debug, PartialEq)]
    enum Call {
        Lines(usize, Color),
        Rects(Vec<PixelRect>, Color),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        lines: Vec<[Point; 2]>,
    }

    impl Surface for Recorder {
        fn stroke_lines(&mut self, lines: &[[Point; 2]], color: Color) {
            self.calls.push(Call::Lines(lines.len(), color));
            self.lines.extend_from_slice(lines);
        }

        fn fill_rects(&mut self, rects: &[PixelRect], color: Color) {
            self.calls.push(Call::Rects(rects.to_vec(), color));
        }
    }

    #[test]
    fn layout_geometry() {
        let layout = CanvasLayout::new(64, 32, 5.0);
        assert_eq!(layout.pixel_width(), 385.0);
        assert_eq!(layout.pixel_height(), 193.0);
        assert_eq!(
            layout.cell_rect(2, 3),
            PixelRect { x: 19.0, y: 13.0, width: 5.0, height: 5.0 }
        );
    }

    #[test]
    fn grid_is_one_stroke_batch() {
        let layout = CanvasLayout::new(4, 3, 5.0);
        let mut surface = Recorder::default();
        draw_grid(&mut surface, &layout, Color::LIGHT_GRAY);

        assert_eq!(surface.calls, vec![Call::Lines(5 + 4, Color::LIGHT_GRAY)]);
        // First vertical line, last horizontal line
        assert_eq!(surface.lines[0], [Point { x: 1.0, y: 0.0 }, Point { x: 1.0, y: 19.0 }]);
        assert_eq!(surface.lines[8], [Point { x: 0.0, y: 19.0 }, Point { x: 25.0, y: 19.0 }]);
    }

    #[test]
    fn cells_are_batched_alive_then_dead() {
        let mut universe = Universe::new(4, 2).unwrap();
        universe.toggle_cell(0, 1);
        universe.toggle_cell(1, 3);
        let layout = CanvasLayout::new(4, 2, 5.0);

        let mut surface = Recorder::default();
        draw_cells(&mut surface, universe.cells(), &layout, Color::BLACK, Color::WHITE);

        assert_eq!(surface.calls.len(), 2);
        match &surface.calls[..] {
            [Call::Rects(alive, Color::BLACK), Call::Rects(dead, Color::WHITE)] => {
                assert_eq!(alive, &vec![layout.cell_rect(0, 1), layout.cell_rect(1, 3)]);
                assert_eq!(dead.len(), 6);
            }
            other => panic!("unexpected draw calls {other:?}"),
        }
    }

    #[test]
    fn empty_batches_are_skipped() {
        let universe = Universe::new(8, 8).unwrap();
        let layout = CanvasLayout::new(8, 8, 3.0);
        let mut surface = Recorder::default();
        draw_cells(&mut surface, universe.cells(), &layout, Color::BLACK, Color::WHITE);

        match &surface.calls[..] {
            [Call::Rects(dead, Color::WHITE)] => assert_eq!(dead.len(), 64),
            other => panic!("unexpected draw calls {other:?}"),
        }
    }
}
