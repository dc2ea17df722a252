// surface.rs - egui painter as a drawing surface for the canvas painter

use conway::{Color, PixelRect, Point, Surface};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Shape, Stroke};

pub fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Draws canvas-pixel geometry into a screen rectangle, scaling uniformly
/// from the canvas's native size.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    scale: f32,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a egui::Painter, screen: Rect, canvas_width: f32) -> Self {
        Self {
            painter,
            origin: screen.min,
            scale: screen.width() / canvas_width,
        }
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        Pos2::new(self.origin.x + point.x * self.scale, self.origin.y + point.y * self.scale)
    }
}

impl Surface for EguiSurface<'_> {
    fn stroke_lines(&mut self, lines: &[[Point; 2]], color: Color) {
        let stroke = Stroke::new(self.scale, to_color32(color));
        let shapes = lines
            .iter()
            .map(|&[a, b]| Shape::line_segment([self.to_screen(a), self.to_screen(b)], stroke));
        self.painter.extend(shapes.collect::<Vec<_>>());
    }

    fn fill_rects(&mut self, rects: &[PixelRect], color: Color) {
        let fill = to_color32(color);
        let shapes = rects.iter().map(|r| {
            let min = self.to_screen(Point { x: r.x, y: r.y });
            let max = self.to_screen(Point { x: r.x + r.width, y: r.y + r.height });
            Shape::rect_filled(Rect::from_min_max(min, max), 0.0, fill)
        });
        self.painter.extend(shapes.collect::<Vec<_>>());
    }
}
