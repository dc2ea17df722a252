// ui.rs - eframe front end: controls, FPS readout and the cell canvas

use conway::{Modifiers, PATTERNS, PixelRect, Point, draw_cells, draw_grid};
use eframe::egui;
use egui::Vec2;
use tracing::debug;

use crate::app::LifeApp;
use crate::surface::EguiSurface;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Display-refresh callback: at most one step per frame, before painting
        let now_ms = ctx.input(|i| i.time) * 1000.0;
        self.on_frame(now_ms);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_playing() { "⏸ Pause" } else { "▶ Play" };
                if ui.button(button_text).clicked() {
                    self.toggle_play();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Stamp").clicked() {
                    self.apply_selected_pattern();
                }
            });

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Slowdown:");
                let mut value = self.speed_value;
                let range = self.config.speed_control.range();
                if ui.add(egui::Slider::new(&mut value, range)).changed() {
                    self.set_speed(value);
                }
                ui.label(format!("{}%", self.speed_percent()));
            });

            ui.label("Click toggles a cell, Shift+click a vertical bar, Alt+click a glider.");
            ui.separator();

            let layout = self.config.layout;
            let size = Vec2::new(layout.pixel_width(), layout.pixel_height()) * self.config.zoom;
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let modifiers = ctx.input(|i| Modifiers {
                        shift: i.modifiers.shift,
                        alt: i.modifiers.alt,
                    });
                    let displayed = PixelRect {
                        x: response.rect.min.x,
                        y: response.rect.min.y,
                        width: response.rect.width(),
                        height: response.rect.height(),
                    };
                    let stamp = self.click(Point { x: pos.x, y: pos.y }, displayed, modifiers);
                    debug!(?stamp, "canvas clicked");
                }
            }

            // Painted after any step or stamp above, so each frame shows the
            // latest generation exactly once
            let palette = self.config.palette;
            let mut surface = EguiSurface::new(&painter, response.rect, layout.pixel_width());
            draw_grid(&mut surface, &layout, palette.grid);
            draw_cells(&mut surface, self.universe.cells(), &layout, palette.alive, palette.dead);

            ui.separator();
            ui.label(self.status_line());
            if let Some(stats) = self.fps {
                ui.monospace(stats.to_string());
            }
        });

        // Keep the refresh callback registered only while playing
        if self.is_playing() {
            ctx.request_repaint();
        }
    }
}
