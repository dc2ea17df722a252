// app.rs - Canvas app state: universe, pacer and the actions the UI triggers

use conway::{
    FpsStats, FramePacer, Modifiers, PATTERNS, PixelRect, Point, Result, Stamp, Universe,
    apply_stamp, pixel_to_cell, speed_percent,
};
use tracing::info;

use crate::config::CanvasConfig;

pub struct LifeApp {
    pub config: CanvasConfig,
    pub universe: Universe,
    pub pacer: FramePacer,
    pub speed_value: f64,
    pub selected_pattern: usize,
    pub fps: Option<FpsStats>,
    playing: bool,
}

impl LifeApp {
    pub fn new(config: CanvasConfig) -> Result<Self> {
        let layout = config.layout;
        let universe = Universe::with_layout(layout.width, layout.height, config.initial)?;
        let pacer = FramePacer::new(config.speed_control.divisor_for(config.speed));
        Ok(Self {
            speed_value: config.speed,
            playing: !config.start_paused,
            config,
            universe,
            pacer,
            selected_pattern: 0,
            fps: None,
        })
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            info!("playing");
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            info!(generation = self.universe.generation(), "paused");
        }
    }

    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Runs once per display refresh while playing. Returns whether the
    /// universe stepped.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> bool {
        if !self.playing {
            return false;
        }
        if let Some(stats) = self.pacer.record_frame(timestamp_ms) {
            self.fps = Some(stats);
        }
        let step = self.pacer.on_display_tick();
        if step {
            self.universe.step();
        }
        step
    }

    /// Applies the slider value through the quadratic speed curve.
    pub fn set_speed(&mut self, value: f64) {
        self.speed_value = value;
        let divisor = self.config.speed_control.divisor_for(value);
        self.pacer.set_speed(divisor);
        info!(divisor, percent = speed_percent(divisor), "speed set");
    }

    pub fn speed_percent(&self) -> u32 {
        speed_percent(self.pacer.speed_divisor())
    }

    /// Pauses, then toggles the stamp under `pointer` as one batch.
    pub fn click(&mut self, pointer: Point, displayed: PixelRect, modifiers: Modifiers) -> Stamp {
        self.pause();
        let (row, col) = pixel_to_cell(pointer, displayed, &self.config.layout);
        apply_stamp(&mut self.universe, row, col, modifiers)
    }

    pub fn randomize(&mut self) {
        self.universe.randomize();
    }

    pub fn clear(&mut self) {
        self.universe.reset_cells();
    }

    /// Stamps the selected pattern at the grid center.
    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            let (rows, cols) = pattern.extent();
            let row = (i64::from(self.universe.height()) - rows) / 2;
            let col = (i64::from(self.universe.width()) - cols) / 2;
            self.universe.stamp_pattern(pattern, row, col);
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "Generation: {}   Live cells: {}   Speed: {}%",
            self.universe.generation(),
            self.universe.population(),
            self.speed_percent()
        )
    }
}
