// config.rs - Command-line configuration for the canvas window

use anyhow::{Result, anyhow};
use clap::Parser;
use conway::{CanvasLayout, Color, InitialLayout, SpeedControl};

#[derive(Parser, Debug, Clone)]
#[command(name = "conway-canvas", version, about = "Interactive Conway's Game of Life")]
pub struct Args {
    /// Grid width in cells.
    #[arg(long, env = "CONWAY_WIDTH", default_value_t = 64)]
    pub width: u32,

    /// Grid height in cells.
    #[arg(long, env = "CONWAY_HEIGHT", default_value_t = 64)]
    pub height: u32,

    /// Edge of one cell in canvas pixels.
    #[arg(long, env = "CONWAY_CELL_SIZE", default_value_t = 5.0)]
    pub cell_size: f32,

    /// Screen points per canvas pixel.
    #[arg(long, env = "CONWAY_ZOOM", default_value_t = 2.0)]
    pub zoom: f32,

    /// Initial speed slider value; the step divisor is its square.
    #[arg(long, env = "CONWAY_SPEED", default_value_t = 1.0)]
    pub speed: f64,

    /// `interesting`, `random`, `empty`, or a pattern name such as `glider`.
    #[arg(long, env = "CONWAY_LAYOUT", default_value = "interesting")]
    pub layout: String,

    #[arg(long, env = "CONWAY_GRID_COLOR", default_value = "#CCC")]
    pub grid_color: Color,

    #[arg(long, env = "CONWAY_ALIVE_COLOR", default_value = "#000")]
    pub alive_color: Color,

    #[arg(long, env = "CONWAY_DEAD_COLOR", default_value = "#FFF")]
    pub dead_color: Color,

    /// Open the window paused.
    #[arg(long, env = "CONWAY_PAUSED")]
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub grid: Color,
    pub alive: Color,
    pub dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color::LIGHT_GRAY,
            alive: Color::BLACK,
            dead: Color::WHITE,
        }
    }
}

/// Validated settings the app is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub layout: CanvasLayout,
    pub zoom: f32,
    pub speed: f64,
    pub speed_control: SpeedControl,
    pub initial: InitialLayout,
    pub palette: Palette,
    pub start_paused: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            layout: CanvasLayout::new(64, 64, 5.0),
            zoom: 2.0,
            speed: 1.0,
            speed_control: SpeedControl::default(),
            initial: InitialLayout::Interesting,
            palette: Palette::default(),
            start_paused: false,
        }
    }
}

impl TryFrom<Args> for CanvasConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let initial = InitialLayout::from_name(&args.layout)
            .ok_or_else(|| anyhow!("unknown layout {:?}", args.layout))?;
        if !(args.cell_size >= 1.0) {
            return Err(anyhow!("cell size must be at least 1 pixel, got {}", args.cell_size));
        }
        if !(args.zoom > 0.0) {
            return Err(anyhow!("zoom must be positive, got {}", args.zoom));
        }

        Ok(Self {
            layout: CanvasLayout::new(args.width, args.height, args.cell_size),
            zoom: args.zoom,
            speed: args.speed,
            speed_control: SpeedControl::default(),
            initial,
            palette: Palette {
                grid: args.grid_color,
                alive: args.alive_color,
                dead: args.dead_color,
            },
            start_paused: args.paused,
        })
    }
}
