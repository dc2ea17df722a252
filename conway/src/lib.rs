// lib.rs - Conway's Game of Life engine, frame pacing and canvas painting

pub mod bitgrid;   // Packed cell storage
pub mod color;     // Hex colors for the painter
pub mod error;     // LifeError
pub mod mapper;    // Pointer -> cell, click stamps
pub mod pacer;     // Step cadence and FPS statistics
pub mod painter;   // Gridlines and cells onto a Surface
pub mod patterns;  // Named seed patterns
pub mod universe;  // The automaton itself

pub use bitgrid::BitGrid;
pub use color::Color;
pub use error::{LifeError, Result};
pub use mapper::{Modifiers, Stamp, apply_stamp, pixel_to_cell};
pub use pacer::{FpsStats, FpsWindow, FramePacer, SpeedControl, speed_percent};
pub use painter::{CanvasLayout, PixelRect, Point, Surface, draw_cells, draw_grid};
pub use patterns::{InitialLayout, PATTERNS, Pattern, find_pattern};
pub use universe::Universe;
