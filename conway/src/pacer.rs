// pacer.rs - Frame pacing: simulation cadence, speed control and FPS stats

use std::collections::VecDeque;
use std::fmt;
use std::ops::RangeInclusive;

use tracing::debug;

/// Number of frame samples kept for the rolling statistics.
pub const FPS_WINDOW: usize = 100;

/// Decides on which display ticks the simulation advances, and keeps
/// rolling frame-rate statistics.
///
/// The display drives [`on_display_tick`] once per refresh; a step fires
/// once every `speed_divisor` ticks.
///
/// [`on_display_tick`]: FramePacer::on_display_tick
#[derive(Debug, Clone)]
pub struct FramePacer {
    speed_divisor: u32,
    frame_counter: Option<u32>,
    fps: FpsWindow,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FramePacer {
    pub fn new(speed_divisor: u32) -> Self {
        Self {
            speed_divisor: speed_divisor.max(1),
            frame_counter: None,
            fps: FpsWindow::default(),
        }
    }

    pub fn speed_divisor(&self) -> u32 {
        self.speed_divisor
    }

    /// Changes the cadence; picked up by the next display tick.
    /// A divisor of 0 is treated as 1.
    pub fn set_speed(&mut self, divisor: u32) {
        self.speed_divisor = divisor.max(1);
        debug!(divisor = self.speed_divisor, "speed changed");
    }

    /// Returns whether the simulation should step on this display tick.
    ///
    /// The first tick after construction only primes the counter. After
    /// that the counter climbs from 1 and a step fires once it reaches the
    /// divisor, resetting it to 1.
    pub fn on_display_tick(&mut self) -> bool {
        match self.frame_counter {
            None => {
                self.frame_counter = Some(1);
                false
            }
            Some(counter) if counter >= self.speed_divisor => {
                self.frame_counter = Some(1);
                true
            }
            Some(counter) => {
                self.frame_counter = Some(counter + 1);
                false
            }
        }
    }

    /// Records a display frame at `timestamp_ms` (monotonic milliseconds)
    /// and returns the updated statistics.
    pub fn record_frame(&mut self, timestamp_ms: f64) -> Option<FpsStats> {
        self.fps.record(timestamp_ms)
    }

    pub fn fps(&self) -> &FpsWindow {
        &self.fps
    }
}

/// Bounded FIFO of instantaneous frame rates.
#[derive(Debug, Clone, Default)]
pub struct FpsWindow {
    samples: VecDeque<f64>,
    last_timestamp: Option<f64>,
}

impl FpsWindow {
    /// Adds the frame rate implied by the time since the previous call.
    ///
    /// The first call only sets the baseline. A timestamp that does not move
    /// forward is taken as the new baseline without adding a sample; a
    /// non-finite one is ignored outright.
    pub fn record(&mut self, timestamp_ms: f64) -> Option<FpsStats> {
        if !timestamp_ms.is_finite() {
            return self.stats();
        }
        let previous = self.last_timestamp.replace(timestamp_ms);
        let elapsed = timestamp_ms - previous?;
        if elapsed <= 0.0 {
            return self.stats();
        }

        self.samples.push_back(1000.0 / elapsed);
        if self.samples.len() > FPS_WINDOW {
            self.samples.pop_front();
        }
        self.stats()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Latest/mean/min/max over the whole window.
    pub fn stats(&self) -> Option<FpsStats> {
        let latest = *self.samples.back()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &fps in &self.samples {
            sum += fps;
            min = min.min(fps);
            max = max.max(fps);
        }
        Some(FpsStats {
            latest,
            mean: sum / self.samples.len() as f64,
            min,
            max,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for FpsStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frames per Second:")?;
        writeln!(f, "         latest = {}", self.latest.round())?;
        writeln!(f, "avg of last {FPS_WINDOW} = {}", self.mean.round())?;
        writeln!(f, "min of last {FPS_WINDOW} = {}", self.min.round())?;
        write!(f, "max of last {FPS_WINDOW} = {}", self.max.round())
    }
}

/// Maps a speed slider value onto a step divisor along a quadratic curve,
/// giving finer control at the fast end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedControl {
    pub min: f64,
    pub max: f64,
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}

impl SpeedControl {
    /// The control's range with its bounds in order. A NaN bound falls back
    /// to the default one.
    pub fn range(&self) -> RangeInclusive<f64> {
        let (lo, hi) = self.bounds();
        lo..=hi
    }

    fn bounds(&self) -> (f64, f64) {
        let fallback = Self::default();
        let min = if self.min.is_nan() { fallback.min } else { self.min };
        let max = if self.max.is_nan() { fallback.max } else { self.max };
        (min.min(max), min.max(max))
    }

    /// `round(value^2)` after clamping `value` into the control's range;
    /// never below 1.
    pub fn divisor_for(&self, value: f64) -> u32 {
        let (lo, hi) = self.bounds();
        let value = if value.is_nan() { lo } else { value.clamp(lo, hi) };
        (value * value).round().max(1.0) as u32
    }
}

/// Speed as a percentage of "one step per display tick".
pub fn speed_percent(divisor: u32) -> u32 {
    100 / divisor.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_only_primes() {
        let mut pacer = FramePacer::new(1);
        assert!(!pacer.on_display_tick());
        assert!(pacer.on_display_tick());
        assert!(pacer.on_display_tick());
    }

    #[test]
    fn divisor_three_steps_once_per_three_ticks() {
        let mut pacer = FramePacer::new(3);
        assert!(!pacer.on_display_tick());

        let ticks: Vec<bool> = (0..30).map(|_| pacer.on_display_tick()).collect();
        for window in ticks.windows(3) {
            assert_eq!(window.iter().filter(|&&t| t).count(), 1, "{ticks:?}");
        }
        assert_eq!(&ticks[..3], &[false, false, true]);
    }

    #[test]
    fn speed_change_applies_on_next_tick() {
        let mut pacer = FramePacer::new(100);
        pacer.on_display_tick();
        assert!(!pacer.on_display_tick());
        assert!(!pacer.on_display_tick());
        // Counter is at 3; dropping the divisor to 2 fires immediately
        pacer.set_speed(2);
        assert!(pacer.on_display_tick());
        assert!(!pacer.on_display_tick());
        assert!(pacer.on_display_tick());
    }

    #[test]
    fn zero_divisor_is_treated_as_one() {
        let mut pacer = FramePacer::new(0);
        assert_eq!(pacer.speed_divisor(), 1);
        pacer.set_speed(0);
        assert_eq!(pacer.speed_divisor(), 1);
    }

    #[test]
    fn fps_baseline_then_samples() {
        let mut window = FpsWindow::default();
        assert_eq!(window.record(0.0), None);
        let stats = window.record(20.0).unwrap();
        assert_eq!(stats.latest, 50.0);

        let stats = window.record(30.0).unwrap();
        assert_eq!(stats.latest, 100.0);
        assert_eq!(stats.mean, 75.0);
        assert_eq!(stats.min, 50.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn fps_window_evicts_oldest() {
        let mut pacer = FramePacer::default();
        pacer.record_frame(0.0);
        // One slow frame, then many fast ones
        pacer.record_frame(100.0);
        let mut t = 100.0;
        for _ in 0..FPS_WINDOW {
            t += 10.0;
            pacer.record_frame(t);
        }
        assert_eq!(pacer.fps().len(), FPS_WINDOW);
        let stats = pacer.fps().stats().unwrap();
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 100.0);
    }

    #[test]
    fn fps_ignores_non_advancing_timestamps() {
        let mut window = FpsWindow::default();
        window.record(10.0);
        assert_eq!(window.record(10.0), None);
        assert!(window.is_empty());
    }

    #[test]
    fn fps_report_text() {
        let stats = FpsStats { latest: 59.6, mean: 60.2, min: 30.0, max: 61.49 };
        assert_eq!(
            stats.to_string(),
            "Frames per Second:\n         latest = 60\navg of last 100 = 60\nmin of last 100 = 30\nmax of last 100 = 61"
        );
    }

    #[test]
    fn speed_curve_is_quadratic_and_clamped() {
        let control = SpeedControl::default();
        assert_eq!(control.divisor_for(1.0), 1);
        assert_eq!(control.divisor_for(2.0), 4);
        assert_eq!(control.divisor_for(2.5), 6);
        assert_eq!(control.divisor_for(10.0), 100);
        assert_eq!(control.divisor_for(0.0), 1);
        assert_eq!(control.divisor_for(-5.0), 1);
        assert_eq!(control.divisor_for(50.0), 100);
        assert_eq!(control.divisor_for(f64::NAN), 1);
    }

    #[test]
    fn speed_control_tolerates_reversed_and_nan_bounds() {
        let reversed = SpeedControl { min: 10.0, max: 1.0 };
        assert_eq!(reversed.range(), 1.0..=10.0);
        assert_eq!(reversed.divisor_for(5.0), 25);
        assert_eq!(reversed.divisor_for(50.0), 100);
        assert_eq!(reversed.divisor_for(0.0), 1);

        let nan_min = SpeedControl { min: f64::NAN, max: 4.0 };
        assert_eq!(nan_min.range(), 1.0..=4.0);
        assert_eq!(nan_min.divisor_for(3.0), 9);
        assert_eq!(nan_min.divisor_for(f64::NAN), 1);

        let nan_both = SpeedControl { min: f64::NAN, max: f64::NAN };
        assert_eq!(nan_both.divisor_for(20.0), 100);
    }

    #[test]
    fn fps_skips_non_finite_timestamps() {
        let mut window = FpsWindow::default();
        window.record(0.0);
        window.record(20.0);
        assert_eq!(window.record(f64::NAN).unwrap().latest, 50.0);
        assert_eq!(window.record(f64::INFINITY).unwrap().latest, 50.0);

        // Baseline is still 20ms, so the next frame measures 10ms
        let stats = window.record(30.0).unwrap();
        assert_eq!(stats.latest, 100.0);
        assert_eq!(window.len(), 2);
        assert!(stats.mean.is_finite());
    }

    #[test]
    fn speed_percentages() {
        assert_eq!(speed_percent(1), 100);
        assert_eq!(speed_percent(3), 33);
        assert_eq!(speed_percent(100), 1);
    }
}
