//! Frame timing for the interactive scene.
//!
//! [`Time`] measures wall-clock time between frames and turns it into the
//! scaled delta the scene feeds to its fixed-step accumulator. Pausing zeroes
//! the delta without losing track of the clock.
//!
//! ```
//! use sparks::time::Time;
//!
//! let mut time = Time::new();
//! time.set_time_scale(0.5);
//! let delta = time.advance(0.02);
//! assert!((delta - 0.01).abs() < 1e-6);
//! ```

use std::time::Instant;

const FPS_WINDOW: f32 = 0.5;

/// Elapsed/delta/frame/fps tracking with pause and time scale.
#[derive(Debug)]
pub struct Time {
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frames: u32,
    fps_window: f32,
    fps_fresh: bool,
    paused: bool,
    time_scale: f32,
}

impl Time {
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frames: 0,
            fps_window: 0.0,
            fps_fresh: false,
            paused: false,
            time_scale: 1.0,
        }
    }

    /// Measure the time since the previous call and advance by it.
    ///
    /// Returns the scaled delta in seconds.
    pub fn update(&mut self) -> f32 {
        let now = Instant::now();
        let raw = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(raw.as_secs_f32())
    }

    /// Advance by `raw_delta` unscaled seconds.
    ///
    /// The frame counter and fps always move; elapsed time and the returned
    /// delta stay at zero progress while paused.
    pub fn advance(&mut self, raw_delta: f32) -> f32 {
        let raw_delta = raw_delta.max(0.0);
        self.frame_count += 1;

        self.fps_frames += 1;
        self.fps_window += raw_delta;
        if self.fps_window >= FPS_WINDOW {
            self.fps = self.fps_frames as f32 / self.fps_window;
            self.fps_frames = 0;
            self.fps_window = 0.0;
            self.fps_fresh = true;
        }

        self.delta_secs = if self.paused {
            0.0
        } else {
            raw_delta * self.time_scale
        };
        self.elapsed_secs += self.delta_secs;
        self.delta_secs
    }

    /// Scaled simulation time since start, excluding pauses.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Scaled delta from the last update.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second over the last half second of wall-clock time.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// The fps reading, once per completed window.
    pub fn take_fps(&mut self) -> Option<f32> {
        std::mem::take(&mut self.fps_fresh).then_some(self.fps)
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Set the time scale multiplier. Negative values clamp to zero.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = slow motion
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert!(!time.is_paused());
        assert_eq!(time.time_scale(), 1.0);
        assert_eq!(time.delta(), 0.0);
    }

    #[test]
    fn test_time_update() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        let delta = time.update();

        assert!(delta > 0.0);
        assert_eq!(time.elapsed(), delta);
        assert_eq!(time.frame(), 1);
    }

    #[test]
    fn test_time_pause() {
        let mut time = Time::new();
        time.advance(0.1);

        time.toggle_pause();
        assert!(time.is_paused());

        let elapsed_before = time.elapsed();
        assert_eq!(time.advance(0.1), 0.0);

        assert_eq!(time.elapsed(), elapsed_before);
        assert_eq!(time.delta(), 0.0);
        assert_eq!(time.frame(), 2);

        time.toggle_pause();
        assert!(time.advance(0.1) > 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = Time::new();
        time.set_time_scale(2.0);
        assert_eq!(time.time_scale(), 2.0);
        assert!((time.advance(0.25) - 0.5).abs() < 1e-6);

        // Negative scale should clamp to 0
        time.set_time_scale(-1.0);
        assert_eq!(time.time_scale(), 0.0);
        assert_eq!(time.advance(0.25), 0.0);
    }

    #[test]
    fn test_fps_window() {
        let mut time = Time::new();
        for _ in 0..30 {
            time.advance(1.0 / 60.0);
        }
        assert!((time.fps() - 60.0).abs() < 0.5);
    }

    #[test]
    fn test_take_fps_once_per_window() {
        let mut time = Time::new();
        time.advance(0.125);
        assert_eq!(time.take_fps(), None);

        for _ in 0..3 {
            time.advance(0.125);
        }
        assert_eq!(time.take_fps(), Some(8.0));
        assert_eq!(time.take_fps(), None);
    }

    #[test]
    fn test_negative_raw_delta_is_ignored() {
        let mut time = Time::new();
        assert_eq!(time.advance(-1.0), 0.0);
    }
}
