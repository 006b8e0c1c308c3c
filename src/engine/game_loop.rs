// Fixed-step simulation clock
//
// Gameplay and physics always advance in steps of FIXED_TIMESTEP. Each
// rendered frame feeds its wall time in, scaled by the time scale, and gets
// back how many steps to run. Slow motion lowers the scale, so fewer steps
// run per second while each step stays the same size.

use std::time::{Duration, Instant};

/// Simulation step (60 per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const STEP: Duration = Duration::from_micros(16_667);

/// Steps allowed per frame before the backlog is thrown away
const MAX_STEPS_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// Scaled time not yet consumed by steps
    backlog: Duration,
    last_frame: Instant,
    paused: bool,
    time_scale: f32,
    frames: u64,
    steps: u64,
    /// Wall time of the last frame in seconds
    frame_delta: f32,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            backlog: Duration::ZERO,
            last_frame: Instant::now(),
            paused: false,
            time_scale: 1.0,
            frames: 0,
            steps: 0,
            frame_delta: 0.0,
        }
    }

    /// Measure the frame against the wall clock and return the steps to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Account for a frame of `frame_time` and return the steps to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frames += 1;
        self.frame_delta = frame_time.as_secs_f32();

        if self.paused {
            return 0;
        }

        self.backlog += frame_time.mul_f32(self.time_scale);
        let mut due = 0;
        while self.backlog >= STEP && due < MAX_STEPS_PER_FRAME {
            self.backlog -= STEP;
            due += 1;
        }
        if due == MAX_STEPS_PER_FRAME {
            // Too far behind: skip ahead rather than catch up
            self.backlog = Duration::ZERO;
        }

        self.steps += u64::from(due);
        due
    }

    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Unscaled wall time of the last frame, for the HUD
    pub fn render_delta_time(&self) -> f32 {
        self.frame_delta
    }

    /// Simulation speed relative to wall time, clamped to [0, 1]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.clamp(0.0, 1.0);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Steps run since start
    pub fn update_count(&self) -> u64 {
        self.steps
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip between paused and running
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            log::info!("Game paused");
        } else {
            // Time spent paused must not turn into a burst of steps
            self.backlog = Duration::ZERO;
            log::info!("Game resumed");
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fresh_loop() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert!(!game_loop.is_paused());
        assert_eq!(game_loop.time_scale(), 1.0);
        assert_relative_eq!(game_loop.fixed_timestep(), 1.0 / 60.0);
    }

    #[test]
    fn test_one_frame_of_time_runs_one_step() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(17)), 1);
        assert_eq!(game_loop.update_count(), 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(10)), 1);
    }

    #[test]
    fn test_half_speed_needs_twice_the_time() {
        let mut game_loop = GameLoop::new();
        game_loop.set_time_scale(0.5);
        assert_eq!(game_loop.advance(Duration::from_millis(20)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(20)), 1);
    }

    #[test]
    fn test_time_scale_is_clamped() {
        let mut game_loop = GameLoop::new();
        game_loop.set_time_scale(3.0);
        assert_eq!(game_loop.time_scale(), 1.0);
        game_loop.set_time_scale(-1.0);
        assert_eq!(game_loop.time_scale(), 0.0);
    }

    #[test]
    fn test_paused_runs_no_steps() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        assert_eq!(game_loop.advance(Duration::from_millis(50)), 0);
        assert_eq!(game_loop.frame_count(), 1);

        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
        assert_eq!(game_loop.advance(Duration::from_millis(17)), 1);
    }

    #[test]
    fn test_backlog_is_dropped_past_the_cap() {
        let mut game_loop = GameLoop::new();
        assert_eq!(
            game_loop.advance(Duration::from_millis(300)),
            MAX_STEPS_PER_FRAME
        );
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_frame_delta_ignores_time_scale() {
        let mut game_loop = GameLoop::new();
        game_loop.set_time_scale(0.25);
        game_loop.advance(Duration::from_millis(40));
        assert_relative_eq!(game_loop.render_delta_time(), 0.04, epsilon = 1e-6);
    }
}
