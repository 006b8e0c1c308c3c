// Match phase, round clock, death counter and hit slow-motion

use log::info;

use super::tuning::MatchTuning;

/// Phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    /// Players warm up, prompts are shown
    #[default]
    Lobby,
    /// A round is running
    Playing,
    /// Round decided, waiting for the next one
    RoundOver,
}

impl MatchPhase {
    /// Leaving the screen kills in these phases
    pub fn eliminates_out_of_bounds(self) -> bool {
        matches!(self, MatchPhase::Lobby | MatchPhase::Playing)
    }

    /// Start and move prompts are only shown in the lobby
    pub fn shows_lobby_prompts(self) -> bool {
        self == MatchPhase::Lobby
    }
}

/// Match-wide state
#[derive(Debug, Clone)]
pub struct MatchState {
    tuning: MatchTuning,
    phase: MatchPhase,
    deaths: u32,
    round: u32,
    round_elapsed: f32,
    slow_motion_remaining: f32,
}

impl MatchState {
    pub fn new(tuning: MatchTuning) -> Self {
        Self {
            tuning,
            phase: MatchPhase::Lobby,
            deaths: 0,
            round: 0,
            round_elapsed: 0.0,
            slow_motion_remaining: 0.0,
        }
    }

    pub fn tuning(&self) -> &MatchTuning {
        &self.tuning
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Switch phase; returns false if already there
    pub fn set_phase(&mut self, phase: MatchPhase) -> bool {
        if self.phase == phase {
            return false;
        }
        info!("Match phase: {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        true
    }

    /// Start the next round and return its number
    pub fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round_elapsed = 0.0;
        self.slow_motion_remaining = 0.0;
        self.set_phase(MatchPhase::Playing);
        self.round
    }

    /// Close the current round
    pub fn end_round(&mut self) {
        self.set_phase(MatchPhase::RoundOver);
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Simulated seconds since the current round started
    pub fn round_elapsed(&self) -> f32 {
        self.round_elapsed
    }

    /// Add one death to the global counter and return the new total
    pub fn count_death(&mut self) -> u32 {
        self.deaths += 1;
        self.deaths
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Slow the game down briefly after a hit
    pub fn trigger_slow_motion(&mut self) {
        self.slow_motion_remaining = self.tuning.slow_motion_duration;
    }

    pub fn is_slow_motion(&self) -> bool {
        self.slow_motion_remaining > 0.0
    }

    /// Simulation speed the host should run at
    pub fn time_scale(&self) -> f32 {
        if self.is_slow_motion() {
            self.tuning.slow_motion_scale
        } else {
            1.0
        }
    }

    /// Advance timers by one simulated step
    pub fn tick(&mut self, dt: f32) {
        if self.phase == MatchPhase::Playing {
            self.round_elapsed += dt;
        }
        if self.slow_motion_remaining > 0.0 {
            self.slow_motion_remaining = (self.slow_motion_remaining - dt).max(0.0);
        }
    }
}
