// Player state flags and action timers

/// Sprite tint of the player body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Normal,
    /// Red flash while stunned
    Stunned,
}

/// Mutable per-player record driven by the simulation step
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Remaining lives
    pub health: i32,
    /// Hit recently; blocks every action until the stun window ends
    pub stunned: bool,
    /// Inside a dash window; punches land while this is set
    pub dashing: bool,
    /// Eliminated for the rest of the round
    pub dead: bool,
    /// Rounds won this match
    pub wins: u32,
    /// Movement enabled by the match (off between rounds)
    pub can_move: bool,
    /// One-shot jump permission, re-granted on ground contact
    pub can_jump: bool,
}

impl PlayerState {
    pub fn new(lives: i32) -> Self {
        Self {
            health: lives,
            stunned: false,
            dashing: false,
            dead: false,
            wins: 0,
            can_move: false,
            can_jump: false,
        }
    }

    /// Check if the player may move, jump, shoot or dash this step
    pub fn can_act(&self) -> bool {
        !self.stunned && self.can_move && !self.dashing && !self.dead
    }

    /// Check if incoming hits are accepted
    pub fn can_be_hit(&self) -> bool {
        !self.stunned && !self.dead
    }

    /// Health reached zero but the death transition has not run yet
    pub fn is_dying(&self) -> bool {
        self.health <= 0 && !self.dead
    }

    /// Remove lives, never going below zero
    pub fn take_damage(&mut self, damage: i32) {
        self.health = (self.health - damage).max(0);
    }
}

/// Time since an action was last used, compared against its cooldown
#[derive(Debug, Clone, Copy)]
pub struct Cooldown {
    duration: f32,
    elapsed: f32,
}

impl Cooldown {
    /// A cooldown that is ready immediately
    pub fn ready(duration: f32) -> Self {
        Self {
            duration,
            elapsed: f32::INFINITY,
        }
    }

    /// Advance the timer
    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// More time than the cooldown has passed since the last use
    pub fn is_ready(&self) -> bool {
        self.elapsed > self.duration
    }

    /// Mark the action as used now
    pub fn trigger(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
