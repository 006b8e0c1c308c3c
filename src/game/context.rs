// Shared mutable state handed to gameplay systems during a fixed step

use crate::core::{EventChannel, Scheduler};
use crate::engine::camera::Camera;
use crate::engine::physics::PhysicsWorld;

use super::events::GameEvent;
use super::match_state::MatchState;
use super::player::PlayerId;

/// Delayed effects owned by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedEffect {
    /// Stun window over: restore tint, stop, allow jumping again
    StunEnd,
    /// Dash window over: stop, trail off
    DashEnd,
}

/// Everything a system may touch besides the player it is working on
pub struct StepContext<'a> {
    pub physics: &'a mut PhysicsWorld,
    pub timers: &'a mut Scheduler<PlayerId, TimedEffect>,
    pub events: &'a mut EventChannel<GameEvent>,
    pub match_state: &'a mut MatchState,
    pub camera: &'a mut Camera,
}
