// Setup errors
//
// Gameplay edge cases (hitting a stunned player, cycling past the last hand
// slot) are silent guards, not errors. What ends up here is a broken setup
// the arena cannot run with.

use thiserror::Error;

use super::player::PlayerId;

/// Invalid tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("a loadout needs at least one hand slot")]
    NoHandSlots,

    #[error("players need at least one life, got {0}")]
    NoLives(i32),

    #[error("slow motion must not speed the game up (scale {0})")]
    SlowMotionTooFast(f32),
}

/// Errors raised while building or mutating the arena registry
#[derive(Debug, Error, PartialEq)]
pub enum ArenaError {
    #[error("player {0} is already in the arena")]
    DuplicatePlayer(PlayerId),

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ArenaError::DuplicatePlayer(2).to_string(),
            "player 2 is already in the arena"
        );
        let err: ArenaError = TuningError::NoHandSlots.into();
        assert_eq!(
            err.to_string(),
            "invalid tuning: a loadout needs at least one hand slot"
        );
    }
}
