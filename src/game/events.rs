// Events published by the arena for read-only observers (HUD, sound, effects)

use glam::Vec2;

use super::combat::HitKind;
use super::match_state::MatchPhase;
use super::player::{CrownTier, PlayerId};

/// Sound hooks; playback itself is up to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    /// Also played for dashes
    Jump,
    Punch,
    Die,
}

/// Face shown on the player and on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSprite {
    /// Selected head cosmetic
    Head(usize),
    /// Knocked-out variant
    Dead,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlayerSpawned {
        id: PlayerId,
        lives: i32,
        face: FaceSprite,
    },
    PlayerRemoved {
        id: PlayerId,
    },
    LivesChanged {
        id: PlayerId,
        lives: i32,
    },
    FaceChanged {
        id: PlayerId,
        face: FaceSprite,
    },
    CrownChanged {
        id: PlayerId,
        tier: CrownTier,
    },
    LoadoutChanged {
        id: PlayerId,
        slot: usize,
    },
    ProjectileFired {
        owner: PlayerId,
        position: Vec2,
        direction: Vec2,
    },
    DashStarted {
        id: PlayerId,
    },
    HitLanded {
        attacker: PlayerId,
        target: PlayerId,
        kind: HitKind,
    },
    /// Death explosion effect at the player's last position
    PlayerDied {
        id: PlayerId,
        position: Vec2,
    },
    PlayerRevived {
        id: PlayerId,
    },
    /// Global death counter moved
    DeathCounted {
        total: u32,
    },
    PhaseChanged(MatchPhase),
    RoundStarted {
        round: u32,
    },
    RoundEnded {
        round: u32,
        winner: Option<PlayerId>,
    },
    Sound(SoundCue),
}
