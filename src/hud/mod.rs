// HUD projection
//
// Mirrors gameplay events into per-player widgets (face, lives, crown), the
// round stopwatch and the lobby prompts. It only reads events and never
// touches simulation state.

mod stopwatch;

pub use stopwatch::Stopwatch;

use std::collections::BTreeMap;

use log::debug;

use crate::core::Subscription;
use crate::game::player::{CrownTier, PlayerId, Rgb};
use crate::game::{FaceSprite, GameEvent, MatchPhase};

/// Widgets for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSlot {
    pub id: PlayerId,
    pub face: FaceSprite,
    pub lives: i32,
    pub crown_visible: bool,
    pub crown_color: Rgb,
}

impl PlayerSlot {
    fn new(id: PlayerId, lives: i32, face: FaceSprite) -> Self {
        Self {
            id,
            face,
            lives,
            crown_visible: false,
            crown_color: CrownTier::None.color(),
        }
    }

    /// Number of life icons to draw
    pub fn life_icons(&self) -> usize {
        self.lives.max(0) as usize
    }
}

/// Read-only HUD state rebuilt from the event stream
pub struct HudProjection {
    events: Subscription<GameEvent>,
    slots: BTreeMap<PlayerId, PlayerSlot>,
    stopwatch: Stopwatch,
    phase: MatchPhase,
    deaths: u32,
    banner: Option<String>,
}

impl HudProjection {
    pub fn new(events: Subscription<GameEvent>) -> Self {
        Self {
            events,
            slots: BTreeMap::new(),
            stopwatch: Stopwatch::new(),
            phase: MatchPhase::Lobby,
            deaths: 0,
            banner: None,
        }
    }

    /// Apply pending events and advance the stopwatch by frame time
    pub fn update(&mut self, dt: f32) {
        for event in self.events.drain() {
            self.apply(&event);
        }
        self.stopwatch.update(dt);
    }

    fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PlayerSpawned { id, lives, face } => {
                self.slots.insert(id, PlayerSlot::new(id, lives, face));
            }
            GameEvent::PlayerRemoved { id } => {
                self.slots.remove(&id);
            }
            GameEvent::LivesChanged { id, lives } => {
                if let Some(slot) = self.slots.get_mut(&id) {
                    slot.lives = lives;
                }
            }
            GameEvent::FaceChanged { id, face } => {
                if let Some(slot) = self.slots.get_mut(&id) {
                    slot.face = face;
                }
            }
            GameEvent::CrownChanged { id, tier } => {
                if let Some(slot) = self.slots.get_mut(&id) {
                    slot.crown_visible = tier.is_visible();
                    slot.crown_color = tier.color();
                }
            }
            GameEvent::DeathCounted { total } => self.deaths = total,
            GameEvent::PhaseChanged(phase) => self.phase = phase,
            GameEvent::RoundStarted { round } => {
                debug!("HUD: round {} started", round);
                self.banner = None;
                self.stopwatch.start();
            }
            GameEvent::RoundEnded { round, winner } => {
                self.stopwatch.stop();
                self.banner = Some(match winner {
                    Some(id) => format!("Player {} wins round {}!", id + 1, round),
                    None => format!("Round {} is a draw", round),
                });
            }
            _ => {}
        }
    }

    pub fn slot(&self, id: PlayerId) -> Option<&PlayerSlot> {
        self.slots.get(&id)
    }

    /// Slots in player id order
    pub fn slots(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.slots.values()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn timer_text(&self) -> String {
        self.stopwatch.text()
    }

    /// Start/move prompts are only visible in the lobby
    pub fn shows_prompts(&self) -> bool {
        self.phase.shows_lobby_prompts()
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// End-of-round message, if any
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventChannel;
    use crate::engine::input::ControlState;
    use crate::game::{Arena, ArenaConfig};
    use glam::Vec2;
    use std::collections::HashMap;

    fn hud_with_channel() -> (EventChannel<GameEvent>, HudProjection) {
        let mut channel = EventChannel::new();
        let hud = HudProjection::new(channel.subscribe());
        (channel, hud)
    }

    #[test]
    fn test_slot_mirrors_lives_face_and_crown() {
        let (mut channel, mut hud) = hud_with_channel();
        channel.publish(GameEvent::PlayerSpawned {
            id: 0,
            lives: 3,
            face: FaceSprite::Head(2),
        });
        channel.publish(GameEvent::LivesChanged { id: 0, lives: 1 });
        channel.publish(GameEvent::CrownChanged {
            id: 0,
            tier: CrownTier::Silver,
        });
        hud.update(0.0);

        let slot = hud.slot(0).unwrap();
        assert_eq!(slot.life_icons(), 1);
        assert_eq!(slot.face, FaceSprite::Head(2));
        assert!(slot.crown_visible);
        assert_eq!(slot.crown_color, Rgb::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn test_events_for_unknown_players_are_ignored() {
        let (mut channel, mut hud) = hud_with_channel();
        channel.publish(GameEvent::LivesChanged { id: 4, lives: 1 });
        hud.update(0.0);
        assert!(hud.slot(4).is_none());
    }

    #[test]
    fn test_prompts_only_in_lobby() {
        let (mut channel, mut hud) = hud_with_channel();
        assert!(hud.shows_prompts());

        channel.publish(GameEvent::PhaseChanged(MatchPhase::Playing));
        hud.update(0.0);
        assert!(!hud.shows_prompts());
    }

    #[test]
    fn test_round_drives_stopwatch_and_banner() {
        let (mut channel, mut hud) = hud_with_channel();
        channel.publish(GameEvent::RoundStarted { round: 1 });
        hud.update(0.0);
        hud.update(1.25);
        assert_eq!(hud.timer_text(), "1.25");

        channel.publish(GameEvent::RoundEnded {
            round: 1,
            winner: Some(1),
        });
        hud.update(3.0);
        assert_eq!(hud.timer_text(), "1.25");
        assert_eq!(hud.banner(), Some("Player 2 wins round 1!"));
    }

    #[test]
    fn test_follows_a_live_arena() {
        let mut arena = Arena::new(ArenaConfig::default()).unwrap();
        let mut hud = HudProjection::new(arena.subscribe());
        arena.add_ground(Vec2::new(0.0, -4.5), Vec2::new(30.0, 1.0));
        arena.spawn_player(0, "P1", Vec2::new(-1.5, -3.0)).unwrap();
        arena.spawn_player(1, "P2", Vec2::new(1.5, -3.0)).unwrap();
        arena.start_round();

        arena.player_mut(0).unwrap().state.health = 0;
        arena.fixed_step(1.0 / 60.0, &HashMap::<PlayerId, ControlState>::new());
        hud.update(0.0);

        assert_eq!(hud.slot(0).unwrap().face, FaceSprite::Dead);
        assert_eq!(hud.deaths(), 1);
        assert!(!hud.stopwatch().is_running());
        assert_eq!(hud.slots().count(), 2);
    }
}
