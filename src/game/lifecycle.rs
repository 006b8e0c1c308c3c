// Player lifecycle: crown refresh, out-of-bounds elimination, death, revival

use glam::Vec2;
use log::info;

use crate::core::EventChannel;
use crate::engine::camera::Camera;
use crate::engine::physics::PhysicsWorld;

use super::context::StepContext;
use super::events::{FaceSprite, GameEvent, SoundCue};
use super::match_state::MatchPhase;
use super::player::{CrownTier, Player, Tint};

/// Show the crown matching the win count; unknown counts keep the current one
pub fn refresh_crown(player: &mut Player, events: &mut EventChannel<GameEvent>) -> bool {
    let Some(tier) = CrownTier::from_wins(player.state.wins) else {
        return false;
    };
    if tier == player.crown {
        return false;
    }
    player.crown = tier;
    events.publish(GameEvent::CrownChanged {
        id: player.id,
        tier,
    });
    true
}

/// Drop health to zero if the body left the screen through a side or the
/// bottom while the phase allows eliminations
pub fn check_bounds(
    player: &mut Player,
    physics: &PhysicsWorld,
    camera: &Camera,
    phase: MatchPhase,
    events: &mut EventChannel<GameEvent>,
) -> bool {
    if player.state.dead || player.state.health <= 0 || !phase.eliminates_out_of_bounds() {
        return false;
    }
    if !camera.is_out_of_arena(player.position(physics)) {
        return false;
    }

    info!("Player {} left the arena", player.id);
    player.state.health = 0;
    events.publish(GameEvent::LivesChanged {
        id: player.id,
        lives: 0,
    });
    true
}

/// Run the death transition once health has run out. Returns true only on the
/// step the player actually dies.
pub fn check_death(player: &mut Player, ctx: &mut StepContext) -> bool {
    if !player.state.is_dying() {
        return false;
    }

    let position = player.position(ctx.physics);
    ctx.events.publish(GameEvent::PlayerDied {
        id: player.id,
        position,
    });

    player.visible = false;
    player.trail_emitting = false;
    ctx.physics.set_collider_enabled(player.collider_handle, false);

    player.face = FaceSprite::Dead;
    ctx.events.publish(GameEvent::FaceChanged {
        id: player.id,
        face: FaceSprite::Dead,
    });

    let total = ctx.match_state.count_death();
    ctx.events.publish(GameEvent::DeathCounted { total });
    ctx.events.publish(GameEvent::Sound(SoundCue::Die));

    player.state.dead = true;
    info!("Player {} died ({} deaths so far)", player.id, total);
    true
}

/// Bring a player back at its spawn point with full lives
pub fn revive(player: &mut Player, ctx: &mut StepContext) {
    ctx.timers.cancel_owner(&player.id);

    player.visible = true;
    player.face = FaceSprite::Head(player.head);
    ctx.physics.set_collider_enabled(player.collider_handle, true);
    ctx.physics.set_position(player.body_handle, player.spawn_point);
    ctx.physics.set_velocity(player.body_handle, Vec2::ZERO);

    player.state.dead = false;
    player.state.health = player.tuning.max_lives;
    player.state.stunned = false;
    player.state.dashing = false;
    player.tint = Tint::Normal;
    player.trail_emitting = false;
    player.reset_hand();

    info!("Player {} revived", player.id);
    ctx.events.publish(GameEvent::PlayerRevived { id: player.id });
    ctx.events.publish(GameEvent::FaceChanged {
        id: player.id,
        face: player.face,
    });
    ctx.events.publish(GameEvent::LivesChanged {
        id: player.id,
        lives: player.state.health,
    });
}
