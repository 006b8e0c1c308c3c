// Trigger actions: pistol shot and dash-punch

use glam::Vec2;
use log::debug;

use crate::engine::physics::{CollisionLayer, PhysicsWorld};
use crate::game::context::{StepContext, TimedEffect};
use crate::game::events::{GameEvent, SoundCue};
use crate::game::player::{HandMode, Player};
use crate::game::tuning::ProjectileTuning;

use super::hit::{HitEvent, HitKind};
use super::projectile::Projectile;

/// Result of pulling the trigger
#[derive(Debug)]
pub enum TriggerOutcome {
    /// Nothing happened (cooldown, or a cosmetic hand)
    Idle,
    Shot(Projectile),
    Dashed,
}

/// Use the current hand
pub fn pull_trigger(
    player: &mut Player,
    ctx: &mut StepContext,
    projectile_tuning: &ProjectileTuning,
) -> TriggerOutcome {
    match player.loadout.mode() {
        Some(HandMode::Ranged) => match shoot(player, ctx, projectile_tuning) {
            Some(projectile) => TriggerOutcome::Shot(projectile),
            None => TriggerOutcome::Idle,
        },
        Some(HandMode::Melee) => {
            if dash(player, ctx) {
                TriggerOutcome::Dashed
            } else {
                TriggerOutcome::Idle
            }
        }
        None => TriggerOutcome::Idle,
    }
}

/// Fire a bullet from the muzzle if the shoot cooldown has elapsed
pub fn shoot(
    player: &mut Player,
    ctx: &mut StepContext,
    projectile_tuning: &ProjectileTuning,
) -> Option<Projectile> {
    if !player.shoot_cooldown.is_ready() {
        return None;
    }

    let direction = player.hand.aim_direction();
    let muzzle = player.hand_position(ctx.physics) + direction * player.tuning.muzzle_offset;
    player.shoot_cooldown.trigger();

    debug!("Player {} fired from {:?}", player.id, muzzle);
    ctx.events.publish(GameEvent::ProjectileFired {
        owner: player.id,
        position: muzzle,
        direction,
    });
    ctx.events.publish(GameEvent::Sound(SoundCue::Shoot));

    Some(Projectile::new(
        player.id,
        muzzle,
        direction,
        projectile_tuning,
        player.tuning.hit_damage,
        player.tuning.hit_force,
    ))
}

/// Launch the body towards the hand if the dash cooldown has elapsed
pub fn dash(player: &mut Player, ctx: &mut StepContext) -> bool {
    if !player.dash_cooldown.is_ready() {
        return false;
    }

    let body = player.position(ctx.physics);
    let hand = player.hand_position(ctx.physics);
    let direction = (body - hand).normalize_or_zero();

    ctx.physics.set_velocity(player.body_handle, Vec2::ZERO);
    ctx.physics
        .add_velocity(player.body_handle, -direction * player.tuning.dash_impulse);

    player.trail_emitting = true;
    player.state.dashing = true;
    player.dash_cooldown.trigger();
    ctx.timers
        .schedule(player.id, player.tuning.dash_time, TimedEffect::DashEnd);

    debug!("Player {} dashed", player.id);
    ctx.events.publish(GameEvent::DashStarted { id: player.id });
    ctx.events.publish(GameEvent::Sound(SoundCue::Jump));
    true
}

/// Hits for every other live player the fist touches
pub fn punch_targets(attacker: &Player, physics: &PhysicsWorld) -> Vec<HitEvent> {
    let hand = attacker.hand_position(physics);
    let mut hits: Vec<HitEvent> = Vec::new();

    for handle in physics.overlap_circle(hand, attacker.tuning.punch_radius, CollisionLayer::Player)
    {
        let Some(target) = physics.entity_for_collider(handle) else {
            continue;
        };
        if target == attacker.id || hits.iter().any(|hit| hit.target == target) {
            continue;
        }
        hits.push(HitEvent {
            attacker: attacker.id,
            target,
            damage: attacker.tuning.hit_damage,
            force: attacker.tuning.hit_force,
            source: hand,
            kind: HitKind::Melee,
        });
    }

    hits
}
