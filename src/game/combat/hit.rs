// Hit resolution: stun, knockback and damage

use glam::Vec2;
use log::{debug, info};

use crate::game::context::{StepContext, TimedEffect};
use crate::game::events::{GameEvent, SoundCue};
use crate::game::player::{Player, PlayerId, Tint};

/// How the hit was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Pistol bullet
    Ranged,
    /// Dash-punch
    Melee,
}

/// A hit waiting to be applied to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub attacker: PlayerId,
    pub target: PlayerId,
    pub damage: i32,
    pub force: f32,
    /// Where the hit came from: the attacker's hand or the bullet
    pub source: Vec2,
    pub kind: HitKind,
}

/// Velocity change pushed onto the target
///
/// `direction` points from the target towards the source. Bullets push along
/// their side and pop the target up; punches throw the target away from the
/// puncher's side with a smaller lift.
pub fn knockback(kind: HitKind, direction: Vec2, force: f32) -> Vec2 {
    match kind {
        HitKind::Ranged => Vec2::new(direction.x, 1.0) * force,
        HitKind::Melee => Vec2::new(-direction.x, 0.5) * force,
    }
}

/// Apply a hit to `target`. Returns false when the hit was ignored because the
/// target is stunned or dead.
pub fn resolve_hit(target: &mut Player, hit: &HitEvent, ctx: &mut StepContext) -> bool {
    if !target.state.can_be_hit() {
        debug!(
            "Player {} ignored a hit from {} (stunned or dead)",
            target.id, hit.attacker
        );
        return false;
    }

    let direction = (hit.source - target.position(ctx.physics)).normalize_or_zero();

    // Stun
    target.state.stunned = true;
    target.tint = Tint::Stunned;
    ctx.physics.set_velocity(target.body_handle, Vec2::ZERO);
    ctx.timers
        .schedule(target.id, target.tuning.stun_duration, TimedEffect::StunEnd);

    // Feedback
    ctx.match_state.trigger_slow_motion();
    let tuning = ctx.match_state.tuning();
    ctx.camera.shake(tuning.shake_magnitude, tuning.shake_duration);
    ctx.events.publish(GameEvent::Sound(SoundCue::Punch));

    ctx.physics.add_velocity(
        target.body_handle,
        knockback(hit.kind, direction, hit.force),
    );
    target.state.take_damage(hit.damage);

    info!(
        "Player {} hit player {} ({:?}), lives left: {}",
        hit.attacker, target.id, hit.kind, target.state.health
    );
    ctx.events.publish(GameEvent::HitLanded {
        attacker: hit.attacker,
        target: target.id,
        kind: hit.kind,
    });
    ctx.events.publish(GameEvent::LivesChanged {
        id: target.id,
        lives: target.state.health,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ranged_knockback_lifts_along_source_side() {
        let push = knockback(HitKind::Ranged, Vec2::new(-1.0, 0.0), 20.0);
        assert_relative_eq!(push.x, -20.0);
        assert_relative_eq!(push.y, 20.0);
    }

    #[test]
    fn test_melee_knockback_throws_away_from_source() {
        // Puncher on the right of the target
        let push = knockback(HitKind::Melee, Vec2::new(1.0, 0.0), 20.0);
        assert_relative_eq!(push.x, -20.0);
        assert_relative_eq!(push.y, 10.0);
    }

    #[test]
    fn test_zero_direction_still_lifts() {
        let push = knockback(HitKind::Melee, Vec2::ZERO, 20.0);
        assert_eq!(push, Vec2::new(0.0, 10.0));
    }
}
