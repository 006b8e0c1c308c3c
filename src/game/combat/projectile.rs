// Pistol bullets

use glam::Vec2;

use crate::engine::physics::{CollisionLayer, PhysicsWorld};
use crate::game::player::PlayerId;
use crate::game::tuning::ProjectileTuning;

use super::hit::{HitEvent, HitKind};

/// What a bullet ran into this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Player(PlayerId),
    Ground,
}

/// A bullet in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Shooter; attribution only, the shooter may be gone by the time it lands
    pub owner: PlayerId,
    pub position: Vec2,
    /// Unit travel direction
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Seconds left before it fizzles out
    pub remaining: f32,
    pub damage: i32,
    pub force: f32,
}

impl Projectile {
    pub fn new(
        owner: PlayerId,
        position: Vec2,
        direction: Vec2,
        tuning: &ProjectileTuning,
        damage: i32,
        force: f32,
    ) -> Self {
        Self {
            owner,
            position,
            direction: direction.normalize_or_zero(),
            speed: tuning.speed,
            radius: tuning.radius,
            remaining: tuning.lifetime,
            damage,
            force,
        }
    }

    /// Move along the travel direction and burn lifetime
    pub fn advance(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
        self.remaining -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// First live player other than the owner under the bullet, else ground
    pub fn contact(&self, physics: &PhysicsWorld) -> Option<Contact> {
        let target = physics
            .overlap_circle(self.position, self.radius, CollisionLayer::Player)
            .into_iter()
            .filter_map(|handle| physics.entity_for_collider(handle))
            .find(|id| *id != self.owner);

        if let Some(id) = target {
            return Some(Contact::Player(id));
        }
        if physics.any_overlap(self.position, self.radius, CollisionLayer::Ground) {
            return Some(Contact::Ground);
        }
        None
    }

    /// Hit applied to `target`, sourced at the bullet's position
    pub fn hit_event(&self, target: PlayerId) -> HitEvent {
        HitEvent {
            attacker: self.owner,
            target,
            damage: self.damage,
            force: self.force,
            source: self.position,
            kind: HitKind::Ranged,
        }
    }
}
