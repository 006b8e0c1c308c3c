// Rigid bodies and colliders for arena entities

use super::collision::CollisionLayer;
use rapier2d::prelude::*;

pub use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};

/// Collider on `layer` with the given surface response
fn layered(shape: SharedShape, layer: CollisionLayer, friction: Real) -> Collider {
    ColliderBuilder::new(shape)
        .collision_groups(layer.to_interaction_groups())
        .friction(friction)
        .restitution(0.0)
        .build()
}

/// Bodies and colliders for everything the arena spawns
pub mod presets {
    use super::*;

    /// Player body: dynamic, upright, always awake, no air drag
    pub fn player_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .lock_rotations()
            .linear_damping(0.0)
            .can_sleep(false)
            .build()
    }

    /// Upright capsule filling a `width` x `height` box, on the Player layer
    pub fn player_collider(width: Real, height: Real) -> Collider {
        let radius = width / 2.0;
        let half_segment = (height / 2.0 - radius).max(0.0);
        layered(
            SharedShape::capsule_y(half_segment, radius),
            CollisionLayer::Player,
            0.0,
        )
    }

    /// Static floor or platform body
    pub fn ground_body(x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::fixed().translation(vector![x, y]).build()
    }

    /// `width` x `height` box on the Ground layer
    pub fn ground_collider(width: Real, height: Real) -> Collider {
        layered(
            SharedShape::cuboid(width / 2.0, height / 2.0),
            CollisionLayer::Ground,
            0.3,
        )
    }
}
