// Physics system using rapier2d

pub mod body;
mod collision;
mod world;

pub use body::{presets, ColliderHandle, RigidBodyHandle};
pub use collision::CollisionLayer;
pub use world::PhysicsWorld;

// Gravity and translations are built with rapier's vector! macro
pub use rapier2d::prelude::vector;
