// Combat - shots, dash-punches and hit resolution

pub mod attack;
pub mod hit;
pub mod projectile;

pub use attack::{dash, pull_trigger, punch_targets, shoot, TriggerOutcome};
pub use hit::{knockback, resolve_hit, HitEvent, HitKind};
pub use projectile::{Contact, Projectile};
