// Player module - entity, state, hand, loadout and crown

pub mod crown;
pub mod hand;
pub mod loadout;
pub mod player;
pub mod state;

pub use crown::{CrownTier, Rgb};
pub use hand::{Facing, HandCursor};
pub use loadout::{HandMode, Loadout};
pub use player::{Player, PlayerId, PlayerRegistry, HEAD_COUNT};
pub use state::{Cooldown, PlayerState, Tint};
