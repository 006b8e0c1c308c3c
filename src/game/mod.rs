// Game layer
//
// - `player`: player entity, state flags, hand cursor, loadout, crown
// - `combat`: shots, dash-punches, bullets and hit resolution
// - `lifecycle`: out-of-bounds elimination, death, revival, crown refresh
// - `match_state`: match phase, round clock, death counter, slow motion
// - `arena`: owns everything and runs the fixed step

pub mod arena;
pub mod combat;
pub mod context;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod match_state;
pub mod player;
pub mod tuning;

pub use arena::{Arena, ArenaConfig, PlayerSnapshot};
pub use error::{ArenaError, TuningError};
pub use events::{FaceSprite, GameEvent, SoundCue};
pub use match_state::{MatchPhase, MatchState};
pub use player::{CrownTier, PlayerId};
