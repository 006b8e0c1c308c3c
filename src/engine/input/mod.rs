// Input handling system
//
// Keyboard events are mapped to logical actions per local player and sampled
// once per simulation step as a `ControlState` (move axis, aim stick, jump
// edge, trigger, loadout cycle).
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `player`: Per-player input state and control sampling
// - `config`: Input configuration and remapping system
// - `manager`: Main input manager coordinating everything
//
// ## Usage Example
//
// ```rust
// use crown_brawl::engine::input::InputManager;
//
// let mut input_manager = InputManager::new(2);
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Each fixed step, take controls for every player
// let controls = input_manager.take_controls(0);
//
// // Once the frame handled start and pause, clear them
// input_manager.clear_global();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use config::{InputConfig, InputConfigManager};
pub use manager::InputManager;
pub use player::{ControlState, HandCycle, PlayerInput};
