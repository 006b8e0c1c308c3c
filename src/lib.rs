// Crown Brawl - local multiplayer arena brawler
//
// - `core`: math helpers, scheduled events, event channel
// - `engine`: game loop, physics, input, camera
// - `game`: players, combat, lifecycle, match flow and the arena
// - `hud`: read-only HUD projection of gameplay events

pub mod core;
pub mod engine;
pub mod game;
pub mod hud;
