// Engine modules: game loop, physics, input, camera

pub mod camera;
pub mod game_loop;
pub mod input;
pub mod physics;
