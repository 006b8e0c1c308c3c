use std::collections::HashMap;

use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crown_brawl::engine::game_loop::GameLoop;
use crown_brawl::engine::input::{Action, InputManager};
use crown_brawl::game::{Arena, ArenaConfig, GameEvent, MatchPhase, PlayerId};
use crown_brawl::hud::HudProjection;

const PLAYER_COUNT: usize = 2;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Crown Brawl...");

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Crown Brawl")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let size = window.inner_size();
    let mut arena = Arena::new(ArenaConfig {
        viewport_width: size.width as f32,
        viewport_height: size.height as f32,
        ..ArenaConfig::default()
    })?;
    let mut hud = HudProjection::new(arena.subscribe());
    let sounds = arena.subscribe();

    arena.add_ground(Vec2::new(0.0, -7.0), Vec2::new(24.0, 1.0));
    let spawns = [Vec2::new(-4.0, -5.0), Vec2::new(4.0, -5.0)];
    for (slot, spawn) in spawns.iter().enumerate() {
        arena.spawn_player(slot as PlayerId, &format!("Player {}", slot + 1), *spawn)?;
    }

    let mut input = InputManager::new(PLAYER_COUNT);
    let mut game_loop = GameLoop::new();

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Resized(physical_size),
                ..
            } => {
                info!("Window resized to {:?}", physical_size);
                arena
                    .camera_mut()
                    .resize(physical_size.width as f32, physical_size.height as f32);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Releases are not delivered while unfocused
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.global_just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }
                if input.global_just_pressed(Action::StartRound)
                    && arena.phase() != MatchPhase::Playing
                {
                    arena.start_round();
                }

                game_loop.set_time_scale(arena.time_scale());
                for _ in 0..game_loop.begin_frame() {
                    let controls: HashMap<PlayerId, _> = (0..input.num_players())
                        .map(|slot| (slot as PlayerId, input.take_controls(slot)))
                        .collect();
                    arena.fixed_step(game_loop.fixed_timestep(), &controls);
                    game_loop.set_time_scale(arena.time_scale());
                }
                input.clear_global();

                hud.update(game_loop.render_delta_time());
                for event in sounds.drain() {
                    if let GameEvent::Sound(cue) = event {
                        debug!("Sound: {:?}", cue);
                    }
                }

                let prompt = if hud.shows_prompts() {
                    " - press Enter to start"
                } else {
                    ""
                };
                let lives: Vec<String> = hud
                    .slots()
                    .map(|slot| format!("P{} {}", slot.id + 1, slot.life_icons()))
                    .collect();
                let banner = hud
                    .banner()
                    .map(|text| format!(" | {}", text))
                    .unwrap_or_default();
                window.set_title(&format!(
                    "Crown Brawl | {} | {}{}{}",
                    hud.timer_text(),
                    lives.join(" "),
                    banner,
                    prompt
                ));
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
