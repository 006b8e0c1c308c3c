// Arena - owns every gameplay system and runs them in a fixed order

use std::collections::HashMap;

use glam::Vec2;
use log::{debug, info, warn};

use crate::core::{EventChannel, Scheduler, Subscription};
use crate::engine::camera::Camera;
use crate::engine::input::ControlState;
use crate::engine::physics::{presets, vector, PhysicsWorld};
use rapier2d::prelude::nalgebra;

use super::combat::{self, Contact, HitEvent, Projectile, TriggerOutcome};
use super::context::{StepContext, TimedEffect};
use super::error::ArenaError;
use super::events::{GameEvent, SoundCue};
use super::lifecycle;
use super::match_state::{MatchPhase, MatchState};
use super::player::{CrownTier, Player, PlayerId, PlayerRegistry, Tint};
use super::tuning::{MatchTuning, PlayerTuning, ProjectileTuning};

/// Arena setup
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub player_tuning: PlayerTuning,
    pub projectile_tuning: ProjectileTuning,
    pub match_tuning: MatchTuning,
    /// Vertical gravity (units/second²)
    pub gravity: f32,
    /// Screen size in pixels, used for the out-of-bounds check
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// World units visible vertically
    pub world_height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            player_tuning: PlayerTuning::standard(),
            projectile_tuning: ProjectileTuning::default(),
            match_tuning: MatchTuning::default(),
            gravity: -9.81 * 4.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            world_height: 18.0,
        }
    }
}

/// Read-only view of a player for observers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub health: i32,
    pub is_dead: bool,
    pub win_tier: CrownTier,
    pub elapsed_round_time: f32,
}

/// The arena: registry of players plus everything they interact with
pub struct Arena {
    config: ArenaConfig,
    physics: PhysicsWorld,
    camera: Camera,
    players: PlayerRegistry,
    projectiles: Vec<Projectile>,
    timers: Scheduler<PlayerId, TimedEffect>,
    events: EventChannel<GameEvent>,
    match_state: MatchState,
}

impl Arena {
    /// Build an empty arena in the lobby
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.player_tuning.validate()?;
        config.projectile_tuning.validate()?;
        config.match_tuning.validate()?;

        let physics = PhysicsWorld::with_gravity(vector![0.0, config.gravity]);
        let camera = Camera::new(
            Vec2::ZERO,
            config.viewport_width,
            config.viewport_height,
            config.world_height,
        );
        let match_state = MatchState::new(config.match_tuning.clone());

        info!(
            "Arena ready ({}x{} px, {} units tall)",
            config.viewport_width, config.viewport_height, config.world_height
        );

        Ok(Self {
            config,
            physics,
            camera,
            players: PlayerRegistry::new(),
            projectiles: Vec::new(),
            timers: Scheduler::new(),
            events: EventChannel::new(),
            match_state,
        })
    }

    /// Add a static floor; `center` and `size` in world units
    pub fn add_ground(&mut self, center: Vec2, size: Vec2) {
        let body = self
            .physics
            .add_rigid_body(presets::ground_body(center.x, center.y));
        self.physics
            .add_collider(presets::ground_collider(size.x, size.y), body);
    }

    /// Register a new player at `spawn_point`
    pub fn spawn_player(
        &mut self,
        id: PlayerId,
        name: &str,
        spawn_point: Vec2,
    ) -> Result<(), ArenaError> {
        if self.players.contains(id) {
            return Err(ArenaError::DuplicatePlayer(id));
        }

        let mut player = Player::new(
            id,
            name,
            self.config.player_tuning.clone(),
            &mut self.physics,
            spawn_point,
        );
        player.state.can_move = self.match_state.phase() != MatchPhase::RoundOver;

        info!("Spawned player {} '{}' at {:?}", id, name, spawn_point);
        self.events.publish(GameEvent::PlayerSpawned {
            id,
            lives: player.state.health,
            face: player.face,
        });
        self.players.insert(player)
    }

    /// Remove a player and everything it had scheduled
    pub fn remove_player(&mut self, id: PlayerId) -> Result<(), ArenaError> {
        let player = self
            .players
            .remove(id)
            .ok_or(ArenaError::UnknownPlayer(id))?;

        let cancelled = self.timers.cancel_owner(&id);
        self.physics.remove_rigid_body(player.body_handle);
        debug!("Removed player {} ({} timers cancelled)", id, cancelled);
        self.events.publish(GameEvent::PlayerRemoved { id });
        Ok(())
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id)
    }

    pub fn players(&self) -> &[Player] {
        self.players.all()
    }

    /// Listen to gameplay events
    pub fn subscribe(&mut self) -> Subscription<GameEvent> {
        self.events.subscribe()
    }

    /// Freeze or release every player's movement
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        for player in self.players.all_mut() {
            player.state.can_move = enabled;
        }
    }

    /// Revive everyone at their spawn points and start a round
    pub fn start_round(&mut self) {
        let round = self.match_state.begin_round();
        self.revive_all();
        self.set_movement_enabled(true);

        info!("Round {} started with {} players", round, self.players.count());
        self.events
            .publish(GameEvent::PhaseChanged(MatchPhase::Playing));
        self.events.publish(GameEvent::RoundStarted { round });
    }

    /// Back to the lobby with everyone revived
    pub fn return_to_lobby(&mut self) {
        if self.match_state.set_phase(MatchPhase::Lobby) {
            self.events.publish(GameEvent::PhaseChanged(MatchPhase::Lobby));
        }
        self.revive_all();
        self.set_movement_enabled(true);
    }

    fn revive_all(&mut self) {
        self.projectiles.clear();
        let mut ctx = StepContext {
            physics: &mut self.physics,
            timers: &mut self.timers,
            events: &mut self.events,
            match_state: &mut self.match_state,
            camera: &mut self.camera,
        };
        for player in self.players.all_mut() {
            lifecycle::revive(player, &mut ctx);
        }
    }

    /// Apply a hit from outside the step (scripted hits, tests)
    pub fn hit_player(&mut self, hit: HitEvent) -> Result<bool, ArenaError> {
        let target = self
            .players
            .get_mut(hit.target)
            .ok_or(ArenaError::UnknownPlayer(hit.target))?;
        let mut ctx = StepContext {
            physics: &mut self.physics,
            timers: &mut self.timers,
            events: &mut self.events,
            match_state: &mut self.match_state,
            camera: &mut self.camera,
        };
        Ok(combat::resolve_hit(target, &hit, &mut ctx))
    }

    /// Advance the simulation by one fixed step
    pub fn fixed_step(&mut self, dt: f32, controls: &HashMap<PlayerId, ControlState>) {
        self.fire_timers(dt);

        self.match_state.tick(dt);
        self.camera.update(dt);

        let phase = self.match_state.phase();
        for index in 0..self.players.count() {
            let id = self.players.all()[index].id;
            let control = controls.get(&id).copied().unwrap_or_default();
            let hits = self.step_player(index, &control, phase, dt);

            for hit in hits {
                let Some(target) = self.players.get_mut(hit.target) else {
                    continue;
                };
                let mut ctx = StepContext {
                    physics: &mut self.physics,
                    timers: &mut self.timers,
                    events: &mut self.events,
                    match_state: &mut self.match_state,
                    camera: &mut self.camera,
                };
                combat::resolve_hit(target, &hit, &mut ctx);
            }

            let player = &mut self.players.all_mut()[index];
            let mut ctx = StepContext {
                physics: &mut self.physics,
                timers: &mut self.timers,
                events: &mut self.events,
                match_state: &mut self.match_state,
                camera: &mut self.camera,
            };
            lifecycle::check_death(player, &mut ctx);
        }

        self.update_projectiles(dt);
        self.physics.step();
        self.check_round_end();
    }

    fn fire_timers(&mut self, dt: f32) {
        for (id, effect) in self.timers.advance(dt) {
            let Some(player) = self.players.get_mut(id) else {
                continue;
            };
            match effect {
                TimedEffect::StunEnd => {
                    player.state.stunned = false;
                    player.tint = Tint::Normal;
                    self.physics.set_velocity(player.body_handle, Vec2::ZERO);
                    player.state.can_jump = true;
                }
                TimedEffect::DashEnd => {
                    self.physics.set_velocity(player.body_handle, Vec2::ZERO);
                    player.trail_emitting = false;
                    player.state.dashing = false;
                }
            }
        }
    }

    /// Run one player's systems; returns the punches it landed
    fn step_player(
        &mut self,
        index: usize,
        control: &ControlState,
        phase: MatchPhase,
        dt: f32,
    ) -> Vec<HitEvent> {
        let player = &mut self.players.all_mut()[index];
        let mut ctx = StepContext {
            physics: &mut self.physics,
            timers: &mut self.timers,
            events: &mut self.events,
            match_state: &mut self.match_state,
            camera: &mut self.camera,
        };

        lifecycle::refresh_crown(player, ctx.events);
        lifecycle::check_bounds(player, ctx.physics, ctx.camera, phase, ctx.events);

        if player.state.dead {
            return Vec::new();
        }

        player.update_hand(control.aim, dt);
        if let Some(direction) = control.cycle {
            if player.cycle_loadout(direction) {
                ctx.events.publish(GameEvent::LoadoutChanged {
                    id: player.id,
                    slot: player.loadout.slot(),
                });
            }
        }
        player.tick_cooldowns(dt);

        if player.state.can_act() {
            player.update_movement(ctx.physics, control.move_axis, dt);
            let jumped = control.jump && player.state.can_jump;
            player.update_jump(ctx.physics, control.jump);
            if jumped {
                ctx.events.publish(GameEvent::Sound(SoundCue::Jump));
            }

            if control.trigger {
                match combat::pull_trigger(player, &mut ctx, &self.config.projectile_tuning) {
                    TriggerOutcome::Shot(projectile) => self.projectiles.push(projectile),
                    TriggerOutcome::Dashed | TriggerOutcome::Idle => {}
                }
            }
        }

        if player.state.dashing {
            combat::punch_targets(player, ctx.physics)
        } else {
            Vec::new()
        }
    }

    fn update_projectiles(&mut self, dt: f32) {
        let mut ctx = StepContext {
            physics: &mut self.physics,
            timers: &mut self.timers,
            events: &mut self.events,
            match_state: &mut self.match_state,
            camera: &mut self.camera,
        };

        let in_flight = std::mem::take(&mut self.projectiles);
        for mut projectile in in_flight {
            projectile.advance(dt);

            match projectile.contact(ctx.physics) {
                Some(Contact::Player(target)) => {
                    if let Some(player) = self.players.get_mut(target) {
                        combat::resolve_hit(player, &projectile.hit_event(target), &mut ctx);
                    }
                }
                Some(Contact::Ground) => {}
                None if projectile.is_expired() => {}
                None => self.projectiles.push(projectile),
            }
        }
    }

    fn check_round_end(&mut self) {
        if self.match_state.phase() != MatchPhase::Playing || self.players.count() < 2 {
            return;
        }
        if self.players.alive_count() > 1 {
            return;
        }

        let round = self.match_state.round();
        let winner = self
            .players
            .all_mut()
            .iter_mut()
            .find(|player| player.is_alive());
        let winner_id = match winner {
            Some(player) => {
                player.state.wins = (player.state.wins + 1).min(CrownTier::MAX_WINS);
                info!(
                    "Player {} won round {} ({} wins)",
                    player.id, round, player.state.wins
                );
                Some(player.id)
            }
            None => {
                warn!("Round {} ended with nobody standing", round);
                None
            }
        };

        self.match_state.end_round();
        self.set_movement_enabled(false);
        self.events
            .publish(GameEvent::PhaseChanged(MatchPhase::RoundOver));
        self.events.publish(GameEvent::RoundEnded {
            round,
            winner: winner_id,
        });
    }

    /// Snapshot of every player
    pub fn snapshots(&self) -> Vec<PlayerSnapshot> {
        self.players
            .all()
            .iter()
            .map(|player| self.snapshot_of(player))
            .collect()
    }

    pub fn snapshot(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        self.players.get(id).map(|player| self.snapshot_of(player))
    }

    fn snapshot_of(&self, player: &Player) -> PlayerSnapshot {
        PlayerSnapshot {
            id: player.id,
            health: player.state.health,
            is_dead: player.state.dead,
            win_tier: player.crown,
            elapsed_round_time: self.match_state.round_elapsed(),
        }
    }

    /// Simulation speed the host loop should run at (slow motion after hits)
    pub fn time_scale(&self) -> f32 {
        self.match_state.time_scale()
    }

    pub fn phase(&self) -> MatchPhase {
        self.match_state.phase()
    }

    /// Global death counter
    pub fn deaths(&self) -> u32 {
        self.match_state.deaths()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }
}
