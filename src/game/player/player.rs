// Player entity and registry

use glam::Vec2;
use log::{debug, info};

use crate::engine::input::HandCycle;
use crate::engine::physics::{presets, CollisionLayer, ColliderHandle, PhysicsWorld, RigidBodyHandle};
use crate::game::error::ArenaError;
use crate::game::events::FaceSprite;
use crate::game::tuning::PlayerTuning;

use super::crown::CrownTier;
use super::hand::HandCursor;
use super::loadout::Loadout;
use super::state::{Cooldown, PlayerState, Tint};

/// Stable identifier for a player
pub type PlayerId = u32;

/// Number of selectable head cosmetics
pub const HEAD_COUNT: usize = 4;

/// A player in the arena
#[derive(Debug)]
pub struct Player {
    /// Unique identifier
    pub id: PlayerId,
    /// Display name
    pub name: String,

    // Physics
    /// Handle to the player's rigid body in the physics world
    pub body_handle: RigidBodyHandle,
    /// Handle to the player's hit volume
    pub collider_handle: ColliderHandle,

    /// Tuning shared by every player
    pub tuning: PlayerTuning,
    /// Health, stun, dash and permission flags
    pub state: PlayerState,
    /// Aiming hand
    pub hand: HandCursor,
    /// Selected hand
    pub loadout: Loadout,
    /// Time since the last pistol shot
    pub shoot_cooldown: Cooldown,
    /// Time since the last dash
    pub dash_cooldown: Cooldown,

    // Cosmetics
    /// Selected head cosmetic
    pub head: usize,
    /// Face currently shown
    pub face: FaceSprite,
    /// Crown currently shown
    pub crown: CrownTier,
    /// Body tint
    pub tint: Tint,
    /// Dash trail is emitting
    pub trail_emitting: bool,
    /// Body, face and hand sprites are drawn
    pub visible: bool,

    /// Where the player (re)spawns
    pub spawn_point: Vec2,
}

impl Player {
    /// Create a new player and add it to the physics world
    pub fn new(
        id: PlayerId,
        name: &str,
        tuning: PlayerTuning,
        physics: &mut PhysicsWorld,
        spawn_point: Vec2,
    ) -> Self {
        let body_handle = physics.add_rigid_body(presets::player_body(spawn_point.x, spawn_point.y));
        let collider_handle =
            physics.add_collider(presets::player_collider(tuning.width, tuning.height), body_handle);
        physics.set_entity_mapping(body_handle, id);

        let head = id as usize % HEAD_COUNT;

        Self {
            id,
            name: name.to_string(),
            body_handle,
            collider_handle,
            state: PlayerState::new(tuning.max_lives),
            hand: Self::resting_hand(&tuning),
            loadout: Loadout::new(tuning.hand_slots),
            shoot_cooldown: Cooldown::ready(tuning.shoot_cooldown),
            dash_cooldown: Cooldown::ready(tuning.dash_cooldown),
            head,
            face: FaceSprite::Head(head),
            crown: CrownTier::None,
            tint: Tint::Normal,
            trail_emitting: false,
            visible: true,
            spawn_point,
            tuning,
        }
    }

    fn resting_hand(tuning: &PlayerTuning) -> HandCursor {
        HandCursor::new(
            Vec2::new(tuning.max_hand_distance * 0.5, 0.0),
            tuning.max_hand_distance,
        )
    }

    /// Put the hand back to its resting spot
    pub fn reset_hand(&mut self) {
        self.hand = Self::resting_hand(&self.tuning);
    }

    /// Get the player's current position
    pub fn position(&self, physics: &PhysicsWorld) -> Vec2 {
        physics.position(self.body_handle).unwrap_or(self.spawn_point)
    }

    /// Current velocity
    pub fn velocity(&self, physics: &PhysicsWorld) -> Vec2 {
        physics.velocity(self.body_handle).unwrap_or(Vec2::ZERO)
    }

    /// World position of the hand cursor
    pub fn hand_position(&self, physics: &PhysicsWorld) -> Vec2 {
        self.hand.world_position(self.position(physics))
    }

    /// Bottom of the body, where the ground probe sits
    pub fn foot_anchor(&self, physics: &PhysicsWorld) -> Vec2 {
        self.position(physics) - Vec2::new(0.0, self.tuning.height / 2.0)
    }

    /// Check if the foot probe touches the Ground layer
    pub fn is_grounded(&self, physics: &PhysicsWorld) -> bool {
        physics.any_overlap(
            self.foot_anchor(physics),
            self.tuning.ground_check_radius,
            CollisionLayer::Ground,
        )
    }

    /// Move the hand cursor along the aim stick
    pub fn update_hand(&mut self, aim: Vec2, dt: f32) {
        self.hand.update(
            aim,
            self.tuning.hand_speed,
            self.tuning.max_hand_distance,
            dt,
        );
    }

    /// Displace the body horizontally
    pub fn update_movement(&self, physics: &mut PhysicsWorld, axis: f32, dt: f32) {
        if axis == 0.0 {
            return;
        }
        let axis = axis.clamp(-1.0, 1.0);
        let position = self.position(physics);
        physics.set_position(
            self.body_handle,
            position + Vec2::new(axis * self.tuning.move_speed * dt, 0.0),
        );
    }

    /// Consume a jump request if allowed, then refresh the permission from
    /// ground contact
    pub fn update_jump(&mut self, physics: &mut PhysicsWorld, jump_requested: bool) {
        if jump_requested && self.state.can_jump && !self.state.stunned {
            let velocity = self.velocity(physics);
            physics.set_velocity(
                self.body_handle,
                Vec2::new(velocity.x, self.tuning.jump_force),
            );
            self.state.can_jump = false;
            debug!("Player {} jumped", self.id);
        }

        if self.is_grounded(physics) {
            self.state.can_jump = true;
        }
    }

    /// Cycle the hand loadout; ignored while stunned, dashing or frozen
    pub fn cycle_loadout(&mut self, direction: HandCycle) -> bool {
        if self.state.stunned || !self.state.can_move || self.state.dashing {
            return false;
        }
        self.loadout.cycle(direction);
        info!("Player {} switched to hand {}", self.id, self.loadout.slot());
        true
    }

    /// Advance both action cooldowns
    pub fn tick_cooldowns(&mut self, dt: f32) {
        self.shoot_cooldown.tick(dt);
        self.dash_cooldown.tick(dt);
    }

    /// Check if player is alive
    pub fn is_alive(&self) -> bool {
        !self.state.dead
    }
}

/// Registry of all players, exactly one record per id
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Add a player; a second record for the same id is a setup error
    pub fn insert(&mut self, player: Player) -> Result<(), ArenaError> {
        if self.contains(player.id) {
            return Err(ArenaError::DuplicatePlayer(player.id));
        }
        self.players.push(player);
        Ok(())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    /// Get a player by id
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Get a mutable player by id
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Position of a player in update order
    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn all_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Remove a player by id
    pub fn remove(&mut self, id: PlayerId) -> Option<Player> {
        let index = self.index_of(id)?;
        Some(self.players.remove(index))
    }

    /// Get the number of players
    pub fn count(&self) -> usize {
        self.players.len()
    }

    /// Get the number of players still alive
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::presets;
    use approx::assert_relative_eq;

    fn world_with_floor() -> PhysicsWorld {
        let mut physics = PhysicsWorld::new();
        // Floor top edge at y = -0.5
        let ground = physics.add_rigid_body(presets::ground_body(0.0, -1.0));
        physics.add_collider(presets::ground_collider(40.0, 1.0), ground);
        physics
    }

    fn standing_player(physics: &mut PhysicsWorld) -> Player {
        // Body center one half-height above the floor
        Player::new(0, "P1", PlayerTuning::default(), physics, Vec2::new(0.0, 0.5))
    }

    #[test]
    fn test_new_player_defaults() {
        let mut physics = PhysicsWorld::new();
        let player = standing_player(&mut physics);
        assert_eq!(player.state.health, 3);
        assert_eq!(player.face, FaceSprite::Head(0));
        assert_eq!(player.crown, CrownTier::None);
        assert!(player.visible);
        assert_eq!(physics.entity_for_collider(player.collider_handle), Some(0));
    }

    #[test]
    fn test_movement_displaces_by_axis_speed_dt() {
        let mut physics = PhysicsWorld::new();
        let player = standing_player(&mut physics);

        player.update_movement(&mut physics, 1.0, 0.1);
        assert_relative_eq!(player.position(&physics).x, 1.0, epsilon = 1e-5);

        player.update_movement(&mut physics, -0.5, 0.1);
        assert_relative_eq!(player.position(&physics).x, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_grounded_check() {
        let mut physics = world_with_floor();
        let player = standing_player(&mut physics);
        assert!(player.is_grounded(&physics));

        physics.set_position(player.body_handle, Vec2::new(0.0, 5.0));
        assert!(!player.is_grounded(&physics));
    }

    #[test]
    fn test_jump_consumes_permission_until_ground_contact() {
        let mut physics = world_with_floor();
        let mut player = standing_player(&mut physics);

        // First step on the ground only grants the permission
        player.update_jump(&mut physics, false);
        assert!(player.state.can_jump);

        // Lift off before the jump so the permission is not re-granted
        physics.set_position(player.body_handle, Vec2::new(0.0, 3.0));
        player.update_jump(&mut physics, true);
        assert_relative_eq!(player.velocity(&physics).y, 20.0);
        assert!(!player.state.can_jump);

        // A second request mid-air does nothing
        physics.set_velocity(player.body_handle, Vec2::ZERO);
        player.update_jump(&mut physics, true);
        assert_relative_eq!(player.velocity(&physics).y, 0.0);
    }

    #[test]
    fn test_stunned_player_cannot_jump() {
        let mut physics = world_with_floor();
        let mut player = standing_player(&mut physics);
        player.state.can_jump = true;
        player.state.stunned = true;

        player.update_jump(&mut physics, true);
        assert_relative_eq!(player.velocity(&physics).y, 0.0);
    }

    #[test]
    fn test_jump_keeps_horizontal_velocity() {
        let mut physics = PhysicsWorld::new();
        let mut player = standing_player(&mut physics);
        player.state.can_jump = true;
        physics.set_velocity(player.body_handle, Vec2::new(4.0, -1.0));

        player.update_jump(&mut physics, true);
        assert_eq!(player.velocity(&physics), Vec2::new(4.0, 20.0));
    }

    #[test]
    fn test_cycle_loadout_gating() {
        let mut physics = PhysicsWorld::new();
        let mut player = standing_player(&mut physics);

        // Frozen before the match enables movement
        assert!(!player.cycle_loadout(HandCycle::Next));

        player.state.can_move = true;
        assert!(player.cycle_loadout(HandCycle::Next));
        assert_eq!(player.loadout.slot(), 1);

        player.state.dashing = true;
        assert!(!player.cycle_loadout(HandCycle::Next));
        assert_eq!(player.loadout.slot(), 1);
    }

    #[test]
    fn test_hand_follows_body() {
        let mut physics = PhysicsWorld::new();
        let player = standing_player(&mut physics);
        let before = player.hand_position(&physics);

        player.update_movement(&mut physics, 1.0, 0.5);

        let after = player.hand_position(&physics);
        assert_relative_eq!(after.x - before.x, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn test_registry_rejects_duplicate_ids() {
        let mut physics = PhysicsWorld::new();
        let mut registry = PlayerRegistry::new();
        registry.insert(standing_player(&mut physics)).unwrap();

        let again = standing_player(&mut physics);
        assert_eq!(registry.insert(again), Err(ArenaError::DuplicatePlayer(0)));
        assert_eq!(registry.count(), 1);
    }

    #[test]
    fn test_registry_alive_count_and_remove() {
        let mut physics = PhysicsWorld::new();
        let mut registry = PlayerRegistry::new();
        for id in 0..3 {
            let player = Player::new(id, "P", PlayerTuning::default(), &mut physics, Vec2::ZERO);
            registry.insert(player).unwrap();
        }
        registry.get_mut(1).unwrap().state.dead = true;

        assert_eq!(registry.alive_count(), 2);
        assert!(registry.remove(1).is_some());
        assert!(registry.remove(1).is_none());
        let ids: Vec<PlayerId> = registry.all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }
}
