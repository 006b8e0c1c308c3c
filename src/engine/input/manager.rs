// Input manager - Main coordination system for all input

use super::action::{Action, InputSource};
use super::config::InputConfigManager;
use super::player::{ControlState, PlayerInput};
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Main input manager that coordinates all input for all local players
pub struct InputManager {
    /// Configuration manager for all players
    config: InputConfigManager,

    /// Input state for each player
    players: Vec<PlayerInput>,

    /// Global actions pressed since the last update
    global_just_pressed: HashSet<Action>,
}

impl InputManager {
    /// Create a new input manager
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(PlayerInput::new).collect(),
            global_just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_source(InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Route a press/release of a source to every player bound to it
    pub fn process_source(&mut self, source: InputSource, state: ElementState, repeat: bool) {
        // Key repeats never count as new presses
        if state == ElementState::Pressed && repeat {
            return;
        }

        if state == ElementState::Pressed {
            if let Some(action) = self.config.get_global_action(source) {
                self.global_just_pressed.insert(action);
            }
        }

        for player in &mut self.players {
            let Some(action) = self.config.get_action(player.player_id(), source) else {
                continue;
            };
            match state {
                ElementState::Pressed => player.press(action),
                ElementState::Released => player.release(action),
            }
        }
    }

    /// Clear global edges once the frame has handled them
    pub fn clear_global(&mut self) {
        self.global_just_pressed.clear();
    }

    /// Get input state for a specific player
    pub fn player(&self, player_id: usize) -> Option<&PlayerInput> {
        self.players.get(player_id)
    }

    /// Controls for a player slot, neutral if the slot does not exist
    pub fn controls(&self, player_id: usize) -> ControlState {
        self.players
            .get(player_id)
            .map(PlayerInput::controls)
            .unwrap_or_default()
    }

    /// Controls for one simulation step; jump and loadout presses are
    /// handed out once and not repeated on later steps
    pub fn take_controls(&mut self, player_id: usize) -> ControlState {
        let controls = self.controls(player_id);
        if let Some(player) = self.players.get_mut(player_id) {
            player.update();
        }
        controls
    }

    /// Check if a global action was pressed since the last clear
    pub fn global_just_pressed(&self, action: Action) -> bool {
        self.global_just_pressed.contains(&action)
    }

    /// Reset all player input states
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
        self.global_just_pressed.clear();
    }

    /// Get the number of players
    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(2)
    }
}
