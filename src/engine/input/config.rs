// Input configuration and remapping system

use super::action::{default_p1_bindings, default_p2_bindings, global_bindings, Action, InputSource};
use std::collections::HashMap;

/// Input configuration for a single player
/// Maps input sources (keys) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Player ID this config is for
    player_id: usize,

    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create a new, empty input configuration
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_id: usize, bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new(player_id);
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Default bindings for a local player slot
    pub fn defaults_for(player_id: usize) -> Self {
        let bindings = match player_id {
            0 => default_p1_bindings(),
            1 => default_p2_bindings(),
            _ => Vec::new(), // Only two keyboard players fit on one keyboard
        };
        Self::from_bindings(player_id, bindings)
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Bind an input source to an action, replacing any previous binding of
    /// that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        self.bindings.remove(&source);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.bindings.values().any(|bound| *bound == action)
    }
}

/// Manager for all player input configurations
#[derive(Debug)]
pub struct InputConfigManager {
    /// Configurations for each player
    configs: Vec<InputConfig>,

    /// Global bindings (not player-specific)
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Create a config manager with default bindings for `max_players`
    pub fn new(max_players: usize) -> Self {
        Self {
            configs: (0..max_players).map(InputConfig::defaults_for).collect(),
            global_config: InputConfig::from_bindings(usize::MAX, global_bindings()),
        }
    }

    pub fn get_config(&self, player_id: usize) -> Option<&InputConfig> {
        self.configs.get(player_id)
    }

    pub fn get_config_mut(&mut self, player_id: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_id)
    }

    /// Get the action a player has bound to a source
    pub fn get_action(&self, player_id: usize, source: InputSource) -> Option<Action> {
        self.configs
            .get(player_id)
            .and_then(|config| config.get_action(source))
    }

    /// Get the global action bound to a source
    pub fn get_global_action(&self, source: InputSource) -> Option<Action> {
        self.global_config.get_action(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_and_rebind_source() {
        let mut config = InputConfig::new(0);
        let key = InputSource::key(KeyCode::KeyZ);

        config.bind(key, Action::Jump);
        assert_eq!(config.get_action(key), Some(Action::Jump));

        config.bind(key, Action::Trigger);
        assert_eq!(config.get_action(key), Some(Action::Trigger));
        assert!(!config.has_binding(Action::Jump));
    }

    #[test]
    fn test_unbind_source() {
        let mut config = InputConfig::defaults_for(0);
        let key = InputSource::key(KeyCode::KeyW);
        config.unbind_source(key);
        assert_eq!(config.get_action(key), None);
        assert!(!config.has_binding(Action::Jump));
    }

    #[test]
    fn test_extra_players_have_no_defaults() {
        let config = InputConfig::defaults_for(2);
        assert!(!config.has_binding(Action::Jump));
    }

    #[test]
    fn test_manager_routes_keys_per_player() {
        let manager = InputConfigManager::new(2);
        let w = InputSource::key(KeyCode::KeyW);
        let up = InputSource::key(KeyCode::ArrowUp);

        assert_eq!(manager.get_action(0, w), Some(Action::Jump));
        assert_eq!(manager.get_action(1, w), None);
        assert_eq!(manager.get_action(1, up), Some(Action::Jump));
        assert_eq!(manager.get_action(5, up), None);
    }

    #[test]
    fn test_global_bindings() {
        let manager = InputConfigManager::new(2);
        assert_eq!(
            manager.get_global_action(InputSource::key(KeyCode::Enter)),
            Some(Action::StartRound)
        );
    }
}
