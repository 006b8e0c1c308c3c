// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Hand cursor
    AimUp,
    AimDown,
    AimLeft,
    AimRight,

    // Shoot with the pistol, dash-punch with the fist
    Trigger,

    // Loadout cycling (shoulder buttons)
    PrevHand,
    NextHand,

    // Meta actions
    StartRound,
    Pause,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings for Player 1 (left side of the keyboard)
pub fn default_p1_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::KeyT), Action::AimUp),
        (InputSource::key(KeyCode::KeyG), Action::AimDown),
        (InputSource::key(KeyCode::KeyF), Action::AimLeft),
        (InputSource::key(KeyCode::KeyH), Action::AimRight),
        (InputSource::key(KeyCode::Space), Action::Trigger),
        (InputSource::key(KeyCode::KeyQ), Action::PrevHand),
        (InputSource::key(KeyCode::KeyE), Action::NextHand),
    ]
}

/// Default keyboard bindings for Player 2 (arrows and numpad)
pub fn default_p2_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::Numpad8), Action::AimUp),
        (InputSource::key(KeyCode::Numpad5), Action::AimDown),
        (InputSource::key(KeyCode::Numpad4), Action::AimLeft),
        (InputSource::key(KeyCode::Numpad6), Action::AimRight),
        (InputSource::key(KeyCode::Numpad0), Action::Trigger),
        (InputSource::key(KeyCode::Numpad7), Action::PrevHand),
        (InputSource::key(KeyCode::Numpad9), Action::NextHand),
    ]
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::Enter), Action::StartRound),
        (InputSource::key(KeyCode::Escape), Action::Pause),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::KeyA);
        assert_eq!(source, InputSource::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_player_bindings_cover_every_player_action() {
        let actions = [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::AimUp,
            Action::AimDown,
            Action::AimLeft,
            Action::AimRight,
            Action::Trigger,
            Action::PrevHand,
            Action::NextHand,
        ];
        for bindings in [default_p1_bindings(), default_p2_bindings()] {
            for action in actions {
                assert!(bindings.iter().any(|(_, a)| *a == action), "{action:?} unbound");
            }
        }
    }

    #[test]
    fn test_no_key_is_shared_between_bindings() {
        let mut seen = HashSet::new();
        let all = default_p1_bindings()
            .into_iter()
            .chain(default_p2_bindings())
            .chain(global_bindings());
        for (source, _) in all {
            assert!(seen.insert(source), "Duplicate input source {source:?}");
        }
    }
}
