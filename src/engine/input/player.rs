// Per-player input state management

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Direction of a loadout cycle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandCycle {
    Previous,
    Next,
}

/// Raw controls for one player for one simulation step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlState {
    /// Horizontal movement axis (-1 to 1)
    pub move_axis: f32,
    /// Hand cursor stick (each component -1 to 1)
    pub aim: Vec2,
    /// Jump was requested this step (edge)
    pub jump: bool,
    /// Shoot/dash trigger is held
    pub trigger: bool,
    /// Loadout cycle requested this step (edge)
    pub cycle: Option<HandCycle>,
}

impl ControlState {
    /// Controls with only a movement axis set
    pub fn moving(axis: f32) -> Self {
        Self {
            move_axis: axis,
            ..Self::default()
        }
    }

    /// Controls with only the aim stick set
    pub fn aiming(aim: Vec2) -> Self {
        Self {
            aim,
            ..Self::default()
        }
    }
}

/// Represents the input state for a single player
#[derive(Debug)]
pub struct PlayerInput {
    /// Player ID (0-based local slot)
    player_id: usize,

    /// Actions that are currently pressed this frame
    pressed: HashSet<Action>,

    /// Actions that were just pressed this frame (press events)
    just_pressed: HashSet<Action>,

    /// Actions that were just released this frame (release events)
    just_released: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Clear edge state at the end of a frame
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    fn axis(&self, negative: Action, positive: Action) -> f32 {
        let mut value = 0.0;
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        if self.is_pressed(positive) {
            value += 1.0;
        }
        value
    }

    /// Sample the current state as simulation controls
    pub fn controls(&self) -> ControlState {
        let cycle = match (
            self.just_pressed(Action::PrevHand),
            self.just_pressed(Action::NextHand),
        ) {
            (true, false) => Some(HandCycle::Previous),
            (false, true) => Some(HandCycle::Next),
            _ => None,
        };

        ControlState {
            move_axis: self.axis(Action::MoveLeft, Action::MoveRight),
            aim: Vec2::new(
                self.axis(Action::AimLeft, Action::AimRight),
                self.axis(Action::AimDown, Action::AimUp),
            ),
            jump: self.just_pressed(Action::Jump),
            trigger: self.is_pressed(Action::Trigger),
            cycle,
        }
    }
}
