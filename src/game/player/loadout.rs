// Hand loadout: which hand the player holds and what the trigger does

use crate::engine::input::HandCycle;

/// What the trigger does with the current hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandMode {
    /// Bare fist: the trigger dash-punches
    Melee,
    /// Pistol: the trigger shoots
    Ranged,
}

/// Selected hand slot; cycles wrap around the available slots
#[derive(Debug, Clone)]
pub struct Loadout {
    slot: usize,
    slots: usize,
}

impl Loadout {
    /// Loadout holding the fist out of `slots` hands
    pub fn new(slots: usize) -> Self {
        Self {
            slot: 0,
            slots: slots.max(1),
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Select a slot directly, wrapping out-of-range values
    pub fn select(&mut self, slot: usize) {
        self.slot = slot % self.slots;
    }

    /// Step to the previous/next slot, wrapping at both ends
    pub fn cycle(&mut self, direction: HandCycle) {
        self.slot = match direction {
            HandCycle::Next => (self.slot + 1) % self.slots,
            HandCycle::Previous => (self.slot + self.slots - 1) % self.slots,
        };
    }

    /// Trigger behaviour of the current slot; extra slots are cosmetic
    pub fn mode(&self) -> Option<HandMode> {
        match self.slot {
            0 => Some(HandMode::Melee),
            1 => Some(HandMode::Ranged),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_fist() {
        let loadout = Loadout::new(2);
        assert_eq!(loadout.slot(), 0);
        assert_eq!(loadout.mode(), Some(HandMode::Melee));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut loadout = Loadout::new(2);
        loadout.cycle(HandCycle::Next);
        assert_eq!(loadout.mode(), Some(HandMode::Ranged));
        loadout.cycle(HandCycle::Next);
        assert_eq!(loadout.slot(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut loadout = Loadout::new(3);
        loadout.cycle(HandCycle::Previous);
        assert_eq!(loadout.slot(), 2);
        assert_eq!(loadout.mode(), None);
    }

    #[test]
    fn test_single_slot_never_moves() {
        let mut loadout = Loadout::new(1);
        loadout.cycle(HandCycle::Next);
        loadout.cycle(HandCycle::Previous);
        assert_eq!(loadout.slot(), 0);
    }

    #[test]
    fn test_select_wraps() {
        let mut loadout = Loadout::new(2);
        loadout.select(5);
        assert_eq!(loadout.slot(), 1);
    }
}
