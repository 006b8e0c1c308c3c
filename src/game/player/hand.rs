// Aiming hand cursor

use glam::Vec2;

use crate::core::math::{angle_degrees, clamp_to_radius, direction_from_degrees};

/// Sprite rotation offset while the hand is right of the body
pub const RIGHT_SIDE_OFFSET: f32 = -35.0;
/// Sprite rotation offset while the hand is left of the body (mirrored)
pub const LEFT_SIDE_OFFSET: f32 = -145.0;

/// Which side of the body the hand is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Right,
    Left,
}

impl Facing {
    /// Horizontal sprite scale (mirrored when facing left)
    pub fn scale_x(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Rotation offset aligning the weapon sprite with the aim line
    pub fn rotation_offset(self) -> f32 {
        match self {
            Facing::Right => RIGHT_SIDE_OFFSET,
            Facing::Left => LEFT_SIDE_OFFSET,
        }
    }
}

/// Hand cursor attached to a player body
///
/// The cursor is stored relative to the body so it follows the player; its
/// distance from the body never exceeds the configured radius.
#[derive(Debug, Clone)]
pub struct HandCursor {
    offset: Vec2,
    facing: Facing,
    rotation: f32,
}

impl HandCursor {
    /// Cursor resting at `offset` from the body
    pub fn new(offset: Vec2, max_distance: f32) -> Self {
        let mut hand = Self {
            offset: Vec2::ZERO,
            facing: Facing::Right,
            rotation: 0.0,
        };
        hand.set_offset(offset, max_distance);
        hand
    }

    /// Move the cursor along the aim stick for one step
    pub fn update(&mut self, aim: Vec2, hand_speed: f32, max_distance: f32, dt: f32) {
        self.set_offset(self.offset + aim * hand_speed * dt, max_distance);
    }

    fn set_offset(&mut self, offset: Vec2, max_distance: f32) {
        self.offset = clamp_to_radius(offset, max_distance);

        let angle = angle_degrees(self.offset);
        self.facing = if self.offset.x > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        };
        self.rotation = angle + self.facing.rotation_offset();
    }

    /// Offset from the body
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// World position for a body at `body`
    pub fn world_position(&self, body: Vec2) -> Vec2 {
        body + self.offset
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Weapon sprite rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Angle projectiles leave at: the sprite rotation with the side offset
    /// taken back out
    pub fn aim_angle(&self) -> f32 {
        self.rotation - self.facing.rotation_offset()
    }

    /// Unit vector along the aim angle
    pub fn aim_direction(&self) -> Vec2 {
        direction_from_degrees(self.aim_angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hand_moves_with_stick() {
        let mut hand = HandCursor::new(Vec2::ZERO, 1.5);
        hand.update(Vec2::new(1.0, 0.0), 10.0, 1.5, 0.1);
        assert_relative_eq!(hand.offset().x, 1.0, epsilon = 1e-5);
        assert_eq!(hand.facing(), Facing::Right);
    }

    #[test]
    fn test_hand_offset_never_exceeds_radius() {
        let mut hand = HandCursor::new(Vec2::new(0.5, 0.0), 1.5);
        let sticks = [
            Vec2::new(100.0, 0.0),
            Vec2::new(-50.0, 75.0),
            Vec2::new(0.0, -1000.0),
            Vec2::new(3.0, 3.0),
        ];
        for stick in sticks {
            for _ in 0..20 {
                hand.update(stick, 10.0, 1.5, 1.0 / 60.0);
                assert!(hand.offset().length() <= 1.5 + 1e-4);
            }
        }
    }

    #[test]
    fn test_clamp_preserves_direction() {
        let hand = HandCursor::new(Vec2::new(0.0, 9.0), 1.5);
        assert_relative_eq!(hand.offset().x, 0.0);
        assert_relative_eq!(hand.offset().y, 1.5);
    }

    #[test]
    fn test_right_side_rotation() {
        // 45 degrees up-right
        let hand = HandCursor::new(Vec2::new(1.0, 1.0), 1.5);
        assert_eq!(hand.facing(), Facing::Right);
        assert_relative_eq!(hand.rotation(), 45.0 - 35.0, epsilon = 1e-4);
        assert_eq!(hand.facing().scale_x(), 1.0);
    }

    #[test]
    fn test_left_side_is_mirrored() {
        // 135 degrees up-left
        let hand = HandCursor::new(Vec2::new(-1.0, 1.0), 1.5);
        assert_eq!(hand.facing(), Facing::Left);
        assert_relative_eq!(hand.rotation(), 135.0 - 145.0, epsilon = 1e-4);
        assert_eq!(hand.facing().scale_x(), -1.0);
    }

    #[test]
    fn test_aim_direction_points_at_hand() {
        let hand = HandCursor::new(Vec2::new(-1.0, 0.0), 1.5);
        let dir = hand.aim_direction();
        assert_relative_eq!(dir.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_world_position_follows_body() {
        let hand = HandCursor::new(Vec2::new(1.0, 0.0), 1.5);
        assert_eq!(hand.world_position(Vec2::new(4.0, 2.0)), Vec2::new(5.0, 2.0));
    }
}
