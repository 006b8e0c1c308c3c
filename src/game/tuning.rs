// Gameplay tuning - ALL PLAYERS SHARE THE SAME NUMBERS
// Differentiation comes from the loadout (fist or pistol), not from stats

use super::error::TuningError;

/// Fixed player tuning, identical for every player
#[derive(Debug, Clone)]
pub struct PlayerTuning {
    // Movement
    /// Horizontal displacement speed (units/second)
    pub move_speed: f32,
    /// Upward velocity set by a jump
    pub jump_force: f32,
    /// Radius of the foot probe used for the grounded check
    pub ground_check_radius: f32,

    // Hand
    /// Maximum distance between the hand cursor and the body
    pub max_hand_distance: f32,
    /// Hand cursor speed (units/second at full stick)
    pub hand_speed: f32,
    /// Distance from the hand to the pistol muzzle
    pub muzzle_offset: f32,
    /// Number of hand slots in the loadout cycle
    pub hand_slots: usize,

    // Combat
    /// Seconds between pistol shots
    pub shoot_cooldown: f32,
    /// Seconds between dashes
    pub dash_cooldown: f32,
    /// How long a dash lasts
    pub dash_time: f32,
    /// Velocity change applied at the start of a dash
    pub dash_impulse: f32,
    /// Radius of the punch hit circle around the hand
    pub punch_radius: f32,
    /// Lives removed per hit
    pub hit_damage: i32,
    /// Knockback strength of a hit
    pub hit_force: f32,
    /// How long a hit player stays stunned
    pub stun_duration: f32,

    // Life
    /// Lives at spawn and after revival
    pub max_lives: i32,

    // Dimensions (for physics collider)
    /// Player width in world units
    pub width: f32,
    /// Player height in world units
    pub height: f32,
}

/// The ONE player tuning used by all players
pub const BASE_TUNING: PlayerTuning = PlayerTuning {
    move_speed: 10.0,
    jump_force: 20.0,
    ground_check_radius: 0.1,

    max_hand_distance: 1.5,
    hand_speed: 10.0,
    muzzle_offset: 0.5,
    hand_slots: 2,

    shoot_cooldown: 0.5,
    dash_cooldown: 2.0,
    dash_time: 0.5,
    dash_impulse: 35.0,
    punch_radius: 1.0,
    hit_damage: 1,
    hit_force: 20.0,
    stun_duration: 0.6,

    max_lives: 3,

    width: 1.0,
    height: 2.0,
};

impl Default for PlayerTuning {
    fn default() -> Self {
        BASE_TUNING
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field, value })
    }
}

impl PlayerTuning {
    /// Get the standard tuning (same for all players)
    pub fn standard() -> Self {
        BASE_TUNING
    }

    /// Reject tuning a player cannot be built from
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("move_speed", self.move_speed)?;
        positive("jump_force", self.jump_force)?;
        positive("ground_check_radius", self.ground_check_radius)?;
        positive("max_hand_distance", self.max_hand_distance)?;
        positive("hand_speed", self.hand_speed)?;
        positive("shoot_cooldown", self.shoot_cooldown)?;
        positive("dash_cooldown", self.dash_cooldown)?;
        positive("dash_time", self.dash_time)?;
        positive("punch_radius", self.punch_radius)?;
        positive("stun_duration", self.stun_duration)?;
        positive("width", self.width)?;
        positive("height", self.height)?;

        if self.hand_slots == 0 {
            return Err(TuningError::NoHandSlots);
        }
        if self.max_lives < 1 {
            return Err(TuningError::NoLives(self.max_lives));
        }
        Ok(())
    }
}

/// Pistol bullet tuning
#[derive(Debug, Clone)]
pub struct ProjectileTuning {
    /// Travel speed (units/second)
    pub speed: f32,
    /// Seconds before the bullet fizzles out
    pub lifetime: f32,
    /// Hit radius
    pub radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 20.0,
            lifetime: 2.0,
            radius: 0.2,
        }
    }
}

impl ProjectileTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("projectile.speed", self.speed)?;
        positive("projectile.lifetime", self.lifetime)?;
        positive("projectile.radius", self.radius)
    }
}

/// Match-wide feedback tuning
#[derive(Debug, Clone)]
pub struct MatchTuning {
    /// Simulation speed while a hit slow-motion is active
    pub slow_motion_scale: f32,
    /// Simulated seconds a hit slow-motion lasts
    pub slow_motion_duration: f32,
    /// Camera shake offset on a hit (world units)
    pub shake_magnitude: f32,
    /// Camera shake duration on a hit
    pub shake_duration: f32,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            slow_motion_scale: 0.3,
            slow_motion_duration: 0.2,
            shake_magnitude: 0.1,
            shake_duration: 1.0,
        }
    }
}

impl MatchTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("slow_motion_scale", self.slow_motion_scale)?;
        if self.slow_motion_scale > 1.0 {
            return Err(TuningError::SlowMotionTooFast(self.slow_motion_scale));
        }
        positive("slow_motion_duration", self.slow_motion_duration)?;
        positive("shake_duration", self.shake_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let tuning = PlayerTuning::default();
        assert_eq!(tuning.move_speed, 10.0);
        assert_eq!(tuning.jump_force, 20.0);
        assert_eq!(tuning.max_lives, 3);
        assert_eq!(tuning.max_hand_distance, 1.5);
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_standard_equals_default() {
        let standard = PlayerTuning::standard();
        let default = PlayerTuning::default();
        assert_eq!(standard.shoot_cooldown, default.shoot_cooldown);
        assert_eq!(standard.dash_cooldown, default.dash_cooldown);
    }

    #[test]
    fn test_rejects_non_positive_hand_distance() {
        let tuning = PlayerTuning {
            max_hand_distance: 0.0,
            ..PlayerTuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NonPositive {
                field: "max_hand_distance",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_loadout() {
        let tuning = PlayerTuning {
            hand_slots: 0,
            ..PlayerTuning::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::NoHandSlots)));
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = PlayerTuning {
            hand_speed: f32::NAN,
            ..PlayerTuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_match_tuning_scale_bounds() {
        assert!(MatchTuning::default().validate().is_ok());
        let too_fast = MatchTuning {
            slow_motion_scale: 2.0,
            ..MatchTuning::default()
        };
        assert!(matches!(
            too_fast.validate(),
            Err(TuningError::SlowMotionTooFast(_))
        ));
    }

    #[test]
    fn test_projectile_tuning_defaults_are_valid() {
        assert!(ProjectileTuning::default().validate().is_ok());
    }
}
