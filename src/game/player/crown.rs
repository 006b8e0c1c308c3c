// Crown cosmetic tier earned by winning rounds

/// Plain RGB colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Crown shown above a player and on their HUD badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrownTier {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Diamond,
    Ruby,
}

impl CrownTier {
    /// Highest win count with a crown
    pub const MAX_WINS: u32 = 5;

    /// Tier for a win count; `None` when the count has no crown defined
    pub fn from_wins(wins: u32) -> Option<CrownTier> {
        match wins {
            0 => Some(CrownTier::None),
            1 => Some(CrownTier::Bronze),
            2 => Some(CrownTier::Silver),
            3 => Some(CrownTier::Gold),
            4 => Some(CrownTier::Diamond),
            5 => Some(CrownTier::Ruby),
            _ => None,
        }
    }

    /// Numeric tier, 0 (no crown) to 5
    pub fn level(self) -> u8 {
        match self {
            CrownTier::None => 0,
            CrownTier::Bronze => 1,
            CrownTier::Silver => 2,
            CrownTier::Gold => 3,
            CrownTier::Diamond => 4,
            CrownTier::Ruby => 5,
        }
    }

    /// Crown tint
    pub fn color(self) -> Rgb {
        match self {
            CrownTier::None => Rgb::WHITE,
            CrownTier::Bronze => Rgb::new(0.8, 0.5, 0.2),
            CrownTier::Silver => Rgb::new(0.8, 0.8, 0.8),
            CrownTier::Gold => Rgb::new(1.0, 0.8, 0.0),
            CrownTier::Diamond => Rgb::new(0.2, 0.8, 0.8),
            CrownTier::Ruby => Rgb::new(0.8, 0.2, 0.2),
        }
    }

    /// Whether a crown is drawn at all
    pub fn is_visible(self) -> bool {
        self != CrownTier::None
    }
}
