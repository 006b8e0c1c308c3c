use rapier2d::prelude::*;

/// Named collision layers
///
/// Overlap queries ("is anything from the Ground layer under my feet?",
/// "which Players does my fist touch?") select colliders by these layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Player characters
    Player = 0b0000_0001,

    /// Floors and platforms players can stand on
    Ground = 0b0000_0010,
}

impl CollisionLayer {
    /// Raw membership bit
    pub fn group(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let filter = match self {
            // Players stand on the ground but pass through each other;
            // player-vs-player contact is resolved by overlap queries
            CollisionLayer::Player => CollisionLayer::Ground.group(),

            CollisionLayer::Ground => {
                CollisionLayer::Player.group() | CollisionLayer::Ground.group()
            }
        };

        InteractionGroups::new(self.group(), filter)
    }

    /// Query groups matching every collider that belongs to this layer
    pub fn query_groups(self) -> InteractionGroups {
        InteractionGroups::new(Group::ALL, self.group())
    }

    /// Check if a collider's groups place it on this layer
    pub fn contains(self, groups: InteractionGroups) -> bool {
        groups.memberships.intersects(self.group())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_bits_are_unique() {
        assert_ne!(CollisionLayer::Player as u32, CollisionLayer::Ground as u32);
    }

    #[test]
    fn test_player_doesnt_collide_with_player() {
        let groups = CollisionLayer::Player.to_interaction_groups();
        assert!(!groups.test(groups), "Players should pass through each other");
    }

    #[test]
    fn test_player_collides_with_ground() {
        let player = CollisionLayer::Player.to_interaction_groups();
        let ground = CollisionLayer::Ground.to_interaction_groups();
        assert!(player.test(ground));
    }

    #[test]
    fn test_query_groups_select_layer() {
        let player = CollisionLayer::Player.to_interaction_groups();
        let ground = CollisionLayer::Ground.to_interaction_groups();
        assert!(CollisionLayer::Ground.query_groups().test(ground));
        assert!(!CollisionLayer::Ground.query_groups().test(player));
        assert!(CollisionLayer::Player.query_groups().test(player));
        assert!(CollisionLayer::Ground.contains(ground));
        assert!(!CollisionLayer::Ground.contains(player));
    }
}
