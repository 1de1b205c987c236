//! Player/obstacle collision detection
//!
//! Hitboxes are the sprite bounds shrunk by a fixed padding on every side so
//! that near misses stay forgiving. A sprite too small to survive the shrink
//! has no hitbox and never collides.

use super::bounds::Bounds;
use super::obstacles::Obstacle;

/// Padding-shrunk hitbox, or `None` if nothing is left of the sprite
#[inline]
pub fn hitbox(bounds: &Bounds, padding: f32) -> Option<Bounds> {
    bounds.shrink(padding)
}

/// True if the two sprites' hitboxes overlap
pub fn hitboxes_overlap(a: &Bounds, b: &Bounds, padding: f32) -> bool {
    match (hitbox(a, padding), hitbox(b, padding)) {
        (Some(a), Some(b)) => a.overlaps(&b),
        _ => false,
    }
}

/// Id of the first obstacle whose hitbox overlaps the player's
///
/// Obstacles are checked in list order and the scan stops at the first hit.
pub fn first_collision(player: &Bounds, obstacles: &[Obstacle], padding: f32) -> Option<u32> {
    let player_hitbox = hitbox(player, padding)?;
    obstacles
        .iter()
        .find(|o| hitbox(&o.bounds(), padding).is_some_and(|h| player_hitbox.overlaps(&h)))
        .map(|o| o.id)
}

/// True if the player hits any obstacle
pub fn check_collision(player: &Bounds, obstacles: &[Obstacle], padding: f32) -> bool {
    first_collision(player, obstacles, padding).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::ObstacleKind;
    use glam::Vec2;
    use proptest::prelude::*;

    fn obstacle(id: u32, x: f32, y: f32, size: f32) -> Obstacle {
        Obstacle {
            id,
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            speed: 8.0,
            kind: ObstacleKind::Axe,
        }
    }

    #[test]
    fn test_padded_overlap() {
        // Hitboxes: player 40..160, obstacle 140..260 on both axes
        let player = Bounds::new(0.0, 0.0, 200.0, 200.0);
        let obstacles = [obstacle(0, 100.0, 100.0, 200.0)];
        assert!(check_collision(&player, &obstacles, 40.0));
    }

    #[test]
    fn test_sprite_overlap_but_hitboxes_miss() {
        // Sprites overlap by 60px, hitboxes are 20px apart
        let player = Bounds::new(0.0, 0.0, 200.0, 200.0);
        let obstacles = [obstacle(0, 140.0, 0.0, 200.0)];
        assert!(!check_collision(&player, &obstacles, 40.0));
        assert!(check_collision(&player, &obstacles, 0.0));
    }

    #[test]
    fn test_touching_hitboxes_miss() {
        // Player hitbox 40..160, obstacle hitbox 160..280
        let player = Bounds::new(0.0, 0.0, 200.0, 200.0);
        let obstacles = [obstacle(0, 120.0, 0.0, 200.0)];
        assert!(!check_collision(&player, &obstacles, 40.0));
    }

    #[test]
    fn test_first_collision_in_list_order() {
        let player = Bounds::new(150.0, 390.0, 300.0, 300.0);
        let obstacles = [
            obstacle(3, 2000.0, 440.0, 200.0),
            obstacle(4, 300.0, 440.0, 200.0),
            obstacle(5, 250.0, 440.0, 200.0),
        ];
        assert_eq!(first_collision(&player, &obstacles, 40.0), Some(4));
        assert_eq!(first_collision(&player, &obstacles[..1], 40.0), None);
    }

    #[test]
    fn test_degenerate_hitboxes_never_collide() {
        let player = Bounds::new(0.0, 0.0, 80.0, 80.0);
        let obstacles = [obstacle(0, 0.0, 0.0, 200.0)];
        assert!(!check_collision(&player, &obstacles, 40.0));

        let player = Bounds::new(0.0, 0.0, 300.0, 300.0);
        let obstacles = [obstacle(0, 100.0, 100.0, 60.0)];
        assert!(!check_collision(&player, &obstacles, 40.0));
    }

    #[test]
    fn test_empty_list() {
        let player = Bounds::new(0.0, 0.0, 300.0, 300.0);
        assert!(!check_collision(&player, &[], 40.0));
    }

    fn reference_overlap(p: &Bounds, o: &Bounds, pad: f32) -> bool {
        let (px, py, pw, ph) = (p.x + pad, p.y + pad, p.width - 2.0 * pad, p.height - 2.0 * pad);
        let (ox, oy, ow, oh) = (o.x + pad, o.y + pad, o.width - 2.0 * pad, o.height - 2.0 * pad);
        pw > 0.0
            && ph > 0.0
            && ow > 0.0
            && oh > 0.0
            && px < ox + ow
            && px + pw > ox
            && py < oy + oh
            && py + ph > oy
    }

    proptest! {
        #[test]
        fn prop_single_obstacle_matches_padded_aabb(
            px in -500i32..500, py in -500i32..500, pw in 1i32..400, ph in 1i32..400,
            ox in -500i32..500, oy in -500i32..500, size in 1i32..400,
            pad in 0i32..60,
        ) {
            let player = Bounds::new(px as f32, py as f32, pw as f32, ph as f32);
            let o = obstacle(0, ox as f32, oy as f32, size as f32);
            let expected = reference_overlap(&player, &o.bounds(), pad as f32);
            prop_assert_eq!(check_collision(&player, &[o], pad as f32), expected);
        }

        #[test]
        fn prop_overlap_is_symmetric(
            ax in -300i32..300, ay in -300i32..300, aw in 1i32..300, ah in 1i32..300,
            bx in -300i32..300, by in -300i32..300, bw in 1i32..300, bh in 1i32..300,
            pad in 0i32..40,
        ) {
            let a = Bounds::new(ax as f32, ay as f32, aw as f32, ah as f32);
            let b = Bounds::new(bx as f32, by as f32, bw as f32, bh as f32);
            prop_assert_eq!(hitboxes_overlap(&a, &b, pad as f32), hitboxes_overlap(&b, &a, pad as f32));
        }
    }
}
