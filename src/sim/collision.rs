//! Collision queries against the static grid and other actors
//!
//! Both queries are axis-aligned: actors are boxes `[pos, pos + size)`.

use glam::Vec2;

use super::grid::{Grid, Tile};
use super::state::{Actor, ActorId};

impl Grid {
    /// First solid or lethal tile touched by the box at `pos` with `size`
    ///
    /// Leaving the grid to the left, right or top counts as hitting a wall;
    /// leaving through the bottom counts as lava, so falling out kills.
    /// The side checks run before the bottom check.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Tile> {
        let x_start = pos.x.floor() as i64;
        let x_end = (pos.x + size.x).ceil() as i64;
        let y_start = pos.y.floor() as i64;
        let y_end = (pos.y + size.y).ceil() as i64;

        if x_start < 0 || x_end > self.width() as i64 || y_start < 0 {
            return Some(Tile::Wall);
        }
        if y_end > self.height() as i64 {
            return Some(Tile::Lava);
        }

        for y in y_start..y_end {
            for x in x_start..x_end {
                match self.tile(x as usize, y as usize) {
                    Some(tile) if !tile.is_empty() => return Some(tile),
                    _ => {}
                }
            }
        }
        None
    }
}

/// Open-interval box overlap on both axes (touching edges do not count)
#[inline]
pub fn boxes_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x + a_size.x > b_pos.x
        && a_pos.x < b_pos.x + b_size.x
        && a_pos.y + a_size.y > b_pos.y
        && a_pos.y < b_pos.y + b_size.y
}

/// First actor in list order, other than `actor`, whose box overlaps it
///
/// Actors listed in `removed` are already collected and are skipped.
pub fn actor_at<'a>(actor: &Actor, actors: &'a [Actor], removed: &[ActorId]) -> Option<&'a Actor> {
    actors.iter().find(|other| {
        other.id != actor.id
            && !removed.contains(&other.id)
            && boxes_overlap(actor.pos, actor.size, other.pos, other.size)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::plan::LevelPlan;
    use crate::sim::state::Level;
    use proptest::prelude::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .flat_map(|row| row.chars().map(Tile::from_char))
            .collect();
        Grid::from_cells(rows[0].len(), rows.len(), cells)
    }

    #[test]
    fn test_obstacle_inside_empty_grid() {
        let grid = grid_from(&["    ", "    ", "    "]);
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), None);
        assert_eq!(grid.obstacle_at(Vec2::new(0.0, 0.0), Vec2::new(4.0, 3.0)), None);
    }

    #[test]
    fn test_obstacle_finds_wall_and_lava() {
        let grid = grid_from(&["    ", " x! ", "    "]);
        // Box over both cells reports the first in row-major order
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.5, 1.2), Vec2::new(1.0, 0.5)),
            Some(Tile::Wall)
        );
        assert_eq!(
            grid.obstacle_at(Vec2::new(2.1, 0.5), Vec2::new(0.5, 1.0)),
            Some(Tile::Lava)
        );
        // Touching the wall's edge exactly does not cover its cell
        assert_eq!(grid.obstacle_at(Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_obstacle_edges() {
        let grid = grid_from(&["    ", "    ", "    "]);
        let size = Vec2::new(0.8, 1.5);

        assert_eq!(grid.obstacle_at(Vec2::new(-0.1, 1.0), size), Some(Tile::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(3.3, 1.0), size), Some(Tile::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, -0.1), size), Some(Tile::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(1.0, 1.6), size), Some(Tile::Lava));
    }

    #[test]
    fn test_obstacle_side_wins_over_bottom() {
        let grid = grid_from(&["    ", "    "]);
        let size = Vec2::new(1.0, 1.0);

        // Crossing the bottom and a side at once reports the side
        assert_eq!(grid.obstacle_at(Vec2::new(-0.5, 1.5), size), Some(Tile::Wall));
        assert_eq!(grid.obstacle_at(Vec2::new(3.5, 1.5), size), Some(Tile::Wall));
        // Taller than the grid: top and bottom at once reports the top
        assert_eq!(
            grid.obstacle_at(Vec2::new(1.0, -0.5), Vec2::new(1.0, 3.0)),
            Some(Tile::Wall)
        );
    }

    #[test]
    fn test_boxes_overlap_is_open_interval() {
        let size = Vec2::new(1.0, 1.0);
        assert!(boxes_overlap(Vec2::ZERO, size, Vec2::new(0.5, 0.5), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(1.0, 0.0), size));
        assert!(!boxes_overlap(Vec2::ZERO, size, Vec2::new(0.0, 1.0), size));
    }

    #[test]
    fn test_actor_at_first_match_in_list_order() {
        let plan = LevelPlan::new("overlap", &["      ", "@oo   ", "xxxxxx"]);
        let level = Level::from_plan(&plan, 1).unwrap();
        let actors = level.actors();
        let mut probe = actors[0].clone();
        // Wide enough to cover both coins
        probe.pos = Vec2::new(1.0, 1.0);
        probe.size = Vec2::new(2.0, 1.0);

        let hit = actor_at(&probe, actors, &[]).unwrap();
        assert_eq!(hit.id, actors[1].id);

        let hit = actor_at(&probe, actors, &[actors[1].id]).unwrap();
        assert_eq!(hit.id, actors[2].id);
    }

    #[test]
    fn test_actor_at_skips_self() {
        let plan = LevelPlan::new("alone", &["   ", " @ ", "xxx"]);
        let level = Level::from_plan(&plan, 1).unwrap();
        assert!(actor_at(level.player(), level.actors(), &[]).is_none());
    }

    proptest! {
        #[test]
        fn obstacle_matches_covered_cells(
            walls in proptest::collection::vec(any::<bool>(), 48),
            x in 0.0f32..6.0,
            y in 0.0f32..4.0,
            w in 0.1f32..2.0,
            h in 0.1f32..2.0,
        ) {
            let (width, height) = (8usize, 6usize);
            let cells: Vec<Tile> = walls
                .iter()
                .map(|&wall| if wall { Tile::Wall } else { Tile::Empty })
                .collect();
            let grid = Grid::from_cells(width, height, cells);

            let x0 = x.floor() as usize;
            let x1 = (x + w).ceil() as usize;
            let y0 = y.floor() as usize;
            let y1 = (y + h).ceil() as usize;
            let any_wall = (y0..y1).any(|cy| (x0..x1).any(|cx| walls[cy * width + cx]));

            let hit = grid.obstacle_at(Vec2::new(x, y), Vec2::new(w, h));
            prop_assert_eq!(hit.is_some(), any_wall);
        }

        #[test]
        fn obstacle_outside_sides_is_wall(
            x in -3.0f32..-0.01,
            y in 0.0f32..2.0,
        ) {
            let grid = Grid::from_cells(4, 4, vec![Tile::Empty; 16]);
            let size = Vec2::new(1.0, 1.0);
            prop_assert_eq!(grid.obstacle_at(Vec2::new(x, y), size), Some(Tile::Wall));
            prop_assert_eq!(grid.obstacle_at(Vec2::new(y, x), size), Some(Tile::Wall));
            prop_assert_eq!(grid.obstacle_at(Vec2::new(3.01 - x, y), size), Some(Tile::Wall));
        }

        #[test]
        fn obstacle_below_bottom_is_lava(
            x in 0.0f32..3.0,
            y in 3.01f32..6.0,
        ) {
            let grid = Grid::from_cells(4, 4, vec![Tile::Empty; 16]);
            let size = Vec2::new(1.0, 1.0);
            prop_assert_eq!(grid.obstacle_at(Vec2::new(x, y), size), Some(Tile::Lava));
        }
    }
}
