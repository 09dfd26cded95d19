//! Renderer contract
//!
//! Renderers only read the level: grid size and tiles, and each live actor's
//! kind, position and size. `TextDisplay` draws a level with the same
//! alphabet the plans use, which is handy for logs and tests.

use crate::sim::{Actor, ActorKind, Behavior, Level, Status, Tile};

/// Something that can show a level after each `animate` call
pub trait Renderer {
    /// Redraw the current state of `level`
    fn draw_frame(&mut self, level: &Level);
    /// Tear down whatever the renderer shows (level finished)
    fn clear(&mut self);
}

/// Text renderer: one string per grid row
#[derive(Debug, Clone, Default)]
pub struct TextDisplay {
    rows: Vec<String>,
    status: Option<Status>,
}

impl TextDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the last drawn frame
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Status of the level in the last drawn frame
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Last frame as one string, rows separated by newlines
    pub fn frame(&self) -> String {
        self.rows.join("\n")
    }
}

impl Renderer for TextDisplay {
    fn draw_frame(&mut self, level: &Level) {
        let width = level.width();
        let mut cells: Vec<char> = level
            .grid()
            .rows()
            .flat_map(|row| row.iter().map(|&tile| tile_char(tile)))
            .collect();

        for actor in level.actors() {
            // Actors are drawn in the cell holding the center of their box
            let center = actor.pos + actor.size * 0.5;
            if center.x < 0.0 || center.y < 0.0 {
                continue;
            }
            let (x, y) = (center.x as usize, center.y as usize);
            if x < width && y < level.height() {
                cells[y * width + x] = actor_char(actor);
            }
        }

        self.rows = cells
            .chunks(width.max(1))
            .map(|row| row.iter().collect())
            .collect();
        self.status = Some(level.status());
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.status = None;
    }
}

fn tile_char(tile: Tile) -> char {
    match tile {
        Tile::Empty => ' ',
        Tile::Wall => 'x',
        Tile::Lava => '!',
    }
}

fn actor_char(actor: &Actor) -> char {
    match (actor.kind(), actor.behavior) {
        (ActorKind::Player, _) => '@',
        (ActorKind::Coin, _) => 'o',
        (_, Behavior::Hazard { reset_pos: Some(_), .. }) => 'v',
        (_, Behavior::Hazard { speed, .. }) if speed.x != 0.0 => '=',
        _ => '|',
    }
}
