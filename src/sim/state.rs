//! Level state and actor types
//!
//! A `Level` owns everything the simulation mutates. Actors are plain values
//! tagged by behaviour; the list keeps parse order and only shrinks when a
//! coin is collected.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::{Grid, Tile};
use crate::consts::*;

/// Stable actor identity, assigned in parse order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Kind of actor, as seen by the renderer and the touch handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Coin,
    Hazard,
}

/// Per-kind state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    Player {
        speed: Vec2,
    },
    Coin {
        base_pos: Vec2,
        /// Wobble phase (radians), randomized at spawn
        wobble: f32,
    },
    Hazard {
        speed: Vec2,
        /// Drip hazards jump back here when blocked instead of bouncing
        reset_pos: Option<Vec2>,
    },
}

/// A moving entity with an axis-aligned bounding box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    pub behavior: Behavior,
}

impl Actor {
    /// Player standing on the floor under `cell`
    pub fn player(id: ActorId, cell: Vec2) -> Self {
        Self {
            id,
            pos: cell + PLAYER_OFFSET,
            size: PLAYER_SIZE,
            behavior: Behavior::Player { speed: Vec2::ZERO },
        }
    }

    pub fn coin(id: ActorId, cell: Vec2, wobble: f32) -> Self {
        let base_pos = cell + COIN_OFFSET;
        Self {
            id,
            pos: base_pos,
            size: COIN_SIZE,
            behavior: Behavior::Coin { base_pos, wobble },
        }
    }

    /// Hazard for a plan character (`=`, `|` or `v`)
    pub fn hazard(id: ActorId, cell: Vec2, ch: char) -> Option<Self> {
        let (speed, reset_pos) = match ch {
            '=' => (HORIZONTAL_HAZARD_SPEED, None),
            '|' => (VERTICAL_HAZARD_SPEED, None),
            'v' => (DRIP_HAZARD_SPEED, Some(cell)),
            _ => return None,
        };
        Some(Self {
            id,
            pos: cell,
            size: HAZARD_SIZE,
            behavior: Behavior::Hazard { speed, reset_pos },
        })
    }

    pub fn kind(&self) -> ActorKind {
        match self.behavior {
            Behavior::Player { .. } => ActorKind::Player,
            Behavior::Coin { .. } => ActorKind::Coin,
            Behavior::Hazard { .. } => ActorKind::Hazard,
        }
    }

    /// Current velocity (zero for coins)
    pub fn speed(&self) -> Vec2 {
        match self.behavior {
            Behavior::Player { speed } | Behavior::Hazard { speed, .. } => speed,
            Behavior::Coin { .. } => Vec2::ZERO,
        }
    }

    /// Touch event the player raises when overlapping this actor.
    /// The player cannot touch itself.
    pub fn touch(&self) -> Option<Touch> {
        match self.kind() {
            ActorKind::Player => None,
            ActorKind::Coin => Some(Touch::Coin(self.id)),
            ActorKind::Hazard => Some(Touch::Hazard(self.id)),
        }
    }
}

/// Something the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Touch {
    Wall,
    Lava,
    Coin(ActorId),
    /// Moving lava; lethal like a lava tile
    Hazard(ActorId),
}

impl From<Tile> for Touch {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Lava => Touch::Lava,
            Tile::Wall | Tile::Empty => Touch::Wall,
        }
    }
}

/// Win/lose status of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Running,
    Won,
    Lost,
}

/// Status bookkeeping, split from the actor list so actors can report
/// touches while the list is borrowed
#[derive(Debug, Clone, Default, Serialize)]
pub struct Outcome {
    pub(crate) status: Status,
    /// Seconds left before the level is finished; only meaningful once decided
    pub(crate) finish_delay: f32,
    /// Coins picked up during the current sub-step, removed once it completes
    pub(crate) collected: Vec<ActorId>,
}

impl Outcome {
    /// Apply a player touch. The only place status changes.
    pub fn player_touched(&mut self, touch: Touch, actors: &[Actor]) {
        match touch {
            Touch::Lava | Touch::Hazard(_) if self.status == Status::Running => {
                log::debug!("Player touched lava, level lost");
                self.status = Status::Lost;
                self.finish_delay = FINISH_DELAY;
            }
            Touch::Coin(id) => {
                let is_coin = actors
                    .iter()
                    .any(|a| a.id == id && a.kind() == ActorKind::Coin);
                if !is_coin {
                    log::debug!("Ignoring touch of unknown coin {:?}", id);
                    return;
                }
                if self.collected.contains(&id) {
                    return;
                }
                self.collected.push(id);
                let coins_left = actors
                    .iter()
                    .filter(|a| a.kind() == ActorKind::Coin && !self.collected.contains(&a.id))
                    .count();
                log::debug!("Coin {:?} collected, {} left", id, coins_left);

                if coins_left == 0 && self.status == Status::Running {
                    log::debug!("Last coin collected, level won");
                    self.status = Status::Won;
                    self.finish_delay = FINISH_DELAY;
                }
            }
            _ => {}
        }
    }
}

/// A level instance: static grid, live actors and win/lose status
///
/// Only built by the plan parser, so it is `Serialize` but not `Deserialize`.
#[derive(Debug, Clone, Serialize)]
pub struct Level {
    pub(crate) name: String,
    pub(crate) grid: Grid,
    pub(crate) actors: Vec<Actor>,
    /// Index of the player in `actors`
    pub(crate) player: usize,
    pub(crate) outcome: Outcome,
}

impl Level {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Live actors in parse order
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn player(&self) -> &Actor {
        &self.actors[self.player]
    }

    pub fn status(&self) -> Status {
        self.outcome.status
    }

    pub fn finish_delay(&self) -> f32 {
        self.outcome.finish_delay
    }

    pub fn coins_left(&self) -> usize {
        self.actors
            .iter()
            .filter(|a| a.kind() == ActorKind::Coin)
            .count()
    }

    /// True once the level is decided and its finish delay has run out
    pub fn is_finished(&self) -> bool {
        self.outcome.status != Status::Running && self.outcome.finish_delay < 0.0
    }

    /// First other live actor overlapping `actor`
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        super::collision::actor_at(actor, &self.actors, &self.outcome.collected)
    }

    /// Report a player touch and apply any coin removal right away
    pub fn player_touched(&mut self, touch: Touch) {
        self.outcome.player_touched(touch, &self.actors);
        self.remove_collected();
    }

    /// Drop coins collected during the last sub-step
    pub(crate) fn remove_collected(&mut self) {
        if self.outcome.collected.is_empty() {
            return;
        }
        let collected = std::mem::take(&mut self.outcome.collected);
        let shift = self.actors[..self.player]
            .iter()
            .filter(|a| collected.contains(&a.id))
            .count();
        self.actors.retain(|a| !collected.contains(&a.id));
        self.player -= shift;
    }
}
