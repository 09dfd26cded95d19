//! Deterministic level simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed maximum sub-step only
//! - Seeded RNG only (coin wobble phases, drawn at parse time)
//! - Stable iteration order (actor list order)
//! - No rendering, input devices or I/O

pub mod collision;
pub mod grid;
pub mod plan;
pub mod state;
pub mod tick;

/// 2-D point/offset used for positions, sizes and speeds
pub use glam::Vec2 as Vector;

pub use collision::{actor_at, boxes_overlap};
pub use grid::{Grid, Tile};
pub use plan::{Campaign, LevelPlan};
pub use state::{Actor, ActorId, ActorKind, Behavior, Level, Status, Touch};
pub use tick::{Scene, TickInput};
