//! Lava Leap - A tile-map platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic level simulation (parsing, physics, win/lose state)
//! - `session`: Level progression policy for a driver loop
//! - `display`: Renderer contract plus a text renderer for headless runs
//! - `settings`: Driver configuration

pub mod display;
pub mod error;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{CampaignError, PlanError};
pub use session::{Session, SessionEvent};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Longest physics sub-step (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// Longest frame the driver feeds into a level after a stall (seconds)
    pub const MAX_FRAME_SECS: f32 = 0.1;
    /// Countdown after a win or loss before the level counts as finished
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player horizontal speed (units/s)
    pub const PLAYER_X_SPEED: f32 = 7.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 30.0;
    /// Upward speed applied on jump/bounce (units/s)
    pub const JUMP_SPEED: f32 = 17.0;
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    /// Player spawns half a cell up so it stands on the floor below its cell
    pub const PLAYER_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Coin wobble phase speed (radians/s)
    pub const WOBBLE_SPEED: f32 = 8.0;
    /// Coin wobble amplitude (units)
    pub const WOBBLE_DIST: f32 = 0.07;
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    pub const COIN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);

    pub const HAZARD_SIZE: Vec2 = Vec2::new(1.0, 1.0);
    /// `=` hazards sweep sideways
    pub const HORIZONTAL_HAZARD_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    /// `|` hazards sweep up and down
    pub const VERTICAL_HAZARD_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    /// `v` hazards drip down and restart from their spawn cell
    pub const DRIP_HAZARD_SPEED: Vec2 = Vec2::new(0.0, 3.0);
}
