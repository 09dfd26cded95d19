//! Driver settings
//!
//! Stored as JSON next to the binary or wherever `--settings` points.
//! Physics constants are not configurable; see `consts`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_SECS;

/// Settings for a driver loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for coin wobble phases
    pub seed: u64,
    /// Longest frame passed to the simulation after a stall (seconds)
    pub max_frame_secs: f32,

    // === Headless run ===
    /// Simulated frame duration (seconds)
    pub frame_secs: f32,
    /// Stop after this many frames even if the campaign is not done
    pub max_frames: u32,
    /// JSON campaign to play instead of the stock levels
    pub levels_path: Option<PathBuf>,
    /// Print the last frame as text when the run ends
    pub show_final_frame: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            max_frame_secs: MAX_FRAME_SECS,

            frame_secs: 1.0 / 60.0,
            max_frames: 60 * 60,
            levels_path: None,
            show_final_frame: true,
        }
    }
}

impl Settings {
    /// Longest frame the simulation accepts. A non-positive or non-finite
    /// `max_frame_secs` counts as the default.
    pub fn frame_limit(&self) -> f32 {
        if self.max_frame_secs.is_finite() && self.max_frame_secs > 0.0 {
            self.max_frame_secs
        } else {
            MAX_FRAME_SECS
        }
    }

    /// Clamp a raw frame duration to what the simulation accepts
    ///
    /// Negative and NaN durations become zero.
    pub fn clamp_frame(&self, elapsed: f32) -> f32 {
        elapsed.max(0.0).min(self.frame_limit())
    }

    /// Replace values the driver cannot use with their defaults
    pub fn sanitized(mut self) -> Self {
        let limit = self.frame_limit();
        if limit != self.max_frame_secs {
            log::warn!(
                "Invalid max_frame_secs {}, using {}",
                self.max_frame_secs,
                limit
            );
            self.max_frame_secs = limit;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(err) => log::warn!("Ignoring malformed settings {}: {}", path.display(), err),
            },
            Err(err) => log::warn!("Cannot read settings {}: {}", path.display(), err),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
