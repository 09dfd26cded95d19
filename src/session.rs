//! Level progression for a driver loop
//!
//! A `Session` plays a campaign one level at a time: a lost level restarts,
//! a won level advances, and winning the last level completes the run.

use crate::error::CampaignError;
use crate::settings::Settings;
use crate::sim::{Campaign, Level, Status, TickInput};

/// What happened during one `Session::frame` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The current level keeps going
    Playing,
    /// The current level was lost and started over
    Restarted { level: usize },
    /// The current level was won and the next one started
    Advanced { level: usize },
    /// The last level was won
    Completed,
}

/// A campaign in progress
#[derive(Debug, Clone)]
pub struct Session {
    /// Freshly parsed levels, cloned on every (re)start
    templates: Vec<Level>,
    index: usize,
    level: Level,
    settings: Settings,
    attempts: u32,
    completed: bool,
}

impl Session {
    /// Parse every level up front and start the first one
    pub fn new(campaign: &Campaign, settings: &Settings) -> Result<Self, CampaignError> {
        if campaign.is_empty() {
            return Err(CampaignError::Empty);
        }

        let templates = campaign
            .levels
            .iter()
            .enumerate()
            .map(|(i, plan)| {
                Level::from_plan(plan, settings.seed.wrapping_add(i as u64)).map_err(|source| {
                    CampaignError::Plan {
                        name: plan.name.clone(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let level = templates[0].clone();
        log::info!("Starting level 1/{}: {}", templates.len(), level.name());

        Ok(Self {
            templates,
            index: 0,
            level,
            settings: settings.clone(),
            attempts: 1,
            completed: false,
        })
    }

    /// Level currently being played
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Zero-based index of the current level
    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn level_count(&self) -> usize {
        self.templates.len()
    }

    /// Attempts at the current level, including the one in progress
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Feed one frame into the current level and apply the run policy
    ///
    /// `elapsed` goes through `Settings::clamp_frame` so a stalled driver
    /// does not produce one huge physics jump.
    pub fn frame(&mut self, elapsed: f32, input: &TickInput) -> SessionEvent {
        if self.completed {
            return SessionEvent::Completed;
        }

        let elapsed = self.settings.clamp_frame(elapsed);
        self.level.animate(elapsed, input);

        if !self.level.is_finished() {
            return SessionEvent::Playing;
        }

        match self.level.status() {
            Status::Lost => {
                self.attempts += 1;
                log::info!(
                    "Lost level {} ({}), attempt {}",
                    self.index + 1,
                    self.level.name(),
                    self.attempts
                );
                self.level = self.templates[self.index].clone();
                SessionEvent::Restarted { level: self.index }
            }
            Status::Won if self.index + 1 < self.templates.len() => {
                self.index += 1;
                self.attempts = 1;
                self.level = self.templates[self.index].clone();
                log::info!(
                    "Starting level {}/{}: {}",
                    self.index + 1,
                    self.templates.len(),
                    self.level.name()
                );
                SessionEvent::Advanced { level: self.index }
            }
            Status::Won => {
                log::info!("All {} levels won", self.templates.len());
                self.completed = true;
                SessionEvent::Completed
            }
            // is_finished() implies a decided level
            Status::Running => SessionEvent::Playing,
        }
    }
}
