//! Level plans and the plan parser
//!
//! A plan is a rectangle of single-character rows:
//! `x` wall, `!` lava, `@` player, `o` coin, `=` `|` `v` moving lava.
//! Any other character is empty space.

use std::path::Path;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Grid, Tile};
use super::state::{Actor, ActorId, Level, Outcome};
use crate::error::{CampaignError, PlanError};

/// A named tile map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPlan {
    pub name: String,
    pub rows: Vec<String>,
}

impl LevelPlan {
    pub fn new(name: &str, rows: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            rows: rows.iter().map(|row| row.to_string()).collect(),
        }
    }
}

impl Level {
    /// Parse a plan, seeding coin wobble phases from `seed`
    pub fn from_plan(plan: &LevelPlan, seed: u64) -> Result<Self, PlanError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_rng(plan, &mut rng)
    }

    /// Parse a plan, drawing coin wobble phases from `rng`
    pub fn with_rng<R: Rng>(plan: &LevelPlan, rng: &mut R) -> Result<Self, PlanError> {
        let first = plan.rows.first().ok_or(PlanError::NoRows)?;
        let width = first.chars().count();
        if width == 0 {
            return Err(PlanError::EmptyRow);
        }
        let height = plan.rows.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut actors = Vec::new();
        let mut player: Option<(usize, (usize, usize))> = None;

        for (y, row) in plan.rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(PlanError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                let cell = Vec2::new(x as f32, y as f32);
                let id = ActorId(actors.len() as u32);
                match ch {
                    '@' => {
                        if let Some((_, first)) = player {
                            return Err(PlanError::DuplicatePlayer {
                                first,
                                second: (x, y),
                            });
                        }
                        player = Some((actors.len(), (x, y)));
                        actors.push(Actor::player(id, cell));
                    }
                    'o' => {
                        let wobble = rng.random::<f32>() * std::f32::consts::TAU;
                        actors.push(Actor::coin(id, cell, wobble));
                    }
                    _ => {
                        if let Some(hazard) = Actor::hazard(id, cell, ch) {
                            actors.push(hazard);
                        }
                    }
                }
                cells.push(Tile::from_char(ch));
            }
        }

        let (player, _) = player.ok_or(PlanError::MissingPlayer)?;

        Ok(Level {
            name: plan.name.clone(),
            grid: Grid::from_cells(width, height, cells),
            actors,
            player,
            outcome: Outcome::default(),
        })
    }
}

/// Ordered list of level plans played one after another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub levels: Vec<LevelPlan>,
}

impl Campaign {
    /// The stock two-level campaign
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                LevelPlan::new(
                    "First Steps",
                    &[
                        "                      ",
                        "                      ",
                        "  x                x  ",
                        "  x         o o    x  ",
                        "  x @      xxxxx   x  ",
                        "  xxxxx            x  ",
                        "      x            x  ",
                        "      xxxxxxxxxxxxxx  ",
                        "                      ",
                    ],
                ),
                LevelPlan::new(
                    "Lava Lake",
                    &[
                        "                                         ",
                        "                                         ",
                        "  x              =                    x  ",
                        "  x         o o         |         o   x  ",
                        "  x @      xxxxx      xxxxx     xxxx  x  ",
                        "  xxxxx          xx          xx       x  ",
                        "      x!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!x  ",
                        "      xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx  ",
                        "                                         ",
                    ],
                ),
            ],
        }
    }

    /// Parse a JSON campaign and check every plan
    pub fn from_json_str(json: &str) -> Result<Self, CampaignError> {
        let campaign: Campaign = serde_json::from_str(json)?;
        campaign.validate()?;
        Ok(campaign)
    }

    /// Load a JSON campaign from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CampaignError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let campaign = Self::from_json_str(&json)?;
        log::info!(
            "Loaded {} levels from {}",
            campaign.levels.len(),
            path.as_ref().display()
        );
        Ok(campaign)
    }

    /// Fail on the first plan that cannot be built
    pub fn validate(&self) -> Result<(), CampaignError> {
        if self.levels.is_empty() {
            return Err(CampaignError::Empty);
        }
        for plan in &self.levels {
            Level::from_plan(plan, 0).map_err(|source| CampaignError::Plan {
                name: plan.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
