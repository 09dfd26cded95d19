//! Fixed sub-step simulation
//!
//! `Level::animate` slices the elapsed frame time into sub-steps no longer
//! than `MAX_STEP` and lets every actor act once per sub-step, in list order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::actor_at;
use super::grid::Grid;
use super::state::{Actor, Behavior, Level, Outcome, Status, Touch};
use crate::consts::*;

/// Input snapshot for one `animate` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// What an actor sees of the level while it acts
pub struct Scene<'a> {
    pub grid: &'a Grid,
    /// Actor list as of the start of this actor's turn
    pub actors: &'a [Actor],
    outcome: &'a mut Outcome,
}

impl Scene<'_> {
    pub fn status(&self) -> Status {
        self.outcome.status
    }

    /// Forward a player touch to the level's status logic
    pub fn touch(&mut self, touch: Touch) {
        self.outcome.player_touched(touch, self.actors);
    }

    fn is_collected(&self, actor: &Actor) -> bool {
        self.outcome.collected.contains(&actor.id)
    }
}

impl Level {
    /// Advance the level by `elapsed` seconds with a fixed input snapshot
    pub fn animate(&mut self, elapsed: f32, input: &TickInput) {
        if self.outcome.status != Status::Running {
            self.outcome.finish_delay -= elapsed;
        }

        let mut remaining = elapsed;
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP);
            self.substep(step, input);
            remaining -= step;
        }
    }

    fn substep(&mut self, dt: f32, input: &TickInput) {
        for index in 0..self.actors.len() {
            let mut actor = self.actors[index].clone();
            let mut scene = Scene {
                grid: &self.grid,
                actors: &self.actors,
                outcome: &mut self.outcome,
            };
            if scene.is_collected(&actor) {
                continue;
            }
            actor.act(dt, &mut scene, input);
            self.actors[index] = actor;
        }
        self.remove_collected();
    }
}

impl Actor {
    /// Advance this actor by one sub-step
    ///
    /// Other actors are read-only; effects on the level go through `Scene::touch`.
    pub fn act(&mut self, dt: f32, scene: &mut Scene, input: &TickInput) {
        match self.behavior {
            Behavior::Player { speed } => self.act_player(speed, dt, scene, input),
            Behavior::Coin { base_pos, wobble } => {
                let wobble = wobble + dt * WOBBLE_SPEED;
                self.pos = base_pos + Vec2::new(0.0, wobble.sin() * WOBBLE_DIST);
                self.behavior = Behavior::Coin { base_pos, wobble };
            }
            Behavior::Hazard { speed, reset_pos } => {
                let new_pos = self.pos + speed * dt;
                if scene.grid.obstacle_at(new_pos, self.size).is_none() {
                    self.pos = new_pos;
                } else if let Some(reset) = reset_pos {
                    self.pos = reset;
                } else {
                    self.behavior = Behavior::Hazard {
                        speed: -speed,
                        reset_pos,
                    };
                }
            }
        }
    }

    fn act_player(&mut self, mut speed: Vec2, dt: f32, scene: &mut Scene, input: &TickInput) {
        // Horizontal
        speed.x = 0.0;
        if input.left {
            speed.x -= PLAYER_X_SPEED;
        }
        if input.right {
            speed.x += PLAYER_X_SPEED;
        }
        let new_pos = self.pos + Vec2::new(speed.x * dt, 0.0);
        match scene.grid.obstacle_at(new_pos, self.size) {
            Some(tile) => scene.touch(tile.into()),
            None => self.pos = new_pos,
        }

        // Vertical
        speed.y += dt * GRAVITY;
        let new_pos = self.pos + Vec2::new(0.0, speed.y * dt);
        match scene.grid.obstacle_at(new_pos, self.size) {
            Some(tile) => {
                scene.touch(tile.into());
                speed.y = if input.up && speed.y > 0.0 {
                    -JUMP_SPEED
                } else {
                    0.0
                };
            }
            None => self.pos = new_pos,
        }
        self.behavior = Behavior::Player { speed };

        let touched =
            actor_at(self, scene.actors, &scene.outcome.collected).and_then(Actor::touch);
        if let Some(touch) = touched {
            scene.touch(touch);
        }

        // Melt into the lava once lost
        if scene.status() == Status::Lost {
            self.pos.y += dt;
            self.size.y -= dt;
        }
    }
}
