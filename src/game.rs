/// Screen state machine and run bookkeeping.
///
/// `Game` is created once at startup and owned by the frame loop.  It turns
/// commands into screen transitions, drives `World::tick` while playing and
/// keeps the score and high score.  Persisting the high score is left to the
/// caller via `take_unsaved_high_score`.
use log::info;
use rand::Rng;

use crate::collision::CollisionReport;
use crate::compute::World;
use crate::config::{EndScreenKeys, GameConfig, Variant};
use crate::input::{Command, Controls};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    /// Between levels; only used by games with a level-complete screen.
    LevelComplete,
    GameOver,
    Victory,
}

/// Whether the frame loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Game {
    pub variant: Variant,
    pub config: &'static GameConfig,
    pub status: GameStatus,
    pub world: World,
    pub score: u32,
    pub high_score: u32,
    /// The last finished run set a new high score.
    pub new_high_score: bool,
    unsaved_high_score: Option<u32>,
}

impl Game {
    pub fn new(variant: Variant, high_score: u32) -> Self {
        Game {
            variant,
            config: variant.config(),
            status: GameStatus::Menu,
            world: World::new(variant, 1),
            score: 0,
            high_score,
            new_high_score: false,
            unsaved_high_score: None,
        }
    }

    pub fn level_index(&self) -> u32 {
        self.world.level.index
    }

    /// Reset everything for a new run and start playing level 1.
    pub fn start_run(&mut self) {
        self.world = World::new(self.variant, 1);
        self.score = 0;
        self.new_high_score = false;
        self.set_status(GameStatus::Playing);
    }

    /// Apply a one-shot command to the current screen.
    pub fn handle(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            return Flow::Quit;
        }
        match (self.status, command) {
            (GameStatus::Menu, Command::Confirm) => self.start_run(),
            (GameStatus::Menu, Command::Back) => return Flow::Quit,
            (GameStatus::LevelComplete, Command::Confirm) => self.advance_level(),
            (GameStatus::GameOver | GameStatus::Victory, command) => {
                match (self.config.end_screen_keys, command) {
                    (EndScreenKeys::ConfirmToMenu, Command::Confirm)
                    | (EndScreenKeys::ConfirmRestarts, Command::Back) => {
                        self.set_status(GameStatus::Menu)
                    }
                    (EndScreenKeys::ConfirmToMenu, Command::Restart)
                    | (EndScreenKeys::ConfirmRestarts, Command::Confirm) => self.start_run(),
                    _ => {}
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    /// Advance one frame of play.  Does nothing outside `Playing`.
    pub fn tick(&mut self, controls: &Controls, rng: &mut impl Rng) -> Option<CollisionReport> {
        if self.status != GameStatus::Playing {
            return None;
        }
        let report = self.world.tick(controls, rng);
        self.score += report.score;

        for kind in &report.kills {
            info!("{} enemy destroyed, score {}", kind.label(), self.score);
        }
        if report.lives_lost > 0 {
            info!("life lost, {} remaining", self.world.player.lives);
        }

        if !self.world.player.alive {
            self.finish_run(GameStatus::GameOver);
        } else if self.world.level.is_cleared() {
            info!(
                "level {} cleared in {} ticks",
                self.level_index(),
                self.world.frame
            );
            if self.config.level_complete_screen {
                self.set_status(GameStatus::LevelComplete);
            } else {
                self.advance_level();
            }
        }
        Some(report)
    }

    /// Move on from a cleared level: load the next one, or win.
    fn advance_level(&mut self) {
        if self.world.level.is_final(self.config) {
            self.finish_run(GameStatus::Victory);
            return;
        }
        let next = self.level_index() + 1;
        self.world.load_level(next);
        info!("entering level {}", next);
        self.set_status(GameStatus::Playing);
    }

    fn finish_run(&mut self, status: GameStatus) {
        self.set_status(status);
        if self.score > self.high_score {
            info!("new high score {} (was {})", self.score, self.high_score);
            self.high_score = self.score;
            self.new_high_score = true;
            self.unsaved_high_score = Some(self.score);
        }
    }

    fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            info!("{:?} -> {:?}", self.status, status);
            self.status = status;
        }
    }

    /// A high score that still needs writing to disk, if any.
    pub fn take_unsaved_high_score(&mut self) -> Option<u32> {
        self.unsaved_high_score.take()
    }
}
