//! The game state machine: one explicit session object that input, update and
//! render all go through.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::berry::spawn_berry;
use crate::geometry::{Direction, Grid, Point};
use crate::snake::{Crash, MoveResult, Snake};
use crate::timer::{BerryTimer, BERRY_TIME_LIMIT};

pub const MAX_SCORE: u32 = 256;

pub const BASE_FRAME_TIME: Duration = Duration::from_millis(280);
pub const FRAME_TIME_STEP: Duration = Duration::from_millis(8);
pub const MIN_FRAME_TIME: Duration = Duration::from_millis(60);

pub const START_DIRECTION: Direction = Direction::Right;

/// Time between ticks for a given score: faster per point, never below the floor.
pub fn frame_interval(score: u32) -> Duration {
    BASE_FRAME_TIME
        .checked_sub(FRAME_TIME_STEP * score)
        .map_or(MIN_FRAME_TIME, |t| t.max(MIN_FRAME_TIME))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Crashed(Crash),
    TimeUp,
    /// No free cell was left for the next berry.
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver(GameOverReason),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened because the session is paused or over.
    Idle,
    Moved,
    Ate,
    GameOver(GameOverReason),
}

pub struct GameSession {
    grid: Grid,
    snake: Snake,
    berry: Option<Point>,
    score: u32,
    high_score: u32,
    phase: Phase,
    timer: BerryTimer,
    frame_time: Duration,
    rng: StdRng,
}

impl GameSession {
    pub fn new(grid: Grid, rng: StdRng, now: Instant) -> Self {
        let mut session = GameSession {
            grid,
            snake: Snake::new(grid.center(), START_DIRECTION),
            berry: None,
            score: 0,
            high_score: 0,
            phase: Phase::Running,
            timer: BerryTimer::new(BERRY_TIME_LIMIT, now),
            frame_time: BASE_FRAME_TIME,
            rng,
        };
        session.reset(now);
        info!("session started on a {}x{} grid", grid.width, grid.height);
        session
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn berry(&self) -> Option<Point> {
        self.berry
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False once the game is over, until a restart.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::GameOver(_))
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn time_up(&self) -> bool {
        self.phase == Phase::GameOver(GameOverReason::TimeUp)
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_time
    }

    pub fn timer(&self) -> &BerryTimer {
        &self.timer
    }

    pub fn apply(&mut self, command: Command, now: Instant) -> Control {
        match command {
            Command::Quit => return Control::Quit,
            // Turning is only meaningful while moving; queuing turns during a
            // pause could chain two quarter turns into a reversal.
            Command::Turn(dir) => {
                if self.phase == Phase::Running && !self.snake.set_direction(dir) {
                    debug!("ignored reversing turn to {:?}", dir);
                }
            }
            // The berry deadline is absolute, so it keeps running while paused.
            Command::TogglePause => match self.phase {
                Phase::Running => self.phase = Phase::Paused,
                Phase::Paused => self.phase = Phase::Running,
                Phase::GameOver(_) => {}
            },
            Command::Restart => {
                if let Phase::GameOver(_) = self.phase {
                    self.reset(now);
                    info!("restarted, best score {}", self.high_score);
                }
            }
        }
        Control::Continue
    }

    /// Advance the simulation by one step. Does nothing unless running.
    pub fn update(&mut self, now: Instant) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        if self.timer.expired(now) {
            return self.game_over(GameOverReason::TimeUp);
        }

        let new_head = match self.snake.move_step(&self.grid) {
            MoveResult::Crashed(crash) => return self.game_over(GameOverReason::Crashed(crash)),
            MoveResult::Moved { new_head, .. } => new_head,
        };

        if self.berry != Some(new_head) {
            return TickOutcome::Moved;
        }

        if self.score < MAX_SCORE {
            self.score += 1;
            self.snake.grow();
            self.frame_time = frame_interval(self.score);
        }
        debug!("berry eaten at {:?}, score {}", new_head, self.score);

        self.berry = spawn_berry(&self.grid, &self.snake, &mut self.rng);
        if self.berry.is_none() {
            return self.game_over(GameOverReason::BoardFull);
        }
        self.timer.reset(now);
        TickOutcome::Ate
    }

    fn reset(&mut self, now: Instant) {
        self.snake = Snake::new(self.grid.center(), START_DIRECTION);
        self.score = 0;
        self.frame_time = frame_interval(0);
        self.timer.reset(now);
        self.berry = spawn_berry(&self.grid, &self.snake, &mut self.rng);
        self.phase = match self.berry {
            Some(_) => Phase::Running,
            None => {
                warn!("no room for a berry on a {}x{} grid", self.grid.width, self.grid.height);
                Phase::GameOver(GameOverReason::BoardFull)
            }
        };
    }

    fn game_over(&mut self, reason: GameOverReason) -> TickOutcome {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.phase = Phase::GameOver(reason);
        info!("game over ({:?}), score {}, best {}", reason, self.score, self.high_score);
        TickOutcome::GameOver(reason)
    }
}
