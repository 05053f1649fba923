//! Terminal snake: eat berries before the timer runs out, without hitting the
//! walls or yourself.

pub mod berry;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod session;
pub mod snake;
pub mod term;
pub mod timer;

pub use geometry::{Direction, Grid, Point};
pub use session::{Command, Control, GameOverReason, GameSession, Phase, TickOutcome};
