use std::time::Instant;

use anyhow::Result;
use log::warn;
use rand::{rngs::StdRng, SeedableRng};

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config::Config;
use crate::render::{self, required_size};
use crate::session::{Control, GameSession};
use crate::term::TermManager;

/// The interactive game: one session driven by the terminal.
pub struct SnakeGame {
    term: TermManager,
    session: GameSession,
    clock: FrameClock,
}

impl SnakeGame {
    pub fn new(config: &Config) -> Result<Self> {
        let now = Instant::now();
        let session = GameSession::new(config.grid(), StdRng::from_entropy(), now);
        Ok(SnakeGame { term: TermManager::new()?, session, clock: FrameClock::new(now) })
    }

    pub fn initialize(&mut self) -> Result<()> {
        self.term.setup()?;

        let (w, h) = self.term.size();
        let (need_w, need_h) = required_size(self.session.grid());
        if w < need_w || h < need_h {
            warn!(
                "terminal is {}x{}, the board needs {}x{}; it will be clipped",
                w, h, need_w, need_h
            );
        }
        Ok(())
    }

    /// Run frames until the player quits.
    pub fn play(&mut self) -> Result<()> {
        loop {
            let now = Instant::now();

            if let Some(command) = self.term.read_command()? {
                if self.session.apply(command, now) == Control::Quit {
                    return Ok(());
                }
            }

            self.session.update(now);

            render::draw(&self.session, now, &mut self.term);
            self.term.flush()?;

            self.clock.wait(self.session.frame_interval());
        }
    }

    pub fn restore(&mut self) -> Result<()> {
        self.term.restore()
    }
}
