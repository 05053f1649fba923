use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{poll, read, Event};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, queue, terminal};
use log::debug;
use thiserror::Error;

use crate::canvas::{Canvas, FrameBuffer, Tint};
use crate::input::command_for;
use crate::session::Command;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("Your terminal does not support color")]
    NoColor,
}

/// Fails when the environment describes a terminal without color.
pub fn check_color_support() -> Result<(), TermError> {
    if cfg!(windows) {
        return Ok(());
    }
    match std::env::var("TERM") {
        Ok(term) if !term.is_empty() && term != "dumb" => Ok(()),
        _ => Err(TermError::NoColor),
    }
}

/// Owns the real terminal: raw mode, the alternate screen and a pair of
/// buffers so each flush only writes the cells that changed.
pub struct TermManager {
    stdout: Stdout,
    screen: FrameBuffer,
    shown: Option<FrameBuffer>,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { stdout: stdout(), screen: FrameBuffer::new(width, height), shown: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        queue!(
            self.stdout,
            ResetColor,
            cursor::EnableBlinking,
            cursor::Show,
            LeaveAlternateScreen
        )?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Return at most one pending command without blocking.
    pub fn read_command(&mut self) -> Result<Option<Command>> {
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(key) => return Ok(command_for(key)),
                Event::Resize(w, h) => {
                    debug!("terminal resized to {}x{}", w, h);
                    self.screen.resize(w, h);
                    self.shown = None;
                }
                _ => {}
            }
        }
        Ok(None)
    }

    fn redraw_all(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        let mut tint = None;
        for y in 0..self.screen.height() {
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            for x in 0..self.screen.width() {
                let cell = self.screen.get(x, y).unwrap_or_default();
                if tint != Some(cell.tint) {
                    queue!(self.stdout, SetForegroundColor(color(cell.tint)))?;
                    tint = Some(cell.tint);
                }
                queue!(self.stdout, Print(cell.ch))?;
            }
        }
        Ok(())
    }

    fn redraw_changed(&mut self, prev: &FrameBuffer) -> Result<()> {
        let mut tint = None;
        for y in 0..self.screen.height() {
            let mut cursor_at = None;
            for x in 0..self.screen.width() {
                let cell = self.screen.get(x, y).unwrap_or_default();
                if prev.get(x, y) == Some(cell) {
                    continue;
                }
                if cursor_at != Some(x) {
                    queue!(self.stdout, cursor::MoveTo(x, y))?;
                }
                if tint != Some(cell.tint) {
                    queue!(self.stdout, SetForegroundColor(color(cell.tint)))?;
                    tint = Some(cell.tint);
                }
                queue!(self.stdout, Print(cell.ch))?;
                cursor_at = Some(x + 1);
            }
        }
        Ok(())
    }
}

impl Canvas for TermManager {
    fn size(&self) -> (u16, u16) {
        self.screen.size()
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, tint: Tint) {
        self.screen.set_cell(x, y, ch, tint);
    }

    fn clear(&mut self) {
        self.screen.clear();
    }

    fn flush(&mut self) -> Result<()> {
        match self.shown.take() {
            Some(prev) if prev.size() == self.screen.size() => self.redraw_changed(&prev)?,
            _ => self.redraw_all()?,
        }
        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()?;
        self.shown = Some(self.screen.clone());
        Ok(())
    }
}

fn color(tint: Tint) -> Color {
    match tint {
        Tint::Plain => Color::Reset,
        Tint::Berry => Color::Red,
        Tint::Snake => Color::Green,
        Tint::Frame => Color::Yellow,
    }
}
