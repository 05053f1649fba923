//! Maps a `GameSession` onto a `Canvas`. Reads state only.

use std::time::Instant;

use crate::canvas::{Canvas, Tint};
use crate::geometry::{Grid, Point};
use crate::session::{GameOverReason, GameSession, Phase};

const SNAKE_BODY_CHAR: char = '◆';
const BERRY_CHAR: char = '@';
const DEAD_SNAKE_CHAR: char = 'X';

pub const HELP_LINE: &str =
    "Arrows: Move  P: Pause/Resume  SPACE: Restart (on Game Over)  ESC: Quit";

/// Terminal columns and rows needed for the board, its border and the help line.
pub fn required_size(grid: Grid) -> (u16, u16) {
    let (w, h) = board_size(grid);
    (w.max(HELP_LINE.len() as u16 + 2), h + 1)
}

fn board_size(grid: Grid) -> (u16, u16) {
    (grid.width as u16 * 2 + 2, grid.height as u16 + 2)
}

/// Each grid cell is two columns wide to make up for tall terminal glyphs.
fn to_screen(p: Point) -> (u16, u16) {
    (p.x as u16 * 2 + 1, p.y as u16 + 1)
}

pub fn draw<C: Canvas + ?Sized>(session: &GameSession, now: Instant, canvas: &mut C) {
    canvas.clear();

    let (board_w, board_h) = board_size(session.grid());

    if let Some(berry) = session.berry() {
        let (x, y) = to_screen(berry);
        canvas.set_cell(x, y, BERRY_CHAR, Tint::Berry);
    }

    let dead = matches!(session.phase(), Phase::GameOver(GameOverReason::Crashed(_)));
    let snake = session.snake();
    for segment in snake.body() {
        let (x, y) = to_screen(*segment);
        canvas.set_cell(x, y, SNAKE_BODY_CHAR, Tint::Snake);
    }
    let (hx, hy) = to_screen(snake.head());
    let head = if dead { DEAD_SNAKE_CHAR } else { snake.head_char() };
    canvas.set_cell(hx, hy, head, Tint::Snake);

    canvas.draw_rect(0, 0, board_w, board_h, Tint::Frame);

    let score = format!("[ Score: {} | Best: {} ]", session.score(), session.high_score());
    canvas.print_text(2, 0, &score, Tint::Frame);

    let time_left = match session.phase() {
        Phase::GameOver(GameOverReason::TimeUp) => 0,
        _ => session.timer().remaining_secs(now),
    };
    let timer = format!("[ Time Left: {} sec ]", time_left);
    canvas.print_text(2, board_h - 1, &timer, Tint::Frame);

    canvas.print_text(2, board_h, HELP_LINE, Tint::Frame);

    match session.phase() {
        Phase::Running => {}
        Phase::Paused => {
            let lines = ["[ PAUSED ]", "", "[P]   Resume", "[ESC] Quit"];
            show_message(canvas, board_w, board_h, &lines);
        }
        Phase::GameOver(reason) => {
            let title = match reason {
                GameOverReason::TimeUp => "TIME UP! GAME OVER",
                GameOverReason::Crashed(_) => "GAME OVER",
                GameOverReason::BoardFull => "BOARD FULL! GAME OVER",
            };
            show_message(canvas, board_w, board_h, &[title, "", "[SPACE] Restart", "[ESC]   Quit"]);
        }
    }
}

/// Boxed, centered lines over the middle of the board.
fn show_message<C: Canvas + ?Sized>(canvas: &mut C, board_w: u16, board_h: u16, lines: &[&str]) {
    let inner_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 4;
    let (msg_w, msg_h) = (inner_w + 2, lines.len() as u16 + 4);
    let left = board_w.saturating_sub(msg_w) / 2;
    let top = board_h.saturating_sub(msg_h) / 2;

    canvas.fill_rect(left, top, msg_w, msg_h, ' ', Tint::Frame);
    canvas.draw_rect(left, top, msg_w, msg_h, Tint::Frame);

    for (i, line) in lines.iter().enumerate() {
        let padded = format!("{line: ^width$}", line = line, width = inner_w as usize);
        canvas.print_text(left + 1, top + 2 + i as u16, &padded, Tint::Frame);
    }
}
