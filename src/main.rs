use std::process::exit;

use env_logger::Env;
use log::debug;

use snake::config::{Config, USAGE};
use snake::game::SnakeGame;
use snake::term::check_color_support;

fn main() {
    // Logs go to stderr; redirect it to keep them off the game screen.
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            debug!("bad arguments: {}", e);
            println!("{}", USAGE);
            exit(1);
        }
    };

    if let Err(e) = check_color_support() {
        eprintln!("{}", e);
        exit(1);
    }

    let mut game = match SnakeGame::new(&config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("error: {:#}", e);
            exit(1);
        }
    };

    let result = game.initialize().and_then(|_| game.play());

    // Always try to restore terminal state, even after a failure.
    let restored = game.restore();

    if let Err(e) = result.and(restored) {
        eprintln!("error: {:#}", e);
        exit(1);
    }
}
