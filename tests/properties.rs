use std::time::{Duration, Instant};

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use snake::berry::spawn_berry;
use snake::session::{frame_interval, BASE_FRAME_TIME, MAX_SCORE, MIN_FRAME_TIME};
use snake::snake::{Crash, MoveResult, Snake};
use snake::timer::BERRY_TIME_LIMIT;
use snake::{Command, Direction, GameOverReason, GameSession, Grid, Phase, Point, TickOutcome};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn turn_list(max: usize) -> impl Strategy<Value = Vec<Option<Direction>>> {
    prop::collection::vec(prop::option::of(direction()), 0..max)
}

proptest! {
    #[test]
    fn reversing_turns_are_rejected(current in direction(), requested in direction()) {
        let mut snake = Snake::new(Point::new(5, 5), current);
        let accepted = snake.set_direction(requested);
        if requested.is_opposite(current) {
            prop_assert!(!accepted);
            prop_assert_eq!(snake.get_direction(), current);
        } else {
            prop_assert!(accepted);
            prop_assert_eq!(snake.get_direction(), requested);
        }
    }

    #[test]
    fn frame_interval_never_increases(a in 0..=MAX_SCORE, b in 0..=MAX_SCORE) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(frame_interval(hi) <= frame_interval(lo));
        prop_assert!(frame_interval(hi) >= MIN_FRAME_TIME);
        prop_assert!(frame_interval(lo) <= BASE_FRAME_TIME);
    }

    #[test]
    fn moves_and_crashes_follow_the_board(
        steps in prop::collection::vec((direction(), any::<bool>()), 1..200)
    ) {
        let grid = Grid::new(12, 10);
        let mut snake = Snake::new(grid.center(), Direction::Right);

        for (dir, grow) in steps {
            snake.set_direction(dir);
            let next = snake.head().step(snake.get_direction());
            // The tail moves away during the step, so it is never in the way.
            let live = snake.len().saturating_sub(1);
            let bites = snake.body().iter().take(live).any(|p| *p == next);

            match snake.move_step(&grid) {
                MoveResult::Crashed(Crash::Wall) => {
                    prop_assert!(!grid.contains(next));
                    break;
                }
                MoveResult::Crashed(Crash::Body) => {
                    prop_assert!(bites);
                    break;
                }
                MoveResult::Moved { new_head, vacated, .. } => {
                    prop_assert_eq!(new_head, next);
                    prop_assert!(grid.contains(new_head));
                    prop_assert!(!snake.body_contains(new_head));
                    // A berry can never sit on the cell the tail just left.
                    if grow && new_head != vacated {
                        snake.grow();
                    }
                }
            }
        }
    }

    #[test]
    fn berries_spawn_on_free_padded_cells(
        seed in any::<u64>(),
        steps in prop::collection::vec(direction(), 0..40)
    ) {
        let grid = Grid::new(10, 8);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut snake = Snake::new(grid.center(), Direction::Right);
        for dir in steps {
            snake.set_direction(dir);
            match snake.move_step(&grid) {
                MoveResult::Moved { new_head, vacated, .. } if new_head != vacated => {
                    snake.grow();
                }
                MoveResult::Moved { .. } => {}
                MoveResult::Crashed(_) => break,
            }
        }

        match spawn_berry(&grid, &snake, &mut rng) {
            Some(berry) => {
                prop_assert!(!snake.occupies(berry));
                prop_assert!(berry.x >= 1 && berry.x <= grid.width - 2);
                prop_assert!(berry.y >= 1 && berry.y <= grid.height - 2);
            }
            None => prop_assert!(grid.padded_cells().all(|p| snake.occupies(p))),
        }
    }

    #[test]
    fn head_stays_on_the_grid_while_running(seed in any::<u64>(), turns in turn_list(300)) {
        let grid = Grid::new(25, 20);
        let t0 = Instant::now();
        let mut session = GameSession::new(grid, StdRng::seed_from_u64(seed), t0);

        for turn in turns {
            if let Some(dir) = turn {
                session.apply(Command::Turn(dir), t0);
            }
            let next = session.snake().head().step(session.snake().get_direction());
            let outcome = session.update(t0);

            if !grid.contains(next) {
                let wall = GameOverReason::Crashed(Crash::Wall);
                prop_assert_eq!(outcome, TickOutcome::GameOver(wall));
                prop_assert!(!session.time_up());
                break;
            }
            if !session.is_running() {
                break;
            }
            prop_assert!(grid.contains(session.snake().head()));
            prop_assert_eq!(session.snake().len() as u32, session.score());
        }
    }

    #[test]
    fn missing_the_berry_deadline_is_time_up(
        seed in any::<u64>(),
        turns in turn_list(20),
        late_ms in 0u64..5_000
    ) {
        let grid = Grid::new(25, 20);
        let t0 = Instant::now();
        let mut session = GameSession::new(grid, StdRng::seed_from_u64(seed), t0);

        for turn in turns {
            if let Some(dir) = turn {
                session.apply(Command::Turn(dir), t0);
            }
            session.update(t0);
        }
        prop_assume!(session.is_running());

        let outcome = session.update(t0 + BERRY_TIME_LIMIT + Duration::from_millis(late_ms));
        prop_assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::TimeUp));
        prop_assert!(session.time_up());
    }

    #[test]
    fn restart_resets_everything_but_the_best(seed in any::<u64>(), turns in turn_list(60)) {
        let grid = Grid::new(25, 20);
        let t0 = Instant::now();
        let mut session = GameSession::new(grid, StdRng::seed_from_u64(seed), t0);

        for turn in turns {
            if let Some(dir) = turn {
                session.apply(Command::Turn(dir), t0);
            }
            session.update(t0);
        }
        session.update(t0 + BERRY_TIME_LIMIT);
        prop_assert!(!session.is_running());
        let best = session.high_score();
        prop_assert!(best >= session.score());

        let t1 = t0 + Duration::from_secs(100);
        session.apply(Command::Restart, t1);
        prop_assert_eq!(session.phase(), Phase::Running);
        prop_assert_eq!(session.score(), 0);
        prop_assert_eq!(session.high_score(), best);
        prop_assert_eq!(session.snake().head(), grid.center());
        prop_assert_eq!(session.snake().get_direction(), Direction::Right);
        prop_assert!(session.snake().is_empty());
        prop_assert!(!session.is_paused());
        let berry = session.berry();
        prop_assert!(berry.map_or(false, |b| !session.snake().occupies(b)));
        prop_assert_eq!(session.timer().remaining(t1), BERRY_TIME_LIMIT);
        prop_assert_eq!(session.frame_interval(), BASE_FRAME_TIME);
    }
}
