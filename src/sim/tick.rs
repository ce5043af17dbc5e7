//! Simulation tick
//!
//! One call per rendered frame: apply commands, resolve at most one move
//! (never while something slides), advance every entity's animation once,
//! then check for a solved board.

use super::grid::Direction;
use super::resolve::resolve_move;
use super::state::Game;
use crate::error::GameError;
use crate::ui::{Click, Command};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player move (arrow keys / WASD / swipe)
    pub direction: Option<Direction>,
    /// Restart the current level
    pub restart: bool,
    /// Grow the board and regenerate
    pub resize: bool,
    /// Leave the game
    pub quit: bool,
    /// Completed click/tap gestures this tick
    pub clicks: Vec<Click>,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// A move was started
    pub moved: bool,
    /// The board was solved and a harder one generated
    pub won: bool,
    /// Quit was requested
    pub quit: bool,
}

impl Game {
    /// Run one command
    pub fn apply(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Restart => {
                log::info!("Restarting level {}", self.level);
                self.regenerate()
            }
            Command::Resize => {
                self.resize()?;
                log::info!("Resized board to {}", self.board_size);
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    /// Advance the game by one tick.
    ///
    /// A fatal error halts the game: this tick and every later one return
    /// it without touching the board.
    pub fn tick(&mut self, input: &TickInput) -> Result<TickOutcome, GameError> {
        if let Some(err) = self.failure.as_ref().and_then(GameError::fatal_copy) {
            return Err(err);
        }
        let result = self.step(input);
        if let Err(err) = &result {
            if let Some(fatal) = err.fatal_copy() {
                log::error!("Game halted: {}", fatal);
                self.failure = Some(fatal);
            }
        }
        result
    }

    fn step(&mut self, input: &TickInput) -> Result<TickOutcome, GameError> {
        let mut outcome = TickOutcome::default();

        let mut commands = Vec::new();
        if input.quit {
            commands.push(Command::Quit);
        }
        if input.restart {
            commands.push(Command::Restart);
        }
        if input.resize {
            commands.push(Command::Resize);
        }
        commands.extend(input.clicks.iter().filter_map(|c| self.widgets.dispatch(c)));

        for command in commands {
            if command == Command::Quit {
                outcome.quit = true;
                return Ok(outcome);
            }
            self.apply(command)?;
        }

        // Gameplay moves wait for slides; appear/pop effects never block
        if let Some(dir) = input.direction {
            if !self.board.entities.is_sliding() {
                outcome.moved = resolve_move(
                    &mut self.board.entities,
                    self.board.size,
                    dir,
                    self.timings.move_ticks,
                )?;
            }
        }

        for entity in self.board.entities.iter_mut() {
            entity.advance(&self.timings);
        }

        if !self.board.entities.is_sliding() && self.board.is_won() {
            self.advance_level()?;
            log::info!("Board solved! Advanced to level {}", self.level);
            outcome.won = true;
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{Board, EntityKind, EntityTable, GamePhase};
    use glam::{IVec2, Vec2};

    fn game() -> Game {
        Game::new(Config {
            seed: Some(12345),
            ..Config::default()
        })
        .unwrap()
    }

    /// Walled 5x5 board solved by one push up: player (1,3), boulder (1,2), target (1,1)
    fn one_push_board() -> Board {
        let mut table = EntityTable::new();
        for i in 0..25 {
            let cell = crate::sim::grid::cell(i, 5);
            if crate::sim::grid::on_perimeter(cell, 5) {
                table.insert(EntityKind::Wall, cell, 0);
            }
        }
        table.insert(EntityKind::Target, IVec2::new(1, 1), 0);
        table.insert(EntityKind::Boulder, IVec2::new(1, 2), 0);
        table.insert(EntityKind::Player, IVec2::new(1, 3), 0);
        Board::new(5, table)
    }

    fn up() -> TickInput {
        TickInput {
            direction: Some(Direction::Up),
            ..Default::default()
        }
    }

    #[test]
    fn test_input_ignored_while_sliding() {
        let mut game = game();
        game.board = one_push_board();

        let outcome = game.tick(&up()).unwrap();
        assert!(outcome.moved);
        assert_eq!(game.phase(), GamePhase::Animating);

        // A second command mid-slide is dropped
        let outcome = game.tick(&TickInput {
            direction: Some(Direction::Right),
            ..Default::default()
        })
        .unwrap();
        assert!(!outcome.moved);
    }

    #[test]
    fn test_win_advances_level() {
        let mut game = game();
        game.board = one_push_board();
        let size = game.board_size;

        let ticks = game.timings().move_ticks;
        let mut won = false;
        for i in 0..ticks {
            let input = if i == 0 { up() } else { TickInput::default() };
            won |= game.tick(&input).unwrap().won;
        }
        assert!(won);
        assert_eq!(game.level, 1);
        assert_eq!(game.board_size, size);
        // New board carries one more boulder
        assert_eq!(
            game.board.entities.count(EntityKind::Boulder),
            game.config().start_boulders + 1
        );
    }

    #[test]
    fn test_restart_keeps_level() {
        let mut game = game();
        let before = game.board.clone();
        game.tick(&TickInput {
            restart: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(game.level, 0);
        assert_ne!(game.board, before);
    }

    #[test]
    fn test_resize_grows_board() {
        let mut game = game();
        let size = game.board_size;
        game.tick(&TickInput {
            resize: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(game.board_size, size + 1);
        assert_eq!(game.board.size, size + 1);
        assert!(game.scale < 1.0);
    }

    #[test]
    fn test_quit_and_restart_button() {
        let mut game = game();
        let outcome = game
            .tick(&TickInput {
                quit: true,
                ..Default::default()
            })
            .unwrap();
        assert!(outcome.quit);

        let before = game.board.clone();
        let tap = Click {
            start: Vec2::splat(12.0),
            end: Vec2::splat(14.0),
        };
        let outcome = game
            .tick(&TickInput {
                clicks: vec![tap],
                ..Default::default()
            })
            .unwrap();
        assert!(!outcome.quit);
        assert_ne!(game.board, before);
    }

    /// Config whose level 0 exactly fills a 5x5 interior and never retries
    fn brittle_game() -> Game {
        Game::new(Config {
            seed: Some(7),
            start_obstacles: 4,
            max_generation_retries: 0,
            ..Config::default()
        })
        .unwrap()
    }

    #[test]
    fn test_failed_level_up_keeps_counters_and_halts() {
        let mut game = brittle_game();
        game.board = one_push_board();
        let won_board = game.board.clone();

        let ticks = game.timings().move_ticks;
        let mut errors = 0;
        for i in 0..ticks + 5 {
            let input = if i == 0 { up() } else { TickInput::default() };
            if let Err(err) = game.tick(&input) {
                assert!(matches!(err, GameError::RetryExhausted { attempts: 1, size: 5 }));
                errors += 1;
            }
        }
        // First failure at the landing tick, then replayed without retrying
        assert_eq!(errors, 6);
        assert_eq!(game.level, 0);
        assert_eq!(game.board_size, 5);
        assert_eq!(game.phase(), GamePhase::Failed);
        assert!(game.failure().is_some_and(GameError::is_fatal));
        assert_eq!(game.board.targets, won_board.targets);
        assert!(game.board.is_won());
    }

    #[test]
    fn test_failed_resize_keeps_size_and_scale() {
        let mut game = brittle_game();
        // 12 boulders + 9 obstacles cannot fit a 6x6 board
        game.level = 10;
        let before = game.board.clone();

        let err = game
            .tick(&TickInput {
                resize: true,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, GameError::RetryExhausted { attempts: 1, size: 6 }));
        assert_eq!(game.board_size, 5);
        assert_eq!(game.board.size, 5);
        assert_eq!(game.scale, 1.0);
        assert_eq!(game.level, 10);
        assert_eq!(game.board, before);

        // Halted: even a move is refused with the same error
        assert!(matches!(
            game.tick(&up()),
            Err(GameError::RetryExhausted { attempts: 1, size: 6 })
        ));
        assert_eq!(game.board, before);
    }

    #[test]
    fn test_pop_does_not_block_moves() {
        let mut game = game();
        game.board = one_push_board();
        for entity in game.board.entities.iter_mut() {
            entity.pop_ticks = 3;
            entity.appear_ticks = 3;
        }
        assert!(game.tick(&up()).unwrap().moved);
    }
}
