//! Sisyphos entry point
//!
//! Native terminal host: reads commands from stdin, runs the simulation
//! tick by tick and prints the board once it settles.

use std::io::{self, BufRead, Write};

use sisyphos::Config;
use sisyphos::renderer::text;
use sisyphos::sim::{Direction, Game, TickInput};

/// Safety cap on ticks spent waiting for one move to settle
const MAX_SETTLE_TICKS: u32 = 1_000;

fn parse_line(line: &str) -> Vec<TickInput> {
    line.chars()
        .filter_map(|c| {
            let mut input = TickInput::default();
            match c.to_ascii_lowercase() {
                'w' => input.direction = Some(Direction::Up),
                's' => input.direction = Some(Direction::Down),
                'a' => input.direction = Some(Direction::Left),
                'd' => input.direction = Some(Direction::Right),
                'r' => input.restart = true,
                '+' => input.resize = true,
                'q' => input.quit = true,
                _ => return None,
            }
            Some(input)
        })
        .collect()
}

fn print_board(game: &Game) {
    println!(
        "level {}  size {}x{}  boulders home {}/{}",
        game.level,
        game.board.size,
        game.board.size,
        game.board.boulders_on_target(),
        game.board.targets.len()
    );
    print!("{}", text::render(&game.board));
}

/// Tick until no entity is sliding, or give up after `MAX_SETTLE_TICKS`
fn settle(game: &mut Game) -> Result<(), sisyphos::GameError> {
    let mut ticks = 0;
    while game.board.entities.is_sliding() {
        if ticks == MAX_SETTLE_TICKS {
            log::warn!("Board still sliding after {} ticks; taking input anyway", ticks);
            break;
        }
        game.tick(&TickInput::default())?;
        ticks += 1;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn run(config: Config) -> Result<(), sisyphos::GameError> {
    let mut game = Game::new(config)?;
    print_board(&game);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        for input in parse_line(&line) {
            let outcome = game.tick(&input)?;
            if outcome.quit {
                return Ok(());
            }
            // Let the slide finish before the next keystroke
            settle(&mut game)?;
        }
        print_board(&game);
        prompt()?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Sisyphos (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    println!("w/a/s/d move, r restart, + bigger board, q quit");
    if let Err(e) = run(config) {
        log::error!("{}", e);
        eprintln!("fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let inputs = parse_line("wA x+q");
        assert_eq!(inputs.len(), 4);
        assert_eq!(inputs[0].direction, Some(Direction::Up));
        assert_eq!(inputs[1].direction, Some(Direction::Left));
        assert!(inputs[2].resize);
        assert!(inputs[3].quit);
    }

    #[test]
    fn test_settle_finishes_slide() {
        let mut game = Game::new(Config {
            seed: Some(21),
            ..Config::default()
        })
        .unwrap();
        for direction in Direction::ALL {
            let input = TickInput {
                direction: Some(direction),
                ..Default::default()
            };
            if game.tick(&input).unwrap().moved {
                break;
            }
        }
        settle(&mut game).unwrap();
        assert!(!game.board.entities.is_sliding());
    }
}
