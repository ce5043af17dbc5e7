//! Invariants that must hold for any seed and any sequence of moves

use std::collections::HashMap;

use proptest::prelude::*;
use sisyphos::Config;
use sisyphos::sim::{Cell, Direction, EntityId, Game, TickInput, grid, resolve_move};

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn game(seed: u64) -> Game {
    Game::new(Config {
        seed: Some(seed),
        ..Config::default()
    })
    .unwrap()
}

/// Distinct solid entities never share a cell and nothing leaves the board
fn check_board(game: &Game) -> Result<(), TestCaseError> {
    let board = &game.board;
    prop_assert!(board.validate().is_ok());
    let mut seen = HashMap::new();
    for entity in board.entities.iter() {
        prop_assert!(grid::in_bounds(entity.current, board.size));
        if entity.kind.is_solid() {
            prop_assert!(seen.insert(entity.current, entity.id).is_none());
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_occupancy_and_containment(
        seed in any::<u64>(),
        moves in prop::collection::vec(prop::option::of(arb_direction()), 1..80),
    ) {
        let mut game = game(seed);
        check_board(&game)?;
        for direction in moves {
            game.tick(&TickInput { direction, ..Default::default() }).unwrap();
            check_board(&game)?;
        }
    }

    #[test]
    fn prop_rejected_move_leaves_table_untouched(
        seed in any::<u64>(),
        moves in prop::collection::vec(arb_direction(), 1..40),
    ) {
        let mut game = game(seed);
        let move_ticks = game.timings().move_ticks;
        for direction in moves {
            while game.board.entities.is_sliding() {
                game.tick(&TickInput::default()).unwrap();
            }
            let before = game.board.entities.clone();
            let moved =
                resolve_move(&mut game.board.entities, game.board.size, direction, move_ticks)
                    .unwrap();
            if !moved {
                prop_assert_eq!(&game.board.entities, &before);
            }
        }
    }

    #[test]
    fn prop_slides_count_down_one_per_tick(
        seed in any::<u64>(),
        moves in prop::collection::vec(prop::option::of(arb_direction()), 1..80),
    ) {
        let mut game = game(seed);
        let full = game.timings().move_ticks;
        for direction in moves {
            let before: HashMap<EntityId, (u32, Option<Cell>)> = game
                .board
                .entities
                .iter()
                .map(|e| (e.id, (e.move_ticks, e.pending.map(|p| p.cell))))
                .collect();
            let outcome = game.tick(&TickInput { direction, ..Default::default() }).unwrap();
            if outcome.won {
                // Fresh board, nothing to compare against
                continue;
            }
            for entity in game.board.entities.iter() {
                let (ticks, pending) = before[&entity.id];
                if ticks > 0 {
                    prop_assert_eq!(entity.move_ticks, ticks - 1);
                    if entity.move_ticks == 0 {
                        prop_assert_eq!(Some(entity.current), pending);
                        prop_assert!(entity.pending.is_none());
                    }
                } else if outcome.moved && entity.pending.is_some() {
                    // Started this tick and already advanced once
                    prop_assert_eq!(entity.move_ticks, full - 1);
                } else {
                    prop_assert_eq!(entity.move_ticks, 0);
                }
                prop_assert_eq!(entity.pending.is_some(), entity.move_ticks > 0);
            }
        }
    }
}
