use price_snake::grid::{to_pos, Cell};
use price_snake::snake::{Direction, MoveResult};
use price_snake::state::GameState;
use price_snake::MAXLENGTH;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn random_direction(rng: &mut StdRng) -> Direction {
    DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]
}

/// Plays seeded random games, checking every step against the counters from the step before.
fn check_games(seed: u64, games: usize, max_steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..games {
        let mut state = GameState::new();
        state.spawn_price();

        for _ in 0..max_steps {
            let dir = random_direction(&mut rng);
            let (x, y) = dir.target(state.snake().head()).unwrap();
            let landing = state.grid().get(to_pos(x, y));

            let (turn, score, len) = (state.turn(), state.score(), state.snake().len());
            let result = state.step(dir);

            match result {
                MoveResult::Rejected => {
                    assert!(len > 1);
                    assert_eq!(state.turn(), turn);
                    assert_eq!(state.score(), score);
                    assert_eq!(state.snake().len(), len);
                }
                MoveResult::GameOver => {
                    assert!(matches!(landing, Cell::Wall | Cell::Body));
                    assert_eq!(state.turn(), turn + 1);
                    assert_eq!(state.score(), score);
                    break;
                }
                MoveResult::Continue => {
                    assert_eq!(state.turn(), turn + 1);

                    if landing == Cell::Price {
                        assert_eq!(state.score(), score + len as u32);
                        assert!(!state.spawner().present());
                        let grown = if len < MAXLENGTH { len + 1 } else { len };
                        assert_eq!(state.snake().len(), grown);
                    } else {
                        assert_eq!(state.score(), score);
                        assert_eq!(state.snake().len(), len);
                    }
                }
            }

            state.spawn_price();

            assert!(state.grid().count(Cell::Price) <= 1);
            assert!(state.spawner().spawnmod() >= 1);
            assert!((1..=MAXLENGTH).contains(&state.snake().len()));
        }
    }
}

#[test]
fn counters_follow_every_move() {
    check_games(0x5eed, 200, 400);
}

#[test]
fn counters_follow_every_move_other_seed() {
    check_games(42, 200, 400);
}
