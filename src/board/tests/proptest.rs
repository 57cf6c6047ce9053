//! Property-based tests using proptest.

use crate::board::{Move, Piece, PieceKind, Side, Square};
use crate::game::Game;
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..8i8, 0..8i8).prop_map(|(row, col)| Square(row, col))
}

fn all_legal_moves(game: &Game) -> Vec<Move> {
    game.board()
        .piece_positions(game.side_to_move())
        .into_iter()
        .flat_map(|sq| game.legal_moves_for_piece(sq).unwrap())
        .collect()
}

/// Play up to `num_moves` random legal turns, stopping early if the game ends.
fn random_playout(seed: u64, num_moves: usize) -> Game {
    use rand::prelude::*;

    let mut game = Game::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        if game.status().is_concluded() {
            break;
        }
        let moves = all_legal_moves(&game);
        let mv = moves[rng.gen_range(0..moves.len())];
        game.perform_turn(mv.from(), mv.to(), mv.promotion()).unwrap();
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every position reached keeps exactly one king per side
    #[test]
    fn prop_one_king_per_side(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        for side in Side::BOTH {
            prop_assert_eq!(game.board().count(Piece::new(PieceKind::King, side)), 1);
        }
        prop_assert!(game.board().pieces().count() <= 32);
    }

    /// Property: no legal move leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_never_self_check(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        let side = game.side_to_move();
        for mv in all_legal_moves(&game) {
            let mut probe = game.board().clone();
            probe.apply(&mv).unwrap();
            let generator = crate::board::MoveGenerator::new(&probe, game.context());
            prop_assert!(!generator.is_in_check(side).unwrap(), "{} leaves {} in check", mv, side);
        }
    }

    /// Property: move generation never touches the board it inspects
    #[test]
    fn prop_generation_is_read_only(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        let before = game.board().clone();
        let _ = all_legal_moves(&game);
        let _ = game.check_status(Side::White).unwrap();
        let _ = game.check_status(Side::Black).unwrap();
        prop_assert_eq!(game.board(), &before);
    }

    /// Property: the turn counter tracks the history while the game is open
    #[test]
    fn prop_turn_number_tracks_history(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_playout(seed, num_moves);
        let played = game.history().len() as u32;
        if game.status().is_concluded() {
            prop_assert_eq!(game.turn_number(), played);
        } else {
            prop_assert_eq!(game.turn_number(), played + 1);
            let expected = if played % 2 == 0 { Side::White } else { Side::Black };
            prop_assert_eq!(game.side_to_move(), expected);
        }
    }

    /// Property: a rejected turn leaves the game exactly as it was
    #[test]
    fn prop_rejected_turn_changes_nothing(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        from in square_strategy(),
        to in square_strategy(),
    ) {
        let mut game = random_playout(seed, num_moves);
        let board = game.board().clone();
        let history = game.history().to_vec();
        let side = game.side_to_move();
        let turn = game.turn_number();
        let status = game.status();

        if game.perform_turn(from, to, None).is_err() {
            prop_assert_eq!(game.board(), &board);
            prop_assert_eq!(game.history(), history.as_slice());
            prop_assert_eq!(game.side_to_move(), side);
            prop_assert_eq!(game.turn_number(), turn);
            prop_assert_eq!(game.status(), status);
        } else {
            prop_assert_eq!(game.history().len(), history.len() + 1);
        }
    }
}
