//! Move-path enumeration for validating the generator.

use super::{Board, BoardError, MoveContext, MoveGenerator, Side, TurnRecord};

/// Number of leaf positions reachable from `board` in exactly `depth` plies,
/// with `side` to move.
pub fn perft(
    board: &Board,
    context: MoveContext,
    side: Side,
    depth: usize,
) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = MoveGenerator::new(board, context).legal_moves_for_side(side)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let record = TurnRecord::for_move(board, &mv)?;
        let mut next = board.clone();
        next.apply(&mv)?;
        nodes += perft(&next, context.after(record), side.opponent(), depth - 1)?;
    }

    Ok(nodes)
}
