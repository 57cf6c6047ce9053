//! Turn controller implementation.

use log::{debug, info, trace};

use super::{GameStatus, TurnError};
use crate::board::{
    Board, BoardError, CastlingRights, CheckStatus, Move, MoveContext, MoveGenerator, Piece,
    PieceKind, Side, Square, TurnRecord,
};

/// A game in progress: the authoritative board plus turn bookkeeping.
#[derive(Clone, Debug)]
pub struct Game {
    /// Current position
    board: Board,
    /// Side whose turn it is
    side_to_move: Side,
    /// 1-based count of turns, advanced after each turn that leaves the game open
    turn_number: u32,
    /// Result so far
    status: GameStatus,
    /// Every executed turn, oldest first
    history: Vec<TurnRecord>,
    /// Castling rights, updated incrementally after every turn
    castling: CastlingRights,
}

impl Game {
    /// Start a game from the standard initial position.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Side::White,
            turn_number: 1,
            status: GameStatus::NotConcluded,
            history: Vec::new(),
            castling: CastlingRights::all(),
        }
    }

    /// Start a game from an arbitrary position.
    ///
    /// Each side must have exactly one king.
    /// Castling rights are granted wherever a king and rook still stand on
    /// their home squares. The position is classified immediately, so a
    /// board that is already mate or stalemate yields a concluded game.
    pub fn from_board(board: Board, side_to_move: Side) -> Result<Self, BoardError> {
        for side in Side::BOTH {
            match board.count(Piece::new(PieceKind::King, side)) {
                0 => return Err(BoardError::NoKingFound { side }),
                1 => {}
                count => return Err(BoardError::TooManyKings { side, count }),
            }
        }
        let context = MoveContext::for_board(&board);
        let check = MoveGenerator::new(&board, context).check_status(side_to_move)?;
        let status = GameStatus::after_check(side_to_move, check);
        debug!("new game from custom position, {side_to_move} to move, status {status}");
        Ok(Game {
            board,
            side_to_move,
            turn_number: 1,
            status,
            history: Vec::new(),
            castling: context.castling,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.history.last()
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Generation context for the current position.
    pub fn context(&self) -> MoveContext {
        MoveContext::new(self.castling, self.history.last().copied())
    }

    fn generator(&self) -> MoveGenerator<'_> {
        MoveGenerator::new(&self.board, self.context())
    }

    /// Legal moves for the piece on `square`, whichever side owns it.
    pub fn legal_moves_for_piece(&self, square: Square) -> Result<Vec<Move>, BoardError> {
        self.generator().legal_moves(square)
    }

    /// Check classification of `side` in the current position.
    pub fn check_status(&self, side: Side) -> Result<CheckStatus, BoardError> {
        self.generator().check_status(side)
    }

    /// Execute one turn for the side to move.
    ///
    /// On success the move is on the board, the turn is in the history and
    /// the status reflects the new position. On any error nothing changes.
    pub fn perform_turn(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<TurnRecord, TurnError> {
        let chosen = match self.resolve_move(from, to, promotion) {
            Ok(mv) => mv,
            Err(err) => {
                trace!("rejected turn {from}{to}: {err}");
                return Err(err);
            }
        };

        let record = TurnRecord::for_move(&self.board, &chosen)?;
        let mut next = self.board.clone();
        next.apply(&chosen)?;

        let mover = self.side_to_move;
        let context = self.context().after(record);
        let check = MoveGenerator::new(&next, context).check_status(mover.opponent())?;

        // Everything fallible is done; commit.
        self.board = next;
        self.castling = context.castling;
        self.history.push(record);
        self.status = GameStatus::after_check(mover.opponent(), check);
        debug!("turn {}: {record} ({chosen}), {check:?}", self.turn_number);

        if self.status.is_concluded() {
            info!("game concluded on turn {}: {}", self.turn_number, self.status);
        } else {
            self.side_to_move = mover.opponent();
            self.turn_number += 1;
        }

        Ok(record)
    }

    /// Find the single legal move matching the request, or explain why not.
    fn resolve_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, TurnError> {
        if self.status.is_concluded() {
            return Err(TurnError::GameAlreadyConcluded {
                status: self.status,
            });
        }

        let piece = self
            .board
            .piece_at(from)?
            .ok_or(BoardError::NoPieceAtSquare { square: from })?;
        if piece.side != self.side_to_move {
            return Err(TurnError::WrongPlayerTurn {
                square: from,
                side: piece.side,
            });
        }

        let matches: Vec<Move> = self
            .legal_moves_for_piece(from)?
            .into_iter()
            .filter(|mv| mv.to() == to)
            .collect();

        if matches.is_empty() {
            return Err(TurnError::NoMatchingLegalMove { from, to });
        }

        if matches.iter().all(Move::is_promotion) {
            let requested = promotion.filter(|kind| kind.is_promotion_choice());
            let mut chosen = matches
                .iter()
                .filter(|mv| requested.is_some() && mv.promotion() == requested);
            return match (chosen.next(), chosen.next()) {
                (Some(mv), None) => Ok(*mv),
                _ => Err(TurnError::AmbiguousPromotionChoice {
                    from,
                    to,
                    requested: promotion,
                }),
            };
        }

        match matches.as_slice() {
            [mv] => Ok(*mv),
            _ => Err(TurnError::NoMatchingLegalMove { from, to }),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
