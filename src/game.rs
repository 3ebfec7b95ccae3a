use rand::Rng;

use crate::board::{Board, MoveOutcome};
use crate::engine;
use crate::moves::Move;
use crate::piece::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the random opponent, which plays Black.
    VsComputer,
    TwoPlayer,
}

/// Turn orchestration above the board: alternates colors, checks that a move
/// starts on the moving side's own piece, and latches the winner once a king
/// comes off the board.
pub struct Game {
    pub board: Board,
    pub current_turn: Color,
    pub mode: GameMode,
    pub winner: Option<Color>,
}

impl Game {
    pub fn new(mode: GameMode) -> Self {
        Game {
            board: Board::new(),
            current_turn: Color::White,
            mode,
            winner: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// True when the side to move is the automated opponent.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer && self.current_turn == Color::Black
    }

    /// Validate and apply one half-move for the side to move.
    ///
    /// The board accepts a move of either color's piece, so the source
    /// ownership check lives here: a request starting on an opponent's piece
    /// (or an empty square, or after the game has ended) is rejected without
    /// touching the board.
    pub fn try_move(&mut self, from: (usize, usize), to: (usize, usize)) -> MoveOutcome {
        if self.is_over() {
            return MoveOutcome::Illegal;
        }
        let owns_source = self.board.squares[from.0][from.1]
            .map(|p| p.color == self.current_turn)
            .unwrap_or(false);
        if !owns_source {
            return MoveOutcome::Illegal;
        }

        let outcome = self.board.move_piece(from, to);
        match outcome {
            MoveOutcome::Illegal => {}
            MoveOutcome::Played => self.current_turn = self.current_turn.opposite(),
            MoveOutcome::KingCaptured => self.winner = Some(self.current_turn),
        }
        outcome
    }

    /// One automated half-move, chosen uniformly at random. Returns the move
    /// played, or None when the side to move has nothing to play, in which
    /// case the game state is left untouched.
    pub fn computer_turn<R: Rng>(&mut self, rng: &mut R) -> Option<Move> {
        let mv = engine::pick_move(&self.board, self.current_turn, rng)?;
        self.try_move(mv.from, mv.to);
        Some(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Piece, PieceType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn turns_alternate_after_each_played_move() {
        let mut game = Game::new(GameMode::TwoPlayer);
        assert_eq!(game.try_move((6, 4), (4, 4)), MoveOutcome::Played);
        assert_eq!(game.current_turn, Color::Black);
        assert_eq!(game.try_move((1, 4), (3, 4)), MoveOutcome::Played);
        assert_eq!(game.current_turn, Color::White);
    }

    #[test]
    fn illegal_move_does_not_advance_the_turn() {
        let mut game = Game::new(GameMode::TwoPlayer);
        assert_eq!(game.try_move((7, 0), (4, 0)), MoveOutcome::Illegal);
        assert_eq!(game.current_turn, Color::White);
        assert_eq!(game.winner, None);
    }

    /// Board-level validation is purely geometric; ownership of the moved
    /// piece is enforced at this layer.
    #[test]
    fn cannot_move_the_opponents_piece() {
        let mut game = Game::new(GameMode::TwoPlayer);
        let before = game.board.squares;
        assert_eq!(game.try_move((1, 0), (3, 0)), MoveOutcome::Illegal);
        assert_eq!(game.board.squares, before);
        assert_eq!(game.current_turn, Color::White);
    }

    #[test]
    fn king_capture_sets_the_winner_and_freezes_the_game() {
        let mut game = Game::new(GameMode::TwoPlayer);
        game.board = Board::empty();
        game.board.squares[0][0] = Some(Piece::new(PieceType::Queen, Color::White));
        game.board.squares[0][7] = Some(Piece::new(PieceType::King, Color::Black));
        game.board.squares[7][4] = Some(Piece::new(PieceType::King, Color::White));

        assert_eq!(game.try_move((0, 0), (0, 7)), MoveOutcome::KingCaptured);
        assert_eq!(game.winner, Some(Color::White));
        assert!(game.is_over());
        assert_eq!(game.current_turn, Color::White, "a winning move ends the turn cycle");

        // Nothing moves once the game is over.
        assert_eq!(game.try_move((7, 4), (6, 4)), MoveOutcome::Illegal);
    }

    #[test]
    fn computer_turn_plays_a_legal_move_and_passes_the_turn() {
        let mut game = Game::new(GameMode::VsComputer);
        assert_eq!(game.try_move((6, 4), (4, 4)), MoveOutcome::Played);
        assert!(game.is_computer_turn());

        let legal = game.board.get_all_moves(Color::Black);
        let mut rng = StdRng::seed_from_u64(3);
        let mv = game.computer_turn(&mut rng).expect("black has moves");
        assert!(legal.contains(&mv));
        assert_eq!(game.current_turn, Color::White);
    }

    #[test]
    fn computer_with_no_moves_reports_none_and_leaves_state_alone() {
        let mut game = Game::new(GameMode::VsComputer);
        game.board = Board::empty();
        game.board.squares[7][4] = Some(Piece::new(PieceType::King, Color::White));
        game.current_turn = Color::Black;

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(game.computer_turn(&mut rng), None);
        assert_eq!(game.current_turn, Color::Black);
        assert_eq!(game.winner, None);
    }
}
