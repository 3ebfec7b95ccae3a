use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Color;

/// Pick a move for `color` uniformly at random from everything it can play.
/// Returns None when the side has no moves at all. Generic over the RNG so
/// tests can seed one.
pub fn pick_move<R: Rng>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    board.get_all_moves(color).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_one_of_the_legal_moves() {
        let board = Board::new();
        let mut rng = StdRng::seed_from_u64(42);
        let mv = pick_move(&board, Color::White, &mut rng).expect("opening position has moves");
        assert!(board.get_all_moves(Color::White).contains(&mv));
    }

    #[test]
    fn same_seed_picks_the_same_move() {
        let board = Board::new();
        let a = pick_move(&board, Color::Black, &mut StdRng::seed_from_u64(7));
        let b = pick_move(&board, Color::Black, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn no_pieces_means_no_move() {
        let board = Board::empty();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick_move(&board, Color::White, &mut rng), None);
    }
}
