use std::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::piece::{Color, Piece, PieceType};

const ROOK_DIRS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

/// Outcome of a move request. Capturing the king ends the game on the spot;
/// there is no check or checkmate accounting anywhere in the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No piece at the source, or the destination is not reachable from it.
    Illegal,
    Played,
    KingCaptured,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Board {
    pub squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position. Row 0 is black's back rank (the top
    /// of the rendered board), row 7 is white's.
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];

        let back_rank = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        // Black pieces (rows 0-1)
        for (col, &pt) in back_rank.iter().enumerate() {
            squares[0][col] = Some(Piece::new(pt, Color::Black));
        }
        for sq in &mut squares[1] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::Black));
        }

        // White pieces (rows 6-7)
        for sq in &mut squares[6] {
            *sq = Some(Piece::new(PieceType::Pawn, Color::White));
        }
        for (col, &pt) in back_rank.iter().enumerate() {
            squares[7][col] = Some(Piece::new(pt, Color::White));
        }

        Board { squares }
    }

    fn in_bounds(row: i32, col: i32) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    /// Legal destination squares for the piece at (row, col) under the
    /// simplified rules: same-color captures forbidden, no notion of check.
    /// Empty squares have no moves. Read-only; whose turn it is does not
    /// enter into it.
    pub fn valid_moves(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let piece = match self.squares[row][col] {
            Some(p) => p,
            None => return Vec::new(),
        };

        let mut moves = Vec::new();
        match piece.piece_type {
            PieceType::King => self.king_moves(row, col, piece.color, &mut moves),
            PieceType::Queen => {
                // A queen is a rook and a bishop sharing a square.
                self.sliding_moves(row, col, piece.color, &ROOK_DIRS, &mut moves);
                self.sliding_moves(row, col, piece.color, &BISHOP_DIRS, &mut moves);
            }
            PieceType::Rook => self.sliding_moves(row, col, piece.color, &ROOK_DIRS, &mut moves),
            PieceType::Bishop => {
                self.sliding_moves(row, col, piece.color, &BISHOP_DIRS, &mut moves)
            }
            PieceType::Knight => self.knight_moves(row, col, piece.color, &mut moves),
            PieceType::Pawn => self.pawn_moves(row, col, piece.color, &mut moves),
        }
        moves
    }

    fn king_moves(&self, row: usize, col: usize, color: Color, moves: &mut Vec<(usize, usize)>) {
        for dr in -1..=1i32 {
            for dc in -1..=1i32 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                self.step_move(row, col, dr, dc, color, moves);
            }
        }
    }

    fn knight_moves(&self, row: usize, col: usize, color: Color, moves: &mut Vec<(usize, usize)>) {
        for &(dr, dc) in &KNIGHT_OFFSETS {
            self.step_move(row, col, dr, dc, color, moves);
        }
    }

    /// Add a single-step destination if it is on the board and not occupied
    /// by a same-color piece.
    fn step_move(
        &self,
        row: usize,
        col: usize,
        dr: i32,
        dc: i32,
        color: Color,
        moves: &mut Vec<(usize, usize)>,
    ) {
        let r = row as i32 + dr;
        let c = col as i32 + dc;
        if !Self::in_bounds(r, c) {
            return;
        }
        let (tr, tc) = (r as usize, c as usize);
        if self.squares[tr][tc].map(|p| p.color == color).unwrap_or(false) {
            return;
        }
        moves.push((tr, tc));
    }

    /// Walk outward in each direction: empty squares are destinations and the
    /// walk continues, an enemy square is a destination and the walk stops,
    /// a friendly square stops the walk without being added.
    fn sliding_moves(
        &self,
        row: usize,
        col: usize,
        color: Color,
        directions: &[(i32, i32)],
        moves: &mut Vec<(usize, usize)>,
    ) {
        for &(dr, dc) in directions {
            let mut r = row as i32 + dr;
            let mut c = col as i32 + dc;
            while Self::in_bounds(r, c) {
                let (tr, tc) = (r as usize, c as usize);
                if let Some(p) = self.squares[tr][tc] {
                    if p.color != color {
                        moves.push((tr, tc));
                    }
                    break;
                }
                moves.push((tr, tc));
                r += dr;
                c += dc;
            }
        }
    }

    fn pawn_moves(&self, row: usize, col: usize, color: Color, moves: &mut Vec<(usize, usize)>) {
        let (dir, start_row): (i32, usize) = match color {
            Color::White => (-1, 6),
            Color::Black => (1, 1),
        };

        let forward = row as i32 + dir;

        // Single advance, with the double advance from the start row nested
        // inside it; the double only tests the doubled-offset square, the
        // intermediate one being empty already in this branch.
        if Self::in_bounds(forward, col as i32) && self.squares[forward as usize][col].is_none() {
            moves.push((forward as usize, col));
            if row == start_row {
                let double = forward + dir;
                if self.squares[double as usize][col].is_none() {
                    moves.push((double as usize, col));
                }
            }
        }

        // Diagonal steps are captures only.
        for &dc in &[-1i32, 1] {
            let c = col as i32 + dc;
            if !Self::in_bounds(forward, c) {
                continue;
            }
            let (tr, tc) = (forward as usize, c as usize);
            if self.squares[tr][tc].map(|p| p.color != color).unwrap_or(false) {
                moves.push((tr, tc));
            }
        }
    }

    /// Validate a move against the mover's destination set and apply it.
    /// An illegal request leaves the board untouched. The board does not
    /// care whose turn it is; ownership is the game layer's concern.
    pub fn move_piece(&mut self, from: (usize, usize), to: (usize, usize)) -> MoveOutcome {
        let piece = match self.squares[from.0][from.1] {
            Some(p) => p,
            None => return MoveOutcome::Illegal,
        };
        if !self.valid_moves(from.0, from.1).contains(&to) {
            return MoveOutcome::Illegal;
        }

        let captured_king = self.squares[to.0][to.1]
            .map(|p| p.piece_type == PieceType::King)
            .unwrap_or(false);

        self.squares[to.0][to.1] = Some(piece);
        self.squares[from.0][from.1] = None;

        if captured_king {
            MoveOutcome::KingCaptured
        } else {
            MoveOutcome::Played
        }
    }

    /// Every move available to `color`, row-major by origin square and in
    /// rule order within a piece. Deterministic for a given board, which the
    /// random opponent's tests rely on.
    pub fn get_all_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..8usize {
            for col in 0..8usize {
                if let Some(piece) = self.squares[row][col] {
                    if piece.color != color {
                        continue;
                    }
                    for to in self.valid_moves(row, col) {
                        moves.push(Move {
                            from: (row, col),
                            to,
                        });
                    }
                }
            }
        }
        moves
    }
}

impl fmt::Display for Board {
    /// Rank labels 8..1 on both margins, file labels above and below, '.'
    /// for empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(p) => write!(f, "{} ", p.symbol())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "{}", 8 - row)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
