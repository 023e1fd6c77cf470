//! Board diagrams in FEN piece-placement form.
//!
//! Rows are written from row 0 (Black's home) to row 7 (White's home), columns
//! left to right, digits for runs of empty squares. Letters follow FEN with
//! `C`/`c` added for the chatur; uppercase is White.
//!
//! Diagrams carry no move history, so `has_moved` is inferred: pawns and
//! chaturs off their starting row, kings off their home square and rooks off
//! their corners count as moved. Everything else is unmoved.

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::{
    KING_HOME_COL, KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL, STARTING_PLACEMENT,
};
use crate::game_state::chess_types::*;

pub fn parse_placement(placement: &str) -> Result<Board, ChessErrors> {
    let rows: Vec<&str> = placement.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
    }

    let mut board = Board::empty();

    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacementToken(ch));
                }
                col += empty_count as usize;
                continue;
            }

            let (color, kind) =
                piece_from_char(ch).ok_or(ChessErrors::InvalidPlacementToken(ch))?;

            if col >= 8 {
                return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
            }

            let square = Square::new(row as u8, col as u8)?;
            let piece = Piece {
                kind,
                color,
                has_moved: inferred_moved(kind, color, square),
            };
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(ChessErrors::InvalidPlacementForm(placement.to_owned()));
        }
    }

    for color in [Color::White, Color::Black] {
        if board.count_kings(color) > 1 {
            return Err(ChessErrors::DuplicateKing(color));
        }
    }

    Ok(board)
}

/// Inverse of `parse_placement`; moved flags are not encoded.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(STARTING_PLACEMENT.len());

    for row in 0..8u8 {
        let mut empty = 0;
        for col in 0..8u8 {
            match board.get(Square::from_index(row * 8 + col)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_char(piece.color, piece.kind));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn inferred_moved(kind: PieceKind, color: Color, square: Square) -> bool {
    let on_home_row = square.row() == color.home_row();
    match kind {
        PieceKind::Pawn | PieceKind::Chatur => square.row() != color.pawn_row(),
        PieceKind::King => !(on_home_row && square.col() == KING_HOME_COL),
        PieceKind::Rook => {
            !(on_home_row
                && (square.col() == KINGSIDE_ROOK_COL || square.col() == QUEENSIDE_ROOK_COL))
        }
        _ => false,
    }
}

fn piece_from_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'c' => PieceKind::Chatur,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some((color, kind))
}

fn piece_to_char(color: Color, kind: PieceKind) -> char {
    let ch = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Chatur => 'c',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn starting_placement_matches_starting_position() {
        assert_eq!(
            parse_placement(STARTING_PLACEMENT).unwrap(),
            Board::starting_position()
        );
        assert_eq!(
            generate_placement(&Board::starting_position()),
            STARTING_PLACEMENT
        );
    }

    #[test]
    fn moved_flags_are_inferred_from_position() {
        let board = parse_placement("3k4/8/8/8/8/3C4/1C6/R3K1R1").unwrap();
        assert!(board.get(sq(5, 3)).unwrap().has_moved);
        assert!(!board.get(sq(6, 1)).unwrap().has_moved);
        assert!(!board.get(sq(7, 0)).unwrap().has_moved);
        assert!(board.get(sq(7, 6)).unwrap().has_moved);
        assert!(!board.get(sq(7, 4)).unwrap().has_moved);
        assert!(board.get(sq(0, 3)).unwrap().has_moved);
    }

    #[test]
    fn rejects_malformed_diagrams() {
        assert!(matches!(
            parse_placement("8/8/8"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/7"),
            Err(ChessErrors::InvalidPlacementForm(_))
        ));
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7x"),
            Err(ChessErrors::InvalidPlacementToken('x'))
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/k6k"),
            Err(ChessErrors::DuplicateKing(Color::Black))
        );
    }
}
