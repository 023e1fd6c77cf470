//! Terminal-oriented Unicode board renderer.
//!
//! Draws row 0 at the top with row and column indices on the borders, so the
//! picture reads the same way as the `(row, col)` coordinates the engine uses.

use crate::game_state::chess_types::*;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..8u8 {
            match board.get(Square::from_index(row * 8 + col)) {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

/// Board plus a status line for the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    let status = match (game_state.pending_promotion(), game_state.status()) {
        (Some(pending), _) => format!("{:?} to choose a promotion on {}", pending.color, pending.square),
        (None, GameStatus::Checkmate { winner }) => format!("checkmate, {winner:?} wins"),
        (None, GameStatus::Stalemate) => "stalemate".to_owned(),
        (None, GameStatus::Check) => format!("{:?} to move, in check", game_state.current_turn()),
        (None, GameStatus::InProgress) => format!("{:?} to move", game_state.current_turn()),
    };

    format!("{}\n{}", render_board(game_state.board()), status)
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Chatur) => '⛀',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Chatur) => '⛂',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
