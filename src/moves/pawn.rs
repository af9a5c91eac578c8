// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica para gerar os lances dos peões.

use super::{move_to, MoveSink, Target};
use crate::core::*;

/// Direção de avanço e fila inicial do peão de cada jogador.
#[inline]
fn pawn_geometry(player: Player) -> (i8, i8) {
    match player {
        Player::White => (1, 1),
        Player::Black => (-1, 6),
    }
}

/// Gera os lances do peão em (x, y): avanço simples, avanço duplo a partir
/// da fila inicial (só se o simples passou) e as duas capturas diagonais.
pub fn generate_pawn_moves<S: MoveSink>(board: &Board, player: Player, x: i8, y: i8, sink: &mut S) {
    let (forward, start_rank) = pawn_geometry(player);

    if move_to(board, player, x, y, 0, forward, Target::EmptyOnly, sink) && y == start_rank {
        move_to(board, player, x, y, 0, 2 * forward, Target::EmptyOnly, sink);
    }

    move_to(board, player, x, y, -1, forward, Target::CaptureOnly, sink);
    move_to(board, player, x, y, 1, forward, Target::CaptureOnly, sink);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_targets(board: &Board, player: Player, square: Square) -> Vec<Square> {
        let mut sink = Vec::new();
        generate_pawn_moves(board, player, Board::index_to_x(square), Board::index_to_y(square), &mut sink);
        let mut targets: Vec<Square> = sink.iter().map(|mv| mv.to()).collect();
        targets.sort();
        targets
    }

    #[test]
    fn test_pawn_single_and_double_push_from_start() {
        let board = Board::new();
        assert_eq!(pawn_targets(&board, Player::White, 12), vec![20, 28]);
        assert_eq!(pawn_targets(&board, Player::Black, 52), vec![36, 44]);
    }

    #[test]
    fn test_pawn_double_push_only_from_start_rank() {
        let mut board = Board::empty();
        board.set_piece_at(20, PieceKind::Pawn.code(Player::White));
        assert_eq!(pawn_targets(&board, Player::White, 20), vec![28]);
    }

    #[test]
    fn test_blocked_pawn_cannot_jump() {
        let mut board = Board::new();
        // Peça na casa imediatamente à frente bloqueia também o avanço duplo
        board.set_piece_at(20, PieceKind::Knight.code(Player::Black));
        assert_eq!(pawn_targets(&board, Player::White, 12), Vec::<Square>::new());

        // Bloqueio só na segunda casa deixa o avanço simples
        let mut board = Board::new();
        board.set_piece_at(28, PieceKind::Knight.code(Player::Black));
        assert_eq!(pawn_targets(&board, Player::White, 12), vec![20]);
    }

    #[test]
    fn test_pawn_captures_only_enemy_diagonals() {
        let mut board = Board::empty();
        board.set_piece_at(27, PieceKind::Pawn.code(Player::White));
        board.set_piece_at(34, PieceKind::Rook.code(Player::Black));
        board.set_piece_at(36, PieceKind::Rook.code(Player::White));
        board.set_piece_at(35, PieceKind::Bishop.code(Player::Black));
        // Avanço bloqueado, só a captura em c5
        assert_eq!(pawn_targets(&board, Player::White, 27), vec![34]);
    }

    #[test]
    fn test_black_pawn_moves_down_the_board() {
        let mut board = Board::empty();
        board.set_piece_at(35, PieceKind::Pawn.code(Player::Black));
        board.set_piece_at(26, PieceKind::Queen.code(Player::White));
        assert_eq!(pawn_targets(&board, Player::Black, 35), vec![26, 27]);
    }

    #[test]
    fn test_edge_pawn_does_not_wrap() {
        let mut board = Board::empty();
        board.set_piece_at(8, PieceKind::Pawn.code(Player::White));
        // Peça inimiga em h2: a "diagonal" a2 -> h2 não pode existir
        board.set_piece_at(15, PieceKind::Rook.code(Player::Black));
        board.set_piece_at(23, PieceKind::Rook.code(Player::Black));
        assert_eq!(pawn_targets(&board, Player::White, 8), vec![16, 24]);
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_moves() {
        let mut board = Board::empty();
        board.set_piece_at(60, PieceKind::Pawn.code(Player::White));
        assert!(pawn_targets(&board, Player::White, 60).is_empty());
    }
}
