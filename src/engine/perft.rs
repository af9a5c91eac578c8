// Ficheiro: src/engine/perft.rs
// Descrição: Contagem de folhas da árvore de lances (perft), usando o mesmo
// aplicar/desfazer da busca sobre um único tabuleiro.

use crate::core::*;

/// Número de folhas a `depth` meios-lances de distância, com `player` a jogar.
/// O tabuleiro volta ao estado original antes de a função retornar.
pub fn perft(board: &mut Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.generate_all_moves(player);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for &mv in moves.iter() {
        let mut mv = mv;
        mv.apply(board);
        nodes += perft(board, !player, depth - 1);
        mv.apply(board);
    }
    nodes
}

/// Perft dividido pelos lances da raiz, na ordem de geração.
pub fn perft_divide(board: &mut Board, player: Player, depth: u8) -> Vec<(Move, u64)> {
    let moves = board.generate_all_moves(player);
    let mut results = Vec::with_capacity(moves.len());

    for &mv in moves.iter() {
        let mut applied = mv;
        applied.apply(board);
        let nodes = perft(board, !player, depth.saturating_sub(1));
        applied.apply(board);
        results.push((mv, nodes));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_from_opening() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Player::White, 0), 1);
        assert_eq!(perft(&mut board, Player::White, 1), 20);
        assert_eq!(perft(&mut board, Player::White, 2), 400);
        assert_eq!(perft(&mut board, Player::White, 3), 8902);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_perft_is_symmetric_for_black() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, Player::Black, 2), 400);
        assert_eq!(perft(&mut board, Player::Black, 3), 8902);
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let mut board = Board::new();
        let divided = perft_divide(&mut board, Player::White, 3);
        assert_eq!(divided.len(), 20);
        let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, perft(&mut board, Player::White, 3));
        assert_eq!(board, Board::new());

        // Nenhum primeiro lance das brancas tira respostas às pretas
        for (mv, nodes) in perft_divide(&mut board, Player::White, 2) {
            assert_eq!(nodes, 20, "lance {}", mv.notation());
        }
    }

    #[test]
    fn test_perft_lone_kings() {
        let mut board = Board::empty();
        board.set_piece_at(0, PieceKind::King.code(Player::White));
        board.set_piece_at(63, PieceKind::King.code(Player::Black));
        assert_eq!(perft(&mut board, Player::White, 1), 3);
        assert_eq!(perft(&mut board, Player::White, 2), 9);
    }
}
