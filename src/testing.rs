// Ficheiro: src/testing.rs
// Descrição: Posições aleatórias para os testes, obtidas por passeios
// aleatórios a partir da posição inicial.

use crate::core::*;
use rand::rngs::StdRng;
use rand::Rng;

/// Joga até `plies` lances aleatórios a partir da posição inicial e devolve o
/// tabuleiro com o jogador a mover. Para mais cedo se o jogador não tiver lances.
pub fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::White;

    for _ in 0..plies {
        let moves = board.generate_all_moves(player);
        if moves.is_empty() {
            break;
        }
        let mut mv = moves.as_slice()[rng.gen_range(0..moves.len())];
        mv.apply(&mut board);
        player = !player;
    }

    (board, player)
}
