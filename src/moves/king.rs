// Ficheiro: src/moves/king.rs
// Descrição: Lógica para gerar os lances do Rei.

use super::{move_to, MoveSink, Target};
use crate::core::*;

/// Um passo em cada uma das oito direções.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (1, -1),
    (-1, 1), (1, 1),
    (0, 1), (0, -1),
    (1, 0), (-1, 0),
];

/// Gera os lances do rei em (x, y). Sem roque e sem verificação de xeque.
pub fn generate_king_moves<S: MoveSink>(board: &Board, player: Player, x: i8, y: i8, sink: &mut S) {
    for &(dx, dy) in &KING_OFFSETS {
        move_to(board, player, x, y, dx, dy, Target::EmptyOrCapture, sink);
    }
}
