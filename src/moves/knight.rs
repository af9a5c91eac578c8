// Ficheiro: src/moves/knight.rs
// Descrição: Lógica para gerar os lances dos cavalos.

use super::{move_to, MoveSink, Target};
use crate::core::*;

/// Os oito saltos do cavalo, testados de forma independente.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (1, 2),
    (2, -1), (1, -2),
    (-2, 1), (-1, 2),
    (-2, -1), (-1, -2),
];

/// Gera os lances do cavalo em (x, y).
pub fn generate_knight_moves<S: MoveSink>(board: &Board, player: Player, x: i8, y: i8, sink: &mut S) {
    for &(dx, dy) in &KNIGHT_OFFSETS {
        move_to(board, player, x, y, dx, dy, Target::EmptyOrCapture, sink);
    }
}
