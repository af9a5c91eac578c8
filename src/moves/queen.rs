// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para gerar os lances da Dama (torre + bispo).

use super::sliding::slide_all;
use super::MoveSink;
use crate::core::*;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

/// Gera os lances da dama em (x, y).
#[inline]
pub fn generate_queen_moves<S: MoveSink>(board: &Board, player: Player, x: i8, y: i8, sink: &mut S) {
    slide_all(board, player, x, y, &QUEEN_DIRECTIONS, sink);
}
