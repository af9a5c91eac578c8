// Ficheiro: src/search/evaluation.rs
// Descrição: Função de avaliação estática das posições.

use crate::core::*;

/// Avaliação simples baseada no material das peças, do ponto de vista de
/// `perspective`. O rei vale 1000 para dominar qualquer soma de material,
/// já que não há deteção de xeque.
#[inline]
pub fn evaluate_position(board: &Board, perspective: Player) -> Score {
    board.score_for(perspective)
}
