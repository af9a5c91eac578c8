// Ficheiro: src/search/minimax.rs
// Descrição: Minimax exaustivo, sem poda. Serve de referência para a busca Alpha-Beta.

use super::alpha_beta::SearchContext;
use super::evaluation::evaluate_position;
use crate::core::*;

/// Avalia a árvore inteira até `depth`. Devolve sempre o mesmo valor que
/// `alpha_beta` com a janela completa, visitando todos os nós.
pub fn minimax(
    ctx: &mut SearchContext,
    board: &mut Board,
    player: Player,
    depth: u8,
    best_move: &mut Move,
) -> Score {
    ctx.nodes_searched += 1;

    if depth == 0 {
        return evaluate_position(board, ctx.perspective);
    }

    let moves = board.generate_all_moves(player);
    if moves.is_empty() {
        return evaluate_position(board, ctx.perspective);
    }

    let maximizing = ctx.is_maximizing(player);
    let mut best = if maximizing { SCORE_MIN } else { SCORE_MAX };
    let mut reply = Move::null();

    for &mv in moves.iter() {
        let mut mv = mv;
        mv.apply(board);
        let score = minimax(ctx, board, !player, depth - 1, &mut reply);
        mv.apply(board);

        let improved = if maximizing { score > best } else { score < best };
        if improved {
            best = score;
            *best_move = mv;
        }
    }

    best
}
