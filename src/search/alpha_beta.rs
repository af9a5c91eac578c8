// Ficheiro: src/search/alpha_beta.rs
// Descrição: Minimax com poda alfa-beta sobre um único tabuleiro partilhado,
// alterado e reposto por cada nó.

use super::evaluation::evaluate_position;
use crate::core::*;

/// Estado partilhado por todos os nós de uma busca.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Jogador da raiz: maximiza, e as folhas são avaliadas do seu ponto de vista.
    pub perspective: Player,
    pub nodes_searched: u64,
}

impl SearchContext {
    pub fn new(perspective: Player) -> Self {
        SearchContext { perspective, nodes_searched: 0 }
    }

    #[inline]
    pub fn is_maximizing(&self, player: Player) -> bool {
        player == self.perspective
    }
}

/// Alpha-Beta recursivo.
///
/// `alpha` é o melhor valor que o maximizador já garante e `beta` o melhor que
/// o minimizador já garante. O melhor lance deste nó vai para `best_move`; os
/// nós filhos escrevem num lance descartável.
///
/// Cada lance é aplicado antes da recursão e aplicado outra vez depois, por
/// isso o tabuleiro sai deste nó exatamente como entrou.
///
/// Um nó interior sem lances é avaliado como folha.
pub fn alpha_beta(
    ctx: &mut SearchContext,
    board: &mut Board,
    player: Player,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
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

    let mut reply = Move::null();

    if ctx.is_maximizing(player) {
        let mut max = SCORE_MIN;

        for &mv in moves.iter() {
            let mut mv = mv;
            mv.apply(board);
            let score = alpha_beta(ctx, board, !player, depth - 1, alpha, beta, &mut reply);
            mv.apply(board);

            if score > max {
                max = score;
                *best_move = mv;
                alpha = alpha.max(max);
            }
            if beta <= alpha {
                break;
            }
        }

        max
    } else {
        let mut min = SCORE_MAX;

        for &mv in moves.iter() {
            let mut mv = mv;
            mv.apply(board);
            let score = alpha_beta(ctx, board, !player, depth - 1, alpha, beta, &mut reply);
            mv.apply(board);

            if score < min {
                min = score;
                *best_move = mv;
                beta = beta.min(min);
            }
            if beta <= alpha {
                break;
            }
        }

        min
    }
}
