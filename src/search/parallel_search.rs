// Ficheiro: src/search/parallel_search.rs
// Descrição: Busca paralela na raiz. Cada lance da raiz é explorado numa
// cópia própria do tabuleiro, dentro de um pool rayon.

use super::alpha_beta::{alpha_beta, SearchContext};
use crate::core::*;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::trace;

/// Resultado de um ramo da raiz.
#[derive(Debug, Clone, Copy)]
struct RootBranch {
    mv: Move,
    score: Score,
    nodes: u64,
}

/// Explora os lances da raiz em paralelo e escolhe como a busca sequencial:
/// percorre os ramos pela ordem de geração e só troca de lance quando o valor
/// melhora estritamente.
///
/// Os ramos não partilham limites entre si, por isso cada um é procurado com a
/// janela do chamador. Com a janela completa o lance e o valor são os mesmos da
/// versão sequencial; o número de nós é maior.
///
/// `depth` tem de ser pelo menos 1. Devolve o lance nulo se não houver lances.
pub fn search_root_parallel(
    pool: &ThreadPool,
    board: &Board,
    player: Player,
    depth: u8,
    mut alpha: Score,
    beta: Score,
) -> (Move, Score, u64) {
    debug_assert!(depth >= 1);

    let moves = board.generate_all_moves(player);

    let branches: Vec<RootBranch> = pool.install(|| {
        moves
            .as_slice()
            .par_iter()
            .map(|&mv| {
                let mut branch_board = board.clone();
                let mut applied = mv;
                applied.apply(&mut branch_board);

                let mut ctx = SearchContext::new(player);
                let mut reply = Move::null();
                let score = alpha_beta(&mut ctx, &mut branch_board, !player, depth - 1, alpha, beta, &mut reply);

                trace!(mv = %mv.notation(), score, nodes = ctx.nodes_searched, "ramo da raiz");
                RootBranch { mv, score, nodes: ctx.nodes_searched }
            })
            .collect()
    });

    let nodes = 1 + branches.iter().map(|b| b.nodes).sum::<u64>();

    let mut best_move = Move::null();
    let mut max = SCORE_MIN;
    for branch in &branches {
        if branch.score > max {
            max = branch.score;
            best_move = branch.mv;
            alpha = alpha.max(max);
        }
        if beta <= alpha {
            break;
        }
    }

    (best_move, max, nodes)
}
