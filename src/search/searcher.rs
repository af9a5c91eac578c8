// Ficheiro: src/search/searcher.rs
// Descrição: Ponto de entrada da busca. Valida o pedido, copia o tabuleiro do
// chamador e escolhe entre a busca sequencial e a paralela na raiz.

use super::alpha_beta::{alpha_beta, SearchContext};
use super::parallel_search::search_root_parallel;
use crate::core::*;
use crate::error::{EngineError, EngineResult};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Configuração da busca.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Profundidade em meios-lances. Tem de ser pelo menos 1.
    pub depth: u8,
    /// Threads do pool usado pela busca paralela na raiz.
    pub threads: usize,
    /// Distribui os lances da raiz pelo pool em vez de os procurar em sequência.
    pub parallel_root: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            threads: num_cpus::get().max(1),
            parallel_root: false,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        SearchConfig { depth, ..Default::default() }
    }
}

/// Resultado de uma busca na raiz.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// Valor do lance do ponto de vista do jogador que procurou.
    pub score: Score,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Motor de busca minimax com poda alfa-beta.
pub struct Searcher {
    config: SearchConfig,
    pool: Option<ThreadPool>,
}

impl Searcher {
    /// Cria o motor. O pool de threads só é construído para a busca paralela.
    pub fn new(config: SearchConfig) -> EngineResult<Self> {
        let pool = if config.parallel_root {
            Some(ThreadPoolBuilder::new().num_threads(config.threads.max(1)).build()?)
        } else {
            None
        };

        debug!(
            depth = config.depth,
            threads = config.threads,
            parallel = config.parallel_root,
            "motor de busca criado"
        );

        Ok(Searcher { config, pool })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Melhor lance de `player` com a janela completa.
    pub fn best_move(&self, board: &Board, player: Player) -> EngineResult<SearchResult> {
        self.best_move_within(board, player, SCORE_MIN, SCORE_MAX)
    }

    /// Melhor lance de `player` dentro da janela (`alpha`, `beta`).
    ///
    /// A busca trabalha numa cópia: o tabuleiro do chamador nunca é alterado.
    pub fn best_move_within(
        &self,
        board: &Board,
        player: Player,
        alpha: Score,
        beta: Score,
    ) -> EngineResult<SearchResult> {
        let depth = self.config.depth;
        if depth == 0 {
            return Err(EngineError::InvalidDepth);
        }

        let start_time = Instant::now();

        let (best_move, score, nodes_searched) = match &self.pool {
            Some(pool) => search_root_parallel(pool, board, player, depth, alpha, beta),
            None => {
                let mut scratch = board.clone();
                let mut ctx = SearchContext::new(player);
                let mut best_move = Move::null();
                let score = alpha_beta(&mut ctx, &mut scratch, player, depth, alpha, beta, &mut best_move);
                debug_assert_eq!(&scratch, board, "a busca tem de repor o tabuleiro");
                (best_move, score, ctx.nodes_searched)
            }
        };

        if best_move.is_null() {
            return Err(EngineError::NoLegalMove { player });
        }

        let time_elapsed = start_time.elapsed();

        trace!(mv = %best_move.notation(), score, "lance escolhido na raiz");
        debug!(
            %player,
            depth,
            score,
            nodes = nodes_searched,
            elapsed_ms = time_elapsed.as_millis() as u64,
            "busca concluída"
        );

        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes_searched,
            time_elapsed,
        })
    }
}
