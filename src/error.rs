//! Tipos de erro do motor.
//!
//! Só condições que o chamador pode tratar chegam aqui. Índices fora do
//! tabuleiro e listas de lances cheias continuam a ser pânico: indicam um
//! erro de programação, não do ambiente.

use crate::core::Player;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// O jogador na raiz não tem nenhum lance (substituto de afogamento).
    #[error("no legal move available for {player}")]
    NoLegalMove { player: Player },

    /// Busca pedida com profundidade zero: não há lance a escolher.
    #[error("search depth must be at least 1")]
    InvalidDepth,

    /// Falha ao criar o pool de threads da busca paralela.
    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Alias de resultado para as operações do motor.
pub type EngineResult<T> = Result<T, EngineError>;
