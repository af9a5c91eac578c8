// Peão - Núcleo de busca minimax com poda alfa-beta

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;
pub mod search;

#[cfg(test)]
mod testing;

pub use crate::core::*;
pub use crate::error::*;
