pub mod alpha_beta;
pub mod evaluation;
pub mod minimax;
pub mod parallel_search;
pub mod searcher;

pub use alpha_beta::*;
pub use evaluation::*;
pub use minimax::*;
pub use parallel_search::*;
pub use searcher::*;
