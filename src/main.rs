// Peão - Partida automática do motor contra si próprio
use clap::Parser;
use peao::search::{SearchConfig, Searcher};
use peao::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Joga o motor contra si próprio a partir da posição inicial.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Profundidade da busca em meios-lances.
    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Número de meios-lances a jogar. Com 0 joga até um lado ficar sem lances.
    #[arg(short, long, default_value_t = 2)]
    plies: u32,

    /// Threads da busca paralela. Por omissão, uma por CPU.
    #[arg(short, long)]
    threads: Option<usize>,

    /// Distribui os lances da raiz pelas threads.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            depth: self.depth,
            threads: self.threads.unwrap_or(defaults.threads),
            parallel_root: self.parallel,
        }
    }
}

fn main() -> EngineResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let searcher = Searcher::new(cli.search_config())?;

    let mut board = Board::new();
    let mut player = Player::White;
    println!("{}", board);

    let mut ply: u32 = 0;
    while cli.plies == 0 || ply < cli.plies {
        let result = match searcher.best_move(&board, player) {
            Ok(result) => result,
            Err(EngineError::NoLegalMove { player }) => {
                warn!(%player, ply, "sem lances, fim da partida");
                break;
            }
            Err(e) => return Err(e),
        };

        let mut mv = result.best_move;
        mv.apply(&mut board);
        ply += 1;

        info!(ply, %player, mv = %mv.notation(), score = result.score, "lance jogado");

        println!("{}", board);
        println!(
            "{}: {} | valor {} | {} nós em {:.2?}",
            player,
            mv.notation(),
            result.score,
            result.nodes_searched,
            result.time_elapsed
        );
        println!();

        player = !player;
    }

    Ok(())
}
