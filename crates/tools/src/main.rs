use anyhow::{Result, anyhow, bail};
use clap::{Parser, Subcommand};
use game_core::maze::{self, MazeAlgorithm};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a maze and print it as ASCII box drawing
    Print {
        #[arg(short, long, default_value_t = 16)]
        width: usize,
        #[arg(long, default_value_t = 12)]
        height: usize,
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value = "eller")]
        algorithm: String,
        /// Mirror the left half into a bilaterally symmetric maze
        #[arg(long)]
        symmetric: bool,
    },
    /// Verify the spanning-tree invariant across many seeds and algorithms
    Check {
        #[arg(long, default_value_t = 100)]
        seeds: u64,
        #[arg(short, long, default_value_t = 16)]
        width: usize,
        #[arg(long, default_value_t = 12)]
        height: usize,
    },
    /// Carve a playfield (or show the hand-authored default) as symbol rows
    Map {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long)]
        default_map: bool,
    },
}

fn parse_algorithm(name: &str) -> Result<MazeAlgorithm> {
    MazeAlgorithm::ALL
        .into_iter()
        .find(|algorithm| algorithm.label() == name)
        .ok_or_else(|| anyhow!("unknown algorithm '{name}' (expected eller, wilson, prim or kruskal)"))
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Print { width, height, seed, algorithm, symmetric } => {
            let algorithm = parse_algorithm(&algorithm)?;
            let topology = if symmetric {
                maze::generate_symmetric(width, height, seed, algorithm)
            } else {
                maze::generate(width, height, seed, algorithm)
            }
            .map_err(|error| anyhow!("generation failed: {error}"))?;
            print!("{}", topology.ascii());
        }
        Command::Check { seeds, width, height } => {
            for algorithm in MazeAlgorithm::ALL {
                for seed in 0..seeds {
                    let topology = maze::generate(width, height, seed, algorithm)
                        .map_err(|error| anyhow!("{}: seed {seed}: {error}", algorithm.label()))?;
                    if !topology.is_perfect() {
                        bail!(
                            "{}: seed {seed} violated the spanning-tree invariant",
                            algorithm.label()
                        );
                    }
                }
                println!(
                    "{}: {seeds} seeds OK ({width}x{height}, {} passages each)",
                    algorithm.label(),
                    width * height - 1
                );
            }
        }
        Command::Map { seed, default_map } => {
            let rows = if default_map {
                maze::default_map_rows()
            } else {
                maze::generated_map_rows(seed)
                    .map_err(|error| anyhow!("playfield generation failed: {error}"))?
            };
            for row in rows {
                println!("{row}");
            }
        }
    }

    Ok(())
}
