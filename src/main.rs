use pivotcube::{random_cube, random_moves, FaceletCube, Move, SolveOptions};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the persisted tables (built there when absent).
    #[clap(long, value_parser)]
    table_dir: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a cube given as a 54-character facelet string.
    Solve {
        #[clap(value_parser)]
        facelets: String,

        /// Maximum total move count (hard cap 31).
        #[clap(long, value_parser, default_value_t = 24)]
        max_depth: u8,

        /// Wall-clock budget in milliseconds.
        #[clap(long, value_parser)]
        timeout_ms: Option<u64>,

        /// Skip re-applying the solution as a self-check.
        #[clap(long, value_parser, default_value_t = false)]
        no_verify: bool,
    },
    /// Check whether a facelet string denotes a solvable cube.
    Verify {
        #[clap(value_parser)]
        facelets: String,
    },
    /// Print a uniformly random solvable cube as a facelet string.
    Random,
    /// Print a random scramble sequence.
    Scramble {
        #[clap(short, long, value_parser, default_value_t = 25)]
        length: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(dir) = &cli.table_dir {
        std::env::set_var("PIVOTCUBE_TABLE_DIR", dir);
    }

    match cli.command {
        Command::Solve {
            facelets,
            max_depth,
            timeout_ms,
            no_verify,
        } => {
            let options = SolveOptions {
                max_depth,
                timeout: timeout_ms.map(Duration::from_millis),
                verify_solution: !no_verify,
            };
            match pivotcube::solve(&facelets, &options) {
                Ok(solution) => println!("{}", solution),
                Err(e) => {
                    log::error!("{}", e);
                    println!("Error {}", e.wrapper_code());
                    std::process::exit(1);
                }
            }
        }
        Command::Verify { facelets } => match pivotcube::verify(&facelets) {
            Ok(()) => println!("OK"),
            Err(e) => {
                log::error!("{}", e);
                println!("Error {}", e.wrapper_code());
                std::process::exit(1);
            }
        },
        Command::Random => {
            let cube = random_cube(&mut rand::thread_rng());
            println!("{}", FaceletCube::from_cubie(&cube));
        }
        Command::Scramble { length } => {
            let moves = random_moves(&mut rand::thread_rng(), length);
            println!("{}", Move::format_sequence(&moves));
        }
    }

    Ok(())
}
