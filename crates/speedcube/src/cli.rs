use std::path::{Path, PathBuf};

use cubeprefs::Preferences;
use cubesim::{CubeSimulation, CubieTransform, Move};
use eyre::{Context, Result};
use rand::SeedableRng;
use serde::Serialize;

/// Speedcube command-line interface
///
/// If no subcommand is specified, then the GUI is opened.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default one.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube without animating and print the result
    /// as JSON.
    Simulate {
        /// Moves to apply, such as "R U R' U'".
        #[arg(short, long)]
        moves: Option<String>,
        /// Scramble the cube before applying moves.
        #[arg(short, long)]
        scramble: bool,
        /// Seed for the scramble, for reproducible output.
        #[arg(long, requires = "scramble")]
        seed: Option<u64>,
    },
    /// Print the effective preferences as JSON.
    Prefs,
}

/// Result of the `simulate` subcommand.
#[derive(Serialize, Debug)]
struct SimulationOutput {
    scramble: Vec<Move>,
    history: Vec<Move>,
    cubies: Vec<CubieTransform>,
}

pub(crate) fn exec(subcommand: Subcommand, prefs_path: Option<&Path>) -> Result<()> {
    match subcommand {
        Subcommand::Simulate {
            moves,
            scramble,
            seed,
        } => {
            let prefs = Preferences::try_load(prefs_path)?;
            let moves = cubesim::parse_moves(moves.as_deref().unwrap_or_default())
                .context("error parsing moves")?;
            write_json_output(&simulate(&prefs, &moves, scramble, seed))
        }

        Subcommand::Prefs => write_json_output(&Preferences::try_load(prefs_path)?),
    }
}

fn simulate(
    prefs: &Preferences,
    moves: &[Move],
    scramble: bool,
    seed: Option<u64>,
) -> SimulationOutput {
    let mut sim = CubeSimulation::new(prefs);

    let scramble = match (scramble, seed) {
        (false, _) => vec![],
        (true, Some(seed)) => {
            sim.scramble_with(&mut rand_chacha::ChaCha8Rng::seed_from_u64(seed))
        }
        (true, None) => sim.scramble(),
    };
    sim.request_moves(moves.iter().copied());
    sim.catch_up();

    SimulationOutput {
        scramble,
        history: sim.history().to_vec(),
        cubies: sim.render_data(),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
