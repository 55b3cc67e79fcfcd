use std::path::PathBuf;

use cubeswap_core::{Cube, SolveReport, StageOutcome, format_twists, parse_twists};
use cubeswap_prefs::Preferences;
use eyre::{Context, Result};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// 3x3x3 twisty cube simulator
///
/// If no subcommand is specified, then an interactive session is started.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default location.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,
    /// Print facelet initials without color.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply twists to a solved cube and print the result.
    Net {
        /// Twists in standard notation, such as `R U R' U'`.
        twists: Vec<String>,
    },
    /// Print a random scramble and the resulting cube.
    Scramble {
        /// Number of twists (defaults to the preferences).
        #[arg(short, long)]
        length: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Scramble a cube, run the partial solver, and print what it did.
    Solve {
        /// Seed for a reproducible scramble.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Start an interactive session.
    Play,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    let prefs = Preferences::load(args.prefs.as_deref());
    let color = !args.plain;

    match args.subcommand.unwrap_or(Subcommand::Play) {
        Subcommand::Net { twists } => {
            let twists = parse_twists(&twists.join(" ")).wrap_err("invalid twist notation")?;
            let mut cube = Cube::with_palette(&prefs.colors);
            cube.twist_all(twists);
            print!("{}", crate::net::render(&cube, color));
            Ok(())
        }

        Subcommand::Scramble { length, seed } => {
            let mut cube = Cube::with_palette(&prefs.colors);
            let length = length.unwrap_or(prefs.scramble.length);
            let twists = cube.scramble_with_rng(&mut *rng(seed), length);
            println!("{}", format_twists(&twists));
            print!("{}", crate::net::render(&cube, color));
            Ok(())
        }

        Subcommand::Solve { seed } => {
            let mut cube = Cube::with_palette(&prefs.colors);
            let twists = cube.scramble_with_rng(&mut *rng(seed), prefs.scramble.length);
            println!("scramble: {}", format_twists(&twists));
            print!("{}", crate::net::render(&cube, color));

            let report = cube.solve();
            print_report(&report);
            println!("solved: {}", cube.is_solved());
            print!("{}", crate::net::render(&cube, color));
            Ok(())
        }

        Subcommand::Play => crate::play::run(&prefs, color),
    }
}

fn rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha12Rng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    }
}

pub(crate) fn print_report(report: &SolveReport) {
    println!("solution: {}", format_twists(&report.twists));
    for (stage, outcome) in &report.stages {
        match outcome {
            StageOutcome::Attempted {
                twists,
                stalled_edges: 0,
            } => println!("  {stage}: {twists} twists"),
            StageOutcome::Attempted {
                twists,
                stalled_edges,
            } => println!("  {stage}: {twists} twists, {stalled_edges} edges skipped"),
            StageOutcome::Unimplemented => println!("  {stage}: not implemented"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn test_args() {
        Args::command().debug_assert();

        let args = Args::parse_from(["cubeswap", "scramble", "--seed", "5", "--plain"]);
        assert!(args.plain);
        assert!(matches!(
            args.subcommand,
            Some(Subcommand::Scramble {
                length: None,
                seed: Some(5),
            }),
        ));

        let args = Args::parse_from(["cubeswap", "--prefs", "p.yaml", "net", "R", "U'"]);
        assert_eq!(args.prefs, Some(PathBuf::from("p.yaml")));
        assert!(matches!(args.subcommand, Some(Subcommand::Net { twists }) if twists == ["R", "U'"]));

        assert!(Args::parse_from(["cubeswap"]).subcommand.is_none());
    }
}
