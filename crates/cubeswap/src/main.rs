//! 3x3x3 twisty cube simulator for the terminal.

mod cli;
mod net;
mod play;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args)
}
