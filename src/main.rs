//! Animal Rescue - Command Line Interface
//!
//! This is the main entry point for the rescue game.
//! Run with `--help` to see all available options.

use clap::{ArgAction, Parser};
use std::error::Error;
use std::io;
use std::path::PathBuf;

use animal_rescue::{data::load_roster, menu::Session, shelter::Shelter};

/// Command-line arguments for Animal Rescue.
#[derive(Parser, Debug)]
#[command(name = "animal-rescue")]
#[command(
    author,
    version,
    about = "Rescue, search and adopt animals by name and priority",
    long_about = None
)]
struct Args {
    /// CSV roster of animals to rescue before the menu starts (name,species,priority)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries the menu, so logs go to stderr
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut shelter = Shelter::new();
    if let Some(path) = &args.roster {
        let rows = load_roster(path)?;
        shelter.extend_from_roster(rows);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(shelter, stdin.lock(), stdout.lock());
    session.run()?;

    Ok(())
}
