use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use u_dispatch::heap::{HeapConfig, PriorityHeap, DEFAULT_INITIAL_CAPACITY};
use u_dispatch::loader::Loader;
use u_dispatch::session::Session;
use u_dispatch::shipment::CategorySet;

/// Interactive priority dispatch for pending shipments.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Recognized category codes (comma separated)
    #[arg(long, default_value = "9,5,3")]
    categories: CategorySet,

    /// Initial heap capacity (0 = default)
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY)]
    initial_capacity: usize,

    /// CSV file to load before showing the menu
    #[arg(long, value_parser = clap::value_parser!(PathBuf))]
    load: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = try_main(cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn try_main(cli: Cli) -> Result<()> {
    cli.categories
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid --categories")?;

    let config = HeapConfig::default().with_initial_capacity(cli.initial_capacity);
    let mut heap = PriorityHeap::with_config(&config);
    let loader = Loader::new(cli.categories);

    if let Some(path) = &cli.load {
        let report = loader.load_path(path, &mut heap)?;
        println!("Loaded {} shipments from {}.", report.inserted, path.display());
        for rejected in &report.rejected {
            println!("  skipped {rejected}");
        }
    }

    let stdin = io::stdin();
    let mut session = Session::new(heap, loader, stdin.lock(), io::stdout());
    session.run()?;

    log::info!("{} shipments left pending", session.heap().size());
    Ok(())
}
