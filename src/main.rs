use std::path::PathBuf;

use clap::Parser;
use log::info;

use router18xx::prelude::*;

/// Computes the optimal train routes for one railway company.
///
/// The data directory must hold `tiles.json`, `trains.json`,
/// `board.json`, and `manifest.json`; an optional save file restores a
/// game in progress before solving.
#[derive(Parser, Debug)]
#[command(name = "router18xx", version, about)]
struct Args {
    /// The directory holding the game's data files.
    #[arg(long, value_name = "DIR")]
    data_dir: PathBuf,

    /// A save file to apply before solving.
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// The railway company to solve for.
    railway: String,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Rule(_) => 2,
        Error::NotFound(_) | Error::InvalidArgument(_) => 3,
        Error::Internal(_) => 4,
    }
}

fn run(args: &Args) -> Result<()> {
    let mut game = load_game(&args.data_dir)?;
    if let Some(path) = &args.save {
        let save = std::fs::read_to_string(path).map_err(|err| {
            Error::invalid(format!("cannot read {}: {}", path.display(), err))
        })?;
        apply_save(&mut game, &save)?;
        info!("Restored save file {}", path.display());
    }

    let solution = game.solve_for(&args.railway)?;
    for run in &solution.runs {
        match &run.route {
            Some(route) => {
                println!(
                    "Train {} earns {} running {}",
                    run.train.id, run.revenue, route
                );
            }
            None => println!("Train {} is not assigned a route", run.train.id),
        }
    }
    println!("Total revenue: {}", solution.value);
    Ok(())
}
