//! Monopoly Odds - Entry Point
//!
//! Runs the landing-frequency simulation, prints the named-square report
//! and ranking, and optionally writes JSON or a heat map.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use monopoly_odds::report::{self, HeatmapGrid};
use monopoly_odds::{simulate, Result, SimulationConfig};

/// Estimate how often a token lands on each Monopoly square
#[derive(Parser, Debug)]
#[command(name = "monopoly-odds")]
#[command(about = "Monte Carlo landing frequencies for each Monopoly square")]
struct Args {
    /// Number of games to simulate [default: 1000]
    #[arg(long, short = 'n')]
    games: Option<u32>,

    /// Turns per game [default: 100]
    #[arg(long, short = 't')]
    turns: Option<u32>,

    /// Base seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with run settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run every game on the current thread
    #[arg(long)]
    sequential: bool,

    /// How many squares to list in the ranking
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the distribution as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Draw the board heat map in the terminal
    #[arg(long)]
    heatmap: bool,

    /// Write the board heat map as a PNG to this file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Pixel size of one board square in the PNG
    #[arg(long, default_value_t = 32)]
    cell_px: u32,
}

impl Args {
    fn to_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(games) = self.games {
            config.games = games;
        }
        if let Some(turns) = self.turns {
            config.turns_per_game = turns;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.sequential {
            config.parallel_threshold = u32::MAX;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monopoly_odds=info".into()),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.to_config()?;
    let dist = simulate(&config)?;

    println!("{}", report::named_squares_text(&dist));
    println!("{}", report::ranking_text(&dist, args.top));

    if let Some(path) = &args.json {
        std::fs::write(path, dist.to_json()?)?;
        println!("Distribution written to {}", path.display());
    }

    if args.heatmap || args.png.is_some() {
        let grid = HeatmapGrid::from_distribution(&dist);
        if args.heatmap {
            println!("Darker squares are landed on more often:");
            grid.render_terminal(&mut io::stdout())?;
        }
        if let Some(path) = &args.png {
            grid.save_png(path, args.cell_px)?;
            println!("Heat map written to {}", path.display());
        }
    }

    Ok(())
}
