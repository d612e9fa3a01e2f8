//! Command line driver for Chess Friends tournaments
//!
//! Generates a schedule from a roster file, records results into a saved
//! tournament and prints standings.

use anyhow::{anyhow, Result};
use chess_friends::config::{validate_config, AppConfig};
use chess_friends::report::{render_schedule, render_standings};
use chess_friends::roster::load_roster;
use chess_friends::{GameResult, Tournament};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

/// Chess Friends - round-robin tournaments with clock handicaps
#[derive(Parser)]
#[command(
    name = "chess-friends",
    version,
    about = "Round-robin chess tournament scheduling with rating-based clock handicaps"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate and print the schedule for a roster
    Schedule {
        /// Roster file (TOML)
        #[arg(short, long, value_name = "FILE")]
        roster: PathBuf,

        #[arg(short, long, default_value = "Tournament")]
        name: String,

        /// First day of the tournament (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the tournament (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Save the tournament as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Record a result into a saved tournament
    ///
    /// The handicap and scoring settings stored in the tournament file are
    /// used; only the log level is taken from the configuration.
    Record {
        #[arg(short, long, value_name = "FILE")]
        tournament: PathBuf,

        #[arg(short, long)]
        matchday: usize,

        #[arg(short, long)]
        game: usize,

        /// WHITE_WINS, BLACK_WINS, DRAW or ONGOING
        #[arg(short, long)]
        result: GameResult,
    },
    /// Print standings of a saved tournament
    ///
    /// Scores use the scoring settings stored in the tournament file; only
    /// the log level is taken from the configuration.
    Standings {
        #[arg(short, long, value_name = "FILE")]
        tournament: PathBuf,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply command line overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn run(args: Args, config: AppConfig) -> Result<()> {
    match args.command {
        Command::Schedule {
            roster,
            name,
            start,
            end,
            output,
        } => {
            let players = load_roster(&roster)?;
            info!("Loaded {} players from {}", players.len(), roster.display());

            let mut tournament = Tournament::new(&name, start, end)?.with_config(&config);
            tournament.add_players(players)?;
            let schedule = tournament.generate_schedule()?;
            print!("{}", render_schedule(schedule));

            if let Some(path) = output {
                tournament.save(&path)?;
            }
        }
        Command::Record {
            tournament: path,
            matchday,
            game,
            result,
        } => {
            let mut tournament = Tournament::load(&path)?;
            tournament.set_result(matchday, game, result)?;
            tournament.save(&path)?;
        }
        Command::Standings { tournament: path } => {
            let tournament = Tournament::load(&path)?;
            let standings = tournament.standings();
            print!("{}", render_standings(tournament.players(), &standings));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("{} v{}", config.service.name, chess_friends::VERSION);

    if let Err(e) = run(args, config) {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
