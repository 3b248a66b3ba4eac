//! CLI frontend for Taro tarot readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "taro",
    about = "Three-card tarot readings from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding reading history and settings
    #[arg(long, global = true, env = "TARO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Base URL of the reading backend
    #[arg(long, global = true, env = "TARO_API_URL")]
    api_url: Option<String>,

    /// Compose readings locally instead of calling the backend
    #[arg(long, global = true)]
    offline: bool,

    /// Send bare card names, without orientation
    #[arg(long, global = true)]
    names_only: bool,

    /// Log request details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all 78 cards in the deck
    Cards,

    /// List the spread categories
    Spreads,

    /// Draw cards without requesting a reading
    Draw {
        /// Number of cards to draw
        #[arg(short, long, default_value = "3")]
        count: usize,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Draw three cards and request a reading for them
    Read {
        /// Spread category (love, career, day, future, harmony, health, karma, vacation)
        spread: String,

        /// Name the reading is for (default: the saved name)
        #[arg(short, long)]
        name: Option<String>,

        /// Language code for the reading (default: from settings)
        #[arg(short, long)]
        lang: Option<String>,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List saved readings, newest first
    History {
        /// Only show favorites
        #[arg(short, long)]
        favorites: bool,
    },

    /// Show a saved reading in full
    Show {
        /// Reading id (or a unique prefix of it)
        id: String,
    },

    /// Toggle the favorite flag of a reading
    Favorite {
        /// Reading id (or a unique prefix of it)
        id: String,
    },

    /// Delete a reading
    Delete {
        /// Reading id (or a unique prefix of it)
        id: String,
    },

    /// Delete every reading that is not a favorite
    Clear,

    /// Show statistics over the reading history
    Stats,

    /// Print a reading as shareable text
    Share {
        /// Reading id (or a unique prefix of it)
        id: String,
    },

    /// Show or change user settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,

    /// Change one or more settings
    Set {
        /// Name readings are made for
        #[arg(long)]
        name: Option<String>,

        /// Interface language: system, ru, en
        #[arg(long)]
        language: Option<String>,

        /// Dark theme preference
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Reminder notifications
        #[arg(long)]
        notifications: Option<bool>,

        /// Whether onboarding was seen
        #[arg(long)]
        onboarding_seen: Option<bool>,
    },

    /// Restore default settings
    Reset,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = Context::new(cli.data_dir, cli.api_url, cli.offline, cli.names_only);

    let result = match cli.command {
        Commands::Cards => commands::catalog::cards(),
        Commands::Spreads => commands::catalog::spreads(),
        Commands::Draw { count, seed } => commands::draw::run(count, seed),
        Commands::Read {
            spread,
            name,
            lang,
            seed,
        } => commands::read::run(&mut ctx, &spread, name.as_deref(), lang.as_deref(), seed),
        Commands::History { favorites } => commands::history::list(&ctx, favorites),
        Commands::Show { id } => commands::history::show(&ctx, &id),
        Commands::Favorite { id } => commands::history::favorite(&mut ctx, &id),
        Commands::Delete { id } => commands::history::delete(&mut ctx, &id),
        Commands::Clear => commands::history::clear(&mut ctx),
        Commands::Stats => commands::stats::run(&ctx),
        Commands::Share { id } => commands::history::share(&ctx, &id),
        Commands::Settings { action } => match action.unwrap_or(SettingsAction::Show) {
            SettingsAction::Show => commands::settings::show(&ctx),
            SettingsAction::Set {
                name,
                language,
                dark_mode,
                notifications,
                onboarding_seen,
            } => commands::settings::set(
                &mut ctx,
                commands::settings::SettingsUpdate {
                    name,
                    language,
                    dark_mode,
                    notifications,
                    onboarding_seen,
                },
            ),
            SettingsAction::Reset => commands::settings::reset(&mut ctx),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
