//! CLI frontend for reproducible tarot readings.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Base URL that share links are built on when none is given.
const DEFAULT_LINK_BASE: &str = "https://tarot.local/";

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Tarot readings you can replay from a seed, with a local journal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding reading history and preferences
    #[arg(long, global = true, env = "TAROT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle, draw a spread and record the reading
    Draw {
        /// Deck: full, major, minor, court, numbered
        #[arg(short, long, default_value = "full")]
        deck: String,

        /// Spread key (see `tarot spreads`)
        #[arg(short, long, default_value = "single")]
        spread: String,

        /// Seed for a reproducible draw (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// The question being asked
        #[arg(short, long)]
        question: Option<String>,

        /// Base URL for the share link
        #[arg(long, env = "TAROT_LINK_BASE", default_value = DEFAULT_LINK_BASE)]
        link_base: String,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw again from a share link and record the reading
    Replay {
        /// Share link or bare query string (`seed=..&deck=..&spread=..`)
        link: String,

        /// Base URL for the share link
        #[arg(long, env = "TAROT_LINK_BASE", default_value = DEFAULT_LINK_BASE)]
        link_base: String,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recorded readings, newest first
    History {
        /// Only readings of this spread (name or key)
        #[arg(short, long)]
        spread: Option<String>,

        /// Only readings with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only favorites
        #[arg(short, long)]
        favorites: bool,

        /// Show at most this many readings
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print the readings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one recorded reading in full
    Show {
        /// Reading id
        id: String,

        /// Base URL for the share link
        #[arg(long, env = "TAROT_LINK_BASE", default_value = DEFAULT_LINK_BASE)]
        link_base: String,

        /// Print the copy-and-paste transcript instead of a table
        #[arg(long)]
        plain: bool,
    },

    /// Toggle the favorite mark on a reading
    Favorite {
        /// Reading id
        id: String,
    },

    /// Add, remove or toggle a tag on a reading
    Tag {
        /// Reading id
        id: String,

        /// What to do with the tag
        #[arg(value_enum)]
        action: TagAction,

        /// The tag
        tag: String,
    },

    /// List tags in use and the suggested tags
    Tags,

    /// Set the note on a reading (empty text clears it)
    Note {
        /// Reading id
        id: String,

        /// Note text
        text: String,
    },

    /// Delete one reading
    Remove {
        /// Reading id
        id: String,
    },

    /// Delete every reading
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Statistics over the whole history
    Stats {
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export history as a backup archive or a markdown journal
    Export {
        /// Output format: json, markdown
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace history with the contents of a backup archive
    Import {
        /// Archive file
        file: PathBuf,
    },

    /// Browse the card catalog
    Cards {
        /// Search by localized or English name
        query: Option<String>,

        /// Only cards of this deck
        #[arg(short, long)]
        deck: Option<String>,
    },

    /// List the available spreads
    Spreads,

    /// Show or change preferences
    Prefs {
        /// Visual style: text, css, emoji, api
        #[arg(long)]
        style: Option<String>,

        /// Theme: light, dark, system
        #[arg(long)]
        theme: Option<String>,

        /// Show keyboard shortcut hints
        #[arg(long)]
        shortcuts: Option<bool>,
    },

    /// Build a share link without drawing
    Link {
        /// Deck: full, major, minor, court, numbered
        #[arg(short, long, default_value = "full")]
        deck: String,

        /// Spread key
        #[arg(short, long, default_value = "single")]
        spread: String,

        /// Seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// The question being asked
        #[arg(short, long)]
        question: Option<String>,

        /// Base URL for the share link
        #[arg(long, env = "TAROT_LINK_BASE", default_value = DEFAULT_LINK_BASE)]
        link_base: String,
    },
}

/// What `tarot tag` does with its tag.
#[derive(Clone, Copy, ValueEnum)]
enum TagAction {
    Add,
    Remove,
    Toggle,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG overrides the flag.
    builder.parse_default_env();
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = cli.data_dir.as_deref();
    let result = match cli.command {
        Commands::Draw {
            deck,
            spread,
            seed,
            question,
            link_base,
            json,
        } => commands::draw::run(
            data_dir,
            &commands::draw::DrawArgs {
                deck: &deck,
                spread: &spread,
                seed,
                question: question.as_deref(),
            },
            &link_base,
            json,
        ),
        Commands::Replay {
            link,
            link_base,
            json,
        } => commands::replay::run(data_dir, &link, &link_base, json),
        Commands::History {
            spread,
            tag,
            favorites,
            limit,
            json,
        } => commands::history::run(
            data_dir,
            spread.as_deref(),
            tag.as_deref(),
            favorites,
            limit,
            json,
        ),
        Commands::Show {
            id,
            link_base,
            plain,
        } => commands::show::run(data_dir, &id, &link_base, plain),
        Commands::Favorite { id } => commands::annotate::favorite(data_dir, &id),
        Commands::Tag { id, action, tag } => {
            commands::annotate::tag(data_dir, &id, action, &tag)
        }
        Commands::Tags => commands::annotate::list_tags(data_dir),
        Commands::Note { id, text } => commands::annotate::note(data_dir, &id, &text),
        Commands::Remove { id } => commands::remove::run(data_dir, &id),
        Commands::Clear { yes } => commands::remove::clear(data_dir, yes),
        Commands::Stats { json } => commands::stats::run(data_dir, json),
        Commands::Export { format, output } => {
            commands::export::run(data_dir, &format, output.as_deref())
        }
        Commands::Import { file } => commands::import::run(data_dir, &file),
        Commands::Cards { query, deck } => {
            commands::cards::run(query.as_deref(), deck.as_deref())
        }
        Commands::Spreads => commands::cards::spreads(),
        Commands::Prefs {
            style,
            theme,
            shortcuts,
        } => commands::prefs::run(data_dir, style.as_deref(), theme.as_deref(), shortcuts),
        Commands::Link {
            deck,
            spread,
            seed,
            question,
            link_base,
        } => commands::draw::link(
            &commands::draw::DrawArgs {
                deck: &deck,
                spread: &spread,
                seed,
                question: question.as_deref(),
            },
            &link_base,
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
