pub mod annotate;
pub mod cards;
pub mod draw;
pub mod export;
pub mod history;
pub mod import;
pub mod prefs;
pub mod remove;
pub mod replay;
pub mod show;
pub mod stats;

use std::path::Path;

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tarot_core::{DeckKind, DrawnCard, Orientation, Reading, ReadingId, ShareLink, Suit};
use tarot_journal::{FsBackend, JournalConfig, ReadingSession, VisualStyle};

/// Open the journal in `data_dir`, or the platform default.
fn open_session(data_dir: Option<&Path>) -> ReadingSession<FsBackend> {
    let mut config = JournalConfig::default();
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }
    log::debug!("journal directory: {}", config.data_dir.display());
    ReadingSession::from_config(&config)
}

fn parse_id(s: &str) -> Result<ReadingId, String> {
    s.parse()
        .map_err(|_| format!("invalid reading id: \"{s}\""))
}

fn parse_deck(s: &str) -> Result<DeckKind, String> {
    DeckKind::parse(s).ok_or_else(|| tarot_core::CoreError::UnknownDeck(s.to_string()).to_string())
}

fn not_found(id: ReadingId) -> String {
    format!("reading not found: {id}")
}

/// The share link that replays `reading`.
fn share_url(reading: &Reading, base: &str) -> Result<String, String> {
    ShareLink::from_request(&reading.request())
        .to_url(base)
        .map(|u| u.to_string())
        .map_err(|e| e.to_string())
}

fn format_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y/%m/%d %H:%M").to_string()
}

fn suit_glyph(suit: Suit) -> &'static str {
    match suit {
        Suit::MajorArcana => "✨",
        Suit::Wands => "🔥",
        Suit::Cups => "💧",
        Suit::Swords => "⚔️",
        Suit::Pentacles => "🪙",
    }
}

fn card_label(drawn: &DrawnCard, style: VisualStyle) -> String {
    match style {
        VisualStyle::Emoji => format!("{} {}", suit_glyph(drawn.card.suit), drawn.card.name),
        _ => drawn.card.name.clone(),
    }
}

fn orientation_label(o: Orientation) -> String {
    match o {
        Orientation::Upright => o.to_string().green().to_string(),
        Orientation::Reversed => o.to_string().red().to_string(),
    }
}

/// Print a reading as a header plus a card table.
fn print_reading(reading: &Reading, style: VisualStyle, link: Option<&str>) {
    println!(
        "  {} [{}]",
        reading.spread_name.bold(),
        format_time(reading.timestamp).dimmed()
    );
    if !reading.question.is_empty() {
        println!("  {}", reading.question.italic());
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card", "English", "Orientation"]);
    for drawn in reading.all_cards() {
        table.add_row(vec![
            drawn.position.clone(),
            card_label(drawn, style),
            drawn.card.english_name.clone(),
            orientation_label(drawn.orientation),
        ]);
    }
    println!("{table}");
    println!();

    let mut marks = Vec::new();
    if reading.favorite {
        marks.push("★ favorite".yellow().to_string());
    }
    if !reading.tags.is_empty() {
        marks.push(format!("tags: {}", reading.tags.join(", ")));
    }
    if !marks.is_empty() {
        println!("  {}", marks.join("  "));
    }
    if !reading.note.is_empty() {
        println!("  note: {}", reading.note);
    }
    println!(
        "  id {}  seed {}  deck {}",
        reading.id, reading.seed, reading.deck
    );
    if let Some(link) = link {
        println!("  {}", link.dimmed());
    }
}
