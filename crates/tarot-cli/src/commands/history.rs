use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use tarot_journal::HistoryFilter;

pub fn run(
    data_dir: Option<&Path>,
    spread: Option<&str>,
    tag: Option<&str>,
    favorites: bool,
    limit: Option<usize>,
    json: bool,
) -> Result<(), String> {
    let session = super::open_session(data_dir);

    let mut filter = HistoryFilter::new().favorites_only(favorites);
    if let Some(spread) = spread {
        filter = filter.spread(spread);
    }
    if let Some(tag) = tag {
        filter = filter.tag(tag);
    }
    if let Some(n) = limit {
        filter = filter.limit(n);
    }

    let results = session.filter(&filter);

    if json {
        let text = serde_json::to_string_pretty(&results)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    if results.is_empty() {
        println!("  No readings found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Date", "Spread", "Question", "Cards", "★", "Tags"]);

    for reading in &results {
        let question = if reading.question.chars().count() > 30 {
            let short: String = reading.question.chars().take(27).collect();
            format!("{short}...")
        } else if reading.question.is_empty() {
            "—".to_string()
        } else {
            reading.question.clone()
        };
        let cards: Vec<&str> = reading
            .drawn_cards
            .iter()
            .take(3)
            .map(|d| d.card.name.as_str())
            .collect();
        let mut cards = cards.join(", ");
        if reading.drawn_cards.len() > 3 {
            cards.push_str(", ...");
        }

        table.add_row(vec![
            reading.id.to_string(),
            super::format_time(reading.timestamp),
            reading.spread_name.clone(),
            question,
            cards,
            if reading.favorite { "★" } else { "" }.to_string(),
            reading.tags.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} of {} readings",
        results.len(),
        session.store().len()
    );

    Ok(())
}
