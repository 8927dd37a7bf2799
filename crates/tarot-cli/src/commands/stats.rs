use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(data_dir: Option<&Path>, json: bool) -> Result<(), String> {
    let session = super::open_session(data_dir);
    let stats = session.statistics();

    if json {
        let out = serde_json::json!({
            "summary": &stats,
            "uprightPercent": stats.upright_percent(),
            "reversedPercent": stats.reversed_percent(),
            "averageCards": stats.average_cards(),
        });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    println!("  {}", "Reading statistics".bold());
    println!();
    println!("  readings:      {}", stats.reading_count);
    println!("  cards drawn:   {}", stats.total_cards);
    println!("  favorites:     {}", stats.favorite_count);
    println!("  avg per read:  {:.1}", stats.average_cards());
    println!(
        "  upright:       {} ({:.1}%)",
        stats.upright,
        stats.upright_percent()
    );
    println!(
        "  reversed:      {} ({:.1}%)",
        stats.reversed,
        stats.reversed_percent()
    );

    if stats.reading_count == 0 {
        return Ok(());
    }

    println!();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Top cards", "Count"]);
    for (name, count) in stats.top_cards() {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Top spreads", "Count"]);
    for (name, count) in stats.top_spreads() {
        table.add_row(vec![name.to_string(), count.to_string()]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Suit", "Count"]);
    for (suit, count) in stats.suits.iter() {
        table.add_row(vec![suit.to_string(), count.to_string()]);
    }
    println!("{table}");

    Ok(())
}
