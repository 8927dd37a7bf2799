use comfy_table::{ContentArrangement, Table};
use tarot_core::deck::search_cards;
use tarot_core::spread::SPREADS;

pub fn run(query: Option<&str>, deck: Option<&str>) -> Result<(), String> {
    let deck = deck.map(super::parse_deck).transpose()?;
    let results: Vec<_> = search_cards(query.unwrap_or(""))
        .into_iter()
        .filter(|c| deck.is_none_or(|d| d.contains(c)))
        .collect();

    if results.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "English", "Suit", "Rank", "Key"]);
    for card in &results {
        table.add_row(vec![
            card.name.as_str(),
            card.english_name.as_str(),
            card.suit.label(),
            card.rank.as_str(),
            card.key.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", results.len());
    Ok(())
}

pub fn spreads() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Name", "Cards", "Positions"]);
    for spread in SPREADS {
        table.add_row(vec![
            spread.key.to_string(),
            spread.name.to_string(),
            spread.len().to_string(),
            spread.positions.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}
