//! Plain-text and markdown renderings of readings.

use tarot_core::{BOTTOM_POSITION, DrawnCard, Reading};

fn card_line(label: &str, drawn: &DrawnCard) -> String {
    format!("{label}: {} ({})", drawn.card.name, drawn.orientation)
}

/// The copy-and-paste form of a reading, with its share link when given.
pub fn reading_text(reading: &Reading, link: Option<&str>) -> String {
    let mut lines = Vec::with_capacity(reading.card_count() + 4);
    if reading.question.is_empty() {
        lines.push(reading.spread_name.clone());
    } else {
        lines.push(format!("{} - {}", reading.spread_name, reading.question));
    }
    lines.push("---".to_string());
    for drawn in &reading.drawn_cards {
        lines.push(card_line(&drawn.position, drawn));
    }
    lines.push(card_line(BOTTOM_POSITION, &reading.bottom_card));
    if let Some(link) = link {
        lines.push(String::new());
        lines.push(link.to_string());
    }
    lines.join("\n")
}

/// Export readings as a markdown journal.
pub fn history_markdown(readings: &[Reading]) -> String {
    let mut out = String::from("# Tarot Journal\n\n");
    for reading in readings {
        out.push_str(&format!(
            "## {} ({})\n\n",
            reading.spread_name,
            reading.timestamp.format("%Y-%m-%d %H:%M UTC")
        ));
        if !reading.question.is_empty() {
            out.push_str(&format!("**Question**: {}\n\n", reading.question));
        }
        for drawn in reading.all_cards() {
            out.push_str(&format!(
                "- **{}**: {} / {} ({})\n",
                drawn.position, drawn.card.name, drawn.card.english_name, drawn.orientation
            ));
        }
        out.push('\n');
        if reading.favorite {
            out.push_str("*Favorite*\n\n");
        }
        if !reading.tags.is_empty() {
            let tags: Vec<String> = reading.tags.iter().map(|t| format!("`{t}`")).collect();
            out.push_str(&format!("Tags: {}\n\n", tags.join(", ")));
        }
        if !reading.note.is_empty() {
            for line in reading.note.lines() {
                if line.is_empty() {
                    out.push_str(">\n");
                } else {
                    out.push_str(&format!("> {line}\n"));
                }
            }
            out.push('\n');
        }
        out.push_str(&format!("Seed: {} ({} deck)\n\n", reading.seed, reading.deck));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::reading;

    #[test]
    fn text_layout() {
        let mut r = reading(1, 42, "three");
        r.question = "Job?".into();
        let text = reading_text(&r, Some("https://tarot.example/?seed=42"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Past, Present, Future - Job?");
        assert_eq!(lines[1], "---");
        assert!(lines[2].starts_with("Past: "));
        assert!(lines[3].starts_with("Present: "));
        assert!(lines[4].starts_with("Future: "));
        assert!(lines[5].starts_with("Bottom: "));
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "https://tarot.example/?seed=42");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn text_without_question_or_link() {
        let r = reading(1, 42, "single");
        let text = reading_text(&r, None);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r.spread_name);
        assert_eq!(lines.len(), 4);
        assert!(text.contains(&format!(
            "({})",
            r.bottom_card.orientation
        )));
    }

    #[test]
    fn markdown_journal() {
        let mut r = reading(1_700_000_000_000, 7, "single");
        r.question = "Today?".into();
        r.add_tag("work");
        r.set_note("felt right");
        r.toggle_favorite();
        let md = history_markdown(&[r]);
        assert!(md.starts_with("# Tarot Journal\n\n"));
        assert!(md.contains("(2023-11-14 22:13 UTC)"));
        assert!(md.contains("**Question**: Today?"));
        assert!(md.contains("- **Bottom**: "));
        assert!(md.contains("Tags: `work`"));
        assert!(md.contains("> felt right"));
        assert!(md.contains("*Favorite*"));
        assert!(md.contains("Seed: 7 (full deck)"));
    }

    #[test]
    fn multi_line_note_stays_quoted() {
        let mut r = reading(1, 7, "single");
        r.set_note("first\n\nthird");
        let md = history_markdown(&[r]);
        assert!(md.contains("> first\n>\n> third\n\n"));
    }

    #[test]
    fn markdown_of_nothing() {
        insta::assert_snapshot!(history_markdown(&[]), @"# Tarot Journal");
    }
}
