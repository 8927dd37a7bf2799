use std::path::Path;

use colored::Colorize;
use tarot_journal::{Theme, VisualStyle};

pub fn run(
    data_dir: Option<&Path>,
    style: Option<&str>,
    theme: Option<&str>,
    shortcuts: Option<bool>,
) -> Result<(), String> {
    let mut session = super::open_session(data_dir);

    if let Some(s) = style {
        let style = VisualStyle::parse(s)
            .ok_or_else(|| format!("unknown style: \"{s}\". Use: text, css, emoji, api"))?;
        session.set_visual_style(style).map_err(|e| e.to_string())?;
    }
    if let Some(t) = theme {
        let theme = match t.trim().to_lowercase().as_str() {
            "system" | "auto" => None,
            other => Some(
                Theme::parse(other)
                    .ok_or_else(|| format!("unknown theme: \"{t}\". Use: light, dark, system"))?,
            ),
        };
        session.set_theme(theme).map_err(|e| e.to_string())?;
    }
    if let Some(enabled) = shortcuts {
        session.set_shortcuts(enabled).map_err(|e| e.to_string())?;
    }

    let prefs = session.prefs();
    println!("  {}", "Preferences".bold());
    println!("  style:      {}", prefs.visual_style);
    println!(
        "  theme:      {}",
        prefs.theme.map_or("system".to_string(), |t| t.to_string())
    );
    println!("  shortcuts:  {}", if prefs.shortcuts_enabled { "on" } else { "off" });
    Ok(())
}
