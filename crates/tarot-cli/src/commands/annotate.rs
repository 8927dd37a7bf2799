use std::path::Path;

use colored::Colorize;
use tarot_journal::{COMMON_TAGS, all_tags};

use crate::TagAction;

pub fn favorite(data_dir: Option<&Path>, id: &str) -> Result<(), String> {
    let id = super::parse_id(id)?;
    let mut session = super::open_session(data_dir);
    let now = session
        .toggle_favorite(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| super::not_found(id))?;
    if now {
        println!("  {} {id} marked as favorite", "★".yellow());
    } else {
        println!("  {id} is no longer a favorite");
    }
    Ok(())
}

pub fn tag(data_dir: Option<&Path>, id: &str, action: TagAction, tag: &str) -> Result<(), String> {
    let id = super::parse_id(id)?;
    if tag.trim().is_empty() {
        return Err("tag must not be empty".into());
    }
    let mut session = super::open_session(data_dir);
    if session.get(id).is_none() {
        return Err(super::not_found(id));
    }
    let tag = tag.trim();

    let message = match action {
        TagAction::Add => {
            let added = session.add_tag(id, tag).map_err(|e| e.to_string())?;
            if added {
                format!("added tag \"{tag}\"")
            } else {
                format!("already tagged \"{tag}\"")
            }
        }
        TagAction::Remove => {
            let removed = session.remove_tag(id, tag).map_err(|e| e.to_string())?;
            if removed {
                format!("removed tag \"{tag}\"")
            } else {
                format!("no tag \"{tag}\"")
            }
        }
        TagAction::Toggle => {
            let set = session.toggle_tag(id, tag).map_err(|e| e.to_string())?;
            if set == Some(true) {
                format!("added tag \"{tag}\"")
            } else {
                format!("removed tag \"{tag}\"")
            }
        }
    };
    println!("  {id}: {message}");
    Ok(())
}

pub fn list_tags(data_dir: Option<&Path>) -> Result<(), String> {
    let session = super::open_session(data_dir);
    let used = all_tags(session.store().readings());
    if used.is_empty() {
        println!("  No tags in use.");
    } else {
        println!("  {} {}", "In use:".bold(), used.join(", "));
    }
    println!("  {} {}", "Suggested:".bold(), COMMON_TAGS.join(", "));
    Ok(())
}

pub fn note(data_dir: Option<&Path>, id: &str, text: &str) -> Result<(), String> {
    let id = super::parse_id(id)?;
    let mut session = super::open_session(data_dir);
    if !session.set_note(id, text).map_err(|e| e.to_string())? {
        return Err(super::not_found(id));
    }
    if text.trim().is_empty() {
        println!("  {id}: note cleared");
    } else {
        println!("  {id}: note saved");
    }
    Ok(())
}
