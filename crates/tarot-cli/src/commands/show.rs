use std::path::Path;

use tarot_journal::reading_text;

pub fn run(data_dir: Option<&Path>, id: &str, link_base: &str, plain: bool) -> Result<(), String> {
    let id = super::parse_id(id)?;
    let session = super::open_session(data_dir);
    let reading = session.get(id).ok_or_else(|| super::not_found(id))?;
    let link = super::share_url(reading, link_base)?;

    if plain {
        println!("{}", reading_text(reading, Some(&link)));
    } else {
        super::print_reading(reading, session.prefs().visual_style, Some(&link));
    }
    Ok(())
}
