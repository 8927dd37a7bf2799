use std::path::Path;

use tarot_core::{DrawRequest, ShareLink, random_seed};

/// Draw options shared by `draw` and `link`.
pub struct DrawArgs<'a> {
    pub deck: &'a str,
    pub spread: &'a str,
    pub seed: Option<u64>,
    pub question: Option<&'a str>,
}

impl DrawArgs<'_> {
    fn request(&self) -> Result<DrawRequest, String> {
        let deck = super::parse_deck(self.deck)?;
        let spread = tarot_core::spread::get(self.spread).map_err(|e| e.to_string())?;
        let seed = self.seed.unwrap_or_else(random_seed);
        let request = DrawRequest::new(seed, deck, spread.key);
        Ok(match self.question {
            Some(q) => request.with_question(q),
            None => request,
        })
    }
}

pub fn run(data_dir: Option<&Path>, args: &DrawArgs, link_base: &str, json: bool) -> Result<(), String> {
    let request = args.request()?;
    record(data_dir, &request, link_base, json)
}

/// Perform `request`, store it, and print the result.
pub(super) fn record(
    data_dir: Option<&Path>,
    request: &DrawRequest,
    link_base: &str,
    json: bool,
) -> Result<(), String> {
    let mut session = super::open_session(data_dir);
    let style = session.prefs().visual_style;
    let reading = session
        .perform_reading(request)
        .map_err(|e| e.to_string())?;
    let link = super::share_url(reading, link_base)?;

    if json {
        let out = serde_json::json!({ "reading": reading, "link": link });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
    } else {
        super::print_reading(reading, style, Some(&link));
    }
    Ok(())
}

pub fn link(args: &DrawArgs, link_base: &str) -> Result<(), String> {
    let request = args.request()?;
    let url = ShareLink::from_request(&request)
        .to_url(link_base)
        .map_err(|e| e.to_string())?;
    println!("{url}");
    Ok(())
}
