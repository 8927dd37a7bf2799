use std::path::Path;

use tarot_core::ShareLink;

pub fn run(data_dir: Option<&Path>, link: &str, link_base: &str, json: bool) -> Result<(), String> {
    let request = ShareLink::parse(link)
        .map_err(|e| e.to_string())?
        .to_request();
    log::info!("replaying seed {} on spread '{}'", request.seed, request.spread);
    super::draw::record(data_dir, &request, link_base, json)
}
