use std::path::Path;

use chrono::Utc;
use tarot_journal::history_markdown;

pub fn run(data_dir: Option<&Path>, format: &str, output: Option<&Path>) -> Result<(), String> {
    let session = super::open_session(data_dir);

    let content = match format {
        "json" => session
            .export(Utc::now())
            .to_json()
            .map_err(|e| e.to_string())?,
        "markdown" | "md" => history_markdown(session.store().readings()),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!(
            "  Exported {} readings to {}",
            session.store().len(),
            path.display()
        );
    } else {
        println!("{content}");
    }

    Ok(())
}
