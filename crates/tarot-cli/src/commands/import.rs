use std::path::Path;

pub fn run(data_dir: Option<&Path>, file: &Path) -> Result<(), String> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let mut session = super::open_session(data_dir);
    let count = session.import(&text).map_err(|e| e.to_string())?;
    println!("  Imported {count} readings from {}", file.display());
    Ok(())
}
