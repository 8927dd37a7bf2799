use std::path::Path;

pub fn run(data_dir: Option<&Path>, id: &str) -> Result<(), String> {
    let id = super::parse_id(id)?;
    let mut session = super::open_session(data_dir);
    if !session.remove(id).map_err(|e| e.to_string())? {
        return Err(super::not_found(id));
    }
    println!("  Removed reading {id}");
    Ok(())
}

pub fn clear(data_dir: Option<&Path>, yes: bool) -> Result<(), String> {
    let mut session = super::open_session(data_dir);
    let count = session.store().len();
    if count > 0 && !yes {
        return Err(format!(
            "this deletes {count} readings; re-run with --yes to confirm"
        ));
    }
    let removed = session.clear().map_err(|e| e.to_string())?;
    println!("  Cleared {removed} readings");
    Ok(())
}
