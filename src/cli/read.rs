use std::{error::Error, path::Path};

pub(super) fn load_json_file(path: &Path) -> Result<serde_json::Value, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&data)
        .map_err(|e| format!("{} is not valid JSON: {e}", path.display()))?;
    Ok(json)
}
