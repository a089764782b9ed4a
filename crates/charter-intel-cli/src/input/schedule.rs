use charter_intel_core::charter::CharterSchedule;
use std::fs;
use std::path::Path;

/// Load a schedule override from JSON, or YAML when the extension says so.
pub fn load_schedule(path: &str) -> Result<CharterSchedule, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
    let is_yaml = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let schedule = if is_yaml {
        let raw: CharterSchedule =
            serde_yaml::from_str(&contents).map_err(|e| format!("Failed to parse '{}': {}", path, e))?;
        let schedule = raw.normalized();
        schedule.validate()?;
        schedule
    } else {
        CharterSchedule::from_json_str(&contents)?
    };
    tracing::info!(path, "using charter schedule override");
    Ok(schedule)
}
