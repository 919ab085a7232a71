use crate::prelude::{println, *};
use galaxystore::models::MinimalJson;

/// Minimal JSON of a model as a single line.
pub fn json_line(model: &impl MinimalJson) -> Result<String> {
    let map = model.to_minimal_json().map_err(Error::from)?;
    serde_json::to_string(&map).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

pub fn print_json_line(model: &impl MinimalJson) -> Result<()> {
    println!("{}", json_line(model)?);
    Ok(())
}

/// Formats an optional value for a table cell.
pub fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
