pub mod play;
pub mod rules;
pub mod table;

use std::path::Path;

use gd_core::DifficultyTable;

/// Load a custom table, or fall back to the built-in one.
fn load_table(path: Option<&Path>) -> Result<DifficultyTable, String> {
    match path {
        Some(path) => DifficultyTable::from_path(path).map_err(|e| e.to_string()),
        None => Ok(DifficultyTable::default()),
    }
}
