// Default locations for glossary files and their logs

use std::path::{Path, PathBuf};

use crate::error::GlossaryError;

/// Directory under the platform data dir that holds the default glossary
pub const APP_DIR_NAME: &str = "glossary";

/// File name of the default glossary
pub const DEFAULT_FILE_NAME: &str = "glossary.json";

/// Environment variable that overrides the default glossary path
pub const FILE_ENV_VAR: &str = "GLOSSARY_FILE";

/// Get the directory where the default glossary lives
/// Returns {app_data_dir}/glossary/
pub fn get_data_dir() -> Result<PathBuf, GlossaryError> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        GlossaryError::PersistenceError("Could not determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Get the default glossary path
/// Returns {app_data_dir}/glossary/glossary.json
pub fn default_glossary_path() -> Result<PathBuf, GlossaryError> {
    Ok(get_data_dir()?.join(DEFAULT_FILE_NAME))
}

/// Log file kept next to a glossary: `<dir>/<stem>.log`
///
/// A glossary that is itself named `*.log` logs to `<dir>/<name>.log` so the
/// two never share a file.
pub fn log_path_for(glossary_path: &Path) -> PathBuf {
    let stem = if glossary_path.extension().is_some_and(|ext| ext == "log") {
        glossary_path.file_name()
    } else {
        glossary_path.file_stem()
    };
    let stem = stem
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| APP_DIR_NAME.to_string());
    glossary_path.with_file_name(format!("{}.log", stem))
}

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;
