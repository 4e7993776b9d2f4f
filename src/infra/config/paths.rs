use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};

const APP_DIR_NAME: &str = "sqlpad";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where history, saved queries and the log file live unless overridden.
pub fn default_data_dir() -> Result<PathBuf> {
    let data_base = dirs::data_dir().ok_or_else(|| eyre!("Could not find data directory"))?;
    Ok(data_base.join(APP_DIR_NAME))
}

pub fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// CSV exports go to the download directory when there is one.
pub fn default_export_dir(data_dir: &std::path::Path) -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| data_dir.join("exports"))
}
