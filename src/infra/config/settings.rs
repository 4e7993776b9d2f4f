use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

pub const DEFAULT_LATENCY_MS: u64 = 800;
pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Values read from `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub latency_ms: u64,
    pub page_size: usize,
    pub log_filter: String,
    pub data_dir: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            page_size: DEFAULT_PAGE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            data_dir: None,
            export_dir: None,
        }
    }
}

/// Command-line values that win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub latency_ms: Option<u64>,
    pub page_size: Option<usize>,
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings.normalized())
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }

    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(latency_ms) = overrides.latency_ms {
            self.latency_ms = latency_ms;
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if overrides.data_dir.is_some() {
            self.data_dir = overrides.data_dir;
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod from_toml {
        use super::*;

        #[test]
        fn empty_file_uses_defaults() {
            let settings = Settings::from_toml("").unwrap();

            assert_eq!(settings, Settings::default());
            assert_eq!(settings.latency_ms, 800);
            assert_eq!(settings.page_size, 100);
        }

        #[test]
        fn reads_all_keys() {
            let content = r#"
latency_ms = 50
page_size = 25
log_filter = "sqlpad=debug"
data_dir = "/tmp/sqlpad"
export_dir = "/tmp/exports"
"#;

            let settings = Settings::from_toml(content).unwrap();

            assert_eq!(settings.latency_ms, 50);
            assert_eq!(settings.page_size, 25);
            assert_eq!(settings.log_filter, "sqlpad=debug");
            assert_eq!(settings.data_dir, Some(PathBuf::from("/tmp/sqlpad")));
            assert_eq!(settings.export_dir, Some(PathBuf::from("/tmp/exports")));
        }

        #[test]
        fn unknown_key_is_rejected() {
            assert!(Settings::from_toml("latency = 5").is_err());
        }

        #[test]
        fn zero_page_size_becomes_one() {
            let settings = Settings::from_toml("page_size = 0").unwrap();

            assert_eq!(settings.page_size, 1);
        }
    }

    #[rstest]
    #[case(None, None, 800, 100)]
    #[case(Some(10), None, 10, 100)]
    #[case(None, Some(500), 800, 500)]
    fn overrides_win_over_file(
        #[case] latency_ms: Option<u64>,
        #[case] page_size: Option<usize>,
        #[case] expected_latency: u64,
        #[case] expected_page_size: usize,
    ) {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            latency_ms,
            page_size,
            data_dir: None,
        });

        assert_eq!(settings.latency_ms, expected_latency);
        assert_eq!(settings.page_size, expected_page_size);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();

        let settings = Settings::load(&temp_dir.path().join("config.toml")).unwrap();

        assert_eq!(settings, Settings::default());
    }
}
