use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err};
use serde::Deserialize;
use std::fs;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Delimiters the dialect sniffer knows how to choose between
pub const SUPPORTED_DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Settings for reading sprint exports
///
/// Every field has its default in `default_config.toml`. A configuration file only
/// needs the keys it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether to sniff the delimiter instead of assuming commas
    pub detect_delimiter: bool,

    /// Delimiters the sniffer may pick from, in order of preference
    pub delimiter_candidates: Vec<char>,

    /// Accepted names for the story points column, in order of preference
    pub points_columns: Vec<String>,

    /// Name of the status column
    pub status_column: String,
}

impl Config {
    /// Load configuration from a file, or use the defaults when no file is given
    ///
    /// Keys present in the file replace the defaults; the rest keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or holds invalid values
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let Some(path) = config_path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).into_app_err_with(|| format!("reading sprint-report configuration file '{path}'"))?;
        let overrides: toml::Table = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{path}'"))?;

        let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG_TOML).into_app_err("parsing the default configuration")?;
        merged.extend(overrides);

        let config: Self = toml::Value::Table(merged)
            .try_into()
            .into_app_err_with(|| format!("invalid settings in configuration file '{path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// The delimiter candidates as bytes, ready for the CSV reader
    #[must_use]
    pub fn delimiter_bytes(&self) -> Vec<u8> {
        self.delimiter_candidates.iter().filter_map(|&c| u8::try_from(c).ok()).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.points_columns.is_empty() {
            return Err(app_err!("points_columns must name at least one column"));
        }

        if self.points_columns.iter().any(String::is_empty) {
            return Err(app_err!("points_columns must not contain empty column names"));
        }

        if self.status_column.is_empty() {
            return Err(app_err!("status_column must not be empty"));
        }

        if self.detect_delimiter && self.delimiter_candidates.is_empty() {
            return Err(app_err!("delimiter_candidates must not be empty when detect_delimiter is enabled"));
        }

        if let Some(c) = self.delimiter_candidates.iter().find(|&&c| !SUPPORTED_DELIMITERS.contains(&c)) {
            return Err(app_err!(
                "unsupported delimiter candidate {c:?}, expected one of comma, semicolon or tab"
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("sprint-report.toml")).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert!(config.detect_delimiter);
        assert_eq!(config.delimiter_candidates, vec![',', '\t', ';']);
        assert_eq!(config.points_columns, vec!["Story Points".to_string(), "Custom field (Story Points)".to_string()]);
        assert_eq!(config.status_column, "Status");
    }

    #[test]
    fn test_delimiter_bytes() {
        let config = Config::default();
        assert_eq!(config.delimiter_bytes(), b",\t;".to_vec());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.points_columns, Config::default().points_columns);
    }

    #[test]
    fn test_validate_rejects_empty_points_columns() {
        let config = Config { points_columns: Vec::new(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_points_column_name() {
        let config = Config { points_columns: vec![String::new()], ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_status_column() {
        let config = Config { status_column: String::new(), ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unsupported_delimiter() {
        let config = Config { delimiter_candidates: vec![',', '|'], ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_allows_no_candidates_without_detection() {
        let config = Config { detect_delimiter: false, delimiter_candidates: Vec::new(), ..Config::default() };
        config.validate().unwrap();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "points_columns = [\"Custom field (Story Points)\"]\n");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.points_columns, vec!["Custom field (Story Points)".to_string()]);
        assert_eq!(config.status_column, "Status");
        assert!(config.detect_delimiter);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_replaces_whole_lists() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "delimiter_candidates = [\";\"]\n");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.delimiter_bytes(), b";".to_vec());
        assert_eq!(config.points_columns, Config::default().points_columns);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_wrong_types() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&write_config(&tmp, "detect_delimiter = \"yes\"\n"))).is_err());
        assert!(Config::load(Some(&write_config(&tmp, "delimiter_candidates = [\", \"]\n"))).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_unknown_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "output_format = \"json\"\n");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_rejects_invalid_values() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_config(&tmp, "status_column = \"\"\n");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_missing_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("missing.toml")).unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
