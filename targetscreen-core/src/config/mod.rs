//! Configuration types for targetscreen

use crate::ScreenerError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub screening: ScreeningConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Bounds of the sliding window, `[min_length, max_length)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Windows containing any of these motifs are never scored
    #[serde(default = "default_exclude_motifs")]
    pub exclude_motifs: Vec<String>,
}

/// Substitution scores and gap penalties.
///
/// Penalties are positive numbers subtracted from the alignment score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    #[serde(default = "default_match_score")]
    pub match_score: f64,
    #[serde(default = "default_mismatch_score")]
    pub mismatch_score: f64,
    #[serde(default = "default_gap_open")]
    pub gap_open: f64,
    #[serde(default = "default_gap_extend")]
    pub gap_extend: f64,
    #[serde(default)]
    pub left_gap_open: f64,
    #[serde(default)]
    pub left_gap_extend: f64,
    #[serde(default)]
    pub right_gap_open: f64,
    #[serde(default)]
    pub right_gap_extend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningConfig {
    /// Minimum matched fraction of a candidate for it to be retained
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceConfig {
    #[serde(default)]
    pub parallel_candidates: bool,
    /// Worker threads (0 = all available cores)
    #[serde(default)]
    pub threads: usize,
}

// Default value functions
fn default_min_length() -> usize { 18 }
fn default_max_length() -> usize { 36 }
fn default_exclude_motifs() -> Vec<String> { vec![crate::DEFAULT_EXCLUDED_MOTIF.to_string()] }
fn default_match_score() -> f64 { 2.0 }
fn default_mismatch_score() -> f64 { -3.0 }
fn default_gap_open() -> f64 { 10.0 }
fn default_gap_extend() -> f64 { 1.0 }
fn default_threshold() -> f64 { 0.8 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
            exclude_motifs: default_exclude_motifs(),
        }
    }
}

impl WindowConfig {
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
            ..Self::default()
        }
    }

    pub fn with_exclude_motifs(mut self, motifs: Vec<String>) -> Self {
        self.exclude_motifs = motifs;
        self
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch_score: default_mismatch_score(),
            gap_open: default_gap_open(),
            gap_extend: default_gap_extend(),
            left_gap_open: 0.0,
            left_gap_extend: 0.0,
            right_gap_open: 0.0,
            right_gap_extend: 0.0,
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_candidates: false,
            threads: 0,
        }
    }
}

impl Config {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ScreenerError> {
        if self.window.min_length == 0 {
            return Err(ScreenerError::Configuration(
                "window.min_length must be at least 1".to_string(),
            ));
        }
        if self.window.exclude_motifs.iter().any(|m| m.is_empty()) {
            return Err(ScreenerError::Configuration(
                "window.exclude_motifs must not contain empty motifs".to_string(),
            ));
        }

        let threshold = self.screening.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ScreenerError::Configuration(format!(
                "screening.threshold must lie in [0, 1], got {}",
                threshold
            )));
        }

        let scoring = &self.scoring;
        let scores = [
            ("match_score", scoring.match_score),
            ("mismatch_score", scoring.mismatch_score),
        ];
        for (name, value) in scores {
            if !value.is_finite() {
                return Err(ScreenerError::Configuration(format!(
                    "scoring.{} must be finite",
                    name
                )));
            }
        }
        if scoring.match_score <= 0.0 {
            return Err(ScreenerError::Configuration(
                "scoring.match_score must be positive".to_string(),
            ));
        }

        let penalties = [
            ("gap_open", scoring.gap_open),
            ("gap_extend", scoring.gap_extend),
            ("left_gap_open", scoring.left_gap_open),
            ("left_gap_extend", scoring.left_gap_extend),
            ("right_gap_open", scoring.right_gap_open),
            ("right_gap_extend", scoring.right_gap_extend),
        ];
        for (name, value) in penalties {
            if !value.is_finite() || value < 0.0 {
                return Err(ScreenerError::Configuration(format!(
                    "scoring.{} must be a non-negative penalty, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ScreenerError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| ScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), ScreenerError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| ScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.window.min_length, 18);
        assert_eq!(config.window.max_length, 36);
        assert_eq!(config.window.exclude_motifs, vec!["CTGCTGCTG".to_string()]);

        assert_eq!(config.scoring.match_score, 2.0);
        assert_eq!(config.scoring.mismatch_score, -3.0);
        assert_eq!(config.scoring.gap_open, 10.0);
        assert_eq!(config.scoring.gap_extend, 1.0);
        assert_eq!(config.scoring.left_gap_open, 0.0);
        assert_eq!(config.scoring.right_gap_extend, 0.0);

        assert_eq!(config.screening.threshold, 0.8);
        assert!(!config.performance.parallel_candidates);
        assert_eq!(config.performance.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_function() {
        assert_eq!(Config::default(), default_config());
    }

    #[test]
    fn test_load_valid_config() {
        let toml_content = r#"
[window]
min_length = 20
max_length = 26
exclude_motifs = ["CTGCTGCTG", "AAAAAAAA"]

[scoring]
match_score = 1.0
mismatch_score = -2.0
gap_open = 5.0
gap_extend = 2.0
left_gap_open = 1.5

[screening]
threshold = 0.9

[performance]
parallel_candidates = true
threads = 4
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.window.min_length, 20);
        assert_eq!(config.window.max_length, 26);
        assert_eq!(config.window.exclude_motifs.len(), 2);
        assert_eq!(config.scoring.match_score, 1.0);
        assert_eq!(config.scoring.mismatch_score, -2.0);
        assert_eq!(config.scoring.gap_open, 5.0);
        assert_eq!(config.scoring.gap_extend, 2.0);
        assert_eq!(config.scoring.left_gap_open, 1.5);
        assert_eq!(config.scoring.left_gap_extend, 0.0);
        assert_eq!(config.screening.threshold, 0.9);
        assert!(config.performance.parallel_candidates);
        assert_eq!(config.performance.threads, 4);
    }

    #[test]
    fn test_load_partial_config() {
        let toml_content = r#"
[screening]
threshold = 0.75
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.screening.threshold, 0.75);
        assert_eq!(config.window.min_length, 18);
        assert_eq!(config.scoring.gap_open, 10.0);
    }

    #[test]
    fn test_load_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "this is not valid TOML {{").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            ScreenerError::Configuration(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_out_of_range_threshold() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[screening]\nthreshold = 1.5\n").unwrap();

        match load_config(temp_file.path()).unwrap_err() {
            ScreenerError::Configuration(msg) => assert!(msg.contains("threshold")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        match load_config("/nonexistent/path/to/config.toml").unwrap_err() {
            ScreenerError::Io(_) => {}
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_min_length() {
        let mut config = Config::default();
        config.window.min_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ScreenerError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_penalty() {
        let mut config = Config::default();
        config.scoring.right_gap_open = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("right_gap_open"));
    }

    #[test]
    fn test_validate_rejects_empty_motif() {
        let mut config = Config::default();
        config.window.exclude_motifs.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_threshold_bounds() {
        let mut config = Config::default();
        config.screening.threshold = 0.0;
        assert!(config.validate().is_ok());
        config.screening.threshold = 1.0;
        assert!(config.validate().is_ok());
        config.screening.threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.window.max_length = 30;
        config.scoring.right_gap_extend = 0.5;
        config.performance.parallel_candidates = true;

        let temp_file = NamedTempFile::new().unwrap();
        save_config(temp_file.path(), &config).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(config, loaded);
    }
}
