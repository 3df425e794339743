/// Repeat-motif exclusion for candidate windows
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use targetscreen_core::{ScreenerError, ScreenerResult, DEFAULT_EXCLUDED_MOTIF};

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(DEFAULT_EXCLUDED_MOTIF)))
        .expect("default exclusion motif is a literal pattern")
});

/// Rejects windows that contain any of a set of literal motifs (case-insensitive)
#[derive(Debug, Clone)]
pub struct MotifFilter {
    motifs: Vec<String>,
    pattern: Option<Regex>,
}

impl MotifFilter {
    pub fn new<I, S>(motifs: I) -> ScreenerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let motifs: Vec<String> = motifs
            .into_iter()
            .map(|m| m.as_ref().trim().to_ascii_uppercase())
            .collect();

        if motifs.iter().any(|m| m.is_empty()) {
            return Err(ScreenerError::InvalidInput(
                "exclusion motifs must not be empty".to_string(),
            ));
        }
        if motifs.is_empty() {
            return Ok(Self::none());
        }

        let alternation = motifs
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("(?i)(?:{})", alternation))
            .map_err(|e| ScreenerError::Configuration(format!("Invalid exclusion motif: {}", e)))?;

        Ok(Self {
            motifs,
            pattern: Some(pattern),
        })
    }

    /// A filter that accepts every window
    pub fn none() -> Self {
        Self {
            motifs: Vec::new(),
            pattern: None,
        }
    }

    pub fn motifs(&self) -> &[String] {
        &self.motifs
    }

    pub fn is_excluded(&self, window: &[u8]) -> bool {
        self.pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(window))
    }
}

impl Default for MotifFilter {
    fn default() -> Self {
        Self {
            motifs: vec![DEFAULT_EXCLUDED_MOTIF.to_string()],
            pattern: Some(DEFAULT_PATTERN.clone()),
        }
    }
}
