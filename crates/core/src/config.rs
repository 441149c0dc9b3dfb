//! Suggestion settings for unit setters.
//!
//! This module holds the knobs that control how "did you mean" suggestions
//! are produced when a token does not name a known value.

/// Default number of suggestions offered for an unrecognised value
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;
/// Default n-gram length used by the similarity measure
pub const DEFAULT_NGRAM_LEN: usize = 2;
/// Names scoring below this similarity are never suggested
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.5;

/// Controls the similarity search used to build suggestion clauses.
///
/// # Examples
///
/// ```
/// use unit_setters_core::config::SuggestionConfig;
///
/// let config = SuggestionConfig::default().with_max_suggestions(5);
/// assert_eq!(config.max_suggestions, 5);
/// assert!(config.case_blind);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    /// Maximum number of names offered. Zero turns suggestions off.
    pub max_suggestions: usize,
    /// Length of the character n-grams compared.
    pub ngram_len: usize,
    /// Minimum cosine similarity (0.0 to 1.0) for a name to be offered.
    pub min_similarity: f64,
    /// Whether case is ignored when comparing.
    pub case_blind: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            ngram_len: DEFAULT_NGRAM_LEN,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            case_blind: true,
        }
    }
}

impl SuggestionConfig {
    #[must_use]
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    #[must_use]
    pub fn with_ngram_len(mut self, ngram_len: usize) -> Self {
        self.ngram_len = ngram_len;
        self
    }

    #[must_use]
    pub fn case_sensitive(mut self) -> Self {
        self.case_blind = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SuggestionConfig::default();
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.ngram_len, 2);
        assert!((config.min_similarity - 0.5).abs() < f64::EPSILON);
        assert!(config.case_blind);
    }

    #[test]
    fn test_builder_methods() {
        let config = SuggestionConfig::default()
            .with_max_suggestions(1)
            .with_min_similarity(0.9)
            .with_ngram_len(3)
            .case_sensitive();

        assert_eq!(config.max_suggestions, 1);
        assert_eq!(config.ngram_len, 3);
        assert!((config.min_similarity - 0.9).abs() < f64::EPSILON);
        assert!(!config.case_blind);
    }
}
