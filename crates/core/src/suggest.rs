//! "Did you mean" suggestions for unrecognised values.
//!
//! Candidates are compared with the cosine similarity of their character
//! n-gram profiles. With the default settings this is a case-blind bigram
//! comparison, which scores near-miss typos highly and unrelated words low.

use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use log::trace;

use crate::config::SuggestionConfig;

/// Count of each n-gram in a string.
type Profile = HashMap<String, usize>;

fn profile(value: &str, config: &SuggestionConfig) -> Profile {
    let folded = if config.case_blind {
        value.to_lowercase()
    } else {
        value.to_string()
    };

    let chars: Vec<char> = folded.chars().collect();
    let ngram_len = config.ngram_len.max(1);
    let mut grams = Profile::new();

    if chars.is_empty() {
        return grams;
    }

    // Too short to window; the whole string is its only gram
    if chars.len() < ngram_len {
        grams.insert(folded, 1);
        return grams;
    }

    for window in chars.windows(ngram_len) {
        *grams.entry(window.iter().collect()).or_insert(0) += 1;
    }

    grams
}

/// The n-grams a name shares with the candidate, kept as exact counts so
/// that names with equal similarity compare equal.
#[derive(Debug, Clone, Copy)]
struct Overlap {
    dot: usize,
    norm_sq: usize,
}

fn norm_sq(profile: &Profile) -> usize {
    profile.values().map(|count| count * count).sum()
}

impl Overlap {
    fn measure(target: &Profile, other: &Profile) -> Self {
        let dot = target
            .iter()
            .filter_map(|(gram, count)| other.get(gram).map(|theirs| count * theirs))
            .sum();

        Self {
            dot,
            norm_sq: norm_sq(other),
        }
    }

    /// Cosine similarity, given the squared norm of the target profile.
    fn score(self, target_norm_sq: usize) -> f64 {
        if self.dot == 0 {
            return 0.0;
        }

        self.dot as f64 / ((target_norm_sq as f64).sqrt() * (self.norm_sq as f64).sqrt())
    }

    /// Orders the more similar overlap first.
    ///
    /// Both overlaps are against the same target, so comparing
    /// `dot / sqrt(norm_sq)` is enough, and squaring both sides keeps the
    /// comparison in integers.
    fn rank(self, other: Self) -> Ordering {
        let square = |value: usize| (value as u128) * (value as u128);
        let ours = square(self.dot) * other.norm_sq as u128;
        let theirs = square(other.dot) * self.norm_sq as u128;
        theirs.cmp(&ours)
    }
}

/// Returns the similarity of two strings, from 0.0 (nothing in common) to
/// 1.0 (identical n-gram profiles).
#[must_use]
pub fn similarity(left: &str, right: &str, config: &SuggestionConfig) -> f64 {
    let left = profile(left, config);
    Overlap::measure(&left, &profile(right, config)).score(norm_sq(&left))
}

/// Finds the names in `vocabulary` that are most like `candidate`.
///
/// At most `config.max_suggestions` names are returned, best first. Names
/// with equal scores are ordered alphabetically. Names scoring below
/// `config.min_similarity`, or sharing no n-gram at all with the candidate,
/// are never returned, so the result is empty when nothing is close.
///
/// # Examples
///
/// ```
/// use unit_setters_core::config::SuggestionConfig;
/// use unit_setters_core::suggest::suggest;
///
/// let names = ["distance", "time", "mass"];
/// let found = suggest("dostance", &names, &SuggestionConfig::default());
/// assert_eq!(found, vec!["distance"]);
/// ```
#[must_use]
pub fn suggest<'v>(
    candidate: &str,
    vocabulary: &[&'v str],
    config: &SuggestionConfig,
) -> Vec<&'v str> {
    if config.max_suggestions == 0 || vocabulary.is_empty() {
        return Vec::new();
    }

    let target = profile(candidate, config);
    let target_norm_sq = norm_sq(&target);

    vocabulary
        .iter()
        .copied()
        .unique()
        .map(|name| (name, Overlap::measure(&target, &profile(name, config))))
        .map(|(name, overlap)| (name, overlap, overlap.score(target_norm_sq)))
        .inspect(|(name, _, score)| trace!("Similarity of `{candidate}` to `{name}`: {score:.3}"))
        .filter(|(_, _, score)| *score > 0.0 && *score >= config.min_similarity)
        .sorted_by(|(left_name, left, _), (right_name, right, _)| {
            left.rank(*right).then_with(|| left_name.cmp(right_name))
        })
        .take(config.max_suggestions)
        .map(|(name, _, _)| name)
        .collect()
}

/// Renders suggestions as a clause to append to an error message.
///
/// Returns an empty string when there is nothing to suggest.
#[must_use]
pub fn suggestion_clause(matches: &[&str]) -> String {
    if matches.is_empty() {
        return String::new();
    }

    format!(" Did you mean: {}?", matches.iter().join(" or "))
}
