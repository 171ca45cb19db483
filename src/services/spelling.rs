use crate::error::{ApiError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strsim::levenshtein;
use tracing::debug;

/// Fuzzy-corrects residual tokens of the working buffer against a static
/// word list before concept tagging.
///
/// The word list is a newline-delimited plain-text file, held in file order;
/// it is static for the process lifetime, so it is loaded once at startup
/// rather than re-read per call.
pub struct SpellCorrector {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl SpellCorrector {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            ApiError::InternalError(format!("word list {}: {}", path.display(), err))
        })?;
        Ok(Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }

    pub fn from_words(words: Vec<String>) -> Self {
        let lookup = words.iter().map(|w| w.to_lowercase()).collect();
        Self { words, lookup }
    }

    /// Replaces likely misspellings with their nearest dictionary word.
    ///
    /// Tokens shorter than 3 characters, and tokens already in the word list,
    /// are left alone. Each correction rewrites the ORIGINAL text rather than
    /// the previously corrected one, so when several tokens are misspelled
    /// only the last-processed correction survives. That overwrite behavior
    /// is a compatibility contract with the existing deployment; do not
    /// accumulate corrections here.
    pub fn correct(&self, text: &str) -> String {
        let mut corrected: Option<String> = None;

        for token in text.split_whitespace() {
            if self.lookup.contains(&token.to_lowercase()) {
                continue;
            }
            if token.chars().count() < 3 {
                continue;
            }
            if let Some(suggestion) = self.nearest(token) {
                debug!(%token, %suggestion, "spelling correction");
                corrected = Some(text.replace(token, suggestion));
            }
        }

        corrected.unwrap_or_else(|| text.to_string())
    }

    /// Nearest word by Levenshtein distance, scored as
    /// `1 - distance / shorter_length` with a minimum acceptable score;
    /// earlier file order wins ties. Tokens with no close-enough neighbor
    /// get no suggestion at all.
    fn nearest(&self, token: &str) -> Option<&str> {
        const MIN_SCORE: f64 = 0.5;

        let token = token.to_lowercase();
        let token_len = token.chars().count();

        let mut best: Option<(&str, f64)> = None;
        for word in &self.words {
            let lowered = word.to_lowercase();
            let shorter = token_len.min(lowered.chars().count()).max(1);
            let score = 1.0 - levenshtein(&lowered, &token) as f64 / shorter as f64;
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((word, score));
            }
        }

        best.filter(|&(_, score)| score >= MIN_SCORE)
            .map(|(word, _)| word)
    }
}
