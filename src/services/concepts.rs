use crate::error::Result;
use crate::services::dictionary::Dictionary;
use regex::RegexBuilder;
use std::sync::Arc;
use tracing::debug;

/// Lexical canonicalization applied to the working text before each concept
/// comparison. Order matters.
const CANONICAL_FORMS: [(&str, &str); 5] = [
    ("film", "movie"),
    ("act", "artist"),
    ("produce", "producer"),
    ("direct", "director"),
    ("release", "release date"),
];

/// Matches the corrected working buffer against the concept vocabulary.
pub struct ConceptTagger {
    dictionary: Arc<Dictionary>,
}

impl ConceptTagger {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Returns every matching concept in vocabulary order (duplicates kept)
    /// together with the canonicalized buffer.
    ///
    /// The canonicalization pass runs once per concept iteration rather than
    /// once up front; the repetition mirrors the deployed matcher, whose
    /// buffer output includes the repeated rewrites.
    pub fn tag(&self, text: &str) -> Result<(Vec<String>, String)> {
        let mut working = text.to_string();
        let mut concepts = Vec::new();

        for concept in &self.dictionary.concepts {
            for (from, to) in CANONICAL_FORMS {
                working = working.replace(from, to);
            }

            let pattern = RegexBuilder::new(&concept.to_lowercase())
                .case_insensitive(true)
                .build()?;
            if pattern.is_match(&working) {
                debug!(%concept, "concept matched");
                concepts.push(concept.clone());
            }
        }

        Ok((concepts, working))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger(concepts: &[&str]) -> ConceptTagger {
        ConceptTagger::new(Arc::new(Dictionary {
            concepts: concepts.iter().map(|c| c.to_string()).collect(),
            ..Dictionary::default()
        }))
    }

    #[test]
    fn canonicalizes_before_matching() {
        let (concepts, working) = tagger(&["movie"]).tag("a film about the sea").unwrap();
        assert_eq!(concepts, vec!["movie"]);
        assert!(working.contains("movie"));
        assert!(!working.contains("film"));
    }

    #[test]
    fn collects_matches_in_vocabulary_order() {
        let (concepts, _) = tagger(&["director", "movie"])
            .tag("who direct this film")
            .unwrap();
        assert_eq!(concepts, vec!["director", "movie"]);
    }

    #[test]
    fn act_rewrites_to_artist() {
        let (concepts, working) = tagger(&["artist"]).tag("who act in it").unwrap();
        assert_eq!(concepts, vec!["artist"]);
        assert!(working.contains("artist"));
    }

    #[test]
    fn no_concepts_yields_untouched_text() {
        let (concepts, working) = tagger(&[]).tag("release the file").unwrap();
        assert!(concepts.is_empty());
        // With an empty vocabulary the canonicalization loop never runs.
        assert_eq!(working, "release the file");
    }
}
