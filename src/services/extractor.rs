use crate::error::Result;
use crate::models::{Category, Constraint};
use crate::services::dictionary::Dictionary;
use regex::RegexBuilder;
use std::sync::Arc;
use tracing::debug;

/// Scans the lemmatized query against the dictionary, category by category,
/// consuming trigger words from a working buffer as it goes.
///
/// The scan order and the per-category trigger-word removal are a visible
/// contract: removal is global in the buffer and persists into later category
/// scans, so later categories match against the already-trimmed text.
pub struct ConstraintExtractor {
    dictionary: Arc<Dictionary>,
}

impl ConstraintExtractor {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Returns the constraints found plus the working text left after all
    /// trigger-word consumption.
    ///
    /// Dictionary values are compiled as regex patterns exactly as supplied,
    /// without escaping, so entries containing metacharacters match more
    /// broadly than literal text. A value that fails to compile propagates
    /// as a pattern error.
    pub fn extract(&self, lemmatized_text: &str) -> Result<(Vec<Constraint>, String)> {
        let mut constraints = Vec::new();
        let mut working = lemmatized_text.to_string();

        for category in Category::SCAN_ORDER {
            for value in self.dictionary.values(category) {
                let pattern = RegexBuilder::new(&value.to_lowercase())
                    .case_insensitive(true)
                    .build()?;

                if pattern.is_match(&working) {
                    for trigger in category.trigger_words() {
                        working = working.replace(trigger, "");
                    }
                    debug!(?category, %value, "constraint matched");
                    constraints.push(Constraint {
                        category,
                        value: value.clone(),
                    });
                }
            }
        }

        Ok((constraints, working))
    }
}
