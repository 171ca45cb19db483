use once_cell::sync::OnceCell;
use rust_stemmers::{Algorithm, Stemmer};
use tracing::debug;

static PIPELINE: OnceCell<Stemmer> = OnceCell::new();

/// Annotation pipeline shared by all queries.
///
/// Built lazily on first use and reused for the process lifetime; `OnceCell`
/// guards the first-use race, and the built pipeline is read-only afterwards.
fn pipeline() -> &'static Stemmer {
    PIPELINE.get_or_init(|| {
        debug!("Initializing lemma pipeline");
        Stemmer::create(Algorithm::English)
    })
}

/// Maps normalized text to an ordered sequence of lemma tokens.
///
/// Consumed as a black box by the extraction pipeline: text in, tokens out.
/// Capitalized tokens are treated as proper nouns and only lowercased, so
/// titles and names survive intact; everything else gets its Snowball
/// English lemma.
#[derive(Debug, Clone, Default)]
pub struct Lemmatizer;

impl Lemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Ordered lemma tokens for the given text.
    pub fn lemmatize(&self, text: &str) -> Vec<String> {
        let stemmer = pipeline();
        text.split_whitespace()
            .map(|token| {
                let lowered = token.to_lowercase();
                if token.chars().next().is_some_and(char::is_uppercase) {
                    lowered
                } else {
                    stemmer.stem(&lowered).into_owned()
                }
            })
            .collect()
    }

    /// Lemma tokens rejoined into a single-space-separated string, the form
    /// the constraint extractor scans.
    pub fn lemmatized_string(&self, text: &str) -> String {
        self.lemmatize(text).join(" ")
    }
}
