use crate::error::{ApiError, Result};
use crate::models::{Category, EscalationPayload, EscalationStatus, ExtractionResult};
use regex::RegexBuilder;
use reqwest::Client;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    movie: String,
}

/// Static list of known movie titles, read from a local JSON array of
/// `{"movie": <title>}` objects at startup.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    titles: Vec<String>,
}

impl MovieCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            ApiError::CatalogError(format!("movie catalog {}: {}", path.display(), err))
        })?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&contents)
            .map_err(|err| ApiError::CatalogError(format!("malformed movie catalog: {}", err)))?;
        Ok(Self::from_titles(
            entries.into_iter().map(|e| e.movie).collect(),
        ))
    }

    pub fn from_titles(titles: Vec<String>) -> Self {
        Self { titles }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

/// Decides the final status of a query and, when no movie entity was
/// extracted but a catalog title appears in the text, forwards the query to
/// the domain-classification service.
pub struct EscalationGateway {
    client: Client,
    classifier_url: String,
    catalog: MovieCatalog,
}

impl EscalationGateway {
    pub fn new(client: Client, classifier_url: impl Into<String>, catalog: MovieCatalog) -> Self {
        Self {
            client,
            classifier_url: classifier_url.into(),
            catalog,
        }
    }

    /// The catalog is scanned against the lemmatized query text, not the
    /// extractor's mutated buffer. At most one escalation per query: the
    /// scan stops on the first matching title.
    ///
    /// The escalation POST is best effort. The response is never inspected
    /// and a transport failure still yields `wait`; the null-fields check
    /// runs last and overrides whatever the scan decided.
    pub async fn decide(
        &self,
        result: &ExtractionResult,
        lemmatized_text: &str,
    ) -> Result<EscalationStatus> {
        let mut status = EscalationStatus::Continue;

        let has_movie = result
            .constraints
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|c| c.category == Category::Movie);

        if !has_movie {
            for title in self.catalog.titles() {
                let pattern = RegexBuilder::new(&title.to_lowercase())
                    .case_insensitive(true)
                    .build()?;
                if pattern.is_match(lemmatized_text) {
                    info!(%title, "catalog hit, escalating to domain classifier");
                    self.escalate(&result.raw_query, title).await;
                    status = EscalationStatus::Wait;
                    break;
                }
            }
        }

        if result.constraints.is_none() || result.concepts.is_none() {
            status = EscalationStatus::NotFound;
        }

        Ok(status)
    }

    async fn escalate(&self, query: &str, concept: &str) {
        let payload = EscalationPayload {
            user_id: "internal".to_string(),
            domain: "movie".to_string(),
            query: query.to_string(),
            concept: concept.to_string(),
        };

        match self.client.post(&self.classifier_url).json(&payload).send().await {
            Ok(response) => {
                if !response.status().is_success() {
                    warn!(status = %response.status(), "domain classifier answered non-success");
                }
            }
            Err(err) => warn!("domain classifier call failed: {}", err),
        }
    }
}
