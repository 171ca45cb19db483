use crate::error::Result;
use crate::models::{ExtractionResult, QueryResponse};
use crate::services::{
    normalizer, ConceptTagger, ConstraintExtractor, EscalationGateway, Lemmatizer, SpellCorrector,
};
use tracing::{debug, info};

/// Runs the whole query-understanding pipeline for one request.
///
/// Stages run strictly in order and each owns the working buffer while it
/// holds it: normalize → lemmatize → constraint extraction (destructive
/// consumption) → spelling correction → concept tagging → escalation
/// decision. Nothing here is shared between requests except the read-only
/// services themselves.
pub struct QueryService {
    lemmatizer: Lemmatizer,
    extractor: ConstraintExtractor,
    corrector: SpellCorrector,
    tagger: ConceptTagger,
    gateway: EscalationGateway,
}

impl QueryService {
    pub fn new(
        lemmatizer: Lemmatizer,
        extractor: ConstraintExtractor,
        corrector: SpellCorrector,
        tagger: ConceptTagger,
        gateway: EscalationGateway,
    ) -> Self {
        Self {
            lemmatizer,
            extractor,
            corrector,
            tagger,
            gateway,
        }
    }

    pub async fn process(&self, raw_query: &str) -> Result<QueryResponse> {
        let normalized = normalizer::normalize(raw_query);
        let lemmatized = self.lemmatizer.lemmatized_string(&normalized);
        debug!(%lemmatized, "query lemmatized");

        let (constraints, working) = self.extractor.extract(&lemmatized)?;
        let corrected = self.corrector.correct(&working);
        let (concepts, working) = self.tagger.tag(&corrected)?;

        let result = ExtractionResult {
            constraints: Some(constraints),
            concepts: Some(concepts),
            working_text: working,
            raw_query: raw_query.to_string(),
        };

        let status = self.gateway.decide(&result, &lemmatized).await?;
        info!(
            constraints = result.constraints.as_ref().map_or(0, Vec::len),
            concepts = result.concepts.as_ref().map_or(0, Vec::len),
            ?status,
            "query processed"
        );

        Ok(QueryResponse {
            query: result.raw_query,
            constraints: result.constraints.unwrap_or_default(),
            concepts: result.concepts.unwrap_or_default(),
            working_text: result.working_text,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EscalationStatus;
    use crate::services::dictionary::Dictionary;
    use crate::services::MovieCatalog;
    use std::sync::Arc;

    fn service(dictionary: Dictionary, catalog: &[&str]) -> QueryService {
        let dictionary = Arc::new(dictionary);
        QueryService::new(
            Lemmatizer::new(),
            ConstraintExtractor::new(Arc::clone(&dictionary)),
            SpellCorrector::from_words(vec!["titanic".to_string(), "movie".to_string()]),
            ConceptTagger::new(dictionary),
            EscalationGateway::new(
                reqwest::Client::new(),
                "http://127.0.0.1:1/api/v1/domain/internal",
                MovieCatalog::from_titles(catalog.iter().map(|t| t.to_string()).collect()),
            ),
        )
    }

    #[tokio::test]
    async fn extracts_movie_constraint_end_to_end() {
        let dictionary = Dictionary {
            movies: vec!["Titanic".to_string()],
            ..Dictionary::default()
        };

        let response = service(dictionary, &[])
            .process("tell about Titanic")
            .await
            .unwrap();

        assert_eq!(response.constraints.len(), 1);
        assert_eq!(response.constraints[0].value, "Titanic");
        assert_eq!(response.status, EscalationStatus::Continue);
    }

    #[tokio::test]
    async fn unknown_query_without_catalog_hit_continues() {
        let response = service(Dictionary::default(), &[])
            .process("something else entirely")
            .await
            .unwrap();

        assert!(response.constraints.is_empty());
        assert!(response.concepts.is_empty());
        assert_eq!(response.status, EscalationStatus::Continue);
    }

    #[tokio::test]
    async fn catalog_hit_without_movie_constraint_waits() {
        // Classifier endpoint is unreachable; status must still be wait.
        let response = service(Dictionary::default(), &["titanic"])
            .process("tell about Titanic")
            .await
            .unwrap();

        assert_eq!(response.status, EscalationStatus::Wait);
    }
}
