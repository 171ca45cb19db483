pub mod concepts;
pub mod dictionary;
pub mod escalation;
pub mod extractor;
pub mod lemmatizer;
pub mod normalizer;
pub mod query_service;
pub mod spelling;

// Re-export public types
pub use concepts::ConceptTagger;
pub use dictionary::{Dictionary, DictionaryStore};
pub use escalation::{EscalationGateway, MovieCatalog};
pub use extractor::ConstraintExtractor;
pub use lemmatizer::Lemmatizer;
pub use query_service::QueryService;
pub use spelling::SpellCorrector;
