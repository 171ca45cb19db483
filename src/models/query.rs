use serde::{Deserialize, Serialize};

/// Constraint categories, in the order the extractor scans them.
///
/// The serialized names are the wire names used by the dictionary feed and
/// the downstream retrieval component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "movie")]
    Movie,
    #[serde(rename = "producer")]
    Producer,
    #[serde(rename = "artist")]
    Artist,
    #[serde(rename = "director")]
    Director,
    #[serde(rename = "country")]
    Country,
    #[serde(rename = "language")]
    Language,
    #[serde(rename = "release date")]
    ReleaseDate,
    #[serde(rename = "boxoffice")]
    BoxOffice,
}

impl Category {
    /// Fixed scan order. Later categories see the working text already
    /// stripped by earlier ones, so this order is part of the contract.
    pub const SCAN_ORDER: [Category; 8] = [
        Category::Movie,
        Category::Producer,
        Category::Artist,
        Category::Director,
        Category::Country,
        Category::Language,
        Category::ReleaseDate,
        Category::BoxOffice,
    ];

    /// Trigger words consumed from the working text when a value of this
    /// category matches. Removal is global, not just at the match site.
    pub fn trigger_words(self) -> &'static [&'static str] {
        match self {
            Category::Movie => &["movie"],
            Category::Producer => &["production house"],
            Category::Artist => &["act", "artist"],
            Category::Director => &["direct"],
            Category::Country => &["located", "set"],
            Category::Language => &["language"],
            Category::ReleaseDate => &["release"],
            Category::BoxOffice => &["box office collection", "collect", "gross"],
        }
    }
}

/// One recognized domain entity: a (category, value) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub category: Category,
    pub value: String,
}

/// Everything the extraction pipeline produced for one query.
///
/// `constraints` and `concepts` are `None` only when extraction never ran;
/// the escalation gateway maps that case to `notFound`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    pub constraints: Option<Vec<Constraint>>,
    pub concepts: Option<Vec<String>>,
    pub working_text: String,
    pub raw_query: String,
}

/// Final status reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalationStatus {
    #[serde(rename = "continue")]
    Continue,
    #[serde(rename = "wait")]
    Wait,
    #[serde(rename = "notFound")]
    NotFound,
}

/// Body POSTed to the domain-classification service on escalation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalationPayload {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub domain: String,
    pub query: String,
    pub concept: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub constraints: Vec<Constraint>,
    pub concepts: Vec<String>,
    pub working_text: String,
    pub status: EscalationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_round_trip() {
        let json = serde_json::to_string(&Category::ReleaseDate).unwrap();
        assert_eq!(json, "\"release date\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::ReleaseDate);
    }

    #[test]
    fn status_serializes_as_camel_case_strings() {
        assert_eq!(
            serde_json::to_string(&EscalationStatus::NotFound).unwrap(),
            "\"notFound\""
        );
        assert_eq!(
            serde_json::to_string(&EscalationStatus::Continue).unwrap(),
            "\"continue\""
        );
    }

    #[test]
    fn escalation_payload_uses_user_id_wire_name() {
        let payload = EscalationPayload {
            user_id: "internal".to_string(),
            domain: "movie".to_string(),
            query: "who directed inception".to_string(),
            concept: "Inception".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["userId"], "internal");
        assert_eq!(value["domain"], "movie");
    }
}
