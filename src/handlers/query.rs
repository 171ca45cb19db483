use crate::{
    error::ApiError,
    models::QueryRequest,
    services::QueryService,
};
use actix_web::{
    web::{self, Json},
    HttpResponse,
};

pub fn query_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/query").route(web::post().to(understand_query)));
}

/// Turn a free-text movie query into constraints, concepts and a status.
pub async fn understand_query(
    request: Json<QueryRequest>,
    query_service: web::Data<QueryService>,
) -> Result<HttpResponse, ApiError> {
    if request.query.trim().is_empty() {
        return Err(ApiError::InvalidInput("Query cannot be empty".to_string()));
    }

    let response = query_service.process(&request.query).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        ConceptTagger, ConstraintExtractor, Dictionary, EscalationGateway, Lemmatizer,
        MovieCatalog, QueryService, SpellCorrector,
    };
    use std::sync::Arc;

    fn service() -> web::Data<QueryService> {
        let dictionary = Arc::new(Dictionary::default());
        web::Data::new(QueryService::new(
            Lemmatizer::new(),
            ConstraintExtractor::new(Arc::clone(&dictionary)),
            SpellCorrector::from_words(Vec::new()),
            ConceptTagger::new(dictionary),
            EscalationGateway::new(
                reqwest::Client::new(),
                "http://127.0.0.1:1/api/v1/domain/internal",
                MovieCatalog::default(),
            ),
        ))
    }

    #[tokio::test]
    async fn blank_query_is_rejected() {
        let result = understand_query(
            Json(QueryRequest {
                query: "   ".to_string(),
            }),
            service(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn non_empty_query_answers_ok() {
        let response = understand_query(
            Json(QueryRequest {
                query: "who directed this".to_string(),
            }),
            service(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }
}
