use anyhow::Result;
use dotenv::dotenv;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub dictionary_service_url: String,
    pub domain_classifier_url: String,
    pub movie_catalog_path: String,
    pub word_list_path: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            dictionary_service_url: env::var("DICTIONARY_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8134/api".to_string()),
            domain_classifier_url: env::var("DOMAIN_CLASSIFIER_URL").unwrap_or_else(|_| {
                "http://google-search:8050/api/v1/domain/internal".to_string()
            }),
            movie_catalog_path: env::var("MOVIE_CATALOG_PATH")
                .unwrap_or_else(|_| "resources/MovieNames.json".to_string()),
            word_list_path: env::var("WORD_LIST_PATH")
                .unwrap_or_else(|_| "resources/words_alpha.txt".to_string()),
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .unwrap_or(30),
            ),
        })
    }
}
