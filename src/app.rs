use crate::{
    config::Config,
    error::Result,
    routes::api_routes,
    services::{
        ConceptTagger, ConstraintExtractor, DictionaryStore, EscalationGateway, Lemmatizer,
        MovieCatalog, QueryService, SpellCorrector,
    },
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use log::info;
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for Docker compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        let client = reqwest::Client::builder()
            .timeout(self.config.http_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        // A failed dictionary fetch is fatal; there is no degraded mode.
        let dictionary = Arc::new(
            DictionaryStore::fetch(&client, &self.config.dictionary_service_url).await?,
        );

        let catalog = MovieCatalog::from_file(&self.config.movie_catalog_path)?;
        let corrector = SpellCorrector::from_file(&self.config.word_list_path)?;

        let query_service = web::Data::new(QueryService::new(
            Lemmatizer::new(),
            ConstraintExtractor::new(Arc::clone(&dictionary)),
            corrector,
            ConceptTagger::new(dictionary),
            EscalationGateway::new(client, self.config.domain_classifier_url.clone(), catalog),
        ));

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(query_service.clone())
                .service(api_routes())
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
