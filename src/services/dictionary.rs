use crate::error::{ApiError, Result};
use crate::models::Category;
use reqwest::Client;
use serde_json::Value;
use tracing::info;

/// Category-to-values mapping fetched once from the dictionary service.
///
/// Populated at startup and never mutated afterwards; shared behind an `Arc`
/// so concurrent requests can read it without locking. Value order is the
/// order the feed supplied, which the extractor's output order depends on.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub concepts: Vec<String>,
    pub movies: Vec<String>,
    pub producers: Vec<String>,
    pub artists: Vec<String>,
    pub directors: Vec<String>,
    pub countries: Vec<String>,
    pub languages: Vec<String>,
    pub release_dates: Vec<String>,
    pub box_office: Vec<String>,
}

impl Dictionary {
    pub fn values(&self, category: Category) -> &[String] {
        match category {
            Category::Movie => &self.movies,
            Category::Producer => &self.producers,
            Category::Artist => &self.artists,
            Category::Director => &self.directors,
            Category::Country => &self.countries,
            Category::Language => &self.languages,
            Category::ReleaseDate => &self.release_dates,
            Category::BoxOffice => &self.box_office,
        }
    }
}

/// Loads the dictionary feed at startup.
pub struct DictionaryStore;

impl DictionaryStore {
    /// Single GET against the dictionary service. Anything other than a
    /// success status with a well-formed payload is fatal; the service
    /// refuses to start rather than run with a partial dictionary.
    pub async fn fetch(client: &Client, url: &str) -> Result<Dictionary> {
        let response = client.get(url).send().await.map_err(|err| {
            ApiError::SourceUnavailable(format!("fetch from {} failed: {}", url, err))
        })?;

        if !response.status().is_success() {
            return Err(ApiError::SourceUnavailable(format!(
                "dictionary service at {} answered {}",
                url,
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| ApiError::SourceUnavailable(format!("malformed payload: {}", err)))?;

        let dictionary = Self::parse(&payload);
        info!(
            "Loaded dictionary: {} movies, {} artists, {} directors, {} producers, {} concepts",
            dictionary.movies.len(),
            dictionary.artists.len(),
            dictionary.directors.len(),
            dictionary.producers.len(),
            dictionary.concepts.len()
        );
        Ok(dictionary)
    }

    /// Missing categories are tolerated as empty lists, never an error.
    fn parse(payload: &Value) -> Dictionary {
        Dictionary {
            concepts: Self::category_values(payload, "labels"),
            movies: Self::category_values(payload, "movie"),
            producers: Self::category_values(payload, "producer"),
            artists: Self::category_values(payload, "artist"),
            directors: Self::category_values(payload, "director"),
            countries: Self::category_values(payload, "country"),
            languages: Self::category_values(payload, "language"),
            release_dates: Self::category_values(payload, "release date"),
            box_office: Self::category_values(payload, "boxoffice"),
        }
    }

    fn category_values(payload: &Value, key: &str) -> Vec<String> {
        payload
            .get(key)
            .and_then(|category| category.get("value"))
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_feed_order_and_tolerates_missing_categories() {
        let payload = serde_json::json!({
            "movie": { "value": ["Titanic", "Avatar"] },
            "labels": { "value": ["box office collection", "release date"] },
        });

        let dict = DictionaryStore::parse(&payload);
        assert_eq!(dict.movies, vec!["Titanic", "Avatar"]);
        assert_eq!(
            dict.concepts,
            vec!["box office collection", "release date"]
        );
        assert!(dict.artists.is_empty());
        assert!(dict.box_office.is_empty());
    }

    #[tokio::test]
    async fn fetch_parses_success_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"movie":{"value":["Inception"]},"artist":{"value":["Leonardo DiCaprio"]}}"#)
            .create_async()
            .await;

        let client = Client::new();
        let dict = DictionaryStore::fetch(&client, &format!("{}/api", server.url()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(dict.movies, vec!["Inception"]);
        assert_eq!(dict.artists, vec!["Leonardo DiCaprio"]);
        assert!(dict.directors.is_empty());
    }

    #[tokio::test]
    async fn fetch_fails_on_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api")
            .with_status(500)
            .create_async()
            .await;

        let client = Client::new();
        let err = DictionaryStore::fetch(&client, &format!("{}/api", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SourceUnavailable(_)));
    }

    #[tokio::test]
    async fn fetch_fails_on_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = Client::new();
        let err = DictionaryStore::fetch(&client, &format!("{}/api", server.url()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SourceUnavailable(_)));
    }
}
