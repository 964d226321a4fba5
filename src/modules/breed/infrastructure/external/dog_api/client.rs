use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use urlencoding::encode;

use crate::modules::breed::domain::{Breed, BreedKey};
use crate::modules::breed::infrastructure::external::http::HttpHandler;
use crate::modules::breed::traits::BreedApiClient;
use crate::shared::errors::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// HTTP client for the Dog CEO API.
pub struct DogApiClient {
    client: Client,
    base_url: String,
}

impl DogApiClient {
    /// Build a client against the default endpoint, honoring the
    /// `DOG_API_BASE_URL` environment override.
    pub fn new() -> AppResult<Self> {
        let base_url =
            std::env::var("DOG_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "inu/1.0")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_message<T>(&self, url: String, operation: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response =
            HttpHandler::execute_with_retry(|| self.client.get(&url).send(), "DogApi", operation)
                .await?;

        response
            .json::<super::dto::DogApiEnvelope<T>>()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse Dog API response: {}", e)))?
            .into_message()
    }

    fn image_path(key: &BreedKey) -> String {
        match key.sub_breed() {
            Some(sub) => format!("breed/{}/{}/images/random", encode(key.breed_name()), encode(sub)),
            None => format!("breed/{}/images/random", encode(key.breed_name())),
        }
    }
}

#[async_trait]
impl BreedApiClient for DogApiClient {
    async fn list_breeds(&self) -> AppResult<Vec<Breed>> {
        let url = format!("{}/breeds/list/all", self.base_url);
        let message: BTreeMap<String, Vec<String>> =
            self.get_message(url, "list breeds").await?;

        let breeds: Vec<Breed> = message
            .into_iter()
            .map(|(name, sub_breeds)| Breed::new(name, sub_breeds))
            .filter(|breed| !breed.name.is_empty())
            .collect();

        debug!("Dog API listed {} breeds", breeds.len());
        Ok(breeds)
    }

    async fn list_sub_breeds(&self, breed: &str) -> AppResult<Vec<String>> {
        let breed = breed.trim().to_lowercase();
        if breed.is_empty() {
            return Err(AppError::InvalidInput("Breed name cannot be empty".to_string()));
        }

        let url = format!("{}/breed/{}/list", self.base_url, encode(&breed));
        let message: Vec<String> = self.get_message(url, "list sub-breeds").await?;

        Ok(message
            .into_iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect())
    }

    async fn fetch_random_image(&self, key: &BreedKey) -> AppResult<String> {
        if key.breed_name().is_empty() {
            return Err(AppError::InvalidInput("Breed name cannot be empty".to_string()));
        }

        let url = format!("{}/{}", self.base_url, Self::image_path(key));
        let image_url: String = self.get_message(url, "fetch random image").await?;

        if image_url.trim().is_empty() {
            return Err(AppError::EmptyResult(format!(
                "Dog API returned no image URL for '{}'",
                key
            )));
        }

        Ok(image_url)
    }
}
