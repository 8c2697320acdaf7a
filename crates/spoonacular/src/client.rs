use std::time::Duration;

use larder_recipe::Recipe;
use reqwest::StatusCode;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{ApiError, BROWSE_RESULTS, SearchQuery};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com/recipes";

/// How long a call may take before it is abandoned. There is no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// Listings and lookups (10 s by default).
    Short,
    /// Ingredient search and detail lookups with nutrition (15 s by default).
    Long,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub short_timeout: Duration,
    pub long_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: String::new(),
            short_timeout: Duration::from_secs(10),
            long_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Recipe>,
}

#[derive(Deserialize)]
struct RandomResponse {
    #[serde(default)]
    recipes: Vec<Recipe>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Thin client for the recipe API. Cheap to clone; clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("larder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn has_api_key(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    #[tracing::instrument(skip_all, fields(ingredients = %query.ingredients.join(",")))]
    pub async fn complex_search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, ApiError> {
        let response: SearchResponse = self
            .get("complexSearch", &query.params(), Timeout::Long)
            .await?;

        Ok(response.results)
    }

    #[tracing::instrument(skip(self))]
    pub async fn by_category(&self, category: &str) -> Result<Vec<Recipe>, ApiError> {
        let params = [
            ("type", category.to_owned()),
            ("number", BROWSE_RESULTS.to_string()),
            ("addRecipeInformation", "true".to_owned()),
        ];

        let response: SearchResponse = self.get("complexSearch", &params, Timeout::Short).await?;

        Ok(response.results)
    }

    #[tracing::instrument(skip(self))]
    pub async fn random(&self, number: u32, tags: &str) -> Result<Vec<Recipe>, ApiError> {
        let params = [("number", number.to_string()), ("tags", tags.to_owned())];

        let response: RandomResponse = self.get("random", &params, Timeout::Short).await?;

        Ok(response.recipes)
    }

    /// Full information for several recipes at once. No ids, no request.
    #[tracing::instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn information_bulk(
        &self,
        ids: &[u64],
        include_nutrition: bool,
        timeout: Timeout,
    ) -> Result<Vec<Recipe>, ApiError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let params = [
            ("ids", ids),
            ("includeNutrition", include_nutrition.to_string()),
        ];

        self.get("informationBulk", &params, timeout).await
    }

    /// Single recipe with nutrition facts.
    #[tracing::instrument(skip(self))]
    pub async fn information(&self, id: u64) -> Result<Recipe, ApiError> {
        let params = [("includeNutrition", "true".to_owned())];

        self.get(&format!("{id}/information"), &params, Timeout::Long)
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        timeout: Timeout,
    ) -> Result<T, ApiError> {
        if !self.has_api_key() {
            return Err(ApiError::MissingApiKey);
        }

        let url = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));
        let timeout = match timeout {
            Timeout::Short => self.config.short_timeout,
            Timeout::Long => self.config.long_timeout,
        };

        tracing::debug!(%url, ?timeout, "sending request");

        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .query(params)
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status == StatusCode::PAYMENT_REQUIRED {
            tracing::warn!(%url, "api quota exceeded");
            return Err(ApiError::QuotaExceeded);
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));

            tracing::warn!(%url, status = status.as_u16(), %message, "api call failed");

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}
