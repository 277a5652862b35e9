use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{fixtures, Child, DashboardAction, DataSource, FixtureError, Goal};
use thiserror::Error;
use web_sys::RequestCache;

use crate::services::logging::Logger;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// API client for the child and goal endpoints
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client for the base URL baked in at build time
    /// (`ASSESSMENT_API_URL`), or the local default
    pub fn new() -> Self {
        Self::with_base_url(option_env!("ASSESSMENT_API_URL").unwrap_or(DEFAULT_BASE_URL).to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_children(&self) -> Result<Vec<Child>, ApiError> {
        self.get_json("/api/children").await
    }

    pub async fn get_goals(&self) -> Result<Vec<Goal>, ApiError> {
        self.get_json("/api/goals").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch children, falling back to the bundled dataset on any API failure.
///
/// The bundled dataset is always decoded since it also seeds achievement
/// levels for children the API returns without any.
pub async fn load_children(api_client: &ApiClient) -> Result<DashboardAction, FixtureError> {
    let reference = fixtures::child_data()?;

    let (children, source) = match api_client.get_children().await {
        Ok(children) => (children, DataSource::Remote),
        Err(e) => {
            Logger::warn_with_component("data-loader", &format!("Using bundled child data: {}", e));
            (reference.clone(), DataSource::Fallback)
        }
    };

    Ok(DashboardAction::ChildrenLoaded {
        children,
        source,
        reference,
    })
}

/// Fetch the goal catalog, falling back to the bundled dataset on any API failure
pub async fn load_goals(api_client: &ApiClient) -> Result<DashboardAction, FixtureError> {
    let (goals, source) = match api_client.get_goals().await {
        Ok(goals) => (goals, DataSource::Remote),
        Err(e) => {
            Logger::warn_with_component("data-loader", &format!("Using bundled goal data: {}", e));
            (fixtures::goal_data()?, DataSource::Fallback)
        }
    };

    Ok(DashboardAction::GoalsLoaded { goals, source })
}
