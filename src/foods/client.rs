use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::UsdaConfig;
use crate::foods::catalog::{DatasetType, PAGE_SIZE};
use crate::foods::dto::{FoodCandidate, UsdaSearchResponse};
use crate::foods::services::to_candidates;

#[async_trait]
pub trait FoodLookup: Send + Sync {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<FoodCandidate>>;
}

/// FoodData Central search client. One request per call, no caching or retries.
#[derive(Clone)]
pub struct UsdaClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl UsdaClient {
    pub fn new(config: &UsdaConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &UsdaConfig) -> Self {
        Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/foods/search", self.endpoint)
    }
}

#[async_trait]
impl FoodLookup for UsdaClient {
    async fn search(&self, query: &str) -> anyhow::Result<Vec<FoodCandidate>> {
        anyhow::ensure!(!query.is_empty(), "empty search query");

        let page_size = PAGE_SIZE.to_string();
        let data_type = DatasetType::filter_param();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("dataType", data_type.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .context("send usda search request")?;

        let status = response.status();
        debug!(%status, "usda search response");
        if !status.is_success() {
            error!(%status, "usda search request failed");
            anyhow::bail!("usda search returned {status}");
        }

        let body: UsdaSearchResponse = response
            .json()
            .await
            .context("decode usda search response")?;
        Ok(to_candidates(body))
    }
}
