//! View statistics for the back-office dashboard.

use serde::{Deserialize, Serialize};

use reqwest::Method;

use crate::client::{ApiClient, ApiRequest, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOverview {
    pub total_views: u64,
    pub views_today: u64,
    #[serde(default)]
    pub unique_sessions: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyViews {
    /// ISO date (YYYY-MM-DD).
    pub date: String,
    pub views: u64,
}

#[derive(Clone)]
pub struct StatsApi {
    client: ApiClient,
}

impl StatsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn overview(&self) -> ApiResult<StatsOverview> {
        self.client.get_json("/stats/overview").await
    }

    /// Daily view counts for a closed date range (inclusive bounds,
    /// ISO dates).
    pub async fn views(&self, from: &str, to: &str) -> ApiResult<Vec<DailyViews>> {
        let request = ApiRequest::new(Method::GET, "/stats/views")
            .with_query("from", from)
            .with_query("to", to);
        self.client.fetch_json(&request).await
    }
}
