//! News articles: public listing plus admin CRUD.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    /// ISO 8601, as served by the backend.
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

/// Payload for creating or updating an article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub body: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Clone)]
pub struct NewsApi {
    client: ApiClient,
}

impl NewsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all published articles.
    pub async fn list(&self) -> ApiResult<Vec<NewsArticle>> {
        self.client.get_json("/news").await
    }

    pub async fn get(&self, id: u64) -> ApiResult<NewsArticle> {
        self.client.get_json(&format!("/news/{}", id)).await
    }

    pub async fn create(&self, draft: &NewsDraft) -> ApiResult<NewsArticle> {
        self.client.post_json("/admin/news", draft).await
    }

    pub async fn update(&self, id: u64, draft: &NewsDraft) -> ApiResult<NewsArticle> {
        self.client
            .put_json(&format!("/admin/news/{}", id), draft)
            .await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client.delete(&format!("/admin/news/{}", id)).await
    }
}
