//! Singleton page content (about, team, partners).

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContent {
    pub slug: String,
    pub title: String,
    /// Rendered HTML, produced by the back-office editor.
    pub body_html: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDraft {
    pub title: String,
    pub body_html: String,
}

#[derive(Clone)]
pub struct ContentApi {
    client: ApiClient,
}

impl ContentApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page blob, e.g. `get("about")` for `/content/about`.
    pub async fn get(&self, slug: &str) -> ApiResult<PageContent> {
        self.client.get_json(&format!("/content/{}", slug)).await
    }

    pub async fn update(&self, slug: &str, draft: &PageDraft) -> ApiResult<PageContent> {
        self.client
            .put_json(&format!("/admin/content/{}", slug), draft)
            .await
    }
}
