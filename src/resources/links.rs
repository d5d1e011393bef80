//! Useful links: public listing plus admin CRUD.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsefulLink {
    pub id: u64,
    pub title: String,
    pub url: String,
    /// Sort position on the public page; lower comes first.
    #[serde(default)]
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub position: u32,
}

#[derive(Clone)]
pub struct LinksApi {
    client: ApiClient,
}

impl LinksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<UsefulLink>> {
        self.client.get_json("/links").await
    }

    pub async fn create(&self, draft: &LinkDraft) -> ApiResult<UsefulLink> {
        self.client.post_json("/admin/links", draft).await
    }

    pub async fn update(&self, id: u64, draft: &LinkDraft) -> ApiResult<UsefulLink> {
        self.client
            .put_json(&format!("/admin/links/{}", id), draft)
            .await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client.delete(&format!("/admin/links/{}", id)).await
    }
}
