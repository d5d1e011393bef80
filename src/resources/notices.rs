//! Site notices.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub body: String,
}

#[derive(Clone)]
pub struct NoticesApi {
    client: ApiClient,
}

impl NoticesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiResult<Vec<Notice>> {
        self.client.get_json("/notices").await
    }

    pub async fn create(&self, draft: &NoticeDraft) -> ApiResult<Notice> {
        self.client.post_json("/admin/notices", draft).await
    }

    pub async fn delete(&self, id: u64) -> ApiResult<()> {
        self.client.delete(&format!("/admin/notices/{}", id)).await
    }
}
