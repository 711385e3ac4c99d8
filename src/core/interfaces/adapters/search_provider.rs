use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::ResultRecord;

#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn perform_search(&self, query: &str) -> Result<Vec<ResultRecord>>;
}
