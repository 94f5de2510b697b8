use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{api::Api, prelude::*};

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    results: Vec<FeedItem>,
}

/// News article or announcement collected by the API.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedItem {
    pub id: u64,

    /// Publisher, such as `bbc`.
    pub source: String,

    /// Article URL.
    pub identifier: String,

    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payload: FeedPayload,

    pub fetched_at: String,
}

#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeedPayload {
    pub title: Option<String>,
    pub description: Option<String>,

    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

impl FeedItem {
    /// Title, or the URL for the untitled items.
    #[must_use]
    pub fn headline(&self) -> &str {
        self.payload.title.as_deref().filter(|title| !title.is_empty()).unwrap_or(&self.identifier)
    }
}

impl Api {
    #[instrument(skip_all, fields(page = page, page_size = page_size))]
    pub async fn get_feed(&self, page: u32, page_size: u32) -> Result<Vec<FeedItem>> {
        let items = self
            .get::<Page>("grid-api/feed/", &[("page", page), ("page_size", page_size)])
            .await?
            .results;
        info!(len = items.len(), "fetched the feed");
        Ok(items)
    }
}
