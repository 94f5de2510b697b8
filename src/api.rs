pub mod feed;
pub mod grid;
pub mod plants;
pub mod storage;

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::prelude::*;

/// Client of the grid telemetry API.
#[derive(Clone)]
pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(mut base_url: Url) -> Result<Self> {
        // Endpoints are joined to the base URL as relative paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self { client, base_url })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, u32)]) -> Result<T> {
        let url = self.base_url.join(path)?;
        debug!(%url, ?query, "requesting…");
        self.client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .with_context(|| format!("failed to request `{url}`"))?
            .error_for_status()
            .with_context(|| format!("`{url}` responded with an error"))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))
    }
}
