use clap::Parser;
use reqwest::Url;

use crate::{api::Api, prelude::*};

#[derive(Parser)]
pub struct ApiArgs {
    /// Base URL of the API, with the grid telemetry under `grid-api/` and the sites under `api/`.
    #[clap(
        long = "api-base-url",
        env = "GRID_API_BASE_URL",
        default_value = "https://poweroptimiseai-0390a8a27103.herokuapp.com/",
        global = true
    )]
    base_url: Url,
}

impl ApiArgs {
    pub fn new_client(&self) -> Result<Api> {
        Api::new(self.base_url.clone())
    }
}
