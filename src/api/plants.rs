use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    api::Api,
    core::{fleet::UNKNOWN, location::Location, reading::Reading},
    prelude::*,
    quantity::power::Megawatts,
};

/// Power plant from the repository of generation sites.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PowerPlant {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Such as `Gas` or `Wave and Tidal`.
    #[serde(default)]
    primary_fuel: Option<String>,

    #[serde(default)]
    capacity_mw: Reading,

    #[serde(flatten)]
    pub location: Location,
}

impl PowerPlant {
    #[must_use]
    pub fn fuel(&self) -> &str {
        self.primary_fuel.as_deref().filter(|fuel| !fuel.is_empty()).unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn capacity(&self) -> Option<Megawatts> {
        self.capacity_mw.value().map(Megawatts)
    }
}

impl Api {
    #[instrument(skip_all)]
    pub async fn get_power_plants(&self) -> Result<Vec<PowerPlant>> {
        let plants: Vec<PowerPlant> = self.get("api/power-plants/", &[]).await?;
        info!(len = plants.len(), "fetched the power plants");
        Ok(plants)
    }
}
