use serde::Deserialize;
use serde_with::{DefaultOnError, DefaultOnNull, serde_as};

use crate::{
    api::Api,
    core::{fleet::UNKNOWN, location::Location, reading::Reading},
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts},
};

/// Energy storage project, such as a battery or a pumped hydro scheme.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StorageProject {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub name: String,

    /// Such as `Operational` or `Contracted`.
    #[serde(default)]
    status: Option<String>,

    /// Such as `Lithium-ion battery`.
    #[serde(default)]
    pub storage_type: Option<String>,

    #[serde(default)]
    storage_capacity_kwh: Reading,

    #[serde(default)]
    rated_power_kw: Reading,

    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub commissioned_date: Option<String>,

    #[serde(flatten)]
    pub location: Location,
}

impl StorageProject {
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().filter(|status| !status.is_empty()).unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn capacity(&self) -> Option<KilowattHours> {
        self.storage_capacity_kwh.value().map(KilowattHours)
    }

    #[must_use]
    pub fn rated_power(&self) -> Option<Kilowatts> {
        self.rated_power_kw.value().map(Kilowatts)
    }
}

impl Api {
    #[instrument(skip_all)]
    pub async fn get_storage_projects(&self) -> Result<Vec<StorageProject>> {
        let projects: Vec<StorageProject> = self.get("api/storage-projects/", &[]).await?;
        info!(len = projects.len(), "fetched the storage projects");
        Ok(projects)
    }
}
