use std::collections::BTreeMap;

use serde::Deserialize;
use serde_with::{DefaultOnError, serde_as};

use crate::core::reading::Reading;

/// One point-in-time reading of the grid telemetry.
///
/// Scalar totals are named fields, the fuel and interconnector channels are kept by their raw
/// names. The snapshot is never mutated once received: a fresh poll replaces it wholesale.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub total_generation: Reading,

    #[serde(default)]
    pub total_demand: Reading,

    /// Imports are positive, exports are negative.
    #[serde(default)]
    pub total_transfers: Reading,

    #[serde(default)]
    pub price: Reading,

    #[serde(default)]
    pub emissions: Reading,

    /// Set on series entries by the half-hourly model.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    end_time: Option<String>,

    /// Set on series entries by the daily model.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    time: Option<String>,

    #[serde(flatten)]
    channels: BTreeMap<String, Reading>,
}

impl RawSnapshot {
    /// Read a raw channel, such as `ccgt` or `nemo`.
    pub fn reading(&self, field: &str) -> Reading {
        self.channels.get(field).copied().unwrap_or(Reading::ABSENT)
    }

    #[cfg(test)]
    pub fn with(mut self, field: &str, value: impl Into<Reading>) -> Self {
        self.channels.insert(field.to_owned(), value.into());
        self
    }

    #[cfg(test)]
    pub fn with_total_generation(mut self, value: impl Into<Reading>) -> Self {
        self.total_generation = value.into();
        self
    }

    #[cfg(test)]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Series entries are timestamped by `end_time` or by `time`, depending on the model.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.end_time.as_deref().or(self.time.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_snapshot_ok() -> crate::prelude::Result {
        // language=json
        let body = r#"{
            "id": 4321,
            "total_generation": 28.43,
            "total_demand": 30.1,
            "total_transfers": 1.67,
            "price": "72.50",
            "emissions": 143.0,
            "coal": 0.0,
            "ccgt": 8.12,
            "ocgt": null,
            "embedded_wind": 1.2,
            "nemo": -0.4,
            "source": "elexon"
        }"#;
        let snapshot: RawSnapshot = serde_json::from_str(body)?;
        assert_eq!(snapshot.total_generation, Reading::new(28.43));
        assert_eq!(snapshot.price, Reading::new(72.5));
        assert_eq!(snapshot.reading("ccgt"), Reading::new(8.12));
        assert_eq!(snapshot.reading("nemo"), Reading::new(-0.4));
        assert!(snapshot.reading("ocgt").is_absent());
        assert!(snapshot.reading("solar").is_absent());
        assert!(snapshot.reading("source").is_absent());
        assert_eq!(snapshot.timestamp(), None);
        Ok(())
    }

    #[test]
    fn missing_scalars_are_absent() -> crate::prelude::Result {
        let snapshot: RawSnapshot = serde_json::from_str("{}")?;
        assert!(snapshot.total_generation.is_absent());
        assert!(snapshot.emissions.is_absent());
        Ok(())
    }

    #[test]
    fn timestamp_prefers_end_time() -> crate::prelude::Result {
        let snapshot: RawSnapshot = serde_json::from_str(
            r#"{"end_time": "2025-06-01T12:30:00Z", "time": "2025-06-01T12:00:00Z"}"#,
        )?;
        assert_eq!(snapshot.timestamp(), Some("2025-06-01T12:30:00Z"));

        let snapshot: RawSnapshot = serde_json::from_str(r#"{"time": "2025-06-01"}"#)?;
        assert_eq!(snapshot.timestamp(), Some("2025-06-01"));
        Ok(())
    }

    #[test]
    fn malformed_timestamp_is_ignored() -> crate::prelude::Result {
        let snapshot: RawSnapshot = serde_json::from_str(r#"{"end_time": 17, "coal": 1}"#)?;
        assert_eq!(snapshot.timestamp(), None);
        assert_eq!(snapshot.reading("coal"), Reading::new(1.0));
        Ok(())
    }
}
