use derive_more::Display;
use serde::Deserialize;

use crate::{api::Api, core::snapshot::RawSnapshot, prelude::*};

/// Time window of the telemetry.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq, clap::ValueEnum)]
pub enum Window {
    /// Latest reading.
    #[display("live")]
    Live,

    /// Last entry of the past day, with half-hourly trends.
    #[display("day")]
    Day,

    /// Past week aggregate, with daily trends.
    #[display("week")]
    Week,
}

impl Window {
    const fn snapshot_path(self) -> &'static str {
        match self {
            Self::Live => "grid-api/grid_live/",
            Self::Day => "grid-api/grid_day/",
            Self::Week => "grid-api/grid_week/",
        }
    }

    /// Series which the trends are drawn from.
    const fn trend_path(self) -> Option<&'static str> {
        match self {
            Self::Live => None,
            Self::Day => Some("grid-api/grid_halfhours/"),
            Self::Week => Some("grid-api/grid_day/"),
        }
    }

    /// The trend series spans several days.
    #[must_use]
    pub const fn has_compact_ticks(self) -> bool {
        matches!(self, Self::Week)
    }
}

/// Endpoints return either a single snapshot or a series of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Series(Vec<RawSnapshot>),
    Single(Box<RawSnapshot>),
}

impl Payload {
    fn into_latest(self) -> Option<RawSnapshot> {
        match self {
            Self::Series(series) => series.into_iter().next_back(),
            Self::Single(snapshot) => Some(*snapshot),
        }
    }

    fn into_series(self) -> Vec<RawSnapshot> {
        match self {
            Self::Series(series) => series,
            Self::Single(snapshot) => vec![*snapshot],
        }
    }
}

impl Api {
    #[instrument(skip_all, fields(window = %window))]
    pub async fn get_snapshot(&self, window: Window) -> Result<RawSnapshot> {
        let snapshot = self
            .get::<Payload>(window.snapshot_path(), &[])
            .await?
            .into_latest()
            .with_context(|| format!("the `{window}` series is empty"))?;
        info!(total_generation = ?snapshot.total_generation, "fetched the snapshot");
        Ok(snapshot)
    }

    /// Fetch the trend series of the window, empty for the live window.
    #[instrument(skip_all, fields(window = %window))]
    pub async fn get_trend_series(&self, window: Window) -> Result<Vec<RawSnapshot>> {
        let Some(path) = window.trend_path() else {
            return Ok(Vec::new());
        };
        let series = self.get::<Payload>(path, &[]).await?.into_series();
        info!(len = series.len(), "fetched the trend series");
        Ok(series)
    }
}
