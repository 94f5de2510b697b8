use crate::core::{reading::Reading, snapshot::RawSnapshot};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Metric {
    Price,
    Emissions,
}

impl Metric {
    pub const ALL: [Self; 2] = [Self::Price, Self::Emissions];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Price => "Price (APX) £/MWh",
            Self::Emissions => "Emissions gCO₂/kWh",
        }
    }

    pub const fn read(self, snapshot: &RawSnapshot) -> Reading {
        match self {
            Self::Price => snapshot.price,
            Self::Emissions => snapshot.emissions,
        }
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    /// Timestamp as sent by the API.
    pub time: Option<String>,

    pub value: Reading,
}

/// One metric over a series of snapshots, in the order of the series.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct Trend {
    pub metric: Metric,

    /// Show the date next to the time, for the series spanning several days.
    pub compact_ticks: bool,

    pub points: Vec<TrendPoint>,
}

impl Trend {
    pub fn new(metric: Metric, series: &[RawSnapshot], compact_ticks: bool) -> Self {
        let points = series
            .iter()
            .map(|snapshot| TrendPoint {
                time: snapshot.timestamp().map(ToOwned::to_owned),
                value: metric.read(snapshot),
            })
            .collect();
        Self { metric, compact_ticks, points }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn trend_ok() -> Result {
        // language=json
        let series: Vec<RawSnapshot> = serde_json::from_str(
            r#"[
                {"end_time": "2025-06-01T12:00:00Z", "price": 70.0, "emissions": 150.0},
                {"end_time": "2025-06-01T12:30:00Z", "price": null, "emissions": 149.5},
                {"time": "2025-06-01T13:00:00Z", "price": 68.25}
            ]"#,
        )?;
        let trend = Trend::new(Metric::Price, &series, false);
        assert_eq!(trend.points.len(), 3);
        assert_eq!(trend.points[0].time.as_deref(), Some("2025-06-01T12:00:00Z"));
        assert_eq!(trend.points[0].value, Reading::new(70.0));
        assert!(trend.points[1].value.is_absent());
        assert_eq!(trend.points[2].time.as_deref(), Some("2025-06-01T13:00:00Z"));

        let trend = Trend::new(Metric::Emissions, &series, false);
        assert_eq!(trend.points[1].value, Reading::new(149.5));
        assert!(trend.points[2].value.is_absent());
        Ok(())
    }

    #[test]
    fn empty_series() {
        assert!(Trend::new(Metric::Price, &[], true).is_empty());
    }
}
