use std::fmt::{Debug, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Telemetry reading which may be missing.
///
/// The feeds vary by time window, so any field may be absent, `null` or of an unexpected type.
/// All of those read as absent. Numeric strings are accepted.
#[must_use]
#[derive(Copy, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Reading(Option<f64>);

impl Reading {
    pub const ABSENT: Self = Self(None);

    pub const fn new(value: f64) -> Self {
        Self(Some(value))
    }

    #[must_use]
    pub const fn value(self) -> Option<f64> {
        self.0
    }

    /// Substitute zero for an absent reading.
    #[must_use]
    pub fn or_zero(self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    #[must_use]
    pub const fn is_absent(self) -> bool {
        self.0.is_none()
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Debug for Reading {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => Debug::fmt(&value, f),
            None => f.write_str("absent"),
        }
    }
}

impl<'de> Deserialize<'de> for Reading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(Self(value.filter(|value| value.is_finite())))
    }
}
