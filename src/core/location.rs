use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::{core::reading::Reading, fmt::PLACEHOLDER};

/// Site coordinates in degrees.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub latitude: Reading,

    #[serde(default)]
    pub longitude: Reading,
}

impl Location {
    /// Both coordinates are reported and non-zero. The API sends zeros for the unknown ones.
    #[must_use]
    pub fn is_known(self) -> bool {
        matches!(
            (self.latitude.value(), self.longitude.value()),
            (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0
        )
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.latitude.value(), self.longitude.value()) {
            (Some(latitude), Some(longitude)) if self.is_known() => {
                write!(f, "{latitude:.4}, {longitude:.4}")
            }
            _ => f.write_str(PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(json: &str) -> Location {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn known_ok() {
        let location = location(r#"{"latitude": "53.3617", "longitude": -0.8114}"#);
        assert!(location.is_known());
        assert_eq!(location.to_string(), "53.3617, -0.8114");
    }

    #[test]
    fn zero_or_missing_is_unknown() {
        assert!(!location(r#"{"latitude": 0, "longitude": -0.8}"#).is_known());
        assert!(!location(r#"{"latitude": 51.5, "longitude": "0.0"}"#).is_known());
        assert!(!location(r#"{"latitude": 51.5, "longitude": null}"#).is_known());
        assert!(!location("{}").is_known());
        assert_eq!(location("{}").to_string(), "–");
    }
}
