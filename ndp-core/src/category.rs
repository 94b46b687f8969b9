//! Disaster categories supported by the prediction service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A disaster category supported by the prediction service.
///
/// The labels match the keys of the prediction payload exactly, so
/// `Display`/`FromStr` round-trip the strings the service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisasterCategory {
    #[serde(rename = "Severe Storm")]
    SevereStorm,
    Hurricane,
    Flood,
    Fire,
    Tornado,
}

/// Error for a category label the service does not know.
#[derive(Debug, PartialEq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown disaster category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl DisasterCategory {
    /// All supported categories, in display order.
    pub const ALL: [DisasterCategory; 5] = [
        DisasterCategory::SevereStorm,
        DisasterCategory::Hurricane,
        DisasterCategory::Flood,
        DisasterCategory::Fire,
        DisasterCategory::Tornado,
    ];

    /// The payload key / display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            DisasterCategory::SevereStorm => "Severe Storm",
            DisasterCategory::Hurricane => "Hurricane",
            DisasterCategory::Flood => "Flood",
            DisasterCategory::Fire => "Fire",
            DisasterCategory::Tornado => "Tornado",
        }
    }

    /// Plural form used in the welcome panel's category list.
    pub fn plural_label(&self) -> &'static str {
        match self {
            DisasterCategory::SevereStorm => "Severe Storms",
            DisasterCategory::Hurricane => "Hurricanes",
            DisasterCategory::Flood => "Floods",
            DisasterCategory::Fire => "Fires",
            DisasterCategory::Tornado => "Tornadoes",
        }
    }
}

impl Default for DisasterCategory {
    fn default() -> Self {
        DisasterCategory::SevereStorm
    }
}

impl fmt::Display for DisasterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisasterCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisasterCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for category in DisasterCategory::ALL {
            let parsed: DisasterCategory = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Earthquake".parse::<DisasterCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("Earthquake".to_string()));
    }

    #[test]
    fn default_is_severe_storm() {
        assert_eq!(DisasterCategory::default(), DisasterCategory::SevereStorm);
    }

    #[test]
    fn serde_uses_payload_keys() {
        let json = serde_json::to_string(&DisasterCategory::SevereStorm).unwrap();
        assert_eq!(json, "\"Severe Storm\"");
        let json = serde_json::to_string(&DisasterCategory::Tornado).unwrap();
        assert_eq!(json, "\"Tornado\"");
    }
}
