//! Status enums for shippers.

use serde::{Deserialize, Serialize};

/// Whether a shipper can be picked when attaching tracking to an order.
///
/// Inactive shippers are hidden from the selection list but still resolve
/// for orders that already reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipperStatus {
    #[default]
    Active,
    Inactive,
}

impl ShipperStatus {
    /// The persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ShipperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShipperStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid shipper status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_active() {
        assert_eq!(ShipperStatus::default(), ShipperStatus::Active);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for status in [ShipperStatus::Active, ShipperStatus::Inactive] {
            let parsed: ShipperStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("archived".parse::<ShipperStatus>().is_err());
        assert!("Active".parse::<ShipperStatus>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&ShipperStatus::Inactive).unwrap();
        assert_eq!(json, "\"inactive\"");
    }
}
