//! Shipper (carrier) records and their write-time validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ShipperId;
use super::status::ShipperStatus;
use crate::resolver::TRACKING_NUMBER_PLACEHOLDER;

/// Errors returned when a shipper fails validation on write.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The shipper name is empty.
    #[error("shipper name is required")]
    MissingName,
    /// The tracking URL template is empty.
    #[error("tracking URL is required")]
    MissingUrl,
    /// The tracking URL template has no `{tracking_number}` placeholder.
    #[error("tracking URL must contain the {{tracking_number}} placeholder")]
    MissingPlaceholder,
}

impl ValidationError {
    /// Name of the input field that failed validation.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingUrl | Self::MissingPlaceholder => "tracking_url",
        }
    }
}

/// A stored shipper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipper {
    pub id: ShipperId,
    /// Display name shown to customers.
    pub name: String,
    /// URL template containing `{tracking_number}`.
    pub tracking_url: String,
    pub status: ShipperStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shipper {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, ShipperStatus::Active)
    }
}

/// Fields submitted when creating or updating a shipper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipperInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tracking_url: String,
    #[serde(default)]
    pub status: ShipperStatus,
}

impl ShipperInput {
    /// Create an active shipper input.
    #[must_use]
    pub fn new(name: impl Into<String>, tracking_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracking_url: tracking_url.into(),
            status: ShipperStatus::Active,
        }
    }

    /// Set the status.
    #[must_use]
    pub const fn with_status(mut self, status: ShipperStatus) -> Self {
        self.status = status;
        self
    }

    /// Trim the text fields and validate them.
    ///
    /// Checks run in field order, so an input missing both name and URL
    /// reports [`ValidationError::MissingName`].
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let tracking_url = self.tracking_url.trim();
        if tracking_url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        if !tracking_url.contains(TRACKING_NUMBER_PLACEHOLDER) {
            return Err(ValidationError::MissingPlaceholder);
        }

        Ok(Self {
            name: name.to_string(),
            tracking_url: tracking_url.to_string(),
            status: self.status,
        })
    }
}

/// A carrier installed on first setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultShipper {
    pub name: &'static str,
    pub tracking_url: &'static str,
}

impl DefaultShipper {
    /// Convert into an active [`ShipperInput`].
    #[must_use]
    pub fn to_input(&self) -> ShipperInput {
        ShipperInput::new(self.name, self.tracking_url)
    }
}

/// Carriers seeded into an empty shipper table.
pub const DEFAULT_SHIPPERS: &[DefaultShipper] = &[
    DefaultShipper {
        name: "DHL",
        tracking_url: "https://www.dhl.com/en/express/tracking.html?AWB={tracking_number}",
    },
    DefaultShipper {
        name: "UPS",
        tracking_url: "https://www.ups.com/track?loc=en_US&tracknum={tracking_number}",
    },
    DefaultShipper {
        name: "FedEx",
        tracking_url: "https://www.fedex.com/fedextrack/?tracknumbers={tracking_number}",
    },
    DefaultShipper {
        name: "USPS",
        tracking_url: "https://tools.usps.com/go/TrackConfirmAction?qtc_tLabels1={tracking_number}",
    },
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "https://dhl.example/track?id={tracking_number}";

    #[test]
    fn test_missing_fields_deserialize_then_fail_validation() {
        let input: ShipperInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.validate(), Err(ValidationError::MissingName));

        let input: ShipperInput = serde_json::from_str(r#"{"name": "DHL"}"#).unwrap();
        assert_eq!(input.validate(), Err(ValidationError::MissingUrl));
    }

    #[test]
    fn test_validate_trims_fields() {
        let input = ShipperInput::new("  DHL ", format!(" {TEMPLATE}\n"))
            .validate()
            .unwrap();
        assert_eq!(input.name, "DHL");
        assert_eq!(input.tracking_url, TEMPLATE);
    }

    #[test]
    fn test_validate_missing_name() {
        let err = ShipperInput::new("   ", TEMPLATE).validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.field(), "name");
    }

    #[test]
    fn test_validate_missing_url() {
        let err = ShipperInput::new("DHL", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingUrl);
        assert_eq!(err.field(), "tracking_url");
    }

    #[test]
    fn test_validate_missing_placeholder() {
        for url in [
            "https://dhl.example/track",
            "https://dhl.example/track?id={tracking}",
            "https://dhl.example/track?id={TRACKING_NUMBER}",
        ] {
            let err = ShipperInput::new("DHL", url).validate().unwrap_err();
            assert_eq!(err, ValidationError::MissingPlaceholder, "{url}");
        }
    }

    #[test]
    fn test_validate_name_checked_first() {
        let err = ShipperInput::new("", "").validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
    }

    #[test]
    fn test_validate_keeps_status() {
        let input = ShipperInput::new("DHL", TEMPLATE)
            .with_status(ShipperStatus::Inactive)
            .validate()
            .unwrap();
        assert_eq!(input.status, ShipperStatus::Inactive);
    }

    #[test]
    fn test_input_status_defaults_to_active() {
        let input: ShipperInput =
            serde_json::from_str(r#"{"name":"DHL","tracking_url":"x"}"#).unwrap();
        assert_eq!(input.status, ShipperStatus::Active);
    }

    #[test]
    fn test_default_shippers_are_valid() {
        assert_eq!(DEFAULT_SHIPPERS.len(), 4);
        for shipper in DEFAULT_SHIPPERS {
            assert!(shipper.to_input().validate().is_ok(), "{}", shipper.name);
        }
    }
}
