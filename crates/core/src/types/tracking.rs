//! Per-order tracking records and their resolved, customer-facing form.

use serde::{Deserialize, Serialize};

use super::id::ShipperId;

/// Trim each number and drop the ones left empty, keeping input order.
#[must_use]
pub fn sanitize_tracking_numbers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|n| n.as_ref().trim())
        .filter(|n| !n.is_empty())
        .map(String::from)
        .collect()
}

/// Tracking data stored against one order.
///
/// `tracking_numbers` is canonical. `legacy_tracking_number` mirrors its first
/// entry for readers that only understand a single number, and is the only
/// populated slot on records written before multi-number support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTrackingRecord {
    pub shipper_id: Option<ShipperId>,
    pub tracking_numbers: Option<Vec<String>>,
    pub legacy_tracking_number: Option<String>,
}

impl OrderTrackingRecord {
    /// Build the record to persist from submitted form values.
    ///
    /// Returns `None` when no number survives sanitizing, meaning the stored
    /// record should be cleared. Non-positive shipper IDs are dropped.
    #[must_use]
    pub fn from_input<S: AsRef<str>>(shipper_id: Option<ShipperId>, raw_numbers: &[S]) -> Option<Self> {
        let numbers = sanitize_tracking_numbers(raw_numbers);
        let primary = numbers.first()?.clone();

        Some(Self {
            shipper_id: shipper_id.filter(ShipperId::is_positive),
            tracking_numbers: Some(numbers),
            legacy_tracking_number: Some(primary),
        })
    }

    /// A record as written by the single-number version of the store.
    #[must_use]
    pub fn legacy(shipper_id: Option<ShipperId>, tracking_number: impl Into<String>) -> Self {
        Self {
            shipper_id,
            tracking_numbers: None,
            legacy_tracking_number: Some(tracking_number.into()),
        }
    }

    /// The effective tracking numbers.
    ///
    /// Falls back to the legacy slot when the list is absent or holds no
    /// non-blank entry.
    #[must_use]
    pub fn numbers(&self) -> Vec<String> {
        let numbers = self
            .tracking_numbers
            .as_deref()
            .map(sanitize_tracking_numbers)
            .unwrap_or_default();
        if !numbers.is_empty() {
            return numbers;
        }

        self.legacy_tracking_number
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(|n| vec![n.to_string()])
            .unwrap_or_default()
    }

    /// Shipper reference, ignoring non-positive IDs.
    #[must_use]
    pub fn shipper(&self) -> Option<ShipperId> {
        self.shipper_id.filter(ShipperId::is_positive)
    }
}

/// One tracking number and the link that tracks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingItem {
    pub tracking_number: String,
    pub tracking_url: String,
}

/// Tracking information ready for display.
///
/// Always derived from the current shipper and order record, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTracking {
    pub shipper_id: ShipperId,
    pub shipper_name: String,
    /// Links in the order the numbers were entered.
    pub items: Vec<TrackingItem>,
}

impl ResolvedTracking {
    /// The first tracking item.
    #[must_use]
    pub fn primary(&self) -> Option<&TrackingItem> {
        self.items.first()
    }

    #[must_use]
    pub fn tracking_numbers(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.tracking_number.as_str()).collect()
    }
}

/// Tracking state of an order for the admin order list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TrackingSummary {
    /// No shipper or no numbers attached.
    NoTracking,
    /// Numbers are attached but the referenced shipper no longer exists.
    InvalidShipper,
    Tracked(ResolvedTracking),
}

impl TrackingSummary {
    /// The resolved tracking, if any.
    #[must_use]
    pub const fn tracking(&self) -> Option<&ResolvedTracking> {
        match self {
            Self::Tracked(tracking) => Some(tracking),
            Self::NoTracking | Self::InvalidShipper => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_trims_and_drops_empty() {
        let numbers = sanitize_tracking_numbers(&[" AB1 ", "", "   ", "CD2", "\tEF3\n"]);
        assert_eq!(numbers, vec!["AB1", "CD2", "EF3"]);
    }

    #[test]
    fn test_sanitize_keeps_duplicates() {
        let numbers = sanitize_tracking_numbers(&["X1", "X1"]);
        assert_eq!(numbers, vec!["X1", "X1"]);
    }

    #[test]
    fn test_numbers_blank_list_falls_back_to_legacy() {
        let record = OrderTrackingRecord {
            shipper_id: Some(ShipperId::new(1)),
            tracking_numbers: Some(vec!["  ".to_string(), String::new()]),
            legacy_tracking_number: Some("L1".to_string()),
        };
        assert_eq!(record.numbers(), vec!["L1"]);
    }

    #[test]
    fn test_from_input_empty_is_none() {
        assert!(OrderTrackingRecord::from_input(Some(ShipperId::new(1)), &["", "  "]).is_none());
        assert!(OrderTrackingRecord::from_input::<&str>(None, &[]).is_none());
    }

    #[test]
    fn test_from_input_sets_legacy_from_first_kept_number() {
        let record =
            OrderTrackingRecord::from_input(Some(ShipperId::new(2)), &["  ", " AB1", "CD2"]).unwrap();
        assert_eq!(record.shipper_id, Some(ShipperId::new(2)));
        assert_eq!(
            record.tracking_numbers,
            Some(vec!["AB1".to_string(), "CD2".to_string()])
        );
        assert_eq!(record.legacy_tracking_number.as_deref(), Some("AB1"));
    }

    #[test]
    fn test_from_input_drops_non_positive_shipper() {
        let record = OrderTrackingRecord::from_input(Some(ShipperId::new(0)), &["AB1"]).unwrap();
        assert_eq!(record.shipper_id, None);
    }

    #[test]
    fn test_numbers_prefers_list() {
        let record = OrderTrackingRecord {
            shipper_id: None,
            tracking_numbers: Some(vec!["A".to_string(), "B".to_string()]),
            legacy_tracking_number: Some("OLD".to_string()),
        };
        assert_eq!(record.numbers(), vec!["A", "B"]);
    }

    #[test]
    fn test_numbers_falls_back_to_legacy() {
        let record = OrderTrackingRecord::legacy(Some(ShipperId::new(1)), " 1Z999 ");
        assert_eq!(record.numbers(), vec!["1Z999"]);

        let record = OrderTrackingRecord {
            tracking_numbers: Some(Vec::new()),
            ..OrderTrackingRecord::legacy(None, "1Z999")
        };
        assert_eq!(record.numbers(), vec!["1Z999"]);
    }

    #[test]
    fn test_numbers_empty_when_nothing_stored() {
        assert!(OrderTrackingRecord::default().numbers().is_empty());
        assert!(OrderTrackingRecord::legacy(None, "  ").numbers().is_empty());
    }

    #[test]
    fn test_primary_item() {
        let tracking = ResolvedTracking {
            shipper_id: ShipperId::new(1),
            shipper_name: "DHL".to_string(),
            items: vec![
                TrackingItem {
                    tracking_number: "A".to_string(),
                    tracking_url: "https://t/A".to_string(),
                },
                TrackingItem {
                    tracking_number: "B".to_string(),
                    tracking_url: "https://t/B".to_string(),
                },
            ],
        };
        assert_eq!(tracking.primary().unwrap().tracking_number, "A");
        assert_eq!(tracking.tracking_numbers(), vec!["A", "B"]);
    }

    #[test]
    fn test_summary_serializes_with_state_tag() {
        let json = serde_json::to_value(TrackingSummary::InvalidShipper).unwrap();
        assert_eq!(json["state"], "invalid_shipper");
        assert!(TrackingSummary::NoTracking.tracking().is_none());
    }
}
