//! Tracking link resolution.
//!
//! Turns a shipper's URL template plus raw tracking numbers into
//! customer-facing links. Pure functions only; no storage access.
//!
//! # Example
//!
//! ```rust
//! use order_tracking_core::resolver::tracking_url;
//!
//! let url = tracking_url("https://dhl.example/track?id={tracking_number}", "AB 123");
//! assert_eq!(url, "https://dhl.example/track?id=AB%20123");
//! ```

use crate::types::{ResolvedTracking, Shipper, TrackingItem};

/// Token replaced by the encoded tracking number.
pub const TRACKING_NUMBER_PLACEHOLDER: &str = "{tracking_number}";

/// Percent-encode a tracking number for use inside a URL component.
///
/// Only RFC 3986 unreserved characters pass through unchanged. Space becomes
/// `%20`; non-ASCII input is encoded byte by byte as UTF-8.
#[must_use]
pub fn encode_tracking_number(number: &str) -> String {
    urlencoding::encode(number).into_owned()
}

/// Substitute an encoded tracking number into a URL template.
///
/// Every occurrence of the placeholder is replaced. A template without the
/// placeholder comes back unchanged.
#[must_use]
pub fn tracking_url(template: &str, number: &str) -> String {
    template.replace(TRACKING_NUMBER_PLACEHOLDER, &encode_tracking_number(number))
}

/// Build one tracking item per number, in input order.
///
/// Duplicates are passed through.
#[must_use]
pub fn build_links<S: AsRef<str>>(shipper: &Shipper, numbers: &[S]) -> Vec<TrackingItem> {
    numbers
        .iter()
        .map(|number| {
            let number = number.as_ref();
            TrackingItem {
                tracking_number: number.to_string(),
                tracking_url: tracking_url(&shipper.tracking_url, number),
            }
        })
        .collect()
}

/// Resolve a shipper and its numbers into display-ready tracking.
#[must_use]
pub fn resolve<S: AsRef<str>>(shipper: &Shipper, numbers: &[S]) -> ResolvedTracking {
    ResolvedTracking {
        shipper_id: shipper.id,
        shipper_name: shipper.name.clone(),
        items: build_links(shipper, numbers),
    }
}
