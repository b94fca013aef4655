//! Rules for where resolved tracking is shown to customers.

use serde::{Deserialize, Serialize};

/// Identifier of the transactional email that carries tracking details.
pub const CUSTOMER_COMPLETED_ORDER_EMAIL: &str = "customer_completed_order";

/// Store-wide display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Show tracking on the customer's order detail page.
    pub show_in_order_details: bool,
    /// Add tracking to the completed-order email.
    pub show_in_emails: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_in_order_details: true,
            show_in_emails: true,
        }
    }
}

/// The email being rendered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContext {
    pub email_id: String,
    /// The copy is addressed to the store admin.
    #[serde(default)]
    pub sent_to_admin: bool,
    /// Render as plain text instead of HTML.
    #[serde(default)]
    pub plain_text: bool,
}

impl EmailContext {
    /// Customer completed-order email in the given format.
    #[must_use]
    pub fn completed_order(plain_text: bool) -> Self {
        Self {
            email_id: CUSTOMER_COMPLETED_ORDER_EMAIL.to_string(),
            sent_to_admin: false,
            plain_text,
        }
    }
}

impl DisplaySettings {
    #[must_use]
    pub const fn include_in_order_details(&self) -> bool {
        self.show_in_order_details
    }

    /// Tracking goes only into the customer's copy of the completed-order email.
    #[must_use]
    pub fn include_in_email(&self, email: &EmailContext) -> bool {
        self.show_in_emails
            && !email.sent_to_admin
            && email.email_id == CUSTOMER_COMPLETED_ORDER_EMAIL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_show_everywhere() {
        let settings = DisplaySettings::default();
        assert!(settings.include_in_order_details());
        assert!(settings.include_in_email(&EmailContext::completed_order(false)));
    }

    #[test]
    fn test_email_disabled() {
        let settings = DisplaySettings {
            show_in_emails: false,
            ..DisplaySettings::default()
        };
        assert!(!settings.include_in_email(&EmailContext::completed_order(true)));
    }

    #[test]
    fn test_admin_copy_excluded() {
        let email = EmailContext {
            sent_to_admin: true,
            ..EmailContext::completed_order(false)
        };
        assert!(!DisplaySettings::default().include_in_email(&email));
    }

    #[test]
    fn test_other_emails_excluded() {
        let email = EmailContext {
            email_id: "customer_processing_order".to_string(),
            sent_to_admin: false,
            plain_text: false,
        };
        assert!(!DisplaySettings::default().include_in_email(&email));
    }

    #[test]
    fn test_order_details_disabled() {
        let settings = DisplaySettings {
            show_in_order_details: false,
            show_in_emails: true,
        };
        assert!(!settings.include_in_order_details());
    }
}
