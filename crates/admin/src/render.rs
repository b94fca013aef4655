//! Rendering of resolved tracking for customer pages, emails and the admin list.
//!
//! Uses Askama templates from `templates/tracking/`. HTML templates escape
//! shipper names and tracking numbers; the plain text email does not.

use askama::Template;

use order_tracking_core::{EmailContext, ResolvedTracking, TrackingSummary};

/// Tracking section of the customer order detail page.
#[derive(Template)]
#[template(path = "tracking/order_details.html")]
struct OrderDetailsHtml<'a> {
    tracking: &'a ResolvedTracking,
}

/// Tracking block for HTML emails (inline styles only).
#[derive(Template)]
#[template(path = "tracking/email.html")]
struct TrackingEmailHtml<'a> {
    tracking: &'a ResolvedTracking,
}

/// Tracking block for plain text emails.
#[derive(Template)]
#[template(path = "tracking/email.txt")]
struct TrackingEmailText<'a> {
    tracking: &'a ResolvedTracking,
}

/// Tracking cell of the admin order list.
#[derive(Template)]
#[template(path = "tracking/column.html")]
struct TrackingColumnHtml<'a> {
    summary: &'a TrackingSummary,
}

/// Render the order detail page section.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_order_details(tracking: &ResolvedTracking) -> askama::Result<String> {
    OrderDetailsHtml { tracking }.render()
}

/// Render the HTML email block.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_email_html(tracking: &ResolvedTracking) -> askama::Result<String> {
    TrackingEmailHtml { tracking }.render()
}

/// Render the plain text email block.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_email_text(tracking: &ResolvedTracking) -> askama::Result<String> {
    TrackingEmailText { tracking }.render()
}

/// Render the email block in the format the email asks for.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_email(tracking: &ResolvedTracking, email: &EmailContext) -> askama::Result<String> {
    if email.plain_text {
        render_email_text(tracking)
    } else {
        render_email_html(tracking)
    }
}

/// Render the admin order list cell.
///
/// # Errors
///
/// Returns error if the template fails to render.
pub fn render_summary_column(summary: &TrackingSummary) -> askama::Result<String> {
    TrackingColumnHtml { summary }.render()
}
