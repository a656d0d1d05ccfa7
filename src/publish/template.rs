//! Content of the transactional confirmation email.
//!
//! The HTML body lives in `templates/confirmation.html` so designers can
//! edit it without touching Rust source; it is embedded at compile time.

pub const TEMPLATE_NAME: &str = "confirmation";

pub const CONFIRMATION_SUBJECT: &str = "Welcome to Study-Flow - Confirm Your Email 📚";

pub const CONFIRMATION_HTML: &str = include_str!("../../templates/confirmation.html");

/// Dashboard steps emitted when every automated tier has failed.
pub const MANUAL_STEPS: &[&str] = &[
    "1. Go to Supabase Dashboard -> Authentication -> Email Templates",
    "2. Update the \"Confirm signup\" template with the content from templates/confirmation.html",
    "3. Set subject to: \"Welcome to Study-Flow - Confirm Your Email 📚\"",
    "4. Go to Authentication -> Settings and set OTP expiry to 600 seconds",
];
