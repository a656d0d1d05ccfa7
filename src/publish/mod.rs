//! Template publisher: pushes the confirmation email template and auth
//! configuration to the hosted backend with tiered fallback.

pub mod publisher;
pub mod supabase;
pub mod template;

pub use publisher::{PublishOutcome, TemplateStore, configure_auth_settings, publish_with_fallback};
pub use supabase::SupabaseClient;
