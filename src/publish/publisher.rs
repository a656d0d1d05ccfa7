use tracing::{info, warn};

use crate::error::OpsError;
use crate::publish::supabase::SupabaseClient;
use crate::publish::template::MANUAL_STEPS;

/// Seam between the tier driver and the hosted backend, so the fallback
/// order can be exercised without a network.
#[allow(async_fn_in_trait)]
pub trait TemplateStore {
    async fn update_structured(&self) -> Result<(), OpsError>;
    async fn exec_raw(&self) -> Result<(), OpsError>;
}

/// Which tier finally landed the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Tier 1, the structured update, succeeded.
    Structured,
    /// Tier 2, the raw administrative batch, succeeded.
    RawSql,
    /// Both tiers failed; manual dashboard steps were emitted.
    Manual,
}

/// Run the tiers in order until one succeeds. Never returns an error: the
/// last tier is reporting manual instructions, which cannot fail.
pub async fn publish_with_fallback<S: TemplateStore>(store: &S) -> PublishOutcome {
    match store.update_structured().await {
        Ok(()) => {
            info!("email template updated via structured update");
            return PublishOutcome::Structured;
        }
        Err(e) => warn!(error = %e, "structured update failed, trying raw SQL"),
    }

    match store.exec_raw().await {
        Ok(()) => {
            info!("email template updated via raw SQL batch");
            return PublishOutcome::RawSql;
        }
        Err(e) => warn!(error = %e, "raw SQL execution failed"),
    }

    warn!("automated template update failed; manual steps required:");
    for step in MANUAL_STEPS {
        warn!("{step}");
    }
    PublishOutcome::Manual
}

/// Best-effort secondary concern: token lifetime and site URL. Failure is
/// informational only and never changes the process outcome.
pub async fn configure_auth_settings(client: &SupabaseClient, site_url: &str) {
    info!("configuring authentication settings");
    match client.update_auth_config(site_url).await {
        Ok(()) => info!("auth settings configured"),
        Err(e) => {
            info!(error = %e, "auth settings require manual configuration in the dashboard");
        }
    }
}
