use mimalloc::MiMalloc;
use tracing::{error, info};

use studyflow_ops::publish::{SupabaseClient, configure_auth_settings, publish_with_fallback};
use studyflow_ops::{Config, logging};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    logging::init(&cfg.loglevel);

    // Fatal precondition: no network call may happen without the key.
    let service_role_key = match cfg.require_service_role_key() {
        Ok(key) => key.to_string(),
        Err(e) => {
            error!("{e}");
            error!("Please set the environment variable before running this command.");
            error!(r#"Example: SUPABASE_SERVICE_ROLE_KEY="your-key" publish-template"#);
            std::process::exit(1);
        }
    };

    info!("starting Study-Flow email configuration");

    let client = match SupabaseClient::new(cfg.supabase_url.clone(), service_role_key) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            return;
        }
    };

    let outcome = publish_with_fallback(&client).await;
    info!(outcome = ?outcome, subject = studyflow_ops::publish::template::CONFIRMATION_SUBJECT, "template publish finished");

    // Independent of the template tiers; runs even after a full fallback.
    configure_auth_settings(&client, &cfg.site_url).await;

    info!("configuration complete");
    info!("test by signing up at {}/auth", cfg.site_url);
}
