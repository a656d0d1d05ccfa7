//! Runtime configuration, populated from the environment.
//!
//! Connection parameters and the service-role key are never embedded in
//! source; both binaries call [`Config::load`] after `dotenvy::dotenv()`.

use figment::providers::Env;
use figment::Figment;
use serde::Deserialize;
use url::Url;

use crate::error::OpsError;

fn default_supabase_url() -> Url {
    Url::parse("https://your-project.supabase.co").expect("default supabase url is valid")
}

fn default_site_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Postgres connection string for the schema patcher.
    pub database_url: Option<String>,

    /// Base URL of the Supabase project.
    #[serde(default = "default_supabase_url")]
    pub supabase_url: Url,

    /// Privileged key for the template publisher. Optional here; the
    /// publisher refuses to start without it.
    pub supabase_service_role_key: Option<String>,

    /// Site URL pushed into the auth configuration.
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// Fallback log level when RUST_LOG is unset.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

impl Config {
    pub fn load() -> Result<Self, OpsError> {
        let cfg = Figment::new()
            .merge(Env::raw().only(&[
                "DATABASE_URL",
                "SUPABASE_URL",
                "SUPABASE_SERVICE_ROLE_KEY",
                "SITE_URL",
            ]))
            .merge(Env::prefixed("STUDYFLOW_"))
            .extract()?;
        Ok(cfg)
    }

    /// The patcher needs a full connection string up front.
    pub fn require_database_url(&self) -> Result<&str, OpsError> {
        self.database_url
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(OpsError::MissingDatabaseUrl)
    }

    /// The publisher must not issue any network call without the key.
    pub fn require_service_role_key(&self) -> Result<&str, OpsError> {
        self.supabase_service_role_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(OpsError::MissingServiceRoleKey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_config() -> Config {
        Config {
            database_url: None,
            supabase_url: default_supabase_url(),
            supabase_service_role_key: None,
            site_url: default_site_url(),
            loglevel: default_loglevel(),
        }
    }

    #[test]
    fn missing_service_key_is_an_error() {
        let cfg = bare_config();
        assert!(matches!(
            cfg.require_service_role_key(),
            Err(OpsError::MissingServiceRoleKey)
        ));
    }

    #[test]
    fn empty_service_key_is_treated_as_missing() {
        let mut cfg = bare_config();
        cfg.supabase_service_role_key = Some(String::new());
        assert!(cfg.require_service_role_key().is_err());
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let cfg = bare_config();
        assert!(matches!(
            cfg.require_database_url(),
            Err(OpsError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn present_values_pass_through() {
        let mut cfg = bare_config();
        cfg.database_url = Some("postgres://localhost/studyflow".to_string());
        cfg.supabase_service_role_key = Some("service-role-key".to_string());
        assert_eq!(
            cfg.require_database_url().unwrap(),
            "postgres://localhost/studyflow"
        );
        assert_eq!(cfg.require_service_role_key().unwrap(), "service-role-key");
    }
}
