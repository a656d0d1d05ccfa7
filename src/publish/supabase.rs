use std::time::Duration;

use serde_json::{Value, json};
use url::Url;

use crate::error::OpsError;
use crate::publish::publisher::TemplateStore;
use crate::publish::template::{CONFIRMATION_HTML, CONFIRMATION_SUBJECT, TEMPLATE_NAME};

/// Token lifetime pushed into auth config, in seconds (10 minutes).
pub const JWT_EXP_SECONDS: u64 = 600;

/// Batch statement for the raw-SQL escape hatch. The HTML body is bound as
/// `$1`, never interpolated. The `exec` RPC is a historical hack and is not
/// expected to exist on most deployments; callers must treat failure as
/// routine.
const RAW_BATCH_SQL: &str = r#"
UPDATE auth.config
SET
    jwt_exp = 600,
    refresh_token_rotation_enabled = true;

UPDATE auth.email_templates
SET
    subject = 'Welcome to Study-Flow - Confirm Your Email 📚',
    content = $1
WHERE template_name = 'confirmation';
"#;

/// Thin client over the hosted backend's REST surface. Holds the privileged
/// key; constructing one requires the key to already be validated.
pub struct SupabaseClient {
    http: reqwest::Client,
    base: Url,
    service_role_key: String,
}

impl SupabaseClient {
    pub fn new(base: Url, service_role_key: String) -> Result<Self, OpsError> {
        let http = reqwest::Client::builder()
            .user_agent("studyflow-ops/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            base,
            service_role_key,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, OpsError> {
        Ok(self.base.join(path)?)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.bearer_auth(&self.service_role_key)
            .header("apikey", &self.service_role_key)
    }

    /// Best-effort auth configuration update (token lifetime, site URL).
    /// Independent of the template tiers.
    pub async fn update_auth_config(&self, site_url: &str) -> Result<(), OpsError> {
        let url = self.endpoint("/rest/v1/rpc/update_auth_config")?;
        let resp = self
            .authed(self.http.post(url))
            .json(&auth_config_body(site_url))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OpsError::UnexpectedStatus {
                endpoint: "rpc/update_auth_config",
                status,
            });
        }
        Ok(())
    }
}

impl TemplateStore for SupabaseClient {
    /// Tier 1: structured update-by-filter against the template table.
    async fn update_structured(&self) -> Result<(), OpsError> {
        let mut url = self.endpoint("/rest/v1/auth.email_templates")?;
        url.set_query(Some(&format!("template_name=eq.{TEMPLATE_NAME}")));
        let resp = self
            .authed(self.http.patch(url))
            .json(&structured_update_body())
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OpsError::UnexpectedStatus {
                endpoint: "auth.email_templates",
                status,
            });
        }
        Ok(())
    }

    /// Tier 2: raw administrative batch through the `exec` RPC.
    async fn exec_raw(&self) -> Result<(), OpsError> {
        let url = self.endpoint("/rest/v1/rpc/exec")?;
        let resp = self
            .authed(self.http.post(url))
            .json(&exec_rpc_body())
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OpsError::UnexpectedStatus {
                endpoint: "rpc/exec",
                status,
            });
        }
        Ok(())
    }
}

fn structured_update_body() -> Value {
    json!({
        "subject": CONFIRMATION_SUBJECT,
        "content": CONFIRMATION_HTML,
    })
}

fn exec_rpc_body() -> Value {
    json!({
        "query": RAW_BATCH_SQL,
        "params": [CONFIRMATION_HTML],
    })
}

fn auth_config_body(site_url: &str) -> Value {
    json!({
        "config_updates": {
            "JWT_EXP": JWT_EXP_SECONDS,
            "SITE_URL": site_url,
            "EXTERNAL_EMAIL_ENABLED": true,
        }
    })
}
