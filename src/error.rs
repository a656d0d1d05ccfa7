use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum OpsError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,

    #[error("SUPABASE_SERVICE_ROLE_KEY environment variable is not set")]
    MissingServiceRoleKey,

    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
}

impl From<figment::Error> for OpsError {
    fn from(e: figment::Error) -> Self {
        OpsError::Config(Box::new(e))
    }
}
