pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod publish;

pub use config::Config;
pub use error::OpsError;
