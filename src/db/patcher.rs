use sqlx::{Connection, PgConnection};
use tracing::{info, warn};

use crate::db::patches::SchemaPatch;
use crate::error::OpsError;

/// Seam between the patch loop and the database, so per-patch error
/// isolation can be exercised without a live Postgres.
#[allow(async_fn_in_trait)]
pub trait StatementExecutor {
    async fn run_statement(&mut self, sql: &str) -> Result<(), OpsError>;
}

impl StatementExecutor for PgConnection {
    async fn run_statement(&mut self, sql: &str) -> Result<(), OpsError> {
        sqlx::query(sql).execute(&mut *self).await?;
        Ok(())
    }
}

/// Outcome of one patcher run. Skipped entries usually mean the column
/// already exists or a referenced table is missing; both are acceptable.
#[derive(Debug, Default)]
pub struct PatchReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl PatchReport {
    pub fn fully_applied(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Apply every patch in the plan, isolating failures per patch. A patch
/// that fails (missing prerequisite table, permission error) is logged
/// and skipped; the remaining patches still run.
pub async fn apply_patches<E: StatementExecutor>(
    exec: &mut E,
    plan: &[SchemaPatch],
) -> PatchReport {
    let mut report = PatchReport::default();
    for patch in plan {
        info!(patch = patch.name, "{}", patch.description);
        match apply_one(exec, patch).await {
            Ok(()) => {
                info!(patch = patch.name, "applied");
                report.applied.push(patch.name);
            }
            Err(e) => {
                warn!(
                    patch = patch.name,
                    error = %e,
                    "patch skipped; column may already exist or a referenced table is missing"
                );
                report.skipped.push(patch.name);
            }
        }
    }
    report
}

async fn apply_one<E: StatementExecutor>(
    exec: &mut E,
    patch: &SchemaPatch,
) -> Result<(), OpsError> {
    for stmt in patch.statements {
        exec.run_statement(stmt).await?;
    }
    Ok(())
}

pub struct SchemaPatcher {
    conn: PgConnection,
}

impl SchemaPatcher {
    /// Open the single connection used for the whole run.
    pub async fn connect(database_url: &str) -> Result<Self, OpsError> {
        let conn = PgConnection::connect(database_url).await?;
        Ok(Self { conn })
    }

    pub async fn apply(&mut self, plan: &[SchemaPatch]) -> PatchReport {
        apply_patches(&mut self.conn, plan).await
    }

    /// Release the connection. Called on every exit path.
    pub async fn close(self) -> Result<(), OpsError> {
        self.conn.close().await?;
        Ok(())
    }
}
