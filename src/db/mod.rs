//! Database module: the declarative patch plan and its executor.
//!
//! Layout:
//! - `patches.rs`: ordered list of idempotent DDL patches
//! - `patcher.rs`: single-connection executor with per-patch error isolation

pub mod patcher;
pub mod patches;

pub use patcher::{PatchReport, SchemaPatcher, StatementExecutor, apply_patches};
pub use patches::{PATCH_PLAN, SchemaPatch};
