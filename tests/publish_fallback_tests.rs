use std::sync::atomic::{AtomicUsize, Ordering};

use studyflow_ops::OpsError;
use studyflow_ops::publish::{PublishOutcome, TemplateStore, publish_with_fallback};

/// In-memory store that records which tiers were attempted.
struct StubStore {
    structured_ok: bool,
    raw_ok: bool,
    structured_calls: AtomicUsize,
    raw_calls: AtomicUsize,
}

impl StubStore {
    fn new(structured_ok: bool, raw_ok: bool) -> Self {
        Self {
            structured_ok,
            raw_ok,
            structured_calls: AtomicUsize::new(0),
            raw_calls: AtomicUsize::new(0),
        }
    }

    fn tier_error() -> OpsError {
        OpsError::UnexpectedStatus {
            endpoint: "stub",
            status: reqwest::StatusCode::NOT_FOUND,
        }
    }
}

impl TemplateStore for StubStore {
    async fn update_structured(&self) -> Result<(), OpsError> {
        self.structured_calls.fetch_add(1, Ordering::SeqCst);
        if self.structured_ok {
            Ok(())
        } else {
            Err(Self::tier_error())
        }
    }

    async fn exec_raw(&self) -> Result<(), OpsError> {
        self.raw_calls.fetch_add(1, Ordering::SeqCst);
        if self.raw_ok {
            Ok(())
        } else {
            Err(Self::tier_error())
        }
    }
}

#[tokio::test]
async fn structured_success_never_reaches_raw_tier() {
    let store = StubStore::new(true, true);
    let outcome = publish_with_fallback(&store).await;
    assert_eq!(outcome, PublishOutcome::Structured);
    assert_eq!(store.structured_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.raw_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn structured_failure_falls_back_to_raw_tier() {
    let store = StubStore::new(false, true);
    let outcome = publish_with_fallback(&store).await;
    assert_eq!(outcome, PublishOutcome::RawSql);
    assert_eq!(store.structured_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.raw_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn both_tiers_failing_ends_in_manual_instructions() {
    let store = StubStore::new(false, false);
    let outcome = publish_with_fallback(&store).await;
    assert_eq!(outcome, PublishOutcome::Manual);
    assert_eq!(store.structured_calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.raw_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn each_tier_is_attempted_exactly_once_per_run() {
    let store = StubStore::new(false, false);
    let _ = publish_with_fallback(&store).await;
    let _ = publish_with_fallback(&store).await;
    // No retries within a run; two runs mean exactly two attempts per tier.
    assert_eq!(store.structured_calls.load(Ordering::SeqCst), 2);
    assert_eq!(store.raw_calls.load(Ordering::SeqCst), 2);
}
