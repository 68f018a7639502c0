//! Retry decision and selection policy.
//!
//! At most one stricter re-query per generate call. Both halves of the
//! policy are pure so the orchestrator stays a thin sequencing layer.

use replik_core::ParseResult;

/// A retry is justified only when best-effort splitting produced the first
/// result; structurally well-formed replies are final.
pub fn should_retry(first: &ParseResult) -> bool {
    !first.provenance.is_structured()
}

/// Pick between the first parse and the outcome of the single retry.
///
/// The retry wins only when its own parse was structured. A failed retry
/// call (`None`) or a still-heuristic retry parse is discarded; a degraded
/// but present suggestion set never gets worse.
pub fn select_result(first: ParseResult, retry: Option<ParseResult>) -> ParseResult {
    match retry {
        Some(second) if second.provenance.is_structured() => second,
        _ => first,
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
