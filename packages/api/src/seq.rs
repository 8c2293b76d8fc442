//! # Request sequencing — deterministic latest-wins for overlapping fetches
//!
//! There is no cancellation: a view that fires two fetches in quick
//! succession (say, a filter changed twice) may see them settle in either
//! order. [`RequestSeq`] hands each dispatch a token from a monotonically
//! increasing sequence; when a response settles, the view applies it only
//! if its token [`is_current`](RequestSeq::is_current) — so the most
//! recently *issued* request wins, regardless of settlement order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic sequence of request tokens for one view's fetches.
///
/// Clones share the sequence, so the token captured by a spawned fetch and
/// the sequence the view checks against are the same counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

/// Token identifying one dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqToken(u64);

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the token for a request about to be dispatched. Every issue
    /// stales all previously issued tokens.
    pub fn begin(&self) -> SeqToken {
        SeqToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a settled response is still the one to apply. `false` means
    /// a newer request was issued meanwhile: discard the response.
    pub fn is_current(&self, token: SeqToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_request_is_current() {
        let seq = RequestSeq::new();
        let token = seq.begin();
        assert!(seq.is_current(token));
    }

    #[test]
    fn test_newer_request_stales_older_token() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // The slow first response settles after the second was issued:
        // discard it, apply the second.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = RequestSeq::new();
        let token = seq.begin();

        let in_task = seq.clone();
        assert!(in_task.is_current(token));

        seq.begin();
        assert!(!in_task.is_current(token));
    }
}
