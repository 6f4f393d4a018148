//! Single-flight and cooldown control for feed refreshes.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Minimum spacing between accepted refreshes.
pub const FETCH_COOLDOWN: Duration = Duration::from_millis(1000);

/// Gate admitting at most one refresh at a time and at most one per
/// cooldown window. A rejected call is dropped, not queued; the caller
/// retries whenever it next cares.
///
/// Owned by the client value; independent clients never share guard state.
#[derive(Debug)]
pub struct FetchGuard {
    in_progress: AtomicBool,
    /// Milliseconds since `started` of the last accepted fetch, offset by
    /// one so zero means "never". Only ever advanced, never cleared.
    last_fetch_ms: AtomicU64,
    started: Instant,
    cooldown: Duration,
}

impl FetchGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            in_progress: AtomicBool::new(false),
            last_fetch_ms: AtomicU64::new(0),
            started: Instant::now(),
            cooldown,
        }
    }

    /// Try to claim the fetch slot. On success the caller must pair this
    /// with [`FetchGuard::end`] on every exit path.
    pub fn try_begin(&self) -> bool {
        let now_ms = self.started.elapsed().as_millis() as u64 + 1;
        let last_ms = self.last_fetch_ms.load(Ordering::Acquire);
        if last_ms != 0 && now_ms.saturating_sub(last_ms) < self.cooldown.as_millis() as u64 {
            return false;
        }
        if self.in_progress.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.last_fetch_ms.store(now_ms, Ordering::Release);
        true
    }

    /// Release the slot after a fetch finishes, however it finished.
    pub fn end(&self) {
        self.in_progress.store(false, Ordering::Release);
    }

    /// Disconnect teardown: a fetch abandoned mid-flight must not wedge the
    /// next session. The cooldown clock is left alone.
    pub fn reset_in_progress(&self) {
        self.in_progress.store(false, Ordering::Release);
    }
}
