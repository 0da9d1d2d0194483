//! Identifier generation for entries created at runtime.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use wedplan_domain::ItemId;

static LAST_ISSUED: AtomicU64 = AtomicU64::new(0);

/// Returns a millisecond-timestamp id, bumped past the last issued value so
/// ids handed out by this process strictly increase.
pub fn generate_item_id() -> ItemId {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut current = LAST_ISSUED.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(current.saturating_add(1));
        match LAST_ISSUED.compare_exchange_weak(
            current,
            candidate,
            Ordering::SeqCst,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate,
            Err(observed) => current = observed,
        }
    }
}
