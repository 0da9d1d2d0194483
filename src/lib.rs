#![doc(test(attr(deny(warnings))))]

//! Wedding budget planner: an interactive shell over the selection ledger,
//! catalog editors, and budget summary provided by the `wedplan-*` crates.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("wedding budget tracing initialized");
    });
}
