//! wedplan-core
//!
//! Selection ledger, budget aggregation, and the catalog/editor protocol.
//! Depends on wedplan-domain. No CLI, no terminal I/O, no direct file access.

pub mod catalog;
pub mod demo;
pub mod editor;
pub mod error;
pub mod format;
pub mod ids;
pub mod ledger;
pub mod storage;
pub mod summary_service;


pub use catalog::*;
pub use editor::*;
pub use error::CoreError;
pub use ids::generate_item_id;
pub use ledger::*;
pub use storage::*;
pub use summary_service::*;
