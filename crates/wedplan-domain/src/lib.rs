//! wedplan-domain
//!
//! Pure domain models for the wedding budget planner (categories, selected
//! items, catalog entries, budget summaries).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod catalog;
pub mod category;
pub mod common;
pub mod item;
pub mod summary;

pub use catalog::*;
pub use category::*;
pub use common::*;
pub use item::*;
pub use summary::*;
