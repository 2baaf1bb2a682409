//! Inventory domain module.
//!
//! Stocked ingredients and the food storage that owns them, implemented
//! purely as deterministic domain logic (no IO, no persistence).

pub mod ingredient;
pub mod storage;

pub use ingredient::{ExpirationStatus, Ingredient, MeasurementUnit};
pub use storage::{Inventory, StorageValuation};
