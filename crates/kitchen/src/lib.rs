//! Reconciliation engine: cross-references the food storage and the cookbook.
//!
//! Operations are synchronous request/response calls over a single-owner
//! [`Kitchen`]; there is no locking and no background work.

pub mod config;
pub mod events;
pub mod kitchen;
pub mod report;

pub use config::KitchenConfig;
pub use events::{
    ExpiredIngredientDiscarded, IngredientConsumed, IngredientExhausted, KitchenEvent,
    RecipeCooked,
};
pub use kitchen::Kitchen;
pub use report::{CookOutcome, CookabilityReport, PurgeReport, Shortfall};
