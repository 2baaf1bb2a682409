//! Structured results of reconciliation operations.
//!
//! These are business outcomes, not errors: a presentation layer renders them.

use core::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use larder_inventory::MeasurementUnit;

/// How far a stocked quantity falls below a requirement.
///
/// `amount` is `stocked - required`, so it is negative for a real deficit.
/// Display prints the amount with `f64` formatting followed by the unit
/// label, so whole amounts carry no fraction: `-2Unit`, not `-2.0Unit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shortfall {
    pub amount: f64,
    pub unit: MeasurementUnit,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

/// Per-ingredient verdict of a cookability check.
///
/// Each requirement lands in exactly one of `ready`, `missing`, `expired`
/// or `short`. An ingredient that is both expired and short is `expired`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CookabilityReport {
    pub recipe: String,
    pub cookable: bool,
    pub ready: Vec<String>,
    pub missing: Vec<String>,
    pub expired: Vec<String>,
    pub short: IndexMap<String, Shortfall>,
}

/// Result of a cook attempt that did not violate a contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CookOutcome {
    /// Every requirement was consumed; `exhausted` lists ingredients that hit
    /// zero and were removed from storage.
    Cooked {
        recipe: String,
        exhausted: Vec<String>,
    },
    /// At least one required ingredient is not stocked; nothing was touched.
    MissingIngredients {
        recipe: String,
        missing: Vec<String>,
    },
}

impl CookOutcome {
    pub fn is_cooked(&self) -> bool {
        matches!(self, CookOutcome::Cooked { .. })
    }
}

/// Result of discarding expired ingredients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurgeReport {
    pub removed: Vec<String>,
    /// Sum of the removed ingredients' unit prices.
    pub total_value: f64,
}
