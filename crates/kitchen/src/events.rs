use chrono::{DateTime, Utc};
use serde::Serialize;

use larder_events::Event;
use larder_inventory::MeasurementUnit;

/// Event: IngredientConsumed (a recipe used part of a stocked ingredient).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientConsumed {
    pub recipe: String,
    pub ingredient: String,
    pub amount: f64,
    pub unit: MeasurementUnit,
    pub remaining: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: IngredientExhausted (stock reached exactly zero and was removed).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientExhausted {
    pub recipe: String,
    pub ingredient: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: RecipeCooked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCooked {
    pub recipe: String,
    pub servings: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ExpiredIngredientDiscarded (removed by a purge).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiredIngredientDiscarded {
    pub ingredient: String,
    pub unit_price: f64,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum KitchenEvent {
    IngredientConsumed(IngredientConsumed),
    IngredientExhausted(IngredientExhausted),
    RecipeCooked(RecipeCooked),
    ExpiredIngredientDiscarded(ExpiredIngredientDiscarded),
}

impl Event for KitchenEvent {
    fn event_type(&self) -> &'static str {
        match self {
            KitchenEvent::IngredientConsumed(_) => "kitchen.ingredient.consumed",
            KitchenEvent::IngredientExhausted(_) => "kitchen.ingredient.exhausted",
            KitchenEvent::RecipeCooked(_) => "kitchen.recipe.cooked",
            KitchenEvent::ExpiredIngredientDiscarded(_) => "kitchen.ingredient.discarded",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            KitchenEvent::IngredientConsumed(e) => e.occurred_at,
            KitchenEvent::IngredientExhausted(e) => e.occurred_at,
            KitchenEvent::RecipeCooked(e) => e.occurred_at,
            KitchenEvent::ExpiredIngredientDiscarded(e) => e.occurred_at,
        }
    }
}
