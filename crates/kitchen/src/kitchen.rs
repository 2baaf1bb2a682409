use indexmap::IndexMap;

use larder_cookbook::{Cookbook, Recipe};
use larder_core::{Clock, DomainResult, SystemClock};
use larder_events::EventJournal;
use larder_inventory::{Inventory, StorageValuation};

use crate::config::KitchenConfig;
use crate::events::{
    ExpiredIngredientDiscarded, IngredientConsumed, IngredientExhausted, KitchenEvent,
    RecipeCooked,
};
use crate::report::{CookOutcome, CookabilityReport, PurgeReport, Shortfall};

/// The household kitchen: owns the food storage and the cookbook and
/// reconciles one against the other.
///
/// "Today" comes from the kitchen's [`Clock`].
#[derive(Debug)]
pub struct Kitchen<C = SystemClock> {
    inventory: Inventory,
    cookbook: Cookbook,
    clock: C,
    config: KitchenConfig,
    journal: EventJournal<KitchenEvent>,
}

impl Kitchen<SystemClock> {
    /// Empty kitchen on the wall clock with default configuration.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Kitchen<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Kitchen<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::from_parts(Inventory::new(), Cookbook::new(), clock)
    }

    /// Build a kitchen around an existing storage and cookbook.
    pub fn from_parts(inventory: Inventory, cookbook: Cookbook, clock: C) -> Self {
        Self {
            inventory,
            cookbook,
            clock,
            config: KitchenConfig::default(),
            journal: EventJournal::new(),
        }
    }

    pub fn with_config(mut self, config: KitchenConfig) -> Self {
        self.config = config;
        self
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn cookbook(&self) -> &Cookbook {
        &self.cookbook
    }

    pub fn cookbook_mut(&mut self) -> &mut Cookbook {
        &mut self.cookbook
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> KitchenConfig {
        self.config
    }

    /// Events recorded during this session, oldest first.
    pub fn journal(&self) -> &EventJournal<KitchenEvent> {
        &self.journal
    }

    /// Check every requirement of `recipe` against the storage.
    ///
    /// For each requirement: not stocked is `missing`; stocked but expired is
    /// `expired` (even when also short); enough stock is `ready`; otherwise
    /// `short` with the signed deficit `stocked - required`. The recipe is
    /// cookable iff every requirement is ready.
    pub fn check_cookable(&self, recipe: &Recipe) -> CookabilityReport {
        let today = self.clock.today();
        let mut ready = Vec::new();
        let mut missing = Vec::new();
        let mut expired = Vec::new();
        let mut short = IndexMap::new();

        for requirement in recipe.requirements() {
            let name = requirement.name();
            let Some(stocked) = self.inventory.all().get(name) else {
                missing.push(name.to_string());
                continue;
            };

            if stocked.is_expired_on(today) {
                expired.push(name.to_string());
            } else if requirement.quantity() <= stocked.quantity() {
                ready.push(name.to_string());
            } else {
                short.insert(
                    name.to_string(),
                    Shortfall {
                        amount: stocked.quantity() - requirement.quantity(),
                        unit: requirement.unit(),
                    },
                );
            }
        }

        let cookable = ready.len() == recipe.requirement_count();
        tracing::debug!(
            recipe = recipe.name(),
            cookable,
            missing = missing.len(),
            expired = expired.len(),
            short = short.len(),
            "checked cookability"
        );

        CookabilityReport {
            recipe: recipe.name().to_string(),
            cookable,
            ready,
            missing,
            expired,
            short,
        }
    }

    /// Cook `recipe`, consuming each requirement from the storage.
    ///
    /// Only name presence is checked up front: if any required ingredient is
    /// not stocked, nothing is touched and `MissingIngredients` is returned.
    /// Expiration and quantity are not checked. Ingredients whose stock reaches
    /// exactly zero are removed.
    ///
    /// Consumption is applied ingredient by ingredient with no rollback: if a
    /// later requirement exceeds its stock, the error is returned and the
    /// earlier ingredients stay consumed.
    pub fn cook(&mut self, recipe: &Recipe) -> DomainResult<CookOutcome> {
        let missing: Vec<String> = recipe
            .requirements()
            .filter(|r| !self.inventory.contains(r.name()))
            .map(|r| r.name().to_string())
            .collect();
        if !missing.is_empty() {
            tracing::warn!(recipe = recipe.name(), ?missing, "recipe missing ingredient");
            return Ok(CookOutcome::MissingIngredients {
                recipe: recipe.name().to_string(),
                missing,
            });
        }

        let occurred_at = self.clock.now();
        let mut events = Vec::new();
        let mut exhausted = Vec::new();

        for requirement in recipe.requirements() {
            let name = requirement.name();
            // Requirement names are unique and were all present above.
            let Some(stocked) = self.inventory.get_mut(name)? else {
                continue;
            };

            if let Err(err) = stocked.consume(requirement.quantity()) {
                tracing::warn!(
                    recipe = recipe.name(),
                    ingredient = name,
                    error = %err,
                    "cook aborted partway; earlier ingredients stay consumed"
                );
                self.record(events);
                return Err(err);
            }

            let remaining = stocked.quantity();
            events.push(KitchenEvent::IngredientConsumed(IngredientConsumed {
                recipe: recipe.name().to_string(),
                ingredient: name.to_string(),
                amount: requirement.quantity(),
                unit: requirement.unit(),
                remaining,
                occurred_at,
            }));

            if remaining == 0.0 {
                self.inventory.remove(name)?;
                tracing::info!(recipe = recipe.name(), ingredient = name, "ran out of ingredient");
                exhausted.push(name.to_string());
                events.push(KitchenEvent::IngredientExhausted(IngredientExhausted {
                    recipe: recipe.name().to_string(),
                    ingredient: name.to_string(),
                    occurred_at,
                }));
            }
        }

        events.push(KitchenEvent::RecipeCooked(RecipeCooked {
            recipe: recipe.name().to_string(),
            servings: recipe.servings(),
            occurred_at,
        }));
        self.record(events);
        tracing::info!(recipe = recipe.name(), ?exhausted, "recipe has been made");

        Ok(CookOutcome::Cooked {
            recipe: recipe.name().to_string(),
            exhausted,
        })
    }

    /// Cook a recipe from the cookbook by name; `Ok(None)` if it is not there.
    pub fn cook_by_name(&mut self, name: &str) -> DomainResult<Option<CookOutcome>> {
        let Some(recipe) = self.cookbook.get(name)?.cloned() else {
            return Ok(None);
        };
        self.cook(&recipe).map(Some)
    }

    /// Check a recipe from the cookbook by name; `Ok(None)` if it is not there.
    pub fn check_cookable_by_name(&self, name: &str) -> DomainResult<Option<CookabilityReport>> {
        Ok(self
            .cookbook
            .get(name)?
            .map(|recipe| self.check_cookable(recipe)))
    }

    /// Names of cookbook recipes whose every required ingredient is stocked.
    ///
    /// Presence only: quantity and expiration are ignored, so a suggested
    /// recipe may still fail [`Kitchen::check_cookable`].
    pub fn suggest_cookable(&self) -> Vec<String> {
        self.cookbook
            .iter()
            .filter(|recipe| {
                let stocked = recipe
                    .requirements()
                    .filter(|r| self.inventory.contains(r.name()))
                    .count();
                stocked == recipe.requirement_count()
            })
            .map(|recipe| recipe.name().to_string())
            .collect()
    }

    /// Remove every expired ingredient and total their unit prices.
    pub fn purge_expired(&mut self) -> PurgeReport {
        let today = self.clock.today();
        let occurred_at = self.clock.now();
        let discarded = self.inventory.drain_where(|i| i.is_expired_on(today));

        let mut removed = Vec::with_capacity(discarded.len());
        let mut total_value = 0.0;
        let mut events = Vec::with_capacity(discarded.len());
        for ingredient in discarded {
            let unit_price = ingredient.unit_price();
            total_value += unit_price;
            tracing::info!(ingredient = ingredient.name(), unit_price, "removed expired ingredient");
            events.push(KitchenEvent::ExpiredIngredientDiscarded(
                ExpiredIngredientDiscarded {
                    ingredient: ingredient.name().to_string(),
                    unit_price,
                    occurred_at,
                },
            ));
            removed.push(ingredient.name().to_string());
        }
        self.record(events);

        PurgeReport {
            removed,
            total_value,
        }
    }

    /// Storage value today, split into expired and valid goods.
    pub fn valuation(&self) -> StorageValuation {
        self.inventory.valuation_on(self.clock.today())
    }

    fn record(&mut self, events: Vec<KitchenEvent>) {
        if self.config.record_events && !events.is_empty() {
            self.journal.append(events);
        }
    }
}
