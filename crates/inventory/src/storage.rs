use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use larder_core::input::normalize_text;
use larder_core::name::validate_lookup_key;
use larder_core::{Clock, DomainResult, SystemClock};

use crate::ingredient::Ingredient;

/// The household food storage: stocked ingredients keyed by canonical name.
///
/// Iteration follows insertion order. The storage is single-owner and
/// unsynchronized; mutating it while another borrow iterates is rejected by
/// the borrow checker, and removal during traversal goes through
/// [`Inventory::drain_where`].
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    ingredients: IndexMap<String, Ingredient>,
}

/// Value of the storage split by expiration, summed over `unit_price()`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StorageValuation {
    pub valid_total: f64,
    pub expired_total: f64,
    pub total: f64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock an ingredient.
    ///
    /// If an ingredient with the same name is already stocked, the existing
    /// record is kept and `ingredient` is discarded. Returns whether the
    /// ingredient was inserted.
    pub fn add(&mut self, ingredient: Ingredient) -> bool {
        if self.ingredients.contains_key(ingredient.name()) {
            tracing::debug!(name = ingredient.name(), "ingredient already stocked; add ignored");
            return false;
        }
        self.ingredients
            .insert(ingredient.name().to_string(), ingredient);
        true
    }

    /// Look up a stocked ingredient by canonical name.
    ///
    /// A missing ingredient is `Ok(None)`; only a blank name is an error.
    pub fn get(&self, name: &str) -> DomainResult<Option<&Ingredient>> {
        validate_lookup_key(name, "ingredient name")?;
        Ok(self.ingredients.get(name))
    }

    /// Mutable lookup, for restocking or using an ingredient directly.
    pub fn get_mut(&mut self, name: &str) -> DomainResult<Option<&mut Ingredient>> {
        validate_lookup_key(name, "ingredient name")?;
        Ok(self.ingredients.get_mut(name))
    }

    /// Remove and return a stocked ingredient, if present.
    pub fn remove(&mut self, name: &str) -> DomainResult<Option<Ingredient>> {
        validate_lookup_key(name, "ingredient name")?;
        let removed = self.ingredients.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name, "ingredient removed from storage");
        }
        Ok(removed)
    }

    /// Look up by loosely typed text (whitespace collapsed, canonicalized).
    pub fn search(&self, query: &str) -> DomainResult<Option<&Ingredient>> {
        let name = normalize_text(query)?;
        Ok(self.ingredients.get(&name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains_key(name)
    }

    /// Stocked ingredients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }

    /// Remove every ingredient matching `predicate`, returning them in order.
    ///
    /// The remaining ingredients keep their relative order.
    pub fn drain_where<F>(&mut self, mut predicate: F) -> Vec<Ingredient>
    where
        F: FnMut(&Ingredient) -> bool,
    {
        let (removed, kept): (IndexMap<_, _>, IndexMap<_, _>) =
            std::mem::take(&mut self.ingredients)
                .into_iter()
                .partition(|(_, ingredient)| predicate(ingredient));
        self.ingredients = kept;
        removed.into_values().collect()
    }

    /// Read-only view of the whole storage.
    pub fn all(&self) -> &IndexMap<String, Ingredient> {
        &self.ingredients
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Storage value on `today`, split into expired and still-valid goods.
    pub fn valuation_on(&self, today: NaiveDate) -> StorageValuation {
        let (mut valid_total, mut expired_total) = (0.0, 0.0);
        for ingredient in self.iter() {
            if ingredient.is_expired_on(today) {
                expired_total += ingredient.unit_price();
            } else {
                valid_total += ingredient.unit_price();
            }
        }
        StorageValuation {
            valid_total,
            expired_total,
            total: valid_total + expired_total,
        }
    }

    /// Storage value relative to the local calendar date.
    pub fn valuation(&self) -> StorageValuation {
        self.valuation_on(SystemClock.today())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Ingredient;
    type IntoIter = indexmap::map::Values<'a, String, Ingredient>;

    fn into_iter(self) -> Self::IntoIter {
        self.ingredients.values()
    }
}
