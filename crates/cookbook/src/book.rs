use indexmap::IndexMap;

use larder_core::DomainResult;
use larder_core::input::normalize_text;
use larder_core::name::validate_lookup_key;

use crate::recipe::Recipe;

/// The household recipe book: recipes keyed by canonical name.
///
/// Unlike [`larder_inventory::Inventory::add`], `add` here replaces an
/// existing recipe with the same name; callers check `contains` first when
/// they want to keep the original.
#[derive(Debug, Clone, Default)]
pub struct Cookbook {
    recipes: IndexMap<String, Recipe>,
}

impl Cookbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a recipe, replacing (and returning) any recipe with the same name.
    ///
    /// A replaced recipe keeps its original position in iteration order.
    pub fn add(&mut self, recipe: Recipe) -> Option<Recipe> {
        let replaced = self.recipes.insert(recipe.name().to_string(), recipe);
        if let Some(old) = &replaced {
            tracing::debug!(name = old.name(), "recipe replaced in cookbook");
        }
        replaced
    }

    /// Look up a recipe by canonical name; missing is `Ok(None)`.
    pub fn get(&self, name: &str) -> DomainResult<Option<&Recipe>> {
        validate_lookup_key(name, "recipe name")?;
        Ok(self.recipes.get(name))
    }

    /// Remove a recipe by name; removing an unknown name is a no-op.
    pub fn remove(&mut self, name: &str) -> DomainResult<Option<Recipe>> {
        validate_lookup_key(name, "recipe name")?;
        Ok(self.recipes.shift_remove(name))
    }

    /// Look up by loosely typed text (whitespace collapsed, canonicalized).
    pub fn search(&self, query: &str) -> DomainResult<Option<&Recipe>> {
        let name = normalize_text(query)?;
        Ok(self.recipes.get(&name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    /// Recipes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// Read-only view of the whole book.
    pub fn all(&self) -> &IndexMap<String, Recipe> {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cookbook {
    type Item = &'a Recipe;
    type IntoIter = indexmap::map::Values<'a, String, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.values()
    }
}
