use indexmap::IndexMap;
use serde::Serialize;

use larder_core::name::validate_text;
use larder_core::{DomainError, DomainResult, Entity};
use larder_inventory::Ingredient;

/// A named dish and the ingredients it requires.
///
/// Requirements are keyed by the canonical ingredient name, which is the
/// join key against stocked ingredients. Recipes are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    name: String,
    description: String,
    instructions: String,
    servings: u32,
    requirements: IndexMap<String, Ingredient>,
}

impl Recipe {
    /// Build a recipe from its text fields and required ingredients.
    ///
    /// Text fields must be non-blank and are canonicalized. `servings` must be
    /// positive, at least one requirement must be given, and requirement names
    /// must be unique. Only name, quantity and unit of each requirement matter.
    pub fn new(
        name: &str,
        description: &str,
        instructions: &str,
        servings: u32,
        requirements: impl IntoIterator<Item = Ingredient>,
    ) -> DomainResult<Self> {
        let name = validate_text(name, "recipe name")?;
        let description = validate_text(description, "recipe description")?;
        let instructions = validate_text(instructions, "recipe instructions")?;
        if servings == 0 {
            return Err(DomainError::validation(
                "recipe servings cannot be negative or zero",
            ));
        }

        let mut map = IndexMap::new();
        for requirement in requirements {
            let key = requirement.name().to_string();
            if map.contains_key(&key) {
                return Err(DomainError::validation(format!(
                    "recipe lists {key} more than once"
                )));
            }
            map.insert(key, requirement);
        }
        if map.is_empty() {
            return Err(DomainError::validation("recipe doesn't contain ingredients"));
        }

        Ok(Self {
            name,
            description,
            instructions,
            servings,
            requirements: map,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    /// Required ingredients in the order they were given.
    pub fn requirements(&self) -> impl Iterator<Item = &Ingredient> + '_ {
        self.requirements.values()
    }

    pub fn requirement(&self, name: &str) -> Option<&Ingredient> {
        self.requirements.get(name)
    }

    pub fn requirement_count(&self) -> usize {
        self.requirements.len()
    }

    /// Read-only view of all requirements keyed by name.
    pub fn requirement_map(&self) -> &IndexMap<String, Ingredient> {
        &self.requirements
    }
}

impl Entity for Recipe {
    type Id = str;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
