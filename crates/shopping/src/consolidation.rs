use std::collections::HashMap;

use larder_recipe::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};

/// Aisle used when the API does not tag an ingredient.
pub const DEFAULT_AISLE: &str = "Other";

/// One line of the shopping list.
///
/// `count` is the number of times the ingredient was mentioned across the
/// contributing recipes. Amounts are never summed: "2 cups milk" and
/// "100 ml milk" consolidate into one `milk` line with a count of 2.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShoppingListItem {
    pub name: String,
    #[serde(default)]
    pub original: String,
    #[serde(default = "default_aisle")]
    pub aisle: String,
    #[serde(default)]
    pub recipes: Vec<String>,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingListItem {
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    fn first_seen(recipe_title: &str, ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.to_owned(),
            original: ingredient.original.to_owned(),
            aisle: ingredient
                .aisle
                .as_deref()
                .filter(|aisle| !aisle.is_empty())
                .unwrap_or(DEFAULT_AISLE)
                .to_owned(),
            recipes: vec![recipe_title.to_owned()],
            count: 1,
            checked: false,
        }
    }
}

fn default_aisle() -> String {
    DEFAULT_AISLE.to_owned()
}

fn default_count() -> u32 {
    1
}

/// Ingredients of several recipes merged by lowercase name.
///
/// The first mention of an ingredient decides its display name, original
/// text and aisle. Later mentions only bump the count and record the recipe.
/// Items iterate in first-seen order.
#[derive(Debug, Default, Clone)]
pub struct Consolidation {
    items: Vec<ShoppingListItem>,
    index: HashMap<String, usize>,
}

impl Consolidation {
    pub fn get(&self, name: &str) -> Option<&ShoppingListItem> {
        self.index
            .get(&name.trim().to_lowercase())
            .map(|pos| &self.items[*pos])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShoppingListItem> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<ShoppingListItem> {
        self.items
    }

    fn add(&mut self, recipe_title: &str, ingredient: &Ingredient) {
        let key = ingredient.key();
        if key.is_empty() {
            return;
        }

        if let Some(pos) = self.index.get(&key) {
            let existing = &mut self.items[*pos];
            existing.recipes.push(recipe_title.to_owned());
            existing.count += 1;
            return;
        }

        self.index.insert(key, self.items.len());
        self.items
            .push(ShoppingListItem::first_seen(recipe_title, ingredient));
    }
}

pub fn consolidate<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Consolidation {
    let mut consolidation = Consolidation::default();

    for recipe in recipes {
        for ingredient in &recipe.extended_ingredients {
            consolidation.add(&recipe.title, ingredient);
        }
    }

    tracing::debug!(items = consolidation.len(), "ingredients consolidated");

    consolidation
}
