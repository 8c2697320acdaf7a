use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Nutrient, Recipe, format_amount};

/// Nutrients worth surfacing on a recipe detail view, in display order.
pub const KEY_NUTRIENTS: [&str; 8] = [
    "Calories",
    "Protein",
    "Carbohydrates",
    "Fat",
    "Fiber",
    "Sugar",
    "Sodium",
    "Cholesterol",
];

#[derive(EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq)]
#[strum(serialize_all = "kebab-case")]
pub enum SortOption {
    #[default]
    Popularity,
    HealthScore,
    CookingTime,
    Alphabetical,
}

/// Reorder an already fetched listing. Ties keep their original order.
pub fn sort_recipes(recipes: &mut [Recipe], option: SortOption) {
    match option {
        SortOption::Popularity => recipes.sort_by(|a, b| {
            b.aggregate_likes
                .unwrap_or_default()
                .cmp(&a.aggregate_likes.unwrap_or_default())
        }),
        SortOption::HealthScore => recipes.sort_by(|a, b| {
            b.health_score
                .unwrap_or_default()
                .total_cmp(&a.health_score.unwrap_or_default())
        }),
        SortOption::CookingTime => recipes.sort_by_key(|r| r.ready_in_minutes.unwrap_or(999)),
        SortOption::Alphabetical => recipes.sort_by_cached_key(|r| r.title.to_lowercase()),
    }
}

/// One-line summary such as `"45 min • 4 servings • Health: 12"`.
pub fn quick_info(recipe: &Recipe) -> String {
    let mut parts = Vec::with_capacity(3);

    if let Some(minutes) = recipe.ready_in_minutes {
        parts.push(format!("{minutes} min"));
    }

    if let Some(servings) = recipe.servings {
        parts.push(format!("{servings} servings"));
    }

    if let Some(score) = recipe.health_score.filter(|score| *score > 0.0) {
        parts.push(format!("Health: {}", format_amount(score)));
    }

    if parts.is_empty() {
        return "Recipe details".to_owned();
    }

    parts.join(" • ")
}

pub fn diet_tags(recipe: &Recipe) -> Vec<&'static str> {
    [
        (recipe.vegetarian, "Vegetarian"),
        (recipe.vegan, "Vegan"),
        (recipe.gluten_free, "Gluten Free"),
        (recipe.dairy_free, "Dairy Free"),
    ]
    .into_iter()
    .filter_map(|(flag, tag)| flag.then_some(tag))
    .collect()
}

/// The [`KEY_NUTRIENTS`] present on the recipe, in that order.
pub fn key_nutrients(recipe: &Recipe) -> Vec<&Nutrient> {
    let Some(nutrition) = &recipe.nutrition else {
        return vec![];
    };

    KEY_NUTRIENTS
        .iter()
        .filter_map(|name| nutrition.nutrients.iter().find(|n| n.name == *name))
        .collect()
}
