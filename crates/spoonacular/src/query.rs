use strum::{AsRefStr, EnumString, VariantArray};

pub const DEFAULT_SORT: &str = "max-used-ingredients";
pub const DEFAULT_MAX_READY_TIME: u32 = 60;
pub const SEARCH_RESULTS: u32 = 20;
pub const BROWSE_RESULTS: u32 = 12;

/// Dish types offered for browsing, as the API names them.
pub const CATEGORIES: [&str; 8] = [
    "breakfast",
    "lunch",
    "dinner",
    "dessert",
    "beverage",
    "soup",
    "snack",
    "bread",
];

#[derive(EnumString, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Diet {
    Vegetarian,
    Vegan,
    GlutenFree,
    Ketogenic,
    Paleo,
}

impl Diet {
    pub fn api_value(&self) -> &'static str {
        match self {
            Diet::Vegetarian => "vegetarian",
            Diet::Vegan => "vegan",
            Diet::GlutenFree => "gluten free",
            Diet::Ketogenic => "ketogenic",
            Diet::Paleo => "paleo",
        }
    }
}

/// Ingredient search against `complexSearch`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub ingredients: Vec<String>,
    pub number: u32,
    pub sort: String,
    pub max_ready_time: u32,
    pub diet: Option<Diet>,
    pub cuisine: Option<String>,
    pub intolerances: Vec<String>,
    pub equipment: Vec<String>,
}

impl SearchQuery {
    pub fn new(ingredients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            number: SEARCH_RESULTS,
            sort: DEFAULT_SORT.to_owned(),
            max_ready_time: DEFAULT_MAX_READY_TIME,
            diet: None,
            cuisine: None,
            intolerances: vec![],
            equipment: vec![],
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("includeIngredients", self.ingredients.join(",")),
            ("number", self.number.to_string()),
            ("addRecipeInformation", "true".to_owned()),
            ("fillIngredients", "true".to_owned()),
            ("sort", self.sort.to_owned()),
            ("maxReadyTime", self.max_ready_time.to_string()),
        ];

        if let Some(diet) = self.diet {
            params.push(("diet", diet.api_value().to_owned()));
        }

        if let Some(cuisine) = self.cuisine.as_deref().filter(|c| !c.is_empty()) {
            params.push(("cuisine", cuisine.to_lowercase()));
        }

        if !self.intolerances.is_empty() {
            params.push(("intolerances", self.intolerances.join(",")));
        }

        if !self.equipment.is_empty() {
            params.push(("equipment", self.equipment.join(",")));
        }

        params
    }
}
