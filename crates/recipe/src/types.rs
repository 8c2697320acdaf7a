use serde::{Deserialize, Deserializer, Serialize};

use crate::{Difficulty, estimate_difficulty};

/// Recipe as returned by the recipe API.
///
/// Field names follow the API payload so that responses decode verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_likes: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub vegetarian: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub vegan: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub gluten_free: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub dairy_free: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "nullable")]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl Recipe {
    /// Total number of steps across every instruction group.
    pub fn step_count(&self) -> usize {
        self.analyzed_instructions
            .iter()
            .map(|group| group.steps.len())
            .sum()
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.analyzed_instructions
            .iter()
            .flat_map(|group| group.steps.iter())
    }

    pub fn difficulty(&self) -> Difficulty {
        estimate_difficulty(
            self.extended_ingredients.len(),
            self.ready_in_minutes.unwrap_or_default(),
            self.step_count(),
        )
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<String>,
}

impl Ingredient {
    /// Case-insensitive key used to match the same ingredient across recipes.
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    /// The text shown to the user: the original line, or the bare name.
    pub fn display(&self) -> &str {
        if self.original.is_empty() {
            &self.name
        } else {
            &self.original
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InstructionGroup {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<Step>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub number: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub step: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "nullable")]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Nutrient {
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub unit: String,
}

// The API sends `null` for absent strings and lists as often as it omits them.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
