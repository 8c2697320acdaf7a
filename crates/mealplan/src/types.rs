use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use larder_recipe::Recipe;
use larder_shared::{days_from, format_date, parse_date};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::Date;

/// Minutes assumed when the API does not report a ready time.
pub const DEFAULT_READY_MINUTES: u32 = 30;

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

/// A calendar day in the plan, stored as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlanDay(pub Date);

impl fmt::Display for PlanDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_date(self.0))
    }
}

impl FromStr for PlanDay {
    type Err = larder_shared::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_date(s)?))
    }
}

impl From<Date> for PlanDay {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Serialize for PlanDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PlanDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}

/// The part of a recipe kept in the plan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlannedMeal {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "readyInMinutes", default = "default_ready_minutes")]
    pub ready_in_minutes: u32,
}

fn default_ready_minutes() -> u32 {
    DEFAULT_READY_MINUTES
}

impl From<&Recipe> for PlannedMeal {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.to_owned(),
            image: recipe.image.clone().unwrap_or_default(),
            ready_in_minutes: recipe.ready_in_minutes.unwrap_or(DEFAULT_READY_MINUTES),
        }
    }
}

pub type DayMeals = BTreeMap<MealSlot, PlannedMeal>;

/// Date → slot → meal. Days without any meal are not stored.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<PlanDay, DayMeals>,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn get(&self, day: PlanDay) -> Option<&DayMeals> {
        self.days.get(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (&PlanDay, &DayMeals)> {
        self.days.iter()
    }

    /// Put `meal` in a single slot, returning whatever it replaced.
    pub fn assign(
        &mut self,
        day: PlanDay,
        slot: MealSlot,
        meal: PlannedMeal,
    ) -> Option<PlannedMeal> {
        self.days.entry(day).or_default().insert(slot, meal)
    }

    pub fn remove(&mut self, day: PlanDay, slot: MealSlot) -> Option<PlannedMeal> {
        let meals = self.days.get_mut(&day)?;
        let removed = meals.remove(&slot);

        if meals.is_empty() {
            self.days.remove(&day);
        }

        removed
    }

    /// Replace whole days, leaving the rest of the plan as it was.
    pub fn overwrite(&mut self, days: BTreeMap<PlanDay, DayMeals>) {
        self.days.extend(days);
    }

    /// Distinct recipe ids referenced anywhere in the plan.
    pub fn recipe_ids(&self) -> BTreeSet<u64> {
        self.days
            .values()
            .flat_map(|meals| meals.values().map(|meal| meal.id))
            .collect()
    }

    /// Seven consecutive days from `start`, with the meals planned for each.
    pub fn week(&self, start: Date) -> larder_shared::Result<Vec<(PlanDay, Option<&DayMeals>)>> {
        let week = days_from(start, 7)?
            .into_iter()
            .map(PlanDay)
            .map(|day| (day, self.days.get(&day)))
            .collect();

        Ok(week)
    }
}
