use std::collections::BTreeMap;

use larder_shared::days_from;
use strum::VariantArray;
use time::Date;

use crate::{DayMeals, MealPlan, MealSlot, PlanDay, PlannedMeal};

/// Favorites considered when generating a plan.
pub const MAX_PLAN_RECIPES: usize = 7;

/// Days covered by one generated plan.
pub const PLAN_DAYS: usize = 7;

/// Plan [`PLAN_DAYS`] days starting at `start`.
///
/// Every day gets the same meals in slot order: the first meal is breakfast,
/// the second lunch, the third dinner. Slots without a meal stay empty, so
/// with meals `[a, b]` each day is `a, b` and no dinner. No meals means no
/// days.
pub fn generate_week(
    start: Date,
    meals: &[PlannedMeal],
) -> larder_shared::Result<BTreeMap<PlanDay, DayMeals>> {
    if meals.is_empty() {
        return Ok(BTreeMap::new());
    }

    let day_meals: DayMeals = MealSlot::VARIANTS
        .iter()
        .copied()
        .zip(meals.iter().cloned())
        .collect();

    let days = days_from(start, PLAN_DAYS)?
        .into_iter()
        .map(|date| (PlanDay(date), day_meals.clone()))
        .collect();

    Ok(days)
}

impl MealPlan {
    /// Generate a week from `start` and overwrite those days in the plan.
    ///
    /// Returns the number of days written, zero when `meals` is empty.
    /// The plan is left untouched when the week runs past the calendar.
    pub fn auto_generate(
        &mut self,
        start: Date,
        meals: &[PlannedMeal],
    ) -> larder_shared::Result<usize> {
        let week = generate_week(start, meals)?;
        let written = week.len();

        self.overwrite(week);

        tracing::info!(
            days = written,
            recipes = meals.len().min(MAX_PLAN_RECIPES),
            "meal plan generated"
        );

        Ok(written)
    }
}
