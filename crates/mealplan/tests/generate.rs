use std::collections::BTreeSet;

use larder_mealplan::{
    DayMeals, MAX_PLAN_RECIPES, MealPlan, MealSlot, PLAN_DAYS, PlanDay, PlannedMeal,
    generate_week,
};
use larder_recipe::Recipe;
use strum::VariantArray;
use time::macros::date;

fn meal(id: u64) -> PlannedMeal {
    PlannedMeal {
        id,
        title: format!("recipe {id}"),
        image: String::new(),
        ready_in_minutes: 30,
    }
}

fn slot_ids(plan: &MealPlan, day: PlanDay) -> Vec<u64> {
    plan.get(day)
        .map(|meals| meals.values().map(|m| m.id).collect())
        .unwrap_or_default()
}

fn day_ids(meals: &DayMeals) -> Vec<Option<u64>> {
    MealSlot::VARIANTS
        .iter()
        .map(|slot| meals.get(slot).map(|m| m.id))
        .collect()
}

#[test]
fn test_every_day_gets_the_same_meals() -> anyhow::Result<()> {
    let week = generate_week(date!(2025 - 10 - 20), &[meal(1), meal(2)])?;

    assert_eq!(week.len(), PLAN_DAYS);
    for meals in week.values() {
        assert_eq!(day_ids(meals), [Some(1), Some(2), None]);
    }

    let single = generate_week(date!(2025 - 10 - 20), &[meal(5)])?;
    for meals in single.values() {
        assert_eq!(day_ids(meals), [Some(5), None, None]);
    }

    Ok(())
}

#[test]
fn test_first_day_is_start_and_days_are_consecutive() -> anyhow::Result<()> {
    let week = generate_week(date!(2025 - 12 - 29), &[meal(9)])?;

    let days: Vec<String> = week.keys().map(ToString::to_string).collect();
    assert_eq!(
        days,
        [
            "2025-12-29",
            "2025-12-30",
            "2025-12-31",
            "2026-01-01",
            "2026-01-02",
            "2026-01-03",
            "2026-01-04"
        ]
    );

    Ok(())
}

#[test]
fn test_only_one_meal_per_slot_is_used() -> anyhow::Result<()> {
    let meals: Vec<_> = (1..=MAX_PLAN_RECIPES as u64).map(meal).collect();
    let week = generate_week(date!(2025 - 10 - 20), &meals)?;

    let used: BTreeSet<u64> = week
        .values()
        .flat_map(|meals| meals.values().map(|m| m.id))
        .collect();

    assert_eq!(used.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

    Ok(())
}

#[test]
fn test_week_past_the_calendar_is_rejected() {
    let mut plan = MealPlan::default();
    let start = date!(9999 - 12 - 27);

    assert!(generate_week(start, &[meal(1)]).is_err());
    assert!(plan.auto_generate(start, &[meal(1)]).is_err());
    assert!(plan.is_empty());
    assert!(plan.week(start).is_err());
    assert_eq!(plan.week(date!(9999 - 12 - 25)).map(|w| w.len()).ok(), Some(7));
}

#[test]
fn test_no_meals_is_a_noop() -> anyhow::Result<()> {
    let mut plan = MealPlan::default();
    plan.assign(PlanDay(date!(2025 - 10 - 21)), MealSlot::Dinner, meal(5));
    let before = plan.clone();

    assert_eq!(plan.auto_generate(date!(2025 - 10 - 20), &[])?, 0);
    assert_eq!(plan, before);

    Ok(())
}

#[test]
fn test_generation_overwrites_only_its_days() -> anyhow::Result<()> {
    let mut plan = MealPlan::default();
    let kept = PlanDay(date!(2025 - 10 - 19));
    let replaced = PlanDay(date!(2025 - 10 - 21));
    plan.assign(kept, MealSlot::Lunch, meal(40));
    plan.assign(replaced, MealSlot::Lunch, meal(41));

    let written = plan.auto_generate(date!(2025 - 10 - 20), &[meal(1), meal(2), meal(3)])?;

    assert_eq!(written, 7);
    assert_eq!(plan.len(), 8);
    assert_eq!(slot_ids(&plan, kept), [40]);
    assert_eq!(slot_ids(&plan, replaced), [1, 2, 3]);

    Ok(())
}

#[test]
fn test_assign_and_remove() {
    let mut plan = MealPlan::default();
    let day = PlanDay(date!(2025 - 10 - 20));

    assert_eq!(plan.assign(day, MealSlot::Dinner, meal(1)), None);
    assert_eq!(plan.assign(day, MealSlot::Dinner, meal(2)), Some(meal(1)));
    plan.assign(day, MealSlot::Breakfast, meal(3));
    assert_eq!(slot_ids(&plan, day), [3, 2]);

    assert_eq!(plan.remove(day, MealSlot::Dinner), Some(meal(2)));
    assert_eq!(plan.remove(day, MealSlot::Breakfast), Some(meal(3)));
    assert!(plan.is_empty());
    assert_eq!(plan.remove(day, MealSlot::Lunch), None);
}

#[test]
fn test_recipe_ids_and_week_view() -> anyhow::Result<()> {
    let mut plan = MealPlan::default();
    plan.auto_generate(date!(2025 - 10 - 20), &[meal(1), meal(2)])?;
    plan.assign(PlanDay(date!(2025 - 11 - 30)), MealSlot::Lunch, meal(8));

    assert_eq!(plan.recipe_ids().into_iter().collect::<Vec<_>>(), [1, 2, 8]);

    let week = plan.week(date!(2025 - 10 - 24))?;
    assert_eq!(week.len(), 7);
    assert!(week[0].1.is_some());
    assert!(week[2].1.is_some());
    assert!(week[3].1.is_none());

    Ok(())
}

#[test]
fn test_file_format() -> anyhow::Result<()> {
    let json = r#"{
        "2025-10-20": {
            "breakfast": {"id": 1, "title": "Oats", "image": "", "readyInMinutes": 10},
            "dinner": {"id": 2, "title": "Soup"}
        }
    }"#;

    let plan: MealPlan = serde_json::from_str(json)?;
    let day: PlanDay = "2025-10-20".parse()?;
    let meals = plan.get(day).expect("day decoded");

    assert_eq!(meals[&MealSlot::Breakfast].ready_in_minutes, 10);
    assert_eq!(meals[&MealSlot::Dinner].ready_in_minutes, 30);

    let value = serde_json::to_value(&plan)?;
    assert_eq!(value["2025-10-20"]["dinner"]["readyInMinutes"], 30);
    assert!(serde_json::from_str::<MealPlan>(r#"{"20/10/2025": {}}"#).is_err());

    Ok(())
}

#[test]
fn test_planned_meal_from_recipe() {
    let recipe = Recipe {
        id: 12,
        title: "Curry".to_owned(),
        image: Some("curry.jpg".to_owned()),
        ..Default::default()
    };

    let planned = PlannedMeal::from(&recipe);
    assert_eq!(planned.image, "curry.jpg");
    assert_eq!(planned.ready_in_minutes, 30);
    assert_eq!("DINNER".parse::<MealSlot>().ok(), Some(MealSlot::Dinner));
}
