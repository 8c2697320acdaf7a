use std::fs;

use larder_mealplan::{MealPlan, MealSlot, PlanDay, PlannedMeal};
use larder_shopping::ShoppingList;
use larder_store::{
    FAVORITES_FILE, Favorites, JsonStore, PREFERENCES_FILE, Preferences, SearchHistory, Theme,
};
use temp_dir::TempDir;

#[test]
fn test_missing_files_load_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let store = JsonStore::new(dir.path());

    assert!(store.load::<Favorites>().is_empty());
    assert!(store.load::<SearchHistory>().is_empty());
    assert!(store.load::<MealPlan>().is_empty());
    assert!(store.load::<ShoppingList>().is_empty());
    assert_eq!(store.load::<Preferences>(), Preferences::default());
}

#[test]
fn test_corrupt_file_loads_default() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(FAVORITES_FILE), "{not json")?;

    let store = JsonStore::new(dir.path());
    assert!(store.load::<Favorites>().is_empty());

    Ok(())
}

#[test]
fn test_save_overwrites_whole_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = JsonStore::new(dir.path().join("nested"));

    let mut favorites: Favorites = [1, 2, 3].into_iter().collect();
    store.save(&favorites)?;
    favorites.toggle(2);
    assert!(store.persist(&favorites));

    let raw = fs::read_to_string(store.path::<Favorites>())?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(value, serde_json::json!([1, 3]));
    assert_eq!(store.load::<Favorites>(), favorites);

    Ok(())
}

#[test]
fn test_meal_plan_survives_reload() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let store = JsonStore::new(dir.path());

    let mut plan = MealPlan::default();
    plan.assign(
        "2025-10-20".parse::<PlanDay>()?,
        MealSlot::Lunch,
        PlannedMeal {
            id: 7,
            title: "Salad".to_owned(),
            image: String::new(),
            ready_in_minutes: 15,
        },
    );
    store.save(&plan)?;

    assert_eq!(store.load::<MealPlan>(), plan);

    Ok(())
}

#[test]
fn test_persist_failure_is_reported() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "")?;

    // the data dir is a plain file, so nothing can be written below it
    let store = JsonStore::new(&blocker);
    assert!(!store.persist(&Favorites::default()));
    assert!(store.save(&Favorites::default()).is_err());

    Ok(())
}

#[test]
fn test_favorite_toggle_is_its_own_inverse() {
    let mut favorites: Favorites = [10, 20].into_iter().collect();
    let before = favorites.clone();

    assert!(favorites.toggle(30));
    assert!(favorites.contains(30));
    assert!(!favorites.toggle(30));
    assert_eq!(favorites, before);

    assert!(!favorites.toggle(10));
    assert!(favorites.toggle(10));
    assert_eq!(favorites.ids(), [20, 10]);
    assert_eq!(favorites.first(1), [20]);
    assert_eq!(favorites.first(5).len(), 2);
}

#[test]
fn test_history_keeps_ten_newest() {
    let mut history = SearchHistory::default();

    for n in 0..12 {
        assert!(history.record(&format!("item{n}")));
    }
    assert!(!history.record("item11"));
    assert!(!history.record("  "));

    let terms = history.terms();
    assert_eq!(terms.len(), 10);
    assert_eq!(terms[0], "item11");
    assert_eq!(terms[9], "item2");

    // an older term is not moved back to the front
    assert!(!history.record("item5"));
    assert_eq!(history.terms()[0], "item11");
}

#[test]
fn test_preferences_merge_over_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join(PREFERENCES_FILE),
        r#"{"theme": "dark", "advanced_filters": {"max_ready_time": 30}}"#,
    )?;

    let store = JsonStore::new(dir.path());
    let mut prefs = store.load::<Preferences>();

    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.advanced_filters.max_ready_time, 30);
    assert_eq!(prefs.advanced_filters.difficulty, "any");
    assert_eq!(prefs.advanced_filters.sort, "max-used-ingredients");

    assert_eq!(prefs.toggle_theme(), Theme::Light);
    assert_eq!("DARK".parse::<Theme>().ok(), Some(Theme::Dark));

    Ok(())
}
