use larder_mealplan::{MealPlan, MealSlot};
use larder_recipe::{Ingredient, Instructions, Recipe, diet_tags, format_amount, key_nutrients, quick_info};
use larder_shared::format_date;
use larder_shopping::ShoppingList;
use larder_store::{Favorites, Preferences, SearchHistory};
use strum::VariantArray;
use time::Date;

pub fn listing(recipes: &[Recipe], favorites: &Favorites) {
    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }

    for recipe in recipes {
        let marker = if favorites.contains(recipe.id) { "♥" } else { " " };
        println!("{marker} {:>8}  {}", recipe.id, recipe.title);

        let mut info = vec![quick_info(recipe), recipe.difficulty().to_string()];
        info.extend(diet_tags(recipe).into_iter().map(str::to_owned));
        println!("             {}", info.join(" • "));
    }
}

/// Recipe detail with `ingredients` standing in for the recipe's own list,
/// so a scaled list can be shown without touching the recipe.
pub fn detail(recipe: &Recipe, ingredients: &[Ingredient], servings: Option<u32>, favorite: bool) {
    println!("{}", recipe.title);
    println!("{}", "=".repeat(recipe.title.chars().count()));
    println!("{}", quick_info(recipe));
    println!("Difficulty: {}", recipe.difficulty());

    let tags = diet_tags(recipe);
    if !tags.is_empty() {
        println!("Diet: {}", tags.join(", "));
    }
    if favorite {
        println!("♥ In your favorites");
    }

    let nutrients = key_nutrients(recipe);
    if !nutrients.is_empty() {
        println!("\nNUTRITION:");
        for nutrient in nutrients {
            println!(
                "  {:<14} {} {}",
                nutrient.name,
                format_amount((nutrient.amount * 10.0).round() / 10.0),
                nutrient.unit
            );
        }
    }

    match servings {
        Some(servings) => println!("\nINGREDIENTS (for {servings} servings):"),
        None => println!("\nINGREDIENTS:"),
    }
    for ingredient in ingredients {
        println!("  • {}", ingredient.display());
    }

    println!("\nINSTRUCTIONS:");
    match recipe.directions() {
        Instructions::Steps(steps) => {
            for step in steps {
                println!("  {}. {}", step.number, step.step);
            }
        }
        Instructions::Text(text) => {
            for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
                println!("  {line}");
            }
        }
        Instructions::Missing => println!("  No instructions available."),
    }
}

pub fn shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Your shopping list is empty.");
        return;
    }

    for group in list.by_aisle() {
        println!("{}:", group.aisle);
        for (pos, item) in group.items {
            let check = if item.checked { "x" } else { " " };
            let count = if item.count > 1 {
                format!(" (×{})", item.count)
            } else {
                String::new()
            };
            println!("  [{check}] {:>3}. {}{count}", pos + 1, item.original);
        }
    }

    let (checked, total) = list.progress();
    println!("\n{checked}/{total} items checked");
}

pub fn week(plan: &MealPlan, start: Date) -> larder_shared::Result<()> {
    for (day, meals) in plan.week(start)? {
        println!("{} ({})", day, day.0.weekday());
        for slot in MealSlot::VARIANTS {
            let meal = meals.and_then(|meals| meals.get(slot));
            match meal {
                Some(meal) => println!(
                    "  {:<10} {} ({} min, #{})",
                    slot.as_ref(),
                    meal.title,
                    meal.ready_in_minutes,
                    meal.id
                ),
                None => println!("  {:<10} -", slot.as_ref()),
            }
        }
    }

    Ok(())
}

pub fn preferences(prefs: &Preferences) {
    let filters = &prefs.advanced_filters;

    println!("theme:          {}", prefs.theme);
    println!("max ready time: {} min", filters.max_ready_time);
    println!("difficulty:     {}", filters.difficulty);
    println!("sort:           {}", filters.sort);
    println!("intolerances:   {}", or_none(&filters.intolerances));
    println!("equipment:      {}", or_none(&filters.equipment));
}

pub fn history(history: &SearchHistory) {
    if history.is_empty() {
        println!("No searches yet.");
    }

    for term in history.terms() {
        println!("{term}");
    }
}

pub fn plan_generated(start: Date, days: usize) {
    println!("Planned {days} days starting {}.", format_date(start));
}

fn or_none(values: &[String]) -> String {
    if values.is_empty() {
        return "none".to_owned();
    }

    values.join(", ")
}
