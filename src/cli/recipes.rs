use std::path::PathBuf;

use clap::Subcommand;
use larder_recipe::{Recipe, ServingsScaler, SortOption, export_to};
use larder_spoonacular::Diet;

use super::{Followup, Request, render};
use crate::{Job, SearchOptions, Session};

#[derive(Subcommand, Debug, Clone)]
pub enum IngredientAction {
    List,
    Add { ingredient: Vec<String> },
    Remove { ingredient: Vec<String> },
    Clear,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FavoritesAction {
    /// Fetch and list every favorite
    List,
    /// Add or remove a recipe
    Toggle { id: u64 },
}

pub fn search(
    session: &mut Session,
    ingredients: Vec<String>,
    diet: Option<Diet>,
    cuisine: Option<String>,
    max_ready_time: Option<u32>,
    sort: Option<String>,
) -> anyhow::Result<Request> {
    for ingredient in ingredients {
        session.add_ingredient(&ingredient)?;
    }

    let options = SearchOptions {
        diet,
        cuisine,
        max_ready_time,
        sort,
    };

    Ok(Request::Fetch(Job::Search(options), Followup::Report))
}

pub fn sort(session: &mut Session, order: SortOption) -> Request {
    session.sort_recipes(order);
    render::listing(session.recipes(), session.favorites());

    Request::Done
}

pub fn ingredient(
    session: &mut Session,
    action: Option<IngredientAction>,
) -> anyhow::Result<Request> {
    match action.unwrap_or(IngredientAction::List) {
        IngredientAction::List => {}
        IngredientAction::Add { ingredient } => {
            session.add_ingredient(&ingredient.join(" "))?;
        }
        IngredientAction::Remove { ingredient } => {
            if !session.remove_ingredient(&ingredient.join(" ")) {
                println!("Not in the list.");
            }
        }
        IngredientAction::Clear => session.clear_ingredients(),
    }

    if session.ingredients().is_empty() {
        println!("No ingredients added.");
    } else {
        println!("Ingredients: {}", session.ingredients().join(", "));
    }

    Ok(Request::Done)
}

pub fn favorites(session: &mut Session, action: Option<FavoritesAction>) -> Request {
    match action.unwrap_or(FavoritesAction::List) {
        FavoritesAction::List => Request::Fetch(Job::Favorites, Followup::Report),
        FavoritesAction::Toggle { id } => {
            if session.toggle_favorite(id) {
                println!("Added #{id} to favorites.");
            } else {
                println!("Removed #{id} from favorites.");
            }

            Request::Done
        }
    }
}

#[tracing::instrument(skip(session, recipe, export), fields(id = recipe.id))]
pub fn show(
    session: &Session,
    recipe: &Recipe,
    servings: Option<&str>,
    export: Option<PathBuf>,
) -> anyhow::Result<()> {
    let favorite = session.favorites().contains(recipe.id);

    match servings {
        None => render::detail(recipe, &recipe.extended_ingredients, recipe.servings, favorite),
        Some(input) => {
            let scaler = ServingsScaler::new(recipe)?;
            let target = larder_recipe::parse_servings(input)?;
            let scaled = scaler.scale(target);

            render::detail(recipe, &scaled, Some(target), favorite);
        }
    }

    if let Some(path) = export {
        export_to(recipe, &path)?;
        println!("\nRecipe exported to {}", path.display());
    }

    Ok(())
}
