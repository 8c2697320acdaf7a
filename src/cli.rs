mod plan;
mod prefs;
mod recipes;
pub mod render;
mod shell;
mod shopping;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Subcommand;
use larder_mealplan::{MealSlot, PlanDay};
use larder_recipe::SortOption;
use larder_spoonacular::{CATEGORIES, Diet};

use crate::{Event, Job, Session};

pub use plan::PlanAction;
pub use prefs::PrefsAction;
pub use recipes::{FavoritesAction, IngredientAction};
pub use shell::{parse_line, shell};
pub use shopping::ShoppingAction;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search recipes by ingredients
    Search {
        /// Ingredients to include (added to the pending list)
        ingredients: Vec<String>,

        /// Vegetarian, vegan, gluten-free, ketogenic or paleo
        #[arg(long)]
        diet: Option<Diet>,

        #[arg(long)]
        cuisine: Option<String>,

        /// Maximum ready time in minutes (overrides saved filters)
        #[arg(long)]
        max_time: Option<u32>,

        /// API sort order (overrides saved filters)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Random main courses
    Random,
    /// Browse a dish type
    Category {
        #[arg(value_parser = clap::builder::PossibleValuesParser::new(CATEGORIES))]
        category: String,
    },
    /// Recipe detail with nutrition
    Show {
        id: u64,

        /// Scale ingredients to this many servings
        #[arg(long)]
        servings: Option<String>,

        /// Write the recipe as plain text to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Reorder the current listing
    Sort {
        /// popularity, health-score, cooking-time or alphabetical
        order: SortOption,
    },
    /// Print the current listing again
    List,
    /// Pending search ingredients
    Ingredient {
        #[command(subcommand)]
        action: Option<IngredientAction>,
    },
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    Shopping {
        #[command(subcommand)]
        action: Option<ShoppingAction>,
    },
    Plan {
        #[command(subcommand)]
        action: Option<PlanAction>,
    },
    /// Recently searched ingredients
    History,
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },
    /// Interactive session; searches keep running while you type
    Shell,
}

/// What to do with the event of a fetched job.
#[derive(Debug, Clone)]
pub enum Followup {
    Report,
    Show {
        servings: Option<String>,
        export: Option<PathBuf>,
    },
    Assign {
        day: PlanDay,
        slot: MealSlot,
    },
}

/// A command either finishes locally or needs a network job.
#[derive(Debug)]
pub enum Request {
    Done,
    Fetch(Job, Followup),
}

/// Run the local part of `command`.
pub fn prepare(session: &mut Session, command: Command) -> anyhow::Result<Request> {
    let request = match command {
        Command::Search {
            ingredients,
            diet,
            cuisine,
            max_time,
            sort,
        } => recipes::search(session, ingredients, diet, cuisine, max_time, sort)?,
        Command::Random => Request::Fetch(Job::Random, Followup::Report),
        Command::Category { category } => {
            Request::Fetch(Job::Category(category), Followup::Report)
        }
        Command::Show {
            id,
            servings,
            export,
        } => Request::Fetch(Job::Detail(id), Followup::Show { servings, export }),
        Command::Sort { order } => recipes::sort(session, order),
        Command::List => {
            render::listing(session.recipes(), session.favorites());
            Request::Done
        }
        Command::Ingredient { action } => recipes::ingredient(session, action)?,
        Command::Favorites { action } => recipes::favorites(session, action),
        Command::Shopping { action } => shopping::prepare(session, action)?,
        Command::Plan { action } => plan::prepare(session, action)?,
        Command::History => {
            render::history(session.history());
            Request::Done
        }
        Command::Prefs { action } => prefs::prepare(session, action),
        Command::Shell => return Err(anyhow!("Already in the shell")),
    };

    Ok(request)
}

/// Handle the event produced by a fetched job.
pub fn finish(session: &mut Session, event: Event, followup: Followup) -> anyhow::Result<()> {
    match (event, followup) {
        (Event::Failed { message, .. }, _) => return Err(anyhow!(message)),
        (Event::Stale { ticket }, _) => {
            tracing::debug!(ticket, "superseded by a newer listing");
        }
        (Event::Listing { .. }, _) => render::listing(session.recipes(), session.favorites()),
        (Event::Detail(recipe), Followup::Show { servings, export }) => {
            recipes::show(session, &recipe, servings.as_deref(), export)?
        }
        (Event::Detail(recipe), Followup::Assign { day, slot }) => {
            plan::assign(session, day, slot, &recipe)
        }
        (Event::Detail(recipe), Followup::Report) => {
            recipes::show(session, &recipe, None, None)?
        }
        (Event::ShoppingUpdated(outcome), _) => shopping::report(session, outcome),
        (Event::PlanGenerated { start, days }, _) => {
            render::plan_generated(start, days);
            render::week(session.meal_plan(), start)?;
        }
    }

    Ok(())
}

/// Message for a job that had nothing to fetch.
pub fn nothing_to_do(job: &Job) -> &'static str {
    match job {
        Job::ShoppingFromPlan => "Your meal plan is empty. Plan some meals first!",
        _ => "No favorites yet! Add some recipes to favorites first.",
    }
}
