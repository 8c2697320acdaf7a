use clap::Subcommand;
use larder_mealplan::{MealSlot, PlanDay, PlannedMeal};
use larder_recipe::Recipe;
use larder_shared::{parse_date, today, week_start};

use super::{Followup, Request, render};
use crate::{Job, Session};

#[derive(Subcommand, Debug, Clone)]
pub enum PlanAction {
    /// Show a week, Monday first
    Show {
        /// Any day of the week to show (YYYY-MM-DD), defaults to today
        #[arg(long)]
        week: Option<String>,
    },
    /// Fill the next 7 days from favorites
    Generate,
    /// Put a recipe in a slot
    Assign {
        date: PlanDay,
        slot: MealSlot,
        id: u64,
    },
    /// Empty a slot
    Remove { date: PlanDay, slot: MealSlot },
}

pub fn prepare(session: &mut Session, action: Option<PlanAction>) -> anyhow::Result<Request> {
    match action.unwrap_or(PlanAction::Show { week: None }) {
        PlanAction::Show { week } => {
            let day = match week {
                Some(value) => parse_date(&value)?,
                None => today(),
            };

            render::week(session.meal_plan(), week_start(day)?)?;
        }
        PlanAction::Generate => {
            return Ok(Request::Fetch(Job::GeneratePlan, Followup::Report));
        }
        PlanAction::Assign { date, slot, id } => {
            return Ok(Request::Fetch(
                Job::Detail(id),
                Followup::Assign { day: date, slot },
            ));
        }
        PlanAction::Remove { date, slot } => match session.remove_meal(date, slot) {
            Some(meal) => println!("Removed {} from {date} {slot}.", meal.title),
            None => println!("Nothing planned for {date} {slot}."),
        },
    }

    Ok(Request::Done)
}

pub fn assign(session: &mut Session, day: PlanDay, slot: MealSlot, recipe: &Recipe) {
    let meal = PlannedMeal::from(recipe);
    println!("Planned {} for {day} {slot}.", meal.title);

    if let Some(replaced) = session.assign_meal(day, slot, meal) {
        println!("(replaced {})", replaced.title);
    }
}
