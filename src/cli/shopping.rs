use clap::Subcommand;
use larder_shopping::MergeOutcome;

use super::{Followup, Request, render};
use crate::{Job, Session};

#[derive(Subcommand, Debug, Clone)]
pub enum ShoppingAction {
    List,
    /// Add the ingredients of every favorite
    FromFavorites,
    /// Add the ingredients of every planned meal
    FromPlan,
    /// Add an item by hand
    Add { text: Vec<String> },
    /// Check or uncheck item number N
    Check { number: usize },
    Clear,
}

pub fn prepare(session: &mut Session, action: Option<ShoppingAction>) -> anyhow::Result<Request> {
    match action.unwrap_or(ShoppingAction::List) {
        ShoppingAction::List => render::shopping_list(session.shopping_list()),
        ShoppingAction::FromFavorites => {
            return Ok(Request::Fetch(Job::ShoppingFromFavorites, Followup::Report));
        }
        ShoppingAction::FromPlan => {
            return Ok(Request::Fetch(Job::ShoppingFromPlan, Followup::Report));
        }
        ShoppingAction::Add { text } => {
            let item = session.add_shopping_item(&text.join(" "))?;
            println!("Added '{}' to shopping list.", item.name);
        }
        ShoppingAction::Check { number } => {
            let Some(index) = number.checked_sub(1) else {
                anyhow::bail!("Items are numbered from 1");
            };

            let checked = session.toggle_shopping_item(index)?;
            let (done, total) = session.shopping_list().progress();
            let state = if checked { "checked" } else { "unchecked" };
            println!("Item {number} {state} ({done}/{total}).");
        }
        ShoppingAction::Clear => {
            session.clear_shopping_list();
            println!("Shopping list cleared.");
        }
    }

    Ok(Request::Done)
}

pub fn report(session: &Session, outcome: MergeOutcome) {
    println!(
        "Added {} new items to shopping list ({} ingredients found).",
        outcome.added, outcome.consolidated
    );
    render::shopping_list(session.shopping_list());
}
