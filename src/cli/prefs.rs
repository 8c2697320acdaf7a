use clap::Subcommand;

use super::{Request, render};
use crate::Session;

#[derive(Subcommand, Debug, Clone)]
pub enum PrefsAction {
    Show,
    ToggleTheme,
    /// Change the saved search filters
    SetFilters {
        #[arg(long)]
        max_time: Option<u32>,

        /// any, easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,

        #[arg(long)]
        sort: Option<String>,

        /// Comma separated, e.g. dairy,gluten
        #[arg(long, value_delimiter = ',')]
        intolerances: Option<Vec<String>>,

        #[arg(long, value_delimiter = ',')]
        equipment: Option<Vec<String>>,
    },
}

pub fn prepare(session: &mut Session, action: Option<PrefsAction>) -> Request {
    match action.unwrap_or(PrefsAction::Show) {
        PrefsAction::Show => {}
        PrefsAction::ToggleTheme => {
            let theme = session.toggle_theme();
            println!("Theme set to {theme}.");
        }
        PrefsAction::SetFilters {
            max_time,
            difficulty,
            sort,
            intolerances,
            equipment,
        } => session.update_filters(|filters| {
            if let Some(max_time) = max_time {
                filters.max_ready_time = max_time;
            }
            if let Some(difficulty) = difficulty {
                filters.difficulty = difficulty.to_lowercase();
            }
            if let Some(sort) = sort {
                filters.sort = sort;
            }
            if let Some(intolerances) = intolerances {
                filters.intolerances = intolerances;
            }
            if let Some(equipment) = equipment {
                filters.equipment = equipment;
            }
        }),
    }

    render::preferences(session.preferences());

    Request::Done
}
