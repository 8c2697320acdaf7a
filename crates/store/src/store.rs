use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use larder_mealplan::MealPlan;
use larder_shopping::ShoppingList;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Favorites, Preferences, SearchHistory};

pub const FAVORITES_FILE: &str = "favorites.json";
pub const SEARCH_HISTORY_FILE: &str = "search_history.json";
pub const MEAL_PLAN_FILE: &str = "meal_plan.json";
pub const SHOPPING_LIST_FILE: &str = "shopping_list.json";
pub const PREFERENCES_FILE: &str = "user_preferences.json";

/// A value kept in its own JSON file in the data directory.
pub trait Stored: Serialize + DeserializeOwned + Default {
    const FILE: &'static str;
}

impl Stored for Favorites {
    const FILE: &'static str = FAVORITES_FILE;
}

impl Stored for SearchHistory {
    const FILE: &'static str = SEARCH_HISTORY_FILE;
}

impl Stored for MealPlan {
    const FILE: &'static str = MEAL_PLAN_FILE;
}

impl Stored for ShoppingList {
    const FILE: &'static str = SHOPPING_LIST_FILE;
}

impl Stored for Preferences {
    const FILE: &'static str = PREFERENCES_FILE;
}

/// Flat JSON files, one per [`Stored`] value, read whole and overwritten whole.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path<T: Stored>(&self) -> PathBuf {
        self.dir.join(T::FILE)
    }

    /// Read `T` from its file. A missing or unreadable file yields the
    /// default value.
    pub fn load<T: Stored>(&self) -> T {
        let path = self.path::<T>();

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no saved state, using defaults");
                return T::default();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read saved state");
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to decode saved state");
                T::default()
            }
        }
    }

    pub fn save<T: Stored>(&self, value: &T) -> larder_shared::Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path::<T>();
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(&path, bytes)?;

        tracing::debug!(path = %path.display(), "state saved");

        Ok(())
    }

    /// [`Self::save`], logging a failure instead of returning it. Returns
    /// whether the file was written.
    pub fn persist<T: Stored>(&self, value: &T) -> bool {
        match self.save(value) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(file = T::FILE, error = %err, "failed to save state");
                false
            }
        }
    }
}
