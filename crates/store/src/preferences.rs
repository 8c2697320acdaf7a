use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub const DEFAULT_DIFFICULTY: &str = "any";
pub const DEFAULT_MAX_READY_TIME: u32 = 60;
pub const DEFAULT_SORT: &str = "max-used-ingredients";

#[derive(
    Serialize, Deserialize, EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Search filters remembered between runs. Keys missing from the file keep
/// their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AdvancedFilters {
    pub max_ready_time: u32,
    pub difficulty: String,
    pub equipment: Vec<String>,
    pub intolerances: Vec<String>,
    pub sort: String,
}

impl Default for AdvancedFilters {
    fn default() -> Self {
        Self {
            max_ready_time: DEFAULT_MAX_READY_TIME,
            difficulty: DEFAULT_DIFFICULTY.to_owned(),
            equipment: vec![],
            intolerances: vec![],
            sort: DEFAULT_SORT.to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub advanced_filters: AdvancedFilters,
}

impl Preferences {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}
