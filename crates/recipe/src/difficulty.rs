use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
)]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Estimate how demanding a recipe is from its ingredient count, total ready
/// time in minutes and number of instruction steps.
///
/// Each signal scores 0, 1 or 2 points:
/// - ingredients: more than 15 → 2, more than 8 → 1
/// - ready time: more than 120 → 2, more than 60 → 1
/// - steps: more than 10 → 2, more than 5 → 1
///
/// A total of 4 or more is `Hard`, 2 or 3 is `Medium`, anything lower `Easy`.
pub fn estimate_difficulty(
    ingredient_count: usize,
    ready_in_minutes: u32,
    step_count: usize,
) -> Difficulty {
    let score = points(ingredient_count as u64, 15, 8)
        + points(ready_in_minutes as u64, 120, 60)
        + points(step_count as u64, 10, 5);

    match score {
        4.. => Difficulty::Hard,
        2..=3 => Difficulty::Medium,
        _ => Difficulty::Easy,
    }
}

fn points(value: u64, hard_above: u64, medium_above: u64) -> u8 {
    if value > hard_above {
        2
    } else if value > medium_above {
        1
    } else {
        0
    }
}
