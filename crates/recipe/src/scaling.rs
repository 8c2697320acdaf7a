use crate::{Ingredient, Recipe};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Please enter a valid number of servings (got '{0}')")]
    InvalidServings(String),

    #[error("recipe has no serving count to scale from")]
    MissingServings,
}

/// Parse a serving count typed by the user. Only positive whole numbers pass.
pub fn parse_servings(input: &str) -> Result<u32, ScaleError> {
    match input.trim().parse::<u32>() {
        Ok(servings) if servings > 0 => Ok(servings),
        _ => Err(ScaleError::InvalidServings(input.trim().to_owned())),
    }
}

/// Rescales a recipe's ingredient list to a new number of servings.
///
/// Scaling always starts from the base ingredients the scaler was built with,
/// so asking for 4 then 8 servings of a 2-serving recipe gives 2x then 4x,
/// never 2x then 4x of the already doubled amounts.
#[derive(Debug, Clone, Copy)]
pub struct ServingsScaler<'a> {
    base: &'a [Ingredient],
    original_servings: u32,
}

impl<'a> ServingsScaler<'a> {
    pub fn new(recipe: &'a Recipe) -> Result<Self, ScaleError> {
        let original_servings = recipe
            .servings
            .filter(|servings| *servings > 0)
            .ok_or(ScaleError::MissingServings)?;

        Ok(Self {
            base: &recipe.extended_ingredients,
            original_servings,
        })
    }

    pub fn original_servings(&self) -> u32 {
        self.original_servings
    }

    pub fn factor(&self, target: u32) -> f64 {
        target as f64 / self.original_servings as f64
    }

    pub fn scale(&self, target: u32) -> Vec<Ingredient> {
        if target == self.original_servings {
            return self.base.to_vec();
        }

        let factor = self.factor(target);
        self.base
            .iter()
            .map(|ingredient| scale_ingredient(ingredient, factor))
            .collect()
    }

    /// Scale from raw user input. On error the caller keeps what it showed before.
    pub fn scale_input(&self, input: &str) -> Result<Vec<Ingredient>, ScaleError> {
        Ok(self.scale(parse_servings(input)?))
    }
}

fn scale_ingredient(ingredient: &Ingredient, factor: f64) -> Ingredient {
    let mut scaled = ingredient.clone();

    let Some(amount) = ingredient.amount.filter(|amount| *amount != 0.0) else {
        return scaled;
    };

    let new_amount = round2(amount * factor);
    scaled.amount = Some(new_amount);

    if !ingredient.original.is_empty() {
        let (from, to) = (format_amount(amount), format_amount(new_amount));
        scaled.original = ingredient.original.replacen(&from, &to, 1);
    }

    scaled
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shortest decimal rendering of an amount: `2.0` → `"2"`, `0.5` → `"0.5"`.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_servings() {
        assert_eq!(parse_servings(" 4 "), Ok(4));
        assert!(parse_servings("0").is_err());
        assert!(parse_servings("-2").is_err());
        assert!(parse_servings("two").is_err());
        assert!(parse_servings("2.5").is_err());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(1.5), 1.5);
        assert_eq!(format_amount(3.0), "3");
        assert_eq!(format_amount(0.75), "0.75");
    }
}
