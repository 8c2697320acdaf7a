use std::{borrow::Cow, path::Path, sync::LazyLock};

use regex::Regex;

use crate::{Recipe, Step, format_amount};

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid regex"));

/// How a recipe's method can be shown.
#[derive(Debug, PartialEq)]
pub enum Instructions<'a> {
    /// Numbered steps from the analyzed instructions.
    Steps(Vec<&'a Step>),
    /// The free-text instructions with HTML tags removed.
    Text(Cow<'a, str>),
    Missing,
}

impl Recipe {
    /// Analyzed steps when there are any, else the stripped free text.
    pub fn directions(&self) -> Instructions<'_> {
        if self.step_count() > 0 {
            return Instructions::Steps(self.steps().collect());
        }

        match self.instructions.as_deref().map(str::trim) {
            Some(html) if !html.is_empty() => Instructions::Text(strip_tags(html)),
            _ => Instructions::Missing,
        }
    }
}

/// Render a recipe as a plain-text document suitable for saving or printing.
pub fn render_text(recipe: &Recipe) -> String {
    let health_score = recipe
        .health_score
        .map(format_amount)
        .unwrap_or_else(|| "N/A".to_owned());

    let mut out = format!(
        "{title}\n{underline}\n\n\
        Servings: {servings}\n\
        Ready in: {minutes} minutes\n\
        Health Score: {health_score}/100\n\n",
        title = recipe.title,
        underline = "=".repeat(recipe.title.chars().count()),
        servings = or_na(recipe.servings),
        minutes = or_na(recipe.ready_in_minutes),
    );

    out.push_str("INGREDIENTS:\n");
    out.push_str("------------\n");
    for ingredient in &recipe.extended_ingredients {
        let text = match ingredient.display() {
            "" => "Unknown ingredient",
            text => text,
        };
        out.push_str(&format!("• {text}\n"));
    }
    out.push('\n');

    out.push_str("INSTRUCTIONS:\n");
    out.push_str("-------------\n");

    match recipe.directions() {
        Instructions::Steps(steps) => {
            for step in steps {
                out.push_str(&format!("{}. {}\n\n", step.number, step.step));
            }
        }
        Instructions::Text(text) => {
            out.push_str(&text);
            out.push('\n');
        }
        Instructions::Missing => out.push_str("No instructions available.\n"),
    }

    out
}

/// Write [`render_text`] output to `path`, replacing any existing file.
pub fn export_to(recipe: &Recipe, path: impl AsRef<Path>) -> larder_shared::Result<()> {
    std::fs::write(path, render_text(recipe))?;

    Ok(())
}

pub fn strip_tags(html: &str) -> Cow<'_, str> {
    HTML_TAG.replace_all(html, "")
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_owned())
}
