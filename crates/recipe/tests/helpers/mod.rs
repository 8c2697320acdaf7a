#![allow(dead_code)]

use larder_recipe::{Ingredient, InstructionGroup, Recipe, Step};

pub const PASTA_JSON: &str = r#"{
    "id": 716429,
    "title": "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
    "image": "https://img.spoonacular.com/recipes/716429-556x370.jpg",
    "readyInMinutes": 45,
    "servings": 2,
    "healthScore": 19.0,
    "aggregateLikes": 209,
    "vegetarian": true,
    "vegan": false,
    "glutenFree": false,
    "dairyFree": false,
    "extendedIngredients": [
        {
            "id": 1001,
            "aisle": "Milk, Eggs, Other Dairy",
            "name": "butter",
            "original": "0.75 tablespoons butter",
            "amount": 0.75,
            "unit": "tablespoons"
        },
        {
            "id": 10011135,
            "aisle": null,
            "name": "cauliflower florets",
            "original": "2 cups cauliflower florets",
            "amount": 2.0,
            "unit": "cups"
        },
        {
            "id": 2047,
            "aisle": "Spices and Seasonings",
            "name": "salt",
            "original": "salt",
            "amount": null,
            "unit": null
        }
    ],
    "analyzedInstructions": [
        {
            "name": "",
            "steps": [
                { "number": 1, "step": "Melt the butter." },
                { "number": 2, "step": "Roast the cauliflower." },
                { "number": 3, "step": "Serve." }
            ]
        }
    ],
    "instructions": "<p>Melt the butter.</p>",
    "nutrition": {
        "nutrients": [
            { "name": "Calories", "amount": 584.46, "unit": "kcal" },
            { "name": "Fat", "amount": 19.83, "unit": "g" },
            { "name": "Vitamin C", "amount": 4.1, "unit": "mg" },
            { "name": "Protein", "amount": 18.4, "unit": "g" }
        ]
    }
}"#;

pub fn recipe(id: u64, title: &str, ingredients: &[Ingredient]) -> Recipe {
    Recipe {
        id,
        title: title.to_owned(),
        extended_ingredients: ingredients.to_vec(),
        ..Default::default()
    }
}

pub fn ingredient(name: &str, aisle: Option<&str>) -> Ingredient {
    Ingredient {
        name: name.to_owned(),
        original: format!("1 {name}"),
        amount: Some(1.0),
        aisle: aisle.map(str::to_owned),
        ..Default::default()
    }
}

pub fn group(steps: u32) -> InstructionGroup {
    InstructionGroup {
        name: String::new(),
        steps: (1..=steps)
            .map(|number| Step {
                number,
                step: format!("step {number}"),
            })
            .collect(),
    }
}
