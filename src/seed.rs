//! Built-in starter content substituted when a namespace was never saved.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::domain::category::Category;
use crate::domain::guide::Guide;

/// The three starter categories.
pub fn initial_categories() -> Vec<Category> {
    seed_value(json!([
        { "id": "cat1", "name": "Cooking" },
        { "id": "cat2", "name": "DIY Projects" },
        { "id": "cat3", "name": "Tech Setup" },
    ]))
}

/// The starter guide with its three steps.
pub fn initial_guides() -> Vec<Guide> {
    let now = Utc::now();
    seed_value(json!([
        {
            "id": "guide1",
            "title": "Bake a Cake",
            "description": "A simple guide to baking a delicious vanilla cake.",
            "categoryId": "cat1",
            "createdAt": now,
            "updatedAt": now,
            "steps": [
                {
                    "id": "step1-1",
                    "stepNumber": 1,
                    "description": "Preheat oven to 350°F (175°C). Grease and flour a 9x9 inch pan.",
                    "imageUrl": "https://placehold.co/600x400.png?text=Oven+Preheat",
                    "data-ai-hint": "oven kitchen"
                },
                {
                    "id": "step1-2",
                    "stepNumber": 2,
                    "description": "In a medium bowl, cream together the sugar and butter.",
                    "imageUrl": "https://placehold.co/600x400.png?text=Mixing+Ingredients",
                    "data-ai-hint": "mixing bowl"
                },
                {
                    "id": "step1-3",
                    "stepNumber": 3,
                    "description": "Beat in the eggs, one at a time, then stir in the vanilla.",
                    "hint": "Ensure eggs are fully incorporated.",
                    "imageUrl": "https://placehold.co/600x400.png?text=Adding+Eggs",
                    "data-ai-hint": "eggs cooking"
                },
            ],
        },
    ]))
}

fn seed_value<T: DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("seed data is valid")
}
