//! Prompt templates for the chef assistant.

use crate::meals::Meal;

/// Persona prompt asking for a description, three secrets and a pairing.
pub fn chef_tips_prompt(meal: &Meal) -> String {
    format!(
        "You are a world-class Michelin star chef.\n\
         I am preparing \"{name}\".\n\
         The category is {category} and the cuisine is {area}.\n\
         \n\
         Please provide:\n\
         1. A brief, appetizing description of this dish.\n\
         2. Three professional \"Chef's Secrets\" or tips to make this specific recipe taste better or look more professional.\n\
         3. A recommended wine or beverage pairing with a short explanation why.\n\
         \n\
         Keep the tone encouraging and professional. Format with clear Markdown headings.",
        name = meal.name,
        category = meal.category.as_deref().unwrap_or("unknown"),
        area = meal.area.as_deref().unwrap_or("unknown"),
    )
}

/// Free-form question, optionally anchored to the recipe being viewed.
pub fn ask_prompt(question: &str, meal_name: Option<&str>) -> String {
    let mut prompt = format!(
        "You are a helpful culinary assistant. Answer the following question: \"{}\"",
        question
    );
    if let Some(name) = meal_name.filter(|n| !n.trim().is_empty()) {
        prompt.push_str(&format!(
            "\nContext: The user is currently viewing the recipe for \"{}\".",
            name
        ));
    }
    prompt
}
