//! Recipe API data types
//!
//! Field names follow the upstream JSON on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upstream numbers its ingredient/measure pairs 1 through 20.
pub const MAX_INGREDIENTS: usize = 20;

// == Meal ==
/// A full recipe as returned by `search.php`, `lookup.php` and `random.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source: Option<String>,
    /// Remaining flat fields, including `strIngredientN` / `strMeasureN`
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Meal {
    /// Extracts the ingredient list from the numbered flat fields.
    ///
    /// Blank or null ingredients are skipped; a missing measure becomes "".
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|i| {
                let ingredient = self.text_field(&format!("strIngredient{}", i))?;
                let ingredient = ingredient.trim();
                if ingredient.is_empty() {
                    return None;
                }
                let measure = self
                    .text_field(&format!("strMeasure{}", i))
                    .map(str::trim)
                    .unwrap_or_default();
                Some(Ingredient {
                    ingredient: ingredient.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Embeddable player URL built from the `v=` parameter of `strYoutube`.
    pub fn youtube_embed_url(&self) -> Option<String> {
        let url = self.youtube.as_deref()?;
        let (_, rest) = url.split_once("v=")?;
        let video_id = rest.split('&').next().unwrap_or_default();
        if video_id.is_empty() {
            return None;
        }
        Some(format!("https://www.youtube.com/embed/{}", video_id))
    }

    fn text_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

// == Ingredient ==
/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub ingredient: String,
    pub measure: String,
}

// == Meal Summary ==
/// Short listing entry returned by `filter.php`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSummary {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

// == Category ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "idCategory")]
    pub id: String,
    #[serde(rename = "strCategory")]
    pub name: String,
    #[serde(rename = "strCategoryThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription", default)]
    pub description: Option<String>,
}

// == Envelopes ==
/// `{"meals": [...] | null}`
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

/// `{"categories": [...] | null}`
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_meal() -> Meal {
        serde_json::from_value(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strCategory": "Chicken",
            "strArea": "Japanese",
            "strInstructions": "Preheat oven to 350F.",
            "strMealThumb": "https://img.test/teriyaki.jpg",
            "strTags": "Meat,Casserole",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s&t=10",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup ",
            "strIngredient2": "  water ",
            "strMeasure2": null,
            "strIngredient3": "",
            "strMeasure3": "1 tbsp",
            "strIngredient4": null,
            "strMeasure4": "",
            "strIngredient5": "brown sugar",
            "strMeasure5": "1/2 cup",
            "dateModified": null
        }))
        .unwrap()
    }

    #[test]
    fn test_meal_deserialize() {
        let meal = sample_meal();
        assert_eq!(meal.id, "52772");
        assert_eq!(meal.name, "Teriyaki Chicken Casserole");
        assert_eq!(meal.category.as_deref(), Some("Chicken"));
        assert_eq!(meal.area.as_deref(), Some("Japanese"));
        assert!(meal.source.is_none());
        assert!(meal.fields.contains_key("strIngredient1"));
    }

    #[test]
    fn test_meal_serialize_keeps_upstream_names() {
        let value = serde_json::to_value(sample_meal()).unwrap();
        assert_eq!(value["idMeal"], "52772");
        assert_eq!(value["strMeal"], "Teriyaki Chicken Casserole");
        assert_eq!(value["strIngredient1"], "soy sauce");
    }

    #[test]
    fn test_ingredients_skip_blank_and_trim() {
        let ingredients = sample_meal().ingredients();
        assert_eq!(
            ingredients,
            vec![
                Ingredient {
                    ingredient: "soy sauce".to_string(),
                    measure: "3/4 cup".to_string()
                },
                Ingredient {
                    ingredient: "water".to_string(),
                    measure: "".to_string()
                },
                Ingredient {
                    ingredient: "brown sugar".to_string(),
                    measure: "1/2 cup".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_ingredients_stop_at_twenty() {
        let mut meal = sample_meal();
        meal.fields.clear();
        for i in 1..=21 {
            meal.fields
                .insert(format!("strIngredient{}", i), json!(format!("item {}", i)));
        }
        let ingredients = meal.ingredients();
        assert_eq!(ingredients.len(), 20);
        assert_eq!(ingredients[19].ingredient, "item 20");
    }

    #[test]
    fn test_youtube_embed_url() {
        let mut meal = sample_meal();
        assert_eq!(
            meal.youtube_embed_url().as_deref(),
            Some("https://www.youtube.com/embed/4aZr5hZXP_s")
        );

        meal.youtube = Some("https://www.youtube.com/channel/abc".to_string());
        assert!(meal.youtube_embed_url().is_none());

        meal.youtube = None;
        assert!(meal.youtube_embed_url().is_none());
    }

    #[test]
    fn test_envelope_null_meals() {
        let envelope: MealsEnvelope<MealSummary> =
            serde_json::from_value(json!({ "meals": null })).unwrap();
        assert!(envelope.meals.is_none());

        // Meal itself has no Default, so the envelope must not demand one
        let envelope: MealsEnvelope<Meal> = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.meals.is_none());
        let envelope: MealsEnvelope<Meal> =
            serde_json::from_value(json!({ "meals": null })).unwrap();
        assert!(envelope.meals.is_none());

        let envelope: CategoriesEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.categories.is_none());
    }
}
