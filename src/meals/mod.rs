//! Meals Module
//!
//! Cache-through client for the public recipe API and its data types.

mod client;
pub mod models;

pub use client::MealDbClient;
pub use models::{Category, Ingredient, Meal, MealSummary};
