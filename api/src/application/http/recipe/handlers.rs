pub mod get_recipe;
pub mod search_recipes;
