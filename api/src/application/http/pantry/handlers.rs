pub mod add_ingredient;
pub mod add_recent_search;
pub mod clear_ingredients;
pub mod clear_recent_searches;
pub mod get_filters;
pub mod get_ingredients;
pub mod get_recent_searches;
pub mod get_saved_recipe_details;
pub mod get_saved_recipe_status;
pub mod get_saved_recipes;
pub mod remove_ingredient;
pub mod remove_saved_recipe;
pub mod save_recipe;
pub mod set_filters;
pub mod set_ingredients;
pub mod toggle_dietary_preference;
