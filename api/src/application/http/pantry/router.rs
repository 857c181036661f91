use super::handlers::{
    add_ingredient::{__path_add_ingredient, add_ingredient},
    add_recent_search::{__path_add_recent_search, add_recent_search},
    clear_ingredients::{__path_clear_ingredients, clear_ingredients},
    clear_recent_searches::{__path_clear_recent_searches, clear_recent_searches},
    get_filters::{__path_get_filters, get_filters},
    get_ingredients::{__path_get_ingredients, get_ingredients},
    get_recent_searches::{__path_get_recent_searches, get_recent_searches},
    get_saved_recipe_details::{__path_get_saved_recipe_details, get_saved_recipe_details},
    get_saved_recipe_status::{__path_get_saved_recipe_status, get_saved_recipe_status},
    get_saved_recipes::{__path_get_saved_recipes, get_saved_recipes},
    remove_ingredient::{__path_remove_ingredient, remove_ingredient},
    remove_saved_recipe::{__path_remove_saved_recipe, remove_saved_recipe},
    save_recipe::{__path_save_recipe, save_recipe},
    set_filters::{__path_set_filters, set_filters},
    set_ingredients::{__path_set_ingredients, set_ingredients},
    toggle_dietary_preference::{__path_toggle_dietary_preference, toggle_dietary_preference},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_ingredients,
    set_ingredients,
    add_ingredient,
    remove_ingredient,
    clear_ingredients,
    get_filters,
    set_filters,
    toggle_dietary_preference,
    get_saved_recipes,
    get_saved_recipe_details,
    get_saved_recipe_status,
    save_recipe,
    remove_saved_recipe,
    get_recent_searches,
    add_recent_search,
    clear_recent_searches
))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/pantry/ingredients", state.args.server.root_path),
            get(get_ingredients)
                .put(set_ingredients)
                .post(add_ingredient)
                .delete(clear_ingredients),
        )
        .route(
            &format!(
                "{}/pantry/ingredients/{{ingredient_id}}",
                state.args.server.root_path
            ),
            delete(remove_ingredient),
        )
        .route(
            &format!("{}/pantry/filters", state.args.server.root_path),
            get(get_filters).put(set_filters),
        )
        .route(
            &format!(
                "{}/pantry/filters/dietary/{{preference}}",
                state.args.server.root_path
            ),
            post(toggle_dietary_preference),
        )
        .route(
            &format!("{}/pantry/saved-recipes", state.args.server.root_path),
            get(get_saved_recipes),
        )
        .route(
            &format!(
                "{}/pantry/saved-recipes/details",
                state.args.server.root_path
            ),
            get(get_saved_recipe_details),
        )
        .route(
            &format!(
                "{}/pantry/saved-recipes/{{recipe_id}}",
                state.args.server.root_path
            ),
            get(get_saved_recipe_status)
                .put(save_recipe)
                .delete(remove_saved_recipe),
        )
        .route(
            &format!("{}/pantry/recent-searches", state.args.server.root_path),
            get(get_recent_searches)
                .post(add_recent_search)
                .delete(clear_recent_searches),
        )
        .layer(middleware::from_fn(device_middleware))
}
