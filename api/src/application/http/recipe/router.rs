use super::handlers::{
    get_recipe::{__path_get_recipe, get_recipe},
    search_recipes::{__path_search_recipes, search_recipes},
};
use crate::application::{device_middleware::device_middleware, http::server::app_state::AppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_recipes, get_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/search", state.args.server.root_path),
            post(search_recipes),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", state.args.server.root_path),
            get(get_recipe),
        )
        .layer(middleware::from_fn(device_middleware))
}
