use super::handlers::{
    get_ingredient_by_barcode::{__path_get_ingredient_by_barcode, get_ingredient_by_barcode},
    search_ingredients::{__path_search_ingredients, search_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_ingredients, get_ingredient_by_barcode))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/search", state.args.server.root_path),
            get(search_ingredients),
        )
        .route(
            &format!("{}/ingredients/barcode/{{upc}}", state.args.server.root_path),
            get(get_ingredient_by_barcode),
        )
}
