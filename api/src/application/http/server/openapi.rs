use crate::application::http::{
    health::HealthApiDoc, ingredient::router::IngredientApiDoc, pantry::router::PantryApiDoc,
    recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeHub API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/pantry", api = PantryApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
