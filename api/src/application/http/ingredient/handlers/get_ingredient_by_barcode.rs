use axum::extract::{Path, State};
use recipehub_core::domain::recipe::{entities::Ingredient, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    ingredient::validators::BarcodeValidator,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetIngredientByBarcodeResponse {
    pub data: Option<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/barcode/{upc}",
    tag = "ingredient",
    summary = "Look up a scanned product",
    description = "Resolves a grocery barcode into an ingredient. Unknown codes yield `null`.",
    params(
        ("upc" = String, Path, description = "Barcode digits"),
    ),
    responses(
        (status = 200, body = GetIngredientByBarcodeResponse),
        (status = 422, description = "Malformed barcode"),
        (status = 502, description = "Recipe API failure")
    )
)]
pub async fn get_ingredient_by_barcode(
    Path(upc): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetIngredientByBarcodeResponse>, ApiError> {
    let payload = BarcodeValidator { upc };
    payload.validate()?;

    let ingredient = state
        .service
        .get_ingredient_by_barcode(payload.upc)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetIngredientByBarcodeResponse { data: ingredient }))
}
