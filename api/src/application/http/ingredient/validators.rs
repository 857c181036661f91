use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// UPC-A, EAN-8, EAN-13 and GTIN-14 are all plain digit strings.
pub static BARCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8,14}$").expect("valid barcode pattern"));

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchIngredientsQuery {
    #[validate(length(max = 100, message = "query is too long"))]
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct BarcodeValidator {
    #[validate(regex(path = *BARCODE, message = "barcode must be 8 to 14 digits"))]
    pub upc: String,
}
