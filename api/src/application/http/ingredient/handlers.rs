pub mod get_ingredient_by_barcode;
pub mod search_ingredients;
