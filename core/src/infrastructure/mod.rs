pub mod kv;
pub mod spoonacular;
