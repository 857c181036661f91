pub mod ingredient;
pub mod raw_recipe;
pub mod recipe_card;
pub mod recipe_detail;

pub use ingredient::*;
pub use raw_recipe::*;
pub use recipe_card::*;
pub use recipe_detail::*;
