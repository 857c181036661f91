pub mod common;
pub mod pantry;
pub mod recipe;
