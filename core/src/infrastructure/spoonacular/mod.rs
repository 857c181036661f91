pub mod client;

pub use client::SpoonacularClient;
