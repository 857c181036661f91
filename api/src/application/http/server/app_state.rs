use std::sync::Arc;

use recipehub_core::application::RecipeHubService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeHubService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeHubService) -> Self {
        Self { args, service }
    }
}
