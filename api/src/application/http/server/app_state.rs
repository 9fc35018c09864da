use std::sync::Arc;

use recipe_forge_core::application::RecipeForgeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeForgeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeForgeService) -> Self {
        Self { args, service }
    }
}
