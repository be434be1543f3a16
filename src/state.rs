//! Shared application state for all routes.

use crate::config::ApiSettings;
use crate::store::ProfessorStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfessorStore>,
    pub api: ApiSettings,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfessorStore>, api: ApiSettings) -> Self {
        AppState { store, api }
    }
}
