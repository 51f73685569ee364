use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{NoteStore, UserStore};
use crate::services::auth::AuthService;

/// Shared router state: the immutable configuration plus the two store
/// handles behind their trait seams.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(config: AppConfig, users: Arc<dyn UserStore>, notes: Arc<dyn NoteStore>) -> Self {
        Self {
            config: Arc::new(config),
            users,
            notes,
        }
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.users.clone(), self.config.security.clone())
    }
}
