use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::ReportFileStore;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReportFileStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: impl ReportFileStore + 'static, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}
