// file: src/web/state.rs
// description: shared application state handed to every handler

use crate::config::Config;
use crate::inference::InferenceDispatcher;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<InferenceDispatcher>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        info!("[STATE] Model root: {}", config.models.root.display());
        if let Err(e) = crate::utils::Validator::validate_directory(&config.models.root) {
            warn!("[STATE] {} (requests will report missing models)", e);
        }

        let dispatcher = InferenceDispatcher::new(config.models.clone());
        Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
