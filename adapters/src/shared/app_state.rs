use std::sync::Arc;

use camgrid_application::{
    infrastructure_config::Config, ports::incoming::grayscale::GrayscaleUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub grayscale_service: Arc<dyn GrayscaleUseCase + Send + Sync>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        grayscale_service: Arc<dyn GrayscaleUseCase + Send + Sync>,
    ) -> Self {
        Self {
            config,
            grayscale_service,
        }
    }
}
