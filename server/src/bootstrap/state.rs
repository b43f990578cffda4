use std::sync::Arc;

use camgrid_adapters::outgoing::{
    image_rs::png_codec_image::{ImageCodecConfig, ImagePngAdapter},
    tokio_spawn::blocking_timeout_tokio::TokioBlockingTaskAdapter,
};
use camgrid_adapters::shared::app_state::AppState as AdaptersAppState;
use camgrid_application::{
    config::ProcessingSettings,
    grayscale::service::{GrayscaleService, GrayscaleServiceDeps},
    infrastructure_config::Config,
    ports::{
        incoming::grayscale::GrayscaleUseCase,
        outgoing::{blocking_task::BlockingTaskPort, image_codec::ImageCodecPort},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub grayscale_service: Arc<GrayscaleService>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let grayscale_service = Self::create_grayscale_service(&config);

        Self {
            config,
            grayscale_service,
        }
    }

    fn create_grayscale_service(config: &Config) -> Arc<GrayscaleService> {
        let codec_port: Arc<dyn ImageCodecPort> =
            Arc::new(ImagePngAdapter::new(ImageCodecConfig {
                max_dimension: config.processing.max_dimension,
            }));
        let blocking_task_port: Arc<dyn BlockingTaskPort> =
            Arc::new(TokioBlockingTaskAdapter::new());

        GrayscaleService::new(
            ProcessingSettings::from_config(config),
            GrayscaleServiceDeps {
                codec_port,
                blocking_task_port,
            },
        )
    }

    pub fn to_adapters_state(self) -> AdaptersAppState {
        AdaptersAppState::new(
            self.config,
            self.grayscale_service as Arc<dyn GrayscaleUseCase + Send + Sync>,
        )
    }
}
