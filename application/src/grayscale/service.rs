use std::sync::Arc;
use tracing::{info, instrument, warn};

use domain::payload::{ImagePayload, MediaType};

use crate::{
    config::ProcessingSettings,
    error::{AppError, AppResult},
    ports::{
        incoming::grayscale::GrayscaleUseCase,
        outgoing::{
            blocking_task::{BlockingJob, BlockingTaskError, DynBlockingTaskPort},
            image_codec::DynImageCodecPort,
        },
    },
};

use super::pipeline::grayscale_encoded;

pub struct GrayscaleServiceDeps {
    pub codec_port: DynImageCodecPort,
    pub blocking_task_port: DynBlockingTaskPort,
}

pub struct GrayscaleService {
    settings: ProcessingSettings,
    codec_port: DynImageCodecPort,
    blocking_task_port: DynBlockingTaskPort,
}

impl GrayscaleService {
    pub fn new(settings: ProcessingSettings, deps: GrayscaleServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            settings,
            codec_port: deps.codec_port,
            blocking_task_port: deps.blocking_task_port,
        })
    }
}

#[async_trait::async_trait]
impl GrayscaleUseCase for GrayscaleService {
    #[instrument(skip(self, payload), fields(input_bytes = payload.len()))]
    async fn grayscale_payload(&self, payload: Vec<u8>) -> AppResult<ImagePayload> {
        let codec = Arc::clone(&self.codec_port);
        let job: BlockingJob = Box::new(move || grayscale_encoded(codec.as_ref(), &payload));

        match self
            .blocking_task_port
            .run_with_timeout(job, self.settings.timeout)
            .await
        {
            Ok(Ok(image)) => {
                info!(output_bytes = image.bytes.len(), "Grayscale image produced");
                Ok(image)
            }
            Ok(Err(e)) => {
                warn!("Grayscale processing failed: {}", e);
                Err(e)
            }
            Err(BlockingTaskError::TimedOut) => Err(AppError::ProcessingTimeout {
                seconds: self.settings.timeout.as_secs(),
            }),
            Err(BlockingTaskError::Failed { message }) => Err(AppError::TaskError { message }),
        }
    }

    fn output_media_type(&self) -> MediaType {
        self.codec_port.output_media_type()
    }
}
