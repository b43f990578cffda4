use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppResult;
use domain::payload::ImagePayload;

pub type BlockingJob = Box<dyn FnOnce() -> AppResult<ImagePayload> + Send + 'static>;

#[derive(Debug, PartialEq, Eq)]
pub enum BlockingTaskError {
    TimedOut,
    Failed { message: String },
}

pub trait BlockingTaskPort: Send + Sync {
    fn run_with_timeout(
        &self,
        job: BlockingJob,
        duration: Duration,
    ) -> Pin<
        Box<dyn Future<Output = Result<AppResult<ImagePayload>, BlockingTaskError>> + Send + 'static>,
    >;
}

pub type DynBlockingTaskPort = Arc<dyn BlockingTaskPort>;
