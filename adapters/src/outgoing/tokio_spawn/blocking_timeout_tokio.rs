use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::{task::spawn_blocking, time::timeout};
use tracing::warn;

use camgrid_application::{
    error::AppResult,
    ports::outgoing::blocking_task::{BlockingJob, BlockingTaskError, BlockingTaskPort},
};
use domain::payload::ImagePayload;

/// Runs jobs on tokio's blocking pool so codec work never stalls I/O workers.
pub struct TokioBlockingTaskAdapter;

impl TokioBlockingTaskAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioBlockingTaskAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockingTaskPort for TokioBlockingTaskAdapter {
    fn run_with_timeout(
        &self,
        job: BlockingJob,
        duration: Duration,
    ) -> Pin<
        Box<dyn Future<Output = Result<AppResult<ImagePayload>, BlockingTaskError>> + Send + 'static>,
    > {
        Box::pin(async move {
            let task = spawn_blocking(job);

            match timeout(duration, task).await {
                Ok(Ok(result)) => Ok(result),
                Ok(Err(e)) => Err(BlockingTaskError::Failed {
                    message: e.to_string(),
                }),
                Err(_) => {
                    warn!("Blocking job exceeded {:?}", duration);
                    Err(BlockingTaskError::TimedOut)
                }
            }
        })
    }
}
