use std::error::Error;

use tokio::net::TcpListener;
use tracing::{error, info};

use server::bootstrap::{router::create_router, shutdown::shutdown_signal, state::AppState};
use server::config_loader;
use server::observability::{startup_info, tracing::setup_logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let config = config_loader::load_config()?;
    setup_logging(&config)?;
    startup_info::print_banner();

    let address = config.server_address();
    let app = create_router(AppState::new(config.clone()));
    let listener = TcpListener::bind(&address).await?;

    info!(%address, "Listening");
    startup_info::print_api_info(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| error!(error = %e, "Server stopped with an error"))?;

    info!("Shutdown complete");
    Ok(())
}
