use camgrid_application::infrastructure_config::{Config, ProcessingConfig, ServerConfig};
use domain::payload::MediaType;
use tracing::info;

pub fn print_banner() {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        output = MediaType::Png.content_type(),
        "📷 Camera Grid server starting"
    );
}

pub fn print_api_info(config: &Config) {
    print_endpoint_info(config);
    print_configuration_info(config);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📷 Endpoints:");
    info!("  🖥️  Camera page: GET {}/", base_url);
    info!("  🎨 Grayscale: POST {}/process (raw image body)", base_url);
    info!("  💓 Health: GET {}/health", base_url);
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration:");
    print_server_configuration(&config.server);
    print_processing_configuration(&config.processing);
}

fn print_server_configuration(server: &ServerConfig) {
    info!(
        "  📦 Upload limit: {} bytes, CORS origin: {}",
        server.max_upload_bytes,
        server
            .cors_origin
            .as_deref()
            .unwrap_or("http://localhost:3000")
    );
}

fn print_processing_configuration(processing: &ProcessingConfig) {
    info!(
        "  ⏱️  Processing: timeout {}s, max {}px per side, output PNG",
        processing.timeout_secs, processing.max_dimension
    );
}
