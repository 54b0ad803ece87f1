use cleansheet::infrastructure::settings::ServerSettings;
use cleansheet::interfaces::http;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let settings = ServerSettings::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "Failed to load settings, using defaults");
        ServerSettings::default()
    });

    tracing::info!(host = %settings.host, port = settings.port, "Starting cleansheet server");

    http::start_server(&settings)?.await
}
