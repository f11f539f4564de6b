use cinefind::config::Config;
use cinefind::movies::MoviesClient;
use cinefind::ui::{make_config, App, AppContext};
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("Starting cinefind");
    let config = Config::load();

    // Movie requests run here; Dioxus drives the UI on its own executor
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("cinefind-io")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let client = match MoviesClient::with_timeout(&config.api_base_url, config.request_timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create movies API client: {}", e);
            std::process::exit(1);
        }
    };

    let context = AppContext {
        config,
        movie_source: Arc::new(client),
        runtime: runtime.handle().clone(),
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
