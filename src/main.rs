use std::sync::Arc;

use stormgpt::broker::Broker;
use stormgpt::config::Config;
use stormgpt::http::router;
use stormgpt::upstream::ApiFreeLlmClient;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::fmt::init();

    let upstream =
        ApiFreeLlmClient::new(&config).expect("Failed to build upstream HTTP client");
    let broker = Arc::new(Broker::new(Arc::new(upstream), &config));

    let app = router(broker);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.addr, config.port))
        .await
        .expect("Failed to bind TCP listener");
    info!("Listening on http://{}:{}", config.addr, config.port);
    axum::serve(listener, app)
        .await
        .expect("Server failed to start");
}
