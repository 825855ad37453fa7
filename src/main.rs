use chessd::config::Config;
use chessd::server::{self, AppState};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let config = Config::from_env();
    tracing::info!(?config.bind, depth = config.depth.raw(), "starting chessd");

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!(%err, "failed to initialize service");
            std::process::exit(1);
        }
    };

    let app = server::router(state);
    let listener = match TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%err, addr = %config.bind, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", config.bind);
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }
}
