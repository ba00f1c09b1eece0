mod api;
mod data;

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use api::generator::GeneratorConfig;
use api::identity;
use api::server::{self, AppState, RateLimiter};
use data::sessions::SessionStore;

#[derive(Parser, Debug)]
#[command(name = "gemgen", about = "Throwaway account generator dashboard backend")]
struct Args {
    /// Address to bind the API server on.
    #[arg(long, default_value = "127.0.0.1", env = "GEMGEN_HOST")]
    host: String,

    #[arg(long, default_value_t = 5000, env = "GEMGEN_PORT")]
    port: u16,

    /// Identity-provider signup endpoint.
    #[arg(long, default_value = identity::DEFAULT_SIGNUP_URL, env = "GEMGEN_SIGNUP_URL")]
    signup_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let bind_addr: SocketAddr = match format!("{}:{}", args.host, args.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid bind address {}:{}: {}", args.host, args.port, e);
            std::process::exit(1);
        }
    };

    // The session store lives for the whole process and is handed to the
    // handlers through shared state. Contents are not persisted anywhere.
    let state = AppState {
        sessions: Arc::new(SessionStore::new()),
        generator: Arc::new(GeneratorConfig {
            signup_url: args.signup_url,
        }),
        limiter: Arc::new(RateLimiter::default()),
    };

    info!("gemgen v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = server::start(state, bind_addr).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
