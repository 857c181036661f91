use std::sync::Arc;

use clap::Parser;
use recipehub_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.filter));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let app_state = state(args.clone()).await?;
    let app = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("RecipeHub API listening on {}{}", addr, args.server.root_path);

    axum::serve(listener, app).await?;

    Ok(())
}
