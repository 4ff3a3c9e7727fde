use anyhow::Context;
use axum::http::Method;
use campuslink::{seed::Seed, session::EmailDomain, shared_store, store::Store};
use envconfig::Envconfig;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Envconfig)]
struct Config {
    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,
    #[envconfig(from = "EMAIL_DOMAIN", default = "@gbpuat.ac.in")]
    pub email_domain: String,
    #[envconfig(from = "SEED_FILE")]
    pub seed_file: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::init_from_env().context("invalid configuration")?;

    let seed = match &config.seed_file {
        Some(path) => Seed::from_file(path)?,
        None => Seed::embedded()?,
    };
    info!(
        students = seed.students.len(),
        opportunities = seed.opportunities.len(),
        clubs = seed.clubs.len(),
        "loaded seed data"
    );

    let store = shared_store(Store::new(seed));
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .allow_origin(Any);
    let app = campuslink::app(store, EmailDomain::new(config.email_domain)).layer(cors);

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%address, "listening");
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
