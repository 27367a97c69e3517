use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use pawlog::api::error::redact_internal_errors;
use pawlog::api::middleware::RequestLogger;
use pawlog::cli::Cli;
use pawlog::config::AppConfig;
use pawlog::store;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn index() -> impl Responder {
    let html = include_str!("../static/index.html");
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    let activities = store::activity_pool();
    let chat = store::chat_pool();

    let host = config.server.host.clone();
    let port = config.server.port;

    info!("Pet Activity Tracker API listening on {}:{} ({})", host, port, config.server.environment);
    info!("Health check: http://localhost:{}/api/health", port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(activities.clone()))
            .app_data(web::Data::new(chat.clone()))
            .route("/", web::get().to(index))
            .configure(pawlog::api::routes::configure)
            .wrap(redact_internal_errors())
            .wrap(Cors::permissive())
            .wrap(RequestLogger)
    })
    .bind((host, port))?
    .run()
    .await
}
