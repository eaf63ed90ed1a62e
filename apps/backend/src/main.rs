use actix_web::{web, App, HttpServer};
use book_api::config::db::DbProfile;
use book_api::infra::state::build_state;
use book_api::middleware::request_trace::RequestTrace;
use book_api::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables are expected to be set by the runtime environment
    // (docker-compose env_file, or sourced env files for local dev).
    let host = std::env::var("BOOK_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BOOK_API_PORT")
        .unwrap_or_else(|_| "8000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BOOK_API_PORT must be a valid port number");
            std::process::exit(1);
        });

    // Build application state: connect to the SQLite store and run migrations
    let app_state = match build_state().with_db(DbProfile::Prod).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("starting book-api on http://{host}:{port}");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
