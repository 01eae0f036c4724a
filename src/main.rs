use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use designer_booking_backend::errors::ApiError;
use designer_booking_backend::{connect, handlers};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = connect().await;
    let db_data = web::Data::new(db);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Malformed bodies and query strings are schema violations (422),
        // not the default 400.
        let json_cfg = web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());
        let query_cfg = web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

        App::new()
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(json_cfg)
            .app_data(query_cfg)
            .configure(handlers::init_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
