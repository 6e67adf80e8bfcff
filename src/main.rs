use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;
use sqlx::postgres::PgPoolOptions;

use todos_api::auth::{AuthMiddleware, TokenCodec};
use todos_api::config::Config;
use todos_api::routes::{self, health};
use todos_api::AppState;

fn to_io_error<E: std::fmt::Display>(error: E) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(to_io_error)?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .map_err(to_io_error)?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(to_io_error)?;

    let tokens = TokenCodec::new(&config.jwt_secret, config.jwt_ttl_seconds);
    let state = AppState::postgres(pool, tokens.clone(), config.bcrypt_cost);

    info!("Starting server at {}", config.server_url());
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware::new(tokens.clone()))
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
