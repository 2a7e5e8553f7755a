use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use todolite::auth::RequireAuth;
use todolite::config::Config;
use todolite::error;
use todolite::routes;
use todolite::store::UserStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    log::info!("Connected to database");

    let store = web::Data::new(UserStore::new(pool));
    let config_data = web::Data::new(config.clone());
    let client_url = config.client_url.clone();

    log::info!("Starting Todolite server at {}", config.server_url());
    log::info!("Accepting browser requests from {}", client_url);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_url)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(store.clone())
            .app_data(config_data.clone())
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .wrap(RequireAuth)
            .wrap(Logger::default())
            .wrap(cors)
            .configure(routes::config)
            .default_service(web::route().to(routes::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
