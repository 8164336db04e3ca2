use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use tasknest::auth::AuthMiddleware;
use tasknest::config::Config;
use tasknest::routes::{self, health};
use tasknest::{AuthService, TaskService, TaskStore, TokenService, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Stores and services are built once here and injected into the app;
    // process lifetime is the persistence boundary.
    let user_store = Arc::new(UserStore::new());
    let task_store = Arc::new(TaskStore::new());
    let token_service = TokenService::new(&config.jwt_secret, config.token_lifetime);
    let auth_service = AuthService::new(Arc::clone(&user_store), token_service.clone());
    let task_service = TaskService::new(Arc::clone(&task_store));

    log::info!("Starting tasknest server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(task_service.clone()))
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
                    .wrap(AuthMiddleware)
                    .configure(routes::config),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
