use actix_cors::Cors;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::gateway::HttpGateway;
use crate::models::config::ServerConfig;
use crate::routes::api::api_v1_medicines;
use crate::routes::auth::{login, register};
use crate::routes::main::show_index;
use crate::routes::pharmacy::{
    add_medicine, next_page, prev_page, remove_medicine, run_search, submit_prescription,
};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // HTTP client for the external auth/medicine/pharmacy gateway.
    let gateway = HttpGateway::new(&server_config.gateway_url)
        .map_err(|e| std::io::Error::other(format!("Failed to create gateway client: {e}")))?;

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(web::scope("/api").service(api_v1_medicines))
            .service(show_index)
            .service(register)
            .service(login)
            .service(run_search)
            .service(next_page)
            .service(prev_page)
            .service(add_medicine)
            .service(remove_medicine)
            .service(submit_prescription)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(gateway.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
