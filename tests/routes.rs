use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use actix_web::{App, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use tera::Tera;

use pharma_portal::gateway::HttpGateway;
use pharma_portal::routes::main::show_index;
use pharma_portal::routes::{alert_level_to_str, redirect};

#[test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[test]
fn redirect_issues_see_other() {
    let response = redirect("/");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[actix_web::test]
async fn index_renders_the_portal_page() {
    let secret_key = Key::from(&[0u8; 64]);
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new("templates/**/*.html").expect("templates parse");
    // The index route never talks to the gateway.
    let gateway = HttpGateway::new("http://localhost:3000/api/v1").expect("valid base url");

    let app = actix_test::init_service(
        App::new()
            .wrap(message_framework)
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key)
                    .cookie_secure(false)
                    .build(),
            )
            .service(show_index)
            .app_data(web::Data::new(tera))
            .app_data(web::Data::new(gateway)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = actix_test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).expect("utf-8 body");
    assert!(body.contains("Pharmacy Panel"));
    assert!(body.contains("Page 1 of 0"));
}
