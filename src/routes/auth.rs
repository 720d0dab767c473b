use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::auth::{LoginForm, RegisterForm};
use crate::gateway::HttpGateway;
use crate::routes::{load_portal_session, redirect, save_portal_session};
use crate::services::auth as auth_service;

#[post("/auth/register")]
pub async fn register(
    gateway: web::Data<HttpGateway>,
    web::Form(form): web::Form<RegisterForm>,
) -> impl Responder {
    match auth_service::register(gateway.get_ref(), form).await {
        Ok(()) => {
            FlashMessage::success("Doctor registered successfully.").send();
        }
        Err(err) => {
            FlashMessage::error(format!("Registration failed: {}", err.user_message())).send();
        }
    }

    redirect("/")
}

#[post("/auth/login")]
pub async fn login(
    session: Session,
    gateway: web::Data<HttpGateway>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let mut state = load_portal_session(&session);

    match auth_service::login(gateway.get_ref(), &mut state, form).await {
        Ok(()) => {
            save_portal_session(&session, &state);
            FlashMessage::success("Login successful.").send();
        }
        Err(err) => {
            FlashMessage::error(format!("Login failed: {}", err.user_message())).send();
        }
    }

    redirect("/")
}
