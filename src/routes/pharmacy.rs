use actix_session::Session;
use actix_web::{Responder, post, web};
use actix_web_flash_messages::FlashMessage;

use crate::forms::main::{AddMedicineForm, PrescriptionForm, SearchForm};
use crate::gateway::HttpGateway;
use crate::routes::{load_portal_session, redirect, save_portal_session};
use crate::services::pharmacy as pharmacy_service;
use crate::services::search as search_service;

#[post("/search")]
pub async fn run_search(
    session: Session,
    gateway: web::Data<HttpGateway>,
    web::Form(form): web::Form<SearchForm>,
) -> impl Responder {
    let mut state = load_portal_session(&session);

    // A failed fetch is a logged no-op, so there is nothing to flash here.
    search_service::run_search(gateway.get_ref(), &mut state, &form.q).await;
    save_portal_session(&session, &state);

    redirect("/")
}

#[post("/search/next")]
pub async fn next_page(session: Session, gateway: web::Data<HttpGateway>) -> impl Responder {
    let mut state = load_portal_session(&session);

    search_service::next_page(gateway.get_ref(), &mut state).await;
    save_portal_session(&session, &state);

    redirect("/")
}

#[post("/search/prev")]
pub async fn prev_page(session: Session, gateway: web::Data<HttpGateway>) -> impl Responder {
    let mut state = load_portal_session(&session);

    search_service::prev_page(gateway.get_ref(), &mut state).await;
    save_portal_session(&session, &state);

    redirect("/")
}

#[post("/medicines/add")]
pub async fn add_medicine(
    session: Session,
    web::Form(form): web::Form<AddMedicineForm>,
) -> impl Responder {
    let mut state = load_portal_session(&session);

    pharmacy_service::add_medicine(&mut state, &form.name);
    save_portal_session(&session, &state);

    redirect("/")
}

#[post("/medicines/remove")]
pub async fn remove_medicine(session: Session) -> impl Responder {
    let mut state = load_portal_session(&session);

    pharmacy_service::remove_last_medicine(&mut state);
    save_portal_session(&session, &state);

    redirect("/")
}

#[post("/prescription/submit")]
pub async fn submit_prescription(
    session: Session,
    gateway: web::Data<HttpGateway>,
    web::Form(form): web::Form<PrescriptionForm>,
) -> impl Responder {
    let mut state = load_portal_session(&session);

    match pharmacy_service::submit_prescription(gateway.get_ref(), &mut state, form).await {
        Ok(_) => {
            FlashMessage::success("Prescription created successfully.").send();
        }
        Err(err) => {
            FlashMessage::error(format!("Error: {}", err.user_message())).send();
        }
    }

    // The draft and the last response survive failures for manual retry.
    save_portal_session(&session, &state);

    redirect("/")
}
