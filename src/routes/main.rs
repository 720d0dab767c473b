use actix_session::Session;
use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::{Context, Tera};

use crate::dto::main::{DraftView, SearchView};
use crate::routes::{alert_level_to_str, load_portal_session, render_template};

#[get("/")]
pub async fn show_index(
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let state = load_portal_session(&session);

    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let last_submission = state
        .last_submission
        .as_ref()
        .and_then(|body| serde_json::to_string_pretty(body).ok());

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("authenticated", &state.is_authenticated());
    context.insert("search", &SearchView::from(&state));
    context.insert("draft", &DraftView::from(&state));
    context.insert("last_submission", &last_submission);

    render_template(&tera, "main/index.html", &context)
}
