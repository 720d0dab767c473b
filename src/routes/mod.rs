//! Route handlers and shared handler helpers.

use actix_session::Session;
use actix_web::http::header;
use actix_web::HttpResponse;
use actix_web_flash_messages::Level;
use tera::{Context, Tera};

use crate::domain::session::PortalSession;

pub mod api;
pub mod auth;
pub mod main;
pub mod pharmacy;

/// Session key under which the portal state is stored.
pub const SESSION_STATE_KEY: &str = "portal";

/// Maps flash levels to the alert style names used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Issues a `303 See Other` redirect to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a template or logs and returns a 500 on failure.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Loads the portal state from the cookie session, starting fresh when the
/// session is empty or unreadable.
pub fn load_portal_session(session: &Session) -> PortalSession {
    match session.get::<PortalSession>(SESSION_STATE_KEY) {
        Ok(Some(state)) => state,
        Ok(None) => PortalSession::default(),
        Err(err) => {
            log::error!("Failed to read portal session, starting fresh: {err}");
            PortalSession::default()
        }
    }
}

/// Writes the portal state back into the cookie session.
pub fn save_portal_session(session: &Session, state: &PortalSession) {
    if let Err(err) = session.insert(SESSION_STATE_KEY, state) {
        log::error!("Failed to persist portal session: {err}");
    }
}
