use serde::Serialize;

use crate::domain::session::PortalSession;

/// Search panel state rendered on the portal page.
#[derive(Debug, Serialize)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<String>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<&PortalSession> for SearchView {
    fn from(session: &PortalSession) -> Self {
        let search = &session.search;
        Self {
            query: search.query.clone(),
            results: search.results.clone(),
            current_page: search.current_page,
            total_pages: search.total_pages(),
            total_count: search.total_count,
            has_next: search.has_next(),
            has_prev: search.has_prev(),
        }
    }
}

/// Draft fields echoed back into the prescription form.
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub prescription_id: String,
    pub patient_tc: String,
    pub patient_name: String,
    pub medicines: Vec<String>,
}

impl From<&PortalSession> for DraftView {
    fn from(session: &PortalSession) -> Self {
        Self {
            prescription_id: session.prescription_id.clone(),
            patient_tc: session.patient_tc.clone(),
            patient_name: session.patient_name.clone(),
            medicines: session.selection.to_vec(),
        }
    }
}
