use serde_json::json;
use validator::Validate;

use crate::domain::prescription::NewPrescription;
use crate::domain::session::PortalSession;
use crate::forms::main::PrescriptionForm;
use crate::gateway::PharmacyApi;
use crate::gateway::errors::GatewayError;
use crate::services::{ServiceError, ServiceResult};

/// Appends a medicine from the search results to the selection.
pub fn add_medicine(session: &mut PortalSession, name: &str) {
    session.selection.add(name);
}

/// Drops the most recently selected medicine; no-op when none are selected.
pub fn remove_last_medicine(session: &mut PortalSession) {
    session.selection.remove_last();
}

/// Submits the current draft to the gateway.
///
/// Short-circuits with [`ServiceError::Unauthenticated`] before any network
/// call when no credential is held. Whatever the outcome, the response body
/// (or error detail) is retained in the session for display, and the draft is
/// never cleared — a failed submission is retried manually with the same
/// state.
pub async fn submit_prescription<G>(
    gateway: &G,
    session: &mut PortalSession,
    form: PrescriptionForm,
) -> ServiceResult<serde_json::Value>
where
    G: PharmacyApi + ?Sized,
{
    // Keep the draft fields around so the form re-renders with them, even
    // when the submission is rejected before reaching the gateway.
    session.prescription_id = form.prescription_id.trim().to_string();
    session.patient_tc = form.patient_tc.trim().to_string();
    session.patient_name = form.patient_name.trim().to_string();

    let Some(token) = session.access_token.clone() else {
        return Err(ServiceError::Unauthenticated);
    };

    if let Err(err) = form.validate() {
        log::error!("Failed to validate prescription form: {err}");
        return Err(ServiceError::Validation(
            "All prescription fields are required".to_string(),
        ));
    }

    let prescription = NewPrescription::new(
        &form.prescription_id,
        &form.patient_tc,
        &form.patient_name,
        &session.selection,
    )?;

    match gateway.submit_prescription(&token, &prescription).await {
        Ok(body) => {
            session.last_submission = Some(body.clone());
            Ok(body)
        }
        Err(err) => {
            log::error!("Prescription submission failed: {err}");
            session.last_submission = Some(error_detail(&err));
            Err(err.into())
        }
    }
}

/// Error detail retained in place of a response body.
fn error_detail(err: &GatewayError) -> serde_json::Value {
    match err {
        GatewayError::Status { status, message } => json!({
            "error": err.to_string(),
            "status": status,
            "message": message,
        }),
        _ => json!({ "error": err.to_string() }),
    }
}
