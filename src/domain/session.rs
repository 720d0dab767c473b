//! Serializable per-user portal state.
//!
//! Everything the original page kept in ad hoc component variables lives in
//! one struct stored in the cookie session, so every operation can be tested
//! without a rendering environment.

use serde::{Deserialize, Serialize};

use crate::domain::search::SearchState;
use crate::domain::selection::SelectionList;

/// Username/password pair sent to the auth endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Complete state of one portal session.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PortalSession {
    /// Bearer token issued by login; `None` until a login succeeds. Held for
    /// the lifetime of the session, no refresh or logout.
    pub access_token: Option<String>,
    pub search: SearchState,
    pub selection: SelectionList,
    /// Draft fields echoed back into the form between round-trips.
    pub prescription_id: String,
    pub patient_tc: String,
    pub patient_name: String,
    /// Raw body (or error detail) of the last submission attempt, kept for
    /// display. Overwritten by each attempt, never cleared.
    pub last_submission: Option<serde_json::Value>,
}

impl PortalSession {
    /// Whether a login has produced a credential.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}
