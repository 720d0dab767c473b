//! Gateway access layer.
//!
//! The external gateway aggregates auth, medicine search and pharmacy
//! submission; each capability is a separate trait so services can depend on
//! exactly what they use and tests can mock the seam.

// The traits are only consumed through generic bounds, never as `dyn`.
#![allow(async_fn_in_trait)]

use crate::domain::medicine::Medicine;
use crate::domain::prescription::NewPrescription;
use crate::domain::session::Credentials;
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;

pub use http::HttpGateway;

/// Parameters of one medicine search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineSearchQuery {
    pub name: String,
    /// 1-based page index.
    pub page: usize,
}

impl MedicineSearchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: 1,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Account registration and login against the auth endpoints.
pub trait AuthApi {
    async fn register(&self, credentials: &Credentials) -> GatewayResult<()>;
    /// Returns the bearer token issued by the gateway.
    async fn login(&self, credentials: &Credentials) -> GatewayResult<String>;
}

/// Paginated medicine catalog search.
pub trait MedicineApi {
    /// Returns the total match count and the requested page of medicines.
    async fn search_medicines(
        &self,
        query: MedicineSearchQuery,
    ) -> GatewayResult<(usize, Vec<Medicine>)>;
}

/// Prescription submission, requires a bearer credential.
pub trait PharmacyApi {
    /// Submits a prescription and returns the gateway-defined response body.
    async fn submit_prescription(
        &self,
        token: &str,
        prescription: &NewPrescription,
    ) -> GatewayResult<serde_json::Value>;
}
