//! Mock gateway shared by the integration tests.

use mockall::mock;

use pharma_portal::domain::medicine::Medicine;
use pharma_portal::domain::prescription::NewPrescription;
use pharma_portal::domain::session::Credentials;
use pharma_portal::gateway::errors::GatewayResult;
use pharma_portal::gateway::{AuthApi, MedicineApi, MedicineSearchQuery, PharmacyApi};

mock! {
    pub Gateway {}

    impl AuthApi for Gateway {
        async fn register(&self, credentials: &Credentials) -> GatewayResult<()>;
        async fn login(&self, credentials: &Credentials) -> GatewayResult<String>;
    }

    impl MedicineApi for Gateway {
        async fn search_medicines(
            &self,
            query: MedicineSearchQuery,
        ) -> GatewayResult<(usize, Vec<Medicine>)>;
    }

    impl PharmacyApi for Gateway {
        async fn submit_prescription(
            &self,
            token: &str,
            prescription: &NewPrescription,
        ) -> GatewayResult<serde_json::Value>;
    }
}

/// Builds a page of catalog entries named `<prefix>-1` .. `<prefix>-n`.
pub fn medicines(prefix: &str, n: usize) -> Vec<Medicine> {
    (1..=n)
        .map(|i| Medicine {
            name: format!("{prefix}-{i}"),
            status: "Active".to_string(),
        })
        .collect()
}
