//! JSON shapes exchanged with the gateway endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::medicine::Medicine;
use crate::domain::prescription::NewPrescription;

/// Body of `POST /auth/v1/register` and `POST /auth/v1/login`.
#[derive(Debug, Serialize)]
pub struct CredentialsPayload<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful `POST /auth/v1/login` response.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// One catalog entry inside a search response.
#[derive(Debug, Deserialize)]
pub struct MedicineRecord {
    pub name: String,
    #[serde(default)]
    pub status: String,
}

impl From<MedicineRecord> for Medicine {
    fn from(record: MedicineRecord) -> Self {
        Self {
            name: record.name,
            status: record.status,
        }
    }
}

/// Body of `GET /medicine/v1/search` responses.
///
/// The gateway reports failures in-band through `status`; anything other
/// than `"Success"` is treated as an error by the caller.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub data: Vec<MedicineRecord>,
    #[serde(rename = "totalCount", default)]
    pub total_count: usize,
}

/// Body of `POST /pharmacy/v1/submit-prescription`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPrescriptionPayload<'a> {
    pub prescription_id: &'a str,
    pub patient_tc: &'a str,
    pub patient_name: &'a str,
    pub medicines: &'a [String],
}

impl<'a> From<&'a NewPrescription> for SubmitPrescriptionPayload<'a> {
    fn from(prescription: &'a NewPrescription) -> Self {
        Self {
            prescription_id: prescription.prescription_id.as_str(),
            patient_tc: prescription.patient_tc.as_str(),
            patient_name: prescription.patient_name.as_str(),
            medicines: &prescription.medicines,
        }
    }
}

/// Error body shape; the `message` field, when present, is shown to the user.
#[derive(Debug, Deserialize)]
pub struct GatewayMessage {
    pub message: Option<String>,
}
