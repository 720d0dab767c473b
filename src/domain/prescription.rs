use serde::{Deserialize, Serialize};

use crate::domain::selection::SelectionList;
use crate::domain::types::{PatientName, PatientTc, PrescriptionId, TypeConstraintError};

/// Validated prescription ready to be submitted to the gateway.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPrescription {
    pub prescription_id: PrescriptionId,
    pub patient_tc: PatientTc,
    pub patient_name: PatientName,
    pub medicines: Vec<String>,
}

impl NewPrescription {
    /// Builds a prescription from raw draft fields and the current selection.
    pub fn new(
        prescription_id: &str,
        patient_tc: &str,
        patient_name: &str,
        selection: &SelectionList,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            prescription_id: PrescriptionId::new(prescription_id)?,
            patient_tc: PatientTc::new(patient_tc)?,
            patient_name: PatientName::new(patient_name)?,
            medicines: selection.to_vec(),
        })
    }
}
