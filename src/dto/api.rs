use serde::Serialize;

use crate::domain::medicine::Medicine;

/// Response payload of the `/api/v1/medicines` endpoint.
#[derive(Debug, Serialize)]
pub struct MedicinesResponse {
    /// Total number of catalog matches.
    pub total: usize,
    /// Requested page of medicines.
    pub medicines: Vec<Medicine>,
}
