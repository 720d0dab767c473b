use serde::Deserialize;
use validator::Validate;

/// Search box submission.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// Click-to-add on a search result. Never validated: the posted name comes
/// from the rendered result list, and duplicates are allowed.
#[derive(Debug, Deserialize)]
pub struct AddMedicineForm {
    pub name: String,
}

/// Draft fields posted with the submit button.
#[derive(Debug, Deserialize, Validate)]
pub struct PrescriptionForm {
    #[validate(length(min = 1))]
    pub prescription_id: String,
    #[validate(length(equal = 11))]
    pub patient_tc: String,
    #[validate(length(min = 1))]
    pub patient_name: String,
}
