use serde::{Deserialize, Serialize};

pub use shared_models::account::Doctor;
pub use shared_utils::pagination::Page;

/// Matches every specialization when used as the search filter.
pub const ALL_SPECIALIZATIONS: &str = "All Specializations";

/// Specializations offered in the directory filter and at sign-up.
pub const SPECIALIZATIONS: [&str; 11] = [
    ALL_SPECIALIZATIONS,
    "Cardiologist",
    "Neurologist",
    "Pediatrician",
    "Orthopedic Surgeon",
    "Dermatologist",
    "Ophthalmologist",
    "Psychiatrist",
    "General Practitioner",
    "Endocrinologist",
    "Gastroenterologist",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSearchFilters {
    /// Case-insensitive substring of the doctor's name.
    pub term: String,
    /// Exact specialization, or [`ALL_SPECIALIZATIONS`].
    pub specialization: String,
}

impl Default for DoctorSearchFilters {
    fn default() -> Self {
        Self {
            term: String::new(),
            specialization: ALL_SPECIALIZATIONS.to_string(),
        }
    }
}

impl DoctorSearchFilters {
    pub fn new(term: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            specialization: specialization.into(),
        }
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        let matches_search = doctor
            .name
            .to_lowercase()
            .contains(&self.term.to_lowercase());
        let matches_specialization = self.specialization == ALL_SPECIALIZATIONS
            || doctor.specialization == self.specialization;

        matches_search && matches_specialization
    }
}

pub type DoctorPage = Page<Doctor>;
