use std::sync::Arc;

use tracing::debug;

use shared_config::DEFAULT_PAGE_SIZE;
use shared_database::DirectoryStore;
use shared_models::error::AppError;
use shared_utils::pagination::paginate;

use crate::models::{Doctor, DoctorPage, DoctorSearchFilters, SPECIALIZATIONS};

/// Read-only queries over the doctors in the directory.
pub struct DoctorService {
    directory: Arc<dyn DirectoryStore>,
    page_size: usize,
}

impl DoctorService {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self::with_page_size(directory, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(directory: Arc<dyn DirectoryStore>, page_size: usize) -> Self {
        Self {
            directory,
            page_size,
        }
    }

    /// Filters doctors by name and specialization and returns one page of the
    /// matches, in directory order.
    ///
    /// `page` is 1-based and not clamped: a page outside `1..=total_pages`
    /// comes back empty with the totals still filled in.
    pub async fn search(
        &self,
        filters: &DoctorSearchFilters,
        page: usize,
        page_size: Option<usize>,
    ) -> Result<DoctorPage, AppError> {
        let page_size = page_size.unwrap_or(self.page_size);
        if page_size == 0 {
            return Err(AppError::Validation("page_size must be positive".to_string()));
        }

        debug!(
            "Searching doctors term={:?} specialization={:?} page={} page_size={}",
            filters.term, filters.specialization, page, page_size
        );

        let matches: Vec<Doctor> = self
            .directory
            .list_doctors()
            .await
            .into_iter()
            .filter(|doctor| filters.matches(doctor))
            .collect();

        Ok(paginate(matches, page, page_size))
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, AppError> {
        debug!("Fetching doctor: {}", doctor_id);

        self.directory
            .list_doctors()
            .await
            .into_iter()
            .find(|doctor| doctor.id == doctor_id)
            .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))
    }

    pub fn specializations(&self) -> Vec<String> {
        SPECIALIZATIONS.iter().map(|s| s.to_string()).collect()
    }
}
