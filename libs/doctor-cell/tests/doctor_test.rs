use std::sync::Arc;

use assert_matches::assert_matches;

use doctor_cell::{DoctorSearchFilters, DoctorService, ALL_SPECIALIZATIONS};
use shared_database::{DirectoryStore, InMemoryDirectory};
use shared_models::error::AppError;
use shared_utils::test_utils::TestUser;

fn seeded_service() -> DoctorService {
    DoctorService::new(Arc::new(InMemoryDirectory::seeded()))
}

async fn service_with_extra_cardiologists(count: usize) -> DoctorService {
    let directory = Arc::new(InMemoryDirectory::seeded());
    for i in 0..count {
        let doctor = TestUser::doctor(&format!("Dr. Extra {}", i), "Cardiologist").to_account();
        directory.insert_account(doctor).await.unwrap();
    }
    DoctorService::new(directory)
}

#[tokio::test]
async fn test_empty_search_returns_first_page_in_directory_order() {
    let service = seeded_service();

    let page = service
        .search(&DoctorSearchFilters::default(), 1, None)
        .await
        .unwrap();

    assert_eq!(page.total, 6);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page_size, 6);
    let ids: Vec<&str> = page.items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn test_search_by_name_is_case_insensitive() {
    let service = seeded_service();

    let page = service
        .search(&DoctorSearchFilters::new("sarah", ALL_SPECIALIZATIONS), 1, None)
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Dr. Sarah Johnson");
    assert_eq!(page.items[0].specialization, "Cardiologist");
}

#[tokio::test]
async fn test_specialization_filter_returns_only_that_specialization() {
    let service = service_with_extra_cardiologists(2).await;

    let page = service
        .search(&DoctorSearchFilters::new("", "Cardiologist"), 1, None)
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert!(page.items.iter().all(|d| d.specialization == "Cardiologist"));
    assert_eq!(page.items[0].id, "1");
}

#[tokio::test]
async fn test_no_match_yields_empty_page() {
    let service = seeded_service();

    let page = service
        .search(&DoctorSearchFilters::new("zzz-no-match", ALL_SPECIALIZATIONS), 1, None)
        .await
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_pagination_slices_without_clamping() {
    let service = service_with_extra_cardiologists(8).await;
    let filters = DoctorSearchFilters::default();

    let second = service.search(&filters, 2, None).await.unwrap();
    assert_eq!(second.total, 14);
    assert_eq!(second.total_pages, 3);
    assert_eq!(second.items.len(), 6);
    assert_eq!(second.items[0].name, "Dr. Extra 0");

    let third = service.search(&filters, 3, None).await.unwrap();
    assert_eq!(third.items.len(), 2);

    let beyond = service.search(&filters, 4, None).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 14);

    let zero = service.search(&filters, 0, None).await.unwrap();
    assert!(zero.items.is_empty());
}

#[tokio::test]
async fn test_custom_page_size() {
    let service = seeded_service();

    let page = service
        .search(&DoctorSearchFilters::default(), 2, Some(4))
        .await
        .unwrap();
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);

    let invalid = service.search(&DoctorSearchFilters::default(), 1, Some(0)).await;
    assert_matches!(invalid, Err(AppError::Validation(_)));
}

#[tokio::test]
async fn test_registered_doctors_have_no_profile_extras() {
    let service = service_with_extra_cardiologists(1).await;

    let page = service
        .search(&DoctorSearchFilters::new("extra", ALL_SPECIALIZATIONS), 1, None)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].rating, None);
    assert_eq!(page.items[0].experience, None);
}

#[tokio::test]
async fn test_get_doctor() {
    let service = seeded_service();

    let doctor = service.get_doctor("2").await.unwrap();
    assert_eq!(doctor.name, "Dr. Michael Chen");

    // Patients are not part of the doctor directory.
    assert_matches!(service.get_doctor("7").await, Err(AppError::NotFound(_)));
}
