//! Demo directory content: six doctors, two patients and three appointments.

use chrono::{DateTime, Utc};

use shared_models::account::{Account, Role};
use shared_models::appointment::{Appointment, AppointmentStatus};

use crate::memory::DoctorProfile;

const PHOTO_BASE: &str = "https://images.pexels.com/photos";

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_default()
}

fn photo(id: u32) -> Option<String> {
    Some(format!(
        "{}/{}/pexels-photo-{}.jpeg?auto=compress&cs=tinysrgb&w=200",
        PHOTO_BASE, id, id
    ))
}

fn doctor(id: &str, name: &str, email: &str, specialization: &str, photo_id: u32) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Doctor,
        photo_url: photo(photo_id),
        specialization: Some(specialization.to_string()),
        created_at: timestamp("2024-01-01T00:00:00Z"),
    }
}

fn patient(id: &str, name: &str, email: &str, photo_id: u32) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Patient,
        photo_url: photo(photo_id),
        specialization: None,
        created_at: timestamp("2024-01-01T00:00:00Z"),
    }
}

pub fn accounts() -> Vec<Account> {
    vec![
        doctor("1", "Dr. Sarah Johnson", "sarah.johnson@hospital.com", "Cardiologist", 5452268),
        doctor("2", "Dr. Michael Chen", "michael.chen@hospital.com", "Neurologist", 6749773),
        doctor("3", "Dr. Emily Rodriguez", "emily.rodriguez@hospital.com", "Pediatrician", 5452293),
        doctor("4", "Dr. David Kim", "david.kim@hospital.com", "Orthopedic Surgeon", 6749774),
        doctor("5", "Dr. Lisa Wang", "lisa.wang@hospital.com", "Dermatologist", 5452201),
        doctor("6", "Dr. Robert Martinez", "robert.martinez@hospital.com", "Ophthalmologist", 6749775),
        patient("7", "John Smith", "john.smith@email.com", 2379004),
        patient("8", "Jane Doe", "jane.doe@email.com", 3763188),
    ]
}

pub fn doctor_profiles() -> Vec<(&'static str, DoctorProfile)> {
    [
        ("1", 4.8, 12),
        ("2", 4.6, 9),
        ("3", 4.9, 15),
        ("4", 4.3, 18),
        ("5", 4.7, 7),
        ("6", 4.1, 11),
    ]
    .into_iter()
    .map(|(id, rating, years)| {
        (
            id,
            DoctorProfile {
                rating,
                experience: format!("{} years", years),
            },
        )
    })
    .collect()
}

fn appointment(
    id: &str,
    patient: (&str, &str),
    doctor: (&str, &str, &str),
    date: &str,
    status: AppointmentStatus,
    created_at: &str,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_id: patient.0.to_string(),
        doctor_id: doctor.0.to_string(),
        patient_name: patient.1.to_string(),
        doctor_name: doctor.1.to_string(),
        doctor_specialization: doctor.2.to_string(),
        appointment_date: timestamp(date),
        status,
        created_at: timestamp(created_at),
    }
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        appointment(
            "1",
            ("7", "John Smith"),
            ("1", "Dr. Sarah Johnson", "Cardiologist"),
            "2024-09-15T10:00:00Z",
            AppointmentStatus::Pending,
            "2024-09-01T08:00:00Z",
        ),
        appointment(
            "2",
            ("8", "Jane Doe"),
            ("2", "Dr. Michael Chen", "Neurologist"),
            "2024-09-16T14:30:00Z",
            AppointmentStatus::Completed,
            "2024-09-01T09:00:00Z",
        ),
        appointment(
            "3",
            ("7", "John Smith"),
            ("3", "Dr. Emily Rodriguez", "Pediatrician"),
            "2024-09-20T11:00:00Z",
            AppointmentStatus::Cancelled,
            "2024-09-01T10:00:00Z",
        ),
    ]
}
