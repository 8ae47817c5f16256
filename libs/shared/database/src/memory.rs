use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use shared_models::account::{Account, Doctor};
use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::error::AppError;

use crate::directory::DirectoryStore;
use crate::seed;

/// Extra directory data shown for seeded doctors.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorProfile {
    pub rating: f32,
    pub experience: String,
}

#[derive(Default)]
struct Collections {
    accounts: Vec<Account>,
    doctor_profiles: HashMap<String, DoctorProfile>,
    appointments: Vec<Appointment>,
}

/// In-process directory backend.
///
/// An optional latency is awaited before each operation to mimic a network
/// round trip; the lock is never held across it.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<Collections>,
    latency: Duration,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory preloaded with the demo doctors, patients and appointments.
    pub fn seeded() -> Self {
        let mut profiles = HashMap::new();
        for (id, profile) in seed::doctor_profiles() {
            profiles.insert(id.to_string(), profile);
        }

        Self {
            inner: RwLock::new(Collections {
                accounts: seed::accounts(),
                doctor_profiles: profiles,
                appointments: seed::appointments(),
            }),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub async fn account_count(&self) -> usize {
        self.inner.read().await.accounts.len()
    }

    async fn round_trip(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl DirectoryStore for InMemoryDirectory {
    async fn find_account(&self, id: &str) -> Option<Account> {
        self.round_trip().await;
        let inner = self.inner.read().await;
        inner.accounts.iter().find(|a| a.id == id).cloned()
    }

    async fn find_account_by_email(&self, email: &str) -> Option<Account> {
        self.round_trip().await;
        let inner = self.inner.read().await;
        inner.accounts.iter().find(|a| a.email == email).cloned()
    }

    async fn insert_account(&self, account: Account) -> Result<Account, AppError> {
        self.round_trip().await;
        let mut inner = self.inner.write().await;

        if inner.accounts.iter().any(|a| a.email == account.email) {
            return Err(AppError::DuplicateEmail(account.email));
        }

        debug!("Inserting account {} ({})", account.id, account.role);
        inner.accounts.push(account.clone());
        Ok(account)
    }

    async fn list_doctors(&self) -> Vec<Doctor> {
        self.round_trip().await;
        let inner = self.inner.read().await;

        inner
            .accounts
            .iter()
            .filter_map(|account| {
                let mut doctor = Doctor::from_account(account)?;
                if let Some(profile) = inner.doctor_profiles.get(&account.id) {
                    doctor.rating = Some(profile.rating);
                    doctor.experience = Some(profile.experience.clone());
                }
                Some(doctor)
            })
            .collect()
    }

    async fn insert_appointment(&self, appointment: Appointment) -> Appointment {
        self.round_trip().await;
        let mut inner = self.inner.write().await;
        debug!("Inserting appointment {}", appointment.id);
        inner.appointments.push(appointment.clone());
        appointment
    }

    async fn find_appointment(&self, id: &str) -> Option<Appointment> {
        self.round_trip().await;
        let inner = self.inner.read().await;
        inner.appointments.iter().find(|a| a.id == id).cloned()
    }

    async fn update_appointment_status(
        &self,
        id: &str,
        expected: AppointmentStatus,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        self.round_trip().await;
        let mut inner = self.inner.write().await;
        let appointment = inner
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Appointment {}", id)))?;

        if appointment.status != expected {
            debug!(
                "Appointment {} is {} rather than {}, rejecting move to {}",
                id, appointment.status, expected, status
            );
            return Err(AppError::InvalidStatusTransition {
                from: appointment.status,
                to: status,
            });
        }

        appointment.status = status;
        Ok(appointment.clone())
    }

    async fn list_appointments(&self) -> Vec<Appointment> {
        self.round_trip().await;
        self.inner.read().await.appointments.clone()
    }
}
