use async_trait::async_trait;

use shared_models::account::{Account, Doctor};
use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::error::AppError;

/// Authoritative collection of accounts and appointments.
///
/// Every service receives the directory as an injected handle and routes all
/// mutation through these primitives. Each call is one atomic operation
/// against the backing collections.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn find_account(&self, id: &str) -> Option<Account>;

    async fn find_account_by_email(&self, email: &str) -> Option<Account>;

    /// Appends a new account.
    ///
    /// Fails with [`AppError::DuplicateEmail`] when any account already uses
    /// the same email, whatever its role.
    async fn insert_account(&self, account: Account) -> Result<Account, AppError>;

    /// Doctors in directory insertion order.
    async fn list_doctors(&self) -> Vec<Doctor>;

    async fn insert_appointment(&self, appointment: Appointment) -> Appointment;

    async fn find_appointment(&self, id: &str) -> Option<Appointment>;

    /// Moves an appointment from `expected` to `status` as one atomic step.
    ///
    /// Fails with [`AppError::NotFound`] when no appointment has that id, and
    /// with [`AppError::InvalidStatusTransition`] when its current status is
    /// no longer `expected`. Only the status changes.
    async fn update_appointment_status(
        &self,
        id: &str,
        expected: AppointmentStatus,
        status: AppointmentStatus,
    ) -> Result<Appointment, AppError>;

    /// Appointments in insertion order.
    async fn list_appointments(&self) -> Vec<Appointment>;
}
