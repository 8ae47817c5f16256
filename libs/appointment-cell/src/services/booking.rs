// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use tracing::{debug, info, warn};

use shared_database::DirectoryStore;
use shared_models::account::{Account, Role};
use shared_models::error::AppError;
use shared_utils::generate_id;

use crate::models::{Appointment, AppointmentFilter, AppointmentStats, AppointmentStatus, NewAppointment};
use crate::services::lifecycle::AppointmentLifecycleService;

/// Half-hour start times offered by the booking form, morning then afternoon.
const MORNING_SLOTS: (u32, u32) = (9, 12);
const AFTERNOON_SLOTS: (u32, u32) = (14, 17);

pub struct AppointmentService {
    directory: Arc<dyn DirectoryStore>,
    lifecycle_service: AppointmentLifecycleService,
}

impl AppointmentService {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self {
            directory,
            lifecycle_service: AppointmentLifecycleService::new(),
        }
    }

    /// Creates a pending appointment. Double booking is permitted: no overlap
    /// check is made against the doctor's or patient's other appointments.
    pub async fn create(&self, request: NewAppointment) -> Result<Appointment, AppError> {
        debug!(
            "Creating appointment for patient {} with doctor {} at {}",
            request.patient_id, request.doctor_id, request.appointment_date
        );

        self.require_account(&request.doctor_id, Role::Doctor).await?;
        self.require_account(&request.patient_id, Role::Patient).await?;

        let appointment = Appointment {
            id: generate_id(),
            patient_id: request.patient_id,
            doctor_id: request.doctor_id,
            patient_name: request.patient_name,
            doctor_name: request.doctor_name,
            doctor_specialization: request.doctor_specialization,
            appointment_date: request.appointment_date,
            status: AppointmentStatus::Pending,
            created_at: Utc::now(),
        };

        let created = self.directory.insert_appointment(appointment).await;
        info!("Appointment {} created", created.id);
        Ok(created)
    }

    /// Books on behalf of `patient_id`, copying the names and specialization
    /// from the directory.
    pub async fn book(
        &self,
        doctor_id: &str,
        patient_id: &str,
        appointment_date: DateTime<Utc>,
    ) -> Result<Appointment, AppError> {
        let doctor = self.require_account(doctor_id, Role::Doctor).await?;
        let patient = self.require_account(patient_id, Role::Patient).await?;

        self.create(NewAppointment {
            doctor_id: doctor.id,
            patient_id: patient.id,
            appointment_date,
            doctor_name: doctor.name,
            doctor_specialization: doctor.specialization.unwrap_or_default(),
            patient_name: patient.name,
        })
        .await
    }

    pub async fn get_appointment(&self, appointment_id: &str) -> Result<Appointment, AppError> {
        self.directory
            .find_appointment(appointment_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Appointment {}", appointment_id)))
    }

    /// Moves an appointment to `new_status`. Only the status changes.
    pub async fn transition(
        &self,
        appointment_id: &str,
        new_status: AppointmentStatus,
    ) -> Result<Appointment, AppError> {
        debug!("Transitioning appointment {} to {}", appointment_id, new_status);

        let current = self.get_appointment(appointment_id).await?;
        self.lifecycle_service
            .validate_status_transition(current.status, new_status)?;

        // Re-checked against `current.status` under the store's write lock.
        let updated = self
            .directory
            .update_appointment_status(appointment_id, current.status, new_status)
            .await
            .map_err(|err| {
                warn!("Transition of appointment {} rejected: {}", appointment_id, err);
                err
            })?;

        info!(
            "Appointment {} moved from {} to {}",
            appointment_id, current.status, updated.status
        );
        Ok(updated)
    }

    /// Appointments owned by `owner_id` in the given role, in insertion order.
    /// With no owner every appointment is returned.
    pub async fn list_for(&self, owner: Option<(&str, Role)>) -> Vec<Appointment> {
        let appointments = self.directory.list_appointments().await;

        match owner {
            None => appointments,
            Some((owner_id, role)) => appointments
                .into_iter()
                .filter(|appointment| match role {
                    Role::Patient => appointment.patient_id == owner_id,
                    Role::Doctor => appointment.doctor_id == owner_id,
                })
                .collect(),
        }
    }

    pub async fn list_for_account(
        &self,
        account: &Account,
        filter: &AppointmentFilter,
    ) -> Vec<Appointment> {
        self.list_for(Some((account.id.as_str(), account.role)))
            .await
            .into_iter()
            .filter(|appointment| filter.matches(appointment))
            .collect()
    }

    pub async fn stats_for_account(&self, account: &Account) -> AppointmentStats {
        let appointments = self.list_for(Some((account.id.as_str(), account.role))).await;
        AppointmentStats::from_appointments(&appointments)
    }

    pub fn booking_slots(&self) -> Vec<NaiveTime> {
        [MORNING_SLOTS, AFTERNOON_SLOTS]
            .into_iter()
            .flat_map(|(start, end)| {
                (start..end).flat_map(|hour| {
                    [0, 30]
                        .into_iter()
                        .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
                })
            })
            .collect()
    }

    async fn require_account(&self, id: &str, role: Role) -> Result<Account, AppError> {
        match self.directory.find_account(id).await {
            Some(account) if account.role == role => Ok(account),
            _ => {
                warn!("No {} account with id {}", role, id);
                Err(AppError::NotFound(format!("{} {}", role, id)))
            }
        }
    }
}
