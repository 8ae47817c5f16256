pub mod account;
pub mod appointment;
pub mod error;

pub use account::{Account, Doctor, RegisterData, Role};
pub use appointment::{Appointment, AppointmentStatus};
pub use error::AppError;
