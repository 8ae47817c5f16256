pub mod directory;
pub mod memory;
pub mod seed;

pub use directory::DirectoryStore;
pub use memory::{DoctorProfile, InMemoryDirectory};
