pub mod identity;
pub mod session;
pub mod validation;

pub use identity::IdentityService;
pub use session::{FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY};
