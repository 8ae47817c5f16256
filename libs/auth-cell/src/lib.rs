pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use middleware::session_middleware;
pub use models::{CurrentSession, LoginRequest, SessionResponse};
pub use router::auth_routes;
pub use services::{FileSessionStore, IdentityService, MemorySessionStore, SessionStore, SESSION_KEY};
