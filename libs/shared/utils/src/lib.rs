pub mod ids;
pub mod pagination;
pub mod test_utils;

pub use ids::{generate_id, generate_session_key};
pub use pagination::{clamp_page, paginate, total_pages, Page};
