pub mod http_client;
pub mod urls;
mod fetch_utils;
mod team_api;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export team endpoint operations
pub use team_api::fetch_team;
