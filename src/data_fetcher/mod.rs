pub mod api;
pub mod models;

pub use api::{build_team_url, create_http_client, fetch_team};
pub use models::{FetchEnvelope, PlayerRecord, TeamRecord};
