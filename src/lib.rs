//! Football squad watcher library
//!
//! Walks a team API by numeric ID, collects the players of a watch-list of
//! teams and renders them as a sorted roster.
//!
//! # Examples
//!
//! ```rust,no_run
//! use squad_watch::{Config, Roster, WatchList, create_http_client, poll_teams, write_report};
//! use squad_watch::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config {
//!         watch_list: vec!["Chelsea".to_string(), "Arsenal".to_string()],
//!         max_attempts: Some(200),
//!         ..Config::default()
//!     };
//!     let client = create_http_client(config.http_timeout_seconds)?;
//!
//!     let mut watch_list = WatchList::new(config.watch_list.iter().cloned());
//!     let mut roster = Roster::new();
//!     poll_teams(&client, &config, &mut watch_list, &mut roster).await;
//!
//!     write_report(&mut std::io::stdout(), &roster)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod poller;
pub mod roster;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{FetchEnvelope, PlayerRecord, TeamRecord, create_http_client, fetch_team};
pub use error::AppError;
pub use poller::{PollSummary, poll_teams};
pub use roster::{
    AggregateOutcome, PlayerInfo, Roster, WatchList, aggregate, render_report, write_report,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
