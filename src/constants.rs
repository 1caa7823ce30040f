//! Application-wide constants and default configuration values

/// Default API domain serving the team endpoints
pub const DEFAULT_API_DOMAIN: &str = "https://vintagemonster.onefootball.com";

/// Default language segment of the team endpoint path
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default number of team requests kept in flight
pub const DEFAULT_CONCURRENCY: usize = 1;

/// Upper limit for the concurrency setting
pub const MAX_CONCURRENCY: usize = 64;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Status value the API uses for a usable response
pub const STATUS_OK: &str = "ok";

/// File name used for the rolling log file
pub const LOG_FILE_NAME: &str = "squad_watch.log";

/// Teams collected when no watch-list is configured
pub const DEFAULT_WATCH_LIST: [&str; 10] = [
    "Germany",
    "England",
    "France",
    "Spain",
    "Manchester United",
    "Arsenal",
    "Chelsea",
    "Barcelona",
    "Real Madrid",
    "Bayern Munich",
];

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "SQUAD_WATCH_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SQUAD_WATCH_LOG_FILE";

    /// Environment variable for HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "SQUAD_WATCH_HTTP_TIMEOUT";

    /// Environment variable bounding the number of team IDs tried
    pub const MAX_ATTEMPTS: &str = "SQUAD_WATCH_MAX_ATTEMPTS";

    /// Environment variable for the number of requests in flight
    pub const CONCURRENCY: &str = "SQUAD_WATCH_CONCURRENCY";
}
