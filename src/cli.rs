use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use squad_watch::Config;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football squad watcher
///
/// Walks the team endpoints of the API by ID (1, 2, 3, ...) until every team
/// on the watch-list has been seen, then prints each collected player as
/// `name; age; team, team...`, sorted by name.
///
/// The report goes to stdout; errors and warnings go to stderr.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Team to watch. Repeat to watch several; replaces the configured watch-list.
    #[arg(short = 't', long = "team", value_name = "NAME", help_heading = "Polling")]
    pub teams: Vec<String>,

    /// Stop after trying this many team IDs even if teams are still pending.
    /// Without it polling continues until every watched team is found.
    #[arg(long = "max-attempts", value_name = "N", help_heading = "Polling")]
    pub max_attempts: Option<u64>,

    /// Number of team requests kept in flight.
    #[arg(short = 'j', long = "concurrency", value_name = "N", help_heading = "Polling")]
    pub concurrency: Option<usize>,

    /// HTTP timeout in seconds. Requests never time out by default.
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Polling")]
    pub timeout_seconds: Option<u64>,

    /// Update API domain in config and exit.
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write info and debug logs to stderr as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command line values on top of file and environment settings.
    pub fn apply_overrides(&self, config: &mut Config) {
        if !self.teams.is_empty() {
            config.watch_list = self.teams.clone();
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = Some(max_attempts);
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.http_timeout_seconds = Some(timeout);
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }
}
