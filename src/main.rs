// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::Args;
use squad_watch::{
    AppError, Config, Roster, WatchList, create_http_client, poll_teams, write_report,
};
use std::io::stdout;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if let Some(new_domain) = &args.new_api_domain {
        let mut config = Config::load().await.unwrap_or_default();
        config.api_domain = new_domain.clone();
        config.validate()?;
        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    let mut config = Config::load().await?;
    args.apply_overrides(&mut config);
    config.validate()?;

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let client = create_http_client(config.http_timeout_seconds)?;
    let mut watch_list = WatchList::new(config.watch_list.iter().cloned());
    let mut roster = Roster::new();

    let summary = poll_teams(&client, &config, &mut watch_list, &mut roster).await;
    info!(
        "Poll finished at team ID {}: {} fetched, {} failed, {} players collected",
        summary.last_team_id,
        summary.successful_fetches,
        summary.failed_fetches,
        roster.len()
    );

    write_report(&mut stdout().lock(), &roster)?;

    Ok(())
}
