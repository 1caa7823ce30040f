use super::Config;
use crate::constants::MAX_CONCURRENCY;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - Language segment cannot be empty or contain a slash
/// - Watch-list must name at least one team and no blank names
/// - Concurrency must be between 1 and `MAX_CONCURRENCY`
/// - A configured attempt bound must be positive
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_api_domain(&config.api_domain)?;

    if config.language.is_empty() || config.language.contains('/') {
        return Err(AppError::config_error(format!(
            "Invalid language segment '{}'",
            config.language
        )));
    }

    if config.watch_list.is_empty() {
        return Err(AppError::config_error("Watch-list must name at least one team"));
    }
    if config.watch_list.iter().any(|team| team.trim().is_empty()) {
        return Err(AppError::config_error("Watch-list contains a blank team name"));
    }

    if !(1..=MAX_CONCURRENCY).contains(&config.concurrency) {
        return Err(AppError::config_error(format!(
            "Concurrency must be between 1 and {MAX_CONCURRENCY}, got {}",
            config.concurrency
        )));
    }

    if config.max_attempts == Some(0) {
        return Err(AppError::config_error("max_attempts must be greater than zero"));
    }

    if let Some(log_path) = &config.log_file_path {
        validate_log_path(log_path)?;
    }

    Ok(())
}

fn validate_api_domain(api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    Ok(())
}

fn validate_log_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}
