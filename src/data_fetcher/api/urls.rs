//! URL building utilities for API endpoints

/// Builds the URL of a single team endpoint.
///
/// # Arguments
/// * `api_domain` - The base API domain
/// * `language` - Language segment of the path, e.g. `en`
/// * `team_id` - Numeric team identifier
///
/// # Example
/// ```
/// use squad_watch::data_fetcher::api::build_team_url;
///
/// let url = build_team_url("https://api.example.com", "en", 42);
/// assert_eq!(url, "https://api.example.com/api/teams/en/42.json");
/// ```
pub fn build_team_url(api_domain: &str, language: &str, team_id: u64) -> String {
    let api_domain = api_domain.trim_end_matches('/');
    format!("{api_domain}/api/teams/{language}/{team_id}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_team_url() {
        assert_eq!(
            build_team_url("https://vintagemonster.onefootball.com", "en", 1),
            "https://vintagemonster.onefootball.com/api/teams/en/1.json"
        );
    }

    #[test]
    fn test_build_team_url_trailing_slash() {
        assert_eq!(
            build_team_url("http://localhost:8080/", "de", 105),
            "http://localhost:8080/api/teams/de/105.json"
        );
    }
}
