//! Circonus client configuration
use clap::Parser;
use url::Url;

/// Base URL of the production Circonus v2 API.
pub const API_BASE_URL: &str = "https://api.circonus.com/v2";

/// Circonus API configuration options
#[derive(Debug, Clone, Parser)]
pub struct CirconusOpts {
    /// Application name sent in the `X-Circonus-App-Name` header
    #[clap(long, env = "CIRCONUS_APP_NAME")]
    pub app_name: String,
    /// API token sent in the `X-Circonus-Auth-Token` header
    #[clap(long, env = "CIRCONUS_API_TOKEN")]
    pub api_token: String,
    /// Base URL of the Circonus API
    #[clap(long, env = "CIRCONUS_API_URL", default_value = API_BASE_URL)]
    pub api_url: Url,
}

#[cfg(test)]
mod tests {
    use super::CirconusOpts;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        CirconusOpts::command().debug_assert()
    }

    #[test]
    fn test_default_api_url() {
        use clap::Parser;
        let opts = CirconusOpts::parse_from(["test", "--app-name", "TEST", "--api-token", "token"]);
        assert_eq!(opts.api_url.as_str(), "https://api.circonus.com/v2");
    }
}
