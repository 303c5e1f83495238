//! Public configuration for the menu client.

use std::time::Duration;

/// Snapshot endpoint used when none is configured.
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Meta-Mobile-Developer-PC/Working-With-Data-API/main/capstone.json";

/// Configuration for the menu client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use lemon_remote::MenuClientConfig;
/// use std::time::Duration;
///
/// let config = MenuClientConfig::new()
///     .with_endpoint("http://localhost:8080/menu.json")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct MenuClientConfig {
    /// Snapshot URL
    pub(crate) endpoint: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout; `None` leaves it to the transport
    pub(crate) timeout: Option<Duration>,
}

impl Default for MenuClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_MENU_URL.to_string(),
            user_agent: concat!("lemon-remote/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl MenuClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapshot URL.
    ///
    /// Defaults to [`DEFAULT_MENU_URL`].
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    ///
    /// By default no timeout is applied.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured snapshot URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
