use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// Create the default HTTP client for API requests
/// with settings for connection pooling and timeouts
pub fn create_rest_client() -> Client {
    ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .timeout(Duration::from_secs(300)) // 5 minutes
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}

/// Configuration for the Flickr API client
#[derive(Debug, Clone)]
pub struct Config {
    /// REST endpoint all method calls are dispatched to
    pub rest_url: String,
    /// Interactive authorization endpoint used by the login URL helper
    pub auth_url: String,
    /// Enable debug logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rest_url: "http://api.flickr.com/services/rest/".to_string(),
            auth_url: "http://www.flickr.com/services/auth/".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Create a configuration with custom endpoint URLs
    pub fn new(rest_url: String, auth_url: String) -> Self {
        Config {
            rest_url,
            auth_url,
            debug: false,
        }
    }

    /// Set debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
