use serde_json::Value;
use std::sync::Arc;

use crate::call::MethodCall;
use crate::client::Config;
use crate::creds::Credentials;
use crate::error::Result;
use crate::sign::{self, Param};
use crate::transport::{HttpTransport, Transport};

/// Entry point for the Flickr API.
///
/// Holds the credentials and spawns a [`MethodCall`] builder for any
/// method path; the path is supplied as a dot-delimited literal and can
/// be extended fluently from there.
pub struct Flickr {
    creds: Arc<Credentials>,
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Flickr {
    /// Create a client for unauthenticated calls
    pub fn new(api_key: String) -> Self {
        Flickr {
            creds: Arc::new(Credentials::new(api_key)),
            config: Config::default(),
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Create a client with a signing secret for authenticated calls
    pub fn with_secret(api_key: String, secret: String) -> Self {
        Flickr {
            creds: Arc::new(Credentials::with_secret(api_key, secret)),
            config: Config::default(),
            transport: Arc::new(HttpTransport::new()),
        }
    }

    /// Use a custom configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of the default HTTP client
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Start a call builder from a dot-delimited method path, e.g.
    /// `"people.findByEmail"`. The namespace prefix is added at
    /// invocation time; the path can be extended further with
    /// [`MethodCall::push`].
    pub fn method(&self, path: &str) -> MethodCall {
        let segments = path
            .split('.')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        MethodCall::new(
            Arc::clone(&self.creds),
            self.config.clone(),
            Arc::clone(&self.transport),
            segments,
        )
    }

    /// Build the interactive authorization URL for a single-use frob and
    /// permission scope. The parameter set is signed with the configured
    /// secret; this targets the auth endpoint directly and returns a URL
    /// rather than going through a method call.
    pub fn get_login_url(&self, frob: &str, perms: &str) -> Result<String> {
        let mut params = Param::new();
        params.insert(
            "api_key".to_string(),
            Value::String(self.creds.api_key.clone()),
        );
        params.insert("frob".to_string(), Value::String(frob.to_string()));
        params.insert("perms".to_string(), Value::String(perms.to_string()));

        let signature = sign::sign(self.creds.secret(), &params)?;
        params.insert("api_sig".to_string(), Value::String(signature));

        Ok(format!(
            "{}?{}",
            self.config.auth_url,
            sign::encode_query(&params)
        ))
    }

    /// Build the authorization URL with the default "read" permission
    /// scope
    pub fn login_url(&self, frob: &str) -> Result<String> {
        self.get_login_url(frob, "read")
    }
}

impl Clone for Flickr {
    fn clone(&self) -> Self {
        Flickr {
            creds: Arc::clone(&self.creds),
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl std::fmt::Debug for Flickr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flickr")
            .field("creds", &self.creds)
            .field("config", &self.config)
            .finish()
    }
}
