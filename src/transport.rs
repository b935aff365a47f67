use reqwest::blocking::Client;

use crate::client::create_rest_client;
use crate::error::{FlickrError, Result};

/// A transport-ready request produced by a call builder. The read verb
/// carries everything in the URL; the write verb pairs the fixed endpoint
/// with a separately transmitted form-encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDescriptor {
    /// GET request with the query string already appended to the URL
    Get { url: String },
    /// POST request against a fixed endpoint with a form-encoded body
    Post { url: String, body: String },
}

impl RequestDescriptor {
    /// Get the target URL of this request
    pub fn url(&self) -> &str {
        match self {
            RequestDescriptor::Get { url } => url,
            RequestDescriptor::Post { url, .. } => url,
        }
    }
}

/// Narrow interface to the HTTP layer. The core hands over a fully built
/// request descriptor and expects raw response bytes back; it does not
/// interpret HTTP semantics beyond treating an error return as failure.
pub trait Transport: Send + Sync {
    /// Execute a request and return the raw response body
    fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>>;
}

/// Default transport over a blocking reqwest client.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with the default HTTP client settings
    pub fn new() -> Self {
        HttpTransport {
            client: create_rest_client(),
        }
    }

    /// Create a transport using a caller-provided HTTP client
    pub fn with_client(client: Client) -> Self {
        HttpTransport { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &RequestDescriptor) -> Result<Vec<u8>> {
        let response = match request {
            RequestDescriptor::Get { url } => self.client.get(url).send()?,
            RequestDescriptor::Post { url, body } => self
                .client
                .post(url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body.clone())
                .send()?,
        };

        let status = response.status();
        let bytes = response.bytes()?;

        if status.is_client_error() || status.is_server_error() {
            return Err(FlickrError::http(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }
}
