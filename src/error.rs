use thiserror::Error;

/// Main error type for Flickr API operations
#[derive(Debug, Error)]
pub enum FlickrError {
    /// Signing was requested but no API secret is configured
    #[error("no API secret configured, cannot sign request")]
    MissingSecret,

    /// A call was invoked without any accumulated method path
    #[error("cannot invoke a call with an empty method path")]
    EmptyMethod,

    /// HTTP transport error with a status code
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The transport returned bytes that are not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// An access was performed against an incompatible response shape
    #[error("response shape mismatch: expected {expected}, found {found}")]
    Shape {
        expected: &'static str,
        found: &'static str,
    },

    /// Indexed access past the end of a response sequence
    #[error("index {0} out of bounds")]
    Index(usize),

    /// Keyed access to a response mapping entry that does not exist
    #[error("key {0:?} not present")]
    Key(String),
}

impl FlickrError {
    /// Create a new HTTP error
    pub fn http(status: u16, body: String) -> Self {
        FlickrError::Http { status, body }
    }

    /// Create a new shape mismatch error
    pub fn shape(expected: &'static str, found: &'static str) -> Self {
        FlickrError::Shape { expected, found }
    }

    /// Check if this error is a response shape error (including absent
    /// index/key accesses)
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            FlickrError::Shape { .. } | FlickrError::Index(_) | FlickrError::Key(_)
        )
    }

    /// Get the HTTP status code if this is a transport error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FlickrError::Http { status, .. } => Some(*status),
            FlickrError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Flickr API operations
pub type Result<T> = std::result::Result<T, FlickrError>;
