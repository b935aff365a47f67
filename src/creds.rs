/// Credentials holds the API key and optional shared secret used to sign
/// authenticated requests. Immutable once constructed; the client root
/// shares one instance with every call builder it spawns.
#[derive(Clone)]
pub struct Credentials {
    /// API key identifier, sent with every request
    pub api_key: String,
    /// Shared signing secret, required only for authenticated calls
    secret: Option<String>,
}

impl Credentials {
    /// Create credentials for unauthenticated calls
    pub fn new(api_key: String) -> Self {
        Credentials {
            api_key,
            secret: None,
        }
    }

    /// Create credentials with a signing secret
    pub fn with_secret(api_key: String, secret: String) -> Self {
        Credentials {
            api_key,
            secret: Some(secret),
        }
    }

    /// Get the signing secret, if one is configured
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Check whether authenticated calls are possible
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }
}

// Implement Debug manually to avoid exposing the secret
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_without_secret() {
        let creds = Credentials::new("key123".to_string());
        assert_eq!(creds.api_key, "key123");
        assert!(!creds.has_secret());
        assert_eq!(creds.secret(), None);
    }

    #[test]
    fn test_credentials_with_secret() {
        let creds = Credentials::with_secret("key123".to_string(), "s3cret".to_string());
        assert!(creds.has_secret());
        assert_eq!(creds.secret(), Some("s3cret"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::with_secret("key123".to_string(), "s3cret".to_string());
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("s3cret"), "secret leaked in Debug output");
        assert!(debug.contains("<redacted>"));
    }
}
