use md5::{Digest, Md5};
use serde_json::Value;
use std::collections::HashMap;
use url::form_urlencoded;

use crate::error::{FlickrError, Result};

/// Param is a convenience type for parameters passed to API requests.
pub type Param = HashMap<String, Value>;

/// Render a parameter value in its stable string form.
///
/// The same value always yields the same string: the request signature is
/// computed over these renderings, so any instability would break the
/// remote signature check.
pub fn value_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // Containers are not meaningful as query parameters, but coerce
        // them deterministically rather than failing mid-signature.
        other => other.to_string(),
    }
}

/// Canonicalize a parameter set into (name, value) string pairs sorted by
/// name ascending. The ordering is an invariant of the protocol: both the
/// query string and the signature input depend on it, never on the order
/// the caller inserted entries.
pub fn canonical_query(params: &Param) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.clone(), value_str(v)))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Encode a parameter set as a form-urlencoded query string in canonical
/// order. Used for GET query strings, POST bodies, and the login URL.
pub fn encode_query(params: &Param) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(canonical_query(params))
        .finish()
}

/// Compute the request signature: the MD5 hex digest of the secret
/// followed by every canonically ordered name+value pair, concatenated
/// without separators. MD5 is fixed by the remote service's signature
/// check.
pub fn sign(secret: Option<&str>, params: &Param) -> Result<String> {
    let secret = secret.ok_or(FlickrError::MissingSecret)?;

    let mut hasher = Md5::new();
    hasher.update(secret.as_bytes());
    for (name, value) in canonical_query(params) {
        hasher.update(name.as_bytes());
        hasher.update(value.as_bytes());
    }
    Ok(format!("{:x}", hasher.finalize()))
}
