use serde_json::Value;

use crate::error::{FlickrError, Result};
use crate::sign::value_str;

/// URL template for a user's buddy icon, filled with the icon farm id,
/// icon server id, and the user's NSID.
const ICON_TEMPLATE: &str = "http://farm{farm}.static.flickr.com/{server}/buddyicons/{nsid}.jpg";

/// Placeholder icon returned when a mapping carries no usable icon fields.
const DEFAULT_ICON_URL: &str = "http://www.flickr.com/images/buddyicon.jpg";

/// Shape name of a JSON value, used in error reporting.
fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// FlickrValue wraps one decoded JSON response value and provides uniform
/// navigation over whatever shape the server returned: scalar, sequence,
/// or mapping, nested to any depth. Nested containers are re-wrapped on
/// access, not eagerly at decode time.
///
/// Access semantics are deliberately asymmetric: positional access
/// ([`at`]/[`item`]) models "this element must exist" and fails when it
/// does not, while named-field access ([`field`]) models "maybe this
/// optional attribute exists" and returns `None` for an absent field.
///
/// [`at`]: FlickrValue::at
/// [`item`]: FlickrValue::item
/// [`field`]: FlickrValue::field
#[derive(Debug, Clone, PartialEq)]
pub struct FlickrValue(Value);

impl FlickrValue {
    /// Wrap a decoded JSON value
    pub fn new(value: Value) -> Self {
        FlickrValue(value)
    }

    /// Get the underlying raw JSON value
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the underlying raw JSON value
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Access a sequence element by position. The element must exist:
    /// an out-of-bounds index is an error, and so is indexing anything
    /// that is not a sequence.
    pub fn at(&self, index: usize) -> Result<FlickrValue> {
        match &self.0 {
            Value::Array(items) => items
                .get(index)
                .cloned()
                .map(FlickrValue)
                .ok_or(FlickrError::Index(index)),
            other => Err(FlickrError::shape("sequence", shape_of(other))),
        }
    }

    /// Access a mapping entry by key. The entry must exist: an absent key
    /// is an error, and so is keying into anything that is not a mapping.
    pub fn item(&self, key: &str) -> Result<FlickrValue> {
        match &self.0 {
            Value::Object(map) => map
                .get(key)
                .cloned()
                .map(FlickrValue)
                .ok_or_else(|| FlickrError::Key(key.to_string())),
            other => Err(FlickrError::shape("mapping", shape_of(other))),
        }
    }

    /// Access an optional mapping field by name. An absent field yields
    /// `Ok(None)`; a non-mapping wrapped value is a caller error and
    /// fails with a shape mismatch.
    pub fn field(&self, name: &str) -> Result<Option<FlickrValue>> {
        match &self.0 {
            Value::Object(map) => Ok(map.get(name).cloned().map(FlickrValue)),
            other => Err(FlickrError::shape("mapping", shape_of(other))),
        }
    }

    /// Length of the wrapped sequence. Defined for sequences only; any
    /// other shape, mappings included, is an error.
    pub fn len(&self) -> Result<usize> {
        match &self.0 {
            Value::Array(items) => Ok(items.len()),
            other => Err(FlickrError::shape("sequence", shape_of(other))),
        }
    }

    /// Check whether the wrapped value is an empty sequence
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Traverse a slash-separated path of field names and sequence
    /// positions, e.g. `"contacts/contact/0"`. Returns `None` on any
    /// miss along the way.
    pub fn get(&self, path: &str) -> Option<FlickrValue> {
        let mut current = &self.0;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => {
                    let index: usize = part.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }

        Some(FlickrValue(current.clone()))
    }

    /// Get the wrapped value as a string slice, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Get the wrapped value as an integer, if it is one
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// Get the wrapped value as a float, if it is a number
    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Get the wrapped value as a boolean, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        self.0.as_bool()
    }

    /// Check whether the wrapped value is a sequence
    pub fn is_sequence(&self) -> bool {
        self.0.is_array()
    }

    /// Check whether the wrapped value is a mapping
    pub fn is_mapping(&self) -> bool {
        self.0.is_object()
    }

    /// Check whether the wrapped value is null
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Build the buddy icon URL from the conventional `iconserver`,
    /// `iconfarm`, and `nsid` fields of the wrapped mapping. When
    /// `iconserver` is absent, not a positive integer, or the companion
    /// fields are missing, the fixed placeholder icon is returned. Pure
    /// computation, no network access.
    pub fn icon_url(&self) -> String {
        if let Value::Object(map) = &self.0 {
            if let Some(server) = map.get("iconserver") {
                let server = value_str(server);
                let positive = server.parse::<i64>().map(|n| n > 0).unwrap_or(false);
                if positive {
                    if let (Some(farm), Some(nsid)) = (map.get("iconfarm"), map.get("nsid")) {
                        return ICON_TEMPLATE
                            .replace("{farm}", &value_str(farm))
                            .replace("{server}", &server)
                            .replace("{nsid}", &value_str(nsid));
                    }
                }
            }
        }
        DEFAULT_ICON_URL.to_string()
    }
}

impl From<Value> for FlickrValue {
    fn from(value: Value) -> Self {
        FlickrValue(value)
    }
}

/// Renders the underlying value's natural string form: strings without
/// quotes, other scalars and containers in their JSON rendering. Useful
/// for leaf values such as tokens or numeric ids.
impl std::fmt::Display for FlickrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => f.write_str(&other.to_string()),
        }
    }
}
