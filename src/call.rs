use serde_json::Value;
use std::sync::Arc;

use crate::client::Config;
use crate::creds::Credentials;
use crate::error::{FlickrError, Result};
use crate::response::FlickrValue;
use crate::sign::{self, Param};
use crate::transport::{RequestDescriptor, Transport};

/// Namespace prefix applied to every accumulated method path.
const METHOD_NAMESPACE: &str = "flickr";

/// Transport verb for a method call. Read calls carry their parameters in
/// the URL query string; write calls send them as a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

/// A pending call against the remote API, identified by an accumulated
/// dot-delimited method path.
///
/// A `MethodCall` is immutable: extending the path with [`push`] returns a
/// new instance, so two calls branched off a shared prefix never interfere
/// with each other. Credentials are shared by reference with the client
/// root that spawned the builder.
///
/// [`push`]: MethodCall::push
#[derive(Clone)]
pub struct MethodCall {
    creds: Arc<Credentials>,
    config: Config,
    transport: Arc<dyn Transport>,
    segments: Vec<String>,
}

impl MethodCall {
    pub(crate) fn new(
        creds: Arc<Credentials>,
        config: Config,
        transport: Arc<dyn Transport>,
        segments: Vec<String>,
    ) -> Self {
        MethodCall {
            creds,
            config,
            transport,
            segments,
        }
    }

    /// Extend the method path with one more segment, returning a new
    /// builder. Works for unbounded depth.
    pub fn push(&self, name: &str) -> MethodCall {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        MethodCall {
            creds: Arc::clone(&self.creds),
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            segments,
        }
    }

    /// Get the fully namespaced remote method name, e.g.
    /// `flickr.people.findByEmail`
    pub fn method_name(&self) -> Result<String> {
        if self.segments.is_empty() {
            return Err(FlickrError::EmptyMethod);
        }
        Ok(format!("{}.{}", METHOD_NAMESPACE, self.segments.join(".")))
    }

    /// Build the transport request for this call without dispatching it.
    ///
    /// Fixed protocol parameters (API key, JSON output format, the
    /// computed method name, the no-callback flag) are merged with the
    /// caller's parameters; caller values win on collision except for the
    /// method name, which is always the computed one. When `authenticated`
    /// is set the merged set is signed and the signature added under
    /// `api_sig`.
    pub fn build_request(
        &self,
        verb: Verb,
        authenticated: bool,
        params: Param,
    ) -> Result<RequestDescriptor> {
        let method = self.method_name()?;

        let mut merged = Param::new();
        merged.insert("api_key".to_string(), Value::String(self.creds.api_key.clone()));
        merged.insert("format".to_string(), Value::String("json".to_string()));
        merged.insert("nojsoncallback".to_string(), Value::Number(1.into()));
        merged.extend(params);
        // Callers must not be able to redirect the call to another method.
        merged.insert("method".to_string(), Value::String(method));

        if authenticated {
            let signature = sign::sign(self.creds.secret(), &merged)?;
            merged.insert("api_sig".to_string(), Value::String(signature));
        }

        let query = sign::encode_query(&merged);
        let descriptor = match verb {
            Verb::Get => RequestDescriptor::Get {
                url: format!("{}?{}", self.config.rest_url, query),
            },
            Verb::Post => RequestDescriptor::Post {
                url: self.config.rest_url.clone(),
                body: query,
            },
        };
        Ok(descriptor)
    }

    /// Invoke the accumulated method: build the request, dispatch it to
    /// the transport, decode the JSON response, and wrap it for
    /// navigation.
    pub fn invoke(
        &self,
        verb: Verb,
        authenticated: bool,
        params: Param,
    ) -> Result<FlickrValue> {
        let method = self.method_name()?;
        let request = self.build_request(verb, authenticated, params)?;

        let start = std::time::Instant::now();
        let bytes = self.transport.execute(&request)?;

        if self.config.debug {
            let duration = start.elapsed();
            eprintln!(
                "[flickr] {} {:?} => {:?} ({} bytes)",
                method,
                verb,
                duration,
                bytes.len()
            );
        }

        let value: Value = serde_json::from_slice(&bytes)?;
        Ok(FlickrValue::new(value))
    }

    /// Invoke with the read verb, unauthenticated
    pub fn get(&self, params: Param) -> Result<FlickrValue> {
        self.invoke(Verb::Get, false, params)
    }

    /// Invoke with the write verb, unauthenticated
    pub fn post(&self, params: Param) -> Result<FlickrValue> {
        self.invoke(Verb::Post, false, params)
    }
}

impl std::fmt::Debug for MethodCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodCall")
            .field("segments", &self.segments)
            .field("creds", &self.creds)
            .finish()
    }
}
