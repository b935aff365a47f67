//! # flickr-thin - a thin Flickr REST API client
//!
//! A small Rust client for the Flickr API. Remote methods are identified
//! by dot-delimited paths (`people.findByEmail`), requests carry a
//! canonically ordered parameter set that can be MD5-signed for
//! authenticated calls, and responses are navigated through a
//! shape-polymorphic wrapper over the decoded JSON.
//!
//! ## Features
//!
//! - Dynamic method paths of unbounded depth, built from a literal
//!   (`client.method("people.findByEmail")`) or extended fluently
//!   (`.push("findByEmail")`)
//! - Canonical parameter ordering (name ascending) for both the query
//!   string and the request signature
//! - Optional request signing with the API secret
//! - Uniform navigation over scalar, sequence, and mapping responses
//! - Pluggable transport for testing without a network
//!
//! ## Basic Usage
//!
//! ```no_run
//! use flickr_thin::{Flickr, Param, json};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let flickr = Flickr::new("API_KEY".to_string());
//!
//!     let mut params = Param::new();
//!     params.insert("find_email".to_string(), json!("john@example.com"));
//!
//!     let response = flickr.method("people.findByEmail").get(params)?;
//!     let nsid = response.get("user/nsid").expect("user nsid");
//!     println!("found user {}", nsid);
//!     Ok(())
//! }
//! ```
//!
//! ## Authenticated Calls
//!
//! ```no_run
//! use flickr_thin::{Flickr, Param, Verb};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let flickr = Flickr::with_secret("API_KEY".to_string(), "API_SECRET".to_string());
//!
//! let response = flickr
//!     .method("auth.getFrob")
//!     .invoke(Verb::Get, true, Param::new())?;
//! let frob = response.get("frob/_content").expect("frob").to_string();
//! println!("authorize at: {}", flickr.login_url(&frob)?);
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod client;
pub mod creds;
pub mod error;
pub mod response;
pub mod rest;
pub mod sign;
pub mod transport;

// Re-export main types for convenience
pub use call::{MethodCall, Verb};
pub use client::Config;
pub use creds::Credentials;
pub use error::{FlickrError, Result};
pub use response::FlickrValue;
pub use rest::Flickr;
pub use sign::{canonical_query, encode_query, sign, Param};
pub use transport::{HttpTransport, RequestDescriptor, Transport};

// Re-export serde_json for convenience
pub use serde_json::json;
