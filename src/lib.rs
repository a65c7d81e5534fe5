//! Permissive parser and serializer for generic URI strings.
//!
//! This crate splits a URI into its components, lets the query be edited
//! as key-value parameters, and writes the components back out. Parsing and
//! serialization are inverses for well-formed input.
//!
//! # Overview
//!
//! A URI is read as a sequence of optional segments:
//!
//! ```text
//! [scheme://][user[:password]@]host[:port][/path][?query][#fragment]
//! ```
//!
//! Nothing beyond that structure is checked: there is no percent-decoding,
//! no host or port validation and no reference resolution. Almost any
//! string parses.
//!
//! # Quick Start
//!
//! ```rust
//! use lax_uri::Uri;
//!
//! // Parse a URI
//! let mut uri = Uri::parse("https://www.example.com:8080/some-path.html?a=b").unwrap();
//!
//! // Access components
//! assert_eq!(uri.scheme(), Some("https"));
//! assert_eq!(uri.host(), Some("www.example.com"));
//! assert_eq!(uri.port(), Some("8080"));
//! assert_eq!(uri.query(), Some("?a=b"));
//!
//! // Edit the query
//! uri.append_query_var("c", "d");
//! uri.remove_query_var("a");
//! assert_eq!(uri.to_string(), "https://www.example.com:8080/some-path.html?c=d");
//! ```
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `json` (default) | [`Uri::to_json`] diagnostic dump; implies `serde` |
//! | `serde` | `Serialize`/`Deserialize` for [`Uri`] and [`QueryParams`] |
//! | `kani` | model-checking harnesses, built under `cfg(kani)` |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod matcher;
pub mod prelude;
pub mod query;
mod uri;

pub use constants::{
    COLON, FRAGMENT_START, KEY_VALUE_SEPARATOR, PARAM_SEPARATOR, PATH_START, QUERY_START,
    SCHEME_SEPARATOR, USERINFO_TERMINATOR,
};
pub use error::{ParseError, ParseErrorKind};
pub use matcher::{match_components, Component, Components};
pub use query::QueryParams;
pub use uri::Uri;
