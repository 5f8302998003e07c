#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

//! An immutable URI value with copy-on-write builders, following [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! A [`Uri`] is parsed from a string, stores each component in canonical
//! percent-encoded form and renders back to a string, optionally under a set
//! of [`Flags`] that require the default port, normalize the path or convert
//! the host to or from its ASCII-compatible encoding.
//!
//! ```
//! use net_uri::{Flags, Uri};
//!
//! let uri = Uri::parse("HTTP://Domain.TLD:80/path/../with space?q=1")?;
//! assert_eq!(uri.to_string(), "http://domain.tld/path/../with%20space?q=1");
//! assert_eq!(
//!     uri.format(Flags::REQUIRE_PORT | Flags::NORMALIZE_PATH),
//!     "http://domain.tld:80/with%20space?q=1"
//! );
//!
//! let uri = uri.with_scheme("https", Flags::NONE)?.with_port(None, Flags::NONE)?;
//! assert_eq!(uri.to_string(), "https://domain.tld/path/../with%20space?q=1");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! - `idna` (default): Converts hosts under [`Flags::IDN_ENCODE`] and
//!   [`Flags::IDN_DECODE`] using the `idna` crate. Without it the
//!   conversion leaves hosts unchanged.
//!
//! - `serde`: Implements `Serialize` and `Deserialize` for [`Uri`]
//!   through its string form.

pub mod component;
pub mod error;
mod flags;
pub mod idna;
pub mod normalize;
mod parser;
pub mod pct_enc;
pub mod query;
mod uri;

pub use error::{Error, ErrorKind, ParseError, ParseErrorKind};
pub use flags::{Deprecation, Flags};
pub use query::{QueryItems, QueryValue};
pub use uri::{Components, Uri, Value, DEFAULT_TEMPLATE};
