//! URI components.

use crate::pct_enc::table;
use ref_cast::{ref_cast_custom, RefCastCustom};
use std::fmt;

/// Well-known ports, sorted by scheme name.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("acap", 674),
    ("afp", 548),
    ("dict", 2628),
    ("dns", 53),
    ("ftp", 21),
    ("git", 9418),
    ("gopher", 70),
    ("http", 80),
    ("https", 443),
    ("imap", 143),
    ("ipp", 631),
    ("ipps", 631),
    ("irc", 194),
    ("ircs", 6697),
    ("ldap", 389),
    ("ldaps", 636),
    ("mms", 1755),
    ("msrp", 2855),
    ("mtqp", 1038),
    ("nfs", 111),
    ("nntp", 119),
    ("nntps", 563),
    ("pop", 110),
    ("prospero", 1525),
    ("redis", 6379),
    ("rsync", 873),
    ("rtsp", 554),
    ("rtsps", 322),
    ("rtspu", 5005),
    ("sftp", 22),
    ("smb", 445),
    ("snmp", 161),
    ("ssh", 22),
    ("svn", 3690),
    ("telnet", 23),
    ("ventrilo", 3784),
    ("vnc", 5900),
    ("wais", 210),
    ("ws", 80),
    ("wss", 443),
];

/// Returns the well-known port of a scheme, if any.
///
/// The lookup is case-insensitive.
///
/// ```
/// use net_uri::component::default_port;
///
/// assert_eq!(default_port("http"), Some(80));
/// assert_eq!(default_port("WSS"), Some(443));
/// assert_eq!(default_port("urn"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    if scheme.bytes().any(|x| x.is_ascii_uppercase()) {
        return default_port(&scheme.to_ascii_lowercase());
    }
    DEFAULT_PORTS
        .binary_search_by(|(name, _)| (*name).cmp(scheme))
        .ok()
        .map(|i| DEFAULT_PORTS[i].1)
}

/// Checks whether `port` is the well-known port of `scheme`.
#[must_use]
pub fn is_default_port(scheme: &str, port: u16) -> bool {
    default_port(scheme) == Some(port)
}

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively.
///
/// # Examples
///
/// ```
/// use net_uri::{component::Scheme, Uri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("HTTP");
///
/// let uri = Uri::parse("http://example.com/")?;
/// assert_eq!(Scheme::new(uri.scheme()), Some(SCHEME_HTTP));
/// assert_eq!(SCHEME_HTTP.default_port(), Some(80));
/// # Ok::<_, net_uri::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    ///
    /// The empty string is not a valid scheme.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the well-known port of the scheme, if any.
    #[inline]
    #[must_use]
    pub fn default_port(&self) -> Option<u16> {
        default_port(&self.inner)
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
