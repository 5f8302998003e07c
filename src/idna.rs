//! Internationalized host conversion.
//!
//! Conversion uses UTS #46 non-transitional processing when the `idna`
//! feature is enabled. Without it, or whenever a host cannot be converted,
//! both functions return the input unchanged; they never fail.

use std::borrow::Cow;

/// Converts a host to its ASCII-compatible encoding.
///
/// ```
/// use net_uri::idna::to_ascii;
///
/// # #[cfg(feature = "idna")]
/// assert_eq!(to_ascii("ηßöø必Дあ.com"), "xn--zca0cg32z7rau82strvd.com");
/// assert_eq!(to_ascii(""), "");
/// ```
#[must_use]
pub fn to_ascii(host: &str) -> Cow<'_, str> {
    if host.is_empty() || is_ip_literal(host) {
        return Cow::Borrowed(host);
    }
    imp::to_ascii(host)
}

/// Converts a host from its ASCII-compatible encoding to Unicode.
///
/// ```
/// use net_uri::idna::to_unicode;
///
/// # #[cfg(feature = "idna")]
/// assert_eq!(to_unicode("xn--zca0cg32z7rau82strvd.com"), "ηßöø必дあ.com");
/// assert_eq!(to_unicode(""), "");
/// ```
#[must_use]
pub fn to_unicode(host: &str) -> Cow<'_, str> {
    if host.is_empty() || is_ip_literal(host) {
        return Cow::Borrowed(host);
    }
    imp::to_unicode(host)
}

fn is_ip_literal(host: &str) -> bool {
    host.starts_with('[')
}

#[cfg(feature = "idna")]
mod imp {
    use std::borrow::Cow;

    pub(super) fn to_ascii(host: &str) -> Cow<'_, str> {
        match ::idna::domain_to_ascii(host) {
            Ok(ascii) if ascii == host => Cow::Borrowed(host),
            Ok(ascii) => Cow::Owned(ascii),
            Err(e) => {
                tracing::debug!(host, error = ?e, "host left unconverted");
                Cow::Borrowed(host)
            }
        }
    }

    pub(super) fn to_unicode(host: &str) -> Cow<'_, str> {
        match ::idna::domain_to_unicode(host) {
            (unicode, Ok(())) if unicode == host => Cow::Borrowed(host),
            (unicode, Ok(())) => Cow::Owned(unicode),
            (_, Err(e)) => {
                tracing::debug!(host, error = ?e, "host left unconverted");
                Cow::Borrowed(host)
            }
        }
    }
}

#[cfg(not(feature = "idna"))]
mod imp {
    use std::borrow::Cow;

    pub(super) fn to_ascii(host: &str) -> Cow<'_, str> {
        Cow::Borrowed(host)
    }

    pub(super) fn to_unicode(host: &str) -> Cow<'_, str> {
        Cow::Borrowed(host)
    }
}
