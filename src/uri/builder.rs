//! Copy-with-override builders.

use super::Uri;
use crate::{
    component::Scheme,
    error::Error,
    query::{QueryItems, QueryValue},
    Flags,
};

/// A value for a component in [`Uri::with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Text for `scheme`, `host`, `path`, `query` or `fragment`.
    Text(String),
    /// A port for `port`; `None` unsets it.
    Port(Option<i64>),
    /// A user and optional password for `userInfo`.
    UserInfo(String, Option<String>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(port: i64) -> Self {
        Self::Port(Some(port))
    }
}

impl From<Option<i64>> for Value {
    fn from(port: Option<i64>) -> Self {
        Self::Port(port)
    }
}

impl Uri {
    /// Returns a copy with the given scheme, lowercased.
    ///
    /// The empty string removes the scheme. The stored port is kept as is,
    /// so a port that was elided as the default of the old scheme may be
    /// rendered explicitly under the new one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a non-empty scheme does not match
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_uri::{Flags, Uri};
    ///
    /// let uri = Uri::parse("http://domain.tld:80")?;
    /// let uri = uri.with_scheme("FTP", Flags::NONE)?;
    /// assert_eq!(uri.to_string(), "ftp://domain.tld:80");
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_scheme(&self, scheme: &str, flags: Flags) -> Result<Uri, Error> {
        let mut uri = self.derive(flags.effective());
        uri.set_scheme(scheme)?;
        Ok(uri)
    }

    /// Returns a copy with the given user and password.
    ///
    /// An empty user removes the userinfo.
    #[must_use]
    pub fn with_user_info(&self, user: &str, pass: Option<&str>, flags: Flags) -> Uri {
        let mut uri = self.derive(flags.effective());
        uri.set_user(user);
        uri.set_pass(pass);
        uri
    }

    /// Returns a copy with the given host, lowercased.
    ///
    /// A non-empty host makes the authority present. The host is converted
    /// first if `flags` contains [`Flags::IDN_ENCODE`] or [`Flags::IDN_DECODE`].
    #[must_use]
    pub fn with_host(&self, host: &str, flags: Flags) -> Uri {
        let flags = flags.effective();
        let mut uri = self.derive(flags);
        uri.set_host(host, flags);
        uri
    }

    /// Returns a copy with the given port; `None` unsets it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the port is out of the range `0..=65535`.
    pub fn with_port(&self, port: Option<i64>, flags: Flags) -> Result<Uri, Error> {
        let mut uri = self.derive(flags.effective());
        uri.set_port(port)?;
        Ok(uri)
    }

    /// Returns a copy with the given path, percent-encoded.
    ///
    /// Dot segments are removed first under [`Flags::NORMALIZE_PATH`], then a
    /// leading `/` is added under [`Flags::ABSOLUTE_PATH`].
    ///
    /// ```
    /// use net_uri::{Flags, Uri};
    ///
    /// let uri = Uri::new().with_path("a/b/../c d", Flags::NORMALIZE_PATH | Flags::ABSOLUTE_PATH);
    /// assert_eq!(uri.path(), "/a/c%20d");
    /// ```
    #[must_use]
    pub fn with_path(&self, path: &str, flags: Flags) -> Uri {
        let flags = flags.effective();
        let mut uri = self.derive(flags);
        uri.set_path(path, flags);
        uri
    }

    /// Returns a copy with the given query, percent-encoded.
    #[must_use]
    pub fn with_query(&self, query: &str, flags: Flags) -> Uri {
        let mut uri = self.derive(flags.effective());
        uri.set_query(query);
        uri
    }

    /// Returns a copy with the given fragment, percent-encoded.
    #[must_use]
    pub fn with_fragment(&self, fragment: &str, flags: Flags) -> Uri {
        let mut uri = self.derive(flags.effective());
        uri.set_fragment(fragment);
        uri
    }

    /// Returns a copy with several components replaced at once.
    ///
    /// Recognized names are `scheme`, `userInfo`, `host`, `port`, `path`,
    /// `query` and `fragment`. Changes apply in order to a single copy.
    ///
    /// # Errors
    ///
    /// Returns `Err` on an unknown name, on a value of the wrong kind for
    /// a name, or on any value the single-component builder would reject.
    /// Nothing is applied in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use net_uri::{Flags, Uri, Value};
    ///
    /// let uri = Uri::new().with(
    ///     [
    ///         ("scheme", Value::from("https")),
    ///         ("host", Value::from("domain.tld")),
    ///         ("port", Value::Port(Some(8080))),
    ///         ("userInfo", Value::UserInfo("user".into(), None)),
    ///     ],
    ///     Flags::NONE,
    /// )?;
    /// assert_eq!(uri.to_string(), "https://user@domain.tld:8080");
    ///
    /// assert!(uri.with([("invalid", Value::from("x"))], Flags::NONE).is_err());
    /// # Ok::<_, net_uri::Error>(())
    /// ```
    pub fn with<'a, I>(&self, components: I, flags: Flags) -> Result<Uri, Error>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let flags = flags.effective();
        let mut uri = self.derive(flags);
        for (name, value) in components {
            match (name, value) {
                ("port", Value::Port(port)) => uri.set_port(port)?,
                ("userInfo", Value::UserInfo(user, pass)) => {
                    uri.set_user(&user);
                    uri.set_pass(pass.as_deref());
                }
                ("scheme", Value::Text(text)) => uri.set_scheme(&text)?,
                ("host", Value::Text(text)) => uri.set_host(&text, flags),
                ("path", Value::Text(text)) => uri.set_path(&text, flags),
                ("query", Value::Text(text)) => uri.set_query(&text),
                ("fragment", Value::Text(text)) => uri.set_fragment(&text),
                ("port", _) => return Err(mismatch("port", "an integer or null")),
                ("userInfo", _) => return Err(mismatch("userInfo", "a user and password")),
                ("scheme", _) => return Err(mismatch("scheme", "a string")),
                ("host", _) => return Err(mismatch("host", "a string")),
                ("path", _) => return Err(mismatch("path", "a string")),
                ("query", _) => return Err(mismatch("query", "a string")),
                ("fragment", _) => return Err(mismatch("fragment", "a string")),
                (name, _) => return Err(Error::UnknownComponent(name.to_owned())),
            }
        }
        Ok(uri)
    }

    /// Returns a copy with a single query item set.
    ///
    /// `None` removes the item. A mapping is merged into an existing mapping
    /// at the same key, any other value replaces the item.
    ///
    /// ```
    /// use net_uri::{Flags, Uri};
    ///
    /// let uri = Uri::parse("?a=1&b=2")?;
    /// let uri = uri.with_query_item("a", Some("x y".into()), Flags::NONE);
    /// let uri = uri.with_query_item("b", None, Flags::NONE);
    /// assert_eq!(uri.query(), "a=x%20y");
    /// # Ok::<_, net_uri::ParseError>(())
    /// ```
    #[must_use]
    pub fn with_query_item(&self, key: &str, value: Option<QueryValue>, flags: Flags) -> Uri {
        self.with_query_items([(key, value)], flags)
    }

    /// Returns a copy with several query items set, as by [`with_query_item`].
    ///
    /// [`with_query_item`]: Self::with_query_item
    #[must_use]
    pub fn with_query_items<'a, I>(&self, items: I, flags: Flags) -> Uri
    where
        I: IntoIterator<Item = (&'a str, Option<QueryValue>)>,
    {
        let mut query = self.query_items();
        for (key, value) in items {
            query.set(key, value);
        }
        let mut uri = self.derive(flags.effective());
        uri.set_query_items(&query);
        uri
    }

    fn set_scheme(&mut self, scheme: &str) -> Result<(), Error> {
        if !scheme.is_empty() && Scheme::new(scheme).is_none() {
            return Err(Error::InvalidScheme(scheme.to_owned()));
        }
        self.scheme = scheme.to_ascii_lowercase();
        Ok(())
    }

    fn set_port(&mut self, port: Option<i64>) -> Result<(), Error> {
        self.port = match port {
            Some(port) => Some(u16::try_from(port).map_err(|_| Error::PortOutOfRange(port))?),
            None => None,
        };
        Ok(())
    }

    fn set_query_items(&mut self, items: &QueryItems) {
        self.set_query(&items.to_string());
    }
}

fn mismatch(component: &'static str, expected: &'static str) -> Error {
    Error::TypeMismatch {
        component,
        expected,
    }
}
