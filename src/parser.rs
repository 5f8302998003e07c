use crate::{component::Scheme, error::ParseError};

type Result<T> = core::result::Result<T, ParseError>;

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(ParseError {
            index: $index as u32,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

/// Raw components of a URI reference, as they appear in the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<AuthParts<'a>>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Raw subcomponents of an authority.
///
/// An empty authority (as in `"file:///"`) has an empty host and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AuthParts<'a> {
    pub user: Option<&'a str>,
    pub pass: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
}

pub(crate) fn parse(s: &str) -> Result<Parts<'_>> {
    let mut parser = Parser {
        reader: Reader::new(s),
    };
    parser.parse_from_scheme()
}

/// URI reference parser.
///
/// # Invariants
///
/// `pos <= len`, `pos` is non-decreasing and only ever advanced past ASCII
/// delimiters or up to one, so it always lies on a `char` boundary.
struct Parser<'a> {
    reader: Reader<'a>,
}

struct Reader<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(s: &'a str) -> Self {
        Reader { s, pos: 0 }
    }

    fn rem(&self) -> &'a str {
        &self.s[self.pos..]
    }

    // Any call to this method must keep the invariants.
    fn skip(&mut self, n: usize) {
        // INVARIANT: `pos` is non-decreasing.
        self.pos += n;
        debug_assert!(self.pos <= self.s.len());
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.rem().starts_with(s) {
            // INVARIANT: The remaining bytes start with `s` so it's fine to skip `s.len()`.
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    /// Reads up to (not including) the first of `delims`, or to the end.
    fn read_until(&mut self, delims: &[u8]) -> &'a str {
        let rem = self.rem();
        let len = rem
            .bytes()
            .position(|x| delims.contains(&x))
            .unwrap_or(rem.len());
        // INVARIANT: `delims` are ASCII so `len` is on a `char` boundary.
        self.skip(len);
        &rem[..len]
    }
}

impl<'a> Parser<'a> {
    fn parse_from_scheme(&mut self) -> Result<Parts<'a>> {
        let scheme = self.read_scheme()?;

        let authority = if self.reader.read_str("//") {
            let start = self.reader.pos;
            let auth = self.reader.read_until(b"/?#");
            Some(parse_authority(auth, start)?)
        } else {
            None
        };

        let path = self.reader.read_until(b"?#");
        let query = self
            .reader
            .read_str("?")
            .then(|| self.reader.read_until(b"#"));
        let fragment = self.reader.read_str("#").then(|| {
            let rem = self.reader.rem();
            self.reader.skip(rem.len());
            rem
        });

        Ok(Parts {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    // A scheme is whatever precedes the first ":" when no "/", "?" or "#"
    // comes before it.
    fn read_scheme(&mut self) -> Result<Option<&'a str>> {
        let rem = self.reader.rem();
        match rem.bytes().position(|x| matches!(x, b':' | b'/' | b'?' | b'#')) {
            Some(i) if i > 0 && rem.as_bytes()[i] == b':' => {
                let scheme = &rem[..i];
                if Scheme::new(scheme).is_none() {
                    err!(self.reader.pos, InvalidScheme);
                }
                self.reader.skip(i + 1);
                Ok(Some(scheme))
            }
            _ => Ok(None),
        }
    }
}

/// Splits an authority into its subcomponents.
///
/// `offset` is the index of the authority in the input and is only used
/// for error reporting.
fn parse_authority(auth: &str, offset: usize) -> Result<AuthParts<'_>> {
    let (userinfo, host_port) = match auth.rfind('@') {
        Some(i) => (Some(&auth[..i]), &auth[i + 1..]),
        None => (None, auth),
    };

    let (user, pass) = match userinfo {
        Some(userinfo) => match userinfo.split_once(':') {
            Some((user, pass)) => (user, Some(pass)),
            None => (userinfo, None),
        },
        None => ("", None),
    };

    let (host, port) = if host_port.starts_with('[') {
        match host_port.find(']') {
            Some(i) => host_port.split_at(i + 1),
            None => err!(offset, InvalidAuthority),
        }
    } else {
        match host_port.find(':') {
            Some(i) => host_port.split_at(i),
            None => (host_port, ""),
        }
    };

    let port = if port.is_empty() {
        None
    } else {
        let Some(digits) = port.strip_prefix(':') else {
            err!(offset, InvalidAuthority);
        };
        if !digits.bytes().all(|x| x.is_ascii_digit()) {
            err!(offset, InvalidAuthority);
        }
        if digits.is_empty() {
            None
        } else {
            match digits.parse::<u16>() {
                Ok(port) => Some(port),
                Err(_) => err!(offset + auth.len() - digits.len(), InvalidPort),
            }
        }
    };

    if user.is_empty() && pass.is_some() {
        err!(offset, PasswordWithoutUser);
    }
    if host.is_empty() {
        if !user.is_empty() {
            err!(offset, UserinfoWithoutHost);
        }
        if port.is_some() {
            err!(offset, PortWithoutHost);
        }
    }

    Ok(AuthParts {
        user: (!user.is_empty()).then_some(user),
        pass,
        host,
        port,
    })
}
