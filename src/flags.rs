//! Rendering flags.

use std::{fmt, ops};

/// A set of flags altering how a [`Uri`](crate::Uri) is read, rendered or built.
///
/// Flags are combined with `|`:
///
/// ```
/// use net_uri::{Flags, Uri};
///
/// let uri = Uri::parse("http://domain.tld:80/a/./b/../c")?;
/// assert_eq!(
///     uri.format(Flags::REQUIRE_PORT | Flags::NORMALIZE_PATH),
///     "http://domain.tld:80/a/c"
/// );
/// # Ok::<_, net_uri::ParseError>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flags(u8);

const IDNA_BIT: u8 = 1 << 3;

impl Flags {
    /// No flags.
    pub const NONE: Flags = Flags(0);

    /// Always include a port, explicit or default.
    pub const REQUIRE_PORT: Flags = Flags(1);

    /// Force the path to start with `/`.
    pub const ABSOLUTE_PATH: Flags = Flags(1 << 1);

    /// Remove dot segments from the path.
    pub const NORMALIZE_PATH: Flags = Flags(1 << 2);

    /// Alias of [`IDN_ENCODE`](Self::IDN_ENCODE).
    #[deprecated(note = "use `Flags::IDN_ENCODE` instead")]
    pub const IDNA: Flags = Flags(IDNA_BIT);

    /// Convert the host to its ASCII-compatible encoding.
    pub const IDN_ENCODE: Flags = Flags(1 << 4);

    /// Convert the host from its ASCII-compatible encoding to Unicode.
    pub const IDN_DECODE: Flags = Flags(1 << 5);

    /// Checks whether all flags in `other` are set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }

    /// Checks whether no flag is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Maps deprecated flags to their replacements.
    ///
    /// Returns the effective flags together with a [`Deprecation`] notice
    /// when a deprecated flag was present.
    ///
    /// ```
    /// use net_uri::Flags;
    ///
    /// #[allow(deprecated)]
    /// let (flags, notice) = Flags::IDNA.resolve();
    /// assert_eq!(flags, Flags::IDN_ENCODE);
    /// assert_eq!(
    ///     notice.unwrap().to_string(),
    ///     "Flag IDNA is deprecated; use IDN_ENCODE instead"
    /// );
    ///
    /// assert_eq!(Flags::IDN_DECODE.resolve(), (Flags::IDN_DECODE, None));
    /// ```
    #[must_use]
    pub fn resolve(self) -> (Flags, Option<Deprecation>) {
        if self.0 & IDNA_BIT == 0 {
            return (self, None);
        }
        let flags = Flags(self.0 & !IDNA_BIT).union(Flags::IDN_ENCODE);
        let notice = Deprecation {
            flag: "IDNA",
            replacement: "IDN_ENCODE",
        };
        (flags, Some(notice))
    }

    // Resolves the flags and reports any deprecation on every call.
    pub(crate) fn effective(self) -> Flags {
        let (flags, notice) = self.resolve();
        if let Some(notice) = notice {
            tracing::warn!(%notice, "deprecated flag used");
        }
        flags
    }
}

impl ops::BitOr for Flags {
    type Output = Flags;

    #[inline]
    fn bitor(self, rhs: Flags) -> Flags {
        self.union(rhs)
    }
}

impl ops::BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Flags) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u8, &str); 6] = [
            (1, "REQUIRE_PORT"),
            (1 << 1, "ABSOLUTE_PATH"),
            (1 << 2, "NORMALIZE_PATH"),
            (IDNA_BIT, "IDNA"),
            (1 << 4, "IDN_ENCODE"),
            (1 << 5, "IDN_DECODE"),
        ];
        if self.is_empty() {
            return f.write_str("Flags(NONE)");
        }
        f.write_str("Flags(")?;
        let mut first = true;
        for (bit, name) in NAMES {
            if self.0 & bit != 0 {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// A notice that a deprecated flag was used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deprecation {
    flag: &'static str,
    replacement: &'static str,
}

impl Deprecation {
    /// Returns the name of the deprecated flag.
    #[must_use]
    pub fn flag(&self) -> &'static str {
        self.flag
    }

    /// Returns the name of the flag to use instead.
    #[must_use]
    pub fn replacement(&self) -> &'static str {
        self.replacement
    }
}

impl fmt::Display for Deprecation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flag {} is deprecated; use {} instead",
            self.flag, self.replacement
        )
    }
}
