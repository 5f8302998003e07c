use super::Uri;
use crate::error::ParseError;
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("user_info", &self.user_info())
            .field("host", &self.host())
            .field("port", &self.port)
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(crate::Flags::NONE))
    }
}

impl FromStr for Uri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = ParseError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uri::parse(&value)
    }
}

/// Serializes the canonical string form, except that an explicit port is
/// written even when it is the default of the scheme, so that deserializing
/// yields an equal `Uri`.
#[cfg(feature = "serde")]
impl Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = self.render(crate::Flags::NONE, super::DEFAULT_TEMPLATE, true);
        serializer.serialize_str(&s)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse(&s).map_err(de::Error::custom)
    }
}
