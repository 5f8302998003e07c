//! Dot-segment removal.

/// Removes dot segments from a path.
///
/// The path is scanned once from left to right, split into tokens that are
/// either a segment with its trailing slash or a final segment without one.
/// Empty tokens, `.` and `./` are dropped; a lone `/` is only kept at the very
/// start; `..` and `../` drop the previously kept token unless there is none
/// or it is itself a `..` that could not be resolved.
///
/// Unlike [RFC 3986 Section 5.2.4], leading `..` segments of a relative path
/// are retained since they cannot be resolved without a base.
///
/// [RFC 3986 Section 5.2.4]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4
///
/// # Examples
///
/// ```
/// use net_uri::normalize::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/path/to/../something/./else/.."), "/path/something/");
/// assert_eq!(remove_dot_segments("../a/../.."), "../..");
/// ```
#[must_use]
pub fn remove_dot_segments(path: &str) -> String {
    let mut out: Vec<&str> = Vec::new();

    for seg in tokens(path) {
        match seg {
            "" | "." | "./" => {}
            "/" => {
                if out.is_empty() {
                    out.push(seg);
                }
            }
            ".." | "../" => match out.last() {
                None | Some(&"..") | Some(&"../") => out.push(seg),
                Some(_) => {
                    out.pop();
                }
            },
            _ => out.push(seg),
        }
    }

    out.concat()
}

// Yields `[^/]*/` tokens followed by the trailing `[^/]*` remainder.
fn tokens(path: &str) -> impl Iterator<Item = &str> {
    let rem = match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    };
    path.split_inclusive('/')
        .filter(|seg| seg.ends_with('/'))
        .chain(Some(rem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_keep_trailing_slashes() {
        assert!(tokens("a/b/c").eq(["a/", "b/", "c"]));
        assert!(tokens("/a/").eq(["/", "a/", ""]));
        assert!(tokens("").eq([""]));
    }

    #[test]
    fn unresolvable_parents() {
        assert_eq!(remove_dot_segments(".."), "..");
        assert_eq!(remove_dot_segments("../../a"), "../../a");
        assert_eq!(remove_dot_segments("a/../../b"), "../b");
    }

    #[test]
    fn roots() {
        assert_eq!(remove_dot_segments("///.//.//."), "/");
        assert_eq!(remove_dot_segments(".///.//.//"), "/");
        assert_eq!(remove_dot_segments("/"), "/");
        assert_eq!(remove_dot_segments(""), "");
    }
}
