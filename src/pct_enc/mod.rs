//! Percent-encoding utilities.
//!
//! Components are stored percent-encoded. [`encode`] escapes every byte not
//! allowed by a [`Table`] while leaving well-formed `%XX` triplets as they
//! are, so running it over its own output changes nothing:
//!
//! ```
//! use net_uri::pct_enc::{encode, table};
//!
//! assert_eq!(encode("with space", table::PATH), "with%20space");
//! assert_eq!(encode("encoded%20space", table::PATH), "encoded%20space");
//! assert_eq!(encode("invalid%k9", table::PATH), "invalid%25k9");
//! ```

pub mod table;

pub use table::Table;

use std::borrow::Cow;

/// Checks whether both bytes are hexadecimal digits.
#[inline]
pub(crate) const fn is_hexdig_pair(hi: u8, lo: u8) -> bool {
    hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(is_hexdig_pair(hi, lo));
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

pub(crate) fn encode_byte(x: u8) -> &'static str {
    const TABLE: &[u8; 256 * 3] = &{
        const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

        let mut i = 0;
        let mut table = [0; 256 * 3];
        while i < 256 {
            table[i * 3] = b'%';
            table[i * 3 + 1] = HEX_DIGITS[i >> 4];
            table[i * 3 + 2] = HEX_DIGITS[i & 0b1111];
            i += 1;
        }
        table
    };

    const TABLE_STR: &str = match std::str::from_utf8(TABLE) {
        Ok(s) => s,
        Err(_) => unreachable!(),
    };

    &TABLE_STR[x as usize * 3..x as usize * 3 + 3]
}

/// Checks whether a well-formed percent-encoded triplet starts at `i`.
#[inline]
fn triplet_at(s: &[u8], i: usize) -> bool {
    matches!(s.get(i..i + 3), Some(&[b'%', hi, lo]) if is_hexdig_pair(hi, lo))
}

/// Percent-encodes a string with a table.
///
/// Every byte of the UTF-8 encoding not allowed by `table` is replaced with
/// its `%XX` triplet. When the table allows percent-encoded octets, a `%`
/// that already starts a well-formed triplet is kept, and any other `%`
/// becomes `%25`.
///
/// Returns the input unchanged (borrowed) when nothing needs encoding.
pub fn encode(s: &str, table: Table) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    let first = (0..bytes.len()).find(|&i| !is_kept(bytes, i, table));

    match first {
        None => Cow::Borrowed(s),
        Some(i) => {
            let mut buf = String::with_capacity(s.len() + 8);
            buf.push_str(&s[..i]);
            encode_bytes_to(&bytes[i..], table, &mut buf);
            Cow::Owned(buf)
        }
    }
}

/// Percent-encodes a string with a table, appending the result to a buffer.
pub fn encode_to(s: &str, table: Table, buf: &mut String) {
    encode_bytes_to(s.as_bytes(), table, buf);
}

// The byte at `i` is either part of a kept triplet or an allowed ASCII byte.
#[inline]
fn is_kept(s: &[u8], i: usize, table: Table) -> bool {
    let x = s[i];
    if x == b'%' {
        return table.allows_pct_encoded() && triplet_at(s, i);
    }
    if table.allows(x) {
        return true;
    }
    // The two hex digits following a kept "%".
    table.allows_pct_encoded()
        && ((i >= 1 && triplet_at(s, i - 1)) || (i >= 2 && triplet_at(s, i - 2)))
}

fn encode_bytes_to(s: &[u8], table: Table, buf: &mut String) {
    let mut i = 0;
    while i < s.len() {
        let x = s[i];
        if x == b'%' && table.allows_pct_encoded() && triplet_at(s, i) {
            buf.push('%');
            buf.push(s[i + 1] as char);
            buf.push(s[i + 2] as char);
            i += 3;
        } else {
            if table.allows(x) {
                // `allows` only admits ASCII.
                buf.push(x as char);
            } else {
                buf.push_str(encode_byte(x));
            }
            i += 1;
        }
    }
}

/// Decodes a percent-encoded string.
///
/// Well-formed triplets are decoded; a `%` that does not start one is kept
/// literally. When `plus_as_space` is set, `+` decodes to a space, as in
/// `application/x-www-form-urlencoded` data. Invalid UTF-8 in the result is
/// replaced with [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
///
/// [U+FFFD]: char::REPLACEMENT_CHARACTER
///
/// ```
/// use net_uri::pct_enc::decode;
///
/// assert_eq!(decode("%C3%B6%20+x", true), "ö  x");
/// assert_eq!(decode("100%+", false), "100%+");
/// ```
#[must_use]
pub fn decode(s: &str, plus_as_space: bool) -> Cow<'_, str> {
    let bytes = s.as_bytes();
    if !bytes.iter().any(|&x| x == b'%' || (plus_as_space && x == b'+')) {
        return Cow::Borrowed(s);
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if triplet_at(bytes, i) => {
                out.push(decode_octet(bytes[i + 1], bytes[i + 2]));
                i += 3;
                continue;
            }
            b'+' if plus_as_space => out.push(b' '),
            x => out.push(x),
        }
        i += 1;
    }

    match String::from_utf8(out) {
        Ok(s) => Cow::Owned(s),
        Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octet_table() {
        assert_eq!(decode_octet(b'2', b'0'), b' ');
        assert_eq!(decode_octet(b'f', b'F'), 0xff);
        assert_eq!(encode_byte(0x0a), "%0A");
    }

    #[test]
    fn encode_keeps_triplets_only() {
        assert_eq!(encode("%", table::PATH), "%25");
        assert_eq!(encode("%2", table::PATH), "%252");
        assert_eq!(encode("%2g", table::PATH), "%252g");
        assert_eq!(encode("%2f%", table::PATH), "%2f%25");
        assert!(matches!(encode("a%2Fb", table::PATH), Cow::Borrowed(_)));
    }

    #[test]
    fn encode_borrows_when_clean() {
        assert!(matches!(encode("/a/b:c@d", table::PATH), Cow::Borrowed(_)));
        assert!(matches!(encode("/a b", table::PATH), Cow::Owned(_)));
    }
}
