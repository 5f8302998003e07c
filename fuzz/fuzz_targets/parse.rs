#![no_main]
use libfuzzer_sys::fuzz_target;
use net_uri::Uri;

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };

    // The canonical form parses back to the same value.
    let s1 = u1.to_string();
    let u2 = Uri::parse(&s1).unwrap();
    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.has_authority(), u2.has_authority());
    assert_eq!(u1.authority(), u2.authority());
    assert_eq!(u1.path(), u2.path());
    assert_eq!(u1.query(), u2.query());
    assert_eq!(u1.fragment(), u2.fragment());
    assert_eq!(u2.to_string(), s1);
});
