use net_uri::{component::default_port, *};

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

#[test]
fn default_port_elided() {
    for &(scheme, port) in DEFAULT_PORTS {
        assert_eq!(default_port(scheme), Some(port));

        let u = Uri::parse(&format!("{scheme}://domain.tld:{port}")).unwrap();
        assert_eq!(u.port(), None);
        assert!(u.is_default_port());
        assert_eq!(u.to_string(), format!("{scheme}://domain.tld"));

        let other = port + 100;
        let u = Uri::parse(&format!("{scheme}://domain.tld:{other}")).unwrap();
        assert_eq!(u.port(), Some(other));
        assert!(!u.is_default_port());
        assert_eq!(u.to_string(), format!("{scheme}://domain.tld:{other}"));
    }
    assert_eq!(default_port("HTTPS"), Some(443));
    assert_eq!(default_port("unknown"), None);
}

#[test]
fn require_port() {
    let u = Uri::parse("http://domain.tld:80").unwrap();
    assert_eq!(u.port(), None);
    assert_eq!(u.port_with(Flags::REQUIRE_PORT), Some(80));
    assert_eq!(u.authority(), "domain.tld");
    assert_eq!(u.authority_with(Flags::REQUIRE_PORT), "domain.tld:80");
    assert_eq!(u.to_string(), "http://domain.tld");
    assert_eq!(u.format(Flags::REQUIRE_PORT), "http://domain.tld:80");

    // An explicit port survives a scheme change.
    let c = u.with_scheme("https", Flags::NONE).unwrap();
    assert_eq!(c.port(), Some(80));
    assert_eq!(c.port_with(Flags::REQUIRE_PORT), Some(80));

    let u = Uri::parse("http://domain.tld").unwrap();
    assert_eq!(u.port(), None);
    assert_eq!(u.port_with(Flags::REQUIRE_PORT), Some(80));
    assert_eq!(u.format(Flags::REQUIRE_PORT), "http://domain.tld:80");

    // An implicit port follows the scheme...
    let c = u.with_scheme("https", Flags::NONE).unwrap();
    assert_eq!(c.port(), None);
    assert_eq!(c.port_with(Flags::REQUIRE_PORT), Some(443));

    // ...unless it is materialized first.
    let c = u.with_scheme("https", Flags::REQUIRE_PORT).unwrap();
    assert_eq!(c.port(), Some(80));
    assert_eq!(c.port_with(Flags::REQUIRE_PORT), Some(80));
    assert_eq!(c.to_string(), "https://domain.tld:80");

    let u = Uri::parse("unknown://domain.tld").unwrap();
    assert_eq!(u.port_with(Flags::REQUIRE_PORT), None);
    assert_eq!(u.format(Flags::REQUIRE_PORT), "unknown://domain.tld");
}

#[test]
fn port_on_scheme_changes() {
    let u = Uri::parse("http://domain.tld:80").unwrap();
    assert_eq!(u.port(), None);
    assert_eq!(u.to_string(), "http://domain.tld");

    let u = u.with_port(Some(443), Flags::NONE).unwrap();
    assert_eq!(u.port(), Some(443));
    assert_eq!(u.to_string(), "http://domain.tld:443");

    let u = u.with_scheme("https", Flags::NONE).unwrap();
    assert_eq!(u.port(), None);
    assert_eq!(u.to_string(), "https://domain.tld");

    let u = u.with_scheme("ftp", Flags::NONE).unwrap();
    assert_eq!(u.port(), Some(443));
    assert_eq!(u.to_string(), "ftp://domain.tld:443");
}

#[test]
fn port_range() {
    for (port, expected) in [(None, None), (Some(0), Some(0)), (Some(65535), Some(65535))] {
        let u = Uri::parse("//domain.tld").unwrap();
        let u = u.with_port(port, Flags::NONE).unwrap();
        assert_eq!(u.port(), expected);
    }

    for port in [100000, -23, 65536] {
        let e = Uri::new().with_port(Some(port), Flags::NONE).unwrap_err();
        assert_eq!(e, Error::PortOutOfRange(port));
        assert_eq!(e.kind(), ErrorKind::ValueRange);
        assert_eq!(e.to_string(), format!("invalid port '{port}'"));
    }
}

#[test]
fn port_without_authority_is_not_rendered() {
    let u = Uri::new().with_port(Some(8080), Flags::NONE).unwrap();
    assert!(!u.has_authority());
    assert_eq!(u.port(), None);
    assert_eq!(u.port_with(Flags::REQUIRE_PORT), None);
    assert!(!u.is_default_port());
    assert_eq!(u.components().port, None);
    assert_eq!(u.to_string(), "");

    // The stored port comes back once there is a host.
    let u = u.with_host("domain.tld", Flags::NONE);
    assert_eq!(u.port(), Some(8080));
    assert_eq!(u.components().port, Some(8080));
    assert_eq!(u.to_string(), "//domain.tld:8080");

    let u = Uri::parse("http:/path").unwrap();
    let u = u.with_port(Some(80), Flags::NONE).unwrap();
    assert_eq!(u.port_with(Flags::REQUIRE_PORT), None);
    assert!(!u.is_default_port());
}
