#![no_main]
use libfuzzer_sys::fuzz_target;
use net_uri::pct_enc::{decode, encode, table};

fuzz_target!(|data: &str| {
    for t in [table::PATH, table::QUERY, table::QUERY_ITEM] {
        let once = encode(data, t);
        assert!(t.validate(once.as_bytes()));
        assert_eq!(encode(&once, t), once);
    }

    // Without existing escapes, encoding is lossless.
    if !data.contains('%') {
        let encoded = encode(data, table::QUERY_ITEM);
        assert_eq!(decode(&encoded, false), data);
    }
});
