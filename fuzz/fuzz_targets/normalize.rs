#![no_main]
use libfuzzer_sys::fuzz_target;
use net_uri::normalize::remove_dot_segments;

fuzz_target!(|data: &str| {
    let once = remove_dot_segments(data);
    assert!(once.len() <= data.len());
    assert_eq!(remove_dot_segments(&once), once);
});
