#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_resolution::{remove_dot_segments, PathSegments};

fuzz_target!(|data: Vec<&str>| {
    let once = remove_dot_segments(&data);

    // No dot segment survives.
    assert!(once.iter().all(|s| s != "." && s != ".."));

    // `remove_dot_segments` is idempotent: we cannot normalize beyond a normalized path.
    assert_eq!(remove_dot_segments(&once), once);

    // Construction with normalization stores the same segments.
    let path = PathSegments::new(data.iter().copied(), false).unwrap();
    assert_eq!(path.as_slice(), once);
});
