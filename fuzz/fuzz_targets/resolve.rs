#![no_main]
use libfuzzer_sys::fuzz_target;
use uri_resolution::{remove_dot_segments, Resolver};
use uri_resolution_fuzz::Components;

fuzz_target!(|data: (Components<'_>, Components<'_>)| {
    let (Some(base), Some(r)) = (data.0.build(true), data.1.build(false)) else {
        return;
    };
    let Some(resolver) = Resolver::with_base(base) else {
        return;
    };

    let t = resolver.resolve(&r);

    // The fragment always comes from the reference.
    assert_eq!(t.fragment(), r.fragment());

    // The authority and the path agree.
    if t.authority().is_some() {
        assert!(t.path().iter().next().map_or(true, |s| s.is_empty()));
    }

    // The path of the target is free of dot segments, unless it is taken
    // as it is from the base.
    if !r.path().is_empty() || r.has_authority() || r.scheme().is_some() {
        assert_eq!(remove_dot_segments(t.path().as_slice()), t.path().as_slice());
    }

    // An empty reference keeps the scheme and path of the base.
    let base = resolver.base();
    if r.scheme().is_none() && !r.has_authority() && r.path().is_empty() {
        assert_eq!(t.scheme(), base.scheme().unwrap());
        assert_eq!(t.path(), base.path());
    }

    assert_eq!(t.to_string(), uri_resolution::recompose(&t));
});
