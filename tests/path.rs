use uri_resolution::{error::PathError, Authority, PathSegments, Segment, UriComponents};

#[test]
fn null_segment() {
    assert_eq!(
        PathSegments::new([Some("a"), None, Some("b")], false).unwrap_err(),
        PathError::NullSegment { index: 1 }
    );
    assert_eq!(
        PathSegments::verbatim([None::<String>], true).unwrap_err(),
        PathError::NullSegment { index: 0 }
    );
    // The null check comes first.
    assert_eq!(
        PathSegments::new([Some("g"), None], true).unwrap_err(),
        PathError::NullSegment { index: 1 }
    );

    let path = PathSegments::new([Some(String::from("")), Some(String::from("a"))], true).unwrap();
    assert_eq!(path.to_string(), "/a");
}

#[test]
fn authority_requires_absolute_path() {
    assert_eq!(
        PathSegments::new(["g"], true).unwrap_err(),
        PathError::AuthorityRequiresAbsolutePath
    );
    assert_eq!(
        PathSegments::verbatim([".", "g"], true).unwrap_err(),
        PathError::AuthorityRequiresAbsolutePath
    );

    assert!(PathSegments::new(["g"], false).is_ok());
    assert!(PathSegments::new(["", "g"], true).is_ok());
    assert!(PathSegments::new([""], true).is_ok());
    assert!(PathSegments::new(Vec::<&str>::new(), true).is_ok());

    let path = PathSegments::verbatim(["g"], false).unwrap();
    let auth = Authority::from_parts(None, None, Some("80"));
    assert_eq!(
        UriComponents::new(Some("http"), auth, path, None, None).unwrap_err(),
        PathError::AuthorityRequiresAbsolutePath
    );
}

#[test]
fn error_display() {
    assert_eq!(
        PathError::NullSegment { index: 3 }.to_string(),
        "path contains a null segment at index 3"
    );
    assert_eq!(
        PathError::AuthorityRequiresAbsolutePath.to_string(),
        "URI with authority must have an empty or absolute path"
    );
}

#[test]
fn path_properties() {
    assert!(PathSegments::empty().is_empty());
    assert!(PathSegments::new([""], false).unwrap().is_empty());
    assert!(!PathSegments::new(["", ""], false).unwrap().is_empty());

    assert!(!PathSegments::new([""], false).unwrap().is_absolute());
    assert!(PathSegments::new(["", ""], false).unwrap().is_absolute());
    assert!(PathSegments::new(["", "g"], false).unwrap().is_absolute());
    assert!(!PathSegments::new(["g", ""], false).unwrap().is_absolute());

    let path = PathSegments::verbatim(["", "a", ".", ".."], false).unwrap();
    assert_eq!(path.len(), 4);
    let kinds: Vec<_> = path.iter().map(|s| (s.is_empty(), s.is_dot_segment())).collect();
    assert_eq!(kinds, [(true, false), (false, false), (false, true), (false, true)]);
    assert_eq!(path.iter().next_back(), Some(Segment::new("..")));
    assert_eq!(format!("{path:?}"), r#"["", "a", ".", ".."]"#);

    let segments: Vec<&str> = (&path).into_iter().map(Segment::as_str).collect();
    assert_eq!(segments, path.clone().into_vec());
}

#[test]
fn authority_parts() {
    assert!(Authority::<&str>::from_parts(None, None, None).is_none());

    let auth = Authority::from_parts(Some("user"), Some("host"), Some("8080")).unwrap();
    assert_eq!(auth.userinfo(), Some("user"));
    assert_eq!(auth.host(), "host");
    assert_eq!(auth.port(), Some("8080"));
    assert_eq!(auth.to_string(), "user@host:8080");
    assert_eq!(auth, Authority::new("host").with_userinfo("user").with_port("8080"));

    let owned = auth.to_owned();
    assert_eq!(owned.as_borrowed(), auth);

    // An empty port is still a port.
    let auth = Authority::new("host").with_port("");
    assert_eq!(auth.to_string(), "host:");
}

#[test]
fn construct_with_authority() {
    let auth = Authority::from_parts(Some("user"), None, Some("8080"));
    assert_eq!(
        PathSegments::construct(["g"], auth.as_ref(), false).unwrap_err(),
        PathError::AuthorityRequiresAbsolutePath
    );
    assert_eq!(
        PathSegments::construct([Some("g"), None], auth.as_ref(), false).unwrap_err(),
        PathError::NullSegment { index: 1 }
    );

    let path = PathSegments::construct(["", "a", "..", "b"], auth.as_ref(), true).unwrap();
    assert_eq!(path.to_string(), "/b");
    let path = PathSegments::construct(["", "a", "..", "b"], auth.as_ref(), false).unwrap();
    assert_eq!(path.to_string(), "/a/../b");

    let path = PathSegments::construct(["g", ".."], None::<&Authority<&str>>, true).unwrap();
    assert!(path.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serde_as_strings() {
    use uri_resolution::resolve;

    let path = PathSegments::verbatim(["", "a", ".", ""], false).unwrap();
    let json = serde_json::to_string(&path).unwrap();
    assert_eq!(json, r#"["","a",".",""]"#);
    assert_eq!(serde_json::from_str::<PathSegments>(&json).unwrap(), path);

    let err = serde_json::from_str::<PathSegments>(r#"["a", null]"#).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("invalid path: path contains a null segment at index 1"));

    let base = UriComponents::new(
        Some("http"),
        Some(Authority::new("a")),
        PathSegments::new(["", "b", "c"], true).unwrap(),
        None,
        None,
    )
    .unwrap();
    let r = UriComponents::new(
        None,
        None,
        PathSegments::verbatim(["..", "g"], false).unwrap(),
        Some("y"),
        Some("s"),
    )
    .unwrap();
    assert_eq!(serde_json::to_string(&base).unwrap(), r#""http://a/b/c""#);
    assert_eq!(serde_json::to_string(&r).unwrap(), r#""../g?y#s""#);
    assert_eq!(
        serde_json::to_string(&resolve(&base, &r)).unwrap(),
        r#""http://a/g?y#s""#
    );
}
