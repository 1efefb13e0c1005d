use libfuzzer_sys::arbitrary::{self, Arbitrary};
use uri_resolution::{Authority, PathSegments, UriComponents};

#[derive(Arbitrary, Debug)]
pub struct Components<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<(Option<&'a str>, &'a str, Option<&'a str>)>,
    pub path: Vec<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    /// Builds the components, rooting the path when an authority is present.
    pub fn build(&self, dot_normalize: bool) -> Option<UriComponents<&'a str>> {
        // A parser never hands over a segment containing a delimiter.
        if self.path.iter().any(|s| s.contains('/')) {
            return None;
        }

        let authority = self
            .authority
            .and_then(|(userinfo, host, port)| Authority::from_parts(userinfo, Some(host), port));

        let mut path = self.path.clone();
        if authority.is_some() && path.first().is_some_and(|s| !s.is_empty()) {
            path.insert(0, "");
        }
        let path = PathSegments::construct(path, authority.as_ref(), dot_normalize).ok()?;

        UriComponents::new(self.scheme, authority, path, self.query, self.fragment).ok()
    }
}
