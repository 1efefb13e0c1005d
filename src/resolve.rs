//! Module for reference resolution.

use crate::{
    component::{Authority, UriComponents},
    normalize::remove_dot_segments,
    path::PathSegments,
};
use alloc::{borrow::ToOwned, string::String, vec::Vec};
use borrow_or_share::Bos;

/// The target URI of a reference resolution.
///
/// The scheme is always present. Use [`recompose`](crate::recompose) or the
/// [`Display`](core::fmt::Display) implementation to get the URI as a string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUri {
    pub(crate) scheme: String,
    pub(crate) authority: Option<Authority<String>>,
    pub(crate) path: PathSegments,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl ResolvedUri {
    /// Returns the scheme component.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the optional authority component.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&Authority<String>> {
        self.authority.as_ref()
    }

    /// Returns the path component.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &PathSegments {
        &self.path
    }

    /// Returns the optional query component.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns the optional fragment component.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Converts the target into a set of components, e.g., to serve as a new base.
    #[must_use]
    pub fn into_components(self) -> UriComponents<String> {
        UriComponents {
            scheme: Some(self.scheme),
            authority: self.authority,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        }
    }
}

impl From<ResolvedUri> for UriComponents<String> {
    #[inline]
    fn from(uri: ResolvedUri) -> Self {
        uri.into_components()
    }
}

/// A URI reference resolver against a fixed base.
///
/// # Examples
///
/// ```
/// use uri_resolution::{Authority, PathSegments, Resolver, UriComponents};
///
/// let base = UriComponents::new(
///     Some("http"),
///     Some(Authority::new("example.com")),
///     PathSegments::new(["", "foo", "bar"], true)?,
///     None,
///     None,
/// )?;
/// let resolver = Resolver::with_base(base).unwrap();
///
/// let r = UriComponents::new(None, None, PathSegments::verbatim(["baz"], false)?, None::<&str>, None)?;
/// assert_eq!(resolver.resolve(&r).to_string(), "http://example.com/foo/baz");
///
/// let r = UriComponents::new(None, None, PathSegments::verbatim(["..", "baz"], false)?, None::<&str>, None)?;
/// assert_eq!(resolver.resolve(&r).to_string(), "http://example.com/baz");
///
/// let r = UriComponents::new(None, None, PathSegments::empty(), Some("baz"), None)?;
/// assert_eq!(resolver.resolve(&r).to_string(), "http://example.com/foo/bar?baz");
/// # Ok::<_, uri_resolution::error::PathError>(())
/// ```
#[derive(Clone)]
#[must_use]
pub struct Resolver<T> {
    base: UriComponents<T>,
}

impl<T: Bos<str>> Resolver<T> {
    /// Creates a new `Resolver` with the given base.
    ///
    /// Returns `None` if the base has no scheme.
    pub fn with_base(base: UriComponents<T>) -> Option<Self> {
        base.is_absolute().then_some(Self { base })
    }

    /// Returns the base.
    #[inline]
    pub fn base(&self) -> &UriComponents<T> {
        &self.base
    }

    /// Resolves the given reference against the configured base.
    ///
    /// See [`resolve`] for the exact behavior of this method.
    #[must_use]
    pub fn resolve<U: Bos<str>>(&self, reference: &UriComponents<U>) -> ResolvedUri {
        resolve(&self.base, reference)
    }
}

/// Merges a relative-path reference with the path of the base, as described in
/// [Section 5.2.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.3).
///
/// Dot segments are left in place; pass the result through
/// [`remove_dot_segments`](crate::remove_dot_segments) to finish the job.
///
/// # Examples
///
/// ```
/// use uri_resolution::{merge, PathSegments};
///
/// let base = PathSegments::new(["", "b", "c", "d;p"], true)?;
/// assert_eq!(merge(&base, true, &["..", "g"]), ["", "b", "c", "..", "g"]);
///
/// assert_eq!(merge(&PathSegments::empty(), true, &["g"]), ["", "g"]);
/// # Ok::<_, uri_resolution::error::PathError>(())
/// ```
#[must_use]
pub fn merge<S: AsRef<str>>(
    base_path: &PathSegments,
    base_has_authority: bool,
    reference_path: &[S],
) -> Vec<String> {
    let reference_path = reference_path.iter().map(|s| s.as_ref().to_owned());

    if base_has_authority && base_path.is_empty() {
        let mut buf = Vec::with_capacity(reference_path.len() + 1);
        buf.push(String::new());
        buf.extend(reference_path);
        return buf;
    }

    let base_path = base_path.as_slice();
    let kept = &base_path[..base_path.len().saturating_sub(1)];

    let mut buf = Vec::with_capacity(kept.len() + reference_path.len());
    buf.extend_from_slice(kept);
    buf.extend(reference_path);
    buf
}

/// Resolves a reference against a base and returns the target URI.
///
/// This applies the reference resolution algorithm defined in
/// [Section 5.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.2):
///
/// - A reference with a scheme keeps all of its own components.
/// - A reference with an authority takes the scheme of the base.
/// - A reference with an empty path takes everything but the fragment from the base,
///   except for the query when the reference has its own.
/// - Otherwise the reference path is merged with the base path, unless it is absolute.
///
/// Dot segments are removed from the path of the target, and only from it:
/// a query of `y/../x` comes out as it came in. The fragment is always
/// the one of the reference and is never inherited from the base.
///
/// # Panics
///
/// Panics if `base` has no scheme. Use [`Resolver::with_base`] to check it beforehand.
///
/// # Examples
///
/// ```
/// use uri_resolution::{resolve, Authority, PathSegments, UriComponents};
///
/// let base = UriComponents::new(
///     Some("http"),
///     Some(Authority::new("a")),
///     PathSegments::new(["", "b", "c", "d;p"], true)?,
///     Some("q"),
///     None,
/// )?;
///
/// let r = UriComponents::new(None, None, PathSegments::verbatim(["g"], false)?, Some("y/../x"), None)?;
/// assert_eq!(resolve(&base, &r).to_string(), "http://a/b/c/g?y/../x");
///
/// let r = UriComponents::new(None, None, PathSegments::empty(), None, Some("s"))?;
/// assert_eq!(resolve(&base, &r).to_string(), "http://a/b/c/d;p?q#s");
/// # Ok::<_, uri_resolution::error::PathError>(())
/// ```
#[must_use]
pub fn resolve<T: Bos<str>, U: Bos<str>>(
    base: &UriComponents<T>,
    /* reference */ r: &UriComponents<U>,
) -> ResolvedUri {
    assert!(base.is_absolute(), "base URI must have a scheme");

    let (t_scheme, t_authority, t_path, t_query);

    let r_path = r.path().as_slice();

    if let Some(r_scheme) = r.scheme() {
        t_scheme = r_scheme;
        t_authority = r.authority().map(Authority::as_borrowed);
        t_path = remove_dot_segments(r_path);
        t_query = r.query();
    } else {
        if let Some(r_authority) = r.authority() {
            t_authority = Some(r_authority.as_borrowed());
            t_path = remove_dot_segments(r_path);
            t_query = r.query();
        } else {
            if r.path().is_empty() {
                t_path = base.path().as_slice().to_vec();
                if r.query().is_some() {
                    t_query = r.query();
                } else {
                    t_query = base.query();
                }
            } else {
                if r.path().is_absolute() {
                    t_path = remove_dot_segments(r_path);
                } else {
                    let merged = merge(base.path(), base.has_authority(), r_path);
                    t_path = remove_dot_segments(&merged);
                }
                t_query = r.query();
            }
            t_authority = base.authority().map(Authority::as_borrowed);
        }
        t_scheme = base.scheme().unwrap_or_default();
    }

    ResolvedUri {
        scheme: t_scheme.to_owned(),
        authority: t_authority.map(|a| a.to_owned()),
        path: PathSegments::from_vec(t_path),
        query: t_query.map(ToOwned::to_owned),
        fragment: r.fragment().map(ToOwned::to_owned),
    }
}
