use crate::{
    component::{Authority, UriComponents},
    path::{PathSegments, Segment},
    resolve::{ResolvedUri, Resolver},
};
use alloc::string::{String, ToString};
use borrow_or_share::Bos;
use core::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Recomposes the components of a resolved URI into a string, as described in
/// [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.3).
///
/// Components are written out as they are: nothing is validated or re-encoded.
/// This is the same as calling `to_string` on the `ResolvedUri`.
#[must_use]
pub fn recompose(resolved: &ResolvedUri) -> String {
    resolved.to_string()
}

fn write_components<W: Write>(
    w: &mut W,
    scheme: Option<&str>,
    authority: Option<Authority<&str>>,
    path: &PathSegments,
    query: Option<&str>,
    fragment: Option<&str>,
) -> fmt::Result {
    if let Some(scheme) = scheme {
        w.write_str(scheme)?;
        w.write_char(':')?;
    }
    if let Some(authority) = authority {
        w.write_str("//")?;
        write!(w, "{authority}")?;
    }
    write!(w, "{path}")?;
    if let Some(query) = query {
        w.write_char('?')?;
        w.write_str(query)?;
    }
    if let Some(fragment) = fragment {
        w.write_char('#')?;
        w.write_str(fragment)?;
    }
    Ok(())
}

impl fmt::Display for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(
            f,
            Some(self.scheme()),
            self.authority().map(Authority::as_borrowed),
            self.path(),
            self.query(),
            self.fragment(),
        )
    }
}

impl fmt::Debug for ResolvedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedUri")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority())
            .field("path", self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Display for UriComponents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_components(
            f,
            self.scheme(),
            self.authority().map(Authority::as_borrowed),
            self.path(),
            self.query(),
            self.fragment(),
        )
    }
}

impl<T: Bos<str>> fmt::Debug for UriComponents<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UriComponents")
            .field("scheme", &self.scheme())
            .field("authority", &self.authority().map(Authority::as_borrowed))
            .field("path", self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("base", self.base())
            .finish()
    }
}

impl<T: Bos<str>> fmt::Display for Authority<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = self.userinfo() {
            f.write_str(userinfo)?;
            f.write_char('@')?;
        }
        f.write_str(self.host())?;
        if let Some(port) = self.port() {
            f.write_char(':')?;
            f.write_str(port)?;
        }
        Ok(())
    }
}

impl<T: Bos<str>> fmt::Debug for Authority<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authority")
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .finish()
    }
}

impl fmt::Display for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            f.write_str(first.as_str())?;
        }
        for seg in iter {
            f.write_char('/')?;
            f.write_str(seg.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Debug for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Segment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for Segment {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "serde")]
impl Serialize for ResolvedUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for UriComponents<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
