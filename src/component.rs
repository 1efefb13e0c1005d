//! URI components.

use crate::{
    error::PathError,
    path::PathSegments,
    resolve::{self, ResolvedUri},
};
use alloc::{borrow::ToOwned, string::String};
use borrow_or_share::{BorrowOrShare, Bos};

/// An [authority] component: the userinfo, host and port of a URI as a unit.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.2
///
/// # Variants
///
/// - `Authority<&str>`: borrowed.
/// - `Authority<String>`: owned.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Authority<T> {
    userinfo: Option<T>,
    host: T,
    port: Option<T>,
}

impl<T> Authority<T> {
    /// Creates an authority with the given host and no userinfo or port.
    #[inline]
    pub fn new(host: T) -> Self {
        Self {
            userinfo: None,
            host,
            port: None,
        }
    }

    /// Creates an authority from its three optional parts.
    ///
    /// Returns `None` if all the parts are absent. An absent host
    /// alongside a present userinfo or port is taken as the empty host.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_resolution::Authority;
    ///
    /// assert!(Authority::<&str>::from_parts(None, None, None).is_none());
    ///
    /// let auth = Authority::from_parts(Some("user"), None, Some("8080")).unwrap();
    /// assert_eq!(auth.host(), "");
    /// assert_eq!(auth.to_string(), "user@:8080");
    /// ```
    pub fn from_parts(userinfo: Option<T>, host: Option<T>, port: Option<T>) -> Option<Self>
    where
        T: Default,
    {
        if userinfo.is_none() && host.is_none() && port.is_none() {
            return None;
        }
        Some(Self {
            userinfo,
            host: host.unwrap_or_default(),
            port,
        })
    }

    /// Sets the userinfo subcomponent.
    #[inline]
    #[must_use]
    pub fn with_userinfo(mut self, userinfo: T) -> Self {
        self.userinfo = Some(userinfo);
        self
    }

    /// Sets the port subcomponent.
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: T) -> Self {
        self.port = Some(port);
        self
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> Authority<T> {
    /// Returns the optional userinfo subcomponent.
    #[must_use]
    pub fn userinfo(&'i self) -> Option<&'o str> {
        self.userinfo.as_ref().map(|s| s.borrow_or_share())
    }

    /// Returns the host subcomponent.
    #[must_use]
    pub fn host(&'i self) -> &'o str {
        self.host.borrow_or_share()
    }

    /// Returns the optional port subcomponent.
    #[must_use]
    pub fn port(&'i self) -> Option<&'o str> {
        self.port.as_ref().map(|s| s.borrow_or_share())
    }
}

impl<T: Bos<str>> Authority<T> {
    /// Borrows the authority as an `Authority<&str>`.
    #[must_use]
    pub fn as_borrowed(&self) -> Authority<&str> {
        Authority {
            userinfo: self.userinfo(),
            host: self.host(),
            port: self.port(),
        }
    }
}

impl Authority<&str> {
    /// Creates a new `Authority<String>` by cloning the contents of this `Authority<&str>`.
    #[must_use]
    pub fn to_owned(&self) -> Authority<String> {
        Authority {
            userinfo: self.userinfo.map(ToOwned::to_owned),
            host: self.host.to_owned(),
            port: self.port.map(ToOwned::to_owned),
        }
    }
}

/// The five components of a URI or relative reference, as handed over by a parser.
///
/// Every optional component is either present or absent; an empty string is a
/// present component. All values are expected to be percent-decoded already.
///
/// # Variants
///
/// - `UriComponents<&str>`: borrowed.
/// - `UriComponents<String>`: owned.
///
/// The path is always owned, since it is materialized from the input segments
/// at construction.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct UriComponents<T> {
    pub(crate) scheme: Option<T>,
    pub(crate) authority: Option<Authority<T>>,
    pub(crate) path: PathSegments,
    pub(crate) query: Option<T>,
    pub(crate) fragment: Option<T>,
}

impl<T> UriComponents<T> {
    /// Creates a new set of components.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `authority` is present and `path` is
    /// neither empty nor absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_resolution::{error::PathError, Authority, PathSegments, UriComponents};
    ///
    /// let r = UriComponents::new(
    ///     None,
    ///     Some(Authority::new("g")),
    ///     PathSegments::empty(),
    ///     None::<&str>,
    ///     None,
    /// )?;
    /// assert_eq!(r.to_string(), "//g");
    ///
    /// let path = PathSegments::verbatim(["g"], false)?;
    /// assert_eq!(
    ///     UriComponents::new(None, Some(Authority::new("a")), path, None, None).unwrap_err(),
    ///     PathError::AuthorityRequiresAbsolutePath
    /// );
    /// # Ok::<_, PathError>(())
    /// ```
    pub fn new(
        scheme: Option<T>,
        authority: Option<Authority<T>>,
        path: PathSegments,
        query: Option<T>,
        fragment: Option<T>,
    ) -> Result<Self, PathError> {
        path.check_authority(authority.is_some())?;
        Ok(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// Checks whether a scheme is present, i.e., whether this is an absolute URI
    /// that may serve as a base.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// Checks whether an authority is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.authority.is_some()
    }

    /// Returns the optional authority component.
    #[inline]
    #[must_use]
    pub fn authority(&self) -> Option<&Authority<T>> {
        self.authority.as_ref()
    }

    /// Returns the path component.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &PathSegments {
        &self.path
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> UriComponents<T> {
    /// Returns the optional scheme component.
    #[must_use]
    pub fn scheme(&'i self) -> Option<&'o str> {
        self.scheme.as_ref().map(|s| s.borrow_or_share())
    }

    /// Returns the optional query component.
    #[must_use]
    pub fn query(&'i self) -> Option<&'o str> {
        self.query.as_ref().map(|s| s.borrow_or_share())
    }

    /// Returns the optional fragment component.
    #[must_use]
    pub fn fragment(&'i self) -> Option<&'o str> {
        self.fragment.as_ref().map(|s| s.borrow_or_share())
    }
}

impl<T: Bos<str>> UriComponents<T> {
    /// Resolves these components, taken as a reference, against the given base
    /// and returns the target URI.
    ///
    /// See [`resolve`](crate::resolve()) for the exact behavior of this method.
    ///
    /// # Panics
    ///
    /// Panics if `base` has no scheme.
    #[must_use]
    pub fn resolve_against<U: Bos<str>>(&self, base: &UriComponents<U>) -> ResolvedUri {
        resolve::resolve(base, self)
    }
}

impl UriComponents<&str> {
    /// Creates a new `UriComponents<String>` by cloning the contents of this `UriComponents<&str>`.
    #[must_use]
    pub fn to_owned(&self) -> UriComponents<String> {
        UriComponents {
            scheme: self.scheme.map(ToOwned::to_owned),
            authority: self.authority.as_ref().map(|a| a.to_owned()),
            path: self.path.clone(),
            query: self.query.map(ToOwned::to_owned),
            fragment: self.fragment.map(ToOwned::to_owned),
        }
    }
}
