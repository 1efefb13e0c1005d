use crate::{component::Authority, error::PathError, normalize::remove_dot_segments};
use alloc::{borrow::ToOwned, string::String, vec::Vec};
use borrow_or_share::{BorrowOrShare, Bos};
use core::{iter::FusedIterator, slice};
use ref_cast::{ref_cast_custom, RefCastCustom};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A single [path segment].
///
/// Any string slice is a valid segment: the segments handed to this crate
/// are already percent-decoded and never contain a delimiting `'/'`.
///
/// [path segment]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
///
/// # Examples
///
/// ```
/// use uri_resolution::Segment;
///
/// assert!(Segment::new(".").is_dot());
/// assert!(Segment::new("..").is_double_dot());
/// assert!(!Segment::new("..g").is_dot_segment());
/// ```
#[derive(RefCastCustom, PartialEq, Eq)]
#[repr(transparent)]
pub struct Segment {
    inner: str,
}

impl Segment {
    /// Converts a string slice to `&Segment`.
    #[ref_cast_custom]
    #[inline]
    pub const fn new(s: &str) -> &Segment;

    /// Returns the segment as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Checks whether the segment is `"."`.
    #[inline]
    #[must_use]
    pub fn is_dot(&self) -> bool {
        &self.inner == "."
    }

    /// Checks whether the segment is `".."`.
    #[inline]
    #[must_use]
    pub fn is_double_dot(&self) -> bool {
        &self.inner == ".."
    }

    /// Checks whether the segment is either `"."` or `".."`.
    #[inline]
    #[must_use]
    pub fn is_dot_segment(&self) -> bool {
        self.is_dot() || self.is_double_dot()
    }

    /// Checks whether the segment is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl PartialEq<str> for Segment {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<&str> for Segment {
    fn eq(&self, other: &&str) -> bool {
        &self.inner == *other
    }
}

impl PartialEq<Segment> for str {
    fn eq(&self, other: &Segment) -> bool {
        self == &other.inner
    }
}

impl PartialEq<Segment> for &str {
    fn eq(&self, other: &Segment) -> bool {
        *self == &other.inner
    }
}

impl AsRef<str> for Segment {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

/// A value that can be taken as a path segment, or stands for an absent one.
///
/// This is implemented for `&str` and `String`, which are always present,
/// and for `Option<T>` where `T` is either of them, with `None` being absent.
pub trait IntoSegment {
    /// Converts the value into an owned segment, or `None` if it is absent.
    fn into_segment(self) -> Option<String>;
}

impl IntoSegment for &str {
    #[inline]
    fn into_segment(self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl IntoSegment for String {
    #[inline]
    fn into_segment(self) -> Option<String> {
        Some(self)
    }
}

impl<T: Bos<str>> IntoSegment for Option<T> {
    #[inline]
    fn into_segment(self) -> Option<String> {
        self.map(|s| s.borrow_or_share().to_owned())
    }
}

/// An immutable, validated sequence of [path segments].
///
/// The text of the path is the segments joined by `'/'`. See the
/// [crate-level documentation](crate#path-representation) for how paths
/// are represented.
///
/// Equality is structural: `[]` and `[""]` denote the same text but compare unequal.
///
/// [path segments]: https://datatracker.ietf.org/doc/html/rfc3986/#section-3.3
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PathSegments {
    segments: Vec<String>,
}

impl PathSegments {
    /// Validates the given segments and removes dot segments from them.
    ///
    /// `has_authority` tells whether the URI the path belongs to has an authority.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any segment is absent, or if `has_authority` is `true`
    /// and the first segment is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_resolution::{error::PathError, PathSegments};
    ///
    /// let path = PathSegments::new(["", "a", "b", "..", "c"], true)?;
    /// assert_eq!(path.to_string(), "/a/c");
    ///
    /// assert_eq!(
    ///     PathSegments::new(["g"], true).unwrap_err(),
    ///     PathError::AuthorityRequiresAbsolutePath
    /// );
    /// assert_eq!(
    ///     PathSegments::new([Some("a"), None], false).unwrap_err(),
    ///     PathError::NullSegment { index: 1 }
    /// );
    /// # Ok::<_, PathError>(())
    /// ```
    pub fn new<I>(segments: I, has_authority: bool) -> Result<Self, PathError>
    where
        I: IntoIterator,
        I::Item: IntoSegment,
    {
        Self::build(segments, has_authority, true)
    }

    /// Validates the given segments and keeps them as they are.
    ///
    /// This is what a relative reference should be built with, since removing
    /// dot segments before resolution would change its meaning.
    ///
    /// # Errors
    ///
    /// Returns `Err` on the same conditions as [`new`](Self::new).
    pub fn verbatim<I>(segments: I, has_authority: bool) -> Result<Self, PathError>
    where
        I: IntoIterator,
        I::Item: IntoSegment,
    {
        Self::build(segments, has_authority, false)
    }

    /// Validates the given segments against the authority of the URI they
    /// belong to, removing dot segments if `dot_normalize` is `true`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any segment is absent, or if `authority` is `Some`
    /// and the first segment is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_resolution::{error::PathError, Authority, PathSegments};
    ///
    /// let auth = Authority::from_parts(Some("user"), Some("a"), None);
    /// let path = PathSegments::construct(["", "b", ".", "c"], auth.as_ref(), false)?;
    /// assert_eq!(path.to_string(), "/b/./c");
    ///
    /// assert_eq!(
    ///     PathSegments::construct(["b"], auth.as_ref(), true).unwrap_err(),
    ///     PathError::AuthorityRequiresAbsolutePath
    /// );
    /// # Ok::<_, PathError>(())
    /// ```
    pub fn construct<I, T>(
        segments: I,
        authority: Option<&Authority<T>>,
        dot_normalize: bool,
    ) -> Result<Self, PathError>
    where
        I: IntoIterator,
        I::Item: IntoSegment,
    {
        Self::build(segments, authority.is_some(), dot_normalize)
    }

    fn build<I>(segments: I, has_authority: bool, dot_normalize: bool) -> Result<Self, PathError>
    where
        I: IntoIterator,
        I::Item: IntoSegment,
    {
        let segments = segments
            .into_iter()
            .enumerate()
            .map(|(index, seg)| seg.into_segment().ok_or(PathError::NullSegment { index }))
            .collect::<Result<Vec<_>, _>>()?;

        check_authority(&segments, has_authority)?;

        let segments = if dot_normalize {
            remove_dot_segments(&segments)
        } else {
            segments
        };
        Ok(Self { segments })
    }

    /// Creates an empty path.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_vec(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub(crate) fn check_authority(&self, has_authority: bool) -> Result<(), PathError> {
        check_authority(&self.segments, has_authority)
    }

    /// Returns the number of segments.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks whether the path is empty, i.e., its text is `""`.
    ///
    /// This is the case for both `[]` and `[""]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.segments.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// Checks whether the path is absolute, i.e., its text starts with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_rooted(&self.segments)
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn iter(&self) -> Segments<'_> {
        Segments {
            inner: self.segments.iter(),
        }
    }

    /// Returns the segments as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.segments
    }

    /// Consumes the path and returns its segments.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.segments
    }
}

pub(crate) fn is_rooted<S: AsRef<str>>(segments: &[S]) -> bool {
    segments.len() > 1 && segments[0].as_ref().is_empty()
}

/// A path under an authority must be empty or start with `'/'`.
fn check_authority<S: AsRef<str>>(segments: &[S], has_authority: bool) -> Result<(), PathError> {
    if has_authority && segments.first().is_some_and(|s| !s.as_ref().is_empty()) {
        return Err(PathError::AuthorityRequiresAbsolutePath);
    }
    Ok(())
}

impl<'a> IntoIterator for &'a PathSegments {
    type Item = &'a Segment;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Segments<'a> {
        self.iter()
    }
}

/// An iterator over the segments of a [`PathSegments`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Segments<'a> {
    inner: slice::Iter<'a, String>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Segment;

    #[inline]
    fn next(&mut self) -> Option<&'a Segment> {
        self.inner.next().map(|s| Segment::new(s))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Segments<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| Segment::new(s))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

#[cfg(feature = "serde")]
impl Serialize for PathSegments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.segments)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PathSegments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let segments = Vec::<Option<String>>::deserialize(deserializer)?;
        PathSegments::verbatim(segments, false)
            .map_err(|e| de::Error::custom(format_args!("invalid path: {e}")))
    }
}
