#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Reference resolution over pre-parsed URI components, strictly following
//! [Section 5 of RFC 3986].
//!
//! [Section 5 of RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/#section-5
//!
//! This crate does not parse URI strings. Callers hand it components that are already
//! split and percent-decoded, in the form of [`UriComponents`], and get back a
//! [`ResolvedUri`] that can be recomposed into a string.
//!
//! # Examples
//!
//! ```
//! use uri_resolution::{Authority, PathSegments, UriComponents};
//!
//! let base = UriComponents::new(
//!     Some("http"),
//!     Some(Authority::new("a")),
//!     PathSegments::new(["", "b", "c", "d;p"], true)?,
//!     Some("q"),
//!     None,
//! )?;
//! let r = UriComponents::new(
//!     None,
//!     None,
//!     PathSegments::verbatim(["..", "g"], false)?,
//!     None,
//!     Some("s"),
//! )?;
//!
//! assert_eq!(r.to_string(), "../g#s");
//! assert_eq!(r.resolve_against(&base).to_string(), "http://a/b/g#s");
//! # Ok::<_, uri_resolution::error::PathError>(())
//! ```
//!
//! # Path representation
//!
//! A path is an ordered list of segments whose text is the segments joined by `'/'`.
//! Both `[]` and `[""]` denote the empty path, `["", "g"]` denotes `/g`, and
//! `["g", ""]` denotes `g/`. A path is *absolute* when it has at least two segments
//! and the first one is empty.
//!
//! # Feature flags
//!
//! - `std` (default): Enables `std` support. Implies `impl-error`.
//! - `impl-error`: Implements [`Error`] for the error types.
//! - `serde`: Enables `serde` support for [`ResolvedUri`], [`UriComponents`]
//!   and [`PathSegments`].

extern crate alloc;

mod component;
pub mod error;
mod fmt;
mod normalize;
mod path;
pub mod resolve;

pub use component::{Authority, UriComponents};
pub use fmt::recompose;
pub use normalize::remove_dot_segments;
pub use path::{IntoSegment, PathSegments, Segment, Segments};
pub use resolve::{merge, resolve, ResolvedUri, Resolver};

#[cfg(feature = "impl-error")]
pub use core::error::Error;
