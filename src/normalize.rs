use crate::path::{is_rooted, Segment};
use alloc::{borrow::ToOwned, string::String, vec::Vec};

/// Removes dot segments from a path as described in
/// [Section 5.2.4 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986/#section-5.2.4).
///
/// The input is left untouched and a new list of segments is returned.
/// This function is total: a `".."` with nothing left to remove is simply dropped,
/// so `/../g` becomes `/g` rather than an error.
///
/// The output text always equals what the RFC's textual algorithm yields on the
/// joined input, including its behavior on relative paths (`a/../b` becomes `/b`).
///
/// # Examples
///
/// ```
/// use uri_resolution::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments(&["", "a", "b", "c", ".", "..", "..", "g"]), ["", "a", "g"]);
/// assert_eq!(remove_dot_segments(&["", "b", "c", ".."]), ["", "b", ""]);
/// assert_eq!(remove_dot_segments(&["", "..", "..", "g"]), ["", "g"]);
/// ```
#[must_use]
pub fn remove_dot_segments<S: AsRef<str>>(segments: &[S]) -> Vec<String> {
    let mut buf: Vec<String> = Vec::with_capacity(segments.len());

    // Number of leading output segments that cannot be popped: 1 for the root.
    let mut floor = 0;
    let mut input = segments;
    if is_rooted(segments) {
        buf.push(String::new());
        floor = 1;
        input = &segments[1..];
    }

    for (i, seg) in input.iter().enumerate() {
        let seg = Segment::new(seg.as_ref());
        let last = i + 1 == input.len();

        if seg.is_dot() {
            if last {
                buf.push(String::new());
            }
        } else if seg.is_double_dot() {
            let removed = buf.len() > floor;
            if removed {
                buf.pop();
                if floor == 0 && buf.is_empty() {
                    // The separator before the popped segment now leads the output.
                    buf.push(String::new());
                    floor = 1;
                }
            }
            if last && (removed || floor == 1) {
                buf.push(String::new());
            }
        } else {
            buf.push(seg.as_str().to_owned());
        }
    }
    buf
}
