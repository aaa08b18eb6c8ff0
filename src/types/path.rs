use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{CURRENT_DIR, SEPARATOR};

use super::relative::RelativePath;

/// Data-only holder of a posix path string.
///
/// Note: paths may be empty. The rendered form of an empty path is `"."`,
/// while the internal representation stays empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    /// Internal representation. Unlike the result of `as_str()`, this may
    /// be empty.
    raw: String,
}

impl Path {
    /// Wraps a string into a `Path` without validation.
    ///
    /// `trusted` must be trustworthy. It may be absolute.
    #[must_use]
    pub fn new_unchecked(trusted: impl Into<String>) -> Self {
        Path { raw: trusted.into() }
    }

    /// Returns the path as a string. An empty path renders as `"."`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        if self.raw.is_empty() {
            CURRENT_DIR
        } else {
            &self.raw
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the last component of the path.
    ///
    /// Trailing separators are stripped first and an all-separator path
    /// yields `"/"`. The empty path yields `""`, not the base name of its
    /// `"."` rendering; callers relying on the rendering quirk should use
    /// [`Path::as_str`] instead.
    #[must_use]
    pub fn base(&self) -> &str {
        let trimmed = self.raw.trim_end_matches(SEPARATOR);
        if trimmed.is_empty() {
            if self.raw.is_empty() {
                ""
            } else {
                "/"
            }
        } else {
            match trimmed.rfind(SEPARATOR) {
                Some(idx) => &trimmed[idx + 1..],
                None => trimmed,
            }
        }
    }

    /// Concatenates a validated relative extension onto this path.
    ///
    /// An empty base returns the extension's raw value unchanged, so an
    /// already-safe relative string is never altered by the join.
    #[must_use]
    pub fn join(&self, extension: &RelativePath) -> Path {
        Path { raw: join_raw(&self.raw, extension.raw()) }
    }

    /// Concatenates a raw string extension onto this path.
    ///
    /// `trusted` must be a safe, relative path: no validation is performed,
    /// so this is a trust boundary in the same way as
    /// [`Path::new_unchecked`].
    #[must_use]
    pub fn join_unchecked(&self, trusted: &str) -> Path {
        Path { raw: join_raw(&self.raw, trusted) }
    }

    /// Consumes the path, producing the rendered string form.
    #[must_use]
    pub fn into_string(self) -> String {
        if self.raw.is_empty() {
            CURRENT_DIR.to_owned()
        } else {
            self.raw
        }
    }

    pub(crate) fn from_raw(raw: String) -> Self {
        Path { raw }
    }

    pub(crate) fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Joins two raw path strings. Empty parts are dropped rather than
/// producing a dangling separator, which keeps the join an identity with
/// the empty path on either side.
fn join_raw(base: &str, extension: &str) -> String {
    if base.is_empty() {
        extension.to_owned()
    } else if extension.is_empty() {
        base.to_owned()
    } else {
        let mut joined = String::with_capacity(base.len() + extension.len() + 1);
        joined.push_str(base);
        joined.push(SEPARATOR);
        joined.push_str(extension);
        joined
    }
}
