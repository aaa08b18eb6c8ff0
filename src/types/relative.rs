use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::check::is_safe_relative_path;

use super::errors::{Error, ErrorKind, Result};
use super::path::Path;

/// A [`Path`] statically known to be relative, normalized and free of
/// traversal.
///
/// Note: relative paths may be empty. An empty value renders as `"."`
/// like any other empty [`Path`].
///
/// If a value is non-empty, its content was produced either by explicit
/// caller attestation ([`RelativePath::new_unchecked`]) or by passing the
/// scanner ([`RelativePath::new`], [`FromStr`], serde deserialization).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelativePath {
    inner: Path,
}

impl RelativePath {
    /// Wraps a string into a `RelativePath` without validation.
    ///
    /// `trusted` must be trustworthy, relative and normalized. The scanner
    /// is not consulted; the call site carries the safety claim.
    #[must_use]
    pub fn new_unchecked(trusted: impl Into<String>) -> Self {
        RelativePath { inner: Path::new_unchecked(trusted) }
    }

    /// Validates an untrusted string into a `RelativePath`.
    ///
    /// `untrusted` may be user/attacker-controlled. On acceptance the
    /// input is wrapped unchanged; it is never re-scanned afterwards.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnsafePath`], carrying the rejected string,
    /// when the input is absolute, unnormalized, or contains NUL.
    pub fn new(untrusted: impl Into<String>) -> Result<Self> {
        let raw = untrusted.into();
        if !is_safe_relative_path(&raw) {
            debug!("rejected unsafe path: {raw:?}");
            return Err(Error { kind: ErrorKind::UnsafePath, path: raw });
        }
        Ok(RelativePath { inner: Path::from_raw(raw) })
    }

    /// Concatenates two relative paths.
    ///
    /// No re-validation is performed: joining two values that satisfy the
    /// relative-path invariant yields a value that satisfies it.
    #[must_use]
    pub fn join(&self, extension: &RelativePath) -> RelativePath {
        RelativePath { inner: self.inner.join(extension) }
    }

    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.inner
    }

    /// Consumes the value, discarding the relative-path guarantee.
    #[must_use]
    pub fn into_path(self) -> Path {
        self.inner
    }
}

impl Deref for RelativePath {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.inner
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl FromStr for RelativePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RelativePath::new(s)
    }
}

impl Serialize for RelativePath {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RelativePath {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RelativePath::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_value_is_wrapped_unchanged() {
        let p = RelativePath::new("a/b/c").unwrap();
        assert_eq!(p.raw(), "a/b/c");
        assert_eq!(p.as_str(), "a/b/c");
    }

    #[test]
    fn empty_value_renders_current_dir() {
        let p = RelativePath::new("").unwrap();
        assert_eq!(p.raw(), "");
        assert_eq!(p.as_str(), ".");
    }

    #[test]
    fn unchecked_bypasses_the_scanner() {
        let invalid_but_trusted = "///../../../..";
        let p = RelativePath::new_unchecked(invalid_but_trusted);
        assert_eq!(p.raw(), invalid_but_trusted);
        assert_eq!(p.as_str(), invalid_but_trusted);
    }

    #[test]
    fn rejection_carries_the_offending_string() {
        let err = RelativePath::new("a/../b").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsafePath);
        assert_eq!(err.path, "a/../b");
        assert_eq!(err.to_string(), "unsafe path: \"a/../b\"");
    }

    #[test]
    fn join_concatenates_raw_values() {
        let l = RelativePath::new("a/b").unwrap();
        let r = RelativePath::new("c/d").unwrap();
        assert_eq!(l.join(&r).raw(), "a/b/c/d");
    }

    #[test]
    fn join_is_identity_with_empty() {
        let p = RelativePath::new("a/b").unwrap();
        let empty = RelativePath::new("").unwrap();
        assert_eq!(p.join(&empty), p);
        assert_eq!(empty.join(&p), p);
        assert_eq!(empty.join(&empty).raw(), "");
        assert_eq!(empty.join(&empty).as_str(), ".");
    }
}
