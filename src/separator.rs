//! Directory separator predicates and trimming
//!
//! Windows accepts both `\` and `/` as separators. Every helper here treats
//! them as equivalent; only [`normalize_separators`] rewrites one into the other.

use crate::error::{require, Result};
use std::borrow::Cow;

/// Primary separator character
pub const SEPARATOR: char = '\\';
/// Alternate separator character
pub const ALT_SEPARATOR: char = '/';
/// Volume separator following a drive letter
pub const VOLUME_SEPARATOR: char = ':';

pub fn is_separator(c: char) -> bool {
	c == SEPARATOR || c == ALT_SEPARATOR
}

pub(crate) fn is_separator_byte(b: u8) -> bool {
	b == b'\\' || b == b'/'
}

pub fn starts_with_separator(path: &str) -> bool {
	path.as_bytes().first().is_some_and(|&b| is_separator_byte(b))
}

pub fn ends_with_separator(path: &str) -> bool {
	path.as_bytes().last().is_some_and(|&b| is_separator_byte(b))
}

/// Strip every trailing separator
pub fn trim_trailing_separators(path: &str) -> &str {
	path.trim_end_matches(is_separator)
}

/// Append a primary separator unless the path already ends in one.
///
/// An empty path stays empty: it names the current directory, not a root.
pub fn ensure_trailing_separator(path: &str) -> Cow<'_, str> {
	if path.is_empty() || ends_with_separator(path) {
		return Cow::Borrowed(path);
	}
	let mut owned = String::with_capacity(path.len() + 1);
	owned.push_str(path);
	owned.push(SEPARATOR);
	Cow::Owned(owned)
}

/// [`ensure_trailing_separator`] for callers holding an optional argument
pub fn try_ensure_trailing_separator(path: Option<&str>) -> Result<String> {
	let path = require(path, "path")?;
	Ok(ensure_trailing_separator(path).into_owned())
}

/// [`trim_trailing_separators`] for callers holding an optional argument
pub fn try_trim_trailing_separators(path: Option<&str>) -> Result<&str> {
	let path = require(path, "path")?;
	Ok(trim_trailing_separators(path))
}

/// Rewrite every alternate separator into the primary one
pub fn normalize_separators(path: &str) -> Cow<'_, str> {
	if path.contains(ALT_SEPARATOR) {
		Cow::Owned(path.replace(ALT_SEPARATOR, "\\"))
	} else {
		Cow::Borrowed(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_separator_predicates() {
		assert!(is_separator('\\'));
		assert!(is_separator('/'));
		assert!(!is_separator(':'));

		assert!(starts_with_separator(r"\foo"));
		assert!(starts_with_separator("/foo"));
		assert!(!starts_with_separator("foo"));
		assert!(!starts_with_separator(""));

		assert!(ends_with_separator(r"C:\"));
		assert!(ends_with_separator("C:/"));
		assert!(!ends_with_separator("C:"));
		assert!(!ends_with_separator(""));
	}

	#[test]
	fn test_trim_trailing_separators() {
		assert_eq!(trim_trailing_separators(r"C:\Foo\\/"), r"C:\Foo");
		assert_eq!(trim_trailing_separators("Foo"), "Foo");
		assert_eq!(trim_trailing_separators(r"\\"), "");
	}

	#[test]
	fn test_ensure_trailing_separator() {
		assert_eq!(ensure_trailing_separator(r"C:\Foo"), r"C:\Foo\");
		assert!(matches!(ensure_trailing_separator(r"C:\Foo\"), Cow::Borrowed(_)));
		assert_eq!(ensure_trailing_separator("C:/Foo/"), "C:/Foo/");
		assert_eq!(ensure_trailing_separator(""), "");
	}

	#[test]
	fn test_absent_arguments() {
		assert!(try_ensure_trailing_separator(None).unwrap_err().is_argument_absent());
		assert!(try_trim_trailing_separators(None).unwrap_err().is_argument_absent());
		assert_eq!(try_ensure_trailing_separator(Some("a")).unwrap(), r"a\");
		assert_eq!(try_trim_trailing_separators(Some(r"a\")).unwrap(), "a");
	}

	#[test]
	fn test_normalize_separators() {
		assert_eq!(normalize_separators("C:/Users/x"), r"C:\Users\x");
		assert!(matches!(normalize_separators(r"C:\Users"), Cow::Borrowed(_)));
	}
}
