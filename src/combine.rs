use crate::error::{require, Result};
use crate::separator::{ends_with_separator, starts_with_separator, SEPARATOR};

/// Join two path fragments.
///
/// A single separator is inserted only when neither side supplies one. When
/// both do, the doubled separator is kept as-is.
pub fn combine(a: &str, b: &str) -> String {
	let needs_separator = !ends_with_separator(a) && !starts_with_separator(b);
	let mut out = String::with_capacity(a.len() + b.len() + usize::from(needs_separator));
	out.push_str(a);
	if needs_separator {
		out.push(SEPARATOR);
	}
	out.push_str(b);
	out
}

/// [`combine`] for callers holding optional arguments
pub fn try_combine(a: Option<&str>, b: Option<&str>) -> Result<String> {
	let a = require(a, "a")?;
	let b = require(b, "b")?;
	Ok(combine(a, b))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_combine_inserts_separator() {
		assert_eq!(combine(r"C:\Foo", "bar.txt"), r"C:\Foo\bar.txt");
		assert_eq!(combine("a", "b"), r"a\b");
	}

	#[test]
	fn test_combine_keeps_existing_separator() {
		assert_eq!(combine(r"C:\Foo\", "bar"), r"C:\Foo\bar");
		assert_eq!(combine("C:/Foo", "/bar"), "C:/Foo/bar");
		assert_eq!(combine(r"C:\Foo\", r"\bar"), r"C:\Foo\\bar");
	}

	#[test]
	fn test_combine_empty_sides() {
		assert_eq!(combine("", "bar"), r"\bar");
		assert_eq!(combine("foo", ""), r"foo\");
	}

	#[test]
	fn test_combine_associative_at_join_points() {
		let (a, b, c) = ("root", "mid", "leaf");
		assert_eq!(combine(&combine(a, b), c), combine(a, &combine(b, c)));
	}

	#[test]
	fn test_try_combine_absent() {
		let err = try_combine(None, Some("b")).unwrap_err();
		assert!(err.is_argument_absent());
		assert!(err.to_string().contains(": a"));
		assert!(try_combine(Some("a"), None).unwrap_err().is_argument_absent());
		assert_eq!(try_combine(Some("a"), Some("b")).unwrap(), r"a\b");
	}
}
