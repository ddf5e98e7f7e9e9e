//! Ordinal case-insensitive comparison
//!
//! Characters are compared after a simple uppercase mapping. A character whose
//! uppercase form expands to several characters compares as itself.

use std::cmp::Ordering;

pub(crate) fn fold(c: char) -> char {
	if c.is_ascii() {
		return c.to_ascii_uppercase();
	}
	let mut upper = c.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(u), None) => u,
		_ => c,
	}
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
	s.chars().map(fold)
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
	folded(a).eq(folded(b))
}

pub(crate) fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
	let mut chars = folded(s);
	folded(prefix).all(|p| chars.next() == Some(p))
}

pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
	folded(a).cmp(folded(b))
}
