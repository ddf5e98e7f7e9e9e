//! Common root reduction
//!
//! Collapses a collection of paths into the smallest set of directories that
//! together contain all of them. No member of the result is nested inside
//! another, and every input's directory lies under exactly one member.
//!
//! Comparisons are ordinal and case-insensitive. Directories are compared with
//! separators normalized to `\` and always end in a separator, so `C:\Foo\`
//! never claims `C:\Foobar\`.

use crate::casefold::{cmp_ignore_case, eq_ignore_case, starts_with_ignore_case};
use crate::directory::directory_or_root;
use crate::separator::{ensure_trailing_separator, normalize_separators};
use tracing::debug;

/// Incremental reducer; feed paths with [`RootReducer::insert`]
#[derive(Debug, Default, Clone)]
pub struct RootReducer {
	roots: Vec<String>,
}

impl RootReducer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Account for one path. Returns `true` when the set changed.
	///
	/// Blank, unclassifiable and rootless relative paths are skipped.
	pub fn insert(&mut self, path: &str) -> bool {
		if path.trim().is_empty() {
			return false;
		}
		let Some(directory) = directory_or_root(path) else {
			debug!(path, "skipping unclassifiable path");
			return false;
		};
		if directory.is_empty() {
			debug!(path, "skipping path without a directory");
			return false;
		}

		let directory = normalize_separators(&directory);
		let directory = ensure_trailing_separator(&directory).into_owned();

		if self.roots.iter().any(|root| eq_ignore_case(root, &directory)) {
			return false;
		}

		let before = self.roots.len();
		self.roots.retain(|root| !starts_with_ignore_case(root, &directory));
		let subsumed = before - self.roots.len();
		if subsumed > 0 {
			debug!(root = %directory, subsumed, "root absorbed deeper roots");
			self.roots.push(directory);
			return true;
		}

		if self.roots.iter().any(|root| starts_with_ignore_case(&directory, root)) {
			debug!(directory = %directory, "already covered by an existing root");
			return false;
		}

		self.roots.push(directory);
		true
	}

	pub fn extend<I, S>(&mut self, paths: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for path in paths {
			self.insert(path.as_ref());
		}
	}

	pub fn len(&self) -> usize {
		self.roots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.roots.iter().map(String::as_str)
	}

	/// Whether `root` is a member of the set
	pub fn contains(&self, root: &str) -> bool {
		self.roots.iter().any(|r| eq_ignore_case(r, root))
	}

	/// The reduced roots, sorted ordinally ignoring case
	pub fn into_vec(mut self) -> Vec<String> {
		self.roots.sort_by(|a, b| cmp_ignore_case(a, b));
		self.roots
	}
}

/// Reduce `paths` to their minimal set of covering directories
pub fn reduce<I, S>(paths: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut reducer = RootReducer::new();
	reducer.extend(paths);
	reducer.into_vec()
}

/// Whether `path` equals `root` or lies beneath it, ignoring case
pub fn is_within(root: &str, path: &str) -> bool {
	starts_with_ignore_case(path, root)
}
