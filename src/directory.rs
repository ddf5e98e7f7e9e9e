use crate::format::classify;
use crate::separator::is_separator_byte;

/// Parent directory of `path` through its last separator, or its root when no
/// separator follows the root. The caller's separator character is kept.
///
/// Returns `None` when the path cannot be classified. The root-only result is
/// returned verbatim, so `C:foo` yields `C:` and `foo` yields an empty string.
pub fn directory_or_root(path: &str) -> Option<String> {
	let root_length = classify(path).root_length?;
	let cut = path.as_bytes()[root_length..]
		.iter()
		.rposition(|&b| is_separator_byte(b))
		.map(|i| root_length + i);

	match cut {
		Some(end) => Some(path[..=end].to_string()),
		None => Some(path[..root_length].to_string()),
	}
}
