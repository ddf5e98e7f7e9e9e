//! File extension extraction
//!
//! A space breaks an extension the same way a separator does: `a.b c` has no
//! extension, while `a b.txt` has `.txt`. Keep this rule even though it differs
//! from a plain last-dot split; callers rely on it.

use crate::casefold::eq_ignore_case;
use crate::separator::{is_separator_byte, VOLUME_SEPARATOR};

/// Extension of `name` including its leading dot, or `""` when there is none
pub fn extension(name: &str) -> &str {
	let b = name.as_bytes();
	if b.len() <= 1 || b[b.len() - 1] == b'.' {
		return "";
	}

	for i in (0..b.len()).rev() {
		match b[i] {
			b'.' => return &name[i..],
			b' ' => return "",
			c if c == VOLUME_SEPARATOR as u8 || is_separator_byte(c) => return "",
			_ => {}
		}
	}
	""
}

/// Whether the extension of `path` matches any candidate, ignoring case.
///
/// Candidates are compared against the extension including its dot.
pub fn has_extension<S: AsRef<str>>(path: &str, candidates: &[S]) -> bool {
	let ext = extension(path);
	!ext.is_empty() && candidates.iter().any(|c| eq_ignore_case(c.as_ref(), ext))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_extension_basic() {
		assert_eq!(extension("archive.tar.gz"), ".gz");
		assert_eq!(extension(r"C:\dir\file.TXT"), ".TXT");
		assert_eq!(extension(".gitignore"), ".gitignore");
		assert_eq!(extension("noext"), "");
		assert_eq!(extension(""), "");
		assert_eq!(extension("."), "");
		assert_eq!(extension("x"), "");
	}

	#[test]
	fn test_trailing_dot_has_no_extension() {
		assert_eq!(extension("no ext."), "");
		assert_eq!(extension("file.."), "");
	}

	#[test]
	fn test_space_breaks_extension() {
		assert_eq!(extension("a b.txt"), ".txt");
		assert_eq!(extension("a.b c"), "");
		assert_eq!(extension("file.tx t"), "");
	}

	#[test]
	fn test_separator_and_volume_stop_scan() {
		assert_eq!(extension(r"dir.d\file"), "");
		assert_eq!(extension("dir.d/file"), "");
		assert_eq!(extension("C:file"), "");
		assert_eq!(extension("a.b:stream"), "");
	}

	#[test]
	fn test_has_extension() {
		assert!(has_extension("report.PDF", &[".pdf", ".doc"]));
		assert!(!has_extension("report.pdf", &[".doc"]));
		assert!(!has_extension("report", &[""]));
		assert!(has_extension(r"C:\a b\c.Txt", &[String::from(".txt")]));
	}

	#[test]
	fn test_has_extension_non_ascii_case() {
		assert!(has_extension("отчёт.ДОК", &[".док"]));
		assert!(has_extension("photo.ÉPS", &[".éps"]));
		assert!(!has_extension("photo.eps", &[".éps"]));
	}
}
