//! Path format classification
//!
//! Determines which of the Windows path shapes a string takes and how long
//! its root is. The scan is a single forward pass over the raw bytes with
//! early returns; no allocation happens here.
//!
//! Root lengths are byte offsets. Every byte the classifier stops on is ASCII,
//! so `&path[..root_length]` is always a valid slice.

use crate::separator::is_separator_byte;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Mutually exclusive path shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathFormat {
	/// Empty, leading `:`, or a malformed UNC form
	Unknown,
	/// `foo\bar`
	CurrentDirectoryRelative,
	/// `C:foo`, relative to the working directory of drive `C:`
	DriveRelative,
	/// `C:\foo`
	DriveAbsolute,
	/// `\foo`, rooted on whatever volume is current
	CurrentVolumeRelative,
	/// `\\Server\Share\...`
	UniformNamingConvention,
	/// `\\?\UNC\Server\Share\...`
	UniformNamingConventionExtended,
	/// `\\?\C:\...`
	VolumeAbsoluteExtended,
	/// `\\.\NAME`
	Device,
}

impl PathFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			PathFormat::Unknown => "Unknown",
			PathFormat::CurrentDirectoryRelative => "CurrentDirectoryRelative",
			PathFormat::DriveRelative => "DriveRelative",
			PathFormat::DriveAbsolute => "DriveAbsolute",
			PathFormat::CurrentVolumeRelative => "CurrentVolumeRelative",
			PathFormat::UniformNamingConvention => "UniformNamingConvention",
			PathFormat::UniformNamingConventionExtended => "UniformNamingConventionExtended",
			PathFormat::VolumeAbsoluteExtended => "VolumeAbsoluteExtended",
			PathFormat::Device => "Device",
		}
	}

	/// True for forms that do not depend on any current drive or directory
	pub fn is_fully_qualified(&self) -> bool {
		matches!(
			self,
			PathFormat::DriveAbsolute
				| PathFormat::UniformNamingConvention
				| PathFormat::UniformNamingConventionExtended
				| PathFormat::VolumeAbsoluteExtended
				| PathFormat::Device
		)
	}

	/// True for forms carrying the `\\?\` prefix
	pub fn is_extended(&self) -> bool {
		matches!(
			self,
			PathFormat::UniformNamingConventionExtended | PathFormat::VolumeAbsoluteExtended
		)
	}

	pub fn is_unc(&self) -> bool {
		matches!(
			self,
			PathFormat::UniformNamingConvention | PathFormat::UniformNamingConventionExtended
		)
	}
}

impl fmt::Display for PathFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Result of [`classify`]: the format tag and, unless the format is
/// `Unknown`, the byte length of the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
	pub format: PathFormat,
	pub root_length: Option<usize>,
}

impl Classification {
	pub const UNKNOWN: Classification = Classification { format: PathFormat::Unknown, root_length: None };

	fn new(format: PathFormat, root_length: usize) -> Self {
		Self { format, root_length: Some(root_length) }
	}

	pub fn is_unknown(&self) -> bool {
		self.format == PathFormat::Unknown
	}

	/// Root length with `-1` standing in for `Unknown`
	pub fn root_length_or_sentinel(&self) -> isize {
		self.root_length.map_or(-1, |len| len as isize)
	}

	/// The root slice of the path this classification was computed for
	pub fn root<'a>(&self, path: &'a str) -> Option<&'a str> {
		self.root_length.and_then(|len| path.get(..len))
	}
}

/// Classify `path` and compute its root length.
///
/// Total over every string: degenerate input yields [`Classification::UNKNOWN`]
/// rather than an error. `\` and `/` are interchangeable throughout.
pub fn classify(path: &str) -> Classification {
	let b = path.as_bytes();
	let len = b.len();

	if len == 0 || b[0] == b':' {
		return Classification::UNKNOWN;
	}

	if !is_separator_byte(b[0]) {
		if !b[0].is_ascii() {
			// A non-ASCII first char can never be a drive letter, but it may
			// still be followed by a volume separator.
			let first = path.chars().next().map_or(1, char::len_utf8);
			if b.get(first) == Some(&b':') {
				trace!(path, "drive designator is not a letter");
				return Classification::UNKNOWN;
			}
			return Classification::new(PathFormat::CurrentDirectoryRelative, 0);
		}
		if len < 2 || b[1] != b':' {
			return Classification::new(PathFormat::CurrentDirectoryRelative, 0);
		}
		if !b[0].is_ascii_alphabetic() {
			trace!(path, "drive designator is not a letter");
			return Classification::UNKNOWN;
		}
		if len > 2 && is_separator_byte(b[2]) {
			return Classification::new(PathFormat::DriveAbsolute, 3);
		}
		return Classification::new(PathFormat::DriveRelative, 2);
	}

	if len == 1 || !is_separator_byte(b[1]) {
		return Classification::new(PathFormat::CurrentVolumeRelative, 1);
	}

	// From here on the path starts with two separators.
	if len < 5 || is_separator_byte(b[2]) {
		trace!(path, "degenerate double-separator prefix");
		return Classification::UNKNOWN;
	}

	let mut format = PathFormat::UniformNamingConvention;
	let mut server_start = 2;

	if is_separator_byte(b[3]) {
		match b[2] {
			b'.' => return classify_volume_token(path, PathFormat::Device),
			b'?' => {
				if is_unc_token(b, 4) {
					format = PathFormat::UniformNamingConventionExtended;
					server_start = 8;
				} else {
					return classify_volume_token(path, PathFormat::VolumeAbsoluteExtended);
				}
			}
			_ => {}
		}
	}

	classify_unc(path, format, server_start)
}

/// `UNC` at `at`, followed by end of string or a separator
fn is_unc_token(b: &[u8], at: usize) -> bool {
	b.get(at..at + 3) == Some(b"UNC".as_slice())
		&& b.get(at + 3).map_or(true, |&c| is_separator_byte(c))
}

/// Device and extended-volume roots: the token after `\\.\` or `\\?\`,
/// through its terminating separator.
fn classify_volume_token(path: &str, format: PathFormat) -> Classification {
	let b = path.as_bytes();
	if is_separator_byte(b[4]) {
		trace!(path, "empty device or volume token");
		return Classification::UNKNOWN;
	}
	Classification::new(format, end_of_segment(b, 4))
}

/// Server and share segments of a plain or extended UNC path
fn classify_unc(path: &str, format: PathFormat, server_start: usize) -> Classification {
	let b = path.as_bytes();
	let len = b.len();

	if server_start >= len || is_separator_byte(b[server_start]) {
		trace!(path, "missing UNC server name");
		return Classification::UNKNOWN;
	}

	let Some(server_end) = find_separator(b, server_start) else {
		trace!(path, "missing UNC share name");
		return Classification::UNKNOWN;
	};

	let share_start = server_end + 1;
	if share_start >= len || is_separator_byte(b[share_start]) {
		trace!(path, "empty UNC share name");
		return Classification::UNKNOWN;
	}

	Classification::new(format, end_of_segment(b, share_start))
}

fn find_separator(b: &[u8], from: usize) -> Option<usize> {
	b[from..].iter().position(|&c| is_separator_byte(c)).map(|i| from + i)
}

/// Offset just past the next separator at or after `from`, or the length
fn end_of_segment(b: &[u8], from: usize) -> usize {
	find_separator(b, from).map_or(b.len(), |i| i + 1)
}
