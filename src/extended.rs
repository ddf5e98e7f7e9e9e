//! Extended-length (`\\?\`) prefix handling
//!
//! The output of [`add_extended_prefix`] is meant to be passed verbatim to
//! native calls. Nothing beyond the prefix is validated or rewritten.

use crate::config::{PathRulesConfig, LEGACY_MAX_PATH};
use std::borrow::Cow;
use tracing::debug;

/// Marker that disables length limits and separator normalization
pub const EXTENDED_PREFIX: &str = r"\\?\";
/// Leading marker of a UNC path
pub const UNC_PREFIX: &str = r"\\";
/// Inserted after [`UNC_PREFIX`] to turn `\\Server` into `\\?\UNC\Server`
const EXTENDED_UNC_INSERT: &str = r"?\UNC\";

/// Ordinal check for the `\\?\` marker
pub fn is_extended(path: &str) -> bool {
	path.starts_with(EXTENDED_PREFIX)
}

/// Prefix `path` for long-path use when it exceeds the legacy limit of 260,
/// or always when `force_below_legacy_limit` is set.
///
/// Already-extended paths come back unchanged, so the operation is idempotent.
pub fn add_extended_prefix(path: &str, force_below_legacy_limit: bool) -> Cow<'_, str> {
	apply_prefix(path, force_below_legacy_limit, LEGACY_MAX_PATH)
}

/// [`add_extended_prefix`] with the threshold and forcing taken from `config`
pub fn add_extended_prefix_with<'a>(path: &'a str, config: &PathRulesConfig) -> Cow<'a, str> {
	apply_prefix(path, config.force_extended_prefix, config.legacy_max_path)
}

fn apply_prefix(path: &str, force: bool, limit: usize) -> Cow<'_, str> {
	if is_extended(path) {
		return Cow::Borrowed(path);
	}
	if !force && path.encode_utf16().count() <= limit {
		return Cow::Borrowed(path);
	}

	let mut out = String::with_capacity(path.len() + EXTENDED_PREFIX.len() + 4);
	if let Some(rest) = path.strip_prefix(UNC_PREFIX) {
		out.push_str(UNC_PREFIX);
		out.push_str(EXTENDED_UNC_INSERT);
		out.push_str(rest);
	} else {
		out.push_str(EXTENDED_PREFIX);
		out.push_str(path);
	}
	debug!(from = path, to = %out, "added extended-length prefix");
	Cow::Owned(out)
}
