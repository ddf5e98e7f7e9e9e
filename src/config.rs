use crate::error::{PathError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Legacy maximum path length, in UTF-16 code units
pub const LEGACY_MAX_PATH: usize = 260;

/// Tunables for the extended-prefix rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathRulesConfig {
	/// Paths longer than this get the `\\?\` prefix
	pub legacy_max_path: usize,
	/// Prefix every path regardless of its length
	pub force_extended_prefix: bool,
}

impl Default for PathRulesConfig {
	fn default() -> Self {
		Self {
			legacy_max_path: LEGACY_MAX_PATH,
			force_extended_prefix: false,
		}
	}
}

impl PathRulesConfig {
	/// Validate the configuration and return errors if invalid
	pub fn validate(&self) -> Result<()> {
		if self.legacy_max_path == 0 {
			return Err(PathError::invalid_configuration(
				"legacy_max_path",
				"must be greater than 0",
			));
		}
		Ok(())
	}

	/// Parse and validate a JSON configuration document
	pub fn from_json_str(json: &str) -> Result<Self> {
		let config: Self = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_json_file(path: &Path) -> Result<Self> {
		let json = std::fs::read_to_string(path)?;
		Self::from_json_str(&json)
	}
}
