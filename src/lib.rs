mod casefold;
pub mod combine;
pub mod config;
pub mod directory;
mod error;
pub mod extended;
pub mod extension;
pub mod format;
pub mod reduce;
pub mod separator;

pub use combine::{combine, try_combine};
pub use config::{PathRulesConfig, LEGACY_MAX_PATH};
pub use directory::directory_or_root;
pub use error::{PathError, Result};
pub use extended::{add_extended_prefix, add_extended_prefix_with, is_extended};
pub use extension::{extension, has_extension};
pub use format::{classify, Classification, PathFormat};
pub use reduce::{reduce, RootReducer};
