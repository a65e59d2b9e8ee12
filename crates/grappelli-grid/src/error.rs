//! Error types for the grid engine

use grappelli_source::SourceError;
use thiserror::Error;

/// Configuration error, raised synchronously by the grid's mutators.
///
/// These are fail-fast: the offending call leaves the grid untouched and
/// the error is surfaced to the caller immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
	/// A column with this name is already registered
	#[error("a column with the name \"{0}\" already exists")]
	DuplicateColumn(String),

	/// The referenced column is not known to the grid
	#[error("the column \"{0}\" doesn't exist")]
	UnknownColumn(String),

	/// The column exists but is not backed by a sortable source field
	#[error("the column \"{0}\" can't be sorted on")]
	NotSortable(String),

	/// The default sorting column is not among the sortable columns
	#[error("the column \"{0}\" can't be set as the default sorting column")]
	InvalidSortDefault(String),

	/// The paging limit must be positive
	#[error("the paging limit must be greater than zero")]
	InvalidPagingLimit,
}

/// Grid error type: configuration, data source, or rendering failure
#[derive(Debug, Error)]
pub enum GridError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Source(#[from] SourceError),

	/// Template rendering failed
	#[cfg(feature = "html")]
	#[error("template rendering failed: {0}")]
	Template(#[from] tera::Error),
}
