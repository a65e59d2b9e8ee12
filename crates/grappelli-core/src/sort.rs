//! Sort direction handling

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[default]
	#[serde(rename = "asc")]
	Ascending,
	/// Descending order
	#[serde(rename = "desc")]
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the query-parameter form, `"asc"` or `"desc"`
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::SortDirection;
	///
	/// assert_eq!(SortDirection::Ascending.as_str(), "asc");
	/// assert_eq!(SortDirection::Descending.as_str(), "desc");
	/// ```
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Parses a sort direction from a query parameter
	///
	/// Only the exact values `"asc"` and `"desc"` are accepted; anything
	/// else yields `None` so the caller can fall back to its default.
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::SortDirection;
	///
	/// assert_eq!(SortDirection::parse("desc"), Some(SortDirection::Descending));
	/// assert_eq!(SortDirection::parse("DESC"), None);
	/// ```
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"asc" => Some(Self::Ascending),
			"desc" => Some(Self::Descending),
			_ => None,
		}
	}

	/// Returns the SQL keyword, `"ASC"` or `"DESC"`
	pub fn as_sql(&self) -> &'static str {
		match self {
			Self::Ascending => "ASC",
			Self::Descending => "DESC",
		}
	}
}
