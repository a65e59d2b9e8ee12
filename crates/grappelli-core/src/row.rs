//! Row model
//!
//! A [`Row`] is the unit a data source hands to the grid: an ordered
//! mapping from field name to string value. Field order matters: it is
//! the discovery order used when a grid auto-derives its columns.

use serde::Serialize;

/// One record produced by a data source.
///
/// Values are carried in their string form; numeric comparison happens at
/// sort time, not here. Rows are ephemeral: they live for a single render.
///
/// # Examples
///
/// ```
/// use grappelli_core::Row;
///
/// let row = Row::from([("id", "12"), ("title", "Minor Swing")]);
/// assert_eq!(row.get("title"), Some("Minor Swing"));
/// assert_eq!(row.names().collect::<Vec<_>>(), vec!["id", "title"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
	fields: Vec<(String, String)>,
}

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Sets a field, replacing any existing value under the same name
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
			Some(field) => field.1 = value,
			None => self.fields.push((name, value)),
		}
	}

	/// Returns the value for a field, if present
	pub fn get(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(existing, _)| existing == name)
			.map(|(_, value)| value.as_str())
	}

	/// Iterates field names in insertion order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	/// Iterates `(name, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of fields
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true when the row carries no fields
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Row {
	fn from(fields: [(&str, &str); N]) -> Self {
		let mut row = Row::new();
		for (name, value) in fields {
			row.set(name, value);
		}
		row
	}
}

impl FromIterator<(String, String)> for Row {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		let mut row = Row::new();
		for (name, value) in iter {
			row.set(name, value);
		}
		row
	}
}
