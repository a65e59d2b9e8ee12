//! HTML attribute sets
//!
//! The grid, its header, footer, rows, and every column can carry extra
//! HTML attributes. They render as a single ` key="value"` string that a
//! template drops straight into the opening tag.

/// Insertion-ordered set of HTML attributes.
///
/// # Examples
///
/// ```
/// use grappelli_core::AttributeSet;
///
/// let mut attributes = AttributeSet::new();
/// attributes.set("class", "datagrid");
/// attributes.set("id", "albums");
/// assert_eq!(attributes.to_html(), r#" class="datagrid" id="albums""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
	entries: Vec<(String, String)>,
}

impl AttributeSet {
	/// Creates an empty set
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Sets an attribute, overwriting an existing one with the same name
	pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((name, value)),
		}
	}

	/// Sets every attribute of `pairs`
	pub fn extend(&mut self, pairs: &[(&str, &str)]) {
		for (name, value) in pairs {
			self.set(*name, *value);
		}
	}

	/// Removes all attributes
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Returns true when no attributes are set
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Renders the set as ` key="value"` pairs, empty string when empty
	pub fn to_html(&self) -> String {
		let mut html = String::new();
		for (name, value) in &self.entries {
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(value);
			html.push('"');
		}
		html
	}
}
