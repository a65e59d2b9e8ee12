//! Column definitions
//!
//! A [`Column`] describes one display column of a grid: its header label,
//! its value template, and the optional link, image, and confirmation
//! decoration applied to every cell. Columns are pure value holders; the
//! grid engine owns resolution and decoration order.

use crate::row::Row;
use crate::sort::SortDirection;
use crate::template::{escape_html, substitute};
use crate::AttributeSet;

/// Confirmation prompt attached to a column's link.
///
/// Rendered as an `onclick` handler: the default form wraps the message in
/// `return confirm('...')`; a custom script replaces the whole attribute
/// and may reference the escaped message through its `%message%` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
	message: String,
	custom_script: Option<String>,
}

impl Confirm {
	/// Creates a confirmation with the default `confirm()` handler.
	/// The message is HTML-escaped here, at set time.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: escape_html(&message.into()),
			custom_script: None,
		}
	}

	/// Replaces the default handler with a custom script; `%message%`
	/// inside the script expands to the escaped message
	pub fn with_script(mut self, script: impl Into<String>) -> Self {
		self.custom_script = Some(script.into());
		self
	}

	/// The escaped confirmation message
	pub fn message(&self) -> &str {
		&self.message
	}

	/// The custom script, if one replaces the default handler
	pub fn custom_script(&self) -> Option<&str> {
		self.custom_script.as_deref()
	}
}

/// One display column of a grid.
///
/// # Examples
///
/// ```
/// use grappelli_core::{Column, Row};
///
/// let column = Column::new("artist").label("Artist").value("[first] [last]");
/// let row = Row::from([("first", "Django"), ("last", "Reinhardt")]);
/// assert_eq!(column.resolved_value(&row), "Django Reinhardt");
/// ```
#[derive(Debug, Clone)]
pub struct Column {
	name: String,
	label: String,
	value: String,
	url: Option<String>,
	url_title: Option<String>,
	image: Option<String>,
	image_title: Option<String>,
	confirm: Option<Confirm>,
	attributes: AttributeSet,
	hidden: bool,
	overwrite: bool,
	sequence: u32,
	sortable: bool,
	sorting_method: SortDirection,
}

impl Column {
	/// Creates a column with an empty label and value template.
	///
	/// A sequence of 0 means "unset"; the grid assigns the next free
	/// position when the column is added.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: String::new(),
			value: String::new(),
			url: None,
			url_title: None,
			image: None,
			image_title: None,
			confirm: None,
			attributes: AttributeSet::new(),
			hidden: false,
			overwrite: false,
			sequence: 0,
			sortable: false,
			sorting_method: SortDirection::Ascending,
		}
	}

	/// Sets the header label
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.label = label.into();
		self
	}

	/// Sets the value template (`[field]` tokens are substituted per row)
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Sets the link URL template and optional title template
	pub fn url(mut self, url: impl Into<String>, title: Option<&str>) -> Self {
		self.url = Some(url.into());
		self.url_title = title.map(str::to_string);
		self
	}

	/// Sets the image source template and title template
	pub fn image(mut self, image: impl Into<String>, title: Option<&str>) -> Self {
		self.image = Some(image.into());
		self.image_title = title.map(str::to_string);
		self
	}

	/// Attaches a confirmation prompt to the column's link
	pub fn confirm(mut self, confirm: Confirm) -> Self {
		self.confirm = Some(confirm);
		self
	}

	/// Sets the hidden flag
	pub fn hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;
		self
	}

	/// Sets the overwrite flag: the cell takes the row's raw slot value
	/// and skips link/image decoration
	pub fn overwrite(mut self, overwrite: bool) -> Self {
		self.overwrite = overwrite;
		self
	}

	/// Sets the display position (1-based)
	pub fn sequence(mut self, sequence: u32) -> Self {
		self.sequence = sequence;
		self
	}

	/// Sets whether the column participates in sorting
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	// ========================================
	// Accessors
	// ========================================

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn header_label(&self) -> &str {
		&self.label
	}

	pub fn value_template(&self) -> &str {
		&self.value
	}

	pub fn url_template(&self) -> Option<&str> {
		self.url.as_deref()
	}

	pub fn url_title(&self) -> Option<&str> {
		self.url_title.as_deref()
	}

	pub fn image_template(&self) -> Option<&str> {
		self.image.as_deref()
	}

	pub fn image_title(&self) -> Option<&str> {
		self.image_title.as_deref()
	}

	pub fn confirmation(&self) -> Option<&Confirm> {
		self.confirm.as_ref()
	}

	pub fn attributes(&self) -> &AttributeSet {
		&self.attributes
	}

	pub fn attributes_mut(&mut self) -> &mut AttributeSet {
		&mut self.attributes
	}

	pub fn is_hidden(&self) -> bool {
		self.hidden
	}

	/// When true, the cell takes the row's raw slot value verbatim and
	/// skips link/image decoration
	pub fn is_overwriting(&self) -> bool {
		self.overwrite
	}

	pub fn position(&self) -> u32 {
		self.sequence
	}

	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// The direction a first click on this column's header sorts by
	pub fn sorting_method(&self) -> SortDirection {
		self.sorting_method
	}

	// ========================================
	// In-place mutators (used by the grid's configuration surface)
	// ========================================

	pub fn set_label(&mut self, label: impl Into<String>) {
		self.label = label.into();
	}

	pub fn set_url(&mut self, url: impl Into<String>, title: Option<&str>) {
		self.url = Some(url.into());
		self.url_title = title.map(str::to_string);
	}

	pub fn set_image(&mut self, image: impl Into<String>, title: Option<&str>) {
		self.image = Some(image.into());
		self.image_title = title.map(str::to_string);
	}

	pub fn set_confirm(&mut self, confirm: Confirm) {
		self.confirm = Some(confirm);
	}

	pub fn set_hidden(&mut self, hidden: bool) {
		self.hidden = hidden;
	}

	pub fn set_overwrite(&mut self, overwrite: bool) {
		self.overwrite = overwrite;
	}

	pub fn set_sequence(&mut self, sequence: u32) {
		self.sequence = sequence;
	}

	pub fn set_sortable(&mut self, sortable: bool) {
		self.sortable = sortable;
	}

	pub fn set_sorting_method(&mut self, direction: SortDirection) {
		self.sorting_method = direction;
	}

	/// Resolves the value template against a row.
	///
	/// Tokens naming fields the row does not carry are left verbatim; the
	/// grid resolves computed columns in insertion order precisely so that
	/// later columns can reference earlier ones.
	pub fn resolved_value(&self, row: &Row) -> String {
		substitute(&self.value, |token| row.get(token).map(str::to_string))
	}
}
