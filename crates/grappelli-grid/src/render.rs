//! Render-ready output model
//!
//! `render()` produces these structures; they are what a templating
//! collaborator consumes. Everything is `Serialize` so the host can hand
//! the grid to a template engine or straight over a JSON boundary.
//! Attribute strings arrive pre-rendered (` key="value"` pairs) and cell
//! values pre-decorated; the template's job is layout, not logic.

use grappelli_core::SortDirection;
use serde::Serialize;
use std::collections::BTreeMap;

/// A fully resolved grid, ready for a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedGrid {
	/// Attributes for the table element
	pub attributes: String,
	/// Attributes for the header row
	pub header_attributes: String,
	/// Attributes for the footer row
	pub footer_attributes: String,
	/// Table caption, if set
	pub caption: Option<String>,
	/// Table summary, if set
	pub summary: Option<String>,
	/// Header cells for the visible columns, in display order
	pub headers: Vec<HeaderCell>,
	/// Decorated body rows for the current page
	pub rows: Vec<RenderedRow>,
	/// Number of visible columns
	pub num_columns: usize,
	/// Paging state and page links, when paging is enabled
	pub paging: Option<Paging>,
	/// The resolved offset (absent when paging is disabled)
	pub offset: Option<u64>,
	/// The resolved sort column (absent when sorting is disabled)
	pub order: Option<String>,
	/// The resolved sort direction
	pub sort: SortDirection,
}

impl RenderedGrid {
	/// Returns true when the source produced no rows for this render
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// One header cell.
///
/// The sorting URLs are only present when the column participates in
/// sorting; `sorting_url` toggles (first click uses the column's default
/// direction, a click on the current sort column flips it).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeaderCell {
	pub label: String,
	pub sorting: bool,
	pub sorted: bool,
	pub sorted_ascending: bool,
	pub sorted_descending: bool,
	pub sorting_url: Option<String>,
	pub sorting_url_ascending: Option<String>,
	pub sorting_url_descending: Option<String>,
	/// Human label for the sorting link, e.g. "Sort descending"
	pub sorting_label: Option<String>,
}

/// One decorated body row.
///
/// Exactly one of `odd_attributes` / `even_attributes` is non-empty
/// (besides `attributes`, which applies to every row); the first row
/// counts as odd.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedRow {
	pub attributes: String,
	pub odd_attributes: String,
	pub even_attributes: String,
	/// Cells for the visible columns, in display order
	pub cells: Vec<RenderedCell>,
	/// Final cell value per visible column name
	pub values: BTreeMap<String, String>,
}

/// One decorated cell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedCell {
	pub attributes: String,
	pub value: String,
}

/// Paging state plus the sliding window of page links
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paging {
	pub num_results: u64,
	pub per_page: u64,
	pub current_page: u64,
	pub page_count: u64,
	pub previous_url: Option<String>,
	pub next_url: Option<String>,
	pub pages: Vec<PageLink>,
}

/// One entry of the page-link window
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageLink {
	/// The page number; absent for an ellipsis
	pub number: Option<u64>,
	pub is_ellipsis: bool,
	pub is_current: bool,
	/// Navigation URL; the current page and ellipses carry none
	pub url: Option<String>,
}

impl PageLink {
	/// A navigable link to `number`
	pub fn page(number: u64, url: String) -> Self {
		Self {
			number: Some(number),
			is_ellipsis: false,
			is_current: false,
			url: Some(url),
		}
	}

	/// The non-navigable marker for the current page
	pub fn current(number: u64) -> Self {
		Self {
			number: Some(number),
			is_ellipsis: false,
			is_current: true,
			url: None,
		}
	}

	/// An ellipsis between window edges
	pub fn ellipsis() -> Self {
		Self {
			number: None,
			is_ellipsis: true,
			is_current: false,
			url: None,
		}
	}
}
