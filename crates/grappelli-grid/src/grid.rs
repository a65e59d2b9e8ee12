//! The data grid engine
//!
//! [`DataGrid`] owns the column set and the paging/sorting state
//! resolution, fetches one page from its data source, decorates every row
//! into render-ready cells, and computes the page-link window. It is
//! request-scoped: construct, configure, render once.

use crate::error::{ConfigError, GridError};
use crate::paging::{self, build_url};
use crate::render::{HeaderCell, RenderedCell, RenderedGrid, RenderedRow};
use grappelli_core::{substitute, AttributeSet, Column, Confirm, RequestParams, Row, SortDirection};
use grappelli_source::DataSource;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// Default number of results per page
const DEFAULT_PAGING_LIMIT: u64 = 30;

/// A registered column function
type ColumnFunctionFn = dyn Fn(&[String]) -> String + Send + Sync;

struct ColumnFunction {
	function: Arc<ColumnFunctionFn>,
	arguments: Vec<String>,
	targets: Vec<String>,
	overwrite: bool,
}

/// Labels for the header sorting links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingLabels {
	pub ascending: String,
	pub ascending_selected: String,
	pub descending: String,
	pub descending_selected: String,
}

impl Default for SortingLabels {
	fn default() -> Self {
		Self {
			ascending: "Sort ascending".to_string(),
			ascending_selected: "Sorted ascending".to_string(),
			descending: "Sort descending".to_string(),
			descending_selected: "Sorted descending".to_string(),
		}
	}
}

/// A sortable, paginated grid over a [`DataSource`].
///
/// Construction derives one column per source field (when the source has
/// rows), every one of them eligible for sorting. Configuration narrows
/// and decorates from there; [`render`](DataGrid::render) resolves the
/// effective offset/order/sort, fetches the page, and produces a
/// [`RenderedGrid`]. Rendering is memoized: a grid renders exactly once.
///
/// # Examples
///
/// ```rust,ignore
/// use grappelli_core::{RequestParams, SortDirection};
/// use grappelli_grid::DataGrid;
/// use grappelli_source::DatabaseSource;
///
/// let source = DatabaseSource::new(pool, "SELECT id, title, date FROM albums");
/// let mut grid = DataGrid::new(source, RequestParams::from_pairs(query_pairs)).await?;
/// grid.set_url("/albums?offset=[offset]&order=[order]&sort=[sort]");
/// grid.set_sorting_columns(&["title", "date"], "date")?;
/// grid.set_sort_parameter(SortDirection::Descending);
/// grid.set_column_url("title", "/albums/edit?id=[id]", None)?;
/// let rendered = grid.render().await?;
/// ```
pub struct DataGrid<S: DataSource> {
	source: S,
	params: RequestParams,
	columns: Vec<Column>,
	/// Source-backed column names: the only ones sorting may use
	allowed_sorting: Vec<String>,
	default_sort_column: Option<String>,
	column_functions: Vec<ColumnFunction>,
	attributes: AttributeSet,
	header_attributes: AttributeSet,
	footer_attributes: AttributeSet,
	row_attributes: AttributeSet,
	odd_row_attributes: AttributeSet,
	even_row_attributes: AttributeSet,
	sorting_labels: SortingLabels,
	caption: Option<String>,
	summary: Option<String>,
	url: Option<String>,
	paging: bool,
	paging_limit: u64,
	offset_parameter: Option<u64>,
	order_parameter: Option<String>,
	sort_parameter: Option<SortDirection>,
	num_results: u64,
	rendered: Option<RenderedGrid>,
}

impl<S: DataSource> DataGrid<S> {
	/// Creates a grid over `source`, reading ambient paging/sorting state
	/// from `params`.
	///
	/// When the source is non-empty, one column per source field is
	/// derived in discovery order, label and value template matching the
	/// field name, and every derived column is eligible for sorting.
	pub async fn new(source: S, params: RequestParams) -> Result<Self, GridError> {
		let num_results = source.row_count().await?;
		let source_columns = if num_results > 0 {
			source.columns().await?
		} else {
			Vec::new()
		};

		let mut grid = Self {
			source,
			params,
			columns: Vec::new(),
			allowed_sorting: Vec::new(),
			default_sort_column: None,
			column_functions: Vec::new(),
			attributes: AttributeSet::new(),
			header_attributes: AttributeSet::new(),
			footer_attributes: AttributeSet::new(),
			row_attributes: AttributeSet::new(),
			odd_row_attributes: AttributeSet::new(),
			even_row_attributes: AttributeSet::new(),
			sorting_labels: SortingLabels::default(),
			caption: None,
			summary: None,
			url: None,
			paging: true,
			paging_limit: DEFAULT_PAGING_LIMIT,
			offset_parameter: None,
			order_parameter: None,
			sort_parameter: None,
			num_results,
			rendered: None,
		};

		for name in source_columns {
			let sequence = grid.columns.len() as u32 + 1;
			grid.allowed_sorting.push(name.clone());
			grid.columns.push(
				Column::new(&name)
					.label(&name)
					.value(format!("[{name}]"))
					.sequence(sequence)
					.sortable(true),
			);
		}

		Ok(grid)
	}

	// ========================================
	// Column configuration
	// ========================================

	/// Adds a column.
	///
	/// Typically used for action or computed columns on top of the derived
	/// set; a value template can reference any source field. A column with
	/// sequence 0 (the default) is appended after the existing columns.
	pub fn add_column(&mut self, mut column: Column) -> Result<(), ConfigError> {
		if self.column_index(column.name()).is_some() {
			return Err(ConfigError::DuplicateColumn(column.name().to_string()));
		}
		if column.position() == 0 {
			column.set_sequence(self.columns.len() as u32 + 1);
		}
		self.columns.push(column);
		Ok(())
	}

	/// Restricts sorting to `names` and sets the default sort column.
	///
	/// Every name must reference a known, source-backed column, and the
	/// default must be among the given names.
	pub fn set_sorting_columns(&mut self, names: &[&str], default: &str) -> Result<(), ConfigError> {
		if self.num_results == 0 {
			return Ok(());
		}

		for name in names {
			if self.column_index(name).is_none() {
				return Err(ConfigError::UnknownColumn(name.to_string()));
			}
			if !self.allowed_sorting.iter().any(|allowed| allowed == name) {
				return Err(ConfigError::NotSortable(name.to_string()));
			}
		}
		if !names.contains(&default) {
			return Err(ConfigError::InvalidSortDefault(default.to_string()));
		}

		for column in &mut self.columns {
			column.set_sortable(false);
		}
		for name in names {
			if let Some(index) = self.column_index(name) {
				self.columns[index].set_sortable(true);
			}
		}
		self.default_sort_column = Some(default.to_string());
		Ok(())
	}

	/// Registers a column function, run once per row after raw value
	/// resolution and before decoration.
	///
	/// Each argument template is `[field]`-substituted from the row; the
	/// return value is written into every existing target column's slot.
	/// With `overwrite`, those columns subsequently skip link/image
	/// decoration and render the function's output verbatim.
	pub fn set_column_function<F>(
		&mut self,
		function: F,
		arguments: &[&str],
		targets: &[&str],
		overwrite: bool,
	) where
		F: Fn(&[String]) -> String + Send + Sync + 'static,
	{
		if self.num_results == 0 {
			return;
		}
		self.column_functions.push(ColumnFunction {
			function: Arc::new(function),
			arguments: arguments.iter().map(|argument| argument.to_string()).collect(),
			targets: targets.iter().map(|target| target.to_string()).collect(),
			overwrite,
		});
	}

	/// Wraps the column's cells in a link
	pub fn set_column_url(
		&mut self,
		column: &str,
		url: &str,
		title: Option<&str>,
	) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			column.set_url(url, title);
		}
		Ok(())
	}

	/// Renders the column's cells as an image
	pub fn set_column_image(
		&mut self,
		column: &str,
		image: &str,
		title: Option<&str>,
	) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			column.set_image(image, title);
		}
		Ok(())
	}

	/// Attaches a confirmation prompt to the column's link
	pub fn set_column_confirm(
		&mut self,
		column: &str,
		message: &str,
		custom_script: Option<&str>,
	) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			let mut confirm = Confirm::new(message);
			if let Some(script) = custom_script {
				confirm = confirm.with_script(script);
			}
			column.set_confirm(confirm);
		}
		Ok(())
	}

	/// Hides or shows a single column
	pub fn set_column_hidden(&mut self, column: &str, hidden: bool) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			column.set_hidden(hidden);
		}
		Ok(())
	}

	/// Hides several columns at once
	pub fn set_columns_hidden(&mut self, columns: &[&str]) -> Result<(), ConfigError> {
		for column in columns {
			self.set_column_hidden(column, true)?;
		}
		Ok(())
	}

	/// Sets extra HTML attributes on the column's cells
	pub fn set_column_attributes(
		&mut self,
		column: &str,
		attributes: &[(&str, &str)],
	) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			column.attributes_mut().extend(attributes);
		}
		Ok(())
	}

	/// Sets the direction a first click on the column's header sorts by
	pub fn set_column_sorting_method(
		&mut self,
		column: &str,
		direction: SortDirection,
	) -> Result<(), ConfigError> {
		if let Some(column) = self.column_for_update(column)? {
			column.set_sorting_method(direction);
		}
		Ok(())
	}

	/// Replaces header labels, `(column, label)` per entry
	pub fn set_header_labels(&mut self, labels: &[(&str, &str)]) -> Result<(), ConfigError> {
		for (column, label) in labels {
			if let Some(column) = self.column_for_update(column)? {
				column.set_label(*label);
			}
		}
		Ok(())
	}

	/// Reorders columns: the listed columns take positions 1.., the
	/// remaining ones follow in their previous relative order
	pub fn set_columns_sequence(&mut self, columns: &[&str]) -> Result<(), ConfigError> {
		if self.num_results == 0 {
			return Ok(());
		}
		for column in columns {
			if self.column_index(column).is_none() {
				return Err(ConfigError::UnknownColumn(column.to_string()));
			}
		}

		let previous_order: Vec<String> = self
			.display_order()
			.into_iter()
			.map(|index| self.columns[index].name().to_string())
			.collect();

		let mut sequence = 0_u32;
		for name in columns {
			sequence += 1;
			if let Some(index) = self.column_index(name) {
				self.columns[index].set_sequence(sequence);
			}
		}
		for name in previous_order {
			if columns.iter().any(|listed| *listed == name) {
				continue;
			}
			sequence += 1;
			if let Some(index) = self.column_index(&name) {
				self.columns[index].set_sequence(sequence);
			}
		}
		Ok(())
	}

	// ========================================
	// Grid configuration
	// ========================================

	/// Enables or disables paging (enabled by default)
	pub fn set_paging(&mut self, paging: bool) {
		self.paging = paging;
	}

	/// Sets the number of results per page (default 30)
	pub fn set_paging_limit(&mut self, limit: u64) -> Result<(), ConfigError> {
		if limit == 0 {
			return Err(ConfigError::InvalidPagingLimit);
		}
		self.paging_limit = limit;
		Ok(())
	}

	/// Sets the URL template used for sorting and paging links; it should
	/// carry the `[offset]`, `[order]`, and `[sort]` tokens
	pub fn set_url(&mut self, url: impl Into<String>) {
		self.url = Some(url.into());
	}

	/// Sets the table caption
	pub fn set_caption(&mut self, caption: impl Into<String>) {
		self.caption = Some(caption.into());
	}

	/// Sets the table summary
	pub fn set_summary(&mut self, summary: impl Into<String>) {
		self.summary = Some(summary.into());
	}

	/// Sets attributes on the table element
	pub fn set_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.attributes.extend(attributes);
	}

	/// Removes all table attributes
	pub fn clear_attributes(&mut self) {
		self.attributes.clear();
	}

	/// Sets attributes on the header row
	pub fn set_header_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.header_attributes.extend(attributes);
	}

	/// Sets attributes on the footer row
	pub fn set_footer_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.footer_attributes.extend(attributes);
	}

	/// Sets attributes applied to every body row; values may carry
	/// `[field]` tokens, substituted per row
	pub fn set_row_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.row_attributes.extend(attributes);
	}

	/// Sets attributes applied to odd body rows (the first row is odd)
	pub fn set_odd_row_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.odd_row_attributes.extend(attributes);
	}

	/// Sets attributes applied to even body rows
	pub fn set_even_row_attributes(&mut self, attributes: &[(&str, &str)]) {
		self.even_row_attributes.extend(attributes);
	}

	/// Replaces the header sorting-link labels
	pub fn set_sorting_labels(&mut self, labels: SortingLabels) {
		self.sorting_labels = labels;
	}

	// ========================================
	// Explicit paging/sorting overrides
	// ========================================

	/// Overrides the ambient offset
	pub fn set_offset_parameter(&mut self, offset: u64) {
		self.offset_parameter = Some(offset);
	}

	/// Overrides the ambient order column
	pub fn set_order_parameter(&mut self, order: impl Into<String>) {
		self.order_parameter = Some(order.into());
	}

	/// Overrides the ambient sort direction
	pub fn set_sort_parameter(&mut self, direction: SortDirection) {
		self.sort_parameter = Some(direction);
	}

	// ========================================
	// Accessors
	// ========================================

	/// Total number of rows the source reports
	pub fn num_results(&self) -> u64 {
		self.num_results
	}

	/// The effective per-page limit; absent when paging is disabled
	pub fn paging_limit(&self) -> Option<u64> {
		self.paging.then_some(self.paging_limit)
	}

	/// True when at least one column is effectively sortable
	pub fn has_sorting(&self) -> bool {
		!self.sorting_columns().is_empty()
	}

	/// The resolved, clamped offset; absent when paging is disabled
	pub fn offset(&self) -> Option<u64> {
		self.resolve_offset()
	}

	/// The resolved sort column; absent when sorting is disabled
	pub fn order(&self) -> Option<String> {
		self.resolve_order()
	}

	/// The resolved sort direction
	pub fn sort(&self) -> SortDirection {
		self.resolve_sort()
	}

	// ========================================
	// Rendering
	// ========================================

	/// Resolves state, fetches the page, and produces the render-ready
	/// grid. Idempotent: the first call's output is memoized.
	///
	/// A zero-row source yields a well-defined empty grid rather than an
	/// error, so downstream templating always receives a consistent
	/// structure.
	pub async fn render(&mut self) -> Result<RenderedGrid, GridError> {
		if let Some(rendered) = &self.rendered {
			return Ok(rendered.clone());
		}
		let rendered = self.build().await?;
		self.rendered = Some(rendered.clone());
		Ok(rendered)
	}

	/// Renders the grid through the bundled HTML template.
	///
	/// Returns the empty string when the source produced no rows, letting
	/// the host fall back to its own "no items" rendering.
	#[cfg(feature = "html")]
	pub async fn render_html(&mut self) -> Result<String, GridError> {
		let rendered = self.render().await?;
		if rendered.is_empty() {
			return Ok(String::new());
		}
		crate::html::render(&rendered)
	}

	async fn build(&self) -> Result<RenderedGrid, GridError> {
		let offset = self.resolve_offset();
		let order = self.resolve_order();
		let direction = self.resolve_sort();
		let limit = self.paging.then_some(self.paging_limit);

		tracing::debug!(
			?offset,
			?order,
			sort = direction.as_str(),
			results = self.num_results,
			"rendering grid"
		);

		let mut rendered = RenderedGrid {
			attributes: self.attributes.to_html(),
			header_attributes: self.header_attributes.to_html(),
			footer_attributes: self.footer_attributes.to_html(),
			caption: self.caption.clone(),
			summary: self.summary.clone(),
			headers: Vec::new(),
			rows: Vec::new(),
			num_columns: 0,
			paging: None,
			offset,
			order: order.clone(),
			sort: direction,
		};

		if self.num_results == 0 {
			return Ok(rendered);
		}

		let records = self
			.source
			.page(offset, limit, order.as_deref(), direction)
			.await?;
		if records.is_empty() {
			return Ok(rendered);
		}

		let display = self.display_order();
		let overwritten = self.overwritten_columns();

		rendered.headers = self.build_headers(&display, offset, order.as_deref(), direction);
		rendered.num_columns = rendered.headers.len();

		for (index, record) in records.iter().enumerate() {
			rendered.rows.push(self.build_row(
				index,
				record,
				&display,
				&overwritten,
				offset,
				order.as_deref(),
				direction,
			));
		}

		if self.paging {
			rendered.paging = Some(paging::build(
				self.url.as_deref().unwrap_or(""),
				offset.unwrap_or(0),
				order.as_deref(),
				direction,
				self.num_results,
				self.paging_limit,
			));
		}

		Ok(rendered)
	}

	// ========================================
	// State resolution
	// ========================================

	/// Column names sorting may effectively use: flagged sortable and
	/// backed by a source field, in column insertion order
	fn sorting_columns(&self) -> Vec<String> {
		self.columns
			.iter()
			.filter(|column| {
				column.is_sortable()
					&& self.allowed_sorting.iter().any(|allowed| allowed == column.name())
			})
			.map(|column| column.name().to_string())
			.collect()
	}

	fn resolve_order(&self) -> Option<String> {
		let sorting_columns = self.sorting_columns();
		if sorting_columns.is_empty() {
			return None;
		}

		// absent an explicit default, the last sortable column serves
		let default = self
			.default_sort_column
			.clone()
			.or_else(|| sorting_columns.last().cloned());

		let requested = self
			.order_parameter
			.clone()
			.or_else(|| self.params.order.clone());
		match requested {
			Some(order) if sorting_columns.contains(&order) => Some(order),
			_ => default,
		}
	}

	fn resolve_sort(&self) -> SortDirection {
		self.sort_parameter
			.or_else(|| self.params.sort.as_deref().and_then(SortDirection::parse))
			.unwrap_or_default()
	}

	/// The ordered clamp sequence: too-large steps back to the last page,
	/// a misaligned offset resets to 0, and nothing may end up negative.
	/// Later rules override earlier corrections.
	fn resolve_offset(&self) -> Option<u64> {
		if !self.paging {
			return None;
		}
		if self.num_results == 0 {
			return Some(0);
		}

		let requested = self.offset_parameter.or(self.params.offset).unwrap_or(0);
		let total = self.num_results as i64;
		let limit = self.paging_limit as i64;
		let mut offset = requested as i64;

		if offset >= total {
			offset = total - limit;
			tracing::warn!(
				requested,
				corrected = offset,
				"offset beyond the result set, stepping back to the last page"
			);
		}
		if offset % limit != 0 {
			tracing::warn!(requested, "offset not aligned to the paging limit, resetting to 0");
			offset = 0;
		}
		if offset - limit < 0 {
			offset = 0;
		}

		Some(offset as u64)
	}

	// ========================================
	// Row and header construction
	// ========================================

	fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.name() == name)
	}

	/// Column lookup for the configuration surface: unknown names are a
	/// `ConfigError`, except on a zero-row grid where configuration is
	/// accepted as a no-op (no columns were derived to validate against)
	fn column_for_update(&mut self, name: &str) -> Result<Option<&mut Column>, ConfigError> {
		if self.num_results == 0 {
			return Ok(None);
		}
		match self.columns.iter_mut().find(|column| column.name() == name) {
			Some(column) => Ok(Some(column)),
			None => Err(ConfigError::UnknownColumn(name.to_string())),
		}
	}

	/// Column indexes in display order: by sequence, insertion order
	/// breaking ties
	fn display_order(&self) -> Vec<usize> {
		let mut indices: Vec<usize> = (0..self.columns.len()).collect();
		indices.sort_by_key(|&index| self.columns[index].position());
		indices
	}

	/// Columns whose cells bypass decoration: flagged on the column
	/// itself, or targeted by an overwriting column function
	fn overwritten_columns(&self) -> HashSet<String> {
		let mut overwritten: HashSet<String> = self
			.columns
			.iter()
			.filter(|column| column.is_overwriting())
			.map(|column| column.name().to_string())
			.collect();
		for function in &self.column_functions {
			if !function.overwrite {
				continue;
			}
			for target in &function.targets {
				if self.column_index(target).is_some() {
					overwritten.insert(target.clone());
				}
			}
		}
		overwritten
	}

	/// Builds the per-row substitution context: the record's fields, the
	/// `offset`/`order`/`sort` synthetics, then computed columns resolved
	/// in column insertion order (so later templates see earlier results)
	fn build_context(
		&self,
		record: &Row,
		offset: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> Row {
		let mut context = Row::new();
		for (name, value) in record.iter() {
			context.set(name, value);
		}
		if self.paging && context.get("offset").is_none() {
			context.set("offset", offset.unwrap_or(0).to_string());
		}
		if let Some(order) = order {
			if context.get("order").is_none() {
				context.set("order", order);
			}
			if context.get("sort").is_none() {
				context.set("sort", direction.as_str());
			}
		}
		for column in &self.columns {
			if context.get(column.name()).is_none() {
				let value = column.resolved_value(&context);
				context.set(column.name().to_string(), value);
			}
		}
		context
	}

	/// Runs the registered column functions against a row context, in
	/// registration order
	fn apply_column_functions(&self, mut context: Row) -> Row {
		for function in &self.column_functions {
			let arguments: Vec<String> = function
				.arguments
				.iter()
				.map(|template| {
					substitute(template, |token| context.get(token).map(str::to_string))
				})
				.collect();
			let value = (function.function)(&arguments);
			for target in &function.targets {
				if context.get(target).is_some() {
					context.set(target.clone(), value.clone());
				}
			}
		}
		context
	}

	fn build_row(
		&self,
		index: usize,
		record: &Row,
		display: &[usize],
		overwritten: &HashSet<String>,
		offset: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> RenderedRow {
		let context = self.build_context(record, offset, order, direction);
		let context = self.apply_column_functions(context);
		let sub = |template: &str| {
			substitute(template, |token| context.get(token).map(str::to_string))
		};

		let mut cells = Vec::new();
		let mut values = BTreeMap::new();
		for &column_index in display {
			let column = &self.columns[column_index];
			if column.is_hidden() {
				continue;
			}
			let raw = context.get(column.name()).unwrap_or("").to_string();
			let value = if overwritten.contains(column.name()) {
				raw
			} else {
				decorate(column, &raw, &sub)
			};
			values.insert(column.name().to_string(), value.clone());
			cells.push(RenderedCell {
				attributes: column.attributes().to_html(),
				value,
			});
		}

		let attributes = sub(&self.row_attributes.to_html());
		let (odd_attributes, even_attributes) = if index % 2 == 0 {
			(sub(&self.odd_row_attributes.to_html()), String::new())
		} else {
			(String::new(), sub(&self.even_row_attributes.to_html()))
		};

		RenderedRow {
			attributes,
			odd_attributes,
			even_attributes,
			cells,
			values,
		}
	}

	fn build_headers(
		&self,
		display: &[usize],
		offset: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> Vec<HeaderCell> {
		let sorting_columns = self.sorting_columns();
		let url = self.url.as_deref().unwrap_or("");
		let mut headers = Vec::new();

		for &column_index in display {
			let column = &self.columns[column_index];
			if column.is_hidden() {
				continue;
			}
			let mut header = HeaderCell {
				label: column.header_label().to_string(),
				..HeaderCell::default()
			};

			if sorting_columns.iter().any(|name| name == column.name()) {
				header.sorting = true;
				let current = order == Some(column.name());
				header.sorted = current;
				header.sorted_ascending = current && direction == SortDirection::Ascending;
				header.sorted_descending = current && direction == SortDirection::Descending;

				// the toggle link: first click uses the column's default
				// direction, a click on the current column flips it
				let toggled = if current {
					direction.toggle()
				} else {
					column.sorting_method()
				};
				header.sorting_url =
					Some(build_url(url, offset, Some(column.name()), toggled));
				header.sorting_url_ascending = Some(build_url(
					url,
					offset,
					Some(column.name()),
					SortDirection::Ascending,
				));
				header.sorting_url_descending = Some(build_url(
					url,
					offset,
					Some(column.name()),
					SortDirection::Descending,
				));

				let label = if current {
					match direction {
						SortDirection::Ascending => &self.sorting_labels.ascending_selected,
						SortDirection::Descending => &self.sorting_labels.descending_selected,
					}
				} else {
					match column.sorting_method() {
						SortDirection::Ascending => &self.sorting_labels.ascending,
						SortDirection::Descending => &self.sorting_labels.descending,
					}
				};
				header.sorting_label = Some(label.clone());
			}

			headers.push(header);
		}

		headers
	}
}

/// Builds a cell's decorated value: link wrapper, then image or templated
/// value, closing the link last. Column functions have already run; their
/// output lands in `raw` and gets wrapped here unless the column
/// overwrites.
fn decorate(column: &Column, raw: &str, sub: &impl Fn(&str) -> String) -> String {
	let mut value = String::new();

	if let Some(url) = column.url_template() {
		value.push_str("<a href=\"");
		value.push_str(&sub(url));
		value.push_str("\" title=\"");
		value.push_str(&sub(column.url_title().unwrap_or("")));
		value.push('"');
		if let Some(confirm) = column.confirmation() {
			match confirm.custom_script() {
				None => {
					value.push_str(" onclick=\"return confirm('");
					value.push_str(&sub(confirm.message()));
					value.push_str("');\"");
				}
				Some(script) => {
					let script = script.replace("%message%", confirm.message());
					value.push(' ');
					value.push_str(&sub(&script));
				}
			}
		}
		value.push('>');
	}

	if let Some(image) = column.image_template() {
		let title = sub(column.image_title().unwrap_or(""));
		value.push_str("<img src=\"");
		value.push_str(&sub(image));
		value.push_str("\" alt=\"");
		value.push_str(&title);
		value.push_str("\" title=\"");
		value.push_str(&title);
		value.push_str("\" />");
	} else {
		value.push_str(raw);
	}

	if column.url_template().is_some() {
		value.push_str("</a>");
	}

	value
}
