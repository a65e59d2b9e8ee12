//! # Grappelli
//!
//! A data grid engine: sortable, paginated tabular rendering decoupled
//! from storage and markup.
//!
//! Grappelli takes a data source (an in-memory collection or a SQL query)
//! plus a set of column definitions and the inbound request's paging and
//! sorting parameters, and produces a render-ready grid: decorated cells,
//! sortable headers, and a sliding window of page links. Storage stays
//! behind the [`DataSource`] trait and markup behind a serializable output
//! model, so the engine fits any web stack that can hand it query
//! parameters and take back a structure or an HTML fragment.
//!
//! ## Feature flags
//!
//! - `db` (default): the sqlx-backed [`DatabaseSource`]
//! - `html` (default): the bundled Tera table rendering
//!
//! ## Example
//!
//! ```rust,ignore
//! use grappelli::{DataGrid, DatabaseSource, RequestParams, SortDirection};
//!
//! let source = DatabaseSource::new(
//! 	pool,
//! 	"SELECT i.id, i.title, i.date, c.title AS category
//! 	 FROM albums AS i
//! 	 INNER JOIN categories AS c ON c.id = i.category_id",
//! );
//! let mut grid = DataGrid::new(source, RequestParams::from_pairs(query_pairs)).await?;
//! grid.set_url("/albums?offset=[offset]&order=[order]&sort=[sort]");
//! grid.set_sorting_columns(&["title", "date", "category"], "date")?;
//! grid.set_sort_parameter(SortDirection::Descending);
//! grid.set_column_url("title", "/albums/edit?id=[id]", None)?;
//! grid.set_header_labels(&[("date", "Release date")])?;
//! let html = grid.render_html().await?;
//! ```

pub use grappelli_core::{
	substitute, AttributeSet, Column, Confirm, RequestParams, Row, SortDirection,
};
pub use grappelli_grid::{
	ConfigError, DataGrid, GridError, HeaderCell, PageLink, Paging, RenderedCell, RenderedGrid,
	RenderedRow, SortingLabels,
};
pub use grappelli_source::{DataSource, MemorySource, SourceError};

#[cfg(feature = "db")]
pub use grappelli_source::{DatabaseSource, QueryParameter};

#[cfg(feature = "html")]
pub use grappelli_grid::html;
