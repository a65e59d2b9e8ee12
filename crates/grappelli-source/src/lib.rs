//! Data sources for the Grappelli data grid engine.
//!
//! A grid is polymorphic over where its rows come from. This crate defines
//! the [`DataSource`] contract and two implementations:
//!
//! - [`MemorySource`] wraps an in-memory sequence of rows and sorts/slices
//!   it on demand;
//! - [`DatabaseSource`] (feature `db`) wraps a SQL query plus bind
//!   parameters and pushes ordering and paging down into the statement.

use async_trait::async_trait;
use grappelli_core::{Row, SortDirection};
use thiserror::Error;

pub mod memory;

#[cfg(feature = "db")]
pub mod database;

pub use memory::MemorySource;

#[cfg(feature = "db")]
pub use database::{DatabaseSource, QueryParameter};

/// Data source error type
#[derive(Debug, Error)]
pub enum SourceError {
	/// The underlying query could not be executed
	#[cfg(feature = "db")]
	#[error("query execution failed: {0}")]
	Query(#[from] sqlx::Error),

	/// A custom backend failed
	#[error("data source backend failed: {0}")]
	Backend(String),
}

/// Result type for data source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// A paged, sortable supplier of rows.
///
/// The engine calls `row_count` once per render, `columns` once at
/// configuration time (only when the source is non-empty), and `page`
/// once per render with the resolved paging and sorting state.
///
/// Contract:
/// - `offset` and `limit` are either both `Some` (paging enabled; `limit`
///   is positive and `offset` a multiple of it) or both `None`;
/// - `order = None` means natural order, and `direction` is only
///   meaningful when an order column is given;
/// - `page` returns a fresh sequence on every call and must not mutate
///   the source; fewer rows than `limit` is the normal final-page case,
///   not an error.
#[async_trait]
pub trait DataSource: Send + Sync {
	/// Total number of rows the source can yield
	async fn row_count(&self) -> SourceResult<u64>;

	/// Field names in discovery order; empty when the source has no rows
	async fn columns(&self) -> SourceResult<Vec<String>>;

	/// One page of rows under the given paging and sorting state
	async fn page(
		&self,
		offset: Option<u64>,
		limit: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> SourceResult<Vec<Row>>;
}
