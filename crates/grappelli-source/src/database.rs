//! Query-backed data source
//!
//! Wraps a SQL query (plus bind parameters) and an optional dedicated
//! count query. Ordering and paging are pushed down into the statement as
//! `ORDER BY` / `LIMIT ... OFFSET ...` suffixes, the way a grid over a
//! non-trivial join wants them. Errors surface at execution time, when the
//! backend actually sees the statement.

use crate::{DataSource, SourceResult};
use async_trait::async_trait;
use grappelli_core::{Row, SortDirection};
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::{Any, AnyPool, Column as _, Row as _};
use tokio::sync::OnceCell;

/// A value bound into the query's positional placeholders.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParameter {
	Text(String),
	Int(i64),
	Float(f64),
	Bool(bool),
}

impl From<&str> for QueryParameter {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for QueryParameter {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<i64> for QueryParameter {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for QueryParameter {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for QueryParameter {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Data source over a SQL query.
///
/// The row count runs the dedicated count query when one is set, else the
/// base query wrapped in `SELECT COUNT(*)`, and is executed exactly once
/// per source instance. `page()` never interpolates values; only the
/// validated order column name and the numeric limit/offset are appended
/// to the statement.
///
/// # Examples
///
/// ```rust,ignore
/// use grappelli_source::DatabaseSource;
///
/// let source = DatabaseSource::new(
/// 	pool,
/// 	"SELECT i.id, i.title, i.date FROM albums AS i WHERE i.category_id = ?",
/// )
/// .bind(4_i64)
/// .count_query("SELECT COUNT(i.id) FROM albums AS i WHERE i.category_id = ?")
/// .count_bind(4_i64);
/// ```
pub struct DatabaseSource {
	pool: AnyPool,
	query: String,
	parameters: Vec<QueryParameter>,
	count_query: Option<String>,
	count_parameters: Vec<QueryParameter>,
	row_count: OnceCell<u64>,
}

impl DatabaseSource {
	/// Creates a source over the given pool and base query.
	/// A trailing `;` is stripped so suffix clauses can be appended.
	pub fn new(pool: AnyPool, query: impl Into<String>) -> Self {
		Self {
			pool,
			query: strip_terminator(&query.into()),
			parameters: Vec::new(),
			count_query: None,
			count_parameters: Vec::new(),
			row_count: OnceCell::new(),
		}
	}

	/// Appends a bind parameter for the base query
	pub fn bind(mut self, parameter: impl Into<QueryParameter>) -> Self {
		self.parameters.push(parameter.into());
		self
	}

	/// Sets a dedicated count query (must yield a single integer)
	pub fn count_query(mut self, query: impl Into<String>) -> Self {
		self.count_query = Some(strip_terminator(&query.into()));
		self
	}

	/// Appends a bind parameter for the dedicated count query
	pub fn count_bind(mut self, parameter: impl Into<QueryParameter>) -> Self {
		self.count_parameters.push(parameter.into());
		self
	}

	async fn fetch_row_count(&self) -> SourceResult<u64> {
		let (sql, parameters) = match &self.count_query {
			Some(query) => (query.clone(), &self.count_parameters),
			None => (
				format!("SELECT COUNT(*) FROM ({}) AS count_source", self.query),
				&self.parameters,
			),
		};
		tracing::debug!(query = %sql, "executing count query");
		let row = bind_parameters(sqlx::query(&sql), parameters)
			.fetch_one(&self.pool)
			.await?;
		let count: i64 = row.try_get(0)?;
		Ok(count.max(0) as u64)
	}
}

#[async_trait]
impl DataSource for DatabaseSource {
	async fn row_count(&self) -> SourceResult<u64> {
		let count = self
			.row_count
			.get_or_try_init(|| self.fetch_row_count())
			.await?;
		Ok(*count)
	}

	async fn columns(&self) -> SourceResult<Vec<String>> {
		let sql = format!("{} LIMIT 1", self.query);
		tracing::debug!(query = %sql, "discovering columns");
		let row = bind_parameters(sqlx::query(&sql), &self.parameters)
			.fetch_optional(&self.pool)
			.await?;
		Ok(row
			.map(|row| row.columns().iter().map(|column| column.name().to_string()).collect())
			.unwrap_or_default())
	}

	async fn page(
		&self,
		offset: Option<u64>,
		limit: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> SourceResult<Vec<Row>> {
		let mut sql = self.query.clone();

		// `order` is a validated column name by the time it gets here; the
		// engine only ever passes names the source itself reported
		if let Some(order) = order {
			sql.push_str(&format!(" ORDER BY {} {}", order, direction.as_sql()));
		}
		if let (Some(offset), Some(limit)) = (offset, limit) {
			sql.push_str(&format!(" LIMIT {} OFFSET {}", limit, offset));
		}

		tracing::debug!(query = %sql, "fetching page");
		let rows = bind_parameters(sqlx::query(&sql), &self.parameters)
			.fetch_all(&self.pool)
			.await?;
		Ok(rows.iter().map(convert_row).collect())
	}
}

fn strip_terminator(query: &str) -> String {
	query.trim().trim_end_matches(';').trim_end().to_string()
}

fn bind_parameters<'q>(
	mut query: sqlx::query::Query<'q, Any, AnyArguments<'q>>,
	parameters: &'q [QueryParameter],
) -> sqlx::query::Query<'q, Any, AnyArguments<'q>> {
	for parameter in parameters {
		query = match parameter {
			QueryParameter::Text(value) => query.bind(value.clone()),
			QueryParameter::Int(value) => query.bind(*value),
			QueryParameter::Float(value) => query.bind(*value),
			QueryParameter::Bool(value) => query.bind(*value),
		};
	}
	query
}

/// Converts a database row into the grid's string-valued row shape.
/// NULL becomes the empty string.
fn convert_row(row: &AnyRow) -> Row {
	let mut converted = Row::new();
	for (index, column) in row.columns().iter().enumerate() {
		converted.set(column.name(), decode_value(row, index));
	}
	converted
}

/// Decodes one column to its display string, whatever its SQL type.
/// The Any driver only knows a handful of scalar kinds, so the decode is a
/// cascade over them; `Option` handles NULL at every step.
fn decode_value(row: &AnyRow, index: usize) -> String {
	if let Ok(value) = row.try_get::<Option<String>, _>(index) {
		return value.unwrap_or_default();
	}
	if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
		return value.map(|v| v.to_string()).unwrap_or_default();
	}
	if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
		return value.map(|v| v.to_string()).unwrap_or_default();
	}
	if let Ok(value) = row.try_get::<Option<bool>, _>(index) {
		return value.map(|v| v.to_string()).unwrap_or_default();
	}
	String::new()
}
