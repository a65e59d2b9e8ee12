//! In-memory data source

use crate::{DataSource, SourceResult};
use async_trait::async_trait;
use grappelli_core::{Row, SortDirection};
use std::cmp::Ordering;

/// Data source over an in-memory sequence of rows.
///
/// Rows are expected to share a homogeneous field set; column discovery
/// reads the first row. Sorting compares the named field numerically when
/// both values parse as numbers and lexically otherwise; the sort is
/// stable, and a descending page is the exact reverse of the ascending
/// order (ties reverse with it).
///
/// # Examples
///
/// ```
/// use grappelli_core::Row;
/// use grappelli_source::MemorySource;
///
/// let source = MemorySource::new(vec![
/// 	Row::from([("id", "1"), ("title", "Nuages")]),
/// 	Row::from([("id", "2"), ("title", "Minor Swing")]),
/// ]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	rows: Vec<Row>,
}

impl MemorySource {
	/// Creates a source over the given rows
	pub fn new(rows: Vec<Row>) -> Self {
		Self { rows }
	}
}

/// Numeric comparison when both values parse as numbers, lexical otherwise
fn compare_values(a: &str, b: &str) -> Ordering {
	match (a.parse::<f64>(), b.parse::<f64>()) {
		(Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
		_ => a.cmp(b),
	}
}

#[async_trait]
impl DataSource for MemorySource {
	async fn row_count(&self) -> SourceResult<u64> {
		Ok(self.rows.len() as u64)
	}

	async fn columns(&self) -> SourceResult<Vec<String>> {
		Ok(self
			.rows
			.first()
			.map(|row| row.names().map(str::to_string).collect())
			.unwrap_or_default())
	}

	async fn page(
		&self,
		offset: Option<u64>,
		limit: Option<u64>,
		order: Option<&str>,
		direction: SortDirection,
	) -> SourceResult<Vec<Row>> {
		let mut rows = self.rows.clone();

		if let Some(order) = order {
			rows.sort_by(|a, b| {
				compare_values(a.get(order).unwrap_or(""), b.get(order).unwrap_or(""))
			});
			if direction == SortDirection::Descending {
				rows.reverse();
			}
		}

		if let (Some(offset), Some(limit)) = (offset, limit) {
			rows = rows
				.into_iter()
				.skip(offset as usize)
				.take(limit as usize)
				.collect();
		}

		Ok(rows)
	}
}
