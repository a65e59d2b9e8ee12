//! Ambient request parameters
//!
//! The grid never reads request state from anywhere ambient: the hosting
//! layer extracts `offset`, `order`, and `sort` from its query parameters
//! and hands them over as an explicit [`RequestParams`] value. Explicit
//! engine-level overrides always win over these.

/// Paging and sorting values taken from the inbound request.
///
/// All fields are optional; unset fields fall back to the engine defaults
/// (offset 0, configured default sort column, ascending). The values are
/// untrusted: the engine validates `order` against its sortable columns
/// and `sort` against the two literal directions, and clamps `offset`.
///
/// # Examples
///
/// ```
/// use grappelli_core::RequestParams;
///
/// let params = RequestParams::from_pairs([
/// 	("offset", "30"),
/// 	("order", "date"),
/// 	("sort", "desc"),
/// 	("page_junk", "ignored"),
/// ]);
/// assert_eq!(params.offset, Some(30));
/// assert_eq!(params.order.as_deref(), Some("date"));
/// assert_eq!(params.sort.as_deref(), Some("desc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
	/// Requested result offset
	pub offset: Option<u64>,
	/// Requested sort column name
	pub order: Option<String>,
	/// Requested sort direction, `"asc"` or `"desc"`
	pub sort: Option<String>,
}

impl RequestParams {
	/// Creates an empty parameter set (every value falls back to defaults)
	pub fn new() -> Self {
		Self::default()
	}

	/// Extracts the grid parameters from decoded query pairs.
	///
	/// Unrelated pairs are ignored; a non-numeric `offset` is treated as
	/// absent. `order` and `sort` are carried as-is and validated by the
	/// engine at resolution time.
	pub fn from_pairs<I, K, V>(pairs: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut params = Self::new();
		for (key, value) in pairs {
			match key.as_ref() {
				"offset" => params.offset = value.as_ref().parse().ok(),
				"order" => params.order = Some(value.as_ref().to_string()),
				"sort" => params.sort = Some(value.as_ref().to_string()),
				_ => {}
			}
		}
		params
	}

	/// Sets the offset
	pub fn with_offset(mut self, offset: u64) -> Self {
		self.offset = Some(offset);
		self
	}

	/// Sets the order column
	pub fn with_order(mut self, order: impl Into<String>) -> Self {
		self.order = Some(order.into());
		self
	}

	/// Sets the sort direction value
	pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
		self.sort = Some(sort.into());
		self
	}
}
