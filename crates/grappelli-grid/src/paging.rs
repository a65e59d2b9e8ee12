//! Page-link window computation
//!
//! A pure function from paging state to a sliding window of page links.
//! Up to seven pages render as plain numbers; past that, a seven-slot
//! window follows the current page, shifted (never shrunk) at the edges,
//! with an ellipsis on each side that has interior pages beyond it.

use crate::render::{PageLink, Paging};
use grappelli_core::{substitute, SortDirection};

/// Pages shown without any elision, and the width of the sliding window
const WINDOW: u64 = 7;

/// Pages kept on each side of the current page inside the window
const SPREAD: u64 = 3;

/// Substitutes the `[offset]`, `[order]`, and `[sort]` tokens of a URL
/// template.
///
/// An absent offset or order substitutes as the empty string; every other
/// token is left for the caller (row-field tokens are resolved earlier,
/// during row decoration).
///
/// # Examples
///
/// ```
/// use grappelli_core::SortDirection;
/// use grappelli_grid::paging::build_url;
///
/// let url = build_url(
/// 	"/albums?offset=[offset]&order=[order]&sort=[sort]",
/// 	Some(30),
/// 	Some("date"),
/// 	SortDirection::Descending,
/// );
/// assert_eq!(url, "/albums?offset=30&order=date&sort=desc");
/// ```
pub fn build_url(
	template: &str,
	offset: Option<u64>,
	order: Option<&str>,
	direction: SortDirection,
) -> String {
	substitute(template, |token| match token {
		"offset" => Some(offset.map(|offset| offset.to_string()).unwrap_or_default()),
		"order" => Some(order.unwrap_or("").to_string()),
		"sort" => Some(direction.as_str().to_string()),
		_ => None,
	})
}

/// Computes the paging state and page-link window.
///
/// `per_page` must be positive (the engine enforces this before calling)
/// and `offset` a multiple of it.
pub fn build(
	url_template: &str,
	offset: u64,
	order: Option<&str>,
	direction: SortDirection,
	num_results: u64,
	per_page: u64,
) -> Paging {
	let current_page = offset / per_page + 1;
	let page_count = num_results.div_ceil(per_page);

	let previous_url = (current_page > 1)
		.then(|| build_url(url_template, Some(offset - per_page), order, direction));
	let next_url = (current_page < page_count)
		.then(|| build_url(url_template, Some(offset + per_page), order, direction));

	let (first, last) = window(current_page, page_count);

	let mut pages = Vec::new();
	if first > 1 {
		pages.push(PageLink::ellipsis());
	}
	for number in first..=last {
		if number == current_page {
			pages.push(PageLink::current(number));
		} else {
			let url = build_url(url_template, Some((number - 1) * per_page), order, direction);
			pages.push(PageLink::page(number, url));
		}
	}
	if last < page_count {
		pages.push(PageLink::ellipsis());
	}

	Paging {
		num_results,
		per_page,
		current_page,
		page_count,
		previous_url,
		next_url,
		pages,
	}
}

/// The inclusive page range shown as numbers.
///
/// Seven or fewer pages show in full. Otherwise the window spans
/// `current ± 3` and is shifted, never shrunk, until it fits `1..=pages`,
/// so it always covers exactly seven pages.
fn window(current: u64, pages: u64) -> (u64, u64) {
	if pages <= WINDOW {
		return (1, pages);
	}

	let mut first = current as i64 - SPREAD as i64;
	let mut last = current as i64 + SPREAD as i64;
	while first < 1 {
		first += 1;
		last += 1;
	}
	while last > pages as i64 {
		first -= 1;
		last -= 1;
	}
	(first as u64, last as u64)
}
