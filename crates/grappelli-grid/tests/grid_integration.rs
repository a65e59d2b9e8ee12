//! End-to-end tests for the grid engine
//!
//! These drive the full configure-then-render flow of an album listing
//! (derived columns, action columns, decoration, column functions, paging)
//! over an in-memory source.
//!
//! **Test Coverage:**
//! 1. Full render: paging, default descending sort, row order
//! 2. Row decoration: links, confirmations, images, composite columns
//! 3. Overwrite semantics (column-level and via column functions)
//! 4. Hidden columns and column sequencing
//! 5. Header sorting state and URLs
//! 6. Row attribute substitution and odd/even striping

use grappelli_core::{Column, RequestParams, Row, SortDirection};
use grappelli_grid::DataGrid;
use grappelli_source::MemorySource;

const URL: &str = "/albums?offset=[offset]&order=[order]&sort=[sort]";

/// Twenty-five albums, one per January day
fn large_catalogue() -> MemorySource {
	MemorySource::new(
		(1..=25)
			.map(|day| {
				Row::from_iter([
					("id".to_string(), day.to_string()),
					("title".to_string(), format!("Album {day}")),
					("date".to_string(), format!("2024-01-{day:02}")),
				])
			})
			.collect(),
	)
}

fn small_catalogue() -> MemorySource {
	MemorySource::new(vec![
		Row::from([
			("id", "1"),
			("title", "Djangology"),
			("date", "1949-03-01"),
			("cover", "djangology.jpg"),
		]),
		Row::from([
			("id", "2"),
			("title", "Minor Swing"),
			("date", "1937-11-25"),
			("cover", "minor-swing.jpg"),
		]),
		Row::from([
			("id", "3"),
			("title", "Nuages"),
			("date", "1940-12-13"),
			("cover", "nuages.jpg"),
		]),
	])
}

// ========================================
// Full render
// ========================================

#[tokio::test]
async fn first_page_of_a_sorted_catalogue() {
	let mut grid = DataGrid::new(large_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_url(URL);
	grid.set_paging_limit(10).unwrap();
	grid.set_sorting_columns(&["title", "date"], "date").unwrap();
	grid.set_sort_parameter(SortDirection::Descending);

	let rendered = grid.render().await.unwrap();

	assert_eq!(rendered.rows.len(), 10);
	assert_eq!(rendered.order.as_deref(), Some("date"));
	assert_eq!(rendered.sort, SortDirection::Descending);

	// ten most recent dates, newest first
	assert_eq!(rendered.rows[0].values["date"], "2024-01-25");
	assert_eq!(rendered.rows[9].values["date"], "2024-01-16");

	let paging = rendered.paging.unwrap();
	assert_eq!(paging.page_count, 3);
	assert_eq!(paging.current_page, 1);
	assert_eq!(paging.num_results, 25);
	assert_eq!(paging.previous_url, None);
	assert_eq!(
		paging.next_url.as_deref(),
		Some("/albums?offset=10&order=date&sort=desc")
	);
}

#[tokio::test]
async fn ambient_offset_selects_the_second_page() {
	let params = RequestParams::from_pairs([("offset", "10"), ("order", "date"), ("sort", "desc")]);
	let mut grid = DataGrid::new(large_catalogue(), params).await.unwrap();
	grid.set_url(URL);
	grid.set_paging_limit(10).unwrap();
	grid.set_sorting_columns(&["date"], "date").unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.offset, Some(10));
	assert_eq!(rendered.rows[0].values["date"], "2024-01-15");

	let paging = rendered.paging.unwrap();
	assert_eq!(paging.current_page, 2);
	assert_eq!(
		paging.previous_url.as_deref(),
		Some("/albums?offset=0&order=date&sort=desc")
	);
}

#[tokio::test]
async fn the_final_page_is_short() {
	let mut grid = DataGrid::new(large_catalogue(), RequestParams::new().with_offset(20))
		.await
		.unwrap();
	grid.set_paging_limit(10).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.rows.len(), 5);
	assert_eq!(rendered.paging.unwrap().current_page, 3);
}

#[tokio::test]
async fn paging_disabled_renders_everything() {
	let mut grid = DataGrid::new(large_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_paging(false);

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.rows.len(), 25);
	assert_eq!(rendered.paging, None);
	assert_eq!(rendered.offset, None);
}

// ========================================
// Decoration
// ========================================

#[tokio::test]
async fn link_decoration_substitutes_row_fields() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_column_url("title", "/albums/edit?id=[id]", Some("Edit [title]"))
		.unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(
		rendered.rows[0].values["title"],
		r#"<a href="/albums/edit?id=1" title="Edit Djangology">Djangology</a>"#
	);
}

#[tokio::test]
async fn confirmation_becomes_an_onclick_handler() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.add_column(
		Column::new("delete")
			.label("Delete")
			.value("Delete")
			.url("/albums/delete?id=[id]", None),
	)
	.unwrap();
	grid.set_column_confirm("delete", "Remove [title]?", None).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(
		rendered.rows[1].values["delete"],
		r#"<a href="/albums/delete?id=2" title="" onclick="return confirm('Remove Minor Swing?');">Delete</a>"#
	);
}

#[tokio::test]
async fn image_decoration_replaces_the_value() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_column_image("cover", "/covers/[cover]", Some("[title]")).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(
		rendered.rows[2].values["cover"],
		r#"<img src="/covers/nuages.jpg" alt="Nuages" title="Nuages" />"#
	);
}

#[tokio::test]
async fn composite_columns_resolve_from_earlier_fields() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.add_column(Column::new("summary").label("Summary").value("[title] ([date])"))
		.unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.rows[0].values["summary"], "Djangology (1949-03-01)");
}

// ========================================
// Overwrite semantics
// ========================================

#[tokio::test]
async fn an_overwriting_column_skips_decoration() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.add_column(Column::new("status").value("[title]").overwrite(true))
		.unwrap();
	// both of these would normally wrap the value
	grid.set_column_url("status", "/edit?id=[id]", None).unwrap();
	grid.set_column_image("status", "/icons/[id].png", None).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.rows[0].values["status"], "Djangology");
}

#[tokio::test]
async fn a_column_function_backfills_and_overwrites_two_columns() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.add_column(Column::new("badge").label("Badge")).unwrap();
	// links that the overwrite must suppress
	grid.set_column_url("title", "/edit?id=[id]", None).unwrap();
	grid.set_column_url("badge", "/edit?id=[id]", None).unwrap();
	grid.set_column_function(
		|arguments: &[String]| format!("<em>{}</em>", arguments[0]),
		&["[title]"],
		&["title", "badge"],
		true,
	);

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.rows[0].values["title"], "<em>Djangology</em>");
	assert_eq!(rendered.rows[0].values["badge"], "<em>Djangology</em>");
}

#[tokio::test]
async fn a_non_overwriting_function_result_still_gets_wrapped() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_column_url("title", "/edit?id=[id]", None).unwrap();
	grid.set_column_function(
		|arguments: &[String]| arguments[0].to_uppercase(),
		&["[title]"],
		&["title"],
		false,
	);

	let rendered = grid.render().await.unwrap();
	assert_eq!(
		rendered.rows[0].values["title"],
		r#"<a href="/edit?id=1" title="">DJANGOLOGY</a>"#
	);
}

// ========================================
// Visibility and sequencing
// ========================================

#[tokio::test]
async fn hidden_columns_leave_header_and_body() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_columns_hidden(&["id", "cover"]).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.num_columns, 2);
	let labels: Vec<&str> = rendered.headers.iter().map(|header| header.label.as_str()).collect();
	assert_eq!(labels, vec!["title", "date"]);
	assert_eq!(rendered.rows[0].cells.len(), 2);
	assert!(!rendered.rows[0].values.contains_key("id"));
}

#[tokio::test]
async fn sequence_reorders_and_the_rest_follow() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_columns_sequence(&["cover", "date"]).unwrap();

	let rendered = grid.render().await.unwrap();
	let labels: Vec<&str> = rendered.headers.iter().map(|header| header.label.as_str()).collect();
	assert_eq!(labels, vec!["cover", "date", "id", "title"]);
}

#[tokio::test]
async fn header_labels_replace_the_derived_names() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_header_labels(&[("date", "Release date")]).unwrap();

	let rendered = grid.render().await.unwrap();
	assert!(rendered.headers.iter().any(|header| header.label == "Release date"));
}

// ========================================
// Header sorting state
// ========================================

#[tokio::test]
async fn headers_carry_sorting_state_and_urls() {
	let params = RequestParams::from_pairs([("order", "date"), ("sort", "asc")]);
	let mut grid = DataGrid::new(small_catalogue(), params).await.unwrap();
	grid.set_url(URL);
	grid.set_sorting_columns(&["title", "date"], "date").unwrap();

	let rendered = grid.render().await.unwrap();

	let date = rendered
		.headers
		.iter()
		.find(|header| header.label == "date")
		.unwrap();
	assert!(date.sorting && date.sorted && date.sorted_ascending);
	// a click on the current sort column flips the direction
	assert_eq!(
		date.sorting_url.as_deref(),
		Some("/albums?offset=0&order=date&sort=desc")
	);
	assert_eq!(date.sorting_label.as_deref(), Some("Sorted ascending"));

	let title = rendered
		.headers
		.iter()
		.find(|header| header.label == "title")
		.unwrap();
	assert!(title.sorting && !title.sorted);
	// a first click sorts by the column's default direction
	assert_eq!(
		title.sorting_url.as_deref(),
		Some("/albums?offset=0&order=title&sort=asc")
	);
	assert_eq!(title.sorting_label.as_deref(), Some("Sort ascending"));

	let id = rendered
		.headers
		.iter()
		.find(|header| header.label == "id")
		.unwrap();
	assert!(!id.sorting);
	assert_eq!(id.sorting_url, None);
}

#[tokio::test]
async fn a_descending_default_column_advertises_a_descending_first_click() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new()).await.unwrap();
	grid.set_url(URL);
	grid.set_sorting_columns(&["title", "date"], "title").unwrap();
	grid.set_column_sorting_method("date", SortDirection::Descending).unwrap();

	let rendered = grid.render().await.unwrap();
	let date = rendered
		.headers
		.iter()
		.find(|header| header.label == "date")
		.unwrap();
	assert_eq!(
		date.sorting_url.as_deref(),
		Some("/albums?offset=0&order=date&sort=desc")
	);
	assert_eq!(date.sorting_label.as_deref(), Some("Sort descending"));
}

// ========================================
// Row attributes
// ========================================

#[tokio::test]
async fn row_attributes_substitute_fields_and_alternate() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_row_attributes(&[("data-id", "[id]")]);
	grid.set_odd_row_attributes(&[("class", "odd")]);
	grid.set_even_row_attributes(&[("class", "even")]);

	let rendered = grid.render().await.unwrap();

	assert_eq!(rendered.rows[0].attributes, r#" data-id="1""#);
	// the first row counts as odd
	assert_eq!(rendered.rows[0].odd_attributes, r#" class="odd""#);
	assert_eq!(rendered.rows[0].even_attributes, "");
	assert_eq!(rendered.rows[1].odd_attributes, "");
	assert_eq!(rendered.rows[1].even_attributes, r#" class="even""#);
}

#[tokio::test]
async fn caption_summary_and_attributes_pass_through() {
	let mut grid = DataGrid::new(small_catalogue(), RequestParams::new())
		.await
		.unwrap();
	grid.set_caption("Albums");
	grid.set_summary("All albums with their release dates");
	grid.set_attributes(&[("class", "datagrid")]);
	grid.set_column_attributes("date", &[("class", "date-cell")]).unwrap();

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.caption.as_deref(), Some("Albums"));
	assert_eq!(rendered.summary.as_deref(), Some("All albums with their release dates"));
	assert_eq!(rendered.attributes, r#" class="datagrid""#);
	let date_cell = &rendered.rows[0].cells[2];
	assert_eq!(date_cell.attributes, r#" class="date-cell""#);
}
