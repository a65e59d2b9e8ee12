//! Full-stack listing scenario through the facade
//!
//! Builds the canonical admin listing: albums joined to their categories,
//! cover thumbnails produced by a column function, edit links, restricted
//! sorting with a descending date default, all over a SQLite-backed
//! source, and renders it both as a structure and as HTML.

use grappelli::{Column, DataGrid, DatabaseSource, RequestParams, SortDirection};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

async fn seeded_pool() -> AnyPool {
	sqlx::any::install_default_drivers();
	let pool = AnyPoolOptions::new()
		.min_connections(1)
		.max_connections(1)
		.connect("sqlite::memory:")
		.await
		.expect("Failed to open in-memory database");

	sqlx::query(
		r#"
		CREATE TABLE categories (
			id INTEGER PRIMARY KEY,
			title TEXT NOT NULL
		)
		"#,
	)
	.execute(&pool)
	.await
	.expect("Failed to create categories table");

	sqlx::query(
		r#"
		CREATE TABLE albums (
			id INTEGER PRIMARY KEY,
			title TEXT NOT NULL,
			date TEXT NOT NULL,
			category_id INTEGER NOT NULL
		)
		"#,
	)
	.execute(&pool)
	.await
	.expect("Failed to create albums table");

	sqlx::query(
		r#"
		INSERT INTO categories (id, title) VALUES (1, 'Studio'), (2, 'Live')
		"#,
	)
	.execute(&pool)
	.await
	.expect("Failed to insert categories");

	sqlx::query(
		r#"
		INSERT INTO albums (id, title, date, category_id) VALUES
		(1, 'Djangology', '1949-03-01', 1),
		(2, 'Minor Swing', '1937-11-25', 1),
		(3, 'Nuages', '1940-12-13', 2),
		(4, 'Belleville', '1942-07-01', 1)
		"#,
	)
	.execute(&pool)
	.await
	.expect("Failed to insert albums");

	pool
}

fn listing_source(pool: AnyPool) -> DatabaseSource {
	DatabaseSource::new(
		pool,
		"SELECT i.id, i.title, i.date, c.title AS category
		 FROM albums AS i
		 INNER JOIN categories AS c ON c.id = i.category_id",
	)
}

async fn configured_listing(pool: AnyPool, params: RequestParams) -> DataGrid<DatabaseSource> {
	let mut grid = DataGrid::new(listing_source(pool), params).await.unwrap();
	grid.set_url("/albums?offset=[offset]&order=[order]&sort=[sort]");
	grid.set_header_labels(&[("date", "Release date"), ("category", "Category")])
		.unwrap();

	// cover thumbnails come from a column function, pre-rendered
	grid.add_column(Column::new("cover").label("Cover")).unwrap();
	grid.set_column_function(
		|arguments: &[String]| format!(r#"<img src="/covers/{}.jpg" width="50" />"#, arguments[0]),
		&["[id]"],
		&["cover"],
		true,
	);

	// title links through to the edit action
	grid.set_column_url("title", "/albums/edit?id=[id]", None).unwrap();
	grid.add_column(
		Column::new("edit")
			.label("")
			.value("Edit")
			.url("/albums/edit?id=[id]", Some("Edit")),
	)
	.unwrap();

	grid.set_sorting_columns(&["title", "date", "category"], "date").unwrap();
	grid.set_sort_parameter(SortDirection::Descending);
	grid.set_columns_sequence(&["cover", "date", "title", "category", "edit"])
		.unwrap();
	grid.set_column_hidden("id", true).unwrap();
	grid
}

#[tokio::test]
async fn the_listing_renders_newest_first_with_decorated_cells() {
	let pool = seeded_pool().await;
	let mut grid = configured_listing(pool, RequestParams::new()).await;

	assert_eq!(grid.num_results(), 4);

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.order.as_deref(), Some("date"));
	assert_eq!(rendered.sort, SortDirection::Descending);

	// hidden id column leaves five visible columns in the set sequence
	let labels: Vec<&str> = rendered.headers.iter().map(|header| header.label.as_str()).collect();
	assert_eq!(labels, vec!["Cover", "Release date", "title", "Category", ""]);

	// newest first
	let first = &rendered.rows[0];
	assert_eq!(
		first.values["title"],
		r#"<a href="/albums/edit?id=1" title="">Djangology</a>"#
	);
	assert_eq!(first.values["cover"], r#"<img src="/covers/1.jpg" width="50" />"#);
	assert_eq!(first.values["category"], "Studio");
	assert_eq!(
		rendered.rows[3].values["title"],
		r#"<a href="/albums/edit?id=2" title="">Minor Swing</a>"#
	);
}

#[tokio::test]
async fn ambient_parameters_re_sort_the_listing() {
	let pool = seeded_pool().await;
	let params = RequestParams::from_pairs([("order", "category"), ("sort", "asc")]);
	let mut grid = configured_listing(pool, params).await;

	let rendered = grid.render().await.unwrap();
	assert_eq!(rendered.order.as_deref(), Some("category"));
	// explicit sort override set by the action still wins over the ambient value
	assert_eq!(rendered.sort, SortDirection::Descending);
	assert_eq!(rendered.rows[0].values["category"], "Studio");
}

#[tokio::test]
async fn the_listing_renders_to_html() {
	let pool = seeded_pool().await;
	let mut grid = configured_listing(pool, RequestParams::new()).await;
	grid.set_caption("Discography");

	let html = grid.render_html().await.unwrap();
	assert!(html.contains("<caption>Discography</caption>"));
	assert!(html.contains(r#"<img src="/covers/1.jpg" width="50" />"#));
	assert!(html.contains(r#"<span class="current">1</span>"#));
}

#[tokio::test]
async fn an_empty_listing_renders_to_nothing() {
	let pool = seeded_pool().await;
	sqlx::query("DELETE FROM albums")
		.execute(&pool)
		.await
		.expect("Failed to clear albums");

	let mut grid = configured_listing(pool, RequestParams::new()).await;
	assert_eq!(grid.num_results(), 0);
	assert_eq!(grid.render_html().await.unwrap(), "");
}
