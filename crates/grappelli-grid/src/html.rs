//! Default HTML rendering
//!
//! A thin Tera layer over the render-ready grid. The bundled template
//! produces a plain `<table>` with sortable headers and a paging footer;
//! hosts with their own markup pass a custom template to
//! [`render_with`]. The context is the serialized [`RenderedGrid`], so
//! every field of the output model is addressable by name.
//!
//! Cell values and attribute strings arrive pre-rendered and are inserted
//! unescaped; plain text (labels, caption, summary) is escaped by the
//! template engine.

use crate::error::GridError;
use crate::render::RenderedGrid;
use tera::{Context, Tera};

/// The bundled table template
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/datagrid.html.tera");

/// Renders a grid through the bundled template
pub fn render(grid: &RenderedGrid) -> Result<String, GridError> {
	render_with(grid, DEFAULT_TEMPLATE)
}

/// Renders a grid through a caller-supplied Tera template
pub fn render_with(grid: &RenderedGrid, template: &str) -> Result<String, GridError> {
	let mut tera = Tera::default();
	tera.add_raw_template("datagrid.html", template)?;
	let context = Context::from_serialize(grid)?;
	Ok(tera.render("datagrid.html", &context)?)
}
