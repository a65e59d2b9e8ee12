//! The Grappelli data grid engine.
//!
//! Given a data source and a set of column definitions, [`DataGrid`]
//! resolves the effective paging and sorting state (explicit overrides
//! beat ambient request values beat defaults), fetches one page of rows,
//! decorates every cell (links, images, confirmations, column functions),
//! and emits a render-ready [`RenderedGrid`], plus, behind the `html`
//! feature, a default Tera rendering of it.

pub mod error;
pub mod grid;
pub mod paging;
pub mod render;

#[cfg(feature = "html")]
pub mod html;

pub use error::{ConfigError, GridError};
pub use grid::{DataGrid, SortingLabels};
pub use render::{HeaderCell, PageLink, Paging, RenderedCell, RenderedGrid, RenderedRow};
