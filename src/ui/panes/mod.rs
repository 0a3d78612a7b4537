//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`catalog`]: Filterable algorithm list with solved marks and difficulty badges
//! - [`source`]: Reference source with syntax highlighting and current line indicator
//! - [`structures`]: Data-structure snapshot of the current step
//! - [`stats`]: Solved counts per pattern and difficulty
//! - [`status`]: Status bar with keybindings and playback state
//! - `utils`: Shared styling and scrolling helpers
//!
//! Each pane module exports a primary `render_*` function and the
//! `*RenderData` struct it borrows its inputs from.

mod utils;

pub mod catalog;
pub mod source;
pub mod stats;
pub mod status;
pub mod structures;

pub use catalog::{render_catalog_pane, CatalogRenderData};
pub use source::{render_source_pane, SourceRenderData, SourceScrollState};
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_status_bar, StatusRenderData};
pub use structures::{render_structures_pane, StructuresRenderData};
