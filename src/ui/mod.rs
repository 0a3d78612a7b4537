//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, input
//!   and filter editing modes
//! - **[`panes`]**: stateless render functions for each visible pane (catalog,
//!   statistics, source, structures, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the catalog, a
//! [`SessionStore`] and a [`ProgressTracker`], then call [`App::run`] to start
//! the event loop.
//!
//! [`SessionStore`]: crate::session::SessionStore
//! [`ProgressTracker`]: crate::progress::ProgressTracker
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
