//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-play ticking,
//!   pane focus, setup dialog
//! - **[`panes`]** — render functions for each visible pane (towers, move
//!   list, procedure listing, call stack, status bar, setup dialog)
//! - **[`theme`]** — light and dark color palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Session`] and call [`App::run`] to start the event loop. The UI only
//! observes and drives the session; all puzzle state lives in the core.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
