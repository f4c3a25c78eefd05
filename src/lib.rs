//! Sandalwood Bot: landing page and chat client for the sandalwood
//! cultivation assistant.

pub mod ai;
pub mod config;
pub mod controller;
pub mod format;
pub mod session;
pub mod speech;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;

pub use controller::ChatController;
pub use format::format_response;
pub use session::ChatSession;
