//! Pizzaz widget gallery server.
//!
//! Serves one of two static catalogs: the hosted Pizzaz demo widgets or the Kendo UI component
//! widgets. Every widget doubles as a tool of the same name.

pub mod catalog;
pub mod input;
pub mod server;

pub use catalog::CatalogKind;
pub use server::PizzazServer;

/// Name reported in `initialize` and on `/health`.
pub const SERVER_NAME: &str = "pizzaz";
