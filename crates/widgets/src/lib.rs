//! Widget model and MCP descriptors shared by the Skybridge demo servers.
//!
//! A widget is a static HTML shell that a client renders next to a tool result. Each widget is
//! advertised three ways: as a tool (`tools/list`), as a resource (`resources/list`) and as a
//! resource template (`resources/templates/list`). All three carry the same `openai/*` `_meta`
//! keys so the client can link a tool call to the markup it should render.

pub mod catalog;
pub mod error;
pub mod meta;
pub mod widget;

pub use catalog::{WidgetCatalog, internal_error};
pub use error::{Result, WidgetError};
pub use widget::{MIME_TYPE, Widget, tool_error};
