//! Runtime shared by the Skybridge demo servers: CLI arguments, logging setup and the HTTP
//! surface (`/mcp` streamable HTTP endpoint, `/health`, CORS).

pub mod cli;
pub mod http;
pub mod logging;

pub use cli::{LogFormat, ServeArgs};
pub use http::{router, serve};
pub use logging::init_tracing;
