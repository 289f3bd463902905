//! Solar system widget server: one tool (`focus-solar-planet`) and the widget markup it renders.

pub mod assets;
pub mod server;
pub mod tool;

pub use server::SolarSystemServer;

/// Name reported in `initialize` and on `/health`.
pub const SERVER_NAME: &str = "solar-system";
