//! Canonical planet table and free-text planet name resolution.
//!
//! The resolver maps user-supplied text ("mars", " Jupiter ", "zeus", "nep") onto one of the
//! eight canonical planets. It is a pure function over static tables: callers decide how to
//! surface a [`NoMatch`] and where to attach [`Planet::description`].

mod planet;
mod resolver;

pub use planet::{ALIASES, Planet};
pub use resolver::{NoMatch, PlanetMatch, Strategy, resolve, resolve_match, resolve_optional};
