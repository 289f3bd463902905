//! Free-text planet name resolution.
//!
//! Matching runs as an ordered cascade, first hit wins:
//! 1. empty input (after trimming) -> [`Planet::DEFAULT`]
//! 2. exact match against a canonical name
//! 3. alias table lookup
//! 4. prefix match: the canonical key starts with the input
//!
//! The prefix step only checks that direction. "sat" finds Saturn, "saturnian" finds nothing.

use crate::planet::{ALIASES, Planet};
use thiserror::Error;

/// Which step of the cascade produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Default,
    Exact,
    Alias,
    Prefix,
}

/// A successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetMatch {
    pub planet: Planet,
    pub strategy: Strategy,
}

/// The input could not be resolved to any canonical planet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no planet matches {input:?}")]
pub struct NoMatch {
    input: String,
}

impl NoMatch {
    /// The raw input that failed to resolve.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Normalized forms of the caller's input.
struct Query {
    /// Trimmed and lowercased, punctuation and inner spaces retained.
    key: String,
    /// `key` reduced to alphanumeric characters.
    clean: String,
}

impl Query {
    fn new(key: String) -> Self {
        let clean = key.chars().filter(|c| c.is_alphanumeric()).collect();
        Self { key, clean }
    }
}

type Matcher = fn(&Query) -> Option<Planet>;

const CASCADE: [(Strategy, Matcher); 3] = [
    (Strategy::Exact, exact_match),
    (Strategy::Alias, alias_match),
    (Strategy::Prefix, prefix_match),
];

fn exact_match(query: &Query) -> Option<Planet> {
    Planet::ALL
        .into_iter()
        .find(|p| query.clean == p.key() || query.key == p.name().to_lowercase())
}

fn alias_match(query: &Query) -> Option<Planet> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == query.clean)
        .map(|(_, planet)| *planet)
}

fn prefix_match(query: &Query) -> Option<Planet> {
    if query.clean.is_empty() {
        return None;
    }
    Planet::ALL
        .into_iter()
        .find(|p| p.key().starts_with(query.clean.as_str()))
}

/// Resolve free text to a planet, reporting which strategy matched.
///
/// # Errors
///
/// Returns [`NoMatch`] when no canonical name, alias or prefix matches.
pub fn resolve_match(input: &str) -> Result<PlanetMatch, NoMatch> {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        return Ok(PlanetMatch {
            planet: Planet::DEFAULT,
            strategy: Strategy::Default,
        });
    }

    let query = Query::new(key);
    CASCADE
        .iter()
        .find_map(|(strategy, matcher)| {
            matcher(&query).map(|planet| PlanetMatch {
                planet,
                strategy: *strategy,
            })
        })
        .ok_or_else(|| NoMatch {
            input: input.to_string(),
        })
}

/// Resolve free text to a planet.
///
/// # Errors
///
/// Returns [`NoMatch`] when no canonical name, alias or prefix matches.
pub fn resolve(input: &str) -> Result<Planet, NoMatch> {
    resolve_match(input).map(|m| m.planet)
}

/// Like [`resolve`], treating an absent value as empty input.
///
/// # Errors
///
/// Returns [`NoMatch`] when no canonical name, alias or prefix matches.
pub fn resolve_optional(input: Option<&str>) -> Result<Planet, NoMatch> {
    resolve(input.unwrap_or_default())
}
