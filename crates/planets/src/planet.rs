use serde::Serialize;
use std::fmt;

/// One of the eight canonical planets, in declared (orbital) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Alternate (mostly mythological) names, keyed by their normalized form.
pub const ALIASES: &[(&str, Planet)] = &[
    ("terra", Planet::Earth),
    ("gaia", Planet::Earth),
    ("soliii", Planet::Earth),
    ("tellus", Planet::Earth),
    ("ares", Planet::Mars),
    ("jove", Planet::Jupiter),
    ("zeus", Planet::Jupiter),
    ("cronus", Planet::Saturn),
    ("ouranos", Planet::Uranus),
    ("poseidon", Planet::Neptune),
];

impl Planet {
    /// All planets in declared order. Matching strategies iterate this order.
    pub const ALL: [Self; 8] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    /// Planet used when the caller supplies no name at all.
    pub const DEFAULT: Self = Self::Earth;

    /// Canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// Normalized matching key (lowercase, alphanumeric only).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Earth => "earth",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
        }
    }

    /// Short description shown alongside the focused planet.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Mercury => {
                "Mercury is the smallest planet in the Solar System and the closest to the Sun. It has a rocky, cratered surface and extreme temperature swings."
            }
            Self::Venus => {
                "Venus, similar in size to Earth, is cloaked in thick clouds of sulfuric acid with surface temperatures hot enough to melt lead."
            }
            Self::Earth => {
                "Earth is the only known planet to support life, with liquid water covering most of its surface and a protective atmosphere."
            }
            Self::Mars => {
                "Mars, the Red Planet, shows evidence of ancient rivers and volcanoes and is a prime target in the search for past life."
            }
            Self::Jupiter => {
                "Jupiter is the largest planet, a gas giant with a Great Red Spot\u{2014}an enormous storm raging for centuries."
            }
            Self::Saturn => {
                "Saturn is famous for its stunning ring system composed of billions of ice and rock particles orbiting the planet."
            }
            Self::Uranus => {
                "Uranus is an ice giant rotating on its side, giving rise to extreme seasonal variations during its long orbit."
            }
            Self::Neptune => {
                "Neptune, the farthest known giant, is a deep-blue world with supersonic winds and a faint ring system."
            }
        }
    }

    /// Comma-separated list of canonical names, e.g. for "provide one of" messages.
    #[must_use]
    pub fn canonical_names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{ALIASES, Planet};

    #[test]
    fn keys_are_lowercase_alphanumeric_names() {
        for planet in Planet::ALL {
            let expected: String = planet
                .name()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect();
            assert_eq!(planet.key(), expected);
        }
    }

    #[test]
    fn alias_keys_are_normalized_and_unique() {
        for (i, (alias, _)) in ALIASES.iter().enumerate() {
            assert!(
                alias
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
                "alias {alias:?} is not normalized"
            );
            assert!(
                ALIASES[i + 1..].iter().all(|(other, _)| other != alias),
                "alias {alias:?} is listed twice"
            );
            assert!(
                Planet::ALL.iter().all(|p| p.key() != *alias),
                "alias {alias:?} shadows a canonical planet"
            );
        }
    }

    #[test]
    fn every_planet_has_a_description() {
        for planet in Planet::ALL {
            assert!(planet.description().starts_with(planet.name()));
        }
    }

    #[test]
    fn canonical_names_follow_declared_order() {
        assert_eq!(
            Planet::canonical_names(),
            "Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune"
        );
    }

    #[test]
    fn serializes_as_canonical_name() {
        let v = serde_json::to_value(Planet::Neptune).expect("planet serializes");
        assert_eq!(v, serde_json::json!("Neptune"));
    }
}
