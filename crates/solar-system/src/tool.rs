//! `focus-solar-planet`: input model, schema and the call itself.

use rmcp::model::{CallToolResult, JsonObject};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use skybridge_planets::{Planet, resolve_match};
use skybridge_widgets::{Widget, tool_error};

pub const TOOL_NAME: &str = "focus-solar-planet";
pub const TOOL_DESCRIPTION: &str =
    "Render the solar system widget centered on the requested planet.";

/// Asset file stem of the widget build (`solar-system.html` / `solar-system-<hash>.html`).
pub const WIDGET_COMPONENT: &str = "solar-system";

/// The solar system widget wrapping already-loaded `html`.
#[must_use]
pub fn widget(html: String) -> Widget {
    Widget {
        id: "solar-system".to_string(),
        title: "Explore the Solar System".to_string(),
        template_uri: "ui://widget/solar-system.html".to_string(),
        invoking: "Charting the solar system".to_string(),
        invoked: "Solar system ready".to_string(),
        html,
        response_text: "Solar system ready".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolarInput {
    #[serde(rename = "planetName", alias = "planet_name", default = "default_planet_name")]
    pub planet_name: String,
    #[serde(
        rename = "autoOrbit",
        alias = "auto_orbit",
        default = "default_auto_orbit",
        deserialize_with = "lenient_bool"
    )]
    pub auto_orbit: bool,
}

fn default_planet_name() -> String {
    Planet::DEFAULT.name().to_string()
}

const fn default_auto_orbit() -> bool {
    true
}

/// Accepts JSON booleans plus the usual spellings clients send for them:
/// `0`/`1` and `true`/`false`, `yes`/`no`, `on`/`off`, `t`/`f`, `y`/`n` in any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(b) => Ok(b),
        Raw::Int(0) => Ok(false),
        Raw::Int(1) => Ok(true),
        Raw::Int(n) => Err(D::Error::custom(format!("invalid boolean {n}"))),
        Raw::Text(text) => match text.to_ascii_lowercase().as_str() {
            "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
            "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
            _ => Err(D::Error::custom(format!("invalid boolean {text:?}"))),
        },
    }
}

impl Default for SolarInput {
    fn default() -> Self {
        Self {
            planet_name: default_planet_name(),
            auto_orbit: default_auto_orbit(),
        }
    }
}

/// JSON Schema advertised for the tool input.
#[must_use]
pub fn input_schema() -> JsonObject {
    let schema = json!({
        "type": "object",
        "title": "SolarInput",
        "properties": {
            "planetName": {
                "type": "string",
                "title": "Planet name",
                "default": Planet::DEFAULT.name(),
                "description": "Planet to focus in the widget (case insensitive).",
            },
            "autoOrbit": {
                "type": "boolean",
                "title": "Auto orbit",
                "default": true,
                "description": "Whether to keep the camera orbiting if the target planet is missing.",
            },
        },
        "additionalProperties": false,
    });
    match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Validate `arguments`, resolve the planet and build the widget result.
///
/// Validation and lookup failures come back as error results, never as protocol errors.
#[must_use]
pub fn focus_planet(widget: &Widget, arguments: Option<JsonObject>) -> CallToolResult {
    let arguments = Value::Object(arguments.unwrap_or_default());
    let input: SolarInput = match serde_json::from_value(arguments) {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(error = %e, tool = TOOL_NAME, "rejected tool input");
            return tool_error(format!("Input validation error: {e}"));
        }
    };

    let planet = match resolve_match(&input.planet_name) {
        Ok(found) => {
            tracing::debug!(
                input = %input.planet_name,
                planet = %found.planet,
                strategy = ?found.strategy,
                "resolved planet"
            );
            found.planet
        }
        Err(e) => {
            tracing::info!(input = e.input(), "unknown planet");
            return tool_error(format!(
                "Unknown planet. Provide one of: {}",
                Planet::canonical_names()
            ));
        }
    };

    widget.success(
        format!("Centered the solar system view on {planet}."),
        Some(json!({
            "planet_name": planet,
            "planet_description": planet.description(),
            "autoOrbit": input.auto_orbit,
        })),
    )
}
