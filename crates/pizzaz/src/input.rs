//! Tool inputs for both galleries and the structured content each tool returns.

use rmcp::model::JsonObject;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PizzaInput {
    #[serde(rename = "pizzaTopping", alias = "pizza_topping")]
    pub pizza_topping: String,
}

impl PizzaInput {
    #[must_use]
    pub fn structured_content(&self) -> Value {
        json!({ "pizzaTopping": self.pizza_topping })
    }
}

#[must_use]
pub fn pizza_schema() -> JsonObject {
    object(json!({
        "type": "object",
        "properties": {
            "pizzaTopping": {
                "type": "string",
                "description": "Topping to mention when rendering the widget.",
            },
        },
        "required": ["pizzaTopping"],
        "additionalProperties": false,
    }))
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct KendoInput {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub cards: Vec<Value>,
    #[serde(default, alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub purpose: Vec<String>,
}

impl KendoInput {
    /// Structured content for `tool`; only data-driven components get any.
    #[must_use]
    pub fn structured_content(&self, tool: &str) -> Option<Value> {
        match tool {
            "kendo-grid" => Some(json!({ "title": self.title, "items": self.items })),
            "kendo-cards" => Some(json!({ "title": self.title, "cards": self.cards })),
            "kendo-rating" => Some(json!({ "title": self.title })),
            "kendo-result" => {
                let mut content = JsonObject::new();
                content.insert("title".to_string(), json!(self.title));
                let optional = [
                    ("firstName", &self.first_name),
                    ("lastName", &self.last_name),
                    ("email", &self.email),
                    ("phone", &self.phone),
                ];
                for (key, value) in optional {
                    if let Some(value) = value {
                        content.insert(key.to_string(), json!(value));
                    }
                }
                content.insert("purpose".to_string(), json!(self.purpose));
                Some(Value::Object(content))
            }
            _ => None,
        }
    }
}

#[must_use]
pub fn kendo_schema() -> JsonObject {
    object(json!({
        "type": "object",
        "properties": {
            "title": {
                "type": "string",
                "description": "Heading shown by the widget.",
            },
            "items": {
                "type": "array",
                "items": { "type": "object" },
                "description": "List of items to show in the Kendo Grid.",
                "default": [],
            },
            "cards": {
                "type": "array",
                "items": { "type": "object" },
                "description": "List of cards to show with Kendo Cards. Each item should have a title, image (URL), description, and button text.",
                "default": [],
            },
            "firstName": { "type": "string", "description": "First name of the user." },
            "lastName": { "type": "string", "description": "Last name of the user." },
            "email": { "type": "string", "description": "Email address of the user." },
            "phone": { "type": "string", "description": "Phone number of the user." },
            "purpose": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of purposes for contacting the user.",
                "default": [],
            },
        },
        "required": ["title"],
        "additionalProperties": false,
    }))
}

fn object(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{KendoInput, PizzaInput, kendo_schema, pizza_schema};
    use serde_json::json;

    #[test]
    fn pizza_topping_is_required() {
        assert!(serde_json::from_value::<PizzaInput>(json!({})).is_err());
        let input: PizzaInput =
            serde_json::from_value(json!({ "pizzaTopping": "basil" })).expect("decode");
        assert_eq!(input.structured_content(), json!({ "pizzaTopping": "basil" }));
    }

    #[test]
    fn pizza_accepts_snake_case_and_rejects_extras() {
        let input: PizzaInput =
            serde_json::from_value(json!({ "pizza_topping": "olives" })).expect("decode");
        assert_eq!(input.pizza_topping, "olives");
        assert!(
            serde_json::from_value::<PizzaInput>(json!({ "pizzaTopping": "x", "size": "L" }))
                .is_err()
        );
    }

    #[test]
    fn kendo_defaults_fill_arrays() {
        let input: KendoInput = serde_json::from_value(json!({ "title": "Orders" })).expect("decode");
        assert!(input.items.is_empty());
        assert!(input.cards.is_empty());
        assert!(input.purpose.is_empty());
        assert_eq!(input.first_name, None);
    }

    #[test]
    fn kendo_rejects_missing_title_and_extras() {
        assert!(serde_json::from_value::<KendoInput>(json!({ "items": [] })).is_err());
        assert!(
            serde_json::from_value::<KendoInput>(json!({ "title": "t", "rows": [] })).is_err()
        );
        assert!(
            serde_json::from_value::<KendoInput>(json!({ "title": "t", "purpose": [1] })).is_err()
        );
    }

    #[test]
    fn structured_content_depends_on_tool() {
        let input: KendoInput = serde_json::from_value(json!({
            "title": "Contact",
            "items": [{ "id": 1 }],
            "cards": [{ "title": "c" }],
            "firstName": "Ada",
            "email": "ada@example.com",
            "purpose": ["billing"],
        }))
        .expect("decode");

        assert_eq!(
            input.structured_content("kendo-grid"),
            Some(json!({ "title": "Contact", "items": [{ "id": 1 }] }))
        );
        assert_eq!(
            input.structured_content("kendo-cards"),
            Some(json!({ "title": "Contact", "cards": [{ "title": "c" }] }))
        );
        assert_eq!(
            input.structured_content("kendo-rating"),
            Some(json!({ "title": "Contact" }))
        );
        assert_eq!(
            input.structured_content("kendo-result"),
            Some(json!({
                "title": "Contact",
                "firstName": "Ada",
                "email": "ada@example.com",
                "purpose": ["billing"],
            }))
        );
        assert_eq!(input.structured_content("kendo-form"), None);
        assert_eq!(input.structured_content("action-button"), None);
    }

    #[test]
    fn schemas_require_their_key_field() {
        assert_eq!(pizza_schema()["required"], json!(["pizzaTopping"]));
        assert_eq!(kendo_schema()["required"], json!(["title"]));
        assert_eq!(kendo_schema()["additionalProperties"], json!(false));
    }
}
