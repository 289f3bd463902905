use crate::error::Result;
use crate::meta;
use rmcp::model::{
    CallToolResult, Content, JsonObject, Meta, Resource, ResourceContents, ResourceTemplate, Tool,
};
use serde_json::{Value, json};
use std::sync::Arc;

/// MIME type of widget markup.
pub const MIME_TYPE: &str = "text/html+skybridge";

/// A tool-backed widget: the tool a client calls and the markup it renders afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// Stable identifier; gallery-style catalogs also use it as the tool name.
    pub id: String,
    pub title: String,
    /// `ui://widget/<name>.html`
    pub template_uri: String,
    /// Status line shown while the tool runs.
    pub invoking: String,
    /// Status line shown once the tool returns.
    pub invoked: String,
    pub html: String,
    /// Text content of a successful tool result.
    pub response_text: String,
}

impl Widget {
    #[must_use]
    pub fn resource_description(&self) -> String {
        format!("{} widget markup", self.title)
    }

    /// The widget as an embedded MCP resource (`{ type: "resource", resource: {...} }`).
    #[must_use]
    pub fn embedded_resource(&self) -> Value {
        json!({
            "type": "resource",
            "resource": {
                "uri": self.template_uri,
                "mimeType": MIME_TYPE,
                "text": self.html,
                "title": self.title,
            }
        })
    }

    /// Tool descriptor for `tools/list`.
    #[must_use]
    pub fn tool(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Arc<JsonObject>,
    ) -> Tool {
        let mut tool = Tool::new(name.into(), description.into(), input_schema);
        tool.title = Some(self.title.clone());
        tool.annotations = Some(meta::widget_tool_annotations(&self.title));
        tool.meta = Some(Meta(meta::descriptor_meta(self)));
        tool
    }

    /// Resource descriptor for `resources/list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor does not decode into the MCP resource type.
    pub fn resource(&self) -> Result<Resource> {
        let value = json!({
            "uri": self.template_uri,
            "name": self.title,
            "title": self.title,
            "description": self.resource_description(),
            "mimeType": MIME_TYPE,
            "_meta": meta::descriptor_meta(self),
        });
        Ok(serde_json::from_value(value)?)
    }

    /// Resource template descriptor for `resources/templates/list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor does not decode into the MCP resource template type.
    pub fn resource_template(&self) -> Result<ResourceTemplate> {
        let value = json!({
            "uriTemplate": self.template_uri,
            "name": self.title,
            "title": self.title,
            "description": self.resource_description(),
            "mimeType": MIME_TYPE,
            "_meta": meta::descriptor_meta(self),
        });
        Ok(serde_json::from_value(value)?)
    }

    /// Markup returned by `resources/read`.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents do not decode into the MCP resource contents type.
    pub fn contents(&self) -> Result<ResourceContents> {
        let value = json!({
            "uri": self.template_uri,
            "mimeType": MIME_TYPE,
            "text": self.html,
            "_meta": meta::descriptor_meta(self),
        });
        Ok(serde_json::from_value(value)?)
    }

    /// Successful tool result that asks the client to render this widget.
    #[must_use]
    pub fn success(&self, text: impl Into<String>, structured: Option<Value>) -> CallToolResult {
        CallToolResult {
            content: vec![Content::text(text.into())],
            structured_content: structured,
            is_error: Some(false),
            meta: Some(Meta(meta::result_meta(self))),
        }
    }
}

/// Tool-level failure, surfaced to the caller as a result with `isError: true`.
#[must_use]
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Widget {
        Widget {
            id: "pizza-map".to_string(),
            title: "Show Pizza Map".to_string(),
            template_uri: "ui://widget/pizza-map.html".to_string(),
            invoking: "Hand-tossing a map".to_string(),
            invoked: "Served a fresh map".to_string(),
            html: "<div id=\"pizzaz-root\"></div>".to_string(),
            response_text: "Rendered a pizza map!".to_string(),
        }
    }

    fn schema() -> Arc<JsonObject> {
        let v = json!({ "type": "object", "properties": {}, "additionalProperties": false });
        Arc::new(v.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn tool_uses_widget_id_title_and_meta() {
        let w = widget();
        let tool = w.tool(&w.id, "Show Pizza Map", schema());
        assert_eq!(tool.name, "pizza-map");
        assert_eq!(tool.title.as_deref(), Some("Show Pizza Map"));
        assert_eq!(tool.description.as_deref(), Some("Show Pizza Map"));

        let v = serde_json::to_value(&tool).expect("tool serializes");
        assert_eq!(
            v["_meta"]["openai/outputTemplate"],
            json!("ui://widget/pizza-map.html")
        );
        assert_eq!(v["annotations"]["readOnlyHint"], json!(true));
        assert_eq!(v["inputSchema"]["additionalProperties"], json!(false));
    }

    #[test]
    fn resource_descriptors_carry_mime_type_and_description() {
        let w = widget();
        let resource = serde_json::to_value(w.resource().expect("resource")).expect("json");
        assert_eq!(resource["uri"], json!("ui://widget/pizza-map.html"));
        assert_eq!(resource["name"], json!("Show Pizza Map"));
        assert_eq!(resource["mimeType"], json!(MIME_TYPE));
        assert_eq!(
            resource["description"],
            json!("Show Pizza Map widget markup")
        );

        let template =
            serde_json::to_value(w.resource_template().expect("template")).expect("json");
        assert_eq!(template["uriTemplate"], json!("ui://widget/pizza-map.html"));
        assert_eq!(template["mimeType"], json!(MIME_TYPE));
    }

    #[test]
    fn contents_return_html_markup() {
        let contents = serde_json::to_value(widget().contents().expect("contents")).expect("json");
        assert_eq!(contents["uri"], json!("ui://widget/pizza-map.html"));
        assert_eq!(contents["mimeType"], json!(MIME_TYPE));
        assert_eq!(contents["text"], json!("<div id=\"pizzaz-root\"></div>"));
    }

    #[test]
    fn success_result_embeds_widget() {
        let w = widget();
        let result = w.success(&w.response_text, Some(json!({ "pizzaTopping": "basil" })));
        assert_eq!(result.is_error, Some(false));

        let v = serde_json::to_value(&result).expect("result serializes");
        assert_eq!(v["content"][0]["text"], json!("Rendered a pizza map!"));
        assert_eq!(v["structuredContent"]["pizzaTopping"], json!("basil"));
        assert_eq!(
            v["_meta"]["openai.com/widget"]["resource"]["uri"],
            json!("ui://widget/pizza-map.html")
        );
    }

    #[test]
    fn tool_error_sets_is_error() {
        let result = tool_error("Unknown tool: nope");
        assert_eq!(result.is_error, Some(true));
        let v = serde_json::to_value(&result).expect("result serializes");
        assert_eq!(v["content"][0]["text"], json!("Unknown tool: nope"));
    }
}
