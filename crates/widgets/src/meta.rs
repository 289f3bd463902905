//! `_meta` keys understood by widget-capable MCP clients.

use crate::widget::Widget;
use rmcp::model::{JsonObject, ToolAnnotations};
use serde_json::{Value, json};

pub const OUTPUT_TEMPLATE: &str = "openai/outputTemplate";
pub const INVOKING: &str = "openai/toolInvocation/invoking";
pub const INVOKED: &str = "openai/toolInvocation/invoked";
pub const WIDGET_ACCESSIBLE: &str = "openai/widgetAccessible";
pub const RESULT_CAN_PRODUCE_WIDGET: &str = "openai/resultCanProduceWidget";
pub const EMBEDDED_WIDGET: &str = "openai.com/widget";
pub const ANNOTATIONS: &str = "annotations";

/// Keys shared by tool, resource and result `_meta`.
fn invocation_meta(widget: &Widget) -> JsonObject {
    let mut meta = JsonObject::new();
    meta.insert(
        OUTPUT_TEMPLATE.to_string(),
        Value::String(widget.template_uri.clone()),
    );
    meta.insert(INVOKING.to_string(), Value::String(widget.invoking.clone()));
    meta.insert(INVOKED.to_string(), Value::String(widget.invoked.clone()));
    meta.insert(WIDGET_ACCESSIBLE.to_string(), Value::Bool(true));
    meta.insert(RESULT_CAN_PRODUCE_WIDGET.to_string(), Value::Bool(true));
    meta
}

/// `_meta` attached to tools, resources and resource templates.
#[must_use]
pub fn descriptor_meta(widget: &Widget) -> JsonObject {
    let mut meta = invocation_meta(widget);
    meta.insert(
        ANNOTATIONS.to_string(),
        json!({
            "destructiveHint": false,
            "openWorldHint": false,
            "readOnlyHint": true,
        }),
    );
    meta
}

/// `_meta` attached to successful tool results: the embedded widget plus invocation keys.
#[must_use]
pub fn result_meta(widget: &Widget) -> JsonObject {
    let mut meta = invocation_meta(widget);
    meta.insert(EMBEDDED_WIDGET.to_string(), widget.embedded_resource());
    meta
}

/// MCP tool annotations for widget tools.
///
/// Widget tools only render static markup: they never mutate anything and never reach outside
/// the server.
#[must_use]
pub fn widget_tool_annotations(title: &str) -> ToolAnnotations {
    ToolAnnotations {
        title: Some(title.to_string()),
        read_only_hint: Some(true),
        destructive_hint: Some(false),
        idempotent_hint: Some(true),
        open_world_hint: Some(false),
    }
}
