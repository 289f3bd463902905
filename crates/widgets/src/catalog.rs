//! Widget registry with lookup by tool id and by template URI.

use crate::error::{Result, WidgetError};
use crate::widget::Widget;
use rmcp::model::{ErrorData, JsonObject, ReadResourceResult, Resource, ResourceTemplate, Tool};
use std::collections::HashMap;
use std::sync::Arc;

/// Immutable, ordered set of widgets.
///
/// Listing order follows construction order; ids and template URIs are unique.
#[derive(Debug, Clone)]
pub struct WidgetCatalog {
    widgets: Vec<Widget>,
    by_id: HashMap<String, usize>,
    by_uri: HashMap<String, usize>,
}

impl WidgetCatalog {
    /// Build a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if two widgets share an id or a template URI.
    pub fn new(widgets: Vec<Widget>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(widgets.len());
        let mut by_uri = HashMap::with_capacity(widgets.len());

        for (idx, widget) in widgets.iter().enumerate() {
            if by_id.insert(widget.id.clone(), idx).is_some() {
                return Err(WidgetError::DuplicateId(widget.id.clone()));
            }
            if by_uri.insert(widget.template_uri.clone(), idx).is_some() {
                return Err(WidgetError::DuplicateUri(widget.template_uri.clone()));
            }
        }

        Ok(Self {
            widgets,
            by_id,
            by_uri,
        })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.by_id.get(id).map(|&idx| &self.widgets[idx])
    }

    #[must_use]
    pub fn by_uri(&self, uri: &str) -> Option<&Widget> {
        self.by_uri.get(uri).map(|&idx| &self.widgets[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// One tool per widget, named after the widget id, all sharing `input_schema`.
    pub fn tools(
        &self,
        description: impl Fn(&Widget) -> String,
        input_schema: &Arc<JsonObject>,
    ) -> Vec<Tool> {
        self.widgets
            .iter()
            .map(|w| w.tool(&w.id, description(w), Arc::clone(input_schema)))
            .collect()
    }

    /// # Errors
    ///
    /// Returns an error if any descriptor fails to encode.
    pub fn resources(&self) -> Result<Vec<Resource>> {
        self.widgets.iter().map(Widget::resource).collect()
    }

    /// # Errors
    ///
    /// Returns an error if any descriptor fails to encode.
    pub fn resource_templates(&self) -> Result<Vec<ResourceTemplate>> {
        self.widgets.iter().map(Widget::resource_template).collect()
    }

    /// Serve `resources/read` for a widget template URI.
    ///
    /// # Errors
    ///
    /// Returns `resource_not_found` for URIs outside the catalog.
    pub fn read_resource(&self, uri: &str) -> std::result::Result<ReadResourceResult, ErrorData> {
        let Some(widget) = self.by_uri(uri) else {
            tracing::debug!(uri = %uri, "unknown widget resource");
            return Err(ErrorData::resource_not_found(
                format!("Unknown resource: {uri}"),
                None,
            ));
        };

        let contents = widget.contents().map_err(internal_error)?;
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

/// Map a descriptor failure onto an MCP internal error.
#[must_use]
pub fn internal_error(e: WidgetError) -> ErrorData {
    ErrorData::internal_error(e.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget(name: &str) -> Widget {
        Widget {
            id: format!("pizza-{name}"),
            title: format!("Show Pizza {name}"),
            template_uri: format!("ui://widget/pizza-{name}.html"),
            invoking: format!("Hand-tossing a {name}"),
            invoked: format!("Served a fresh {name}"),
            html: format!("<div id=\"pizzaz-{name}-root\"></div>"),
            response_text: format!("Rendered a pizza {name}!"),
        }
    }

    #[test]
    fn lookups_by_id_and_uri() {
        let catalog = WidgetCatalog::new(vec![widget("map"), widget("list")]).expect("catalog");
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("pizza-list").map(|w| w.title.as_str()),
            Some("Show Pizza list")
        );
        assert_eq!(
            catalog
                .by_uri("ui://widget/pizza-map.html")
                .map(|w| w.id.as_str()),
            Some("pizza-map")
        );
        assert!(catalog.get("pizza-video").is_none());
        assert!(catalog.by_uri("ui://widget/pizza-video.html").is_none());
    }

    #[test]
    fn listing_preserves_construction_order() {
        let catalog =
            WidgetCatalog::new(vec![widget("map"), widget("carousel"), widget("list")])
                .expect("catalog");
        let ids: Vec<&str> = catalog.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["pizza-map", "pizza-carousel", "pizza-list"]);

        let schema = Arc::new(JsonObject::new());
        let tools = catalog.tools(|w| w.title.clone(), &schema);
        let names: Vec<&str> = tools.iter().map(|t| &*t.name).collect();
        assert_eq!(names, ["pizza-map", "pizza-carousel", "pizza-list"]);

        assert_eq!(catalog.resources().expect("resources").len(), 3);
        assert_eq!(catalog.resource_templates().expect("templates").len(), 3);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut dup = widget("list");
        dup.id = "pizza-map".to_string();
        let err = WidgetCatalog::new(vec![widget("map"), dup]).expect_err("duplicate id");
        assert!(matches!(err, WidgetError::DuplicateId(id) if id == "pizza-map"));
    }

    #[test]
    fn duplicate_uris_are_rejected() {
        let mut dup = widget("list");
        dup.template_uri = "ui://widget/pizza-map.html".to_string();
        let err = WidgetCatalog::new(vec![widget("map"), dup]).expect_err("duplicate uri");
        assert!(matches!(err, WidgetError::DuplicateUri(_)));
    }

    #[test]
    fn read_resource_returns_markup_or_not_found() {
        let catalog = WidgetCatalog::new(vec![widget("map")]).expect("catalog");

        let result = catalog
            .read_resource("ui://widget/pizza-map.html")
            .expect("known uri");
        let v = serde_json::to_value(&result).expect("json");
        assert_eq!(
            v["contents"][0]["text"],
            json!("<div id=\"pizzaz-map-root\"></div>")
        );

        let err = catalog
            .read_resource("ui://widget/nope.html")
            .expect_err("unknown uri");
        assert_eq!(err.message, "Unknown resource: ui://widget/nope.html");
    }
}
