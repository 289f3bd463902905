use crate::SERVER_NAME;
use crate::catalog::CatalogKind;
use crate::input::{self, KendoInput, PizzaInput};
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, JsonObject,
    ListResourceTemplatesResult, ListResourcesResult, ListToolsResult, PaginatedRequestParams,
    ReadResourceRequestParams, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use serde::de::DeserializeOwned;
use serde_json::Value;
use skybridge_widgets::{Widget, WidgetCatalog, internal_error, tool_error};
use std::future::{Future, ready};
use std::sync::Arc;

/// MCP handler for a widget gallery. Cheap to clone; one clone per session.
#[derive(Clone)]
pub struct PizzazServer {
    kind: CatalogKind,
    catalog: Arc<WidgetCatalog>,
    input_schema: Arc<JsonObject>,
}

impl PizzazServer {
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be built.
    pub fn new(kind: CatalogKind, kendo_asset_base: &str) -> skybridge_widgets::Result<Self> {
        let input_schema = match kind {
            CatalogKind::Pizza => input::pizza_schema(),
            CatalogKind::Kendo => input::kendo_schema(),
        };
        Ok(Self {
            kind,
            catalog: Arc::new(kind.build(kendo_asset_base)?),
            input_schema: Arc::new(input_schema),
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    fn call(&self, request: CallToolRequestParams) -> CallToolResult {
        tracing::info!(tool = %request.name, "tools/call");
        let Some(widget) = self.catalog.get(&request.name) else {
            return tool_error(format!("Unknown tool: {}", request.name));
        };

        let arguments = Value::Object(request.arguments.unwrap_or_default());
        match self.kind {
            CatalogKind::Pizza => match parse::<PizzaInput>(widget, arguments) {
                Ok(input) => {
                    widget.success(&widget.response_text, Some(input.structured_content()))
                }
                Err(result) => result,
            },
            CatalogKind::Kendo => match parse::<KendoInput>(widget, arguments) {
                Ok(input) => widget.success(
                    &widget.response_text,
                    input.structured_content(&widget.id),
                ),
                Err(result) => result,
            },
        }
    }
}

fn parse<T: DeserializeOwned>(widget: &Widget, arguments: Value) -> Result<T, CallToolResult> {
    serde_json::from_value(arguments).map_err(|e| {
        tracing::debug!(error = %e, tool = %widget.id, "rejected tool input");
        tool_error(format!("Input validation error: {e}"))
    })
}

impl ServerHandler for PizzazServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        let tools = self
            .catalog
            .tools(|w| w.title.clone(), &self.input_schema);
        ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        ready(Ok(self.call(request)))
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, ErrorData>> + Send + '_ {
        ready(
            self.catalog
                .resources()
                .map(ListResourcesResult::with_all_items)
                .map_err(internal_error),
        )
    }

    fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourceTemplatesResult, ErrorData>> + Send + '_ {
        ready(
            self.catalog
                .resource_templates()
                .map(ListResourceTemplatesResult::with_all_items)
                .map_err(internal_error),
        )
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, ErrorData>> + Send + '_ {
        ready(self.catalog.read_resource(&request.uri))
    }
}
