use crate::SERVER_NAME;
use crate::tool::{self, TOOL_DESCRIPTION, TOOL_NAME};
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, JsonObject,
    ListResourceTemplatesResult, ListResourcesResult, ListToolsResult, PaginatedRequestParams,
    ReadResourceRequestParams, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use skybridge_widgets::{Widget, WidgetCatalog, internal_error, tool_error};
use std::future::{Future, ready};
use std::sync::Arc;

/// MCP handler for the solar system widget. Cheap to clone; one clone per session.
#[derive(Clone)]
pub struct SolarSystemServer {
    widget: Arc<Widget>,
    catalog: Arc<WidgetCatalog>,
    input_schema: Arc<JsonObject>,
}

impl SolarSystemServer {
    /// Build the server around already-loaded widget markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget catalog cannot be built.
    pub fn new(html: String) -> skybridge_widgets::Result<Self> {
        let widget = tool::widget(html);
        let catalog = WidgetCatalog::new(vec![widget.clone()])?;
        Ok(Self {
            widget: Arc::new(widget),
            catalog: Arc::new(catalog),
            input_schema: Arc::new(tool::input_schema()),
        })
    }

    #[must_use]
    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    fn call(&self, request: CallToolRequestParams) -> CallToolResult {
        tracing::info!(tool = %request.name, "tools/call");
        if request.name != TOOL_NAME {
            return tool_error(format!("Unknown tool: {}", request.name));
        }
        tool::focus_planet(&self.widget, request.arguments)
    }
}

impl ServerHandler for SolarSystemServer {
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
            instructions: Some(
                "Call focus-solar-planet with a planet name to render the solar system widget."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        let tool = self
            .widget
            .tool(TOOL_NAME, TOOL_DESCRIPTION, Arc::clone(&self.input_schema));
        ready(Ok(ListToolsResult::with_all_items(vec![tool])))
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
