use clap::ValueEnum;
use skybridge_widgets::{Widget, WidgetCatalog};

/// Where the Pizzaz bundles are published.
const PIZZAZ_ASSET_BASE: &str = "https://persistent.oaistatic.com/ecosystem-built-assets";
const PIZZAZ_BUILD: &str = "0038";
const KENDO_THEME_CSS: &str =
    "https://kendo.cdn.telerik.com/themes/12.0.0/default/default-ocean-blue-a11y.css";

pub const DEFAULT_KENDO_ASSET_BASE: &str = "http://localhost:4444";

/// Which widget gallery the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Pizza,
    Kendo,
}

impl CatalogKind {
    /// Build the catalog. `kendo_asset_base` is only used by [`CatalogKind::Kendo`].
    ///
    /// # Errors
    ///
    /// Returns an error if the static widget table has duplicate ids or URIs.
    pub fn build(self, kendo_asset_base: &str) -> skybridge_widgets::Result<WidgetCatalog> {
        let widgets = match self {
            Self::Pizza => pizza_widgets(),
            Self::Kendo => kendo_widgets(kendo_asset_base),
        };
        WidgetCatalog::new(widgets)
    }
}

struct PizzaEntry {
    id: &'static str,
    title: &'static str,
    /// Bundle name under the asset base (`pizzaz`, `pizzaz-carousel`, ...).
    bundle: &'static str,
    invoking: &'static str,
    invoked: &'static str,
    response: &'static str,
}

const PIZZA: [PizzaEntry; 5] = [
    PizzaEntry {
        id: "pizza-map",
        title: "Show Pizza Map",
        bundle: "pizzaz",
        invoking: "Hand-tossing a map",
        invoked: "Served a fresh map",
        response: "Rendered a pizza map!",
    },
    PizzaEntry {
        id: "pizza-carousel",
        title: "Show Pizza Carousel",
        bundle: "pizzaz-carousel",
        invoking: "Carousel some spots",
        invoked: "Served a fresh carousel",
        response: "Rendered a pizza carousel!",
    },
    PizzaEntry {
        id: "pizza-albums",
        title: "Show Pizza Album",
        bundle: "pizzaz-albums",
        invoking: "Hand-tossing an album",
        invoked: "Served a fresh album",
        response: "Rendered a pizza album!",
    },
    PizzaEntry {
        id: "pizza-list",
        title: "Show Pizza List",
        bundle: "pizzaz-list",
        invoking: "Hand-tossing a list",
        invoked: "Served a fresh list",
        response: "Rendered a pizza list!",
    },
    PizzaEntry {
        id: "pizza-video",
        title: "Show Pizza Video",
        bundle: "pizzaz-video",
        invoking: "Hand-tossing a video",
        invoked: "Served a fresh video",
        response: "Rendered a pizza video!",
    },
];

#[must_use]
pub fn pizza_widgets() -> Vec<Widget> {
    PIZZA
        .iter()
        .map(|entry| Widget {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            template_uri: format!("ui://widget/{}.html", entry.id),
            invoking: entry.invoking.to_string(),
            invoked: entry.invoked.to_string(),
            html: format!(
                "<div id=\"{bundle}-root\"></div>\n\
                 <link rel=\"stylesheet\" href=\"{PIZZAZ_ASSET_BASE}/{bundle}-{PIZZAZ_BUILD}.css\">\n\
                 <script type=\"module\" src=\"{PIZZAZ_ASSET_BASE}/{bundle}-{PIZZAZ_BUILD}.js\"></script>",
                bundle = entry.bundle,
            ),
            response_text: entry.response.to_string(),
        })
        .collect()
}

/// Kendo widgets: `(tool id, component)`. The component names the markup file and the
/// `<component>.js` / `<component>.css` bundles under the asset base.
const KENDO: [(&str, &str); 13] = [
    ("action-button", "action-button"),
    ("kendo-grid", "grid"),
    ("kendo-buttons", "buttons"),
    ("kendo-form", "form"),
    ("kendo-cards", "cards"),
    ("kendo-dateinputs", "dateinputs"),
    ("kendo-dropdowns", "dropdowns"),
    ("kendo-loaders", "loaders"),
    ("kendo-dialogs", "dialogs"),
    ("kendo-drawer", "drawer"),
    ("kendo-rating", "rating"),
    ("kendo-result", "result"),
    ("kendo-header", "header"),
];

#[must_use]
pub fn kendo_widgets(asset_base: &str) -> Vec<Widget> {
    let base = asset_base.trim_end_matches('/');
    KENDO
        .iter()
        .map(|&(id, component)| {
            let html = format!(
                "<div id=\"{component}-root\"></div>\n\
                 <link rel=\"stylesheet\" href=\"{KENDO_THEME_CSS}\">\n\
                 <link rel=\"stylesheet\" href=\"{base}/{component}.css\">\n\
                 <script type=\"module\" src=\"{base}/{component}.js\"></script>"
            );
            let template_uri = format!("ui://widget/{component}.html");
            if id == "action-button" {
                return Widget {
                    id: id.to_string(),
                    title: "Show Action Button".to_string(),
                    template_uri,
                    invoking: "Hand-tossing an action button".to_string(),
                    invoked: "Served a fresh action button".to_string(),
                    html,
                    response_text: "Rendered an action button!".to_string(),
                };
            }
            Widget {
                id: id.to_string(),
                title: kendo_title(component),
                template_uri,
                invoking: format!("Hand-tossing a {component}"),
                invoked: format!("Served a fresh {component}"),
                html,
                response_text: format!("Rendered a kendo {component}!"),
            }
        })
        .collect()
}

// Published titles carry a double space for every component except the grid.
fn kendo_title(component: &str) -> String {
    if component == "grid" {
        "Show grid".to_string()
    } else {
        format!("Show  {component}")
    }
}
