//! Browser side: three.js bindings, the page host, and the runtime loop.

pub mod host;
pub mod runner;
pub mod three;
pub mod toolkit;

use scene::WidgetConfig;
use tracing::warn;

pub use host::WebHost;
pub use toolkit::ThreeToolkit;

/// Page config, or the built-in look when the page has none or it does not parse.
pub fn page_config(host: &WebHost) -> WidgetConfig {
    let Some(payload) = host.config_json() else {
        return WidgetConfig::default();
    };
    WidgetConfig::from_json(&payload).unwrap_or_else(|err| {
        warn!(%err, "ignoring page widget config");
        WidgetConfig::default()
    })
}
