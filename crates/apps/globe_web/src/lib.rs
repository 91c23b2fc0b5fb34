//! Decorative 3D globe widget.
//!
//! Every element matching the configured selector gets its own rotating
//! globe with random point markers and animated arcs. The widgets share one
//! random dataset per page load.

pub mod error;
pub mod host;
pub mod toolkit;
pub mod widget;

#[cfg(test)]
mod fake;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::WidgetError;
pub use widget::{Widget, mount, mount_page};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::sync::atomic::{AtomicBool, Ordering};

    use scene::Dataset;
    use tracing::{error, info};
    use wasm_bindgen::prelude::*;

    use crate::web::{ThreeToolkit, WebHost, page_config, runner};
    use crate::widget::mount_page;

    static INITIALIZED: AtomicBool = AtomicBool::new(false);

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        // Module instantiation can run the start hook again on hot reload.
        if INITIALIZED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let host = WebHost::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = page_config(&host);
        let dataset = Dataset::init_shared(&config.dataset);
        let toolkit = ThreeToolkit::new(host.document().clone());

        let widgets = mount_page(&toolkit, &host, dataset, &config);
        info!(count = widgets.len(), "globe widgets ready");
        for widget in widgets {
            if let Err(err) = runner::run(widget, &host) {
                error!(%err, "globe widget could not start");
            }
        }
        Ok(())
    }
}
