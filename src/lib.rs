//! Y-axis labels and the chunk-view viewport drawer for streaming time-series
//! charts on a 2D canvas.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod view_state;

pub use application::RescaleCoordinator;
pub use domain::chunk_view::ChunkView;
pub use domain::errors::{RenderError, RenderResult};
pub use domain::labels::{Label, LabelConfig, LabelLayout, LabelSet};
pub use infrastructure::rendering::{CanvasRenderer, DrawCommand, Drawer, DrawerTheme, RecordingContext};
pub use view_state::{RescaleAnimation, ViewState};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Installs the panic hook, console logger and browser clock when the module
/// is loaded in a browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let logger = if cfg!(debug_assertions) {
        infrastructure::services::ConsoleLogger::new_development()
    } else {
        infrastructure::services::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(logger));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));

    crate::log_info!(
        domain::logging::LogComponent::Infrastructure("Initialize"),
        "Console logging ready"
    );
}
