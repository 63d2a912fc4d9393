pub mod canvas_renderer;
pub mod drawer;
pub mod jagged_edge;
pub mod placement;
pub mod recording;
pub mod theme;

pub use canvas_renderer::CanvasRenderer;
pub use drawer::Drawer;
pub use recording::{DrawCommand, RecordingContext};
pub use theme::{DrawerTheme, EdgeStyle, GridStyle};
