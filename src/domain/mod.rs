pub mod canvas;
pub mod chart;
pub mod chunk_view;
pub mod errors;
pub mod labels;
pub mod logging;
