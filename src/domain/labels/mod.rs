//! Y-axis labels: single labels, the per-scale label set and the settings
//! used to generate them.

pub mod config;
pub mod label;
pub mod label_set;

pub use config::*;
pub use label::*;
pub use label_set::*;
