pub mod rescale;

pub use rescale::RescaleCoordinator;
