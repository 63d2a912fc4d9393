//! Geometry value objects shared by the drawer and its collaborators.

pub mod value_objects;

pub use value_objects::*;
