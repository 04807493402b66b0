pub mod components;

pub mod layout;

pub mod theme;

pub mod variant;
pub use variant::VariantSet;

mod error;
pub use error::*;
