//! Layout tokens that give the kit's size enumerations concrete lengths.
//!
//! A theme is loaded from JSON and stored as a gpui global; size and width
//! variants resolve against the active theme.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;
