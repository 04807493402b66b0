//! Configuration records for the navbar and footer layout components.

mod handler;
pub use handler::*;

mod navbar;
pub use navbar::*;

mod footer;
pub use footer::*;
