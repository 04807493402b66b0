//! Variant and size enumerations for the kit's primitive components.

mod base;
pub use base::*;

mod button;
pub use button::*;

mod input;
pub use input::*;

mod badge;
pub use badge::*;

mod progress;
pub use progress::*;

mod card;
pub use card::*;
