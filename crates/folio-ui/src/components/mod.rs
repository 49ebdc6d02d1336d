//! Reusable UI components
//!
//! All components render plain elements with stable class names so the
//! page stylesheet can theme them for both light and dark mode.

mod button;
mod filter_chips;
mod input;

pub use button::*;
pub use filter_chips::*;
pub use input::*;
