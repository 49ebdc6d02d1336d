//! Browser adapters for the core traits.
//!
//! Everything that touches `web_sys` directly lives here so components stay
//! declarative. Missing elements are never errors: lookups return `None`
//! and mutations are skipped.

pub mod dom;
pub mod events;
pub mod storage;
pub mod timer;

pub use dom::DomLayout;
pub use events::PageEvent;
pub use storage::LocalPreferences;
pub use timer::{BrowserTimer, SignalDisplay};
