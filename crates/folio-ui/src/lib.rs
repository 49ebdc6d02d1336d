//! Folio UI Components
//!
//! Dioxus components shared by the portfolio page: buttons, filter chips
//! and form fields. Styling lives in the page's global stylesheet; these
//! components only emit class names and ARIA attributes.

pub mod components;

pub use components::*;
