//! UI components for the portfolio page.
//!
//! Each component reads page state from context and owns its own local
//! signals; browser access goes through `crate::platform`.

mod background;
mod contact_form;
mod nav_header;
mod project_gallery;
mod project_modal;
mod stats;
mod typewriter;

pub use background::Background;
pub use contact_form::ContactForm;
pub use nav_header::{follow_section_link, NavHeader};
pub use project_gallery::ProjectGallery;
pub use project_modal::ProjectModal;
pub use stats::{SkillsList, StatsGrid};
pub use typewriter::TypewriterText;
