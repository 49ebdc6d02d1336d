//! Folio Core Library
//!
//! Platform-independent state for a single-page portfolio.
//!
//! ## Overview
//!
//! The web shell renders the page and forwards browser events; everything
//! that decides *what* the page shows lives here and is testable without a
//! browser:
//!
//! - [`typewriter`]: type/pause/delete animation over a phrase list
//! - [`scroll`]: active-section tracking for the navigation bar
//! - [`reveal`]: one-shot reveal of content blocks as they scroll in
//! - [`theme`]: light/dark selection and its persisted preference
//! - [`filter`]: project tag chips and search
//! - [`contact`]: contact form validation and `mailto:` links
//! - [`effects`]: particles, cursor trail, parallax, counters
//! - [`config`]: site content loaded from JSON
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{run_typewriter, StopHandle, Typewriter, TypewriterTiming};
//!
//! let typewriter = Typewriter::new(["Web Developer"], TypewriterTiming::default())?;
//! let mut shown = String::new();
//! run_typewriter(typewriter, &mut shown, &timer, StopHandle::new()).await;
//! ```

pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod filter;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typewriter;

// Re-exports
pub use config::{ContactConfig, FilterChip, Project, SiteConfig, Skill, Stat, TypewriterConfig};
pub use contact::{encode_uri_component, ContactMessage, OPENING_MAIL_CLIENT};
pub use error::{FolioError, FolioResult};
pub use filter::{ProjectFilter, ALL_TAGS};
pub use reveal::{RevealTracker, REVEAL_THRESHOLD};
pub use scroll::{
    ElementRect, HighlightOutcome, LayoutProbe, NavEntry, NavLink, ScrollTracker,
    SectionBoundary, HEADER_MARGIN_PX,
};
pub use theme::{
    resolve_theme, toggle_theme, MemoryPreferences, PreferenceStore, Theme, PREFERS_LIGHT_QUERY,
    THEME_KEY,
};
pub use typewriter::{
    run_typewriter, Frame, Phase, StopHandle, TextDisplay, Timer, Typewriter, TypewriterTiming,
    MARKER,
};
