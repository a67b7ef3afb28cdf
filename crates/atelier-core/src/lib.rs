//! Core types for the Atelier gallery engine.
//!
//! This crate defines the work-record types shared by the layout crates:
//! gallery items, display metadata, and the error surface for strict
//! pattern-name parsing. It performs no I/O and holds no state; callers
//! (the rendering layer) own fetching records and emitting markup.

pub mod error;
pub mod types;

pub use error::PatternError;
pub use types::{GalleryItem, WorkId, WorkMeta};
