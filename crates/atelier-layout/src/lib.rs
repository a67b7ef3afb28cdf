//! Layout-pattern assignment for Atelier galleries.
//!
//! This crate maps an ordered list of gallery items to per-item layout
//! classes by cycling through a fixed, named pattern table. Assignment is
//! deterministic: item `i` always receives `table[i % table.len()]`, with
//! an aspect ratio derived from the assigned span. There is no randomness,
//! no look-ahead, and no balancing heuristic.
//!
//! # Architecture
//!
//! 1. **Cyclic tables**: [`CyclicTable`] is the one lookup primitive; every
//!    variant (grid spans, stagger offsets, aspect cycles, editorial slots)
//!    is a table of a different entry type.
//! 2. **Built-in patterns**: [`PatternName`] selects one of the fixed span
//!    tables; unknown names fall back to the default pattern.
//! 3. **Registry**: [`PatternRegistry`] allows callers to add named tables
//!    beyond the built-in set.
//!
//! # Example
//!
//! ```
//! use atelier_core::GalleryItem;
//! use atelier_layout::{assign, PatternName};
//!
//! let items = vec![
//!     GalleryItem::new("a", "https://example.com/a.jpg"),
//!     GalleryItem::new("b", "https://example.com/b.jpg"),
//! ];
//!
//! for placement in assign(&items, PatternName::Dynamic) {
//!     println!("{} {}", placement.grid_span_class(), placement.aspect_ratio_class());
//! }
//! ```

mod cycle;
mod editorial;
mod pattern;
mod registry;
mod stagger;

pub use cycle::CyclicTable;
pub use editorial::{editorial, EditorialSlot, TextAlign};
pub use pattern::{
    assign, assign_by_name, assignments, AspectRatio, LayoutAssignment, PatternName,
    PatternTable, SpanToken,
};
pub use registry::PatternRegistry;
pub use stagger::{aspect_cycle, stagger_offsets, StaggerOffset};

pub use atelier_core::PatternError;
