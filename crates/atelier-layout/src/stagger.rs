//! Stagger offsets for masonry-style displays.
//!
//! The looser masonry variant assigns a vertical offset instead of a grid
//! span, cycling by position exactly like the span patterns.

use crate::cycle::CyclicTable;
use crate::pattern::AspectRatio;

/// Vertical offset applied to a masonry column item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaggerOffset {
    /// Flush with the row.
    #[default]
    None,
    /// Pushed down one step.
    Md16,
    /// Pushed down two steps.
    Md32,
}

impl StaggerOffset {
    /// Offset class for this value; empty for no offset.
    pub fn class(&self) -> &'static str {
        match self {
            StaggerOffset::None => "",
            StaggerOffset::Md16 => "md:mt-16",
            StaggerOffset::Md32 => "md:mt-32",
        }
    }
}

/// The six-entry stagger cycle: every other item drops, with a deeper drop
/// closing the cycle.
pub fn stagger_offsets() -> CyclicTable<StaggerOffset> {
    use StaggerOffset::*;
    CyclicTable::from_entries(vec![None, Md16, None, Md16, None, Md32])
}

/// Aspect variation cycle paired with the stagger layout.
pub fn aspect_cycle() -> CyclicTable<AspectRatio> {
    use AspectRatio::*;
    CyclicTable::from_entries(vec![
        FourFive, Square, ThreeFour, FourThree, ThreeFive, Square,
    ])
}
