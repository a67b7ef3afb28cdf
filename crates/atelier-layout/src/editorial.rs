//! Editorial layout cycle for full-width adaptive galleries.
//!
//! Unlike the mosaic patterns, the editorial cycle places items on a
//! twelve-column grid with varying widths, offsets and caption alignment.

use crate::cycle::CyclicTable;
use crate::pattern::AspectRatio;

/// Caption alignment for an editorial slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
}

impl TextAlign {
    /// Alignment class; empty for the default left alignment.
    pub fn class(&self) -> &'static str {
        match self {
            TextAlign::Left => "",
            TextAlign::Right => "md:text-left text-right",
            TextAlign::Center => "text-center",
        }
    }
}

/// One entry of the editorial cycle on a twelve-column grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorialSlot {
    /// Columns spanned (out of twelve).
    pub col_span: u8,
    /// Explicit starting column, when the slot is offset.
    pub col_start: Option<u8>,
    /// Aspect ratio for the slot's image.
    pub aspect: AspectRatio,
    /// Caption alignment.
    pub align: TextAlign,
}

impl EditorialSlot {
    const fn new(col_span: u8, col_start: Option<u8>, aspect: AspectRatio, align: TextAlign) -> Self {
        Self {
            col_span,
            col_start,
            aspect,
            align,
        }
    }

    /// Column classes for this slot, including the start offset if set.
    pub fn col_class(&self) -> String {
        match self.col_start {
            Some(start) => format!("md:col-start-{} md:col-span-{}", start, self.col_span),
            None => format!("md:col-span-{}", self.col_span),
        }
    }
}

/// The five-entry editorial cycle: a wide opener, a narrow portrait, two
/// mid-width slots, and a centered panoramic closer.
pub fn editorial() -> CyclicTable<EditorialSlot> {
    use AspectRatio::*;
    use TextAlign::*;
    CyclicTable::from_entries(vec![
        EditorialSlot::new(8, None, SixteenNine, Left),
        EditorialSlot::new(4, None, ThreeFour, Right),
        EditorialSlot::new(5, None, FourFive, Left),
        EditorialSlot::new(7, None, Square, Left),
        EditorialSlot::new(8, Some(3), SixteenSeven, Center),
    ])
}
