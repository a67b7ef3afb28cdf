//! Named span patterns and per-item layout assignment.

use std::fmt;
use std::str::FromStr;

use atelier_core::{GalleryItem, PatternError};

use crate::cycle::CyclicTable;

/// Symbolic grid size for one gallery item.
///
/// Each token maps to a fixed column/row span on the mosaic grid and, via
/// [`SpanToken::aspect_ratio`], to exactly one aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpanToken {
    /// 2×2 block.
    Large,
    /// 1×1 cell.
    Regular,
    /// 1×2 block.
    Tall,
    /// 2×1 block.
    Wide,
    /// 2×3 oversized block, used as the opening piece of the featured
    /// pattern.
    Hero,
}

impl SpanToken {
    /// Columns the item spans.
    pub fn col_span(&self) -> u8 {
        match self {
            SpanToken::Regular | SpanToken::Tall => 1,
            SpanToken::Large | SpanToken::Wide | SpanToken::Hero => 2,
        }
    }

    /// Rows the item spans.
    pub fn row_span(&self) -> u8 {
        match self {
            SpanToken::Regular | SpanToken::Wide => 1,
            SpanToken::Large | SpanToken::Tall => 2,
            SpanToken::Hero => 3,
        }
    }

    /// Grid span classes for this token.
    pub fn grid_class(&self) -> &'static str {
        match self {
            SpanToken::Large => "col-span-2 row-span-2",
            SpanToken::Regular => "col-span-1 row-span-1",
            SpanToken::Tall => "col-span-1 row-span-2",
            SpanToken::Wide => "col-span-2 row-span-1",
            SpanToken::Hero => "col-span-2 row-span-3",
        }
    }

    /// Aspect ratio for this token.
    ///
    /// The mapping is keyed on span geometry, first match wins:
    /// three rows → portrait, 2×2 → landscape, two rows → tall,
    /// two columns → wide, otherwise square. Total over all tokens.
    pub fn aspect_ratio(&self) -> AspectRatio {
        let (cols, rows) = (self.col_span(), self.row_span());
        if rows == 3 {
            AspectRatio::ThreeFour
        } else if rows == 2 && cols == 2 {
            AspectRatio::FourThree
        } else if rows == 2 {
            AspectRatio::ThreeFive
        } else if cols == 2 {
            AspectRatio::FiveThree
        } else {
            AspectRatio::Square
        }
    }
}

/// Display aspect ratio for a laid-out item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    /// 1:1.
    Square,
    /// 4:3 landscape.
    FourThree,
    /// 3:4 portrait.
    ThreeFour,
    /// 3:5 tall.
    ThreeFive,
    /// 5:3 wide.
    FiveThree,
    /// 4:5 portrait, used by the stagger and editorial cycles.
    FourFive,
    /// 16:9 wide, editorial opener.
    SixteenNine,
    /// 16:7 panoramic, editorial closer.
    SixteenSeven,
}

impl AspectRatio {
    /// Aspect ratio class for this value.
    pub fn class(&self) -> &'static str {
        match self {
            AspectRatio::Square => "aspect-square",
            AspectRatio::FourThree => "aspect-[4/3]",
            AspectRatio::ThreeFour => "aspect-[3/4]",
            AspectRatio::ThreeFive => "aspect-[3/5]",
            AspectRatio::FiveThree => "aspect-[5/3]",
            AspectRatio::FourFive => "aspect-[4/5]",
            AspectRatio::SixteenNine => "aspect-[16/9]",
            AspectRatio::SixteenSeven => "aspect-[16/7]",
        }
    }
}

/// A named span pattern from the built-in set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PatternName {
    /// Ten-entry cycle mixing large, regular, tall and wide spans.
    #[default]
    Dynamic,
    /// Every item regular.
    Uniform,
    /// Eight-entry cycle opening with a hero span.
    Featured,
}

impl PatternName {
    /// Canonical name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::Dynamic => "dynamic",
            PatternName::Uniform => "uniform",
            PatternName::Featured => "featured",
        }
    }

    /// Resolve a name leniently: unknown names fall back to the default
    /// pattern rather than failing. This is the documented policy for
    /// operator-supplied configuration values.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    /// The span table for this pattern.
    pub fn table(&self) -> PatternTable {
        match self {
            PatternName::Dynamic => PatternTable::dynamic(),
            PatternName::Uniform => PatternTable::uniform(),
            PatternName::Featured => PatternTable::featured(),
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternName {
    type Err = PatternError;

    /// Strict parsing; configuration layers that want to surface typos
    /// use this instead of the lenient fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamic" => Ok(PatternName::Dynamic),
            "uniform" => Ok(PatternName::Uniform),
            "featured" => Ok(PatternName::Featured),
            other => Err(PatternError::UnknownPattern(other.to_string())),
        }
    }
}

/// A cyclic table of span tokens.
pub type PatternTable = CyclicTable<SpanToken>;

impl CyclicTable<SpanToken> {
    /// The default mosaic cycle: varied sizes in a fixed designed order.
    pub fn dynamic() -> Self {
        use SpanToken::*;
        Self::from_entries(vec![
            Large, Regular, Tall, Wide, Regular, Regular, Wide, Tall, Regular, Large,
        ])
    }

    /// Every cell the same size.
    pub fn uniform() -> Self {
        Self::from_entries(vec![SpanToken::Regular])
    }

    /// Opens with an oversized hero piece, then a mix of smaller spans.
    pub fn featured() -> Self {
        use SpanToken::*;
        Self::from_entries(vec![
            Hero, Regular, Regular, Tall, Regular, Regular, Wide, Regular,
        ])
    }
}

/// Layout classes assigned to one gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutAssignment {
    /// Assigned grid span.
    pub span: SpanToken,
    /// Aspect ratio derived from the span.
    pub aspect: AspectRatio,
}

impl LayoutAssignment {
    fn from_span(span: SpanToken) -> Self {
        Self {
            span,
            aspect: span.aspect_ratio(),
        }
    }

    /// Grid span classes for the rendering layer.
    pub fn grid_span_class(&self) -> &'static str {
        self.span.grid_class()
    }

    /// Aspect ratio class for the rendering layer.
    pub fn aspect_ratio_class(&self) -> &'static str {
        self.aspect.class()
    }
}

/// Assignments for `len` positions under the given pattern.
///
/// Assignment depends only on position; this is the primitive behind
/// [`assign`] for callers that have a count rather than a slice.
pub fn assignments(len: usize, pattern: PatternName) -> Vec<LayoutAssignment> {
    let table = pattern.table();
    (0..len)
        .map(|i| LayoutAssignment::from_span(*table.get(i)))
        .collect()
}

/// Assign layout classes to each item in order.
///
/// Output is paired 1:1 with `items` by position; an empty slice yields an
/// empty vector. Pure and deterministic: the same inputs always produce
/// the same sequence.
pub fn assign(items: &[GalleryItem], pattern: PatternName) -> Vec<LayoutAssignment> {
    assignments(items.len(), pattern)
}

/// Assign layout classes, resolving the pattern name leniently.
///
/// Unknown names degrade to the default pattern instead of failing.
pub fn assign_by_name(items: &[GalleryItem], name: &str) -> Vec<LayoutAssignment> {
    assign(items, PatternName::from_name_or_default(name))
}
