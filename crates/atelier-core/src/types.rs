//! Work-record types consumed by the layout engine.

/// Stable identifier for a work record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkId(pub String);

impl From<&str> for WorkId {
    fn from(s: &str) -> Self {
        WorkId(s.to_string())
    }
}

impl From<String> for WorkId {
    fn from(s: String) -> Self {
        WorkId(s)
    }
}

/// One work/image record to place in a grid or masonry display.
///
/// Ordering of items in a slice is significant and stable: it is the sole
/// input to pattern assignment. No API in this workspace reorders or
/// filters items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryItem {
    /// Stable identifier, unique within one gallery.
    pub id: WorkId,
    /// URL of the primary image. Never empty; the caller substitutes a
    /// placeholder upstream when a record has no image.
    pub image_url: String,
    /// Display title, if any.
    pub title: Option<String>,
    /// Display caption, if any.
    pub caption: Option<String>,
    /// Material/edition/dimensions metadata.
    pub meta: WorkMeta,
}

impl GalleryItem {
    /// Create an item with just an id and image URL.
    pub fn new(id: impl Into<WorkId>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_url: image_url.into(),
            title: None,
            caption: None,
            meta: WorkMeta::default(),
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the metadata.
    pub fn with_meta(mut self, meta: WorkMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// Display metadata for a work.
///
/// All fields are free-form strings authored in the content store; the
/// engine only combines them into a display line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkMeta {
    /// Material, e.g. "Bronze" or "Steel and glass".
    pub material: Option<String>,
    /// Edition, e.g. "Edition of 15".
    pub edition: Option<String>,
    /// Physical dimensions, e.g. "120 × 40 × 40 cm".
    pub dimensions: Option<String>,
}

impl WorkMeta {
    /// Material used when a record has none.
    pub const DEFAULT_MATERIAL: &'static str = "Bronze";

    /// Create metadata with a material only.
    pub fn material(material: impl Into<String>) -> Self {
        Self {
            material: Some(material.into()),
            ..Default::default()
        }
    }

    /// Set the edition.
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    /// Set the dimensions.
    pub fn with_dimensions(mut self, dimensions: impl Into<String>) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    /// Combine the fields into a single display line.
    ///
    /// Edition wins over dimensions: `"{material} {edition}"`, then
    /// `"{material}, {dimensions}"`, then the material alone. A record
    /// with no metadata at all shows the default material.
    pub fn display_line(&self) -> String {
        let material = self
            .material
            .as_deref()
            .unwrap_or(Self::DEFAULT_MATERIAL);

        if let Some(edition) = &self.edition {
            format!("{material} {edition}")
        } else if let Some(dimensions) = &self.dimensions {
            format!("{material}, {dimensions}")
        } else {
            material.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line_edition_wins() {
        let meta = WorkMeta::material("Steel")
            .with_edition("Edition of 15")
            .with_dimensions("120 cm");
        assert_eq!(meta.display_line(), "Steel Edition of 15");
    }

    #[test]
    fn test_display_line_dimensions() {
        let meta = WorkMeta::material("Marble").with_dimensions("80 × 30 cm");
        assert_eq!(meta.display_line(), "Marble, 80 × 30 cm");
    }

    #[test]
    fn test_display_line_material_only() {
        let meta = WorkMeta::material("Walnut");
        assert_eq!(meta.display_line(), "Walnut");
    }

    #[test]
    fn test_display_line_empty_falls_back() {
        let meta = WorkMeta::default();
        assert_eq!(meta.display_line(), "Bronze");
    }

    #[test]
    fn test_display_line_default_material_with_edition() {
        let meta = WorkMeta::default().with_edition("Edition of 3");
        assert_eq!(meta.display_line(), "Bronze Edition of 3");
    }

    #[test]
    fn test_item_builder() {
        let item = GalleryItem::new("work-1", "https://example.com/a.jpg")
            .with_title("Reclining Figure")
            .with_meta(WorkMeta::material("Bronze").with_edition("Edition of 9"));
        assert_eq!(item.id, WorkId::from("work-1"));
        assert_eq!(item.title.as_deref(), Some("Reclining Figure"));
        assert!(item.caption.is_none());
        assert_eq!(item.meta.display_line(), "Bronze Edition of 9");
    }
}
