//! Structured class configuration, an alternative to inline markers.
//!
//! Instead of authoring `class:` markers inside the form definition, a
//! caller can keep a map from field name to class list and apply it in
//! one pass. Fields that already carry class markup of either kind are
//! left alone, so the map composes with [`rewrite`](crate::rewrite).

use indexmap::IndexMap;

use crate::field::FormField;
use crate::lexer::{scan_field, FieldScan};

/// An order-preserving map from field name to class list.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassMap {
    map: IndexMap<String, Vec<String>>,
}

impl ClassMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classes for a field name, replacing any previous entry.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.map
            .insert(name.into(), classes.into_iter().map(Into::into).collect());
    }

    /// Classes configured for a field name.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.map.get(name).map(|classes| classes.as_slice())
    }

    /// Number of configured field names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no names are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Inject configured classes into matching field definitions.
    ///
    /// A field receives classes only when its name is configured and it
    /// carries no class markup of its own (neither `class:` markers nor a
    /// `class="..."` attribute). Everything else, including malformed
    /// definitions and text outside fields, passes through verbatim.
    pub fn apply(&self, form: &str) -> String {
        let mut out = String::with_capacity(form.len());
        let mut rest = form;

        while let Some(open) = rest.find('[') {
            out.push_str(&rest[..open]);
            let candidate = &rest[open..];
            match scan_field(&candidate[1..]) {
                FieldScan::Closed { consumed, tokens } => {
                    let src = &candidate[..consumed + 1];
                    out.push_str(&self.rewrite_field(tokens, src));
                    rest = &candidate[consumed + 1..];
                }
                FieldScan::Unterminated => {
                    out.push('[');
                    rest = &candidate[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }

    fn rewrite_field<'a>(
        &self,
        tokens: Vec<crate::lexer::RawToken>,
        src: &'a str,
    ) -> std::borrow::Cow<'a, str> {
        let Some(mut field) = FormField::from_tokens(tokens) else {
            return src.into();
        };
        if !field.classes.is_empty() || field.has_class_attribute() {
            return src.into();
        }
        let Some(classes) = field.name().and_then(|name| self.get(name)) else {
            return src.into();
        };
        field.classes.extend(classes.iter().cloned());
        field.render().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ClassMap {
        let mut map = ClassMap::new();
        map.insert("your-name", ["w-full", "border"]);
        map.insert("your-email", ["w-full"]);
        map
    }

    #[test]
    fn test_apply_injects_by_field_name() {
        assert_eq!(
            map().apply("[text* your-name id:field1]"),
            "[text* your-name id:field1 class=\"w-full border\"]"
        );
    }

    #[test]
    fn test_apply_skips_unconfigured_fields() {
        let form = "[tel your-phone]";
        assert_eq!(map().apply(form), form);
    }

    #[test]
    fn test_apply_leaves_inline_markers_to_rewrite() {
        let form = "[text* your-name class:mt-2]";
        assert_eq!(map().apply(form), form);
    }

    #[test]
    fn test_apply_skips_existing_class_attribute() {
        let form = "[text* your-name class=\"w-1/2\"]";
        assert_eq!(map().apply(form), form);
    }

    #[test]
    fn test_apply_preserves_label() {
        let mut map = ClassMap::new();
        map.insert("send", ["btn"]);
        assert_eq!(
            map.apply("[submit send \"Send Message\"]"),
            "[submit send class=\"btn\" \"Send Message\"]"
        );
    }

    #[test]
    fn test_apply_twice_is_stable() {
        let map = map();
        let form = "[text* your-name] [email* your-email] done";
        let once = map.apply(form);
        assert_eq!(map.apply(&once), once);
    }

    #[test]
    fn test_insert_replaces() {
        let mut map = map();
        map.insert("your-name", ["mt-4"]);
        assert_eq!(map.get("your-name"), Some(["mt-4".to_string()].as_slice()));
        assert_eq!(map.len(), 2);
    }
}
