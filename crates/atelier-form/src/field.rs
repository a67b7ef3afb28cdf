//! Structured view of one form-field definition.

use smallvec::SmallVec;

use crate::lexer::{as_class_value, RawToken};

/// One parsed bracketed field definition.
///
/// `attributes` holds every non-class token in original relative order;
/// quoted tokens keep their quotes so they re-emit verbatim. A trailing
/// quoted token is treated as the field's label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormField {
    /// Field type identifier, e.g. `text*`, `email`, `submit`.
    pub field_type: String,
    /// Non-class attributes, original order preserved.
    pub attributes: Vec<String>,
    /// `class:` marker values, in order of appearance.
    pub classes: SmallVec<[String; 4]>,
    /// Trailing quoted label, without its quotes.
    pub label: Option<String>,
}

impl FormField {
    /// Build a field from scanned tokens. Returns `None` for an empty
    /// token list (nothing between the brackets).
    pub(crate) fn from_tokens(tokens: Vec<RawToken>) -> Option<Self> {
        let mut iter = tokens.into_iter();
        let field_type = iter.next()?.text;
        let mut rest: Vec<RawToken> = iter.collect();

        // A quoted token in final position is the label.
        let label = match rest.last() {
            Some(token) if token.quoted => {
                let token = rest.pop()?;
                Some(token.text[1..token.text.len() - 1].to_string())
            }
            _ => None,
        };

        let mut attributes = Vec::new();
        let mut classes = SmallVec::new();
        for token in rest {
            if !token.quoted {
                if let Some(value) = as_class_value(&token.text) {
                    classes.push(value.to_string());
                    continue;
                }
            }
            attributes.push(token.text);
        }

        Some(Self {
            field_type,
            attributes,
            classes,
            label,
        })
    }

    /// The field's name: its first unquoted attribute, by the convention
    /// that the name follows the type (`[text* your-name ...]`).
    pub fn name(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| !attr.starts_with('"'))
            .map(|attr| attr.as_str())
    }

    /// Whether the field already carries a well-formed `class="..."`
    /// attribute.
    pub fn has_class_attribute(&self) -> bool {
        self.attributes.iter().any(|attr| attr.starts_with("class="))
    }

    /// Render the canonical definition: type, attributes in original
    /// order, a single merged class attribute, then the label.
    pub fn render(&self) -> String {
        let mut out = String::from("[");
        out.push_str(&self.field_type);
        for attr in &self.attributes {
            out.push(' ');
            out.push_str(attr);
        }
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&self.classes.join(" "));
            out.push('"');
        }
        if let Some(label) = &self.label {
            out.push_str(" \"");
            out.push_str(label);
            out.push('"');
        }
        out.push(']');
        out
    }
}
