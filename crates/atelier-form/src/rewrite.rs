//! The class-marker rewriting pass.

use crate::error::FieldError;
use crate::field::FormField;
use crate::lexer::{scan_field, FieldScan};

/// Rewrite `class:` markers in every field definition of a form.
///
/// A single left-to-right pass: at each `[`, the scanner attempts to read
/// a complete field definition up to the first `]` outside quotes. When
/// the definition carries `class:` markers, it is rebuilt with a single
/// merged `class="..."` attribute placed after the remaining attributes
/// and before the label; otherwise the original text is emitted
/// byte-for-byte. Text outside field definitions is untouched, and
/// malformed definitions (no closing bracket, unterminated quote) pass
/// through verbatim.
///
/// The pass is idempotent: markers never match inside quoted segments, so
/// an already-merged `class="..."` attribute is left alone.
///
/// # Example
///
/// ```
/// use atelier_form::rewrite;
///
/// let form = "[text* your-name class:w-full class:border id:field1]";
/// assert_eq!(
///     rewrite(form),
///     "[text* your-name id:field1 class=\"w-full border\"]"
/// );
/// ```
pub fn rewrite(form: &str) -> String {
    let mut out = String::with_capacity(form.len());
    let mut rest = form;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match scan_field(&candidate[1..]) {
            FieldScan::Closed { consumed, tokens } => {
                let src = &candidate[..consumed + 1];
                match FormField::from_tokens(tokens) {
                    Some(field) if !field.classes.is_empty() => out.push_str(&field.render()),
                    _ => out.push_str(src),
                }
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

/// Parse every field definition in a form into its structured view.
///
/// The strict counterpart to [`rewrite`]: malformed definitions are
/// reported instead of passed through. Text outside field definitions is
/// skipped.
pub fn parse_fields(form: &str) -> Result<Vec<FormField>, FieldError> {
    let mut fields = Vec::new();
    let mut offset = 0;
    let mut rest = form;

    while let Some(open) = rest.find('[') {
        let at = offset + open;
        let candidate = &rest[open..];
        match scan_field(&candidate[1..]) {
            FieldScan::Closed { consumed, tokens } => {
                match FormField::from_tokens(tokens) {
                    Some(field) => fields.push(field),
                    None => return Err(FieldError::Empty { offset: at }),
                }
                let advance = open + consumed + 1;
                offset += advance;
                rest = &rest[advance..];
            }
            FieldScan::Unterminated => return Err(FieldError::Unterminated { offset: at }),
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merges_class_markers() {
        assert_eq!(
            rewrite("[text* your-name class:w-full class:border id:field1]"),
            "[text* your-name id:field1 class=\"w-full border\"]"
        );
    }

    #[test]
    fn test_submit_label_preserved() {
        assert_eq!(
            rewrite("[submit class:btn class:bg-blue \"Send Message\"]"),
            "[submit class=\"btn bg-blue\" \"Send Message\"]"
        );
    }

    #[test]
    fn test_field_without_markers_unchanged() {
        let form = "[email* your-email id:field2]";
        assert_eq!(rewrite(form), form);
    }

    #[test]
    fn test_text_outside_fields_untouched() {
        let form = "<label>Name</label>\n[text* your-name class:w-full]\n<p>done</p>";
        assert_eq!(
            rewrite(form),
            "<label>Name</label>\n[text* your-name class=\"w-full\"]\n<p>done</p>"
        );
    }

    #[test]
    fn test_multiple_fields_in_one_form() {
        let form = "[text* your-name class:w-full]\n[email* your-email class:w-full class:mt-4]\n[submit class:btn \"Send\"]";
        assert_eq!(
            rewrite(form),
            "[text* your-name class=\"w-full\"]\n[email* your-email class=\"w-full mt-4\"]\n[submit class=\"btn\" \"Send\"]"
        );
    }

    #[test]
    fn test_empty_brackets_unchanged() {
        assert_eq!(rewrite("[]"), "[]");
        assert_eq!(rewrite("[  ]"), "[  ]");
    }

    #[test]
    fn test_unterminated_bracket_unchanged() {
        let form = "[text* your-name class:w-full";
        assert_eq!(rewrite(form), form);
    }

    #[test]
    fn test_unterminated_quote_unchanged() {
        let form = "[submit class:btn \"Send";
        assert_eq!(rewrite(form), form);
    }

    #[test]
    fn test_inner_bracket_is_an_ordinary_character() {
        // No nesting: the candidate starting at the first bracket swallows
        // the second one as an attribute, exactly like the original
        // convention's first-match scan.
        let form = "[broken start [text* a class:w-full]";
        assert_eq!(rewrite(form), "[broken start [text* a class=\"w-full\"]");
    }

    #[test]
    fn test_field_after_unterminated_candidate_still_rewritten() {
        // The unterminated quote voids the outer candidate; scanning
        // resumes inside it and rewrites the complete inner field.
        let form = "[broken \"x [text* a class:w-full]";
        assert_eq!(rewrite(form), "[broken \"x [text* a class=\"w-full\"]");
    }

    #[test]
    fn test_marker_inside_quotes_not_matched() {
        let form = "[submit \"class:not-a-marker\"]";
        assert_eq!(rewrite(form), form);
    }

    #[test]
    fn test_idempotent_on_examples() {
        for form in [
            "[text* your-name class:w-full class:border id:field1]",
            "[submit class:btn class:bg-blue \"Send Message\"]",
            "[email* your-email id:field2]",
            "plain text with no fields",
            "[broken [text* a class:w-1/2] trailing",
            "[t class:bg-[#1a1a1a] b]",
            "[a class:y [z [t class:b[ c]] ]",
        ] {
            let once = rewrite(form);
            assert_eq!(rewrite(&once), once, "not idempotent for {form:?}");
        }
    }

    #[test]
    fn test_parse_fields_structured_view() {
        let fields =
            parse_fields("intro [text* your-name class:w-full] [submit \"Go\"]").unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_type, "text*");
        assert_eq!(fields[0].classes.as_slice(), ["w-full"]);
        assert_eq!(fields[1].label.as_deref(), Some("Go"));
    }

    #[test]
    fn test_parse_fields_reports_empty() {
        assert_eq!(
            parse_fields("ok [] rest"),
            Err(FieldError::Empty { offset: 3 })
        );
    }

    #[test]
    fn test_parse_fields_reports_unterminated() {
        assert_eq!(
            parse_fields("[text* your-name"),
            Err(FieldError::Unterminated { offset: 0 })
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Fragments chosen to collide: markers, brackets, quotes and
        /// whitespace in arbitrary interleavings.
        fn fragment() -> impl Strategy<Value = &'static str> {
            prop_oneof![
                Just("[text* "),
                Just("[submit "),
                Just("]"),
                Just("["),
                Just("\""),
                Just("class:w-full "),
                Just("class:bg-[#1a1a1a] "),
                Just("class:b[ "),
                Just("class: "),
                Just("id:field1 "),
                Just("your-name "),
                Just("\"Send Message\" "),
                Just("class=\"w-full\" "),
                Just(" "),
                Just("plain text "),
            ]
        }

        fn form() -> impl Strategy<Value = String> {
            prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
        }

        proptest! {
            #[test]
            fn rewrite_is_idempotent(form in form()) {
                let once = rewrite(&form);
                prop_assert_eq!(rewrite(&once), once.clone());
            }

            #[test]
            fn rewrite_is_idempotent_on_arbitrary_text(form in ".*") {
                let once = rewrite(&form);
                prop_assert_eq!(rewrite(&once), once.clone());
            }

            #[test]
            fn rewrite_is_deterministic(form in form()) {
                prop_assert_eq!(rewrite(&form), rewrite(&form));
            }

            #[test]
            fn rewrite_without_markers_is_identity(text in "[a-z <>/]*") {
                prop_assert_eq!(rewrite(&text), text.clone());
            }
        }
    }
}
