//! Token-level scanning for form-definition text.
//!
//! A field definition is a bracketed run of whitespace-separated tokens.
//! The scanner closes a field at the first `]` outside a quoted segment;
//! quoted segments pass through whole, so a `]` inside a label never ends
//! a field. There is no bracket nesting: a `[` inside a token (Tailwind
//! arbitrary values) is an ordinary character.

use nom::{
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::all_consuming,
    sequence::{delimited, preceded},
    IResult,
};

/// Characters allowed in a `class:` marker value.
///
/// The original convention allowed utility classes with variants and
/// arbitrary values; `/` and `#` extend that to fractions (`w-1/2`) and
/// color literals (`bg-[#1a1a1a]`).
pub fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '[' | ']' | ':' | '-' | '_' | '.' | '(' | ')' | '/' | '#')
}

/// Parse a double-quoted segment, returning the inner text.
pub fn quoted(input: &str) -> IResult<&str, &str> {
    delimited(char('"'), take_while(|c| c != '"'), char('"'))(input)
}

/// Parse a `class:` marker, returning the value after the prefix.
pub fn class_marker(input: &str) -> IResult<&str, &str> {
    preceded(tag("class:"), take_while1(is_class_char))(input)
}

/// Classify a whole token as a `class:` marker.
///
/// The value must cover the entire remainder of the token; markers with
/// stray characters stay ordinary attributes, matching the original
/// convention of leaving anything unrecognized alone.
pub fn as_class_value(token: &str) -> Option<&str> {
    all_consuming(class_marker)(token).ok().map(|(_, value)| value)
}

/// A whitespace-delimited token inside a field body.
///
/// Quoted segments keep their quotes in `text` so unrecognized tokens can
/// be re-emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    /// True when the token is exactly one quoted segment.
    pub quoted: bool,
}

/// Result of scanning a candidate field at an opening bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldScan {
    /// A complete definition: bytes consumed after the opening bracket
    /// (including the closing bracket), and the body tokens in order.
    Closed {
        consumed: usize,
        tokens: Vec<RawToken>,
    },
    /// No closing bracket, or an unterminated quoted segment, before the
    /// end of input.
    Unterminated,
}

/// Scan a field body starting immediately after `[`.
pub fn scan_field(input: &str) -> FieldScan {
    let mut tokens = Vec::new();
    let mut cur = String::new();
    let mut pure_quote = false;
    let mut i = 0;

    while let Some(c) = input[i..].chars().next() {
        match c {
            ']' => {
                push_token(&mut tokens, &mut cur, &mut pure_quote);
                return FieldScan::Closed {
                    consumed: i + 1,
                    tokens,
                };
            }
            '"' => match quoted(&input[i..]) {
                Ok((rest, _)) => {
                    let len = input.len() - i - rest.len();
                    pure_quote = cur.is_empty();
                    cur.push_str(&input[i..i + len]);
                    i += len;
                }
                Err(_) => return FieldScan::Unterminated,
            },
            c if c.is_whitespace() => {
                push_token(&mut tokens, &mut cur, &mut pure_quote);
                i += c.len_utf8();
            }
            c => {
                if !cur.is_empty() {
                    pure_quote = false;
                }
                cur.push(c);
                i += c.len_utf8();
            }
        }
    }

    FieldScan::Unterminated
}

fn push_token(tokens: &mut Vec<RawToken>, cur: &mut String, pure_quote: &mut bool) {
    if !cur.is_empty() {
        tokens.push(RawToken {
            text: std::mem::take(cur),
            quoted: *pure_quote,
        });
    }
    *pure_quote = false;
}
