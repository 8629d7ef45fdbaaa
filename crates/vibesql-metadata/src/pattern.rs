//! SQL LIKE pattern matching for identifier filters
//!
//! Supports wildcards:
//! - `%` matches any sequence of characters (including empty)
//! - `_` matches exactly one character
//!
//! The escape character makes the following character literal, whatever it
//! is. A pattern that ends with a bare escape character is rejected.

use log::trace;

use crate::error::{MetadataError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnySequence,
}

/// A compiled LIKE pattern.
///
/// An absent pattern is modelled as `Option<LikePattern>::None` so callers
/// can skip filtering altogether.
#[derive(Debug, Clone)]
pub struct LikePattern {
    source: String,
    tokens: Vec<Token>,
    ignore_case: bool,
}

impl LikePattern {
    /// Compile `pattern` with `escape` as the escape character
    pub fn compile(pattern: &str, escape: char) -> Result<Self> {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let token = if c == escape {
                match chars.next() {
                    Some(escaped) => Token::Literal(escaped),
                    None => {
                        return Err(MetadataError::InvalidPattern { pattern: pattern.to_string() })
                    }
                }
            } else if c == '%' {
                // Consecutive % are equivalent to one
                if tokens.last() == Some(&Token::AnySequence) {
                    continue;
                }
                Token::AnySequence
            } else if c == '_' {
                Token::AnyChar
            } else {
                Token::Literal(c)
            };
            tokens.push(token);
        }
        trace!("compiled LIKE pattern {:?} into {} tokens", pattern, tokens.len());
        Ok(LikePattern { source: pattern.to_string(), tokens, ignore_case: false })
    }

    /// Compile an optional pattern; `None` stays `None` (match everything).
    pub fn compile_optional(pattern: Option<&str>, escape: char) -> Result<Option<Self>> {
        pattern.map(|p| Self::compile(p, escape)).transpose()
    }

    /// Compare literal characters without regard to case
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// The pattern text as supplied
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether `text` matches the pattern
    pub fn matches(&self, text: &str) -> bool {
        let text: Vec<char> = text.chars().collect();
        self.match_from(&text, 0, 0)
    }

    fn match_from(&self, text: &[char], text_pos: usize, token_pos: usize) -> bool {
        // If we've consumed the entire pattern, text must be consumed too
        let Some(token) = self.tokens.get(token_pos) else {
            return text_pos >= text.len();
        };

        match *token {
            Token::AnySequence => {
                // Trailing % matches whatever remains
                if token_pos + 1 == self.tokens.len() {
                    return true;
                }
                (text_pos..=text.len()).any(|pos| self.match_from(text, pos, token_pos + 1))
            }
            Token::AnyChar => {
                text_pos < text.len() && self.match_from(text, text_pos + 1, token_pos + 1)
            }
            Token::Literal(expected) => {
                text_pos < text.len()
                    && self.chars_equal(text[text_pos], expected)
                    && self.match_from(text, text_pos + 1, token_pos + 1)
            }
        }
    }

    fn chars_equal(&self, a: char, b: char) -> bool {
        a == b || (self.ignore_case && a.to_uppercase().eq(b.to_uppercase()))
    }
}
