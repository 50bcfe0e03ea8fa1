//! Token types for text analysis.
//!
//! A [`Token`] is a single unit of text after tokenization, carrying its
//! position in the stream and its byte offsets in the original text.
//!
//! # Examples
//!
//! ```
//! use shelver::analysis::token::Token;
//!
//! let token = Token::with_offsets("invoice", 0, 0, 7);
//! assert_eq!(token.text, "invoice");
//! assert_eq!(token.position, 0);
//! assert_eq!(token.end_offset, 7);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
    /// Byte offset where the token starts in the original text.
    pub start_offset: usize,
    /// Byte offset where the token ends in the original text.
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// Type alias for a boxed iterator of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
