//! Text analysis for filenames.
//!
//! Filenames are treated as free text: the tokenizer splits them on
//! non-alphanumeric boundaries so `"invoice_2023.pdf"` yields the tokens
//! `invoice`, `2023`, `pdf`. The resulting token stream feeds the TF-IDF
//! vectorizer in [`crate::ml`].

pub mod token;
pub mod tokenizer;

pub use token::{Token, TokenStream};
pub use tokenizer::{RegexTokenizer, Tokenizer};
