//! The text model: a text is a list of sentences, a sentence a list of
//! tokens, and a token either a word or punctuation.
//!
//! All values are immutable; transformations return new values.
mod lexer;
mod sentence;
mod text;
mod token;

pub use sentence::Sentence;
pub use text::Text;
pub use token::{Punctuation, Token, Word};
