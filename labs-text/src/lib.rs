//! Text exercises: a word removal filter working directly on the text, and
//! a text model that splits text into sentences, words and punctuation.
mod error;
mod filter;
mod letter;
mod model;
mod whitespace;

pub use error::{Error, Result};
pub use filter::{remove_words, Filtered};
pub use letter::Letter;
pub use model::{Punctuation, Sentence, Text, Token, Word};
pub use whitespace::normalize_whitespace;
