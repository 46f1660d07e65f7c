use std::fmt;

use super::token::{Token, Word};

const OPENERS: [char; 5] = ['(', '[', '«', '"', '“'];
const CLOSERS: [char; 11] = [',', '.', '!', '?', ':', ';', ')', ']', '»', '"', '”'];

/// A sentence: the tokens up to and including a sentence terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Sentence { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.tokens.iter().filter_map(Token::as_word)
    }

    /// Remove the words for which the predicate holds. Punctuation is never
    /// removed. Returns the number of words removed.
    pub fn remove_words_by(&mut self, mut predicate: impl FnMut(&Word) -> bool) -> usize {
        let before = self.tokens.len();
        self.tokens
            .retain(|token| !token.as_word().is_some_and(&mut predicate));
        before - self.tokens.len()
    }

    pub fn to_uppercase(&self) -> Self {
        Sentence::new(self.tokens.iter().map(Token::to_uppercase).collect())
    }

    pub fn to_lowercase(&self) -> Self {
        Sentence::new(self.tokens.iter().map(Token::to_lowercase).collect())
    }

    pub fn replace(&self, target: &str, replacement: &str) -> Self {
        Sentence::new(
            self.tokens
                .iter()
                .map(|token| token.replace(target, replacement))
                .collect(),
        )
    }
}

fn is_opener(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if OPENERS.contains(&c))
}

fn is_closing(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| CLOSERS.contains(&c))
}

impl fmt::Display for Sentence {
    /// Tokens are separated by a single space, except after an opening
    /// bracket or quote, and before closing punctuation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<String> = None;
        for token in &self.tokens {
            let current = token.to_string();
            if let Some(previous) = &previous {
                if !is_opener(previous) && !is_closing(&current) {
                    f.write_str(" ")?;
                }
            }
            f.write_str(&current)?;
            previous = Some(current);
        }
        Ok(())
    }
}
