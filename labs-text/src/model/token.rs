use std::fmt;

use crate::letter::Letter;

/// A word: a sequence of letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    pub fn new(raw: &str) -> Self {
        Word {
            letters: raw.chars().map(Letter::new).collect(),
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The length in code points.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn starts_with_consonant(&self) -> bool {
        self.letters
            .first()
            .is_some_and(|letter| letter.is_consonant())
    }

    pub fn to_uppercase(&self) -> Self {
        Word {
            letters: self.letters.iter().map(|l| l.to_uppercase()).collect(),
        }
    }

    pub fn to_lowercase(&self) -> Self {
        Word {
            letters: self.letters.iter().map(|l| l.to_lowercase()).collect(),
        }
    }

    /// Replace every occurrence of `target`. An empty target changes
    /// nothing.
    pub fn replace(&self, target: &str, replacement: &str) -> Self {
        if target.is_empty() {
            return self.clone();
        }
        Word::new(&self.to_string().replace(target, replacement))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// A run of punctuation, or of any other characters that aren't letters or
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Punctuation {
    symbol: String,
}

impl Punctuation {
    pub fn new(symbol: impl Into<String>) -> Self {
        Punctuation {
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether this ends a sentence: it consists only of `.`, `!` and `?`.
    pub fn is_sentence_terminator(&self) -> bool {
        !self.symbol.is_empty() && self.symbol.chars().all(|c| matches!(c, '.' | '!' | '?'))
    }

    pub fn replace(&self, target: &str, replacement: &str) -> Self {
        if target.is_empty() {
            return self.clone();
        }
        Punctuation::new(self.symbol.replace(target, replacement))
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(Word),
    Punctuation(Punctuation),
}

impl Token {
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Token::Word(word) => Some(word),
            Token::Punctuation(_) => None,
        }
    }

    pub fn to_uppercase(&self) -> Self {
        match self {
            Token::Word(word) => Token::Word(word.to_uppercase()),
            // punctuation has no case
            Token::Punctuation(_) => self.clone(),
        }
    }

    pub fn to_lowercase(&self) -> Self {
        match self {
            Token::Word(word) => Token::Word(word.to_lowercase()),
            Token::Punctuation(_) => self.clone(),
        }
    }

    pub fn replace(&self, target: &str, replacement: &str) -> Self {
        match self {
            Token::Word(word) => Token::Word(word.replace(target, replacement)),
            Token::Punctuation(p) => Token::Punctuation(p.replace(target, replacement)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => fmt::Display::fmt(word, f),
            Token::Punctuation(p) => fmt::Display::fmt(p, f),
        }
    }
}
