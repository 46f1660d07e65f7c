use std::fmt;

// Ukrainian and English vowels, lowercase.
const VOWELS: &str = "аеєиіїоуюяaeiou";

/// A single code point of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    pub fn new(c: char) -> Self {
        Letter(c)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_letter(self) -> bool {
        self.0.is_alphabetic()
    }

    pub fn is_vowel(self) -> bool {
        self.is_letter() && VOWELS.contains(single_char(self.0.to_lowercase(), self.0))
    }

    pub fn is_consonant(self) -> bool {
        self.is_letter() && !self.is_vowel()
    }

    pub fn to_uppercase(self) -> Self {
        Letter(single_char(self.0.to_uppercase(), self.0))
    }

    pub fn to_lowercase(self) -> Self {
        Letter(single_char(self.0.to_lowercase(), self.0))
    }
}

// Case mappings that expand to several characters (like ß to SS) leave the
// character as it is.
fn single_char(mut mapped: impl Iterator<Item = char>, original: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => original,
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
