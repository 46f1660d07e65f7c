use std::fmt;

use crate::whitespace::normalize_whitespace;

use super::lexer::{lexer, Lexeme};
use super::sentence::Sentence;
use super::token::{Punctuation, Token, Word};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    sentences: Vec<Sentence>,
}

impl Text {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Text { sentences }
    }

    /// Split raw text into sentences of words and punctuation.
    ///
    /// Whitespace is normalized first and never becomes a token. A sentence
    /// ends right after a terminating punctuation run such as `.` or `?!`;
    /// whatever follows the last terminator forms a final sentence of its
    /// own. Characters that are neither letters, punctuation nor whitespace
    /// are kept as punctuation tokens.
    pub fn parse(raw: &str) -> Self {
        let source = normalize_whitespace(raw);
        let mut sentences = Vec::new();
        let mut current = Vec::new();
        let mut lex = lexer(&source);
        while let Some(lexeme) = lex.next() {
            let slice = lex.slice();
            match lexeme {
                Ok(Lexeme::Word) => current.push(Token::Word(Word::new(slice))),
                Ok(Lexeme::Punctuation) => {
                    let punctuation = Punctuation::new(slice);
                    let terminates = punctuation.is_sentence_terminator();
                    current.push(Token::Punctuation(punctuation));
                    if terminates {
                        sentences.push(Sentence::new(std::mem::take(&mut current)));
                    }
                }
                Ok(Lexeme::Whitespace) => {}
                Ok(Lexeme::Other) | Err(_) => {
                    current.push(Token::Punctuation(Punctuation::new(slice)))
                }
            }
        }
        if !current.is_empty() {
            sentences.push(Sentence::new(current));
        }
        Text { sentences }
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.sentences.iter().flat_map(Sentence::words)
    }

    /// Remove every word the predicate holds for, in all sentences. Returns
    /// the total number of words removed.
    pub fn remove_words_by(&mut self, mut predicate: impl FnMut(&Word) -> bool) -> usize {
        self.sentences
            .iter_mut()
            .map(|sentence| sentence.remove_words_by(&mut predicate))
            .sum()
    }

    pub fn to_uppercase(&self) -> Self {
        Text::new(self.sentences.iter().map(Sentence::to_uppercase).collect())
    }

    pub fn to_lowercase(&self) -> Self {
        Text::new(self.sentences.iter().map(Sentence::to_lowercase).collect())
    }

    pub fn replace(&self, target: &str, replacement: &str) -> Self {
        Text::new(
            self.sentences
                .iter()
                .map(|sentence| sentence.replace(target, replacement))
                .collect(),
        )
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .sentences
            .iter()
            .map(Sentence::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&normalize_whitespace(&joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentences() {
        let text = Text::parse("Привіт, світе! Як справи?  Добре");
        assert_eq!(text.sentences().len(), 3);
        assert_eq!(text.sentences()[0].to_string(), "Привіт, світе!");
        assert_eq!(text.sentences()[1].to_string(), "Як справи?");
        assert_eq!(text.sentences()[2].to_string(), "Добре");
    }

    #[test]
    fn test_parse_empty() {
        let text = Text::parse(" \t\n ");
        assert!(text.sentences().is_empty());
        assert_eq!(text.to_string(), "");
    }

    #[test]
    fn test_digits_become_punctuation() {
        let text = Text::parse("Рівно 4 години.");
        let tokens = text.sentences()[0].tokens();
        assert_eq!(tokens[1], Token::Punctuation(Punctuation::new("4")));
        assert_eq!(text.words().count(), 2);
        assert_eq!(text.to_string(), "Рівно 4 години.");
    }

    #[test]
    fn test_transformations_return_new_values() {
        let text = Text::parse("Мама мила раму.");
        assert_eq!(text.to_uppercase().to_string(), "МАМА МИЛА РАМУ.");
        assert_eq!(text.to_lowercase().to_string(), "мама мила раму.");
        assert_eq!(text.replace("ма", "па").to_string(), "Мапа мила раму.");
        assert_eq!(text.to_string(), "Мама мила раму.");
    }

    #[test]
    fn test_remove_words_by_counts_across_sentences() {
        let mut text = Text::parse("one two. three four five!");
        let removed = text.remove_words_by(|word| word.len() == 4);
        assert_eq!(removed, 2);
        assert_eq!(text.to_string(), "one two. three!");
    }
}
