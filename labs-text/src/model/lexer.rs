use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme {
    #[regex(r"\p{L}+(['’]\p{L}+)*")]
    Word,
    #[regex(r#"[,.!?:;\-()\[\]«»"“”]+"#)]
    Punctuation,
    #[regex(r"\s+")]
    Whitespace,
    // anything else, digits for instance, is kept as-is
    #[regex(r#"[^\p{L}\s,.!?:;\-()\[\]«»"“”]+"#)]
    Other,
}

pub(crate) fn lexer(input: &str) -> Lexer<'_, Lexeme> {
    Lexeme::lexer(input)
}
