//! Splits a graph script into tokens.
//!
//! Whitespace and `#` comments are skipped. Anything the lexer does not
//! recognize becomes an `Invalid` token so that every bad spot can be
//! reported at once.

use logos::{Lexer, Logos};

use crate::document::{Span, Spanned};

#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*)")]
pub enum Token<'src> {
    // Reserved keywords
    #[token("vertex")]
    Vertex,
    #[token("edge")]
    Edge,
    #[token("print")]
    Print,

    // A bare vertex label such as `A`, `node_1` or `v2.0`.
    #[regex(r"[A-Za-z0-9_][A-Za-z0-9_.\-]*", priority = 2)]
    Word(&'src str),

    // A non-empty label surrounded by double quotes, which may contain spaces.
    #[regex(r#""[^"\n]+""#, parse_quoted)]
    Quoted(&'src str),

    #[regex(r#"[^\s#"]+"#, priority = 1)]
    Invalid(&'src str),
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Vertex => write!(f, "vertex"),
            Token::Edge => write!(f, "edge"),
            Token::Print => write!(f, "print"),
            Token::Word(word) => write!(f, "{word}"),
            Token::Quoted(text) => write!(f, "\"{text}\""),
            Token::Invalid(text) => write!(f, "{text}"),
        }
    }
}

pub fn tokenize(src: &str) -> Vec<Spanned<Token<'_>>> {
    let mut lexer = Token::lexer(src);
    let mut tokens = vec![];

    while let Some(result) = lexer.next() {
        // A stray quote, such as an empty or unterminated label, matches no pattern.
        let token = result.unwrap_or_else(|_| Token::Invalid(lexer.slice()));
        tokens.push(Spanned::new(token, Span::from(lexer.span())));
    }

    tokens
}

fn parse_quoted<'src>(lex: &Lexer<'src, Token<'src>>) -> &'src str {
    // Strip the surrounding quotes.
    &lex.slice()[1..lex.slice().len() - 1]
}
